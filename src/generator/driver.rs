// src/generator/driver.rs

use crate::generator::{GenerationError, GeneratorConfig, Search, SearchState};
use crate::grid::GridCoord;
use crate::layout::{HallwayKind, Scene};
use crate::rooms::{RoomCatalog, RoomPrototype};
use log::{debug, info, warn};
use rand::Rng;

/// Counters from one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Rooms committed to the scene, start room included.
    pub rooms_placed: usize,
    /// Search invocations spent.
    pub iterations: usize,
}

/// How an attempt ended when it did not blow the iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A layout was found and committed.
    Generated(Report),
    /// Every candidate was tried and none worked. Only the start room is placed.
    Exhausted(Report),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Generated(_))
    }

    pub fn report(&self) -> Report {
        match self {
            Outcome::Generated(report) | Outcome::Exhausted(report) => *report,
        }
    }
}

/// Runs whole generation attempts against a [`Scene`].
///
/// The generator keeps the handle of everything it placed so the next call to
/// [`generate`](DungeonGenerator::generate) can clear the scene first.
pub struct DungeonGenerator<S: Scene> {
    config: GeneratorConfig,
    start: RoomPrototype,
    target: RoomPrototype,
    rooms: Vec<RoomPrototype>,
    scene: S,
    handles: Vec<S::Handle>,
}

impl<S: Scene> DungeonGenerator<S> {
    pub fn new(config: GeneratorConfig, catalog: RoomCatalog, scene: S) -> Result<Self, GenerationError> {
        catalog.validate()?;
        Ok(DungeonGenerator {
            config,
            start: catalog.start,
            target: catalog.target,
            rooms: catalog.rooms,
            scene,
            handles: Vec::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The prototype pool the search draws from.
    pub fn rooms(&self) -> &[RoomPrototype] {
        &self.rooms
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn into_scene(self) -> S {
        self.scene
    }

    /// Objects currently owned by this generator in the scene.
    pub fn placed_count(&self) -> usize {
        self.handles.len()
    }

    /// Clears the previous dungeon and searches for a new one.
    ///
    /// `Ok(Outcome::Exhausted)` is an ordinary result. An error means the
    /// iteration budget ran out; whatever the search had not yet committed is
    /// lost, and only the start room is left in the scene.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Outcome, GenerationError> {
        debug!("Disposing {} objects from previous generation", self.handles.len());
        for handle in self.handles.drain(..) {
            self.scene.dispose(handle);
        }

        let start_handle = self.scene.place_room(&self.start, GridCoord::ORIGIN);
        self.handles.push(start_handle);

        let target = match self.rooms.iter().position(|r| *r == self.target) {
            Some(index) => index,
            None => {
                self.rooms.push(self.target.clone());
                self.rooms.len() - 1
            }
        };

        let initial = SearchState::initial(&self.start);
        let mut search = Search::new(
            self.config,
            &self.rooms,
            target,
            rng,
            &mut self.scene,
            &mut self.handles,
        );
        let found = search.run(&initial);
        let report = Report {
            rooms_placed: search.rooms_placed() + 1,
            iterations: search.iterations(),
        };

        match found {
            Ok(true) => {
                for door in self.start.doors_at(GridCoord::ORIGIN) {
                    if let Some(kind) = HallwayKind::for_door(&door) {
                        let handle = self.scene.place_hallway(kind, &door);
                        self.handles.push(handle);
                    }
                }
                info!(
                    "Generated dungeon with {} rooms in {} iterations",
                    report.rooms_placed, report.iterations
                );
                Ok(Outcome::Generated(report))
            }
            Ok(false) => {
                info!("No layout found after {} iterations", report.iterations);
                Ok(Outcome::Exhausted(report))
            }
            Err(err) => {
                warn!("Generation aborted: {}", err);
                Err(err)
            }
        }
    }
}
