// src/generator/search.rs

use crate::generator::{is_state_valid, reconcile_doors, GenerationError, GeneratorConfig, ASPECT_TOLERANCE, MIN_DEPTH};
use crate::grid::{Door, GridBounds, GridCoord};
use crate::layout::{HallwayKind, Scene};
use crate::rooms::RoomPrototype;
use crate::utils::shuffled;
use log::{trace, warn};
use rand::Rng;
use std::collections::BTreeSet;

/// Everything one branch of the search knows about the dungeon so far.
///
/// States are never mutated in place; each candidate placement produces a
/// fresh copy, so abandoning a branch needs no undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Cells claimed by a room on this branch.
    pub occupied: BTreeSet<GridCoord>,
    /// Doors still waiting for a neighbour, already reconciled.
    pub open_doors: Vec<Door>,
    /// Rooms placed so far, counting the start room.
    pub depth: usize,
    pub bounds: GridBounds,
    /// Set once the target room is on this branch.
    pub ended: bool,
}

impl SearchState {
    /// State right after the start room is put down at the origin.
    pub fn initial(start: &RoomPrototype) -> Self {
        SearchState {
            occupied: BTreeSet::from([GridCoord::ORIGIN]),
            open_doors: reconcile_doors(&start.doors_at(GridCoord::ORIGIN)),
            depth: 1,
            bounds: GridBounds::at_origin(),
            ended: false,
        }
    }

    /// The state after putting `room` at `at`, or `None` if that leaves an
    /// open door facing a taken cell.
    pub fn place(&self, room: &RoomPrototype, at: GridCoord, is_target: bool) -> Option<SearchState> {
        let mut occupied = self.occupied.clone();
        if !occupied.insert(at) {
            return None;
        }

        let mut doors = self.open_doors.clone();
        doors.extend(room.doors_at(at));
        let open_doors = reconcile_doors(&doors);
        if !is_state_valid(&open_doors, &occupied) {
            return None;
        }

        Some(SearchState {
            occupied,
            open_doors,
            depth: self.depth + 1,
            bounds: self.bounds.expanded(at),
            ended: self.ended || is_target,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.open_doors.is_empty() && self.depth > MIN_DEPTH && self.ended
    }
}

/// Depth-first backtracking over (open door, room prototype) pairs.
///
/// One `Search` serves one generation attempt: it owns the iteration counter
/// and commits rooms to the scene while the winning branch unwinds, so the
/// deepest room is placed first.
pub struct Search<'a, R: Rng + ?Sized, S: Scene> {
    config: GeneratorConfig,
    pool: &'a [RoomPrototype],
    target: usize,
    rng: &'a mut R,
    scene: &'a mut S,
    handles: &'a mut Vec<S::Handle>,
    iterations: usize,
    rooms_placed: usize,
}

impl<'a, R: Rng + ?Sized, S: Scene> Search<'a, R, S> {
    /// `target` indexes into `pool`; every pool entry sharing its name is
    /// treated as the target. Handles of committed objects are pushed
    /// onto `handles`.
    pub fn new(
        config: GeneratorConfig,
        pool: &'a [RoomPrototype],
        target: usize,
        rng: &'a mut R,
        scene: &'a mut S,
        handles: &'a mut Vec<S::Handle>,
    ) -> Self {
        Search {
            config,
            pool,
            target,
            rng,
            scene,
            handles,
            iterations: 0,
            rooms_placed: 0,
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Rooms committed to the scene by this search (the start room excluded).
    pub fn rooms_placed(&self) -> usize {
        self.rooms_placed
    }

    /// Searches below `state`. `Ok(false)` means this branch is a dead end;
    /// the only error is running out of iterations, which ends the attempt.
    pub fn run(&mut self, state: &SearchState) -> Result<bool, GenerationError> {
        self.iterations += 1;
        if self.iterations > self.config.threshold {
            warn!(
                "Search aborted after {} iterations at depth {}",
                self.config.threshold, state.depth
            );
            return Err(GenerationError::IterationLimitExceeded {
                limit: self.config.threshold,
            });
        }
        if state.depth > self.config.max_size {
            return Ok(false);
        }
        if state.bounds.aspect_skew() > ASPECT_TOLERANCE {
            return Ok(false);
        }
        if state.open_doors.is_empty() {
            return Ok(state.is_complete());
        }

        let pool = self.pool;
        let target_name = pool.get(self.target).map(|t| t.name.as_str());
        let doors = shuffled(&state.open_doors, &mut *self.rng);
        let indices: Vec<usize> = (0..pool.len()).collect();
        let order = shuffled(&indices, &mut *self.rng);

        for door in &doors {
            let wanted = door.matching_direction();
            let at = door.neighbour_coord();
            for &index in &order {
                let room = &pool[index];
                // Prototypes are identified by name, so copies of the target count too.
                let is_target = Some(room.name.as_str()) == target_name;
                if is_target && state.ended {
                    continue;
                }
                if !room.has_door_facing(wanted) {
                    continue;
                }
                let Some(next) = state.place(room, at, is_target) else {
                    continue;
                };
                if self.run(&next)? {
                    self.commit(room, at);
                    return Ok(true);
                }
            }
        }

        trace!(
            "Backtracking from depth {} with {} open doors",
            state.depth,
            state.open_doors.len()
        );
        Ok(false)
    }

    fn commit(&mut self, room: &RoomPrototype, at: GridCoord) {
        let handle = self.scene.place_room(room, at);
        self.handles.push(handle);
        self.rooms_placed += 1;
        for door in room.doors_at(at) {
            if let Some(kind) = HallwayKind::for_door(&door) {
                let handle = self.scene.place_hallway(kind, &door);
                self.handles.push(handle);
            }
        }
    }
}
