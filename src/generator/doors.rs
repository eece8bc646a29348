// src/generator/doors.rs
// Open-door bookkeeping shared by every search branch.

use crate::grid::{Door, GridCoord};
use std::collections::BTreeSet;

/// Drops every door whose opposite end is also in `doors`.
///
/// Pairwise scan; open-door lists stay short. Prototype validation rules out
/// the same door appearing twice, so a match is always a single pair.
pub fn reconcile_doors(doors: &[Door]) -> Vec<Door> {
    debug_assert!(
        doors.iter().enumerate().all(|(i, d)| !doors[..i].contains(d)),
        "duplicate door in open list"
    );
    doors
        .iter()
        .filter(|door| !doors.iter().any(|other| door.is_matching(other)))
        .copied()
        .collect()
}

/// False if some open door leads into a cell that is already taken.
///
/// `open` must already be reconciled. Such a door can never be satisfied, so
/// the whole branch is dead.
pub fn is_state_valid(open: &[Door], occupied: &BTreeSet<GridCoord>) -> bool {
    open.iter().all(|door| !occupied.contains(&door.neighbour_coord()))
}
