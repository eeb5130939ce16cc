//! Collision checker: pure placement legality over a candidate cell set.

use crate::core::playfield::Playfield;
use crate::types::Coor;

/// Whether every candidate coordinate can hold a piece cell.
///
/// A candidate fails when it is off the stage entirely, or occupied by
/// something that is not part of `current` (the piece's own present cells).
/// The own-shape exemption is what lets a piece translate or rotate into
/// cells it already covers.
pub fn can_place(field: &Playfield, candidate: &[Coor], current: &[Coor]) -> bool {
    candidate.iter().all(|&coor| {
        field.contains(coor) && (current.contains(&coor) || !field.is_occupied(coor))
    })
}
