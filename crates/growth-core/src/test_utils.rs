//! Shared helpers for tests and benchmarks.

use crate::position::Position;
use crate::reward::RewardTable;

pub fn standard() -> RewardTable {
    RewardTable::standard()
}

/// Canonical position for a lifetime point total on the standard table.
pub fn at_total(total_points: u32) -> Position {
    Position::from_total_points(total_points, &standard())
        .expect("standard table is valid")
}

/// Canonical position from round/stage/points on the standard table.
pub fn at_stage(round: u32, stage: u32, round_points: u32) -> Position {
    Position::from_stage_progress(round, stage, round_points, &standard())
        .expect("position in range")
}

/// Every canonical position whose total is a multiple of `step`, from the
/// start up to (but excluding) the lifetime cap.
pub fn positions_every(step: u32) -> Vec<Position> {
    let cap = standard().total_cap();
    (0..cap).step_by(step as usize).map(at_total).collect()
}
