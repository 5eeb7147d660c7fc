//! Player position inside a growth event and its reconciliation.
//!
//! A [`Position`] carries two views of the same progress: the structured view
//! (round, stage, points inside the stage) and the lifetime `total_points`.
//! A form may let the player edit either view, so [`reconcile`] rebuilds the
//! other one from whichever was edited last.

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;
use crate::reward::{ROUND_COUNT, RewardTable, STAGE_COUNT};

/// Where a player stands in the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Current round, `1..=4`.
    pub round: u32,
    /// Current stage within the round, `1..=5`.
    pub stage: u32,
    /// Points earned inside the current stage, at most the stage threshold.
    pub round_points: u32,
    /// Lifetime points, capped at [`RewardTable::total_cap`].
    pub total_points: u32,
}

/// Which half of a [`Position`] the caller edited last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSource {
    /// `total_points` is authoritative; round/stage/points are derived.
    TotalPoints,
    /// Round, stage and points are authoritative; `total_points` is derived.
    StageProgress,
}

impl Position {
    /// Event start: round 1, stage 1, nothing earned.
    pub const fn start() -> Self {
        Self {
            round: 1,
            stage: 1,
            round_points: 0,
            total_points: 0,
        }
    }

    /// Every stage of every round cleared.
    pub fn terminal(table: &RewardTable) -> Self {
        Self {
            round: ROUND_COUNT,
            stage: STAGE_COUNT,
            round_points: table.threshold(STAGE_COUNT),
            total_points: table.total_cap(),
        }
    }

    /// True once the final stage of the final round is full, or the lifetime
    /// cap has been hit.
    pub fn is_terminal(&self, table: &RewardTable) -> bool {
        self.total_points >= table.total_cap()
            || (self.round == ROUND_COUNT
                && self.stage == STAGE_COUNT
                && self.round_points >= table.threshold(STAGE_COUNT))
    }

    /// Range-check round, stage and stage points, then check that
    /// `total_points` agrees with them.
    pub fn validate(&self, table: &RewardTable) -> Result<(), ProgressError> {
        let expected = self.stage_progress_total(table)?;
        if self.total_points != expected {
            return Err(ProgressError::InconsistentTotal {
                total_points: self.total_points,
                expected,
            });
        }
        Ok(())
    }

    /// Lifetime total implied by round, stage and stage points, capped.
    fn stage_progress_total(&self, table: &RewardTable) -> Result<u32, ProgressError> {
        if !(1..=ROUND_COUNT).contains(&self.round) {
            return Err(ProgressError::RoundOutOfRange {
                round: self.round,
                max: ROUND_COUNT,
            });
        }
        if !(1..=STAGE_COUNT).contains(&self.stage) {
            return Err(ProgressError::StageOutOfRange {
                stage: self.stage,
                max: STAGE_COUNT,
            });
        }
        let threshold = table.threshold(self.stage);
        if self.round_points > threshold {
            return Err(ProgressError::StagePointsOverThreshold {
                stage: self.stage,
                points: self.round_points,
                threshold,
            });
        }

        let total = (self.round - 1) * table.points_per_round()
            + table.stage_start(self.stage)
            + self.round_points;
        Ok(total.min(table.total_cap()))
    }

    /// Derive the structured view from a lifetime point total.
    pub fn from_total_points(total_points: u32, table: &RewardTable) -> Result<Self, ProgressError> {
        table.validate()?;
        if total_points >= table.total_cap() {
            return Ok(Self::terminal(table));
        }

        let per_round = table.points_per_round();
        let round = total_points / per_round + 1;
        let in_round = total_points % per_round;
        let stage = (1..=STAGE_COUNT)
            .rev()
            .find(|&s| table.stage_start(s) <= in_round)
            .unwrap_or(1);

        Ok(Self {
            round,
            stage,
            round_points: in_round - table.stage_start(stage),
            total_points,
        })
    }

    /// Derive the lifetime total from round, stage and stage points.
    pub fn from_stage_progress(
        round: u32,
        stage: u32,
        round_points: u32,
        table: &RewardTable,
    ) -> Result<Self, ProgressError> {
        table.validate()?;
        let mut position = Self {
            round,
            stage,
            round_points,
            total_points: 0,
        };
        position.total_points = position.stage_progress_total(table)?;
        Ok(position)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// Rebuild a canonical position from the half named by `source`.
pub fn reconcile(
    position: Position,
    source: PositionSource,
    table: &RewardTable,
) -> Result<Position, ProgressError> {
    match source {
        PositionSource::TotalPoints => Position::from_total_points(position.total_points, table),
        PositionSource::StageProgress => Position::from_stage_progress(
            position.round,
            position.stage,
            position.round_points,
            table,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RewardTable {
        RewardTable::standard()
    }

    #[test]
    fn start_is_valid_and_not_terminal() {
        let start = Position::start();
        assert!(start.validate(&table()).is_ok());
        assert!(!start.is_terminal(&table()));
        assert_eq!(Position::default(), start);
    }

    #[test]
    fn from_total_inside_first_stage() {
        let p = Position::from_total_points(499, &table()).unwrap();
        assert_eq!((p.round, p.stage, p.round_points, p.total_points), (1, 1, 499, 499));
    }

    #[test]
    fn from_total_picks_stage_by_cumulative_start() {
        let p = Position::from_total_points(500, &table()).unwrap();
        assert_eq!((p.round, p.stage, p.round_points), (1, 2, 0));

        let p = Position::from_total_points(2500, &table()).unwrap();
        assert_eq!((p.round, p.stage, p.round_points), (1, 4, 500));

        let p = Position::from_total_points(3999, &table()).unwrap();
        assert_eq!((p.round, p.stage, p.round_points), (1, 5, 999));
    }

    #[test]
    fn from_total_rolls_into_next_round() {
        let p = Position::from_total_points(4000, &table()).unwrap();
        assert_eq!((p.round, p.stage, p.round_points), (2, 1, 0));

        let p = Position::from_total_points(13_250, &table()).unwrap();
        assert_eq!((p.round, p.stage, p.round_points), (4, 3, 250));
    }

    #[test]
    fn from_total_at_or_above_cap_is_terminal() {
        let terminal = Position::terminal(&table());
        assert_eq!(Position::from_total_points(16_000, &table()).unwrap(), terminal);
        assert_eq!(Position::from_total_points(999_999, &table()).unwrap(), terminal);
        assert_eq!(
            (terminal.round, terminal.stage, terminal.round_points, terminal.total_points),
            (4, 5, 1000, 16_000)
        );
        assert!(terminal.is_terminal(&table()));
    }

    #[test]
    fn from_stage_progress_computes_total() {
        let p = Position::from_stage_progress(3, 4, 120, &table()).unwrap();
        assert_eq!(p.total_points, 2 * 4000 + 2000 + 120);
    }

    #[test]
    fn from_stage_progress_caps_total() {
        let p = Position::from_stage_progress(4, 5, 1000, &table()).unwrap();
        assert_eq!(p.total_points, 16_000);
    }

    #[test]
    fn from_stage_progress_rejects_bad_ranges() {
        assert_eq!(
            Position::from_stage_progress(0, 1, 0, &table()),
            Err(ProgressError::RoundOutOfRange { round: 0, max: 4 })
        );
        assert_eq!(
            Position::from_stage_progress(5, 1, 0, &table()),
            Err(ProgressError::RoundOutOfRange { round: 5, max: 4 })
        );
        assert_eq!(
            Position::from_stage_progress(1, 6, 0, &table()),
            Err(ProgressError::StageOutOfRange { stage: 6, max: 5 })
        );
        assert_eq!(
            Position::from_stage_progress(1, 1, 501, &table()),
            Err(ProgressError::StagePointsOverThreshold {
                stage: 1,
                points: 501,
                threshold: 500,
            })
        );
    }

    #[test]
    fn validate_rejects_disagreeing_total() {
        let mismatched = Position {
            total_points: 15_990,
            ..Position::start()
        };
        assert_eq!(
            mismatched.validate(&table()),
            Err(ProgressError::InconsistentTotal {
                total_points: 15_990,
                expected: 0,
            })
        );
        assert!(Position::terminal(&table()).validate(&table()).is_ok());
        assert!(Position::from_total_points(8765, &table()).unwrap().validate(&table()).is_ok());
    }

    #[test]
    fn reconcile_round_trips_between_views() {
        for total in [0, 35, 500, 999, 1000, 3999, 4000, 8765, 15_999] {
            let from_total = Position::from_total_points(total, &table()).unwrap();
            let back = reconcile(from_total, PositionSource::StageProgress, &table()).unwrap();
            assert_eq!(back, from_total, "total {total}");
        }
    }

    #[test]
    fn reconcile_ignores_stale_half() {
        let stale = Position {
            round: 2,
            stage: 3,
            round_points: 10,
            total_points: 600,
        };
        let by_total = reconcile(stale, PositionSource::TotalPoints, &table()).unwrap();
        assert_eq!((by_total.round, by_total.stage, by_total.round_points), (1, 2, 100));

        let by_stage = reconcile(stale, PositionSource::StageProgress, &table()).unwrap();
        assert_eq!(by_stage.total_points, 4000 + 1000 + 10);
    }
}
