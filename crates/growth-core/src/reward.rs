//! Static reward configuration and the reward accumulator.
//!
//! A [`RewardTable`] describes one growth event: how many points each stage
//! needs, what each stage pays out, and the bonus granted for finishing a
//! round. The built-in table is [`RewardTable::standard`]; other tables can
//! be loaded from data files by `growth-data`.

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// Number of rounds in an event. The last round is terminal.
pub const ROUND_COUNT: u32 = 4;

/// Number of stages in every round.
pub const STAGE_COUNT: u32 = 5;

// ---------------------------------------------------------------------------
// Reward records
// ---------------------------------------------------------------------------

/// Payout for completing a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageReward {
    pub hammers: u32,
    pub eggs: u32,
    pub gems: u32,
}

/// Bonus for completing a round. Never granted for the final round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundReward {
    pub tickets: u32,
    pub hammers: u32,
    pub gems: u32,
}

/// Running totals of everything earned during a simulation. Counters only
/// ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub hammers: u32,
    pub eggs: u32,
    pub gems: u32,
    pub tickets: u32,
}

impl Rewards {
    pub fn add_stage(&mut self, reward: &StageReward) {
        self.hammers = self.hammers.saturating_add(reward.hammers);
        self.eggs = self.eggs.saturating_add(reward.eggs);
        self.gems = self.gems.saturating_add(reward.gems);
    }

    pub fn add_round(&mut self, reward: &RoundReward) {
        self.tickets = self.tickets.saturating_add(reward.tickets);
        self.hammers = self.hammers.saturating_add(reward.hammers);
        self.gems = self.gems.saturating_add(reward.gems);
    }

    /// True when every counter in `self` is at least the matching counter in
    /// `other`.
    pub fn dominates(&self, other: &Rewards) -> bool {
        self.hammers >= other.hammers
            && self.eggs >= other.eggs
            && self.gems >= other.gems
            && self.tickets >= other.tickets
    }
}

// ---------------------------------------------------------------------------
// Reward table
// ---------------------------------------------------------------------------

/// Point thresholds and payouts for one growth event. Immutable once built.
///
/// Stage indices used by the accessors are 1-based, matching how players
/// count stages. Callers validate indices first (see
/// [`crate::position::Position::validate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Points required to clear each stage, in stage order.
    pub stage_points: [u32; STAGE_COUNT as usize],
    /// Payout for clearing each stage, in stage order.
    pub stage_rewards: [StageReward; STAGE_COUNT as usize],
    /// Bonus for clearing every stage of a non-final round.
    pub round_reward: RoundReward,
}

impl RewardTable {
    /// The Pet Growth Event table.
    pub const fn standard() -> Self {
        const fn stage(eggs: u32) -> StageReward {
            StageReward {
                hammers: 100,
                eggs,
                gems: 100,
            }
        }

        Self {
            stage_points: [500, 500, 1000, 1000, 1000],
            stage_rewards: [stage(30), stage(60), stage(90), stage(120), stage(200)],
            round_reward: RoundReward {
                tickets: 2,
                hammers: 3000,
                gems: 1000,
            },
        }
    }

    /// Check that every stage needs points and the totals fit in `u32`.
    pub fn validate(&self) -> Result<(), ProgressError> {
        for (i, &points) in self.stage_points.iter().enumerate() {
            if points == 0 {
                return Err(ProgressError::ZeroThreshold {
                    stage: i as u32 + 1,
                });
            }
        }
        let per_round = self
            .stage_points
            .iter()
            .try_fold(0u32, |acc, &p| acc.checked_add(p))
            .ok_or(ProgressError::ThresholdOverflow)?;
        per_round
            .checked_mul(ROUND_COUNT)
            .ok_or(ProgressError::ThresholdOverflow)?;
        Ok(())
    }

    /// Points needed to clear `stage`.
    pub fn threshold(&self, stage: u32) -> u32 {
        self.stage_points[stage as usize - 1]
    }

    /// Payout for clearing `stage`.
    pub fn stage_reward(&self, stage: u32) -> &StageReward {
        &self.stage_rewards[stage as usize - 1]
    }

    /// Points accumulated inside a round before `stage` begins.
    pub fn stage_start(&self, stage: u32) -> u32 {
        self.stage_points[..stage as usize - 1].iter().sum()
    }

    /// Points needed to clear a whole round (4000 for the standard table).
    pub fn points_per_round(&self) -> u32 {
        self.stage_points.iter().sum()
    }

    /// Lifetime point cap: every round cleared (16000 for the standard table).
    pub fn total_cap(&self) -> u32 {
        self.points_per_round() * ROUND_COUNT
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_values() {
        let table = RewardTable::standard();
        assert_eq!(table.threshold(1), 500);
        assert_eq!(table.threshold(5), 1000);
        assert_eq!(table.stage_reward(4).eggs, 120);
        assert_eq!(table.stage_reward(5).eggs, 200);
        assert_eq!(table.round_reward.tickets, 2);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn derived_totals() {
        let table = RewardTable::standard();
        assert_eq!(table.points_per_round(), 4000);
        assert_eq!(table.total_cap(), 16000);
        assert_eq!(table.stage_start(1), 0);
        assert_eq!(table.stage_start(2), 500);
        assert_eq!(table.stage_start(3), 1000);
        assert_eq!(table.stage_start(5), 3000);
    }

    #[test]
    fn zero_threshold_rejected() {
        let mut table = RewardTable::standard();
        table.stage_points[2] = 0;
        assert_eq!(
            table.validate(),
            Err(ProgressError::ZeroThreshold { stage: 3 })
        );
    }

    #[test]
    fn oversized_thresholds_rejected() {
        let mut table = RewardTable::standard();
        table.stage_points = [u32::MAX / 4; 5];
        assert_eq!(table.validate(), Err(ProgressError::ThresholdOverflow));
    }

    #[test]
    fn rewards_accumulate() {
        let table = RewardTable::standard();
        let mut rewards = Rewards::default();
        rewards.add_stage(table.stage_reward(1));
        rewards.add_stage(table.stage_reward(2));
        rewards.add_round(&table.round_reward);
        assert_eq!(
            rewards,
            Rewards {
                hammers: 3200,
                eggs: 90,
                gems: 1200,
                tickets: 2,
            }
        );
    }

    #[test]
    fn dominates_is_componentwise() {
        let small = Rewards {
            hammers: 1,
            eggs: 1,
            gems: 1,
            tickets: 0,
        };
        let big = Rewards {
            tickets: 1,
            ..small
        };
        assert!(big.dominates(&small));
        assert!(!small.dominates(&big));
        assert!(small.dominates(&small));
    }
}
