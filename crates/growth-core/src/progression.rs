//! Event progression simulator.
//!
//! Spending eggs opens batches; every batch awards [`BATCH_POINTS`] points.
//! Points fill the current stage, clearing a stage pays its reward (whose eggs
//! go straight back into the pool), and clearing the fifth stage of a round
//! pays the round bonus and moves on to the next round. The fifth stage of the
//! final round is terminal: once it fills, further points earn nothing.
//!
//! Two questions are answered on top of the same cascade:
//!
//! - [`advance`]: where does a player end up with a given egg budget?
//! - [`min_resource_to_reach`]: how many eggs must a player acquire to reach a
//!   lifetime point target?

use log::debug;
use serde::{Deserialize, Serialize};

use crate::batch::{BATCH_COST, BATCH_POINTS};
use crate::error::ProgressError;
use crate::position::Position;
use crate::reward::{ROUND_COUNT, RewardTable, Rewards, STAGE_COUNT};

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// Outcome of [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub final_position: Position,
    /// Everything the player holds: rewards implied by the starting position
    /// plus rewards earned during the run.
    pub rewards: Rewards,
    /// Eggs left in the pool when the run stopped.
    pub unspent: u32,
    pub batches_opened: u32,
}

/// Outcome of [`min_resource_to_reach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePlan {
    /// Eggs that must come from outside the event.
    pub resource_needed: u32,
    pub batches_opened: u32,
    /// Reward eggs earned and spent again along the way.
    pub recycled_eggs: u32,
    /// Position once the target is reached.
    pub final_position: Position,
    /// Rewards earned along the way (nothing is credited for the start).
    pub rewards: Rewards,
}

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

/// Mutable working copy of a position during one simulation call.
struct Progress<'t> {
    table: &'t RewardTable,
    round: u32,
    stage: u32,
    round_points: u32,
    total_points: u32,
    saturated: bool,
    rewards: Rewards,
    batches_opened: u32,
}

impl<'t> Progress<'t> {
    fn new(table: &'t RewardTable, start: &Position) -> Self {
        Self {
            table,
            round: start.round,
            stage: start.stage,
            round_points: start.round_points,
            total_points: start.total_points,
            saturated: start.is_terminal(table),
            rewards: Rewards::default(),
            batches_opened: 0,
        }
    }

    /// Credit the rewards a player already holds for having reached the
    /// current round and stage.
    fn credit_completed(&mut self) {
        for round in 1..self.round {
            for stage in 1..=STAGE_COUNT {
                self.rewards.add_stage(self.table.stage_reward(stage));
            }
            if round < ROUND_COUNT {
                self.rewards.add_round(&self.table.round_reward);
            }
        }
        for stage in 1..self.stage {
            self.rewards.add_stage(self.table.stage_reward(stage));
        }
    }

    /// Open one batch and run the stage/round cascade. Returns the reward
    /// eggs earned, which the caller feeds back into its pool.
    fn open_batch(&mut self) -> u32 {
        let mut unallocated = BATCH_POINTS;
        let mut earned_eggs = 0u32;

        self.batches_opened += 1;
        self.round_points += BATCH_POINTS;
        self.total_points = self.total_points.saturating_add(BATCH_POINTS);

        while !self.saturated && unallocated > 0 {
            let threshold = self.table.threshold(self.stage);
            if self.round_points < threshold {
                break;
            }

            // Points of this batch spent finishing the stage; the rest spill over.
            let to_complete = threshold.saturating_sub(self.round_points - unallocated);
            self.round_points -= threshold;
            unallocated = unallocated.saturating_sub(to_complete);

            let reward = self.table.stage_reward(self.stage);
            self.rewards.add_stage(reward);
            earned_eggs = earned_eggs.saturating_add(reward.eggs);
            debug!(
                "round {} stage {} cleared at {} points (+{} eggs)",
                self.round, self.stage, self.total_points, reward.eggs
            );

            if self.stage < STAGE_COUNT {
                self.stage += 1;
            } else if self.round < ROUND_COUNT {
                self.rewards.add_round(&self.table.round_reward);
                debug!("round {} complete", self.round);
                self.round += 1;
                self.stage = 1;
            } else {
                // Leftover points stay absorbed in the final stage.
                self.saturated = true;
                debug!("final round complete, progression saturated");
            }
        }

        earned_eggs
    }

    fn position(&self) -> Position {
        if self.saturated || self.total_points >= self.table.total_cap() {
            return Position::terminal(self.table);
        }
        Position {
            round: self.round.min(ROUND_COUNT),
            stage: self.stage.min(STAGE_COUNT),
            round_points: self.round_points.min(self.table.points_per_round()),
            total_points: self.total_points,
        }
    }
}

fn check_inputs(table: &RewardTable, start: &Position) -> Result<(), ProgressError> {
    table.validate()?;
    start.validate(table)
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Spend `budget` eggs from `start`, recycling reward eggs, until fewer than
/// [`BATCH_COST`] eggs remain or the event is fully cleared.
///
/// Reward eggs already implied by the starting position count as unspent and
/// are added to the budget before the first batch.
pub fn advance(
    table: &RewardTable,
    start: &Position,
    budget: u32,
) -> Result<SimulationResult, ProgressError> {
    check_inputs(table, start)?;

    let mut progress = Progress::new(table, start);
    progress.credit_completed();
    let mut pool = budget.saturating_add(progress.rewards.eggs);

    while pool >= BATCH_COST && !progress.saturated {
        pool -= BATCH_COST;
        let earned = progress.open_batch();
        pool = pool.saturating_add(earned);
    }

    let result = SimulationResult {
        final_position: progress.position(),
        rewards: progress.rewards,
        unspent: pool,
        batches_opened: progress.batches_opened,
    };
    debug!(
        "advance from {:?} with {} eggs: {} batches, now {:?}",
        start, budget, result.batches_opened, result.final_position
    );
    Ok(result)
}

/// Fewest eggs a player must acquire so that, starting from `start`,
/// lifetime points reach `target_total_points`.
///
/// The pool starts empty and only grows from rewards earned during the run;
/// whenever it cannot pay for the next batch it is topped up by one full
/// batch cost, and those top-ups are the answer. Reward eggs left below
/// [`BATCH_COST`] stay in the pool until later rewards make them spendable. Targets above the lifetime cap are
/// clamped to it. Each batch adds [`BATCH_POINTS`] to the running total, so
/// the loop ends after at most `target / BATCH_POINTS + 1` batches.
pub fn min_resource_to_reach(
    table: &RewardTable,
    start: &Position,
    target_total_points: u32,
) -> Result<ResourcePlan, ProgressError> {
    check_inputs(table, start)?;

    let target = target_total_points.min(table.total_cap());
    let mut progress = Progress::new(table, start);
    let mut pool = 0u32;
    let mut resource_needed = 0u32;
    let mut recycled_eggs = 0u32;

    while progress.total_points < target {
        if pool < BATCH_COST {
            resource_needed += BATCH_COST;
            pool += BATCH_COST;
        }
        pool -= BATCH_COST;
        let earned = progress.open_batch();
        pool = pool.saturating_add(earned);
        recycled_eggs = recycled_eggs.saturating_add(earned);
    }

    let plan = ResourcePlan {
        resource_needed,
        batches_opened: progress.batches_opened,
        recycled_eggs,
        final_position: progress.position(),
        rewards: progress.rewards,
    };
    debug!(
        "reaching {} points from {:?} needs {} eggs ({} batches)",
        target, start, plan.resource_needed, plan.batches_opened
    );
    Ok(plan)
}

/// [`advance`] against [`RewardTable::standard`].
pub fn advance_standard(start: &Position, budget: u32) -> Result<SimulationResult, ProgressError> {
    advance(&RewardTable::standard(), start, budget)
}

/// [`min_resource_to_reach`] against [`RewardTable::standard`].
pub fn min_resource_to_reach_standard(
    start: &Position,
    target_total_points: u32,
) -> Result<ResourcePlan, ProgressError> {
    min_resource_to_reach(&RewardTable::standard(), start, target_total_points)
}
