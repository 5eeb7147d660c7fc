//! Growth Core -- progression math for tiered "growth event" calculators.
//!
//! A player spends eggs in fixed-size batches (30 eggs open 35) to earn
//! points. Points fill stages, five stages make a round, four rounds make the
//! event. Clearing a stage pays hammers, eggs and gems; clearing a non-final
//! round also pays tickets. Reward eggs flow back into the spendable pool,
//! which is what makes the simulation worth running instead of dividing.
//!
//! Every operation is a pure function of its inputs. The only shared data is
//! the read-only [`reward::RewardTable`].
//!
//! # Key Types
//!
//! - [`reward::RewardTable`] -- Stage thresholds, stage payouts and the round
//!   bonus. [`reward::RewardTable::standard`] is the Pet Growth Event.
//! - [`position::Position`] -- Round, stage, stage points and lifetime points,
//!   kept in sync by [`position::reconcile`].
//! - [`batch`] -- Batch-discount arithmetic for the non-event calculator.
//! - [`progression::advance`] -- Where a given egg budget takes a player.
//! - [`progression::min_resource_to_reach`] -- Eggs needed for a point target.
//! - [`input`] -- Boundary validation of raw user text.
//! - [`calculator`] -- Mode dispatch from a raw form to a result record.
//!
//! ```rust
//! use growth_core::position::Position;
//! use growth_core::progression::advance;
//! use growth_core::reward::RewardTable;
//!
//! let table = RewardTable::standard();
//! let result = advance(&table, &Position::start(), 450).unwrap();
//! assert_eq!(result.final_position.stage, 2);
//! assert_eq!(result.final_position.total_points, 560);
//! ```

pub mod batch;
pub mod calculator;
pub mod error;
pub mod input;
pub mod position;
pub mod progression;
pub mod reward;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ProgressError;
