//! Batch-discount arithmetic for opening eggs outside an event.
//!
//! Eggs are cheapest in batches: opening [`BATCH_POINTS`] eggs costs
//! [`BATCH_COST`]. During an event every opened egg is also worth one point,
//! which is why the progression simulator reuses these constants.

use serde::{Deserialize, Serialize};

/// Eggs spent per batch.
pub const BATCH_COST: u32 = 30;

/// Eggs opened (and event points awarded) per batch.
pub const BATCH_POINTS: u32 = 35;

/// Best use of an egg stockpile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutput {
    /// Eggs opened, always a multiple of [`BATCH_POINTS`]. Wider than the
    /// input since 35 opened per 30 spent outgrows `u32` near its limit.
    pub produced: u64,
    /// Eggs left over, always below [`BATCH_COST`].
    pub remainder: u32,
    pub batches: u32,
}

/// Cheapest way to open a given number of eggs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPurchase {
    pub batches: u32,
    /// Eggs to spend, always a multiple of [`BATCH_COST`].
    pub resource_needed: u32,
    /// Eggs opened beyond the target.
    pub surplus: u32,
}

/// Open as many full batches as `available` eggs allow.
pub fn max_output_for(available: u32) -> BatchOutput {
    let batches = available / BATCH_COST;
    BatchOutput {
        produced: u64::from(batches) * u64::from(BATCH_POINTS),
        remainder: available % BATCH_COST,
        batches,
    }
}

/// Fewest batches that open at least `target_output` eggs.
pub fn min_resource_for(target_output: u32) -> BatchPurchase {
    let batches = target_output.div_ceil(BATCH_POINTS);
    // At most ceil(u32::MAX / 35) * 30, which fits in u32.
    BatchPurchase {
        batches,
        resource_needed: batches * BATCH_COST,
        surplus: (BATCH_POINTS - target_output % BATCH_POINTS) % BATCH_POINTS,
    }
}
