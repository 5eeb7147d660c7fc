//! Serde data file structs for growth-event configuration.
//!
//! These mirror the on-disk format and are resolved into core types by the
//! loader, which checks stage counts and thresholds.

use serde::Deserialize;

// ===========================================================================
// Rewards
// ===========================================================================

/// One stage of a round: its point threshold and payout.
#[derive(Debug, Clone, Deserialize)]
pub struct StageData {
    pub points: u32,
    #[serde(default)]
    pub hammers: u32,
    #[serde(default)]
    pub eggs: u32,
    #[serde(default)]
    pub gems: u32,
}

/// Bonus for clearing a non-final round.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundRewardData {
    #[serde(default)]
    pub tickets: u32,
    #[serde(default)]
    pub hammers: u32,
    #[serde(default)]
    pub gems: u32,
}

/// A complete reward table file.
#[derive(Debug, Clone, Deserialize)]
pub struct RewardsData {
    pub stages: Vec<StageData>,
    #[serde(default)]
    pub round_reward: RoundRewardData,
}

// ===========================================================================
// Events
// ===========================================================================

/// A catalogue entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub route: Option<String>,
}
