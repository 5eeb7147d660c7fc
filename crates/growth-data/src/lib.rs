//! Data-driven configuration for growth-event calculators.
//!
//! A data directory holds a reward table (`rewards.ron`, `rewards.toml` or
//! `rewards.json`) and optionally an event catalogue (`events.*`). Exactly one
//! format may be present per file. When no catalogue is present the built-in
//! one is used.

pub mod catalogue;
pub mod loader;
pub mod schema;

pub use catalogue::{CatalogueError, EventCatalogue, GrowthEvent};
pub use loader::{DataLoadError, EventConfig, load_event_config, load_reward_table};
