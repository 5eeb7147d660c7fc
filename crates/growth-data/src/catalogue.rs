//! The list of growth-event calculators the product offers.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

/// One calculator in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Inactive events are listed as "coming soon" and cannot be opened.
    pub active: bool,
    /// Where the presentation layer mounts the calculator.
    pub route: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("unknown growth event '{id}'")]
    Unknown { id: String },

    #[error("growth event '{id}' is not available yet")]
    Inactive { id: String },
}

/// Ordered catalogue with lookup by id. Ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCatalogue {
    events: Vec<GrowthEvent>,
    index: HashMap<String, usize>,
}

impl EventCatalogue {
    /// Build from events whose ids the caller has already checked for
    /// duplicates.
    pub(crate) fn from_unique(events: Vec<GrowthEvent>) -> Self {
        let index = events
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { events, index }
    }

    /// The catalogue shipped with the calculator: only the pet event is live.
    pub fn builtin() -> Self {
        fn event(id: &str, title: &str, description: &str, active: bool) -> GrowthEvent {
            GrowthEvent {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                active,
                route: active.then(|| format!("/{id}")),
            }
        }

        Self::from_unique(vec![
            event("pet-growth-event", "Pet Growth Event", "Calculate egg openings", true),
            event("chest-growth-event", "Chest Growth Event", "Coming soon", false),
            event("build-growth-event", "Build Growth Event", "Coming soon", false),
            event("mount-growth-event", "Mount Growth Event", "Coming soon", false),
        ])
    }

    /// All events in display order.
    pub fn events(&self) -> &[GrowthEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&GrowthEvent> {
        self.index.get(id).map(|&i| &self.events[i])
    }

    pub fn active(&self) -> impl Iterator<Item = &GrowthEvent> {
        self.events.iter().filter(|e| e.active)
    }

    /// Look up an event the user wants to open. Inactive events are refused.
    pub fn open(&self, id: &str) -> Result<&GrowthEvent, CatalogueError> {
        let event = self.get(id).ok_or_else(|| CatalogueError::Unknown { id: id.to_string() })?;
        if !event.active {
            warn!("refusing to open inactive growth event '{id}'");
            return Err(CatalogueError::Inactive { id: id.to_string() });
        }
        Ok(event)
    }
}

impl Default for EventCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}
