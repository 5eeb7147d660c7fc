//! Loading pipeline: finds data files, deserializes them, and resolves them
//! into a validated [`RewardTable`] and [`EventCatalogue`].
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and
//! deserialization helpers used by [`load_event_config`].

use growth_core::ProgressError;
use growth_core::reward::{RewardTable, RoundReward, STAGE_COUNT, StageReward};
use log::info;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::catalogue::{EventCatalogue, GrowthEvent};
use crate::schema::{EventData, RewardsData};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A reward table lists the wrong number of stages.
    #[error("{file} lists {found} stages, expected {expected}")]
    StageCount {
        file: PathBuf,
        found: usize,
        expected: u32,
    },

    /// A reward table parsed but cannot drive the simulator.
    #[error("invalid reward table in {file}: {source}")]
    InvalidTable {
        file: PathBuf,
        source: ProgressError,
    },

    /// A duplicate name was found.
    #[error("duplicate name '{name}' in {file}")]
    DuplicateName { file: PathBuf, name: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without extension).
///
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// more than one format exists for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but returns an error if no file is found.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, e: impl std::fmt::Display) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: e.to_string(),
    }
}

/// Read a file and deserialize it according to its format (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

/// Deserialize a list from a file. For TOML files, extracts the array at the
/// given `toml_key` from a top-level table. For RON and JSON, deserializes
/// directly as `Vec<T>`.
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    if detect_format(path)? != Format::Toml {
        return deserialize_file(path);
    }

    let content = std::fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| parse_error(path, e))?;
    let array = table
        .get(toml_key)
        .ok_or_else(|| parse_error(path, format!("missing key '{toml_key}' in TOML file")))?
        .clone();
    array
        .try_into()
        .map_err(|e: toml::de::Error| parse_error(path, e))
}

// ===========================================================================
// Resolution
// ===========================================================================

/// Turn parsed reward data into a validated table.
pub fn resolve_rewards(data: RewardsData, file: &Path) -> Result<RewardTable, DataLoadError> {
    if data.stages.len() != STAGE_COUNT as usize {
        return Err(DataLoadError::StageCount {
            file: file.to_path_buf(),
            found: data.stages.len(),
            expected: STAGE_COUNT,
        });
    }

    let mut table = RewardTable {
        stage_points: [0; STAGE_COUNT as usize],
        stage_rewards: [StageReward::default(); STAGE_COUNT as usize],
        round_reward: RoundReward {
            tickets: data.round_reward.tickets,
            hammers: data.round_reward.hammers,
            gems: data.round_reward.gems,
        },
    };
    for (i, stage) in data.stages.iter().enumerate() {
        table.stage_points[i] = stage.points;
        table.stage_rewards[i] = StageReward {
            hammers: stage.hammers,
            eggs: stage.eggs,
            gems: stage.gems,
        };
    }

    table.validate().map_err(|source| DataLoadError::InvalidTable {
        file: file.to_path_buf(),
        source,
    })?;
    Ok(table)
}

/// Turn parsed catalogue entries into a catalogue, rejecting duplicate ids.
pub fn resolve_events(data: Vec<EventData>, file: &Path) -> Result<EventCatalogue, DataLoadError> {
    let mut seen = HashSet::with_capacity(data.len());
    let mut events = Vec::with_capacity(data.len());

    for entry in data {
        if !seen.insert(entry.id.clone()) {
            return Err(DataLoadError::DuplicateName {
                file: file.to_path_buf(),
                name: entry.id,
            });
        }
        events.push(GrowthEvent {
            route: entry
                .route
                .or_else(|| entry.active.then(|| format!("/{}", entry.id))),
            id: entry.id,
            title: entry.title,
            description: entry.description,
            active: entry.active,
        });
    }

    Ok(EventCatalogue::from_unique(events))
}

// ===========================================================================
// Top-level loading
// ===========================================================================

/// Everything a calculator needs from a data directory.
#[derive(Debug, Clone)]
pub struct EventConfig {
    pub rewards: RewardTable,
    pub catalogue: EventCatalogue,
}

/// Load and validate a single reward table file.
pub fn load_reward_table(path: &Path) -> Result<RewardTable, DataLoadError> {
    let data: RewardsData = deserialize_file(path)?;
    let table = resolve_rewards(data, path)?;
    info!(
        "loaded reward table from {} ({} points per round)",
        path.display(),
        table.points_per_round()
    );
    Ok(table)
}

/// Load `rewards.*` (required) and `events.*` (optional) from `dir`.
pub fn load_event_config(dir: &Path) -> Result<EventConfig, DataLoadError> {
    let rewards = load_reward_table(&require_data_file(dir, "rewards")?)?;

    let catalogue = match find_data_file(dir, "events")? {
        Some(path) => {
            let data: Vec<EventData> = deserialize_list(&path, "events")?;
            let catalogue = resolve_events(data, &path)?;
            info!(
                "loaded {} growth events from {}",
                catalogue.events().len(),
                path.display()
            );
            catalogue
        }
        None => EventCatalogue::builtin(),
    };

    Ok(EventConfig { rewards, catalogue })
}

// ===========================================================================
// Tests
// ===========================================================================
