//! One entry point for every calculation the egg calculator offers.
//!
//! A presentation layer collects raw text into a [`Form`], turns it into a
//! [`Request`] for the chosen [`CalculationMode`], and hands the request to
//! [`run`]. Results come back as a [`Report`] of plain records.

use serde::{Deserialize, Serialize};

use crate::batch::{self, BatchOutput, BatchPurchase};
use crate::error::ProgressError;
use crate::input::{InputError, parse_field, require_field};
use crate::position::{Position, PositionSource, reconcile};
use crate::progression::{self, ResourcePlan, SimulationResult};
use crate::reward::RewardTable;

// ---------------------------------------------------------------------------
// Requests and reports
// ---------------------------------------------------------------------------

/// The four calculations on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMode {
    /// No event: how many eggs can I open?
    MaxOutput,
    /// No event: how many eggs must I spend to open a given number?
    MinResource,
    /// Event: where do my eggs take me?
    MaxPoints,
    /// Event: how many eggs do I need for a point target?
    MinEggs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    MaxOutput {
        available: u32,
    },
    MinResource {
        target_output: u32,
    },
    MaxPoints {
        position: Position,
        budget: u32,
    },
    MinResourceToReach {
        position: Position,
        target_total_points: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Report {
    MaxOutput(BatchOutput),
    MinResource(BatchPurchase),
    MaxPoints(SimulationResult),
    MinResourceToReach(ResourcePlan),
}

/// Execute a request against `table`.
pub fn run(table: &RewardTable, request: Request) -> Result<Report, ProgressError> {
    Ok(match request {
        Request::MaxOutput { available } => Report::MaxOutput(batch::max_output_for(available)),
        Request::MinResource { target_output } => {
            Report::MinResource(batch::min_resource_for(target_output))
        }
        Request::MaxPoints { position, budget } => {
            Report::MaxPoints(progression::advance(table, &position, budget)?)
        }
        Request::MinResourceToReach {
            position,
            target_total_points,
        } => Report::MinResourceToReach(progression::min_resource_to_reach(
            table,
            &position,
            target_total_points,
        )?),
    })
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Why a form could not produce a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One or more fields failed boundary validation.
    #[error("{} invalid field(s)", .0.len())]
    Fields(Vec<InputError>),

    /// Fields parsed but describe an impossible position.
    #[error(transparent)]
    Position(#[from] ProgressError),
}

/// Raw field text as typed by the user. Field names in errors match the
/// names the calculator UI shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub available_eggs: String,
    pub target_eggs: String,
    pub round: String,
    pub stage: String,
    pub round_points: String,
    pub total_points: String,
    pub target_total_points: String,
}

impl Form {
    /// State after pressing "clear": round 1, stage 1, no points.
    pub fn cleared() -> Self {
        Self {
            round: "1".into(),
            stage: "1".into(),
            round_points: "0".into(),
            ..Self::default()
        }
    }

    /// Validate the fields `mode` needs and build the matching request.
    /// Every invalid field is reported, not just the first. An impossible
    /// position is only reported once every field parsed.
    pub fn request(&self, mode: CalculationMode, table: &RewardTable) -> Result<Request, FormError> {
        let mut errors = Vec::new();

        let request = match mode {
            CalculationMode::MaxOutput => {
                collect(require_field("availableEggs", &self.available_eggs), &mut errors)
                    .map(|available| Request::MaxOutput { available })
            }
            CalculationMode::MinResource => {
                collect(require_field("targetEggs", &self.target_eggs), &mut errors)
                    .map(|target_output| Request::MinResource { target_output })
            }
            CalculationMode::MaxPoints => {
                let budget = collect(require_field("availableEggs", &self.available_eggs), &mut errors);
                let position = self.position(table, &mut errors);
                let position = fields_first(position, &mut errors)?;
                budget
                    .zip(position)
                    .map(|(budget, position)| Request::MaxPoints { position, budget })
            }
            CalculationMode::MinEggs => {
                let target = collect(
                    require_field("targetTotalPoints", &self.target_total_points),
                    &mut errors,
                );
                let position = self.position(table, &mut errors);
                let position = fields_first(position, &mut errors)?;
                target.zip(position).map(|(target_total_points, position)| {
                    Request::MinResourceToReach {
                        position,
                        target_total_points,
                    }
                })
            }
        };

        match request {
            Some(request) if errors.is_empty() => Ok(request),
            _ => Err(FormError::Fields(errors)),
        }
    }

    /// Canonical position from the form. A filled-in total wins over the
    /// round/stage/points fields; blank round/stage/points default to the
    /// event start.
    fn position(
        &self,
        table: &RewardTable,
        errors: &mut Vec<InputError>,
    ) -> Result<Option<Position>, ProgressError> {
        let total = collect(parse_field("totalPoints", &self.total_points), errors).flatten();
        if let Some(total_points) = total {
            let seed = Position {
                total_points,
                ..Position::start()
            };
            return reconcile(seed, PositionSource::TotalPoints, table).map(Some);
        }

        let round = collect(parse_field("round", &self.round), errors).map(|v| v.unwrap_or(1));
        let stage = collect(parse_field("stage", &self.stage), errors).map(|v| v.unwrap_or(1));
        let points =
            collect(parse_field("currentPoints", &self.round_points), errors).map(|v| v.unwrap_or(0));

        match (round, stage, points) {
            (Some(round), Some(stage), Some(round_points)) => {
                Position::from_stage_progress(round, stage, round_points, table).map(Some)
            }
            _ => Ok(None),
        }
    }
}

fn fields_first<T>(
    result: Result<Option<T>, ProgressError>,
    errors: &mut Vec<InputError>,
) -> Result<Option<T>, FormError> {
    if !errors.is_empty() {
        return Err(FormError::Fields(std::mem::take(errors)));
    }
    Ok(result?)
}

fn collect<T>(result: Result<T, InputError>, errors: &mut Vec<InputError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}
