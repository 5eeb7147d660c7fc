//! Boundary validation for raw numeric fields typed by a user.
//!
//! The simulator assumes validated non-negative integers. These helpers turn
//! form text into that shape and name the offending field on failure.

use std::num::IntErrorKind;

/// Largest value any field accepts.
pub const MAX_INPUT: u32 = 1_000_000;

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The text is not an integer.
    #[error("invalid input for {field}: please enter a non-negative number")]
    NotANumber { field: &'static str, raw: String },

    /// The value is below zero.
    #[error("invalid input for {field}: please enter a non-negative number")]
    Negative { field: &'static str, raw: String },

    /// The value is above [`MAX_INPUT`].
    #[error("input for {field} is too large (max {max})")]
    TooLarge {
        field: &'static str,
        raw: String,
        max: u32,
    },

    /// A required field was left empty.
    #[error("{field} is required")]
    Missing { field: &'static str },
}

impl InputError {
    /// Name of the field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotANumber { field, .. }
            | InputError::Negative { field, .. }
            | InputError::TooLarge { field, .. }
            | InputError::Missing { field } => *field,
        }
    }
}

/// Parse one field. Empty or blank text means "not filled in yet" and yields
/// `Ok(None)`.
pub fn parse_field(field: &'static str, raw: &str) -> Result<Option<u32>, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: i64 = match text.parse() {
        Ok(v) => v,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => InputError::TooLarge {
                    field,
                    raw: raw.to_string(),
                    max: MAX_INPUT,
                },
                IntErrorKind::NegOverflow => InputError::Negative {
                    field,
                    raw: raw.to_string(),
                },
                _ => InputError::NotANumber {
                    field,
                    raw: raw.to_string(),
                },
            });
        }
    };

    if value < 0 {
        return Err(InputError::Negative {
            field,
            raw: raw.to_string(),
        });
    }
    if value > i64::from(MAX_INPUT) {
        return Err(InputError::TooLarge {
            field,
            raw: raw.to_string(),
            max: MAX_INPUT,
        });
    }
    Ok(Some(value as u32))
}

/// Like [`parse_field`], but an empty field is an error.
pub fn require_field(field: &'static str, raw: &str) -> Result<u32, InputError> {
    parse_field(field, raw)?.ok_or(InputError::Missing { field })
}
