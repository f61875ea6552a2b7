//! Typed parsing boundary for raw form-field input
//!
//! Logging forms hand over text fields. This module converts them into the
//! typed records the calculator consumes, so the pure core never touches
//! strings. Structurally invalid input (non-numeric required field,
//! inverted depths, negative lengths) is a caller bug and fails fast here
//! with a typed error — deliberately the opposite of the calculator's
//! fail-soft-zero policy, which only applies after records are well formed.

use thiserror::Error;
use tracing::warn;

use crate::types::{CoreInterval, CorePiece, CoreRun, PieceCondition};

/// Form input errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("Field '{field}' is not a number: '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("Field '{field}' must not be negative: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("to_depth ({to_depth}) must be deeper than from_depth ({from_depth})")]
    InvertedDepths { from_depth: f64, to_depth: f64 },

    #[error("Unknown piece condition: '{0}'")]
    UnknownCondition(String),
}

/// Parse a required numeric field, rejecting empty and non-numeric text.
fn parse_required(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField { field });
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotNumeric {
            field,
            value: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(InputError::NotNumeric {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Parse an optional numeric field; empty text is `None`, garbage is an error.
fn parse_optional(field: &'static str, raw: &str) -> Result<Option<f64>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_required(field, raw).map(Some)
}

fn require_non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(value)
}

/// Raw core run form fields, exactly as typed
#[derive(Debug, Clone, Default)]
pub struct RunFields<'a> {
    pub hole_id: &'a str,
    pub run_number: u32,
    pub from_depth: &'a str,
    pub to_depth: &'a str,
    pub recovered_length: &'a str,
    pub rqd_length: &'a str,
}

/// Build a typed `CoreRun` from raw form fields.
///
/// Enforces `to_depth > from_depth` and non-negative lengths. Recovered
/// length above the run length is accepted (core swelling) but logged,
/// since it will surface as an over-recovery anomaly downstream.
pub fn parse_run_fields(fields: &RunFields<'_>) -> Result<CoreRun, InputError> {
    let from_depth = require_non_negative("from_depth", parse_required("from_depth", fields.from_depth)?)?;
    let to_depth = require_non_negative("to_depth", parse_required("to_depth", fields.to_depth)?)?;
    if to_depth <= from_depth {
        return Err(InputError::InvertedDepths {
            from_depth,
            to_depth,
        });
    }

    let recovered_length = require_non_negative(
        "recovered_length",
        parse_required("recovered_length", fields.recovered_length)?,
    )?;
    if recovered_length > to_depth - from_depth {
        warn!(
            hole_id = fields.hole_id,
            run_number = fields.run_number,
            recovered_length,
            run_length = to_depth - from_depth,
            "recovered length exceeds run length (over-recovery)"
        );
    }

    let rqd_length = match parse_optional("rqd_length", fields.rqd_length)? {
        Some(value) => Some(require_non_negative("rqd_length", value)?),
        None => None,
    };

    Ok(CoreRun {
        hole_id: fields.hole_id.trim().to_string(),
        run_number: fields.run_number,
        from_depth,
        to_depth,
        recovered_length,
        rqd_length,
        drilling_date: None,
    })
}

/// Build a typed `CorePiece` from raw form fields.
///
/// An empty length field is a structural error here — a piece row with no
/// length is a half-filled form, not a zero-length piece.
pub fn parse_piece_fields(
    length: &str,
    condition: &str,
    notes: &str,
) -> Result<CorePiece, InputError> {
    let length_cm = require_non_negative("length", parse_required("length", length)?)?;

    let condition = match condition.trim().to_ascii_lowercase().as_str() {
        "" | "intact" => PieceCondition::Intact,
        "fractured" => PieceCondition::Fractured,
        "broken" => PieceCondition::Broken,
        other => return Err(InputError::UnknownCondition(other.to_string())),
    };

    Ok(CorePiece {
        length_cm,
        condition,
        notes: notes.trim().to_string(),
    })
}

/// Raw interval form fields; geological descriptors pass through as-is
#[derive(Debug, Clone, Default)]
pub struct IntervalFields<'a> {
    pub hole_id: &'a str,
    pub run_number: u32,
    pub from_depth: &'a str,
    pub to_depth: &'a str,
    pub lithology: &'a str,
    pub recovery_percentage: &'a str,
    pub rqd_contribution: &'a str,
}

/// Build a typed `CoreInterval` from raw form fields.
///
/// Only structural validity is enforced. Reported recovery/RQD values are
/// kept as entered, even when inconsistent with the parent run — manual
/// logging disagreements are QA/QC's problem, not a parse failure.
pub fn parse_interval_fields(fields: &IntervalFields<'_>) -> Result<CoreInterval, InputError> {
    let from_depth = require_non_negative("from_depth", parse_required("from_depth", fields.from_depth)?)?;
    let to_depth = require_non_negative("to_depth", parse_required("to_depth", fields.to_depth)?)?;
    if to_depth <= from_depth {
        return Err(InputError::InvertedDepths {
            from_depth,
            to_depth,
        });
    }

    let lithology = {
        let trimmed = fields.lithology.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    Ok(CoreInterval {
        hole_id: fields.hole_id.trim().to_string(),
        run_number: fields.run_number,
        from_depth,
        to_depth,
        lithology,
        recovery_percentage: parse_optional("recovery_percentage", fields.recovery_percentage)?,
        rqd_contribution: parse_optional("rqd_contribution", fields.rqd_contribution)?,
        ..Default::default()
    })
}
