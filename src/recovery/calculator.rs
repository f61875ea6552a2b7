//! TCR and RQD calculation from raw length measurements
//!
//! The two standard geotechnical quality indices:
//!
//! - TCR (Total Core Recovery) = recovered length / run length × 100
//! - RQD (Rock Quality Designation) = Σ(pieces ≥ 10 cm) / Σ(all pieces) × 100
//!
//! Both functions are pure and fail soft: absent, zero, or invalid numeric
//! input yields 0 rather than an error, so a dashboard renders "no data"
//! as 0% instead of failing. Structural validation of raw input happens
//! earlier, at the `input` boundary.

use crate::types::{CorePiece, CoreRun, RecoveryMetrics};

/// Minimum piece length (cm) counted toward RQD.
///
/// Standard threshold from Deere's RQD definition. Fixed for the whole
/// system, not per-call. Pieces shorter than this — including those broken
/// by the drilling process itself — are excluded from the numerator only.
pub const RQD_MIN_PIECE_LENGTH_CM: f64 = 10.0;

/// Round to 2 decimal places for display-convention percentages.
///
/// Applied once to the final ratio, never to per-piece or intermediate sums.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// TCR (Total Core Recovery)
// ============================================================================

/// Calculate Total Core Recovery as a percentage.
///
/// Formula: TCR = (recovered_length / run_length) × 100
///
/// Both lengths in meters. Returns 0 when either input is missing its
/// meaning — non-finite, zero, or negative. The result is NOT clamped at
/// 100: recovered core can legitimately exceed the drilled length through
/// swelling, and callers flag that downstream as a QA/QC anomaly.
pub fn compute_tcr(run_length: f64, recovered_length: f64) -> f64 {
    if !run_length.is_finite() || run_length <= 0.0 {
        return 0.0;
    }
    if !recovered_length.is_finite() || recovered_length <= 0.0 {
        return 0.0;
    }

    round2((recovered_length / run_length) * 100.0)
}

// ============================================================================
// RQD (Rock Quality Designation)
// ============================================================================

/// Whether a piece counts toward the RQD numerator (length ≥ 10 cm).
///
/// The piece condition tag is deliberately ignored — mechanically broken
/// pieces are not excluded, matching the logging convention this engine
/// reproduces.
pub fn qualifies_for_rqd(piece: &CorePiece) -> bool {
    piece.length_cm.is_finite() && piece.length_cm >= RQD_MIN_PIECE_LENGTH_CM
}

/// Piece length for summation; non-finite or negative entries count as 0.
fn effective_length(piece: &CorePiece) -> f64 {
    if piece.length_cm.is_finite() && piece.length_cm > 0.0 {
        piece.length_cm
    } else {
        0.0
    }
}

/// Calculate Rock Quality Designation from itemized core pieces.
///
/// Formula: RQD = Σ(length of pieces ≥ 10 cm) / Σ(all piece lengths) × 100
///
/// Lengths in centimeters. Returns 0 for an empty list or zero total
/// length. Rounded to 2 dp from unrounded sums. Order-independent, and the
/// result is always within [0, 100] since the numerator sums a subset of
/// the denominator's terms.
pub fn compute_rqd(pieces: &[CorePiece]) -> f64 {
    if pieces.is_empty() {
        return 0.0;
    }

    let total_length: f64 = pieces.iter().map(effective_length).sum();
    if total_length <= 0.0 {
        return 0.0;
    }

    let rqd_length: f64 = pieces
        .iter()
        .filter(|p| qualifies_for_rqd(p))
        .map(effective_length)
        .sum();

    round2((rqd_length / total_length) * 100.0)
}

/// Calculate RQD from a run-level reported RQD length.
///
/// Formula: RQD = (rqd_length / run_length) × 100
///
/// Both lengths in meters. Used when a geologist reports the summed ≥10 cm
/// length directly instead of logging individual pieces. Same fail-soft
/// contract as `compute_tcr`.
pub fn rqd_from_length(run_length: f64, rqd_length: f64) -> f64 {
    if !run_length.is_finite() || run_length <= 0.0 {
        return 0.0;
    }
    if !rqd_length.is_finite() || rqd_length <= 0.0 {
        return 0.0;
    }

    round2((rqd_length / run_length) * 100.0)
}

// ============================================================================
// Combined Metrics
// ============================================================================

/// Compute the full recovery metrics for a run and its logged pieces.
///
/// TCR always comes from the run's lengths. RQD prefers itemized pieces;
/// when none were logged it falls back to the run's reported `rqd_length`
/// over the run length, and to 0 when neither exists.
pub fn compute_metrics(run: &CoreRun, pieces: &[CorePiece]) -> RecoveryMetrics {
    let tcr = compute_tcr(run.run_length(), run.recovered_length);

    let rqd = if !pieces.is_empty() {
        compute_rqd(pieces)
    } else {
        rqd_from_length(run.run_length(), run.rqd_length.unwrap_or(0.0))
    };

    RecoveryMetrics {
        tcr,
        rqd,
        rqd_piece_count: pieces.iter().filter(|p| qualifies_for_rqd(p)).count(),
        total_piece_length_cm: pieces.iter().map(effective_length).sum(),
    }
}
