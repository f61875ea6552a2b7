//! Recovery estimator abstraction (photo-analysis seam)
//!
//! The photo-analysis path is an external collaborator: it returns the
//! same metrics shape as a manual calculation plus a confidence score.
//! This module defines only the seam — dispatching the analysis, timeouts,
//! and cancellation belong to the host's integration layer, never to the
//! pure calculator.

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::RecoveryMetrics;

/// Estimator errors
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}

/// An estimated recovery result with its confidence score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryEstimate {
    pub metrics: RecoveryMetrics,
    /// Pieces the analysis detected in the tray image
    pub detected_pieces: usize,
    /// Estimated total core length in the tray (cm)
    pub total_length_cm: f64,
    /// Confidence score, 0-100
    pub confidence: f64,
}

/// Trait abstracting where recovery estimates come from.
///
/// Implementations analyze whatever evidence they hold (a tray photo, a
/// scan) for the given nominal run length and return the standard metrics
/// shape. Estimates are advisory — geologists verify before committing.
pub trait RecoveryEstimator {
    fn estimate(&mut self, run_length: f64) -> Result<RecoveryEstimate, EstimatorError>;

    /// Human-readable name for logging (e.g. "tray-photo", "mock").
    fn estimator_name(&self) -> &str;
}

/// Mock estimator producing plausible random results.
///
/// Stands in for the real photo-analysis service in tests and demos:
/// TCR 80-100%, RQD 60-90%, confidence 80-100, 10-30 detected pieces.
pub struct MockEstimator {
    rng: StdRng,
}

impl MockEstimator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MockEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryEstimator for MockEstimator {
    fn estimate(&mut self, run_length: f64) -> Result<RecoveryEstimate, EstimatorError> {
        if !run_length.is_finite() || run_length <= 0.0 {
            return Err(EstimatorError::UnsupportedInput(format!(
                "run length must be positive, got {run_length}"
            )));
        }

        let tcr = crate::recovery::compute_tcr(run_length, run_length * self.rng.gen_range(0.80..1.00));
        let detected_pieces = self.rng.gen_range(10..30);
        let rqd_piece_count = (detected_pieces as f64 * self.rng.gen_range(0.4..0.8)) as usize;
        let total_length_cm = run_length * 100.0 * (tcr / 100.0);

        Ok(RecoveryEstimate {
            metrics: RecoveryMetrics {
                tcr,
                rqd: crate::recovery::round2(self.rng.gen_range(60.0..90.0)),
                rqd_piece_count,
                total_piece_length_cm: crate::recovery::round2(total_length_cm),
            },
            detected_pieces,
            total_length_cm: crate::recovery::round2(total_length_cm),
            confidence: self.rng.gen_range(80..100) as f64,
        })
    }

    fn estimator_name(&self) -> &str {
        "mock"
    }
}
