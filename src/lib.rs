//! Core recovery metrics engine for geological core logging
//!
//! Computes the two standard geotechnical quality indices — Total Core
//! Recovery (TCR) and Rock Quality Designation (RQD) — from raw drill core
//! measurements, and rolls them up into project, drill-hole, and
//! depth-bucket summaries for dashboard surfaces.
//!
//! ## Architecture
//!
//! - **Recovery Calculator** (`recovery`): pure TCR/RQD computation and
//!   derived quality classification
//! - **Aggregator** (`aggregate`): summary statistics and distributions
//!   over many runs/intervals
//! - **Input boundary** (`input`): raw form fields → typed records
//! - **Estimator seam** (`estimator`): external photo-analysis contract
//!
//! The host application owns all I/O: fetching records from its API,
//! rendering reports, exporting files. Everything here is a synchronous
//! pure transformation over immutable inputs, safe to call from any
//! concurrency model without locking.

pub mod aggregate;
pub mod estimator;
pub mod input;
pub mod recovery;
pub mod types;

// Re-export the record types
pub use types::{
    CoreInterval, CorePiece, CoreRun, DrillHole, MetricRecord, PieceCondition, RecoveryMetrics,
    RockQuality,
};

// Re-export the report types
pub use types::{
    CategoryShare, DepthBucketSummary, GroupSummary, GroupedSummary, SummaryReport,
};

// Re-export the calculator surface
pub use recovery::{
    compute_metrics, compute_rqd, compute_tcr, is_over_recovery, qualifies_for_rqd,
    rqd_from_length, RQD_MIN_PIECE_LENGTH_CM,
};

// Re-export the aggregator surface
pub use aggregate::{
    lithology_distribution, recovery_by_depth, summarize, summarize_by_drill_hole,
    summarize_by_project, DepthBucketConfig, MetricAccumulator,
};

// Re-export boundary errors and the estimator seam
pub use estimator::{MockEstimator, RecoveryEstimate, RecoveryEstimator};
pub use input::InputError;
