//! Computed metric and summary report types
//!
//! Everything in this module is derived on demand from the raw records in
//! `types::core` and is immutable once built — recompute, never mutate.

use serde::{Deserialize, Serialize};

/// Recovery metrics for a single core run.
///
/// Percentages are rounded to 2 decimal places from unrounded sums.
/// `tcr` may exceed 100 (core swelling); `rqd` is always within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryMetrics {
    /// Total Core Recovery (%)
    pub tcr: f64,
    /// Rock Quality Designation (%)
    pub rqd: f64,
    /// Number of pieces at or above the 10 cm RQD threshold
    pub rqd_piece_count: usize,
    /// Sum of all itemized piece lengths (cm)
    pub total_piece_length_cm: f64,
}

/// Deere's rock mass quality classification from RQD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RockQuality {
    /// RQD < 25%
    VeryPoor,
    /// 25% <= RQD < 50%
    Poor,
    /// 50% <= RQD < 75%
    Fair,
    /// 75% <= RQD < 90%
    Good,
    /// RQD >= 90%
    Excellent,
}

/// One already-computed per-run metric row, as consumed by the aggregator.
///
/// `recovery` and `rqd` are `None` when the metric was never computed for
/// the run — aggregation excludes such rows from that average rather than
/// counting them as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRecord {
    pub project_name: String,
    pub hole_id: String,
    /// Total Core Recovery (%), if computed
    pub recovery: Option<f64>,
    /// RQD (%), if computed
    pub rqd: Option<f64>,
    /// Core recovered in this run (m)
    pub recovered_length: f64,
    /// Top of run (m), used for depth bucketing
    pub from_depth: f64,
}

/// Overall dashboard summary across a record set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_drill_holes: usize,
    pub total_core_runs: usize,
    /// Sum of recovered core length (m), 2 dp
    pub total_meters_logged: f64,
    /// Mean TCR (%) over records with a recovery value, 2 dp
    pub average_recovery: Option<f64>,
    /// Mean RQD (%) over records with an RQD value, 2 dp
    pub average_rqd: Option<f64>,
    pub active_projects: usize,
}

/// Per-group summary row (one per project or drill hole)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Project name or hole id, depending on the grouping
    pub group: String,
    pub total_runs: usize,
    pub average_recovery: Option<f64>,
    pub min_recovery: Option<f64>,
    pub max_recovery: Option<f64>,
    pub average_rqd: Option<f64>,
}

/// Grouped summary: one row per group plus the overall rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedSummary {
    pub groups: Vec<GroupSummary>,
    pub overall: SummaryReport,
}

/// Share of one categorical tag (e.g. a lithology) in a classified length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    /// Number of intervals carrying this tag
    pub count: usize,
    /// Total classified length for this tag (m), 2 dp
    pub total_length: f64,
    /// total_length / sum of all classified lengths * 100, 2 dp
    pub percentage: f64,
    /// Mean interval recovery (%) where reported, 2 dp
    pub average_recovery: Option<f64>,
}

/// Average recovery/RQD within one fixed-size depth bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthBucketSummary {
    /// Bucket label, e.g. "50-100m"
    pub interval: String,
    /// Top of bucket (m)
    pub from_depth: f64,
    /// Bottom of bucket (m)
    pub to_depth: f64,
    pub total_runs: usize,
    pub average_recovery: Option<f64>,
    pub average_rqd: Option<f64>,
}
