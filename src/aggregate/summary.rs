//! Record-set summaries for dashboards
//!
//! Arithmetic means here deliberately differ from the calculator's
//! fail-soft-zero convention: a record missing a metric is excluded from
//! that average's denominator entirely. Counting absent values as zero
//! would silently drag every mean downward.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::recovery::round2;
use crate::types::{GroupSummary, GroupedSummary, MetricRecord, SummaryReport};

/// Partial sums for summary statistics.
///
/// Associative: accumulators built over disjoint slices of a record set
/// `merge` into the same result as one accumulator over the whole set, so
/// large aggregations can be split across threads and combined.
#[derive(Debug, Clone, Default)]
pub struct MetricAccumulator {
    runs: usize,
    meters: f64,
    recovery_sum: f64,
    recovery_count: usize,
    recovery_min: Option<f64>,
    recovery_max: Option<f64>,
    rqd_sum: f64,
    rqd_count: usize,
    holes: HashSet<String>,
    projects: HashSet<String>,
}

impl MetricAccumulator {
    pub fn add(&mut self, record: &MetricRecord) {
        self.runs += 1;
        if record.recovered_length.is_finite() && record.recovered_length > 0.0 {
            self.meters += record.recovered_length;
        }

        if let Some(recovery) = record.recovery.filter(|v| v.is_finite()) {
            self.recovery_sum += recovery;
            self.recovery_count += 1;
            self.recovery_min = Some(self.recovery_min.map_or(recovery, |m| m.min(recovery)));
            self.recovery_max = Some(self.recovery_max.map_or(recovery, |m| m.max(recovery)));
        }

        if let Some(rqd) = record.rqd.filter(|v| v.is_finite()) {
            self.rqd_sum += rqd;
            self.rqd_count += 1;
        }

        self.holes.insert(record.hole_id.clone());
        self.projects.insert(record.project_name.clone());
    }

    /// Combine partial sums from another accumulator (associative reduction).
    pub fn merge(&mut self, other: MetricAccumulator) {
        self.runs += other.runs;
        self.meters += other.meters;
        self.recovery_sum += other.recovery_sum;
        self.recovery_count += other.recovery_count;
        self.recovery_min = match (self.recovery_min, other.recovery_min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.recovery_max = match (self.recovery_max, other.recovery_max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.rqd_sum += other.rqd_sum;
        self.rqd_count += other.rqd_count;
        self.holes.extend(other.holes);
        self.projects.extend(other.projects);
    }

    /// Mean recovery over records that carried a value; `None` when none did.
    pub fn average_recovery(&self) -> Option<f64> {
        (self.recovery_count > 0).then(|| round2(self.recovery_sum / self.recovery_count as f64))
    }

    pub fn average_rqd(&self) -> Option<f64> {
        (self.rqd_count > 0).then(|| round2(self.rqd_sum / self.rqd_count as f64))
    }

    pub fn min_recovery(&self) -> Option<f64> {
        self.recovery_min.map(round2)
    }

    pub fn max_recovery(&self) -> Option<f64> {
        self.recovery_max.map(round2)
    }

    pub fn run_count(&self) -> usize {
        self.runs
    }

    fn report(&self) -> SummaryReport {
        SummaryReport {
            total_drill_holes: self.holes.len(),
            total_core_runs: self.runs,
            total_meters_logged: round2(self.meters),
            average_recovery: self.average_recovery(),
            average_rqd: self.average_rqd(),
            active_projects: self.projects.len(),
        }
    }
}

/// Summarize a flat record set into the overall dashboard row.
///
/// Empty input yields zero counts and absent (never NaN) averages.
pub fn summarize(records: &[MetricRecord]) -> SummaryReport {
    let mut acc = MetricAccumulator::default();
    for record in records {
        acc.add(record);
    }
    debug!(
        records = records.len(),
        holes = acc.holes.len(),
        "summarized record set"
    );
    acc.report()
}

/// One summary row per project, plus the overall rollup.
pub fn summarize_by_project(records: &[MetricRecord]) -> GroupedSummary {
    summarize_grouped(records, |r| r.project_name.clone())
}

/// One summary row per drill hole, plus the overall rollup.
pub fn summarize_by_drill_hole(records: &[MetricRecord]) -> GroupedSummary {
    summarize_grouped(records, |r| r.hole_id.clone())
}

fn summarize_grouped<F>(records: &[MetricRecord], key: F) -> GroupedSummary
where
    F: Fn(&MetricRecord) -> String,
{
    let mut overall = MetricAccumulator::default();
    let mut groups: BTreeMap<String, MetricAccumulator> = BTreeMap::new();

    for record in records {
        overall.add(record);
        groups.entry(key(record)).or_default().add(record);
    }

    let groups = groups
        .into_iter()
        .map(|(group, acc)| GroupSummary {
            group,
            total_runs: acc.run_count(),
            average_recovery: acc.average_recovery(),
            min_recovery: acc.min_recovery(),
            max_recovery: acc.max_recovery(),
            average_rqd: acc.average_rqd(),
        })
        .collect();

    GroupedSummary {
        groups,
        overall: overall.report(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(project: &str, hole: &str, recovery: Option<f64>, rqd: Option<f64>) -> MetricRecord {
        MetricRecord {
            project_name: project.to_string(),
            hole_id: hole.to_string(),
            recovery,
            rqd,
            recovered_length: 2.8,
            from_depth: 10.0,
        }
    }

    #[test]
    fn test_summarize_empty() {
        let report = summarize(&[]);
        assert_eq!(report.total_drill_holes, 0);
        assert_eq!(report.total_core_runs, 0);
        assert_eq!(report.total_meters_logged, 0.0);
        assert_eq!(report.average_recovery, None);
        assert_eq!(report.average_rqd, None);
        assert_eq!(report.active_projects, 0);
    }

    #[test]
    fn test_average_excludes_missing_metrics() {
        // A null recovery must not pull the mean toward zero
        let records = vec![
            record("P", "H1", Some(90.0), None),
            record("P", "H1", None, None),
        ];
        let report = summarize(&records);
        assert_eq!(report.average_recovery, Some(90.0));
        assert_eq!(report.average_rqd, None);
        assert_eq!(report.total_core_runs, 2);
    }

    #[test]
    fn test_summarize_counts_and_totals() {
        let records = vec![
            record("Alpha", "H1", Some(95.0), Some(80.0)),
            record("Alpha", "H2", Some(85.0), Some(60.0)),
            record("Beta", "H3", Some(90.0), None),
        ];
        let report = summarize(&records);
        assert_eq!(report.total_drill_holes, 3);
        assert_eq!(report.total_core_runs, 3);
        assert_eq!(report.total_meters_logged, 8.4);
        assert_eq!(report.average_recovery, Some(90.0));
        assert_eq!(report.average_rqd, Some(70.0));
        assert_eq!(report.active_projects, 2);
    }

    #[test]
    fn test_non_finite_metrics_excluded() {
        let records = vec![
            record("P", "H1", Some(f64::NAN), Some(f64::INFINITY)),
            record("P", "H1", Some(80.0), Some(70.0)),
        ];
        let report = summarize(&records);
        assert_eq!(report.average_recovery, Some(80.0));
        assert_eq!(report.average_rqd, Some(70.0));
    }

    #[test]
    fn test_grouped_by_project() {
        let records = vec![
            record("Alpha", "H1", Some(80.0), Some(50.0)),
            record("Alpha", "H1", Some(100.0), Some(70.0)),
            record("Beta", "H2", Some(90.0), None),
        ];
        let grouped = summarize_by_project(&records);
        assert_eq!(grouped.groups.len(), 2);

        let alpha = &grouped.groups[0];
        assert_eq!(alpha.group, "Alpha");
        assert_eq!(alpha.total_runs, 2);
        assert_eq!(alpha.average_recovery, Some(90.0));
        assert_eq!(alpha.min_recovery, Some(80.0));
        assert_eq!(alpha.max_recovery, Some(100.0));
        assert_eq!(alpha.average_rqd, Some(60.0));

        let beta = &grouped.groups[1];
        assert_eq!(beta.group, "Beta");
        assert_eq!(beta.average_rqd, None);

        assert_eq!(grouped.overall.total_core_runs, 3);
        assert_eq!(grouped.overall.total_drill_holes, 2);
    }

    #[test]
    fn test_grouped_by_drill_hole() {
        let records = vec![
            record("Alpha", "H1", Some(80.0), None),
            record("Alpha", "H2", Some(60.0), None),
        ];
        let grouped = summarize_by_drill_hole(&records);
        assert_eq!(grouped.groups.len(), 2);
        assert_eq!(grouped.groups[0].group, "H1");
        assert_eq!(grouped.groups[1].group, "H2");
    }

    #[test]
    fn test_accumulator_merge_matches_single_pass() {
        let records: Vec<MetricRecord> = (0..10)
            .map(|i| {
                record(
                    "P",
                    &format!("H{}", i % 3),
                    (i % 4 != 0).then(|| 80.0 + i as f64),
                    (i % 2 == 0).then(|| 50.0 + i as f64),
                )
            })
            .collect();

        let mut whole = MetricAccumulator::default();
        for r in &records {
            whole.add(r);
        }

        let (left, right) = records.split_at(4);
        let mut a = MetricAccumulator::default();
        left.iter().for_each(|r| a.add(r));
        let mut b = MetricAccumulator::default();
        right.iter().for_each(|r| b.add(r));
        a.merge(b);

        assert_eq!(a.report(), whole.report());
        assert_eq!(a.min_recovery(), whole.min_recovery());
        assert_eq!(a.max_recovery(), whole.max_recovery());
    }
}
