//! Recovery trends by depth bucket

use std::collections::BTreeMap;

use tracing::warn;

use crate::recovery::round2;
use crate::types::{DepthBucketSummary, MetricRecord};

/// Depth bucketing options
#[derive(Debug, Clone, Copy)]
pub struct DepthBucketConfig {
    /// Bucket size (m)
    pub bucket_size: f64,
}

impl Default for DepthBucketConfig {
    fn default() -> Self {
        Self { bucket_size: 50.0 }
    }
}

#[derive(Debug, Clone, Default)]
struct BucketAccumulator {
    runs: usize,
    recovery_sum: f64,
    recovery_count: usize,
    rqd_sum: f64,
    rqd_count: usize,
}

/// Average recovery and RQD per fixed-size depth bucket, sorted by depth.
///
/// A run lands in the bucket containing its from_depth. Missing metrics
/// are excluded from that bucket's average, same as `summarize`.
pub fn recovery_by_depth(
    records: &[MetricRecord],
    config: DepthBucketConfig,
) -> Vec<DepthBucketSummary> {
    let bucket_size = if config.bucket_size.is_finite() && config.bucket_size > 0.0 {
        config.bucket_size
    } else {
        warn!(
            bucket_size = config.bucket_size,
            "invalid depth bucket size, using default"
        );
        DepthBucketConfig::default().bucket_size
    };

    // Key on integer bucket index so BTreeMap ordering is the depth order.
    let mut buckets: BTreeMap<i64, BucketAccumulator> = BTreeMap::new();

    for record in records {
        if !record.from_depth.is_finite() || record.from_depth < 0.0 {
            continue;
        }
        let index = (record.from_depth / bucket_size).floor() as i64;
        let acc = buckets.entry(index).or_default();
        acc.runs += 1;
        if let Some(recovery) = record.recovery.filter(|v| v.is_finite()) {
            acc.recovery_sum += recovery;
            acc.recovery_count += 1;
        }
        if let Some(rqd) = record.rqd.filter(|v| v.is_finite()) {
            acc.rqd_sum += rqd;
            acc.rqd_count += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(index, acc)| {
            let from_depth = index as f64 * bucket_size;
            let to_depth = from_depth + bucket_size;
            DepthBucketSummary {
                interval: format!("{from_depth:.0}-{to_depth:.0}m"),
                from_depth,
                to_depth,
                total_runs: acc.runs,
                average_recovery: (acc.recovery_count > 0)
                    .then(|| round2(acc.recovery_sum / acc.recovery_count as f64)),
                average_rqd: (acc.rqd_count > 0)
                    .then(|| round2(acc.rqd_sum / acc.rqd_count as f64)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from_depth: f64, recovery: Option<f64>, rqd: Option<f64>) -> MetricRecord {
        MetricRecord {
            project_name: "P".into(),
            hole_id: "H1".into(),
            recovery,
            rqd,
            recovered_length: 3.0,
            from_depth,
        }
    }

    #[test]
    fn test_default_fifty_meter_buckets() {
        let records = vec![
            record(12.0, Some(90.0), Some(70.0)),
            record(48.0, Some(80.0), Some(60.0)),
            record(52.0, Some(100.0), None),
        ];
        let buckets = recovery_by_depth(&records, DepthBucketConfig::default());
        assert_eq!(buckets.len(), 2);

        assert_eq!(buckets[0].interval, "0-50m");
        assert_eq!(buckets[0].total_runs, 2);
        assert_eq!(buckets[0].average_recovery, Some(85.0));
        assert_eq!(buckets[0].average_rqd, Some(65.0));

        assert_eq!(buckets[1].interval, "50-100m");
        assert_eq!(buckets[1].average_recovery, Some(100.0));
        assert_eq!(buckets[1].average_rqd, None);
    }

    #[test]
    fn test_sorted_by_depth() {
        let records = vec![
            record(220.0, Some(70.0), None),
            record(10.0, Some(95.0), None),
            record(120.0, Some(85.0), None),
        ];
        let buckets = recovery_by_depth(&records, DepthBucketConfig::default());
        let tops: Vec<f64> = buckets.iter().map(|b| b.from_depth).collect();
        assert_eq!(tops, vec![0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_invalid_bucket_size_falls_back_to_default() {
        let records = vec![record(75.0, Some(90.0), None)];
        let buckets = recovery_by_depth(&records, DepthBucketConfig { bucket_size: 0.0 });
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].interval, "50-100m");
    }

    #[test]
    fn test_bad_depth_skipped() {
        let records = vec![record(f64::NAN, Some(90.0), None)];
        assert!(recovery_by_depth(&records, DepthBucketConfig::default()).is_empty());
    }
}
