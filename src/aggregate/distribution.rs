//! Categorical distribution metrics (lithology breakdown)

use std::collections::BTreeMap;

use crate::recovery::round2;
use crate::types::{CategoryShare, CoreInterval};

#[derive(Debug, Clone, Default)]
struct CategoryAccumulator {
    count: usize,
    length: f64,
    recovery_sum: f64,
    recovery_count: usize,
}

/// Distribution of a categorical tag over associated lengths.
///
/// Each entry is `(category, length_m, optional recovery %)`. Share per
/// category = its summed length / total classified length × 100, 2 dp.
/// Categories never seen in the input simply do not appear — nothing is
/// rendered as 0%. Result is sorted by total length descending, then by
/// name for a stable order.
pub fn category_distribution<I>(entries: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = (String, f64, Option<f64>)>,
{
    let mut categories: BTreeMap<String, CategoryAccumulator> = BTreeMap::new();

    for (category, length, recovery) in entries {
        let acc = categories.entry(category).or_default();
        acc.count += 1;
        if length.is_finite() && length > 0.0 {
            acc.length += length;
        }
        if let Some(recovery) = recovery.filter(|v| v.is_finite()) {
            acc.recovery_sum += recovery;
            acc.recovery_count += 1;
        }
    }

    let total_length: f64 = categories.values().map(|a| a.length).sum();

    let mut shares: Vec<CategoryShare> = categories
        .into_iter()
        .map(|(category, acc)| CategoryShare {
            category,
            count: acc.count,
            total_length: round2(acc.length),
            percentage: if total_length > 0.0 {
                round2((acc.length / total_length) * 100.0)
            } else {
                0.0
            },
            average_recovery: (acc.recovery_count > 0)
                .then(|| round2(acc.recovery_sum / acc.recovery_count as f64)),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.total_length
            .partial_cmp(&a.total_length)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    shares
}

/// Lithology percentage breakdown over logged intervals.
///
/// Intervals with no lithology tag are skipped; they are unclassified
/// length and belong in neither a numerator nor the denominator.
pub fn lithology_distribution(intervals: &[CoreInterval]) -> Vec<CategoryShare> {
    category_distribution(intervals.iter().filter_map(|interval| {
        interval.lithology.clone().map(|lithology| {
            (
                lithology,
                interval.interval_length(),
                interval.recovery_percentage,
            )
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(lithology: Option<&str>, from: f64, to: f64, recovery: Option<f64>) -> CoreInterval {
        CoreInterval {
            hole_id: "DDH-001".into(),
            run_number: 1,
            from_depth: from,
            to_depth: to,
            lithology: lithology.map(str::to_string),
            recovery_percentage: recovery,
            ..Default::default()
        }
    }

    #[test]
    fn test_lithology_breakdown() {
        let intervals = vec![
            interval(Some("Basalt"), 0.0, 3.0, Some(95.0)),
            interval(Some("Granite"), 3.0, 4.0, Some(85.0)),
            interval(Some("Basalt"), 4.0, 6.0, None),
        ];
        let shares = lithology_distribution(&intervals);
        assert_eq!(shares.len(), 2);

        // Basalt: 5m of 6m classified = 83.33%
        assert_eq!(shares[0].category, "Basalt");
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].total_length, 5.0);
        assert_eq!(shares[0].percentage, 83.33);
        assert_eq!(shares[0].average_recovery, Some(95.0));

        assert_eq!(shares[1].category, "Granite");
        assert_eq!(shares[1].percentage, 16.67);
    }

    #[test]
    fn test_untagged_intervals_skipped() {
        let intervals = vec![
            interval(Some("Schist"), 0.0, 2.0, None),
            interval(None, 2.0, 10.0, None),
        ];
        let shares = lithology_distribution(&intervals);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percentage, 100.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(lithology_distribution(&[]).is_empty());
    }

    #[test]
    fn test_sorted_by_length_descending() {
        let shares = category_distribution(vec![
            ("A".to_string(), 1.0, None),
            ("B".to_string(), 5.0, None),
            ("C".to_string(), 3.0, None),
        ]);
        let order: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_zero_total_length_gives_zero_percent() {
        let shares = category_distribution(vec![("A".to_string(), 0.0, None)]);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percentage, 0.0);
        assert_eq!(shares[0].count, 1);
    }
}
