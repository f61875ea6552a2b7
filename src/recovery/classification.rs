//! Derived quality classifications from computed recovery metrics

use crate::types::RockQuality;

impl RockQuality {
    /// Classify rock mass quality from an RQD percentage (Deere's bands).
    ///
    /// Values outside [0, 100] clamp into the nearest band so a bad
    /// upstream value still renders as a label rather than panicking.
    pub fn from_rqd(rqd: f64) -> Self {
        if rqd < 25.0 {
            RockQuality::VeryPoor
        } else if rqd < 50.0 {
            RockQuality::Poor
        } else if rqd < 75.0 {
            RockQuality::Fair
        } else if rqd < 90.0 {
            RockQuality::Good
        } else {
            RockQuality::Excellent
        }
    }

    /// Display label used on logging sheets and dashboards
    pub fn label(&self) -> &'static str {
        match self {
            RockQuality::VeryPoor => "Very Poor",
            RockQuality::Poor => "Poor",
            RockQuality::Fair => "Fair",
            RockQuality::Good => "Good",
            RockQuality::Excellent => "Excellent",
        }
    }
}

/// Whether a TCR value indicates over-recovery (> 100%).
///
/// The calculator never clamps; this predicate is the hook for raising a
/// QA/QC anomaly ticket downstream.
pub fn is_over_recovery(tcr: f64) -> bool {
    tcr.is_finite() && tcr > 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_bands() {
        assert_eq!(RockQuality::from_rqd(0.0), RockQuality::VeryPoor);
        assert_eq!(RockQuality::from_rqd(24.99), RockQuality::VeryPoor);
        assert_eq!(RockQuality::from_rqd(25.0), RockQuality::Poor);
        assert_eq!(RockQuality::from_rqd(50.0), RockQuality::Fair);
        assert_eq!(RockQuality::from_rqd(75.0), RockQuality::Good);
        assert_eq!(RockQuality::from_rqd(89.99), RockQuality::Good);
        assert_eq!(RockQuality::from_rqd(90.0), RockQuality::Excellent);
        assert_eq!(RockQuality::from_rqd(100.0), RockQuality::Excellent);
    }

    #[test]
    fn test_out_of_range_rqd_clamps_to_band() {
        assert_eq!(RockQuality::from_rqd(-5.0), RockQuality::VeryPoor);
        assert_eq!(RockQuality::from_rqd(130.0), RockQuality::Excellent);
    }

    #[test]
    fn test_over_recovery_predicate() {
        assert!(is_over_recovery(105.0));
        assert!(!is_over_recovery(100.0));
        assert!(!is_over_recovery(95.0));
        assert!(!is_over_recovery(f64::NAN));
    }
}
