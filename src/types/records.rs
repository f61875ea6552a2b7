//! Core logging record types
//!
//! Plain data records as fetched from the host application's API or built
//! at the input boundary. Depths are meters from collar; piece lengths are
//! centimeters. None of these types compute anything — derived metrics live
//! in `RecoveryMetrics` and the aggregate reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A drill hole in the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillHole {
    /// Hole identifier, e.g. "DDH-001"
    pub hole_id: String,
    pub project_name: String,
    /// Easting coordinate
    pub location_x: Option<f64>,
    /// Northing coordinate
    pub location_y: Option<f64>,
    pub elevation: Option<f64>,
    /// Hole azimuth (degrees)
    pub azimuth: Option<f64>,
    /// Hole dip (degrees, negative = down)
    pub dip: Option<f64>,
    /// Planned or final total depth (m)
    pub total_depth: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub drilling_company: Option<String>,
}

/// One continuous drilling advance between two depths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreRun {
    pub hole_id: String,
    pub run_number: u32,
    /// Top of run (m), from_depth < to_depth
    pub from_depth: f64,
    /// Bottom of run (m)
    pub to_depth: f64,
    /// Total core physically recovered (m)
    pub recovered_length: f64,
    /// Reported length of pieces >= 10 cm (m), when itemized pieces
    /// were not logged
    #[serde(default)]
    pub rqd_length: Option<f64>,
    #[serde(default)]
    pub drilling_date: Option<NaiveDate>,
}

impl CoreRun {
    /// Nominal drilled interval length (m): to_depth - from_depth
    pub fn run_length(&self) -> f64 {
        self.to_depth - self.from_depth
    }
}

/// Physical condition of a recovered core piece.
///
/// Descriptive only: the RQD calculation applies the 10 cm threshold to
/// every piece regardless of condition (mechanically broken pieces are not
/// excluded, matching established logging practice at the sites this
/// system serves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PieceCondition {
    #[default]
    Intact,
    Fractured,
    Broken,
}

/// A single unbroken fragment of recovered core within a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorePiece {
    /// Piece length (cm)
    pub length_cm: f64,
    #[serde(default)]
    pub condition: PieceCondition,
    #[serde(default)]
    pub notes: String,
}

impl CorePiece {
    pub fn new(length_cm: f64) -> Self {
        Self {
            length_cm,
            condition: PieceCondition::Intact,
            notes: String::new(),
        }
    }
}

/// A geologist-defined depth sub-range within a core run.
///
/// Carries descriptive geology only. Interval recovery/RQD contributions
/// are manual entries and are not reconciled against the parent run's
/// totals — inconsistent logging is surfaced downstream by QA/QC, not
/// rejected here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoreInterval {
    pub hole_id: String,
    pub run_number: u32,
    /// Top of interval (m)
    pub from_depth: f64,
    /// Bottom of interval (m)
    pub to_depth: f64,

    // === Lithology ===
    pub lithology: Option<String>,
    pub lithology_code: Option<String>,
    pub rock_type: Option<String>,
    pub color: Option<String>,
    pub grain_size: Option<String>,
    pub texture: Option<String>,

    // === Alteration ===
    pub alteration_type: Option<String>,
    pub alteration_intensity: Option<String>,

    // === Mineralization ===
    pub mineralization_type: Option<String>,
    pub mineral_abundance: Option<String>,

    // === Structure ===
    /// Fractures per meter
    pub fracture_frequency: Option<u32>,
    pub fracture_orientation: Option<String>,
    pub structural_features: Option<String>,

    // === Geotechnical ===
    pub rock_strength: Option<String>,
    pub weathering_grade: Option<String>,

    /// Directly-reported recovery for this interval (%)
    pub recovery_percentage: Option<f64>,
    /// Reported RQD contribution (m)
    pub rqd_contribution: Option<f64>,
    pub comments: Option<String>,
    pub logged_date: Option<NaiveDate>,
}

impl CoreInterval {
    /// Interval length (m)
    pub fn interval_length(&self) -> f64 {
        self.to_depth - self.from_depth
    }
}
