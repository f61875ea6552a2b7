//! Recovery Calculator
//!
//! Pure computation of the standard core recovery indices and their
//! derived classifications:
//! - `calculator`: TCR and RQD from raw length measurements
//! - `classification`: Deere's rock quality bands, over-recovery flag
//!
//! Nothing here performs I/O or holds state; identical inputs always
//! produce bit-identical outputs.

mod calculator;
mod classification;

pub use calculator::{
    compute_metrics, compute_rqd, compute_tcr, qualifies_for_rqd, rqd_from_length,
    RQD_MIN_PIECE_LENGTH_CM,
};
pub use classification::is_over_recovery;

pub(crate) use calculator::round2;
