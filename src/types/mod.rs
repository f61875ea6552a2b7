//! Shared data structures for the core recovery metrics engine
//!
//! - `records`: raw measurement records (DrillHole, CoreRun, CorePiece,
//!   CoreInterval) as supplied by the host application
//! - `reports`: computed outputs (RecoveryMetrics, summary and
//!   distribution reports) — immutable, recomputed on demand

mod records;
mod reports;

pub use records::*;
pub use reports::*;
