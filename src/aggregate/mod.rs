//! Aggregator
//!
//! Rolls per-run/per-interval metrics up into the summary statistics the
//! dashboard and analytics surfaces consume:
//! - `summary`: overall and grouped (project / drill hole) summaries
//! - `distribution`: lithology percentage breakdown
//! - `depth`: recovery trends by fixed-size depth bucket
//!
//! All transformations are stateless. `MetricAccumulator` exposes an
//! associative `merge` so hosts may reduce large record sets in parallel.

mod depth;
mod distribution;
mod summary;

pub use depth::{recovery_by_depth, DepthBucketConfig};
pub use distribution::{category_distribution, lithology_distribution};
pub use summary::{summarize, summarize_by_drill_hole, summarize_by_project, MetricAccumulator};
