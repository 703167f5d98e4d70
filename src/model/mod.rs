//! Typed records a comparison is made of: matched regions, their colors,
//! similarity metrics and the assembled comparison itself.

mod comparison;
mod matches;
mod path;

pub use comparison::{Comparison, MetricType, Similarities, SubmissionFile};
pub use matches::{ColoredMatch, Match, MatchId};
pub use path::normalize_path;
