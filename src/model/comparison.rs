use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::matches::ColoredMatch;

/// Kind of similarity score a comparison reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    #[serde(rename = "AVG")]
    Average,
    #[serde(rename = "MAX")]
    Maximum,
    #[serde(rename = "MIN")]
    Minimum,
    Intersection,
    LongestMatch,
    MaximumLength,
}

impl MetricType {
    pub const ALL: [MetricType; 6] = [
        MetricType::Average,
        MetricType::Maximum,
        MetricType::Minimum,
        MetricType::Intersection,
        MetricType::LongestMatch,
        MetricType::MaximumLength,
    ];

    /// Key used for this metric in comparison files.
    pub fn key(self) -> &'static str {
        match self {
            MetricType::Average => "AVG",
            MetricType::Maximum => "MAX",
            MetricType::Minimum => "MIN",
            MetricType::Intersection => "INTERSECTION",
            MetricType::LongestMatch => "LONGEST_MATCH",
            MetricType::MaximumLength => "MAXIMUM_LENGTH",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetricType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricType::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| format!("unknown metric type: {s}"))
    }
}

/// Similarity score per metric. `NaN` marks a metric the source did not set.
pub type Similarities = BTreeMap<MetricType, f64>;

/// A file of a submission, identified by its normalized relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionFile {
    pub name: String,
    #[serde(skip)]
    pub content: String,
}

/// Everything the viewer needs to render one submission pair.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub first_submission_id: String,
    pub second_submission_id: String,
    pub similarities: Similarities,
    pub files_of_first_submission: Vec<SubmissionFile>,
    pub files_of_second_submission: Vec<SubmissionFile>,
    /// Colored matches, ordered by ascending token count.
    pub matches: Vec<ColoredMatch>,
}
