//! Turn comparison documents into colored `Comparison` records.
//!
//! A comparison document names the two submissions, their similarity
//! scores and the matched regions. Older reports carry a single
//! `similarity` value instead of the per-metric `similarities` map; it is
//! read as the average similarity with the maximum left unset.

pub mod report_dir;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::coloring::color_matches;
use crate::error::LoadError;
use crate::model::{Comparison, Match, MetricType, Similarities, SubmissionFile, normalize_path};

/// A comparison document as stored on disk.
#[derive(Debug, Deserialize)]
pub struct RawComparison {
    pub id1: String,
    pub id2: String,
    #[serde(default)]
    pub similarities: Option<HashMap<String, f64>>,
    /// Single average similarity written by older report versions.
    #[serde(default)]
    pub similarity: Option<f64>,
    pub matches: Vec<RawMatch>,
}

/// One entry of a comparison document's `matches` array.
#[derive(Debug, Deserialize)]
pub struct RawMatch {
    pub file1: String,
    pub file2: String,
    pub start1: usize,
    pub end1: usize,
    pub start2: usize,
    pub end2: usize,
    pub tokens: usize,
}

pub fn parse_comparison(json: &str) -> Result<RawComparison, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::MalformedInput {
        context: "comparison".to_string(),
        source,
    })
}

/// Read the similarity scores, preferring the per-metric map over the
/// legacy single value.
pub fn extract_similarities(raw: &RawComparison) -> Result<Similarities, LoadError> {
    if let Some(map) = &raw.similarities {
        let mut similarities = Similarities::new();
        for (key, value) in map {
            match key.parse::<MetricType>() {
                Ok(metric) => {
                    similarities.insert(metric, *value);
                }
                Err(err) => warn!("{}-{}: {err}, skipped", raw.id1, raw.id2),
            }
        }
        return Ok(similarities);
    }

    if let Some(average) = raw.similarity {
        debug!(id1 = %raw.id1, id2 = %raw.id2, "legacy single similarity value");
        return Ok(Similarities::from([
            (MetricType::Average, average),
            (MetricType::Maximum, f64::NAN),
        ]));
    }

    Err(LoadError::NoSimilarityData {
        first: raw.id1.clone(),
        second: raw.id2.clone(),
    })
}

pub fn to_match(raw: &RawMatch) -> Match {
    Match {
        first_file: normalize_path(&raw.file1),
        second_file: normalize_path(&raw.file2),
        start_in_first: raw.start1,
        end_in_first: raw.end1,
        start_in_second: raw.start2,
        end_in_second: raw.end2,
        tokens: raw.tokens,
    }
}

/// Assemble a `Comparison`: similarities, then matches colored with a
/// palette of `palette_size`.
pub fn build_comparison(
    raw: RawComparison,
    files_of_first_submission: Vec<SubmissionFile>,
    files_of_second_submission: Vec<SubmissionFile>,
    palette_size: usize,
) -> Result<Comparison, LoadError> {
    let similarities = extract_similarities(&raw)?;
    let uncolored: Vec<Match> = raw.matches.iter().map(to_match).collect();
    let matches = color_matches(&uncolored, palette_size)?;

    Ok(Comparison {
        first_submission_id: raw.id1,
        second_submission_id: raw.id2,
        similarities,
        files_of_first_submission,
        files_of_second_submission,
        matches,
    })
}

/// Load a standalone comparison file. Submission file lists stay empty.
pub fn load_comparison_file(path: &Path, palette_size: usize) -> Result<Comparison, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = parse_comparison(&json)?;
    build_comparison(raw, Vec::new(), Vec::new(), palette_size)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
