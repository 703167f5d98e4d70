use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{build_comparison, parse_comparison};
use crate::error::LoadError;
use crate::model::{Comparison, SubmissionFile, normalize_path};

pub const OVERVIEW_FILE: &str = "overview.json";
pub const SUBMISSION_INDEX_FILE: &str = "submissionFileIndex.json";
pub const FILES_DIR: &str = "files";

#[derive(Deserialize)]
struct Overview {
    #[serde(default)]
    submission_ids_to_comparison_file_name: HashMap<String, HashMap<String, String>>,
}

#[derive(Deserialize)]
struct SubmissionFileIndex {
    submission_file_indexes: HashMap<String, Vec<String>>,
}

/// An unpacked report: overview, submission file index, one JSON document
/// per comparison and the submitted sources under `files/`.
pub struct ReportDir {
    root: PathBuf,
}

impl ReportDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, relative: &Path) -> Result<String, LoadError> {
        let path = self.root.join(relative);
        std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        let text = self.read(Path::new(name))?;
        serde_json::from_str(&text).map_err(|source| LoadError::MalformedInput {
            context: name.to_string(),
            source,
        })
    }

    /// Name of the comparison file for a submission pair, in either order.
    /// Without an overview the conventional `{id1}-{id2}.json` is assumed.
    pub fn comparison_file_name(&self, id1: &str, id2: &str) -> Result<String, LoadError> {
        if !self.root.join(OVERVIEW_FILE).is_file() {
            return Ok(format!("{id1}-{id2}.json"));
        }

        let overview: Overview = self.read_json(OVERVIEW_FILE)?;
        let lookup = |a: &str, b: &str| {
            overview
                .submission_ids_to_comparison_file_name
                .get(a)
                .and_then(|inner| inner.get(b))
                .cloned()
        };
        lookup(id1, id2)
            .or_else(|| lookup(id2, id1))
            .ok_or_else(|| LoadError::ComparisonNotFound {
                first: id1.to_string(),
                second: id2.to_string(),
            })
    }

    fn try_submission_files(&self, id: &str) -> Result<Vec<SubmissionFile>, LoadError> {
        let mut index: SubmissionFileIndex = self.read_json(SUBMISSION_INDEX_FILE)?;
        let entries = index
            .submission_file_indexes
            .remove(id)
            .unwrap_or_default();

        entries
            .iter()
            .map(|entry| -> Result<SubmissionFile, LoadError> {
                let name = normalize_path(entry);
                let content = self.read(&Path::new(FILES_DIR).join(&name))?;
                Ok(SubmissionFile { name, content })
            })
            .collect()
    }

    /// Source files of a submission. A submission whose files cannot be
    /// loaded is reported and treated as having none.
    pub fn submission_files(&self, id: &str) -> Vec<SubmissionFile> {
        match self.try_submission_files(id) {
            Ok(files) => files,
            Err(err) => {
                warn!("submission '{id}': {err}");
                Vec::new()
            }
        }
    }

    /// Resolve, parse and color the comparison of `id1` and `id2`.
    pub fn load_comparison(
        &self,
        id1: &str,
        id2: &str,
        palette_size: usize,
    ) -> Result<Comparison, LoadError> {
        let file_name = self.comparison_file_name(id1, id2)?;
        debug!(file = %file_name, "loading comparison");
        let raw = parse_comparison(&self.read(Path::new(&file_name))?)?;

        let first = self.submission_files(&raw.id1);
        let second = self.submission_files(&raw.id2);
        build_comparison(raw, first, second, palette_size)
    }

    /// Every comparison document in the report, sorted by path. The
    /// overview is authoritative when present; otherwise every top-level
    /// `*.json` other than the metadata files is taken.
    pub fn comparison_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        if !self.root.join(OVERVIEW_FILE).is_file() {
            return Ok(self.walk_comparison_files());
        }

        let overview: Overview = self.read_json(OVERVIEW_FILE)?;
        let names: BTreeSet<String> = overview
            .submission_ids_to_comparison_file_name
            .into_values()
            .flat_map(HashMap::into_values)
            .collect();
        Ok(names.iter().map(|name| self.root.join(name)).collect())
    }

    fn walk_comparison_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .hidden(false)
            .follow_links(false)
            .max_depth(Some(1))
            .build()
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    warn!("{err}");
                    None
                }
            })
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(|e| e.into_path())
            .filter(|p| is_comparison_document(p))
            .collect();
        files.sort();
        files
    }
}

fn is_comparison_document(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".json") && name != OVERVIEW_FILE && name != SUBMISSION_INDEX_FILE
}

#[cfg(test)]
#[path = "report_dir_test.rs"]
mod tests;
