use std::path::PathBuf;

use crate::model::MatchId;

/// Failure to assign a color to every match.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    #[error("palette size must be at least 1")]
    EmptyPalette,

    #[error(
        "no admissible color for match {match_id} with a palette of {palette_size}; increase the palette size"
    )]
    Infeasible {
        match_id: MatchId,
        palette_size: usize,
    },
}

/// Failure to turn comparison data into a `Comparison`.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {context}: {source}")]
    MalformedInput {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no similarities found in comparison of '{first}' and '{second}'")]
    NoSimilarityData { first: String, second: String },

    #[error("no comparison file listed for '{first}' and '{second}'")]
    ComparisonNotFound { first: String, second: String },

    #[error(transparent)]
    Coloring(#[from] ColoringError),
}

/// Failure to load the TOML configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("palette_size must be between 1 and {max}, got {value}")]
    InvalidPaletteSize { value: usize, max: usize },
}
