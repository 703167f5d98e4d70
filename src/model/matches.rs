use std::fmt;

use serde::Serialize;

/// Stable handle of a match: its index in the sequence it was ingested from.
///
/// Two matches can carry identical field values and still be different
/// regions, so the colorer tracks them by handle instead of by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchId(usize);

impl MatchId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A matched region: a token range in a file of the first submission that
/// corresponds to a token range in a file of the second submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub first_file: String,  // forward-slash relative path
    pub second_file: String, // forward-slash relative path
    pub start_in_first: usize,
    pub end_in_first: usize,
    pub start_in_second: usize,
    pub end_in_second: usize,
    pub tokens: usize,
}

/// A match together with the palette index it was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredMatch {
    #[serde(flatten)]
    pub region: Match,
    pub color_index: usize,
}
