//! Pipeline stage identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The stages of a single-video pipeline run, in execution order.
///
/// A run moves strictly forward through these and terminates on the first
/// fatal failure or on successful persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Metadata,
    Shots,
    Keyframes,
    Semantics,
    Rhythm,
    Assemble,
    Persist,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Shots => "shots",
            Self::Keyframes => "keyframes",
            Self::Semantics => "semantics",
            Self::Rhythm => "rhythm",
            Self::Assemble => "assemble",
            Self::Persist => "persist",
        }
    }

    /// 1-based position for progress logging ("step 2/7").
    pub fn step(&self) -> usize {
        match self {
            Self::Metadata => 1,
            Self::Shots => 2,
            Self::Keyframes => 3,
            Self::Semantics => 4,
            Self::Rhythm => 5,
            Self::Assemble => 6,
            Self::Persist => 7,
        }
    }

    pub const TOTAL: usize = 7;
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
