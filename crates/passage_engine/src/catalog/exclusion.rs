//! Broad-scan name exclusion filter
//!
//! A cost-control measure for the spatial scan: the host graph carries
//! thousands of UI, player-rig, and effect nodes that are never toggle
//! candidates. Any raw name containing one of the configured fragments is
//! pruned before distance computation. The curated catalog tables are trusted
//! by construction and are never run through this filter.

use super::data;

/// Set of name fragments that disqualify objects from the broad scan
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    fragments: Vec<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExclusionSet {
    /// The built-in fragment list
    pub fn builtin() -> Self {
        Self::from_fragments(data::EXCLUDED_NAME_FRAGMENTS.split(','))
    }

    /// An empty set that excludes nothing
    pub fn none() -> Self {
        Self { fragments: Vec::new() }
    }

    /// Build a set from arbitrary fragments
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an object with this raw name is skipped by the broad scan
    pub fn is_excluded(&self, raw_name: &str) -> bool {
        self.fragments.iter().any(|f| raw_name.contains(f.as_str()))
    }

    /// Number of configured fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
