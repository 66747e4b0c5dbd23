//! Object classification catalog
//!
//! Decides which world objects are eligible for visibility toggling. Three
//! match strategies exist: full hierarchical path, exact bare name, and bare
//! name substring. Entries are split into an always-eligible set and a
//! filtered set that only applies when the player requests the extended
//! toggle.
//!
//! The catalog is populated once from the built-in tables and is append-only
//! afterwards; the debug learn command may add entries but nothing is ever
//! removed or mutated.

mod data;
mod exclusion;

pub use exclusion::ExclusionSet;

use serde::{Deserialize, Serialize};

/// How an entry's pattern is compared against an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Full slash-separated hierarchical path, resolved directly by the host
    FullPath,
    /// Exact bare-name comparison after suffix stripping
    ExactName,
    /// Substring containment in the stripped bare name
    Contains,
}

/// When an entry participates in eligibility checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityMode {
    /// Eligible in every toggle mode
    Always,
    /// Eligible only when the filtered set is requested
    FilteredOnly,
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    /// Pattern interpreted per [`MatchStrategy`]
    pub pattern: String,
    /// Why this object is toggleable; informational only, never load-bearing
    pub reason: String,
    /// Whether the entry is gated behind the filtered flag
    pub mode: EligibilityMode,
    /// How the pattern is compared
    pub strategy: MatchStrategy,
}

impl ClassificationEntry {
    /// Create an entry
    pub fn new(
        pattern: impl Into<String>,
        reason: impl Into<String>,
        mode: EligibilityMode,
        strategy: MatchStrategy,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.into(),
            mode,
            strategy,
        }
    }
}

/// Strip the host-generated disambiguation suffix from a raw node name
///
/// Hosts decorate duplicated nodes with a trailing marker after the first
/// space (`"Door_A (Clone)"`, `"Structure (1)"`); the catalog matches on the
/// undecorated name.
pub fn bare_name(raw: &str) -> &str {
    raw.split(' ').next().unwrap_or(raw)
}

/// The classification tables
///
/// A flat, insertion-ordered entry list. Relative match priority between the
/// exact and substring strategies is unspecified behavior; only membership is
/// contractual, and the reason string attached to a multi-match name may
/// depend on insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClassificationCatalog {
    entries: Vec<ClassificationEntry>,
}

impl ClassificationCatalog {
    /// Create an empty catalog (no object is eligible)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the catalog pre-populated with the built-in tables
    pub fn builtin() -> Self {
        use EligibilityMode::{Always, FilteredOnly};
        use MatchStrategy::{Contains, ExactName, FullPath};

        let mut catalog = Self::empty();
        let tables: [(&[(&str, &str)], EligibilityMode, MatchStrategy); 5] = [
            (data::FULL_PATH_ALWAYS, Always, FullPath),
            (data::FULL_PATH_FILTERED, FilteredOnly, FullPath),
            (data::EXACT_NAME_ALWAYS, Always, ExactName),
            (data::EXACT_NAME_FILTERED, FilteredOnly, ExactName),
            (data::NAME_CONTAINS_ALWAYS, Always, Contains),
        ];
        for (table, mode, strategy) in tables {
            for (pattern, reason) in table {
                catalog.insert(ClassificationEntry::new(*pattern, *reason, mode, strategy));
            }
        }
        catalog
    }

    /// Append an entry; entries are never removed or mutated
    pub fn insert(&mut self, entry: ClassificationEntry) {
        self.entries.push(entry);
    }

    /// Whether an object with the given raw name may be toggled
    ///
    /// Checks the exact-name entries, then (when `filtered` is set) the
    /// filtered exact-name entries, then the substring entries in insertion
    /// order. Absence of a match is the normal "not eligible" outcome, not an
    /// error. Full-path entries are applied by direct path resolution in the
    /// command layer, not here.
    pub fn is_eligible(&self, raw_name: &str, filtered: bool) -> bool {
        self.classify(raw_name, filtered).is_some()
    }

    /// Like [`Self::is_eligible`], returning the matching entry
    pub fn classify(&self, raw_name: &str, filtered: bool) -> Option<&ClassificationEntry> {
        let name = bare_name(raw_name);

        let exact = |mode: EligibilityMode| {
            self.entries
                .iter()
                .find(|e| e.strategy == MatchStrategy::ExactName && e.mode == mode && e.pattern == name)
        };

        if let Some(entry) = exact(EligibilityMode::Always) {
            return Some(entry);
        }
        if filtered {
            if let Some(entry) = exact(EligibilityMode::FilteredOnly) {
                return Some(entry);
            }
        }
        self.entries
            .iter()
            .filter(|e| e.strategy == MatchStrategy::Contains && e.mode == EligibilityMode::Always)
            .find(|e| name.contains(e.pattern.as_str()))
    }

    /// Full-path entries that are always applied
    pub fn full_path_always(&self) -> impl Iterator<Item = &ClassificationEntry> {
        self.by_table(MatchStrategy::FullPath, EligibilityMode::Always)
    }

    /// Full-path entries applied only in filtered mode
    pub fn full_path_filtered(&self) -> impl Iterator<Item = &ClassificationEntry> {
        self.by_table(MatchStrategy::FullPath, EligibilityMode::FilteredOnly)
    }

    fn by_table(
        &self,
        strategy: MatchStrategy,
        mode: EligibilityMode,
    ) -> impl Iterator<Item = &ClassificationEntry> {
        self.entries
            .iter()
            .filter(move |e| e.strategy == strategy && e.mode == mode)
    }

    /// Append a learned pattern to the exact, substring, and full-path tables
    ///
    /// Used by the debug learn command. The new entries are always-eligible.
    /// Re-learning a known pattern keeps the first entry.
    pub fn learn(&mut self, pattern: &str) {
        let reason = format!("{pattern} (learned at runtime)");
        for strategy in [MatchStrategy::ExactName, MatchStrategy::Contains, MatchStrategy::FullPath] {
            if self
                .entries
                .iter()
                .any(|e| e.strategy == strategy && e.pattern == pattern)
            {
                log::debug!("pattern '{pattern}' already in {strategy:?} table");
                continue;
            }
            self.insert(ClassificationEntry::new(
                pattern,
                reason.as_str(),
                EligibilityMode::Always,
                strategy,
            ));
        }
    }

    /// Number of entries across all tables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
