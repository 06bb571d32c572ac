//! Set-style operations over ordered string lists.
//!
//! Typical uses are finding duplicates in a list of e-mail addresses, or
//! removing every blocklisted entry from a target list. Lists keep their
//! order; results never reorder entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// How entries are case-folded before comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Compare entries exactly as given.
    #[default]
    AsIs,
    /// Fold every entry to lower case.
    Lower,
    /// Fold every entry to upper case.
    Upper,
}

impl CaseMode {
    /// Fold a single entry.
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::AsIs => value.to_string(),
            Self::Lower => value.to_lowercase(),
            Self::Upper => value.to_uppercase(),
        }
    }
}

/// An ordered list of strings with set-style operations.
///
/// The stored data and every list passed to an operation are folded with the
/// same [`CaseMode`].
///
/// # Example
///
/// ```
/// use colseq_table::{CaseMode, ListManager};
///
/// let targets = ListManager::new(["a@x.org", "B@x.org", "c@x.org"], CaseMode::Lower);
/// assert_eq!(targets.without(["b@X.org"]), ["a@x.org", "c@x.org"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListManager {
    data: Vec<String>,
    case_mode: CaseMode,
}

impl ListManager {
    /// Create a manager over `data`, folding it with `case_mode`.
    pub fn new<I, S>(data: I, case_mode: CaseMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            data: Self::fit_case(data, case_mode),
            case_mode,
        }
    }

    /// The folded entries.
    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// Replace the entries, folding them with the current mode.
    pub fn set_data<I, S>(&mut self, data: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.data = Self::fit_case(data, self.case_mode);
    }

    /// The configured case mode.
    pub fn case_mode(&self) -> CaseMode {
        self.case_mode
    }

    /// Entries not contained in `other`. Duplicates are kept.
    pub fn without<I, S>(&self, other: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let other = self.folded_set(other);
        let result: Vec<String> = self
            .data
            .iter()
            .filter(|entry| !other.contains(entry.as_str()))
            .cloned()
            .collect();
        debug!(input = self.data.len(), output = result.len(), "list without");
        result
    }

    /// Entries also contained in `other`. Duplicates are kept.
    pub fn intersect<I, S>(&self, other: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let other = self.folded_set(other);
        let result: Vec<String> = self
            .data
            .iter()
            .filter(|entry| other.contains(entry.as_str()))
            .cloned()
            .collect();
        debug!(input = self.data.len(), output = result.len(), "list intersect");
        result
    }

    /// Entries contained in either list, first occurrence only.
    pub fn union<I, S>(&self, other: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let other = Self::fit_case(other, self.case_mode);
        first_occurrences(self.data.iter().chain(other.iter()))
    }

    /// Entries without duplicates, first occurrence only.
    pub fn unique(&self) -> Vec<String> {
        first_occurrences(self.data.iter())
    }

    /// Every repeated occurrence of an entry.
    ///
    /// The first occurrence is not a duplicate, so `[a, b, a, a, c]` yields
    /// `[a, a]`.
    pub fn duplicates(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.data
            .iter()
            .filter(|entry| !seen.insert(*entry))
            .cloned()
            .collect()
    }

    /// Fold every entry of `list` with `case_mode`.
    pub fn fit_case<I, S>(list: I, case_mode: CaseMode) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        list.into_iter()
            .map(|entry| case_mode.apply(entry.as_ref()))
            .collect()
    }

    fn folded_set<I, S>(&self, other: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::fit_case(other, self.case_mode).into_iter().collect()
    }
}

fn first_occurrences<'a>(entries: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .filter(|entry| seen.insert(*entry))
        .cloned()
        .collect()
}
