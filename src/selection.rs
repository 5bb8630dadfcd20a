// Selection set: the ordered, case-insensitively deduplicated list of
// accepted image paths for the current session.

use crate::validator::{FileValidator, ImageFileValidator};
use std::collections::HashSet;

/// Outcome of one `SelectionSet::add` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddReport {
    /// Number of candidates submitted.
    pub requested: usize,
    /// Number of candidates actually appended.
    pub added: usize,
}

impl AddReport {
    /// Candidates rejected as invalid or duplicate.
    pub fn skipped(&self) -> usize {
        self.requested - self.added
    }
}

/// Insertion-ordered set of validated paths.
///
/// No two entries compare equal ignoring case. Entries are kept exactly
/// as they were submitted.
#[derive(Debug)]
pub struct SelectionSet<V: FileValidator = ImageFileValidator> {
    entries: Vec<String>,
    keys: HashSet<String>,
    validator: V,
}

impl SelectionSet<ImageFileValidator> {
    pub fn new() -> Self {
        Self::with_validator(ImageFileValidator)
    }
}

impl Default for SelectionSet<ImageFileValidator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: FileValidator> SelectionSet<V> {
    pub fn with_validator(validator: V) -> Self {
        SelectionSet {
            entries: Vec::new(),
            keys: HashSet::new(),
            validator,
        }
    }

    /// Validate each candidate in order and append the ones that are new.
    ///
    /// Membership is checked against the running set, so a repeated
    /// candidate within the same batch is only taken once.
    pub fn add<I, S>(&mut self, candidates: I) -> AddReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = AddReport::default();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            report.requested += 1;
            if !self.validator.is_valid(candidate) {
                continue;
            }
            if !self.keys.insert(fold(candidate)) {
                log::debug!("skipping duplicate {candidate:?}");
                continue;
            }
            self.entries.push(candidate.to_string());
            report.added += 1;
        }
        log::info!(
            "selection: {} requested, {} added, {} total",
            report.requested,
            report.added,
            self.entries.len()
        );
        report
    }

    pub fn contains(&self, path: &str) -> bool {
        self.keys.contains(&fold(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn paths(&self) -> &[String] {
        &self.entries
    }
}

fn fold(path: &str) -> String {
    path.to_lowercase()
}
