//! Name predicates used by the walk: directory exclusions and header suffixes.

use crate::options::{DEFAULT_EXCLUSIONS, DEFAULT_HEADER_SUFFIXES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Case-insensitive substring matchers for directory names.
///
/// A directory is pruned when its lower-cased name contains any of the
/// substrings. Substrings are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionSet {
    substrings: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for s in substrings {
            set.insert(s);
        }
        set
    }

    /// A set that prunes nothing.
    pub fn empty() -> Self {
        Self {
            substrings: Vec::new(),
        }
    }

    pub fn insert(&mut self, substring: impl AsRef<str>) {
        let lower = substring.as_ref().to_lowercase();
        // an empty substring would match every directory
        if !lower.is_empty() && !self.substrings.contains(&lower) {
            self.substrings.push(lower);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.substrings.iter().map(String::as_str)
    }

    /// Returns `true` if `name` should be pruned.
    pub fn matches(&self, name: &str) -> bool {
        if self.substrings.is_empty() {
            return false;
        }
        let lower = name.to_lowercase();
        self.substrings.iter().any(|s| lower.contains(s.as_str()))
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS)
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(substrings: Vec<String>) -> Self {
        Self::new(substrings)
    }
}

impl From<ExclusionSet> for Vec<String> {
    fn from(set: ExclusionSet) -> Self {
        set.substrings
    }
}

/// Case-sensitive file-name suffixes that identify header files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderSuffixes {
    suffixes: Vec<String>,
}

impl HeaderSuffixes {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for s in suffixes {
            let s = s.into();
            if !s.is_empty() && !out.contains(&s) {
                out.push(s);
            }
        }
        Self { suffixes: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn is_header(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s.as_str()))
    }
}

impl Default for HeaderSuffixes {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_SUFFIXES.iter().copied())
    }
}

/// Counts the header files directly inside `dir`. Subdirectories are not
/// looked into.
///
/// Only regular files count. A symbolic link counts when it resolves to a
/// regular file.
pub(crate) fn count_headers(dir: &Path, suffixes: &HeaderSuffixes) -> io::Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !suffixes.is_header(&name.to_string_lossy()) {
            continue;
        }
        let file_type = entry.file_type()?;
        let regular = if file_type.is_symlink() {
            fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
        } else {
            file_type.is_file()
        };
        if regular {
            count += 1;
        }
    }
    Ok(count)
}
