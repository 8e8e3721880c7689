use crate::filter::{ExclusionSet, HeaderSuffixes};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory-name substrings pruned by default.
pub const DEFAULT_EXCLUSIONS: &[&str] = &["test", "support", "java", "swift", "xcodeproj"];
/// File-name suffixes that mark a header file by default.
pub const DEFAULT_HEADER_SUFFIXES: &[&str] = &[".h", ".hpp"];

/// What to do when a directory cannot be read during the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Log the failure and keep walking.
    #[default]
    Skip,
    /// Stop and return the first failure.
    Abort,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderOptions {
    pub root: PathBuf,
    pub exclusions: ExclusionSet,
    pub header_suffixes: HeaderSuffixes,
    pub ignore_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub sort: bool,
    pub error_policy: ErrorPolicy,
}
impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclusions: ExclusionSet::default(),
            header_suffixes: HeaderSuffixes::default(),
            ignore_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            sort: true,
            error_policy: ErrorPolicy::Skip,
        }
    }
}
#[derive(Debug, Default)]
pub struct FinderBuilder {
    options: FinderOptions,
}
impl FinderBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FinderOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the whole exclusion set.
    pub fn exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.options.exclusions = exclusions;
        self
    }
    /// Adds one substring on top of the current exclusions.
    pub fn exclude(mut self, substring: impl AsRef<str>) -> Self {
        self.options.exclusions.insert(substring);
        self
    }
    pub fn header_suffixes(mut self, suffixes: HeaderSuffixes) -> Self {
        self.options.header_suffixes = suffixes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn sort(mut self, yes: bool) -> Self {
        self.options.sort = yes;
        self
    }
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.options.error_policy = policy;
        self
    }
    pub fn build(self) -> FinderOptions {
        self.options
    }
}
