use crate::error::FinderError;
use crate::filter::{ExclusionSet, HeaderSuffixes, count_headers};
use crate::options::{ErrorPolicy, FinderOptions};
use crate::types::{FinderResult, HeaderDirectory};
use globset::GlobSet;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &FinderOptions) -> Result<Self, FinderError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links);
        if options.sort {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        let matcher = if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    FinderError::InvalidPattern(format!("'{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            Some(glob_builder.build().map_err(|e| {
                FinderError::InvalidPattern(format!(
                    "failed to build glob set from [{}]: {}",
                    options.ignore_patterns.join(", "),
                    e
                ))
            })?)
        } else {
            None
        };
        let root = options.root.clone();
        let exclusions = options.exclusions.clone();
        builder.filter_entry(move |entry| keep_entry(entry, &root, &exclusions, matcher.as_ref()));
        Ok(Self {
            inner: builder.build(),
        })
    }
}
/// Decides whether the walk yields `entry` and, for directories, descends
/// into it. Only directories and links to directories survive below the root.
fn keep_entry(
    entry: &DirEntry,
    root: &Path,
    exclusions: &ExclusionSet,
    matcher: Option<&GlobSet>,
) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if !is_dir(entry) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if exclusions.matches(&name) {
        #[cfg(feature = "logging")]
        tracing::debug!("Pruned by name: {}", entry.path().display());
        return false;
    }
    if let Some(matcher) = matcher {
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            #[cfg(feature = "logging")]
            tracing::debug!("Pruned by pattern: {}", relative.display());
            return false;
        }
    }
    true
}
/// A symlink to a directory counts as one. The walker only descends into it
/// when links are followed.
fn is_dir(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()),
        _ => false,
    }
}
/// Lazily yields qualifying directories as the walk discovers them.
///
/// Under [`ErrorPolicy::Abort`] the first error is yielded and the iterator
/// is exhausted afterwards. Under [`ErrorPolicy::Skip`] errors are logged and
/// never yielded.
pub struct HeaderDirs {
    inner: ignore::Walk,
    root: PathBuf,
    suffixes: HeaderSuffixes,
    error_policy: ErrorPolicy,
    failed: bool,
}
impl HeaderDirs {
    pub fn new(options: &FinderOptions) -> Result<Self, FinderError> {
        #[cfg(feature = "logging")]
        tracing::debug!("Searching for header directories under {}", options.root.display());
        let walker = Walker::new(options)?;
        Ok(Self {
            inner: walker.inner,
            root: options.root.clone(),
            suffixes: options.header_suffixes.clone(),
            error_policy: options.error_policy,
            failed: false,
        })
    }
    fn on_error(&mut self, err: FinderError) -> Option<FinderError> {
        match self.error_policy {
            ErrorPolicy::Abort => {
                self.failed = true;
                Some(err)
            }
            ErrorPolicy::Skip => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping: {}", err);
                #[cfg(not(feature = "logging"))]
                let _ = err;
                None
            }
        }
    }
}
impl Iterator for HeaderDirs {
    type Item = Result<HeaderDirectory, FinderError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => match self.on_error(FinderError::Walk(e.to_string())) {
                    Some(err) => return Some(Err(err)),
                    None => continue,
                },
            };
            // the root is walked, never reported
            if entry.depth() == 0 || !is_dir(&entry) {
                continue;
            }
            let path = entry.path();
            match count_headers(path, &self.suffixes) {
                Ok(0) => continue,
                Ok(headers) => {
                    let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
                    return Some(Ok(HeaderDirectory {
                        path: path.to_path_buf(),
                        relative,
                        headers,
                    }));
                }
                Err(e) => match self.on_error(FinderError::io(path, e)) {
                    Some(err) => return Some(Err(err)),
                    None => continue,
                },
            }
        }
    }
}
/// Walks `options.root` and collects every qualifying directory.
pub fn find_header_directories(options: FinderOptions) -> Result<FinderResult, FinderError> {
    let directories = HeaderDirs::new(&options)?.collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "logging")]
    tracing::debug!("Found {} header directories", directories.len());
    Ok(FinderResult {
        root: options.root,
        directories,
    })
}
