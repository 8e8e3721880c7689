//! # headerdirs
//!
//! `headerdirs` walks a directory tree and reports every subdirectory that
//! directly contains C/C++ header files. Subtrees whose directory name contains
//! one of a set of substrings (`test`, `support`, `java`, `swift`, `xcodeproj`
//! by default, matched case-insensitively) are pruned entirely.
//!
//! The root itself is walked but never reported. Results carry the path
//! relative to the root.
//!
//! It provides a collecting API ([`find_header_directories`]) and a lazy
//! iterator ([`HeaderDirs`]) that yields directories as they are discovered.
//!
//! # Features
//!
//! - `logging` (default): Emits traversal diagnostics via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use headerdirs::{ErrorPolicy, FinderBuilder, find_header_directories};
//!
//! let options = FinderBuilder::new("/proj")
//!     .exclude("third_party")
//!     .error_policy(ErrorPolicy::Abort)
//!     .build();
//!
//! let result = find_header_directories(options).expect("Failed to scan directory");
//! for dir in result.directories {
//!     println!("{} ({} headers)", dir.relative.display(), dir.headers);
//! }
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{HeaderDirs, find_header_directories};
pub use error::FinderError;
pub use filter::{ExclusionSet, HeaderSuffixes};
pub use options::{
    DEFAULT_EXCLUSIONS, DEFAULT_HEADER_SUFFIXES, ErrorPolicy, FinderBuilder, FinderOptions,
};
pub use types::{FinderResult, HeaderDirectory};
