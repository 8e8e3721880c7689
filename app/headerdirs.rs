//! Command-line interface for headerdirs.
//!
//! Takes exactly one directory and prints, one per line, every subdirectory
//! below it that directly holds header files.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use headerdirs::{
    ErrorPolicy, ExclusionSet, FinderBuilder, FinderOptions, HeaderDirs, HeaderSuffixes,
    find_header_directories, output,
};
use std::io;
use std::path::PathBuf;
use std::process::exit;

/// List the directories below a root that directly contain C/C++ headers
#[derive(Parser)]
#[command(name = "headerdirs", version, about, long_about = None)]
struct Cli {
    /// Root directory to search
    #[arg(value_name = "DIRECTORY")]
    root: PathBuf,

    /// Extra directory-name substring to prune (can be repeated)
    #[arg(short = 'E', long = "exclude")]
    exclude: Vec<String>,

    /// Do not prune test/support/java/swift/xcodeproj directories
    #[arg(long)]
    no_default_excludes: bool,

    /// Header suffix to look for, replacing .h and .hpp (can be repeated)
    #[arg(short = 's', long = "suffix")]
    suffixes: Vec<String>,

    /// Glob matched against relative directory paths; matches are pruned (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Stop at the first unreadable directory instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// Indented JSON
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Lines,
    Json,
}

impl Cli {
    fn into_options(self) -> (FinderOptions, Format, bool) {
        let mut exclusions = if self.no_default_excludes {
            ExclusionSet::empty()
        } else {
            ExclusionSet::default()
        };
        for substring in &self.exclude {
            exclusions.insert(substring);
        }
        let suffixes = if self.suffixes.is_empty() {
            HeaderSuffixes::default()
        } else {
            HeaderSuffixes::new(self.suffixes)
        };
        let policy = if self.strict {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Skip
        };

        let mut builder = FinderBuilder::new(self.root)
            .exclusions(exclusions)
            .header_suffixes(suffixes)
            .ignore_patterns(self.ignore_patterns)
            .follow_links(self.follow_links)
            .error_policy(policy);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.format, self.pretty)
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => usage(),
    };

    #[cfg(feature = "logging")]
    init_logging();

    let (options, format, pretty) = cli.into_options();
    match format {
        Format::Lines => run_lines(&options),
        Format::Json => run_json(options, pretty),
    }
}

/// Prints the usage line to stdout and exits with status 1.
fn usage() -> ! {
    println!("{}", Cli::command().render_usage());
    exit(1);
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_lines(options: &FinderOptions) {
    let dirs = match HeaderDirs::new(options) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for dir in dirs {
        let dir = match dir {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        };
        if output::write_line(&mut handle, &dir).is_err() {
            eprintln!("Failed to write to stdout");
            exit(1);
        }
    }
}

fn run_json(options: FinderOptions, pretty: bool) {
    let result = find_header_directories(options)
        .and_then(|r| output::format_result(&r, output::OutputFormat::Json, pretty));
    match result {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
