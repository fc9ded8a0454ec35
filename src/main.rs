//! dirwalk - list a directory tree, filtered by entry type.
//!
//! Usage:
//!   dirwalk [PATH]           List every entry under PATH (default: .)
//!   dirwalk -f [PATH]        Regular files only
//!   dirwalk -d [PATH]        Directories only
//!   dirwalk -l [PATH]        Symbolic links only
//!   dirwalk -s [PATH]        Sort with the locale's collation order
//!   dirwalk --help           Show help

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result};

use dirwalk_scan::{Collation, FilterOptions, PathCollector, ScanConfig, ScanWarning, TreeScanner};

#[derive(Parser)]
#[command(
    name = "dirwalk",
    version,
    about = "Recursively list a directory tree",
    long_about = "dirwalk prints every entry under PATH, one per line, directories \
                  before their contents.\n\n\
                  Type flags combine: `-lf` lists symlinks and regular files. \
                  Filters only choose what is printed; every directory is still \
                  descended."
)]
struct Cli {
    /// Starting path (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Only symbolic links
    #[arg(short = 'l', long = "symlinks")]
    symlinks: bool,

    /// Only directories
    #[arg(short = 'd', long = "dirs")]
    dirs: bool,

    /// Only regular files
    #[arg(short = 'f', long = "files")]
    files: bool,

    /// Sort output using the locale's collation (LC_ALL, LC_COLLATE, LANG)
    #[arg(short = 's', long = "sort")]
    sort: bool,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            symlink_only: self.symlinks,
            dir_only: self.dirs,
            file_only: self.files,
            sorted: self.sort,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.filter_options();
    let config = ScanConfig::builder()
        .root(cli.path.as_path())
        .options(options)
        .build()?;

    let mut scanner = TreeScanner::new(config);
    let mut outcome = match scanner.run() {
        Ok(outcome) => outcome,
        Err(err) => {
            report_warnings(scanner.warnings());
            return Err(err.into());
        }
    };
    report_warnings(&outcome.warnings);

    if options.sorted {
        let collation = Collation::from_env();
        tracing::debug!(collation = ?collation, "sorting output");
        outcome.sort_with(&collation);
    }

    write_paths(&outcome.paths).context("Failed to write output")?;

    Ok(())
}

/// Install the stderr log subscriber.
fn init_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("error"),
            1 => tracing_subscriber::EnvFilter::new("warn"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Print one diagnostic line per skipped subtree or entry.
fn report_warnings(warnings: &[ScanWarning]) {
    for warning in warnings {
        eprintln!("dirwalk: {warning}");
    }
}

/// Write each path on its own line, byte for byte.
fn write_paths(paths: &PathCollector) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for path in paths {
        match write_path(&mut out, path) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            other => other?,
        }
    }

    match out.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(unix)]
fn write_path(out: &mut impl Write, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_path(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}
