//! Subcommands.
//!
//! - `flatten <listing>` - flatten a JSON listing and print the mapping
//! - `zip <listing> -o <archive>` - flatten a JSON listing into a zip file
//! - `time` - print the wall-clock snapshot
//! - `package [pkg_dir]` - add the JS snippets to a wasm-pack manifest

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use doggybag_serde::JsonListingCodec;
use doggybag_sys::{DosDateTime, LocalClock, SystemClock, UtcClock};
use doggybag_tree::FlatMapping;
use doggybag_zip::ZipArchiveBuilder;

use crate::{config, package, CliError};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Flatten a JSON directory listing into path -> contents
    Flatten(FlattenArgs),
    /// Flatten a JSON directory listing into a stored zip archive
    Zip(ZipArgs),
    /// Print the wall-clock snapshot [hours, minutes, seconds, day, month0, year]
    Time(TimeArgs),
    /// Add the JS snippet files to a wasm-pack package.json
    Package(PackageArgs),
}

#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// JSON file holding the listing
    pub listing: PathBuf,

    /// Path prefix for every key
    #[arg(long)]
    pub prefix: Option<String>,

    /// Fail on contents that are neither text nor bytes
    #[arg(long)]
    pub strict: bool,

    /// Walk with an explicit stack instead of recursion
    #[arg(long)]
    pub iterative: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `path<TAB>size` line per file
    Text,
    /// A JSON object of path -> contents
    Json,
}

#[derive(Args, Debug)]
pub struct ZipArgs {
    /// JSON file holding the listing
    pub listing: PathBuf,

    /// Archive to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path prefix for every entry
    #[arg(long)]
    pub prefix: Option<String>,

    /// Fail on contents that are neither text nor bytes
    #[arg(long)]
    pub strict: bool,

    /// Stamp entries with UTC instead of local time
    #[arg(long)]
    pub utc: bool,
}

#[derive(Args, Debug)]
pub struct TimeArgs {
    /// Read the UTC clock instead of local time
    #[arg(long)]
    pub utc: bool,

    /// Print packed DOS time and date fields
    #[arg(long)]
    pub dos: bool,
}

#[derive(Args, Debug)]
pub struct PackageArgs {
    /// wasm-pack output directory
    #[arg(default_value = "pkg")]
    pub pkg_dir: PathBuf,
}

/// Execute a command, returning what should be printed to stdout.
pub fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Flatten(args) => flatten(&args),
        Command::Zip(args) => {
            if args.utc {
                zip(&args, &UtcClock)
            } else {
                zip(&args, &LocalClock)
            }
        }
        Command::Time(args) => {
            if args.utc {
                time(&args, &UtcClock)
            } else {
                time(&args, &LocalClock)
            }
        }
        Command::Package(args) => package(&args),
    }
}

fn read_listing(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn flatten(args: &FlattenArgs) -> Result<String, CliError> {
    let bytes = read_listing(&args.listing)?;

    let options = config::build_options(args.strict, args.iterative, |key| {
        std::env::var(key).ok()
    });
    tracing::debug!(listing = %args.listing.display(), ?options, "flattening listing");

    let codec = JsonListingCodec::new()
        .with_options(options)
        .pretty(args.pretty);
    let mapping = codec.decode_mapping(&bytes, args.prefix.as_deref())?;

    match args.format {
        OutputFormat::Text => Ok(format_text(&mapping)),
        OutputFormat::Json => {
            let encoded = codec.encode_mapping(&mapping)?;
            let mut out = String::from_utf8_lossy(&encoded).into_owned();
            out.push('\n');
            Ok(out)
        }
    }
}

fn zip(args: &ZipArgs, clock: &dyn SystemClock) -> Result<String, CliError> {
    let bytes = read_listing(&args.listing)?;

    let options = config::build_options(args.strict, false, |key| std::env::var(key).ok());
    let mapping = JsonListingCodec::new()
        .with_options(options)
        .decode_mapping(&bytes, args.prefix.as_deref())?;

    let archive = ZipArchiveBuilder::from_clock(clock)?.build(&mapping)?;
    std::fs::write(&args.output, &archive).map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })?;
    tracing::info!(output = %args.output.display(), files = mapping.len(), "wrote archive");

    Ok(format!(
        "wrote {} files ({} bytes) to {}\n",
        mapping.len(),
        archive.len(),
        args.output.display()
    ))
}

fn format_text(mapping: &FlatMapping) -> String {
    let mut out = String::new();
    for (path, contents) in mapping.iter() {
        let _ = writeln!(out, "{}\t{}", path, contents.len());
    }
    out
}

fn time(args: &TimeArgs, clock: &dyn SystemClock) -> Result<String, CliError> {
    let snapshot = clock.snapshot();

    if args.dos {
        let packed = DosDateTime::from_snapshot(&snapshot)?;
        return Ok(format!(
            "time=0x{:04x} date=0x{:04x}\n",
            packed.time, packed.date
        ));
    }

    Ok(format!("{:?}\n", snapshot.to_array()))
}

fn package(args: &PackageArgs) -> Result<String, CliError> {
    let added = package::package_snippets(&args.pkg_dir)?;

    let mut out = String::new();
    if added.is_empty() {
        out.push_str("snippets already listed\n");
    }
    for file in added {
        let _ = writeln!(out, "added {}", file);
    }
    Ok(out)
}
