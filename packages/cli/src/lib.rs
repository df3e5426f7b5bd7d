//! # doggybag-cli
//!
//! Command-line front end for doggybag.
//!
//! ## Usage
//!
//! ```bash
//! # Flatten a JSON listing into path -> contents
//! doggybag flatten listing.json --prefix site
//! doggybag flatten listing.json --format json --pretty
//!
//! # Flatten a JSON listing straight into a zip archive
//! doggybag zip listing.json --output site.zip --prefix site
//!
//! # Wall-clock snapshot, optionally packed as DOS date/time
//! doggybag time
//! doggybag time --dos
//!
//! # Register the JS snippets in a wasm-pack manifest
//! doggybag package pkg
//! ```
//!
//! Logging goes to stderr and is controlled by `-v` or `DOGGYBAG_LOG`.

pub mod commands;
pub mod config;
mod error;
pub mod logging;
pub mod package;

pub use commands::{run, Command};
pub use error::CliError;
