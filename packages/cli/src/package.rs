//! Registering JS snippets in a wasm-pack package manifest.
//!
//! wasm-pack copies inline JS helpers into `pkg/snippets/<crate-hash>/` but
//! does not list them in `package.json`'s `files`, so they get left out of
//! the published package. This step appends them.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

/// Snippet files shipped with the package, relative to the hash directory.
pub const SNIPPET_FILES: [&str; 2] = ["js/create_directory_mapping.js", "js/get_system_time.js"];

#[derive(thiserror::Error, Debug)]
pub enum PackageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no snippet directories found in {}", dir.display())]
    NoSnippets { dir: PathBuf },

    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PackageError + '_ {
    move |source| PackageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Add the snippet files to `<pkg_dir>/package.json`.
///
/// Returns the entries that were added. Entries already listed are left
/// alone, so running this twice is harmless.
pub fn package_snippets(pkg_dir: &Path) -> Result<Vec<String>, PackageError> {
    let snippet_hash = latest_snippet_hash(&pkg_dir.join("snippets"))?;

    let manifest_path = pkg_dir.join("package.json");
    let raw = fs::read_to_string(&manifest_path).map_err(io_error(&manifest_path))?;
    let mut manifest: JsonValue = serde_json::from_str(&raw)?;

    let added = add_snippet_files(&mut manifest, &snippet_hash)?;

    let serialized = serde_json::to_string(&manifest)?;
    fs::write(&manifest_path, serialized).map_err(io_error(&manifest_path))?;

    Ok(added)
}

/// Name of the last entry of the snippets directory, in sorted order.
pub fn latest_snippet_hash(snippets_dir: &Path) -> Result<String, PackageError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(snippets_dir).map_err(io_error(snippets_dir))? {
        let entry = entry.map_err(io_error(snippets_dir))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    names.pop().ok_or_else(|| PackageError::NoSnippets {
        dir: snippets_dir.to_path_buf(),
    })
}

/// Append `/snippets/<hash>/<file>` for every snippet to the manifest's
/// `files` array, creating the array if needed.
pub fn add_snippet_files(
    manifest: &mut JsonValue,
    snippet_hash: &str,
) -> Result<Vec<String>, PackageError> {
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| PackageError::InvalidManifest {
            message: "top level is not an object".to_string(),
        })?;

    let files = object
        .entry("files")
        .or_insert_with(|| JsonValue::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| PackageError::InvalidManifest {
            message: "'files' is not an array".to_string(),
        })?;

    let mut added = Vec::new();
    for snippet in SNIPPET_FILES {
        let entry = format!("/snippets/{}/{}", snippet_hash, snippet);
        if files.iter().any(|file| file.as_str() == Some(entry.as_str())) {
            tracing::debug!(file = %entry, "snippet already listed");
            continue;
        }

        tracing::info!(file = %entry, "adding snippet to package files");
        files.push(JsonValue::String(entry.clone()));
        added.push(entry);
    }

    Ok(added)
}
