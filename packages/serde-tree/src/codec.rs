//! JSON listing codec.

use bytes::Bytes;
use doggybag_tree::{Branch, BuildOptions, DirectoryMappingBuilder, FlatMapping};

use crate::convert::{branch_to_json, json_to_branch, mapping_to_json};
use crate::Error;

/// Reads directory listings from JSON and writes trees and mappings back.
///
/// # Example
///
/// ```rust
/// use doggybag_serde::JsonListingCodec;
///
/// let codec = JsonListingCodec::new();
/// let listing = codec.decode(br#"{"a.txt": "x"}"#).unwrap();
/// let bytes = codec.encode(&listing).unwrap();
///
/// assert_eq!(codec.decode(&bytes).unwrap(), listing);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonListingCodec {
    options: BuildOptions,
    pretty: bool,
}

impl JsonListingCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use these options when decoding straight to a mapping.
    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Pretty-print encoded output.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Decode a JSON listing into a folder.
    pub fn decode(&self, bytes: &[u8]) -> Result<Branch, Error> {
        let json: serde_json::Value = serde_json::from_slice(bytes)?;
        let branch = json_to_branch(json)?;
        tracing::trace!(entries = branch.len(), "decoded listing");
        Ok(branch)
    }

    /// Decode a JSON listing and flatten it in one go.
    pub fn decode_mapping(&self, bytes: &[u8], prefix: Option<&str>) -> Result<FlatMapping, Error> {
        let branch = self.decode(bytes)?;
        let mapping = DirectoryMappingBuilder::with_options(self.options).build(&branch, prefix)?;
        Ok(mapping)
    }

    /// Encode a folder as a JSON listing.
    pub fn encode(&self, branch: &Branch) -> Result<Bytes, Error> {
        self.to_bytes(&branch_to_json(branch))
    }

    /// Encode a flattened mapping as a JSON object of path -> contents.
    pub fn encode_mapping(&self, mapping: &FlatMapping) -> Result<Bytes, Error> {
        self.to_bytes(&mapping_to_json(mapping))
    }

    fn to_bytes(&self, json: &serde_json::Value) -> Result<Bytes, Error> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(json)?
        } else {
            serde_json::to_vec(json)?
        };
        Ok(Bytes::from(bytes))
    }
}
