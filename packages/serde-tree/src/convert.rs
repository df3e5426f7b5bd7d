//! Conversions between JSON values and directory trees.

use base64::Engine;
use doggybag_tree::{Branch, Content, FlatMapping, Node, Scalar};
use serde_json::{Map, Value as JsonValue};

use crate::Error;

/// Key of the single-entry object that marks base64-encoded binary contents.
pub const BYTES_KEY: &str = "$bytes";

const ESCAPE: char = '$';

/// Convert a JSON value into a tree node.
///
/// - objects become folders, keeping document order
/// - arrays become folders keyed `"0"`, `"1"`, ...
/// - strings become text files
/// - `{"$bytes": "<base64>"}` becomes a binary file; if the value is not
///   valid base64 the object is an ordinary folder
/// - numbers, booleans and null become unsupported leaves
///
/// Names starting with `$$` lose their first `$`, undoing the escaping done
/// by [`node_to_json`] and [`mapping_to_json`].
pub fn json_to_node(json: JsonValue) -> Node {
    match json {
        JsonValue::Null => Node::Leaf(Content::Unsupported(Scalar::Null)),
        JsonValue::Bool(b) => Node::Leaf(Content::Unsupported(Scalar::Bool(b))),
        JsonValue::Number(n) => {
            let scalar = if let Some(i) = n.as_i64() {
                Scalar::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Scalar::Float(f)
            } else {
                Scalar::Null
            };
            Node::Leaf(Content::Unsupported(scalar))
        }
        JsonValue::String(s) => Node::Leaf(Content::Text(s)),
        JsonValue::Array(items) => Node::Branch(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), json_to_node(item)))
                .collect(),
        ),
        JsonValue::Object(map) => {
            if let Some(decoded) = as_bytes_marker(&map) {
                return Node::Leaf(Content::from(decoded));
            }
            Node::Branch(
                map.into_iter()
                    .map(|(name, value)| (unescape_name(name), json_to_node(value)))
                    .collect(),
            )
        }
    }
}

/// Convert a top-level JSON listing into a folder.
///
/// Fails if `json` is not an object (or array).
pub fn json_to_branch(json: JsonValue) -> Result<Branch, Error> {
    match json_to_node(json) {
        Node::Branch(branch) => Ok(branch),
        Node::Leaf(content) => Err(Error::NotAnObject {
            found: content.kind(),
        }),
    }
}

// A lone `$bytes` whose value is not valid base64 is an ordinary file
// named `$bytes`, not a marker.
fn as_bytes_marker(map: &Map<String, JsonValue>) -> Option<Vec<u8>> {
    if map.len() != 1 {
        return None;
    }
    let encoded = map.get(BYTES_KEY).and_then(JsonValue::as_str)?;
    match base64::engine::general_purpose::STANDARD.decode(encoded) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::debug!(error = %e, "'$bytes' is not base64, reading it as a file name");
            None
        }
    }
}

// Exported names starting with '$' get one more '$', so no exported folder
// can look like a bytes marker. Import strips it again.
fn escape_name(name: &str) -> String {
    if name.starts_with(ESCAPE) {
        format!("{}{}", ESCAPE, name)
    } else {
        name.to_string()
    }
}

fn unescape_name(name: String) -> String {
    if name.starts_with("$$") {
        name[1..].to_string()
    } else {
        name
    }
}

/// Convert a tree node back into a JSON listing.
///
/// Binary files are written as `{"$bytes": "<base64>"}`. Names starting
/// with `$` are written with an extra leading `$`. Duplicate names collapse
/// to the last entry, since JSON objects cannot repeat keys.
pub fn node_to_json(node: &Node) -> JsonValue {
    match node {
        Node::Leaf(content) => content_to_json(content),
        Node::Branch(branch) => branch_to_json(branch),
    }
}

pub(crate) fn branch_to_json(branch: &Branch) -> JsonValue {
    JsonValue::Object(
        branch
            .entries()
            .map(|(name, child)| (escape_name(name), node_to_json(child)))
            .collect(),
    )
}

fn content_to_json(content: &Content) -> JsonValue {
    match content {
        Content::Text(text) => JsonValue::String(text.clone()),
        Content::Bytes(bytes) => bytes_marker(bytes),
        Content::Unsupported(Scalar::Null) => JsonValue::Null,
        Content::Unsupported(Scalar::Bool(b)) => JsonValue::Bool(*b),
        Content::Unsupported(Scalar::Integer(i)) => JsonValue::Number((*i).into()),
        Content::Unsupported(Scalar::Float(f)) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
    }
}

/// Export a flat mapping as a JSON object of path -> contents.
///
/// Contents that are valid UTF-8 are written as strings, everything else as
/// a `$bytes` marker, and keys are escaped as in [`node_to_json`]. Feeding the result back through [`json_to_branch`]
/// and flattening it gives the same mapping.
pub fn mapping_to_json(mapping: &FlatMapping) -> JsonValue {
    JsonValue::Object(
        mapping
            .iter()
            .map(|(path, contents)| {
                let value = match std::str::from_utf8(contents) {
                    Ok(text) => JsonValue::String(text.to_string()),
                    Err(_) => bytes_marker(contents),
                };
                (escape_name(path), value)
            })
            .collect(),
    )
}

fn bytes_marker(bytes: &[u8]) -> JsonValue {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let mut map = Map::new();
    map.insert(BYTES_KEY.to_string(), JsonValue::String(encoded));
    JsonValue::Object(map)
}
