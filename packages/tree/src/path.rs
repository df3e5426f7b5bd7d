//! Path construction for flattened keys.
//!
//! Segments are joined verbatim. Nothing is escaped or validated, so a
//! segment that itself contains `/` produces a key that merely looks deeper.

/// Separator placed between segments.
pub const SEPARATOR: char = '/';

/// Append a segment to an accumulated prefix.
///
/// An empty prefix means "at the root": the segment is returned as is.
pub fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        return segment.to_string();
    }

    let mut path = String::with_capacity(prefix.len() + 1 + segment.len());
    path.push_str(prefix);
    path.push(SEPARATOR);
    path.push_str(segment);
    path
}
