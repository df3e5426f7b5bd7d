//! The flat directory mapping: full path -> file bytes.

use std::collections::HashMap;

use bytes::Bytes;
use indexmap::IndexMap;

/// A flat mapping from `/`-joined paths to file contents.
///
/// Keys iterate in the order they were first inserted. Inserting an existing
/// key replaces its contents but keeps its position.
///
/// Equality is by key and contents; two mappings holding the same files in
/// a different order are equal. Compare `iter()` output to check order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatMapping {
    entries: IndexMap<String, Bytes>,
}

impl FlatMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, returning the contents it replaced.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Bytes>) -> Option<Bytes> {
        self.entries.insert(path.into(), contents.into())
    }

    /// Merge another mapping into this one. Entries from `other` win on
    /// collision.
    pub fn merge(&mut self, other: FlatMapping) {
        self.extend(other);
    }

    pub fn get(&self, path: &str) -> Option<&Bytes> {
        self.entries.get(path)
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, contents)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bytes)> {
        self.entries
            .iter()
            .map(|(path, contents)| (path.as_str(), contents))
    }

    /// Iterate over paths in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Total size of all file contents in bytes.
    pub fn total_size(&self) -> usize {
        self.entries.values().map(Bytes::len).sum()
    }

    /// Convert to an owned, unordered map of plain byte vectors.
    pub fn into_hash_map(self) -> HashMap<String, Vec<u8>> {
        self.entries
            .into_iter()
            .map(|(path, contents)| (path, contents.to_vec()))
            .collect()
    }
}

impl<K, V> Extend<(K, V)> for FlatMapping
where
    K: Into<String>,
    V: Into<Bytes>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (path, contents) in iter {
            self.insert(path, contents);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FlatMapping
where
    K: Into<String>,
    V: Into<Bytes>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = FlatMapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl IntoIterator for FlatMapping {
    type Item = (String, Bytes);
    type IntoIter = indexmap::map::IntoIter<String, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut mapping = FlatMapping::new();
        assert!(mapping.is_empty());

        assert_eq!(mapping.insert("a.txt", Bytes::from_static(b"x")), None);
        assert_eq!(mapping.get("a.txt").unwrap().as_ref(), b"x");
        assert!(mapping.contains_key("a.txt"));
        assert!(!mapping.contains_key("b.txt"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut mapping = FlatMapping::new();
        mapping.insert("first", Bytes::from_static(b"1"));
        mapping.insert("second", Bytes::from_static(b"2"));

        let old = mapping.insert("first", Bytes::from_static(b"3"));
        assert_eq!(old, Some(Bytes::from_static(b"1")));

        let entries: Vec<(&str, &[u8])> = mapping.iter().map(|(k, v)| (k, v.as_ref())).collect();
        assert_eq!(entries, vec![("first", &b"3"[..]), ("second", &b"2"[..])]);
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut left: FlatMapping = vec![("a", b"1".to_vec()), ("b", b"2".to_vec())]
            .into_iter()
            .collect();
        let right: FlatMapping = vec![("b", b"9".to_vec()), ("c", b"3".to_vec())]
            .into_iter()
            .collect();

        left.merge(right);

        assert_eq!(left.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(left.get("b").unwrap().as_ref(), b"9");
        assert_eq!(left.total_size(), 3);
    }

    #[test]
    fn into_hash_map_keeps_contents() {
        let mapping: FlatMapping = vec![("x/y.bin", vec![0u8, 1, 2])].into_iter().collect();
        let map = mapping.into_hash_map();
        assert_eq!(map.get("x/y.bin"), Some(&vec![0u8, 1, 2]));
    }

    #[test]
    fn into_iter_in_insertion_order() {
        let mapping: FlatMapping = vec![("b", "2"), ("a", "1")]
            .into_iter()
            .map(|(k, v)| (k, Bytes::from_static(v.as_bytes())))
            .collect();
        let keys: Vec<String> = mapping.into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn equality_ignores_order() {
        let forward: FlatMapping = vec![("a", b"1".to_vec()), ("b", b"2".to_vec())]
            .into_iter()
            .collect();
        let backward: FlatMapping = vec![("b", b"2".to_vec()), ("a", b"1".to_vec())]
            .into_iter()
            .collect();
        assert_eq!(forward, backward);
        assert_ne!(
            forward.keys().collect::<Vec<_>>(),
            backward.keys().collect::<Vec<_>>()
        );

        let changed: FlatMapping = vec![("a", b"1".to_vec()), ("b", b"3".to_vec())]
            .into_iter()
            .collect();
        assert_ne!(forward, changed);
    }
}
