use std::cmp::Ordering;

/// A key-value pair stored in the map. Keys are raw byte sequences and
/// entries order themselves by key alone.
#[derive(Debug)]
pub struct Entry<V> {
    pub key: Vec<u8>,
    pub value: V,
}

impl<V> Ord for Entry<V> {
    fn cmp(&self, other: &Entry<V>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<V> PartialOrd for Entry<V> {
    fn partial_cmp(&self, other: &Entry<V>) -> Option<Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl<V> PartialEq for Entry<V> {
    fn eq(&self, other: &Entry<V>) -> bool {
        self.key == other.key
    }
}

impl<V> Eq for Entry<V> {}
