//! Unordered pair of point values joined by an edge.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// The two points an edge connects.
///
/// The pair is unordered: `Endpoints::new(a, b) == Endpoints::new(b, a)`
/// and both hash identically. Both ends may be the same value (a self-loop).
#[derive(Debug, Clone)]
pub struct Endpoints<V> {
    first: V,
    second: V,
}

impl<V> Endpoints<V> {
    /// Create a pair from two point values.
    pub fn new(first: V, second: V) -> Self {
        Self { first, second }
    }

    /// The endpoint given first at construction.
    pub fn first(&self) -> &V {
        &self.first
    }

    /// The endpoint given second at construction.
    pub fn second(&self) -> &V {
        &self.second
    }

    /// Both endpoints, in construction order.
    pub fn as_array(&self) -> [&V; 2] {
        [&self.first, &self.second]
    }
}

impl<V: PartialEq> Endpoints<V> {
    /// True if both ends are the same point.
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }

    /// True if `point` is one of the two ends.
    pub fn contains(&self, point: &V) -> bool {
        self.first == *point || self.second == *point
    }

    /// The end opposite `point`, or `None` if `point` is not an end.
    ///
    /// For a self-loop the opposite end is the point itself.
    pub fn opposite(&self, point: &V) -> Option<&V> {
        if self.first == *point {
            Some(&self.second)
        } else if self.second == *point {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<V: PartialEq> PartialEq for Endpoints<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<V: Eq> Eq for Endpoints<V> {}

impl<V: Hash> Hash for Endpoints<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sorting the per-end fingerprints makes the hash order-independent.
        let a = fingerprint(&self.first);
        let b = fingerprint(&self.second);
        state.write_u64(a.min(b));
        state.write_u64(a.max(b));
    }
}

fn fingerprint<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
