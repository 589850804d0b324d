//! Exclusion sets for neighbour enumeration.

use chainmail_core::Coord3;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// A set of coordinates to leave out of a neighbour query.
///
/// Implemented for the hashed sets and maps used as traversal visited-sets,
/// and for `Vec<Coord3>` (linear scan) for small, ad-hoc exclusion lists.
pub trait CoordFilter {
    /// Whether `coord` must be skipped.
    fn excludes(&self, coord: &Coord3) -> bool;
}

impl<S: BuildHasher> CoordFilter for IndexSet<Coord3, S> {
    fn excludes(&self, coord: &Coord3) -> bool {
        self.contains(coord)
    }
}

/// Keys of a coordinate-indexed map, such as a traversal record.
impl<V, S: BuildHasher> CoordFilter for IndexMap<Coord3, V, S> {
    fn excludes(&self, coord: &Coord3) -> bool {
        self.contains_key(coord)
    }
}

impl<S: BuildHasher> CoordFilter for HashSet<Coord3, S> {
    fn excludes(&self, coord: &Coord3) -> bool {
        self.contains(coord)
    }
}

impl CoordFilter for Vec<Coord3> {
    fn excludes(&self, coord: &Coord3) -> bool {
        self.contains(coord)
    }
}

/// Excludes nothing.
impl CoordFilter for () {
    fn excludes(&self, _coord: &Coord3) -> bool {
        false
    }
}
