//! Per-call record of a deformation traversal.

use chainmail_core::{Coord3, Vector};
use indexmap::IndexMap;

/// How one cell was reached during a traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visit {
    /// Hops from the seed (the seed itself is 0).
    pub depth: usize,
    /// Displacement applied to the cell.
    pub delta: Vector,
}

/// Outcome of one [`deform`](crate::deform) call.
///
/// Doubles as the traversal's visited set: a coordinate is recorded the
/// moment it is displaced, and recorded coordinates are never displaced
/// again in the same call.
#[derive(Clone, Debug)]
pub struct DeformReport {
    seed: Coord3,
    initial: Vector,
    pub(crate) visits: IndexMap<Coord3, Visit>,
    pub(crate) exhausted_branches: usize,
}

impl DeformReport {
    pub(crate) fn new(seed: Coord3, initial: Vector) -> Self {
        let mut visits = IndexMap::new();
        visits.insert(
            seed,
            Visit {
                depth: 0,
                delta: initial,
            },
        );
        Self {
            seed,
            initial,
            visits,
            exhausted_branches: 0,
        }
    }

    /// The seed coordinate.
    pub fn seed(&self) -> Coord3 {
        self.seed
    }

    /// The displacement applied directly to the seed.
    pub fn initial(&self) -> Vector {
        self.initial
    }

    /// Number of cells displaced, seed included.
    pub fn cells_reached(&self) -> usize {
        self.visits.len()
    }

    /// Visit record for `coord`, if the traversal reached it.
    pub fn visit(&self, coord: &Coord3) -> Option<&Visit> {
        self.visits.get(coord)
    }

    /// Whether the traversal displaced `coord`.
    pub fn reached(&self, coord: &Coord3) -> bool {
        self.visits.contains_key(coord)
    }

    /// Displaced cells in the order they were displaced, seed first.
    pub fn visits(&self) -> impl Iterator<Item = (Coord3, Visit)> + '_ {
        self.visits.iter().map(|(c, v)| (*c, *v))
    }

    /// Largest hop count of any displaced cell.
    pub fn max_depth(&self) -> usize {
        self.visits.values().map(|v| v.depth).max().unwrap_or(0)
    }

    /// Queue entries whose attenuated displacement fell below the floor.
    pub fn exhausted_branches(&self) -> usize {
        self.exhausted_branches
    }
}
