//! The core `Space` trait.

use crate::error::SpaceError;
use crate::filter::CoordFilter;
use chainmail_core::{Coord3, Extent3};
use smallvec::SmallVec;

/// Neighbour list of a single cell.
///
/// Six inline slots cover every face-adjacent neighbour of a 3D cell
/// without heap allocation.
pub type Neighbours = SmallVec<[Coord3; 6]>;

/// Lattice abstraction walked by the deformation propagator.
///
/// # Object Safety
///
/// This trait is designed for use as `dyn Space`; exclusion sets are
/// therefore passed as `&dyn CoordFilter` rather than a generic.
pub trait Space: Send + Sync + 'static {
    /// Number of cells along each axis.
    fn extent(&self) -> Extent3;

    /// Total number of cells in the space.
    fn cell_count(&self) -> usize;

    /// Whether `coord` addresses a cell of this space.
    fn contains(&self, coord: &Coord3) -> bool;

    /// Return `Ok(())` if `coord` is in bounds, otherwise
    /// [`SpaceError::CoordOutOfBounds`].
    fn check_bounds(&self, coord: &Coord3) -> Result<(), SpaceError> {
        if self.contains(coord) {
            return Ok(());
        }
        let e = self.extent();
        Err(SpaceError::CoordOutOfBounds {
            coord: *coord,
            bounds: format!("[0, {}) x [0, {}) x [0, {})", e.x, e.y, e.z),
        })
    }

    /// Enumerate the in-bounds neighbours of a cell.
    ///
    /// Returns coordinates in a deterministic, backend-defined order.
    fn neighbours(&self, coord: &Coord3) -> Neighbours;

    /// Enumerate the in-bounds neighbours of a cell that `excluded` does not
    /// reject, preserving the order of [`neighbours`](Self::neighbours).
    fn neighbours_excluding(&self, coord: &Coord3, excluded: &dyn CoordFilter) -> Neighbours {
        let mut out = self.neighbours(coord);
        out.retain(|nb| !excluded.excludes(nb));
        out
    }

    /// Graph-geodesic distance between two cells.
    fn distance(&self, a: &Coord3, b: &Coord3) -> f64;

    /// All cells in deterministic canonical order.
    ///
    /// Two calls on the same space instance must return the same sequence.
    /// Flat per-cell storage is laid out in this order.
    fn canonical_ordering(&self) -> Vec<Coord3>;

    /// Position of a coordinate in the canonical ordering.
    ///
    /// Returns the index such that `canonical_ordering()[index] == coord`,
    /// or `None` when the coordinate is out of bounds.
    fn canonical_rank(&self, coord: &Coord3) -> Option<usize> {
        self.canonical_ordering().iter().position(|c| c == coord)
    }
}
