//! 3D cubic grid with 6-connected neighbourhood (face neighbours).

use crate::error::SpaceError;
use crate::grid3d;
use crate::space::{Neighbours, Space};
use chainmail_core::{Coord3, Extent3};

/// Unit steps in neighbour enumeration order: `-x, +x, -y, +y, -z, +z`.
const OFFSETS: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// A bounded three-dimensional grid with 6-connected neighbourhood.
///
/// Each cell has coordinate `(x, y, z)` with `0 <= x < extent.x` and
/// likewise for `y` and `z`. Neighbours are the face-adjacent cells; cells
/// on a face, edge, or corner simply have fewer of them (there is no
/// wrapping or clamping). Distance is Manhattan (L1).
///
/// # Examples
///
/// ```
/// use chainmail_core::{Coord3, Extent3};
/// use chainmail_space::{Cube6, Space};
///
/// let grid = Cube6::new(Extent3::new(3, 3, 3)).unwrap();
/// assert_eq!(grid.cell_count(), 27);
///
/// // Interior cell: all six neighbours. Corner cell: three.
/// assert_eq!(grid.neighbours(&Coord3::new(1, 1, 1)).len(), 6);
/// assert_eq!(grid.neighbours(&Coord3::new(0, 0, 2)).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube6 {
    extent: Extent3,
    cell_count: usize,
}

impl Cube6 {
    /// Maximum axis length: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = grid3d::MAX_DIM;

    /// Create a grid with `extent.x * extent.y * extent.z` cells.
    ///
    /// Returns `Err(SpaceError::InvalidSize)` if any axis is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if any axis exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(SpaceError::CellCountOverflow)`
    /// if the product does not fit in `usize`.
    pub fn new(extent: Extent3) -> Result<Self, SpaceError> {
        let cell_count = grid3d::validate_extent(extent)?;
        Ok(Self { extent, cell_count })
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat index of a coordinate the caller has already bounds-checked.
    ///
    /// [`Space::canonical_rank`] is the checked form.
    ///
    /// # Panics
    ///
    /// In debug builds, if `coord` is out of bounds.
    pub fn index_of(&self, coord: &Coord3) -> usize {
        debug_assert!(
            self.contains(coord),
            "coordinate {coord} outside {} grid",
            self.extent
        );
        grid3d::flat_index(coord, self.extent)
    }

    /// Coordinate at a flat index; the inverse of [`index_of`](Self::index_of).
    ///
    /// # Panics
    ///
    /// In debug builds, if `index >= cell_count`.
    pub fn coord_at(&self, index: usize) -> Coord3 {
        debug_assert!(
            index < self.cell_count,
            "index {index} outside {} grid",
            self.extent
        );
        grid3d::coord_at(index, self.extent)
    }
}

impl Space for Cube6 {
    fn extent(&self) -> Extent3 {
        self.extent
    }

    fn cell_count(&self) -> usize {
        self.cell_count
    }

    fn contains(&self, coord: &Coord3) -> bool {
        grid3d::in_bounds(coord, self.extent)
    }

    fn neighbours(&self, coord: &Coord3) -> Neighbours {
        OFFSETS
            .iter()
            .filter_map(|&(dx, dy, dz)| coord.offset(dx, dy, dz))
            .filter(|nb| self.contains(nb))
            .collect()
    }

    fn distance(&self, a: &Coord3, b: &Coord3) -> f64 {
        let d = |p: i32, q: i32| (p as i64 - q as i64).unsigned_abs();
        (d(a.x, b.x) + d(a.y, b.y) + d(a.z, b.z)) as f64
    }

    fn canonical_ordering(&self) -> Vec<Coord3> {
        grid3d::canonical_ordering_3d(self.extent)
    }

    fn canonical_rank(&self, coord: &Coord3) -> Option<usize> {
        grid3d::canonical_rank_3d(coord, self.extent)
    }
}
