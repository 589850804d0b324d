//! Shared helpers for bounded 3D grid backends.

use crate::error::SpaceError;
use chainmail_core::{Coord3, Extent3};

/// Maximum axis length: coordinates use `i32`, so each axis must fit.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32;

/// Validate an extent and return its cell count.
pub(crate) fn validate_extent(extent: Extent3) -> Result<usize, SpaceError> {
    for (axis, value) in extent.axes() {
        if value == 0 {
            return Err(SpaceError::InvalidSize { axis, value });
        }
        if value > MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                axis,
                value,
                max: MAX_DIM,
            });
        }
    }
    extent
        .checked_cell_count()
        .ok_or(SpaceError::CellCountOverflow { extent })
}

/// Whether each component lies in `[0, len)` on its axis.
pub(crate) fn in_bounds(coord: &Coord3, extent: Extent3) -> bool {
    let inside = |v: i32, len: u32| v >= 0 && (v as u32) < len;
    inside(coord.x, extent.x) && inside(coord.y, extent.y) && inside(coord.z, extent.z)
}

/// x-major canonical ordering: `(0,0,0), (0,0,1), ..., (nx-1, ny-1, nz-1)`.
pub(crate) fn canonical_ordering_3d(extent: Extent3) -> Vec<Coord3> {
    let n = extent.checked_cell_count().unwrap_or(0);
    let mut out = Vec::with_capacity(n);
    for x in 0..extent.x as i32 {
        for y in 0..extent.y as i32 {
            for z in 0..extent.z as i32 {
                out.push(Coord3::new(x, y, z));
            }
        }
    }
    out
}

/// O(1) rank in the x-major ordering, `None` when out of bounds.
pub(crate) fn canonical_rank_3d(coord: &Coord3, extent: Extent3) -> Option<usize> {
    in_bounds(coord, extent).then(|| flat_index(coord, extent))
}

/// x-major rank without a bounds check.
pub(crate) fn flat_index(coord: &Coord3, extent: Extent3) -> usize {
    let (ny, nz) = (extent.y as usize, extent.z as usize);
    (coord.x as usize * ny + coord.y as usize) * nz + coord.z as usize
}

/// Inverse of [`flat_index`] for `index < cell_count`.
pub(crate) fn coord_at(index: usize, extent: Extent3) -> Coord3 {
    let (ny, nz) = (extent.y as usize, extent.z as usize);
    let z = index % nz;
    let y = (index / nz) % ny;
    let x = index / (nz * ny);
    Coord3::new(x as i32, y as i32, z as i32)
}
