//! Lattice coordinates, grid extents, and the [`Vector`] alias.

use std::fmt;

/// A three-component `f64` vector.
///
/// Used for cell positions, displacements, spacing, and per-axis
/// thresholds. Only component-wise arithmetic is required by the
/// propagator (absolute value, copysign, clamping, addition).
pub type Vector = glam::DVec3;

/// Integer coordinate of one cell in a 3D lattice.
///
/// Components are signed so that unit steps off the low face (`-1`) can
/// be represented and rejected by bounds checks instead of wrapping.
/// Equality, hashing, and ordering are by value; the derived ordering is
/// lexicographic `(x, y, z)`, which matches the canonical x-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// Index along the x axis.
    pub x: i32,
    /// Index along the y axis.
    pub y: i32,
    /// Index along the z axis.
    pub z: i32,
}

impl Coord3 {
    /// Construct a coordinate from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate shifted by `(dx, dy, dz)`, or `None` on `i32` overflow.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// Components as an `f64` vector, in `(x, y, z)` order.
    pub fn as_vector(self) -> Vector {
        Vector::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// Components as an array.
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[i32; 3]> for Coord3 {
    fn from(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(i32, i32, i32)> for Coord3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Number of cells along each axis of a 3D lattice.
///
/// Construction of a space or volume rejects extents with a zero axis;
/// the type itself does not, so it can carry invalid user input into
/// error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent3 {
    /// Cells along x.
    pub x: u32,
    /// Cells along y.
    pub y: u32,
    /// Cells along z.
    pub z: u32,
}

impl Extent3 {
    /// Construct an extent from per-axis cell counts.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// The same count on every axis.
    pub const fn cube(n: u32) -> Self {
        Self::new(n, n, n)
    }

    /// Per-axis `(name, length)` pairs in `x, y, z` order.
    pub const fn axes(&self) -> [(&'static str, u32); 3] {
        [("x", self.x), ("y", self.y), ("z", self.z)]
    }

    /// Total cell count, or `None` if it does not fit in `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        (self.x as usize)
            .checked_mul(self.y as usize)?
            .checked_mul(self.z as usize)
    }
}

impl fmt::Display for Extent3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl From<[u32; 3]> for Extent3 {
    fn from(v: [u32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_formats() {
        assert_eq!(Coord3::new(7, 7, 8).to_string(), "(7, 7, 8)");
        assert_eq!(Extent3::new(9, 9, 9).to_string(), "9x9x9");
    }

    #[test]
    fn offset_detects_overflow() {
        let c = Coord3::new(i32::MAX, 0, 0);
        assert_eq!(c.offset(1, 0, 0), None);
        assert_eq!(c.offset(-1, 0, 0), Some(Coord3::new(i32::MAX - 1, 0, 0)));
        assert_eq!(Coord3::new(0, 0, 0).offset(0, -1, 0), Some(Coord3::new(0, -1, 0)));
    }

    #[test]
    fn cell_count_overflow_is_none() {
        assert_eq!(Extent3::new(2, 3, 4).checked_cell_count(), Some(24));
        assert_eq!(Extent3::cube(u32::MAX).checked_cell_count(), None);
    }

    #[test]
    fn as_vector_is_componentwise() {
        assert_eq!(Coord3::new(1, 2, 3).as_vector(), Vector::new(1.0, 2.0, 3.0));
    }

    proptest! {
        #[test]
        fn ordering_is_lexicographic(
            a in prop::array::uniform3(0i32..8),
            b in prop::array::uniform3(0i32..8),
        ) {
            prop_assert_eq!(Coord3::from(a).cmp(&Coord3::from(b)), a.cmp(&b));
        }
    }
}
