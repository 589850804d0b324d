//! Error types for space operations.

use chainmail_core::{Coord3, Extent3};
use std::fmt;

/// Errors arising from space construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// An axis has zero cells.
    InvalidSize {
        /// Axis name (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// The offending length.
        value: u32,
    },
    /// An axis is longer than coordinates can address.
    DimensionTooLarge {
        /// Axis name (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// The offending length.
        value: u32,
        /// Largest permitted length.
        max: u32,
    },
    /// The total number of cells does not fit in `usize`.
    CellCountOverflow {
        /// The requested extent.
        extent: Extent3,
    },
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { axis, value } => {
                write!(f, "grid size along {axis} must be positive, got {value}")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "grid size along {axis} is {value}, maximum is {max}")
            }
            Self::CellCountOverflow { extent } => {
                write!(f, "cell count of {extent} grid overflows usize")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
