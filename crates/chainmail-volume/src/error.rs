//! Error type for volume construction and queries.

use chainmail_core::ConfigError;
use chainmail_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors from building or querying a [`Volume`](crate::Volume).
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeError {
    /// Invalid grid size, or a coordinate outside the grid.
    Space(SpaceError),
    /// A per-axis parameter failed validation.
    Config(ConfigError),
    /// The payload does not have one entry per cell.
    PayloadMismatch {
        /// Cells in the grid.
        expected: usize,
        /// Entries supplied.
        actual: usize,
    },
}

impl VolumeError {
    /// Whether this error reports a coordinate outside the grid.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::Space(SpaceError::CoordOutOfBounds { .. }))
    }
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space error: {e}"),
            Self::Config(e) => write!(f, "invalid volume config: {e}"),
            Self::PayloadMismatch { expected, actual } => {
                write!(f, "payload has {actual} entries, grid has {expected} cells")
            }
        }
    }
}

impl Error for VolumeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::PayloadMismatch { .. } => None,
        }
    }
}

impl From<SpaceError> for VolumeError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ConfigError> for VolumeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
