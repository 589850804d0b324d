//! Chainmail: decaying displacement propagation over 3D lattices of points.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Chainmail sub-crates. For most users, adding `chainmail` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chainmail::prelude::*;
//!
//! // 9x9x9 grid; spacing below 1 leaves base positions on integer coordinates.
//! let config = VolumeConfig::new(Extent3::cube(9))
//!     .with_spacing(Vector::splat(0.2))
//!     .with_deformation_range(Vector::splat(0.6));
//! let mut volume: Volume = Volume::new(config).unwrap();
//!
//! let seed = Coord3::new(7, 7, 8);
//! let report = volume.deform(seed, Vector::new(1.0, 1.0, 3.0)).unwrap();
//!
//! assert_eq!(volume.position(&seed).unwrap(), Vector::new(8.0, 8.0, 11.0));
//! assert!(report.cells_reached() > 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chainmail-core` | Coordinates, extents, vectors, config errors |
//! | [`space`] | `chainmail-space` | `Space` trait and the `Cube6` lattice |
//! | [`volume`] | `chainmail-volume` | `Volume` storage and `VolumeConfig` |
//! | [`propagator`] | `chainmail-propagator` | `deform`, `DecayLaw`, `DeformReport` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`chainmail-core`).
///
/// [`types::Coord3`], [`types::Extent3`], the [`types::Vector`] alias, and
/// [`types::ConfigError`].
pub use chainmail_core as types;

/// Lattice topology (`chainmail-space`).
///
/// Provides the [`space::Space`] trait and the [`space::Cube6`] backend.
pub use chainmail_space as space;

/// Position and payload storage (`chainmail-volume`).
pub use chainmail_volume as volume;

/// Deformation propagation (`chainmail-propagator`).
pub use chainmail_propagator as propagator;

/// Common imports for typical Chainmail usage.
///
/// ```rust
/// use chainmail::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use chainmail_core::{ConfigError, Coord3, Extent3, Vector};

    // Space
    pub use chainmail_space::{Cube6, Space, SpaceError};

    // Volume
    pub use chainmail_volume::{CellView, SpacingPolicy, Volume, VolumeConfig, VolumeError};

    // Propagator
    pub use chainmail_propagator::{deform, Deform, DeformReport, Visit};
}
