//! Deformable volume storage for Chainmail.
//!
//! A [`Volume`] owns one position vector and one opaque payload value per
//! cell of a [`Cube6`](chainmail_space::Cube6) lattice, together with the
//! per-axis deformation parameters the propagator reads. Volumes are built
//! from a validated [`VolumeConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod volume;

pub use config::{
    SpacingPolicy, VolumeConfig, DEFAULT_DEFORMATION_RANGE, DEFAULT_MIN_DEFORMATION,
};
pub use error::VolumeError;
pub use volume::{CellView, Volume};
