//! Core types for the Chainmail deformation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the lattice coordinate and extent types, the [`Vector`] alias used for
//! positions and displacements, and configuration errors shared by the
//! higher crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;

pub use coord::{Coord3, Extent3, Vector};
pub use error::ConfigError;
