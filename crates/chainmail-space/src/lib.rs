//! Spatial data structures for Chainmail volumes.
//!
//! This crate defines the [`Space`] trait, the lattice abstraction the
//! propagator walks, along with the [`Cube6`] backend: a bounded 3D grid
//! with 6-connected (face-adjacent) neighbourhood.
//!
//! Neighbour enumeration order is fixed (`-x, +x, -y, +y, -z, +z`) so that
//! breadth-first traversals over the lattice are reproducible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cube6;
pub mod error;
pub mod filter;
pub(crate) mod grid3d;
pub mod space;

#[cfg(test)]
pub(crate) mod compliance;

pub use cube6::Cube6;
pub use error::SpaceError;
pub use filter::CoordFilter;
pub use space::{Neighbours, Space};
