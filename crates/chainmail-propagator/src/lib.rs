//! Deformation propagation for Chainmail volumes.
//!
//! A displacement applied at one seed cell spreads breadth-first through
//! the lattice. Every hop subtracts the volume's `deformation_range` from
//! the absolute displacement on each axis (clamped at zero, sign kept);
//! a branch stops once every axis falls below `min_deformation`.
//!
//! The first queue entry to reach a cell decides its displacement; cells
//! are never revisited within one call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod decay;
pub mod deform;
pub mod report;

pub use decay::{Decay, DecayLaw};
pub use deform::{deform, Deform};
pub use report::{DeformReport, Visit};
