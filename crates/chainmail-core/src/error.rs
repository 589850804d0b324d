//! Configuration errors shared across the Chainmail crates.

use crate::coord::Vector;
use std::error::Error;
use std::fmt;

/// A per-axis parameter (spacing, deformation range, or floor) is unusable.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A component is NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: Vector,
    },
    /// A component is below zero.
    NegativeComponent {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: Vector,
    },
}

impl ConfigError {
    /// Check that every component of `value` is finite and `>= 0`.
    ///
    /// Finiteness is checked first so a NaN component is never reported
    /// as negative.
    pub fn check_non_negative(name: &'static str, value: Vector) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(Self::NonFinite { name, value });
        }
        if value.cmplt(Vector::ZERO).any() {
            return Err(Self::NegativeComponent { name, value });
        }
        Ok(())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite on every axis, got {value}")
            }
            Self::NegativeComponent { name, value } => {
                write!(f, "{name} must be non-negative on every axis, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
