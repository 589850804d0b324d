//! Test utilities and fixtures for Chainmail development.
//!
//! Provides seeded colour payloads, small volume builders, and a
//! tolerance-based vector assertion for displacement checks (positions are
//! `base + delta`, so subtracting the base back out is not always exact).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use chainmail_core::Vector;

/// Default tolerance for [`assert_vector_near`].
pub const TOLERANCE: f64 = 1e-9;

/// Assert that `actual` and `expected` agree within `tol` on every axis.
#[track_caller]
pub fn assert_vector_near(actual: Vector, expected: Vector, tol: f64) {
    let err = (actual - expected).abs().max_element();
    assert!(
        err <= tol,
        "vectors differ by {err} (> {tol}): actual {actual}, expected {expected}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_accepts_rounding_noise() {
        assert_vector_near(
            Vector::new(7.4, 7.4, 10.4) - Vector::new(7.0, 7.0, 8.0),
            Vector::new(0.4, 0.4, 2.4),
            TOLERANCE,
        );
    }

    #[test]
    #[should_panic(expected = "vectors differ")]
    fn near_rejects_real_difference() {
        assert_vector_near(Vector::ZERO, Vector::new(0.0, 0.1, 0.0), TOLERANCE);
    }
}
