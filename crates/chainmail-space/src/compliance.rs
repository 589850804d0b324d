//! Space trait compliance test helpers.
//!
//! These functions verify that a Space implementation satisfies the
//! invariants required by the trait contract.

use crate::space::Space;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0.0` for all cells.
pub fn assert_distance_reflexive(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        let d = space.distance(&coord, &coord);
        assert!(
            (d - 0.0).abs() < f64::EPSILON,
            "distance({coord}, {coord}) = {d}, expected 0.0"
        );
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(space: &dyn Space) {
    let cells = space.canonical_ordering();
    for a in &cells {
        for b in &cells {
            let dab = space.distance(a, b);
            let dba = space.distance(b, a);
            assert!(
                (dab - dba).abs() < f64::EPSILON,
                "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(&coord) {
            let nb_neighbours = space.neighbours(&nb);
            assert!(
                nb_neighbours.contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is in bounds, distinct, and one hop away.
pub fn assert_neighbours_in_bounds(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        let nbs = space.neighbours(&coord);
        let unique: IndexSet<_> = nbs.iter().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {coord}");
        for nb in &nbs {
            assert!(space.contains(nb), "neighbour {nb} of {coord} out of bounds");
            assert!(
                (space.distance(&coord, nb) - 1.0).abs() < f64::EPSILON,
                "neighbour {nb} of {coord} is not one hop away"
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(space: &dyn Space) {
    let a = space.canonical_ordering();
    let b = space.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(space: &dyn Space) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that `canonical_rank` inverts `canonical_ordering`.
pub fn assert_canonical_rank_inverts_ordering(space: &dyn Space) {
    for (i, coord) in space.canonical_ordering().iter().enumerate() {
        assert_eq!(
            space.canonical_rank(coord),
            Some(i),
            "canonical_rank({coord}) != {i}"
        );
    }
}

/// Run all compliance checks on a space.
pub fn run_full_compliance(space: &dyn Space) {
    assert_distance_reflexive(space);
    assert_distance_symmetric(space);
    assert_neighbours_symmetric(space);
    assert_neighbours_in_bounds(space);
    assert_canonical_ordering_deterministic(space);
    assert_canonical_ordering_complete(space);
    assert_canonical_rank_inverts_ordering(space);
}
