//! Benchmark profiles and utilities for the Chainmail deformation framework.
//!
//! Provides pre-built [`VolumeConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 9x9x9 grid, the canonical demo scenario
//! - [`stress_profile`]: 50x50x50 grid (125K cells) with a slow decay that
//!   reaches every cell
//! - [`write_point_cloud`]: dump positions and colours for an external plotter

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::io::{self, Write};

use chainmail_core::{Coord3, Extent3, Vector};
use chainmail_test_utils::fixtures::Rgb;
use chainmail_volume::{Volume, VolumeConfig};

/// Seed cell of the reference scenario.
pub const REFERENCE_SEED: Coord3 = Coord3::new(7, 7, 8);

/// Initial displacement of the reference scenario.
pub const REFERENCE_INITIAL: Vector = Vector::new(1.0, 1.0, 3.0);

/// Build the reference profile: 9x9x9 grid, spacing 0.2, range 0.6.
///
/// With spacing below 1 on every axis, base positions are the raw
/// integer coordinates.
pub fn reference_profile() -> VolumeConfig {
    VolumeConfig::new(Extent3::cube(9))
        .with_spacing(Vector::splat(0.2))
        .with_deformation_range(Vector::splat(0.6))
}

/// Seed cell of the stress scenario (grid centre).
pub const STRESS_SEED: Coord3 = Coord3::new(25, 25, 25);

/// Initial displacement of the stress scenario.
///
/// Decays by 0.02 per hop, so it outlives the 75-hop radius of the grid.
pub const STRESS_INITIAL: Vector = Vector::new(2.0, -2.0, 2.0);

/// Build the stress profile: 50x50x50 grid (125K cells), range 0.02.
pub fn stress_profile() -> VolumeConfig {
    VolumeConfig::new(Extent3::cube(50)).with_deformation_range(Vector::splat(0.02))
}

/// Write one `x y z r g b` line per cell, in canonical order.
pub fn write_point_cloud(volume: &Volume<Rgb>, out: &mut impl Write) -> io::Result<()> {
    for cell in volume.cells() {
        let [r, g, b] = *cell.payload;
        let p = cell.position;
        writeln!(out, "{} {} {} {r} {g} {b}", p.x, p.y, p.z)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainmail_space::Space;
    use chainmail_test_utils::fixtures::colored_volume;

    #[test]
    fn reference_profile_validates() {
        reference_profile().validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        let space = stress_profile().validate().unwrap();
        assert_eq!(space.extent(), Extent3::cube(50));
    }

    #[test]
    fn point_cloud_has_one_line_per_cell() {
        let volume = colored_volume(VolumeConfig::new(Extent3::new(2, 2, 2)), 3);
        let mut buf = Vec::new();
        write_point_cloud(&volume, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 8);
        let first: Vec<&str> = text.lines().next().unwrap().split(' ').collect();
        assert_eq!(first.len(), 6);
        assert_eq!(&first[..3], &["0", "0", "0"]);
    }
}
