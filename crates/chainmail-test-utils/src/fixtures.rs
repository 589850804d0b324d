//! Reusable volume fixtures.
//!
//! - [`random_colors`]: seeded RGB payload, one entry per cell.
//! - [`colored_volume`]: a volume carrying that payload.
//! - [`plain_volume`]: a payload-free cube with a uniform deformation range.

use chainmail_core::{Extent3, Vector};
use chainmail_volume::{Volume, VolumeConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Linear RGB colour in `[0, 1)` per channel.
pub type Rgb = [f32; 3];

/// Deterministic random colours for `cell_count` cells.
pub fn random_colors(cell_count: usize, seed: u64) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..cell_count)
        .map(|_| [rng.random(), rng.random(), rng.random()])
        .collect()
}

/// Build a volume from `config` with a seeded colour payload.
///
/// # Panics
///
/// If `config` fails validation.
pub fn colored_volume(config: VolumeConfig, seed: u64) -> Volume<Rgb> {
    let cells = config
        .extent
        .checked_cell_count()
        .expect("fixture extent overflows usize");
    Volume::from_payload(config, random_colors(cells, seed)).expect("fixture config is valid")
}

/// An `n`-cube with unit spacing and `range` attenuation on every axis.
///
/// # Panics
///
/// If `n == 0` or `range` is negative.
pub fn plain_volume(n: u32, range: f64) -> Volume {
    Volume::new(VolumeConfig::new(Extent3::cube(n)).with_deformation_range(Vector::splat(range)))
        .expect("fixture config is valid")
}
