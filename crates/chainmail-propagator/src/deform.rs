//! Breadth-first deformation traversal.

use std::collections::VecDeque;

use chainmail_core::{Coord3, Vector};
use chainmail_space::Space;
use chainmail_volume::{Volume, VolumeError};

use crate::decay::{Decay, DecayLaw};
use crate::report::{DeformReport, Visit};

/// Displace `seed` by `initial` and propagate the decaying displacement.
///
/// 1. `seed` is bounds-checked; nothing is mutated on failure.
/// 2. The seed is displaced by `initial` and queued.
/// 3. Each dequeued entry is attenuated by the volume's [`DecayLaw`]. If
///    it is exhausted the branch ends; otherwise every in-bounds, not yet
///    visited neighbour (order `-x, +x, -y, +y, -z, +z`) is displaced by
///    the attenuated vector, marked visited, and queued.
///
/// The first entry to reach a cell decides its displacement; there is no
/// relaxation over alternative paths. Each cell is displaced at most once.
///
/// # Examples
///
/// ```
/// use chainmail_core::{Coord3, Extent3, Vector};
/// use chainmail_propagator::deform;
/// use chainmail_volume::{Volume, VolumeConfig};
///
/// let config = VolumeConfig::new(Extent3::cube(5)).with_deformation_range(Vector::splat(0.5));
/// let mut volume: Volume = Volume::new(config).unwrap();
///
/// let report = deform(&mut volume, Coord3::new(2, 2, 2), Vector::new(0.0, 0.0, 1.0)).unwrap();
/// assert_eq!(report.cells_reached(), 7);
/// assert_eq!(
///     volume.displacement(&Coord3::new(2, 2, 3)).unwrap(),
///     Vector::new(0.0, 0.0, 0.5)
/// );
/// ```
pub fn deform<P>(
    volume: &mut Volume<P>,
    seed: Coord3,
    initial: Vector,
) -> Result<DeformReport, VolumeError> {
    volume.space().check_bounds(&seed)?;
    let law = DecayLaw::for_volume(volume);
    log::debug!("deform: seed {seed}, initial {initial}");

    volume.displace(&seed, initial);
    let mut report = DeformReport::new(seed, initial);
    let mut queue = VecDeque::from([(seed, initial, 0usize)]);

    while let Some((node, delta, depth)) = queue.pop_front() {
        let next = match law.step(delta) {
            Decay::Continue(next) => next,
            Decay::Exhausted => {
                log::trace!("deform: branch at {node} (depth {depth}) below floor");
                report.exhausted_branches += 1;
                continue;
            }
        };

        let neighbours = volume.space().neighbours_excluding(&node, &report.visits);
        if neighbours.is_empty() {
            continue;
        }
        volume.displace_many(&neighbours, next);
        for nb in neighbours {
            report.visits.insert(
                nb,
                Visit {
                    depth: depth + 1,
                    delta: next,
                },
            );
            queue.push_back((nb, next, depth + 1));
        }
    }

    log::debug!(
        "deform: seed {seed} reached {} cells, max depth {}, {} exhausted branches",
        report.cells_reached(),
        report.max_depth(),
        report.exhausted_branches
    );
    Ok(report)
}

/// Method-call form of [`deform`].
pub trait Deform {
    /// See [`deform`].
    fn deform(&mut self, seed: Coord3, initial: Vector) -> Result<DeformReport, VolumeError>;
}

impl<P> Deform for Volume<P> {
    fn deform(&mut self, seed: Coord3, initial: Vector) -> Result<DeformReport, VolumeError> {
        deform(self, seed, initial)
    }
}
