//! The [`Volume`] position and payload store.

use chainmail_core::{Coord3, Extent3, Vector};
use chainmail_space::{Cube6, Space};

use crate::config::{SpacingPolicy, VolumeConfig};
use crate::error::VolumeError;

/// A 3D lattice of deformable positions with passive per-cell payload.
///
/// Positions and payload are stored flat in the lattice's canonical
/// (x-major) order. Neither array is resized after construction; only
/// positions change, through [`displace`](Self::displace) and
/// [`displace_many`](Self::displace_many).
///
/// # Examples
///
/// ```
/// use chainmail_core::{Coord3, Extent3, Vector};
/// use chainmail_volume::{Volume, VolumeConfig};
///
/// let config = VolumeConfig::new(Extent3::cube(3)).with_spacing(Vector::splat(2.0));
/// let mut volume: Volume = Volume::new(config).unwrap();
///
/// let c = Coord3::new(1, 2, 0);
/// assert_eq!(volume.position(&c).unwrap(), Vector::new(2.0, 4.0, 0.0));
///
/// volume.displace(&c, Vector::new(0.5, 0.0, -1.0));
/// assert_eq!(volume.position(&c).unwrap(), Vector::new(2.5, 4.0, -1.0));
/// ```
#[derive(Clone, Debug)]
pub struct Volume<P = ()> {
    space: Cube6,
    spacing: Vector,
    spacing_policy: SpacingPolicy,
    scale: Vector,
    deformation_range: Vector,
    min_deformation: Vector,
    positions: Vec<Vector>,
    payload: Vec<P>,
}

/// One cell as seen by an external renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView<'a, P> {
    /// Lattice coordinate.
    pub coord: Coord3,
    /// Current (possibly displaced) position.
    pub position: Vector,
    /// The cell's payload.
    pub payload: &'a P,
}

impl<P: Default + Clone> Volume<P> {
    /// Build a volume whose payload is `P::default()` in every cell.
    pub fn new(config: VolumeConfig) -> Result<Self, VolumeError> {
        let space = config.validate()?;
        let payload = vec![P::default(); space.cell_count()];
        Ok(Self::assemble(config, space, payload))
    }
}

impl<P> Volume<P> {
    /// Build a volume from an explicit payload in canonical order.
    ///
    /// Returns [`VolumeError::PayloadMismatch`] unless `payload` has exactly
    /// one entry per cell.
    pub fn from_payload(config: VolumeConfig, payload: Vec<P>) -> Result<Self, VolumeError> {
        let space = config.validate()?;
        if payload.len() != space.cell_count() {
            return Err(VolumeError::PayloadMismatch {
                expected: space.cell_count(),
                actual: payload.len(),
            });
        }
        Ok(Self::assemble(config, space, payload))
    }

    /// Build a volume whose payload is computed from each coordinate.
    pub fn from_fn(
        config: VolumeConfig,
        f: impl FnMut(Coord3) -> P,
    ) -> Result<Self, VolumeError> {
        let space = config.validate()?;
        let payload = space.canonical_ordering().into_iter().map(f).collect();
        Ok(Self::assemble(config, space, payload))
    }

    fn assemble(config: VolumeConfig, space: Cube6, payload: Vec<P>) -> Self {
        let scale = config.position_scale();
        let positions = space
            .canonical_ordering()
            .into_iter()
            .map(|c| c.as_vector() * scale)
            .collect();
        log::debug!(
            "volume {} built: spacing {} (scale {}), range {}, floor {}",
            config.extent,
            config.spacing,
            scale,
            config.deformation_range,
            config.min_deformation
        );
        Self {
            space,
            spacing: config.spacing,
            spacing_policy: config.spacing_policy,
            scale,
            deformation_range: config.deformation_range,
            min_deformation: config.min_deformation,
            positions,
            payload,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The underlying lattice.
    pub fn space(&self) -> &Cube6 {
        &self.space
    }

    /// Cells along each axis.
    pub fn extent(&self) -> Extent3 {
        self.space.extent()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.positions.len()
    }

    /// Configured spacing.
    pub fn spacing(&self) -> Vector {
        self.spacing
    }

    /// Configured spacing policy.
    pub fn spacing_policy(&self) -> SpacingPolicy {
        self.spacing_policy
    }

    /// Per-axis attenuation subtracted at every propagation hop.
    pub fn deformation_range(&self) -> Vector {
        self.deformation_range
    }

    /// Per-axis floor below which propagation stops.
    pub fn min_deformation(&self) -> Vector {
        self.min_deformation
    }

    /// The configuration this volume was built from.
    pub fn config(&self) -> VolumeConfig {
        VolumeConfig {
            extent: self.extent(),
            spacing: self.spacing,
            deformation_range: self.deformation_range,
            min_deformation: self.min_deformation,
            spacing_policy: self.spacing_policy,
        }
    }

    // ── Queries ────────────────────────────────────────────────────

    fn rank(&self, coord: &Coord3) -> Result<usize, VolumeError> {
        self.space.check_bounds(coord)?;
        Ok(self.space.index_of(coord))
    }

    /// Current position of a cell.
    pub fn position(&self, coord: &Coord3) -> Result<Vector, VolumeError> {
        Ok(self.positions[self.rank(coord)?])
    }

    /// Position of a cell at construction time.
    pub fn base_position(&self, coord: &Coord3) -> Result<Vector, VolumeError> {
        self.space.check_bounds(coord)?;
        Ok(coord.as_vector() * self.scale)
    }

    /// Accumulated displacement of a cell: current minus base position.
    pub fn displacement(&self, coord: &Coord3) -> Result<Vector, VolumeError> {
        Ok(self.position(coord)? - self.base_position(coord)?)
    }

    /// Payload of a cell.
    pub fn payload_at(&self, coord: &Coord3) -> Result<&P, VolumeError> {
        Ok(&self.payload[self.rank(coord)?])
    }

    /// All positions in canonical order.
    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }

    /// All payload entries in canonical order.
    pub fn payload(&self) -> &[P] {
        &self.payload
    }

    /// Every cell in canonical order, for rendering or export.
    pub fn cells(&self) -> impl Iterator<Item = CellView<'_, P>> + '_ {
        self.positions
            .iter()
            .zip(self.payload.iter())
            .enumerate()
            .map(|(i, (&position, payload))| CellView {
                coord: self.space.coord_at(i),
                position,
                payload,
            })
    }

    /// Axis-aligned `(min, max)` corners enclosing every current position.
    pub fn bounds(&self) -> (Vector, Vector) {
        self.positions.iter().fold(
            (Vector::splat(f64::INFINITY), Vector::splat(f64::NEG_INFINITY)),
            |(lo, hi), &p| (lo.min(p), hi.max(p)),
        )
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Add `delta` to the position of `coord`.
    ///
    /// Callers pass validated coordinates; the propagator only produces
    /// in-bounds neighbours.
    ///
    /// # Panics
    ///
    /// If `coord` is out of bounds.
    pub fn displace(&mut self, coord: &Coord3, delta: Vector) {
        assert!(
            self.space.contains(coord),
            "cannot displace {coord}: outside {} grid",
            self.extent()
        );
        let i = self.space.index_of(coord);
        self.positions[i] += delta;
    }

    /// Add the same `delta` to each coordinate in order.
    pub fn displace_many<'c>(&mut self, coords: impl IntoIterator<Item = &'c Coord3>, delta: Vector) {
        for coord in coords {
            self.displace(coord, delta);
        }
    }

    /// Restore every position to its base position.
    pub fn reset(&mut self) {
        let (space, scale) = (&self.space, self.scale);
        for (i, p) in self.positions.iter_mut().enumerate() {
            *p = space.coord_at(i).as_vector() * scale;
        }
    }
}
