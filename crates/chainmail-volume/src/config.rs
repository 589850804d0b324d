//! Volume configuration and validation.
//!
//! [`VolumeConfig`] is the builder-input for constructing a [`Volume`].
//! [`validate()`](VolumeConfig::validate) checks the grid extent and every
//! per-axis parameter before any storage is allocated.
//!
//! [`Volume`]: crate::Volume

use chainmail_core::{ConfigError, Extent3, Vector};
use chainmail_space::Cube6;

use crate::error::VolumeError;

/// Default per-hop attenuation on every axis.
pub const DEFAULT_DEFORMATION_RANGE: Vector = Vector::new(0.2, 0.2, 0.2);

/// Default per-axis floor below which propagation stops.
pub const DEFAULT_MIN_DEFORMATION: Vector = Vector::new(0.04, 0.04, 0.04);

// ── SpacingPolicy ──────────────────────────────────────────────────

/// How `spacing` is applied to base positions at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpacingPolicy {
    /// Scale by `spacing` only if at least one component exceeds 1;
    /// otherwise every axis uses unit spacing, even if some spacing
    /// component is below 1. This is the established behaviour.
    #[default]
    ScaleWhenAnyExceedsOne,
    /// Always scale by `spacing`.
    Always,
}

impl SpacingPolicy {
    /// The per-axis factor applied to integer coordinates.
    pub fn scale(self, spacing: Vector) -> Vector {
        match self {
            Self::ScaleWhenAnyExceedsOne if spacing.cmpgt(Vector::ONE).any() => spacing,
            Self::ScaleWhenAnyExceedsOne => Vector::ONE,
            Self::Always => spacing,
        }
    }
}

// ── VolumeConfig ───────────────────────────────────────────────────

/// Construction parameters for a [`Volume`](crate::Volume).
///
/// Only the extent is mandatory; everything else has a default.
///
/// # Examples
///
/// ```
/// use chainmail_core::{Extent3, Vector};
/// use chainmail_volume::VolumeConfig;
///
/// let config = VolumeConfig::new(Extent3::cube(9))
///     .with_spacing(Vector::splat(0.2))
///     .with_deformation_range(Vector::splat(0.6));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeConfig {
    /// Cells along each axis. Every axis must be positive.
    pub extent: Extent3,
    /// Distance between adjacent cells on each axis. Default: `(1, 1, 1)`.
    pub spacing: Vector,
    /// Attenuation subtracted from the absolute displacement at every hop.
    /// Default: [`DEFAULT_DEFORMATION_RANGE`].
    pub deformation_range: Vector,
    /// Propagation stops once every axis of the attenuated displacement is
    /// strictly below this floor. Default: [`DEFAULT_MIN_DEFORMATION`].
    pub min_deformation: Vector,
    /// How `spacing` enters base positions. Default:
    /// [`SpacingPolicy::ScaleWhenAnyExceedsOne`].
    pub spacing_policy: SpacingPolicy,
}

impl VolumeConfig {
    /// A configuration with the given extent and default parameters.
    pub fn new(extent: Extent3) -> Self {
        Self {
            extent,
            spacing: Vector::ONE,
            deformation_range: DEFAULT_DEFORMATION_RANGE,
            min_deformation: DEFAULT_MIN_DEFORMATION,
            spacing_policy: SpacingPolicy::default(),
        }
    }

    /// Set the inter-cell spacing.
    pub fn with_spacing(mut self, spacing: Vector) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the per-hop attenuation.
    pub fn with_deformation_range(mut self, range: Vector) -> Self {
        self.deformation_range = range;
        self
    }

    /// Set the propagation floor.
    pub fn with_min_deformation(mut self, min: Vector) -> Self {
        self.min_deformation = min;
        self
    }

    /// Set the spacing policy.
    pub fn with_spacing_policy(mut self, policy: SpacingPolicy) -> Self {
        self.spacing_policy = policy;
        self
    }

    /// Effective per-axis scale applied to base positions.
    pub fn position_scale(&self) -> Vector {
        self.spacing_policy.scale(self.spacing)
    }

    /// Check structural invariants and build the lattice.
    ///
    /// Extent errors are reported before parameter errors.
    pub fn validate(&self) -> Result<Cube6, VolumeError> {
        let space = Cube6::new(self.extent)?;
        ConfigError::check_non_negative("spacing", self.spacing)?;
        ConfigError::check_non_negative("deformation_range", self.deformation_range)?;
        ConfigError::check_non_negative("min_deformation", self.min_deformation)?;
        Ok(space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainmail_space::SpaceError;

    #[test]
    fn defaults() {
        let cfg = VolumeConfig::new(Extent3::cube(3));
        assert_eq!(cfg.spacing, Vector::ONE);
        assert_eq!(cfg.deformation_range, Vector::splat(0.2));
        assert_eq!(cfg.min_deformation, Vector::splat(0.04));
        assert_eq!(cfg.spacing_policy, SpacingPolicy::ScaleWhenAnyExceedsOne);
    }

    #[test]
    fn small_spacing_is_ignored() {
        let s = SpacingPolicy::ScaleWhenAnyExceedsOne;
        assert_eq!(s.scale(Vector::splat(0.2)), Vector::ONE);
        assert_eq!(s.scale(Vector::new(0.5, 1.0, 0.5)), Vector::ONE);
    }

    #[test]
    fn one_large_axis_scales_every_axis() {
        let s = SpacingPolicy::ScaleWhenAnyExceedsOne;
        assert_eq!(s.scale(Vector::new(0.5, 2.0, 1.0)), Vector::new(0.5, 2.0, 1.0));
    }

    #[test]
    fn always_policy_scales_small_spacing() {
        assert_eq!(SpacingPolicy::Always.scale(Vector::splat(0.2)), Vector::splat(0.2));
    }

    #[test]
    fn validate_rejects_zero_extent_first() {
        let cfg = VolumeConfig::new(Extent3::new(3, 0, 3)).with_spacing(Vector::splat(-1.0));
        assert_eq!(
            cfg.validate(),
            Err(VolumeError::Space(SpaceError::InvalidSize { axis: "y", value: 0 }))
        );
    }

    #[test]
    fn validate_rejects_negative_range() {
        let cfg = VolumeConfig::new(Extent3::cube(3))
            .with_deformation_range(Vector::new(0.2, -0.2, 0.2));
        assert!(matches!(
            cfg.validate(),
            Err(VolumeError::Config(ConfigError::NegativeComponent {
                name: "deformation_range",
                ..
            }))
        ));
    }

    #[test]
    fn validate_rejects_nan_floor() {
        let cfg = VolumeConfig::new(Extent3::cube(3)).with_min_deformation(Vector::splat(f64::NAN));
        assert!(matches!(
            cfg.validate(),
            Err(VolumeError::Config(ConfigError::NonFinite {
                name: "min_deformation",
                ..
            }))
        ));
    }

    #[test]
    fn zero_spacing_is_valid() {
        let cfg = VolumeConfig::new(Extent3::cube(2)).with_spacing(Vector::ZERO);
        assert!(cfg.validate().is_ok());
    }
}
