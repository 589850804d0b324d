//! The per-hop attenuation rule.

use chainmail_core::Vector;
use chainmail_volume::Volume;

/// Outcome of attenuating a displacement across one hop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decay {
    /// Displacement to hand to the next ring of neighbours.
    Continue(Vector),
    /// Every axis fell below the floor; the branch ends here.
    Exhausted,
}

/// Subtract-and-clamp decay with a per-axis floor.
///
/// ```text
/// sign       = copysign(1, delta)          // +0 counts as positive
/// attenuated = max(0, |delta| - range)
/// exhausted  = all(attenuated < floor)
/// next       = sign * attenuated
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayLaw {
    /// Amount removed from each axis per hop.
    pub range: Vector,
    /// Per-axis floor; a branch ends when every axis is strictly below it.
    pub floor: Vector,
}

impl DecayLaw {
    /// A law with explicit parameters.
    pub fn new(range: Vector, floor: Vector) -> Self {
        Self { range, floor }
    }

    /// The law configured on `volume`.
    pub fn for_volume<P>(volume: &Volume<P>) -> Self {
        Self::new(volume.deformation_range(), volume.min_deformation())
    }

    /// Attenuate `delta` across one hop.
    pub fn step(&self, delta: Vector) -> Decay {
        let sign = Vector::ONE.copysign(delta);
        let attenuated = (delta.abs() - self.range).max(Vector::ZERO);
        if attenuated.cmplt(self.floor).all() {
            return Decay::Exhausted;
        }
        Decay::Continue(sign * attenuated)
    }

    /// Displacement after `hops` consecutive steps, or `None` once exhausted.
    ///
    /// `hops == 0` returns `delta` unchanged.
    pub fn after(&self, delta: Vector, hops: usize) -> Option<Vector> {
        (0..hops).try_fold(delta, |d, _| match self.step(d) {
            Decay::Continue(next) => Some(next),
            Decay::Exhausted => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn law(range: f64) -> DecayLaw {
        DecayLaw::new(Vector::splat(range), Vector::splat(0.04))
    }

    fn approx(a: Vector, b: Vector) -> bool {
        (a - b).abs().max_element() < 1e-12
    }

    #[test]
    fn subtracts_range_per_axis() {
        let Decay::Continue(next) = law(0.6).step(Vector::new(1.0, 1.0, 3.0)) else {
            panic!("expected continue");
        };
        assert!(approx(next, Vector::new(0.4, 0.4, 2.4)));
    }

    #[test]
    fn keeps_sign_of_negative_axes() {
        let Decay::Continue(next) = law(0.5).step(Vector::new(-2.0, 1.0, -0.25)) else {
            panic!("expected continue");
        };
        assert_eq!(next.x, -1.5);
        assert_eq!(next.y, 0.5);
        // Clamped to zero, sign carried on the zero.
        assert_eq!(next.z, 0.0);
        assert!(next.z.is_sign_negative());
    }

    #[test]
    fn zero_axis_counts_as_positive() {
        let l = DecayLaw::new(Vector::ZERO, Vector::splat(0.04));
        assert_eq!(l.step(Vector::new(0.0, 0.0, 1.0)), Decay::Continue(Vector::new(0.0, 0.0, 1.0)));
        let Decay::Continue(next) = l.step(Vector::new(0.0, 0.0, 1.0)) else {
            panic!("expected continue");
        };
        assert!(next.x.is_sign_positive());
    }

    #[test]
    fn exhausted_when_every_axis_below_floor() {
        assert_eq!(law(0.6).step(Vector::new(0.6, 0.6, 0.6)), Decay::Exhausted);
        assert_eq!(law(0.2).step(Vector::new(0.23, -0.1, 0.0)), Decay::Exhausted);
    }

    #[test]
    fn one_axis_at_floor_keeps_branch_alive() {
        let l = DecayLaw::new(Vector::ZERO, Vector::splat(0.04));
        assert_eq!(
            l.step(Vector::new(0.0, 0.04, 0.0)),
            Decay::Continue(Vector::new(0.0, 0.04, 0.0))
        );
    }

    #[test]
    fn range_covering_initial_exhausts_immediately() {
        let l = DecayLaw::new(Vector::new(1.0, 1.0, 3.0), Vector::splat(0.04));
        assert_eq!(l.step(Vector::new(-1.0, 1.0, 3.0)), Decay::Exhausted);
    }

    #[test]
    fn after_iterates_step() {
        let l = law(0.6);
        let initial = Vector::new(1.0, 1.0, 3.0);
        assert_eq!(l.after(initial, 0), Some(initial));
        let two = l.after(initial, 2).unwrap();
        assert!(approx(two, Vector::new(0.0, 0.0, 1.8)));
        assert!(l.after(initial, 4).is_some());
        assert_eq!(l.after(initial, 5), None);
    }

    proptest! {
        #[test]
        fn magnitude_never_grows_and_sign_is_kept(
            delta in prop::array::uniform3(-5.0f64..5.0),
            range in prop::array::uniform3(0.0f64..1.0),
        ) {
            let delta = Vector::from_array(delta);
            let l = DecayLaw::new(Vector::from_array(range), Vector::splat(0.04));
            if let Decay::Continue(next) = l.step(delta) {
                prop_assert!(next.abs().cmple(delta.abs()).all());
                for i in 0..3 {
                    if next[i] != 0.0 {
                        prop_assert_eq!(next[i].is_sign_negative(), delta[i].is_sign_negative());
                    }
                }
            }
        }
    }
}
