//! Orbital transform evaluation.
//!
//! Motion is circular and time-linear: every body rides a fixed-radius
//! circle around its parent, all orbits share the +Y axis (the system is
//! coplanar), and a body's own spin is a separate rotation that never
//! moves anything. Everything here is a pure function of the orbital
//! parameters and the injected clock value.

use bevy::prelude::*;

/// Self-spin rates are fixed per nesting level, in radians per
/// simulation second.
pub const STAR_SPIN_RATE: f32 = 0.1;
pub const PLANET_SPIN_RATE: f32 = 0.5;
pub const SATELLITE_SPIN_RATE: f32 = 2.0;

/// Reference axis along which a body sits at angle zero.
pub const REFERENCE_AXIS: Vec3 = Vec3::X;

/// A body's instantaneous placement relative to its parent.
#[derive(Clone, Copy, Debug)]
pub struct LocalOrbit {
    /// Rotation of the body's orbital frame around the parent's +Y axis.
    /// Children of this body orbit inside this rotated frame.
    pub orbit_rotation: Quat,
    /// Offset from the parent's origin: `orbit_radius` along the
    /// reference axis, swept by the orbit rotation.
    pub offset: Vec3,
    /// The body's own spin. Visual only; it never contributes to a
    /// position, neither the body's own nor a child's.
    pub spin: Quat,
}

impl LocalOrbit {
    /// The local transform a child frame composes against.
    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.offset,
            rotation: self.orbit_rotation,
            scale: Vec3::ONE,
        }
    }
}

/// Evaluate a body's local placement at the given simulation time.
///
/// All numeric inputs are accepted: a zero radius pins the body to its
/// parent's center, a zero speed leaves it at its start angle, a negative
/// speed runs the orbit the other way round.
pub fn evaluate(orbit_radius: f32, orbit_speed: f32, spin_rate: f32, elapsed: f32) -> LocalOrbit {
    let orbit_rotation = Quat::from_rotation_y(orbit_speed * elapsed);
    LocalOrbit {
        orbit_rotation,
        offset: orbit_rotation * (REFERENCE_AXIS * orbit_radius),
        spin: Quat::from_rotation_y(spin_rate * elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_zero_elapsed_places_body_on_reference_axis() {
        let orbit = evaluate(6.0, 0.4, PLANET_SPIN_RATE, 0.0);
        assert!((orbit.offset - Vec3::new(6.0, 0.0, 0.0)).length() < EPSILON);
        assert!(orbit.orbit_rotation.angle_between(Quat::IDENTITY) < EPSILON);
        assert!(orbit.spin.angle_between(Quat::IDENTITY) < EPSILON);
    }

    #[test]
    fn test_orbit_is_periodic_in_its_own_speed() {
        let speed = 0.7;
        let period = TAU / speed;
        for t in [0.0, 1.3, 5.9, 42.0] {
            let a = evaluate(4.0, speed, 0.0, t);
            let b = evaluate(4.0, speed, 0.0, t + period);
            assert!(
                (a.offset - b.offset).length() < EPSILON,
                "offset not periodic at t = {t}: {:?} vs {:?}",
                a.offset,
                b.offset
            );
        }
    }

    #[test]
    fn test_zero_speed_means_stationary() {
        let reference = evaluate(5.0, 0.0, 0.0, 0.0);
        for t in [0.1, 7.0, 1000.0] {
            let orbit = evaluate(5.0, 0.0, 0.0, t);
            assert!((orbit.offset - reference.offset).length() < EPSILON);
        }
    }

    #[test]
    fn test_zero_radius_pins_body_to_parent_center() {
        for t in [0.0, 3.0, 17.5] {
            let orbit = evaluate(0.0, 2.0, 0.0, t);
            assert!(orbit.offset.length() < EPSILON);
        }
    }

    #[test]
    fn test_negative_speed_mirrors_the_orbit() {
        let t = 1.25;
        let forward = evaluate(3.0, 0.8, 0.0, t);
        let backward = evaluate(3.0, -0.8, 0.0, t);
        assert!((forward.offset.x - backward.offset.x).abs() < EPSILON);
        assert!((forward.offset.z + backward.offset.z).abs() < EPSILON);
    }

    #[test]
    fn test_quarter_revolution_leaves_the_orbit_plane_untouched() {
        let speed = 0.4;
        let t = (TAU / 4.0) / speed;
        let orbit = evaluate(6.0, speed, 0.0, t);
        // +Y orbit axis: a quarter turn carries +X onto -Z, staying in the
        // y = 0 plane.
        assert!((orbit.offset - Vec3::new(0.0, 0.0, -6.0)).length() < EPSILON);
    }

    #[test]
    fn test_spin_does_not_affect_the_offset() {
        let t = 2.7;
        let slow = evaluate(6.0, 0.4, 0.0, t);
        let fast = evaluate(6.0, 0.4, SATELLITE_SPIN_RATE, t);
        assert!((slow.offset - fast.offset).length() < EPSILON);
        // But the spin itself tracks spin_rate * t.
        let expected = Quat::from_rotation_y(SATELLITE_SPIN_RATE * t);
        assert!(fast.spin.angle_between(expected) < EPSILON);
    }
}
