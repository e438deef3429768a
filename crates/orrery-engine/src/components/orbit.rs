use glam::Vec3;
use std::f32::consts::TAU;

/// Circular-orbit component: a fixed parametrization, not a physics body.
///
/// The angle stays in [0, 2π) and advances monotonically (mod 2π) as long
/// as the simulation is running. Position is always derived from the angle;
/// nothing else writes it.
#[derive(Debug, Clone, Copy)]
pub struct OrbitComponent {
    /// Orbital distance from the system center, in world units.
    pub distance: f32,
    /// Angular speed in radians per second. Negative values orbit retrograde.
    pub angular_speed: f32,
    /// Current orbital angle in radians, always in [0, 2π).
    pub angle: f32,
}

impl OrbitComponent {
    pub fn new(distance: f32, angular_speed: f32) -> Self {
        Self {
            distance,
            angular_speed,
            angle: 0.0,
        }
    }

    /// Set the starting angle (wrapped into [0, 2π)).
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle.rem_euclid(TAU);
        self
    }

    /// Advance the orbit by `dt` seconds of simulation time.
    pub fn advance(&mut self, dt: f32) {
        self.angle = (self.angle + self.angular_speed * dt).rem_euclid(TAU);
    }

    /// World position on the orbital plane (y = 0).
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.angle.cos(),
            0.0,
            self.distance * self.angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_speed_times_dt() {
        let mut orbit = OrbitComponent::new(35.0, 0.02);
        for _ in 0..60 {
            orbit.advance(1.0 / 60.0);
        }
        // One second at 0.02 rad/s
        assert!((orbit.angle - 0.02).abs() < 1e-5, "angle = {}", orbit.angle);
    }

    #[test]
    fn angle_wraps_into_unit_circle() {
        let mut orbit = OrbitComponent::new(10.0, 1.0).with_angle(TAU - 0.1);
        orbit.advance(0.2);
        assert!(orbit.angle >= 0.0 && orbit.angle < TAU);
        assert!((orbit.angle - 0.1).abs() < 1e-5);
    }

    #[test]
    fn with_angle_wraps_negative_input() {
        let orbit = OrbitComponent::new(10.0, 1.0).with_angle(-0.25);
        assert!((orbit.angle - (TAU - 0.25)).abs() < 1e-5);
    }

    #[test]
    fn position_stays_on_orbital_plane() {
        let mut orbit = OrbitComponent::new(45.0, 0.015).with_angle(1.3);
        for _ in 0..100 {
            orbit.advance(0.016);
            let pos = orbit.position();
            assert_eq!(pos.y, 0.0);
            assert!((pos.length() - 45.0).abs() < 1e-3);
        }
    }

    #[test]
    fn retrograde_speed_wraps_below_zero() {
        let mut orbit = OrbitComponent::new(10.0, -1.0).with_angle(0.05);
        orbit.advance(0.1);
        assert!(orbit.angle > TAU - 0.06 && orbit.angle < TAU);
    }
}
