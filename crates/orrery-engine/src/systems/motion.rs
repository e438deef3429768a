use crate::core::scene::Scene;

/// Advance every active body by `dt` seconds of simulation time.
///
/// Orbiting bodies sweep their angle and get their position recomputed from
/// it; every body additionally spins about its own axis. Pass the
/// playback-scaled delta — a paused clock hands in 0 and the whole scene
/// freezes in place.
pub fn advance_orbits(scene: &mut Scene, dt: f32) {
    for body in scene.iter_mut() {
        if !body.active {
            continue;
        }
        if let Some(orbit) = &mut body.orbit {
            orbit.advance(dt);
            body.position = orbit.position();
        }
        body.spin = (body.spin + body.spin_speed * dt).rem_euclid(std::f32::consts::TAU);
    }
}
