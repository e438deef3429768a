use glam::Vec3;
use std::f32::consts::TAU;

use crate::api::sim::SimContext;
use crate::api::types::BodyId;
use crate::catalog::defs::SystemCatalog;
use crate::components::body::Body;
use crate::components::mesh::MeshComponent;
use crate::components::orbit::OrbitComponent;
use crate::components::ring::RingComponent;

/// IDs of the bodies a catalog spawned, in catalog order.
pub struct SpawnedSystem {
    pub star: BodyId,
    pub planets: Vec<BodyId>,
}

/// Deterministic hash for angle scattering (no external rand crate).
fn hash32(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Pseudo-random starting angle in [0, 2π) for planet `index` under `seed`.
pub fn scatter_angle(seed: u32, index: u32) -> f32 {
    let h = hash32(seed ^ index.wrapping_mul(0x9E37_79B9));
    // The quotient can round up to 1.0; wrap so the result stays below TAU.
    ((h as f32 / u32::MAX as f32) * TAU).rem_euclid(TAU)
}

/// Instantiate a catalog into the scene: the star at the origin, each
/// planet on its orbit with a scattered starting angle.
pub fn spawn_system(ctx: &mut SimContext, catalog: &SystemCatalog, seed: u32) -> SpawnedSystem {
    let star_id = ctx.next_id();
    ctx.scene.spawn(
        Body::new(star_id)
            .with_tag(catalog.star.name.clone())
            .with_position(Vec3::ZERO)
            .with_mesh(
                MeshComponent::sphere(catalog.star.radius, catalog.star.color)
                    .with_emissive(catalog.star.emissive)
                    .with_shininess(8.0),
            ),
    );

    let mut planet_ids = Vec::with_capacity(catalog.planets.len());
    for (i, def) in catalog.planets.iter().enumerate() {
        let angle = scatter_angle(seed, i as u32);
        let id = ctx.next_id();
        let mut body = Body::new(id)
            .with_tag(def.name.clone())
            .with_spin_speed(def.spin_speed)
            .with_mesh(MeshComponent::sphere(def.radius, def.color).with_shininess(10.0))
            .with_orbit(OrbitComponent::new(def.distance, def.speed).with_angle(angle));

        if let Some(ring) = &def.ring {
            body = body.with_ring(
                RingComponent::new(
                    def.radius * ring.inner_scale,
                    def.radius * ring.outer_scale,
                    ring.color,
                )
                .with_opacity(ring.opacity),
            );
        }

        ctx.scene.spawn(body);
        planet_ids.push(id);
    }

    log::debug!(
        "spawned {} with {} planets",
        catalog.star.name,
        planet_ids.len()
    );

    SpawnedSystem {
        star: star_id,
        planets: planet_ids,
    }
}
