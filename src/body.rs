//! Body factory: builds one sprite body and inserts it into the world.

use crate::config::RainConfig;
use crate::layout::PageLayout;
use crate::scale::ScaleFactor;
use crate::world::{BodyMaterial, BodySpec, PhysicsWorld};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

/// Marker for every dynamic sprite body.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteBody;

/// Half extents of a body's rectangle, used for pointer hit-testing.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HalfExtents(pub Vec2);

impl BodyMaterial {
    pub fn from_config(cfg: &RainConfig) -> Self {
        Self {
            friction: cfg.friction,
            air_friction: cfg.air_friction,
            restitution: cfg.restitution,
        }
    }
}

/// Build a body at the top edge of the container.
///
/// * x is uniform in `[0, container.x)`; a container without width puts the
///   body at x = 0 instead of panicking
/// * y is 0, so gravity pulls it into view
/// * angle is uniform in `[0, 2π)`
/// * size is the base size times `scale`
pub fn make_body<R: Rng>(
    rng: &mut R,
    container: Vec2,
    scale: ScaleFactor,
    cfg: &RainConfig,
) -> BodySpec {
    let x = if container.x > 0.0 {
        rng.gen_range(0.0..container.x)
    } else {
        0.0
    };
    let angle = rng.gen_range(0.0..TAU);

    BodySpec {
        position: Vec2::new(x, 0.0),
        angle,
        size: Vec2::new(cfg.base_width, cfg.base_height) * scale.get(),
        texture: cfg.texture_path.clone(),
        material: BodyMaterial::from_config(cfg),
    }
}

/// Build a body for the current layout and insert it.
pub fn spawn_body<W, R>(world: &mut W, rng: &mut R, layout: &PageLayout, cfg: &RainConfig)
where
    W: PhysicsWorld + ?Sized,
    R: Rng,
{
    let scale = ScaleFactor::for_viewport(layout.viewport_width);
    world.add_body(make_body(rng, layout.container, scale, cfg));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryWorld;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn position_and_angle_stay_in_range() {
        let cfg = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let container = Vec2::new(333.0, 200.0);
        for _ in 0..5000 {
            let body = make_body(&mut rng, container, ScaleFactor(0.4), &cfg);
            assert!(body.position.x >= 0.0 && body.position.x < container.x);
            assert_eq!(body.position.y, 0.0);
            assert!(body.angle >= 0.0 && body.angle < TAU);
        }
    }

    #[test]
    fn size_is_base_times_scale() {
        let cfg = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let body = make_body(&mut rng, Vec2::new(800.0, 600.0), ScaleFactor(0.5), &cfg);
        assert_eq!(body.size, Vec2::new(125.0, 89.0));
    }

    #[test]
    fn material_and_texture_are_fixed() {
        let cfg = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let a = make_body(&mut rng, Vec2::new(800.0, 600.0), ScaleFactor(0.4), &cfg);
        let b = make_body(&mut rng, Vec2::new(800.0, 600.0), ScaleFactor(0.4), &cfg);
        assert_eq!(a.material, b.material);
        assert_eq!(a.material.friction, 0.3);
        assert_eq!(a.material.air_friction, 0.00001);
        assert_eq!(a.material.restitution, 0.4);
        assert_eq!(a.texture, b.texture);
    }

    #[test]
    fn zero_width_container_gives_degenerate_body() {
        let cfg = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let body = make_body(&mut rng, Vec2::ZERO, ScaleFactor(0.35), &cfg);
        assert_eq!(body.position, Vec2::ZERO);
    }

    #[test]
    fn spawn_body_uses_viewport_scale() {
        let cfg = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut world = MemoryWorld::default();
        let layout = PageLayout::uniform(1920.0, 1080.0);
        spawn_body(&mut world, &mut rng, &layout, &cfg);
        assert_eq!(world.bodies.len(), 1);
        assert_eq!(world.bodies[0].size, Vec2::new(250.0, 178.0) * 0.65);
    }
}
