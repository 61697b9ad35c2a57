//! Rapier-backed [`PhysicsWorld`].
//!
//! Bodies and boundaries become entities with Rapier components; Rapier steps
//! them and Bevy draws the body sprites. Page-space positions and angles are
//! converted to world space here and nowhere else.

use crate::body::{HalfExtents, SpriteBody};
use crate::config::RainConfig;
use crate::constants::{BODY_Z, REFERENCE_STEP_RATE};
use crate::layout::{page_angle_to_world, page_to_world};
use crate::world::{BodySpec, BoundaryKind, BoundaryRect, PhysicsWorld};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Texture drawn on every body.
///
/// Created by [`crate::graphics::load_body_texture`]; stays the default handle
/// in headless apps, where the sprite simply never renders.
#[derive(Resource, Default, Debug, Clone)]
pub struct BodyTexture(pub Handle<Image>);

/// Whether Rapier is stepping.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRunning(pub bool);

impl Default for SimulationRunning {
    fn default() -> Self {
        Self(true)
    }
}

/// The live world: commands for inserting, queries for moving boundaries and
/// toggling the pipeline.
#[derive(SystemParam)]
pub struct RapierWorld<'w, 's> {
    commands: Commands<'w, 's>,
    texture: Res<'w, BodyTexture>,
    boundaries: Query<'w, 's, (&'static BoundaryKind, &'static mut Transform)>,
    rapier: Query<'w, 's, &'static mut RapierConfiguration>,
}

impl PhysicsWorld for RapierWorld<'_, '_> {
    fn add_body(&mut self, body: BodySpec) {
        let half = body.size * 0.5;
        let damping = body.material.air_friction * REFERENCE_STEP_RATE;
        let transform = Transform::from_translation(page_to_world(body.position).extend(BODY_Z))
            .with_rotation(Quat::from_rotation_z(page_angle_to_world(body.angle)));

        self.commands.spawn((
            (
                SpriteBody,
                HalfExtents(half),
                Sprite {
                    image: self.texture.0.clone(),
                    custom_size: Some(body.size),
                    ..default()
                },
                transform,
                RigidBody::Dynamic,
            ),
            (
                Collider::cuboid(half.x, half.y),
                Friction {
                    coefficient: body.material.friction,
                    combine_rule: CoefficientCombineRule::Min,
                },
                Restitution {
                    coefficient: body.material.restitution,
                    combine_rule: CoefficientCombineRule::Max,
                },
                Damping {
                    linear_damping: damping,
                    angular_damping: damping,
                },
                Velocity::zero(),
            ),
        ));
    }

    fn add_boundary(&mut self, kind: BoundaryKind, rect: BoundaryRect) {
        self.commands.spawn((
            kind,
            Transform::from_translation(page_to_world(rect.center).extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(rect.size.x * 0.5, rect.size.y * 0.5),
        ));
    }

    fn set_boundary_position(&mut self, kind: BoundaryKind, center: Vec2) {
        for (boundary, mut transform) in self.boundaries.iter_mut() {
            if *boundary == kind {
                let z = transform.translation.z;
                transform.translation = page_to_world(center).extend(z);
            }
        }
    }

    fn set_running(&mut self, running: bool) {
        for mut cfg in self.rapier.iter_mut() {
            cfg.physics_pipeline_active = running;
        }
    }
}

/// Startup system: point gravity down the page.
pub fn configure_engine(mut rapier: Query<&mut RapierConfiguration>, config: Res<RainConfig>) {
    for mut cfg in rapier.iter_mut() {
        cfg.gravity = Vec2::new(0.0, -config.gravity);
    }
}

/// Space toggles stepping. Bodies keep their state while paused.
pub fn toggle_pause_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut running: ResMut<SimulationRunning>,
    mut world: RapierWorld,
) {
    if keys.just_pressed(KeyCode::Space) {
        running.0 = !running.0;
        world.set_running(running.0);
        info!(
            "Simulation {}",
            if running.0 { "resumed" } else { "paused" }
        );
    }
}
