//! Pointer drag: grab a body, pull it towards the pointer, let go.
//!
//! Any [`SpriteBody`] can be grabbed as soon as it exists. The grab point is
//! remembered in the body's local frame, so bodies swing naturally around the
//! point that was picked. Mouse wheel input is never read here; on the web the
//! canvas also leaves wheel events to the page so scrolling keeps working.

use crate::body::{HalfExtents, SpriteBody};
use crate::config::RainConfig;
use crate::constants::REFERENCE_STEP_RATE;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub entity: Option<Entity>,
    /// Grab point in the body's local frame.
    pub local_anchor: Vec2,
}

/// Local-frame point under `pointer` if it lies inside the rotated rectangle.
pub fn hit_test(pointer: Vec2, center: Vec2, rotation: f32, half: Vec2) -> Option<Vec2> {
    let local = Vec2::from_angle(-rotation).rotate(pointer - center);
    (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(local)
}

/// Velocity that closes `stiffness` of the anchor's distance to the pointer
/// every reference step.
pub fn drag_velocity(anchor: Vec2, pointer: Vec2, stiffness: f32) -> Vec2 {
    (pointer - anchor) * stiffness * REFERENCE_STEP_RATE
}

fn z_rotation(transform: &Transform) -> f32 {
    transform.rotation.to_euler(EulerRot::ZYX).0
}

/// Pointer position in world space: first active touch, else the cursor.
fn pointer_world_pos(
    windows: &Query<&Window>,
    touches: &Touches,
    cameras: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let screen = touches
        .iter()
        .next()
        .map(|t| t.position())
        .or_else(|| window.cursor_position())?;
    let (camera, camera_tf) = cameras.iter().next()?;
    camera.viewport_to_world_2d(camera_tf, screen).ok()
}

/// Start a drag on press over a body; end it on release.
pub fn begin_or_end_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    bodies: Query<(Entity, &Transform, &HalfExtents), With<SpriteBody>>,
    ui: Query<&Interaction, With<Button>>,
    mut active: ResMut<ActiveDrag>,
) {
    if buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some() {
        active.entity = None;
    }

    let pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    if !pressed || active.entity.is_some() {
        return;
    }
    // Presses on UI buttons are not grabs.
    if ui.iter().any(|i| *i != Interaction::None) {
        return;
    }
    let Some(pointer) = pointer_world_pos(&windows, &touches, &cameras) else {
        return;
    };

    // Topmost = most recently spawned among overlapping hits.
    let hit = bodies
        .iter()
        .filter_map(|(entity, tf, half)| {
            hit_test(pointer, tf.translation.truncate(), z_rotation(tf), half.0)
                .map(|local| (entity, local))
        })
        .max_by_key(|(entity, _)| *entity);

    if let Some((entity, local_anchor)) = hit {
        *active = ActiveDrag {
            entity: Some(entity),
            local_anchor,
        };
    }
}

/// Pull the grabbed body's anchor towards the pointer.
pub fn apply_drag(
    touches: Res<Touches>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut active: ResMut<ActiveDrag>,
    mut bodies: Query<(&Transform, &mut Velocity), With<SpriteBody>>,
    config: Res<RainConfig>,
) {
    let Some(entity) = active.entity else {
        return;
    };
    let Ok((tf, mut velocity)) = bodies.get_mut(entity) else {
        active.entity = None;
        return;
    };
    let Some(pointer) = pointer_world_pos(&windows, &touches, &cameras) else {
        return;
    };

    let anchor = tf.translation.truncate()
        + Vec2::from_angle(z_rotation(tf)).rotate(active.local_anchor);
    velocity.linvel = drag_velocity(anchor, pointer, config.drag_stiffness);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn hit_test_respects_rotation() {
        let half = Vec2::new(50.0, 10.0);
        // Unrotated: wide and short.
        assert!(hit_test(Vec2::new(40.0, 0.0), Vec2::ZERO, 0.0, half).is_some());
        assert!(hit_test(Vec2::new(0.0, 40.0), Vec2::ZERO, 0.0, half).is_none());
        // Quarter turn: tall and narrow.
        assert!(hit_test(Vec2::new(40.0, 0.0), Vec2::ZERO, FRAC_PI_2, half).is_none());
        assert!(hit_test(Vec2::new(0.0, 40.0), Vec2::ZERO, FRAC_PI_2, half).is_some());
    }

    #[test]
    fn hit_test_returns_local_anchor() {
        let local = hit_test(
            Vec2::new(110.0, 205.0),
            Vec2::new(100.0, 200.0),
            0.0,
            Vec2::splat(20.0),
        )
        .expect("inside");
        assert!((local - Vec2::new(10.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn drag_velocity_scales_with_stiffness() {
        let v = drag_velocity(Vec2::ZERO, Vec2::new(10.0, -5.0), 0.2);
        assert!((v - Vec2::new(120.0, -60.0)).length() < 1e-3);
        assert_eq!(drag_velocity(Vec2::ONE, Vec2::ONE, 0.2), Vec2::ZERO);
    }
}
