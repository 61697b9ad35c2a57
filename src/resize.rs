//! Resize handler: keeps the render surface and the boundaries in step with
//! the container.

use crate::boundary::{reposition_boundaries, BoundaryGeometry};
use crate::config::RainConfig;
use crate::engine::RapierWorld;
use crate::layout::PageLayout;
use crate::world::{BoundaryKind, PhysicsWorld};
use bevy::prelude::*;
use bevy::window::WindowResized;

/// Apply a new container size: update the layout, then move the boundaries.
///
/// The viewport width follows the container; the web bridge overrides it with
/// the browser's inner width when running on a page.
pub fn apply_resize<W: PhysicsWorld + ?Sized>(
    world: &mut W,
    layout: &mut PageLayout,
    geometry: &BoundaryGeometry,
    size: Vec2,
) {
    layout.container = size;
    layout.viewport_width = size.x;
    reposition_boundaries(world, geometry, size);
}

/// Track the latest window resize of the frame.
///
/// Zero-area sizes (a minimized window) are ignored; the container keeps its
/// last real size so the boundaries stay clear of the pile. The camera is re-centred on the container so its top-left corner stays at
/// the world origin; existing bodies do not move.
pub fn resize_system(
    mut resized: MessageReader<WindowResized>,
    mut layout: ResMut<PageLayout>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<BoundaryKind>)>,
    mut world: RapierWorld,
    config: Res<RainConfig>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    let size = Vec2::new(event.width, event.height);
    if size.x <= 0.0 || size.y <= 0.0 {
        debug!("Ignoring zero-area resize {}x{}", size.x, size.y);
        return;
    }

    apply_resize(
        &mut world,
        &mut layout,
        &BoundaryGeometry::from_config(&config),
        size,
    );

    let center = layout.camera_center();
    for mut transform in cameras.iter_mut() {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
    debug!("Container resized to {}x{}", size.x, size.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::create_boundaries;
    use crate::world::MemoryWorld;

    #[test]
    fn resize_updates_layout_and_boundaries() {
        let geometry = BoundaryGeometry::from_config(&RainConfig::default());
        let mut world = MemoryWorld::default();
        let mut layout = PageLayout::uniform(1200.0, 680.0);
        create_boundaries(&mut world, &geometry, layout.container);

        apply_resize(&mut world, &mut layout, &geometry, Vec2::new(500.0, 400.0));

        assert_eq!(layout.container, Vec2::new(500.0, 400.0));
        assert_eq!(layout.viewport_width, 500.0);
        let right = world.boundary(BoundaryKind::RightWall).expect("right wall");
        assert_eq!(right.center, Vec2::new(530.0, 200.0));
        assert_eq!(right.size, Vec2::new(60.0, 3400.0));
    }
}
