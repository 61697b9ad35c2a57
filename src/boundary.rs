//! Ground and side walls.
//!
//! The three boundaries are created once from the initial container size.
//! Afterwards only their positions follow the container; their sizes never
//! change, so a container that grows far taller than it started can outgrow
//! the walls.

use crate::config::RainConfig;
use crate::engine::RapierWorld;
use crate::layout::PageLayout;
use crate::world::{BoundaryKind, BoundaryRect, PhysicsWorld};
use bevy::prelude::*;

/// Boundary geometry derived from the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryGeometry {
    pub thickness: f32,
    pub ground_width: f32,
    pub wall_height_factor: f32,
}

impl BoundaryGeometry {
    pub fn from_config(cfg: &RainConfig) -> Self {
        Self {
            thickness: cfg.boundary_thickness,
            ground_width: cfg.ground_width,
            wall_height_factor: cfg.wall_height_factor,
        }
    }

    /// Centre of `kind` for a container of the given size, in page space.
    ///
    /// The ground sits just below the bottom edge, the walls just outside the
    /// left and right edges.
    pub fn center(&self, kind: BoundaryKind, container: Vec2) -> Vec2 {
        let half = self.thickness * 0.5;
        match kind {
            BoundaryKind::Ground => Vec2::new(container.x * 0.5, container.y + half),
            BoundaryKind::LeftWall => Vec2::new(-half, container.y * 0.5),
            BoundaryKind::RightWall => Vec2::new(container.x + half, container.y * 0.5),
        }
    }

    /// Full rectangle of `kind` when created for `container`.
    pub fn rect(&self, kind: BoundaryKind, container: Vec2) -> BoundaryRect {
        let size = match kind {
            BoundaryKind::Ground => Vec2::new(self.ground_width, self.thickness),
            BoundaryKind::LeftWall | BoundaryKind::RightWall => {
                Vec2::new(self.thickness, container.y * self.wall_height_factor)
            }
        };
        BoundaryRect {
            center: self.center(kind, container),
            size,
        }
    }
}

/// Insert all three boundaries sized for `container`.
pub fn create_boundaries<W: PhysicsWorld + ?Sized>(
    world: &mut W,
    geometry: &BoundaryGeometry,
    container: Vec2,
) {
    for kind in BoundaryKind::ALL {
        world.add_boundary(kind, geometry.rect(kind, container));
    }
}

/// Move all three boundaries to track a new container size.
pub fn reposition_boundaries<W: PhysicsWorld + ?Sized>(
    world: &mut W,
    geometry: &BoundaryGeometry,
    container: Vec2,
) {
    for kind in BoundaryKind::ALL {
        world.set_boundary_position(kind, geometry.center(kind, container));
    }
}

/// Startup system: create the boundaries around the initial container.
pub fn setup_boundaries(mut world: RapierWorld, layout: Res<PageLayout>, config: Res<RainConfig>) {
    create_boundaries(
        &mut world,
        &BoundaryGeometry::from_config(&config),
        layout.container,
    );
    info!(
        "Boundaries placed around {}x{} container",
        layout.container.x, layout.container.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::MemoryWorld;

    fn geometry() -> BoundaryGeometry {
        BoundaryGeometry::from_config(&RainConfig::default())
    }

    #[test]
    fn creation_sizes_follow_initial_container() {
        let mut world = MemoryWorld::default();
        create_boundaries(&mut world, &geometry(), Vec2::new(1000.0, 600.0));
        assert_eq!(world.boundaries.len(), 3);

        let ground = world.boundary(BoundaryKind::Ground).expect("ground");
        assert_eq!(ground.center, Vec2::new(500.0, 630.0));
        assert_eq!(ground.size, Vec2::new(27184.0, 60.0));

        let left = world.boundary(BoundaryKind::LeftWall).expect("left");
        assert_eq!(left.center, Vec2::new(-30.0, 300.0));
        assert_eq!(left.size, Vec2::new(60.0, 3000.0));

        let right = world.boundary(BoundaryKind::RightWall).expect("right");
        assert_eq!(right.center, Vec2::new(1030.0, 300.0));
        assert_eq!(right.size, Vec2::new(60.0, 3000.0));
    }

    #[test]
    fn resize_moves_but_never_resizes() {
        let mut world = MemoryWorld::default();
        let geom = geometry();
        create_boundaries(&mut world, &geom, Vec2::new(1000.0, 600.0));
        reposition_boundaries(&mut world, &geom, Vec2::new(640.0, 900.0));

        let ground = world.boundary(BoundaryKind::Ground).expect("ground");
        assert_eq!(ground.center, Vec2::new(320.0, 930.0));
        assert_eq!(ground.size, Vec2::new(27184.0, 60.0));

        let left = world.boundary(BoundaryKind::LeftWall).expect("left");
        assert_eq!(left.center, Vec2::new(-30.0, 450.0));
        assert_eq!(left.size, Vec2::new(60.0, 3000.0));

        let right = world.boundary(BoundaryKind::RightWall).expect("right");
        assert_eq!(right.center, Vec2::new(670.0, 450.0));
        assert_eq!(right.size, Vec2::new(60.0, 3000.0));
    }
}
