//! The physics world as seen by the orchestration code.
//!
//! [`PhysicsWorld`] is the whole surface the spawn, boundary and resize logic
//! needs from the engine. [`crate::engine::RapierWorld`] implements it on top
//! of Bevy + Rapier; [`MemoryWorld`] records calls for headless use and tests.
//!
//! All positions passed through the trait are in page space (see
//! [`crate::layout`]).

use bevy::prelude::*;

/// Surface properties shared by every body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMaterial {
    pub friction: f32,
    /// Fraction of velocity lost per 60 Hz step.
    pub air_friction: f32,
    pub restitution: f32,
}

/// One dynamic sprite body, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    /// Centre in page space.
    pub position: Vec2,
    /// Rotation in radians, clockwise on screen, in `[0, 2π)`.
    pub angle: f32,
    /// Full width and height.
    pub size: Vec2,
    /// Texture path; identical for every body.
    pub texture: String,
    pub material: BodyMaterial,
}

/// The three static bodies that keep the pile on screen.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    Ground,
    LeftWall,
    RightWall,
}

impl BoundaryKind {
    pub const ALL: [BoundaryKind; 3] = [
        BoundaryKind::Ground,
        BoundaryKind::LeftWall,
        BoundaryKind::RightWall,
    ];
}

/// Static rectangle: centre in page space plus full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRect {
    pub center: Vec2,
    pub size: Vec2,
}

/// Capabilities the orchestration needs from the physics engine.
pub trait PhysicsWorld {
    /// Insert a dynamic body. It stays in the world until shutdown.
    fn add_body(&mut self, body: BodySpec);

    /// Insert a static boundary.
    fn add_boundary(&mut self, kind: BoundaryKind, rect: BoundaryRect);

    /// Move an existing boundary without changing its size.
    fn set_boundary_position(&mut self, kind: BoundaryKind, center: Vec2);

    /// Start or stop stepping the simulation.
    fn set_running(&mut self, running: bool);
}

/// Headless world that just remembers what was inserted.
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    pub bodies: Vec<BodySpec>,
    pub boundaries: Vec<(BoundaryKind, BoundaryRect)>,
    pub running: bool,
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            boundaries: Vec::new(),
            running: true,
        }
    }
}

impl MemoryWorld {
    pub fn boundary(&self, kind: BoundaryKind) -> Option<&BoundaryRect> {
        self.boundaries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rect)| rect)
    }
}

impl PhysicsWorld for MemoryWorld {
    fn add_body(&mut self, body: BodySpec) {
        self.bodies.push(body);
    }

    fn add_boundary(&mut self, kind: BoundaryKind, rect: BoundaryRect) {
        self.boundaries.push((kind, rect));
    }

    fn set_boundary_position(&mut self, kind: BoundaryKind, center: Vec2) {
        if let Some((_, rect)) = self.boundaries.iter_mut().find(|(k, _)| *k == kind) {
            rect.center = center;
        }
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}
