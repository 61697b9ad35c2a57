//! Page geometry: viewport width, container size, and the mapping between
//! page space and Bevy world space.
//!
//! Page space has its origin at the container's top-left corner with y growing
//! downward. World space is Bevy's (y up). The camera is centred on the
//! container, so page `(x, y)` is world `(x, -y)` regardless of container size
//! and bodies stay put when the container resizes.

use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use bevy::prelude::*;

/// Current page geometry in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Width used for breakpoint selection.
    pub viewport_width: f32,
    /// Size of the area bodies fall into.
    pub container: Vec2,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::uniform(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
    }
}

impl PageLayout {
    /// Layout where the container fills the whole viewport.
    pub fn uniform(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            container: Vec2::new(width, height),
        }
    }

    /// World-space position of the container centre; the camera sits here.
    pub fn camera_center(&self) -> Vec2 {
        page_to_world(self.container * 0.5)
    }
}

#[inline]
pub fn page_to_world(p: Vec2) -> Vec2 {
    Vec2::new(p.x, -p.y)
}

/// Page angles turn clockwise on screen; world angles turn counter-clockwise.
#[inline]
pub fn page_angle_to_world(angle: f32) -> f32 {
    -angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_top_left_is_world_origin() {
        assert_eq!(page_to_world(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(page_to_world(Vec2::new(10.0, 20.0)), Vec2::new(10.0, -20.0));
    }

    #[test]
    fn camera_tracks_container_centre() {
        let layout = PageLayout::uniform(800.0, 600.0);
        assert_eq!(layout.camera_center(), Vec2::new(400.0, -300.0));
    }
}
