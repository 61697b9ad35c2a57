//! Runtime configuration loaded from `assets/rain.toml`.
//!
//! [`RainConfig`] is a Bevy [`Resource`] that mirrors the constants in
//! [`crate::constants`]. At startup, [`load_rain_config`] reads
//! `assets/rain.toml` and overwrites the defaults with any values present in
//! the file. Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! texture_path = "textures/badge.png"
//! base_width = 120
//! base_height = 120
//! max_bodies = 400
//! ```
//!
//! A file that fails to parse or validate is reported and ignored; the effect
//! always starts.
//!
//! The file is read from disk, so it only applies to native builds. The wasm
//! build has no filesystem and runs on the compiled defaults.

use crate::constants::*;
use crate::error::{RainError, RainResult};
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/rain.toml";

/// Runtime-tunable rain configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    // ── Bodies ────────────────────────────────────────────────────────────────
    pub texture_path: String,
    pub base_width: f32,
    pub base_height: f32,
    pub friction: f32,
    pub air_friction: f32,
    pub restitution: f32,

    // ── Spawning ──────────────────────────────────────────────────────────────
    pub burst_base_count: u32,
    pub visibility_threshold: f32,
    /// Upper bound on bodies in the world. `None` keeps growth unbounded.
    pub max_bodies: Option<usize>,
    /// Fixed seed for reproducible layouts; entropy when unset.
    pub seed: Option<u64>,

    // ── Boundaries ────────────────────────────────────────────────────────────
    pub boundary_thickness: f32,
    pub ground_width: f32,
    pub wall_height_factor: f32,

    // ── Physics ───────────────────────────────────────────────────────────────
    pub gravity: f32,
    pub drag_stiffness: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            texture_path: TEXTURE_PATH.to_string(),
            base_width: BODY_BASE_WIDTH,
            base_height: BODY_BASE_HEIGHT,
            friction: BODY_FRICTION,
            air_friction: BODY_AIR_FRICTION,
            restitution: BODY_RESTITUTION,
            burst_base_count: BURST_BASE_COUNT,
            visibility_threshold: VISIBILITY_THRESHOLD,
            max_bodies: None,
            seed: None,
            boundary_thickness: BOUNDARY_THICKNESS,
            ground_width: GROUND_WIDTH,
            wall_height_factor: WALL_HEIGHT_FACTOR,
            gravity: GRAVITY,
            drag_stiffness: DRAG_STIFFNESS,
        }
    }
}

impl RainConfig {
    /// Parse and validate a TOML document. `path` is only used in error text.
    pub fn from_toml_str(contents: &str, path: &str) -> RainResult<Self> {
        let config: RainConfig = toml::from_str(contents).map_err(|e| RainError::ConfigParse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the effect misbehave rather than degrade.
    pub fn validate(&self) -> RainResult<()> {
        positive("base_width", self.base_width)?;
        positive("base_height", self.base_height)?;
        positive("boundary_thickness", self.boundary_thickness)?;
        positive("ground_width", self.ground_width)?;
        positive("wall_height_factor", self.wall_height_factor)?;
        in_range("friction", self.friction, 0.0, f32::MAX, "[0.0, ∞)")?;
        in_range("air_friction", self.air_friction, 0.0, 1.0, "[0.0, 1.0]")?;
        in_range("restitution", self.restitution, 0.0, 1.0, "[0.0, 1.0]")?;
        in_range(
            "visibility_threshold",
            self.visibility_threshold,
            0.0,
            1.0,
            "[0.0, 1.0]",
        )?;
        if self.drag_stiffness <= 0.0 || self.drag_stiffness > 1.0 {
            return Err(RainError::InvalidConfig {
                name: "drag_stiffness",
                value: self.drag_stiffness,
                expected: "(0.0, 1.0]",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> RainResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(RainError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

fn in_range(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
    expected: &'static str,
) -> RainResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RainError::InvalidConfig {
            name,
            value,
            expected,
        })
    }
}

/// Startup system: overwrite the `RainConfig` resource from `assets/rain.toml`.
///
/// A missing file keeps the defaults already inserted. Parse and validation
/// errors are logged and also keep the defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_rain_config(mut config: ResMut<RainConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match RainConfig::from_toml_str(&contents, CONFIG_PATH) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded rain config from {CONFIG_PATH}");
            }
            Err(e) => warn!("{e}; using defaults"),
        },
        Err(_) => info!("No {CONFIG_PATH} found; using compiled defaults"),
    }
}
