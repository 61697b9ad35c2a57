//! Centralised defaults for the rain effect.
//!
//! Every runtime-tunable value lives here and is mirrored by a field of
//! [`crate::config::RainConfig`]. `RainConfig::default()` reads these, so
//! `assets/rain.toml` only needs the keys you want to change.

// ── Window ────────────────────────────────────────────────────────────────────

pub const WINDOW_TITLE: &str = "Logo Rain";

/// Initial window (container) size in logical pixels.
pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 680;

/// CSS selector of the canvas Bevy renders into on the web.
pub const CANVAS_SELECTOR: &str = "#rain-canvas";

/// CSS selector of the optional page button that adds one body per click.
pub const ADD_BUTTON_SELECTOR: &str = "#add-button";

// ── Scale breakpoints ─────────────────────────────────────────────────────────

/// Upper viewport widths (inclusive) of the first three scale bands.
pub const BREAKPOINT_MOBILE: f32 = 480.0;
pub const BREAKPOINT_TABLET: f32 = 1024.0;
pub const BREAKPOINT_LAPTOP: f32 = 1440.0;

pub const SCALE_MOBILE: f32 = 0.35;
pub const SCALE_TABLET: f32 = 0.40;
pub const SCALE_LAPTOP: f32 = 0.50;
pub const SCALE_DESKTOP: f32 = 0.65;

// ── Bodies ────────────────────────────────────────────────────────────────────

/// Texture shared by every body, relative to the asset root.
pub const TEXTURE_PATH: &str = "textures/logo.png";

/// Unscaled body size; matches the texture's pixel size.
pub const BODY_BASE_WIDTH: f32 = 250.0;
pub const BODY_BASE_HEIGHT: f32 = 178.0;

pub const BODY_FRICTION: f32 = 0.3;

/// Per-step air friction (fraction of velocity lost each 60 Hz step).
pub const BODY_AIR_FRICTION: f32 = 0.00001;

pub const BODY_RESTITUTION: f32 = 0.4;

/// Step rate that per-step constants (air friction, drag stiffness) are
/// expressed against. Rapier damping is per second:
/// `damping = air_friction * REFERENCE_STEP_RATE`.
pub const REFERENCE_STEP_RATE: f32 = 60.0;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Burst size before scaling: `floor(BURST_BASE_COUNT * scale)`.
pub const BURST_BASE_COUNT: u32 = 80;

/// Fraction of the container that must be visible before the burst fires.
pub const VISIBILITY_THRESHOLD: f32 = 0.10;

// ── Boundaries ────────────────────────────────────────────────────────────────

/// Thickness of the ground and both walls.
pub const BOUNDARY_THICKNESS: f32 = 60.0;

/// Ground width; wide enough to exceed any realistic container.
pub const GROUND_WIDTH: f32 = 27184.0;

/// Wall height as a multiple of the initial container height.
pub const WALL_HEIGHT_FACTOR: f32 = 5.0;

// ── Physics ───────────────────────────────────────────────────────────────────

/// Downward acceleration in pixels per second squared.
pub const GRAVITY: f32 = 1000.0;

// ── Pointer drag ──────────────────────────────────────────────────────────────

/// Fraction of the remaining grab-point error closed per 60 Hz step.
pub const DRAG_STIFFNESS: f32 = 0.2;

/// Draw depth of body sprites.
pub const BODY_Z: f32 = 0.05;

/// Rapier length unit; 100 px is one metre so bodies are metre-scale.
pub const PIXELS_PER_METER: f32 = 100.0;
