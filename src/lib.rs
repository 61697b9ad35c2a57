//! Logo Rain library
//!
//! Sprite bodies rain into a page-sized container, collide and pile up under
//! gravity. A burst fires the first time the container scrolls into view, an
//! Add button drops one more, and bodies can be dragged with the pointer.
//! Rapier does the physics; this crate decides what goes into its world.

pub mod body;
pub mod boundary;
pub mod config;
pub mod constants;
pub mod drag;
pub mod engine;
pub mod error;
pub mod graphics;
pub mod layout;
pub mod page;
pub mod resize;
pub mod scale;
pub mod simulation;
pub mod spawn;
pub mod visibility;
#[cfg(target_arch = "wasm32")]
pub mod web;
pub mod world;

pub use page::PagePlugin;
pub use simulation::RainPlugin;
