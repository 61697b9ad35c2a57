//! Rain plugin: the orchestration around Rapier.
//!
//! ## Startup (chained sets)
//!
//! | Set                    | Systems                                               |
//! |------------------------|-------------------------------------------------------|
//! | `RainStartup::Config`  | `load_rain_config` (native)                           |
//! | `RainStartup::Layout`  | container size from the window (`PagePlugin`)         |
//! | `RainStartup::World`   | `configure_engine`, `setup_boundaries`, `init_spawning` |
//!
//! ## Update (chained sets)
//!
//! | Set                 | Systems                                                  |
//! |---------------------|----------------------------------------------------------|
//! | `RainSet::Observe`  | `resize_system`, visibility sources, Add button          |
//! | `RainSet::Trigger`  | `visibility_trigger_system`                              |
//! | `RainSet::Spawn`    | `spawn_request_system`                                   |
//!
//! `RainPlugin` needs no window and runs under `MinimalPlugins`; the window,
//! camera, input and UI live in [`crate::page::PagePlugin`].

use crate::boundary::setup_boundaries;
use crate::config::RainConfig;
use crate::engine::{configure_engine, BodyTexture, SimulationRunning};
use crate::layout::PageLayout;
use crate::resize::resize_system;
use crate::spawn::{init_spawning, spawn_request_system, SpawnController, SpawnRequest, SpawnRng};
use crate::visibility::{
    visibility_trigger_system, ContainerVisibility, VisibilityDetached, VisibilityTrigger,
};
use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RainStartup {
    Config,
    Layout,
    World,
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RainSet {
    Observe,
    Trigger,
    Spawn,
}

pub struct RainPlugin {
    /// Read `assets/rain.toml` at startup (native only). Off for tests that pin
    /// their config.
    pub load_config_file: bool,
}

impl Default for RainPlugin {
    fn default() -> Self {
        Self {
            load_config_file: true,
        }
    }
}

impl Plugin for RainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainConfig>()
            .init_resource::<PageLayout>()
            .init_resource::<VisibilityTrigger>()
            .init_resource::<SpawnController>()
            .init_resource::<SpawnRng>()
            .init_resource::<BodyTexture>()
            .init_resource::<SimulationRunning>()
            .add_message::<SpawnRequest>()
            .add_message::<ContainerVisibility>()
            .add_message::<VisibilityDetached>()
            .configure_sets(
                Startup,
                (
                    RainStartup::Config,
                    RainStartup::Layout,
                    RainStartup::World,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (RainSet::Observe, RainSet::Trigger, RainSet::Spawn).chain(),
            )
            .add_systems(
                Startup,
                (configure_engine, setup_boundaries, init_spawning).in_set(RainStartup::World),
            )
            .add_systems(
                Update,
                (
                    resize_system.in_set(RainSet::Observe),
                    visibility_trigger_system.in_set(RainSet::Trigger),
                    spawn_request_system.in_set(RainSet::Spawn),
                ),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            if self.load_config_file {
                app.add_systems(
                    Startup,
                    crate::config::load_rain_config.in_set(RainStartup::Config),
                );
            }
        }
    }
}
