use crate::config::RainConfig;
use crate::engine::BodyTexture;
use crate::layout::PageLayout;
use bevy::prelude::*;

/// Load the body texture named in the config.
///
/// Must run after the config is loaded and before the first spawn. A missing
/// file is reported by the asset server; bodies still simulate, undrawn.
pub fn load_body_texture(
    mut texture: ResMut<BodyTexture>,
    asset_server: Res<AssetServer>,
    config: Res<RainConfig>,
) {
    texture.0 = asset_server.load(config.texture_path.clone());
    info!("[SETUP] Body texture {} requested", config.texture_path);
}

/// Camera centred on the container, so page (0, 0) is the world origin.
pub fn setup_camera(mut commands: Commands, layout: Res<PageLayout>) {
    let center = layout.camera_center();
    commands.spawn((Camera2d, Transform::from_xyz(center.x, center.y, 0.0)));
    info!("[SETUP] Camera spawned");
}
