use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;
use logo_rain::constants::{PIXELS_PER_METER, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use logo_rain::{PagePlugin, RainPlugin};

fn primary_window() -> Window {
    let window = Window {
        title: WINDOW_TITLE.into(),
        resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        resizable: true,
        ..Default::default()
    };

    // On a page the canvas fills its container, stays transparent, and leaves
    // wheel and touch scrolling to the page.
    #[cfg(target_arch = "wasm32")]
    let window = Window {
        canvas: Some(logo_rain::constants::CANVAS_SELECTOR.into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: false,
        transparent: true,
        ..window
    };

    window
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    let clear = Color::NONE;
    #[cfg(not(target_arch = "wasm32"))]
    let clear = Color::srgb(0.96, 0.95, 0.92);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window()),
            ..Default::default()
        }))
        .insert_resource(ClearColor(clear))
        // Pixels are the world unit; Rapier works in metres underneath.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            PIXELS_PER_METER,
        ))
        .add_plugins((RainPlugin::default(), PagePlugin))
        .run();
}
