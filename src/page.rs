//! Page shell: everything that needs a real window.
//!
//! ## Systems (registered by `PagePlugin`)
//!
//! | System                     | Schedule  | Purpose                                   |
//! |----------------------------|-----------|-------------------------------------------|
//! | `init_page_layout`         | `Startup` | Read the container size from the window   |
//! | `setup_camera`             | `Startup` | Camera anchored on the container          |
//! | `load_body_texture`        | `Startup` | Shared body texture                       |
//! | `setup_add_button`         | `Startup` | On-screen "Add" button (native)           |
//! | `add_button_system`        | `Update`  | Button press → `SpawnRequest::Single`     |
//! | `window_visibility_system` | `Update`  | Native visibility source                  |
//! | `begin_or_end_drag`        | `Update`  | Grab / release bodies                     |
//! | `apply_drag`               | `Update`  | Pull grabbed body to the pointer          |
//! | `toggle_pause_system`      | `Update`  | Space starts / stops stepping             |
//!
//! On wasm32 the page bridge replaces the native visibility source, and the
//! page's own `#add-button` replaces the in-canvas one.

use crate::drag::{apply_drag, begin_or_end_drag, ActiveDrag};
use crate::engine::toggle_pause_system;
use crate::error::RainError;
use crate::graphics::{load_body_texture, setup_camera};
use crate::layout::PageLayout;
use crate::simulation::{RainSet, RainStartup};
#[cfg(not(target_arch = "wasm32"))]
use crate::spawn::SpawnRequest;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Tags the "Add" button.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Component)]
pub struct AddBodyButton;

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveDrag>()
            .add_systems(Startup, init_page_layout.in_set(RainStartup::Layout))
            .add_systems(
                Startup,
                (setup_camera, load_body_texture).in_set(RainStartup::World),
            )
            .add_systems(
                Update,
                ((begin_or_end_drag, apply_drag).chain(), toggle_pause_system),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(Startup, setup_add_button.in_set(RainStartup::World))
                .add_systems(
                    Update,
                    (
                        add_button_system,
                        crate::visibility::window_visibility_system,
                    )
                        .in_set(RainSet::Observe),
                );
        }

        #[cfg(target_arch = "wasm32")]
        {
            app.init_resource::<crate::web::PageSignals>()
                .add_systems(
                    Startup,
                    crate::web::attach_web_bridge.in_set(RainStartup::World),
                )
                .add_systems(
                    Update,
                    (
                        crate::web::drain_page_signals
                            .in_set(RainSet::Observe)
                            .after(crate::resize::resize_system),
                        crate::web::detach_web_bridge.after(RainSet::Trigger),
                    ),
                );
        }
    }
}

// ── Colour helpers ────────────────────────────────────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
fn add_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
#[cfg(not(target_arch = "wasm32"))]
fn add_bg_hover() -> Color {
    Color::srgb(0.12, 0.46, 0.20)
}
#[cfg(not(target_arch = "wasm32"))]
fn add_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
#[cfg(not(target_arch = "wasm32"))]
fn add_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// The primary window is the container. Without one there is nothing to
/// simulate into, so startup fails.
pub fn init_page_layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut layout: ResMut<PageLayout>,
) -> Result {
    let window = windows.single().map_err(|_| RainError::MissingContainer {
        context: "init_page_layout",
    })?;
    *layout = PageLayout::uniform(window.width(), window.height());
    info!(
        "[SETUP] Container {}x{}",
        layout.container.x, layout.container.y
    );
    Ok(())
}

/// Small button pinned to the top-left corner of the container.
#[cfg(not(target_arch = "wasm32"))]
fn setup_add_button(mut commands: Commands) {
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                top: Val::Px(16.0),
                padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(add_bg()),
            BorderColor::all(add_border()),
            AddBodyButton,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new("ADD"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(add_text()),
            ));
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// One press, one body.
#[cfg(not(target_arch = "wasm32"))]
fn add_button_system(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<AddBodyButton>),
    >,
    mut requests: MessageWriter<SpawnRequest>,
) {
    for (interaction, mut bg) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                requests.write(SpawnRequest::Single);
            }
            Interaction::Hovered => bg.0 = add_bg_hover(),
            Interaction::None => bg.0 = add_bg(),
        }
    }
}
