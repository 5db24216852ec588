mod camera;
mod catalog;
mod game_state;
mod hud;
mod player;
mod purchase;
mod world;

#[cfg(test)]
mod scenarios;

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::PresentMode,
};

use camera::CameraPlugin;
use game_state::FrameOrderPlugin;
use hud::HudPlugin;
use player::PlayerPlugin;
use purchase::PurchasePlugin;
use world::WorldPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Virtual Showroom".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ))
        .add_plugins(FrameOrderPlugin)
        .add_plugins((WorldPlugin, PlayerPlugin, CameraPlugin, PurchasePlugin, HudPlugin))
        .run();
}
