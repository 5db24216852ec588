pub mod components;
pub mod door;
pub mod platforms;
pub mod setup;
pub mod zones;

use bevy::prelude::*;

pub use components::Platform;
pub use door::DoorState;
pub use zones::{ProximityReport, ZoneRegistry};

use crate::catalog::{load_catalog, Catalog};
use crate::game_state::{AppState, ShowroomSet};
use door::animate_door;
use platforms::{apply_platform_speeds, spin_platforms};
use setup::setup_world;
use zones::update_proximity;

// Main hall dimensions
pub const SHOWROOM_WIDTH: f32 = 30.0;
pub const SHOWROOM_DEPTH: f32 = 40.0;
pub const SHOWROOM_HEIGHT: f32 = 8.0;

// Annex through the sliding door, east of the main hall
pub const ANNEX_WIDTH: f32 = 30.0;
pub const ANNEX_DEPTH: f32 = 20.0;
pub const ANNEX_OFFSET_X: f32 = SHOWROOM_WIDTH / 2.0 + ANNEX_WIDTH / 2.0;

// Doorway in the east wall of the main hall
pub const DOORWAY_X: f32 = SHOWROOM_WIDTH / 2.0;
pub const DOORWAY_WIDTH: f32 = 6.0;
pub const DOORWAY_HEIGHT: f32 = 4.0;
pub const DOORWAY_Y: f32 = SHOWROOM_HEIGHT / 2.0 - DOORWAY_HEIGHT / 2.0;

// Walkable rectangle spanning both rooms, kept half a unit off the walls
pub const WALK_MIN_X: f32 = -SHOWROOM_WIDTH / 2.0 + 0.5;
pub const WALK_MAX_X: f32 = SHOWROOM_WIDTH / 2.0 + ANNEX_WIDTH - 0.5;
pub const WALK_MIN_Z: f32 = -SHOWROOM_DEPTH / 2.0 + 0.5;
pub const WALK_MAX_Z: f32 = SHOWROOM_DEPTH / 2.0 - 0.5;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Catalog>() {
            app.insert_resource(load_catalog());
        }

        app.init_resource::<ZoneRegistry>()
            .init_resource::<ProximityReport>()
            .init_resource::<DoorState>()
            .add_systems(Startup, setup_world)
            .add_systems(
                Update,
                (update_proximity, apply_platform_speeds)
                    .chain()
                    .in_set(ShowroomSet::Proximity)
                    .run_if(in_state(AppState::Exploring)),
            )
            .add_systems(
                Update,
                animate_door
                    .in_set(ShowroomSet::Animation)
                    .run_if(in_state(AppState::Exploring)),
            )
            // Platforms keep turning while the cursor is released
            .add_systems(Update, spin_platforms.in_set(ShowroomSet::Animation));
    }
}
