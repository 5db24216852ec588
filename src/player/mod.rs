pub mod collision;
pub mod components;
pub mod movement;

use bevy::prelude::*;

pub use components::{
    CameraController, MovementInput, Player, Velocity, EYE_HEIGHT, MOUSE_SENSITIVITY, PITCH_LIMIT,
};

use crate::game_state::{AppState, ShowroomSet};
use collision::resolve_collisions;
use movement::{move_player, read_movement_input};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                read_movement_input.in_set(ShowroomSet::Input),
                move_player.in_set(ShowroomSet::Movement),
                resolve_collisions.in_set(ShowroomSet::Collision),
            )
                .run_if(in_state(AppState::Exploring)),
        );
    }
}
