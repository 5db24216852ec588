pub mod attachment;
pub mod systems;

use bevy::prelude::*;

pub use attachment::{CameraAttachment, SeatMemory};

use crate::game_state::{AppState, ShowroomSet};
use attachment::{apply_camera_attachment, handle_seat_key};
use systems::{
    center_cursor, grab_cursor, mouse_look, pause_on_release, release_cursor, resume_on_click,
};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Exploring), grab_cursor)
            .add_systems(OnEnter(AppState::Paused), release_cursor)
            .add_systems(Update, resume_on_click.run_if(in_state(AppState::Paused)))
            .add_systems(
                Update,
                (
                    (mouse_look, center_cursor, pause_on_release).in_set(ShowroomSet::Input),
                    handle_seat_key.in_set(ShowroomSet::Reaction),
                )
                    .run_if(in_state(AppState::Exploring)),
            )
            // Seated cameras ride the platform even while paused
            .add_systems(Update, apply_camera_attachment.in_set(ShowroomSet::Camera));
    }
}
