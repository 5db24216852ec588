pub mod components;
pub mod presenter;
pub mod styles;
pub mod systems;

use bevy::prelude::*;

pub use presenter::{
    billing_total_text, format_price, Hud, HudPanel, NO_CAR_SELECTED_TEXT, ZERO_TOTAL_TEXT,
};

use crate::game_state::{AppState, ShowroomSet};
use systems::{hide_blocker, setup_hud, show_blocker, sync_hud};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Hud>()
            .add_systems(Startup, setup_hud)
            .add_systems(OnEnter(AppState::Paused), show_blocker)
            .add_systems(OnEnter(AppState::Exploring), hide_blocker)
            .add_systems(Update, sync_hud.in_set(ShowroomSet::Present));
    }
}
