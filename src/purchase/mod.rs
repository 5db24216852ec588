pub mod machine;
pub mod systems;

use bevy::prelude::*;

use crate::game_state::{AppState, ShowroomSet};
use crate::hud::Hud;
use machine::PurchaseState;
use systems::{
    clear_hud_on_capture, handle_purchase_keys, present_proximity, reset_on_release,
    tick_purchase_timers,
};

pub struct PurchasePlugin;

impl Plugin for PurchasePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PurchaseState>()
            .init_resource::<Hud>()
            .add_systems(OnEnter(AppState::Exploring), clear_hud_on_capture)
            .add_systems(OnExit(AppState::Exploring), reset_on_release)
            .add_systems(
                Update,
                (
                    present_proximity
                        .in_set(ShowroomSet::Proximity)
                        .after(crate::world::zones::update_proximity),
                    (tick_purchase_timers, handle_purchase_keys)
                        .chain()
                        .in_set(ShowroomSet::Reaction),
                )
                    .run_if(in_state(AppState::Exploring)),
            );
    }
}
