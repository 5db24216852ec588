use bevy::prelude::*;

/// Pointer-capture state gating all per-frame interaction.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Cursor released, blocker overlay visible.
    #[default]
    Paused,
    /// Cursor captured, player walking the showroom.
    Exploring,
}

/// Ordered stages of a single showroom frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowroomSet {
    Input,
    Movement,
    Collision,
    Proximity,
    Reaction,
    Animation,
    Camera,
    Present,
}

/// Registers the app state and chains the frame stages in order.
pub struct FrameOrderPlugin;

impl Plugin for FrameOrderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>().configure_sets(
            Update,
            (
                ShowroomSet::Input,
                ShowroomSet::Movement,
                ShowroomSet::Collision,
                ShowroomSet::Proximity,
                ShowroomSet::Reaction,
                ShowroomSet::Animation,
                ShowroomSet::Camera,
                ShowroomSet::Present,
            )
                .chain(),
        );
    }
}
