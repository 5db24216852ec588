use bevy::prelude::*;

use super::presenter::HudPanel;

/// Root node of one overlay panel.
#[derive(Component)]
pub struct PanelRoot(pub HudPanel);

/// Text line filled from a [`super::Hud`] field.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudText {
    CarName,
    CarPrice,
    BillingTotal,
}

/// Marker for the "click to explore" overlay shown while paused.
#[derive(Component)]
pub struct BlockerRoot;
