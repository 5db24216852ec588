use bevy::prelude::*;

pub const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
pub const BLOCKER_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);
pub const CONFIRM_BACKGROUND: Color = Color::srgba(0.1, 0.45, 0.15, 0.85);
pub const DECLINE_BACKGROUND: Color = Color::srgba(0.5, 0.1, 0.1, 0.85);

pub const BODY_TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const ACCENT_TEXT_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);
pub const TITLE_TEXT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

/// Bottom-center box holding one prompt. Hidden until the HUD shows it.
pub fn panel_style() -> Node {
    Node {
        position_type: PositionType::Absolute,
        bottom: Val::Px(60.0),
        left: Val::Percent(30.0),
        width: Val::Percent(40.0),
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        row_gap: Val::Px(6.0),
        padding: UiRect::axes(Val::Px(20.0), Val::Px(12.0)),
        display: Display::None,
        ..default()
    }
}

pub fn body_text_style() -> TextFont {
    TextFont {
        font_size: 20.0,
        ..default()
    }
}

pub fn heading_text_style() -> TextFont {
    TextFont {
        font_size: 28.0,
        ..default()
    }
}

pub fn title_text_style() -> TextFont {
    TextFont {
        font_size: 56.0,
        ..default()
    }
}
