use bevy::prelude::*;

use super::components::{BlockerRoot, HudText, PanelRoot};
use super::presenter::{Hud, HudPanel};
use super::styles::*;

const INSTRUCTIONS: &str = "Click to explore\n\
    WASD: move    Shift: run    Mouse: look\n\
    I: select car    E: confirm at counter    Q: decline\n\
    K: enter / exit car    Esc: release pointer";

/// Spawns a panel with its lines, hidden.
fn spawn_panel(
    commands: &mut Commands,
    panel: HudPanel,
    background: Color,
    lines: Vec<(String, Option<HudText>, TextFont, Color)>,
) {
    commands
        .spawn((PanelRoot(panel), panel_style(), BackgroundColor(background)))
        .with_children(|parent| {
            for (text, field, font, color) in lines {
                let mut line = parent.spawn((Text::new(text), font, TextColor(color)));
                if let Some(field) = field {
                    line.insert(field);
                }
            }
        });
}

pub fn setup_hud(mut commands: Commands) {
    spawn_panel(
        &mut commands,
        HudPanel::PurchasePrompt,
        PANEL_BACKGROUND,
        vec![
            (String::new(), Some(HudText::CarName), heading_text_style(), TITLE_TEXT_COLOR),
            (String::new(), Some(HudText::CarPrice), body_text_style(), ACCENT_TEXT_COLOR),
            ("Press I to buy this car".into(), None, body_text_style(), BODY_TEXT_COLOR),
        ],
    );

    spawn_panel(
        &mut commands,
        HudPanel::BillingPrompt,
        PANEL_BACKGROUND,
        vec![
            ("Billing Counter".into(), None, heading_text_style(), TITLE_TEXT_COLOR),
            (String::new(), Some(HudText::BillingTotal), body_text_style(), ACCENT_TEXT_COLOR),
            ("E: confirm    Q: decline".into(), None, body_text_style(), BODY_TEXT_COLOR),
        ],
    );

    spawn_panel(
        &mut commands,
        HudPanel::Confirmation,
        CONFIRM_BACKGROUND,
        vec![
            ("Purchase Confirmed!".into(), None, heading_text_style(), TITLE_TEXT_COLOR),
            ("Enjoy your new car.".into(), None, body_text_style(), BODY_TEXT_COLOR),
        ],
    );

    spawn_panel(
        &mut commands,
        HudPanel::Declined,
        DECLINE_BACKGROUND,
        vec![("Purchase Declined.".into(), None, heading_text_style(), TITLE_TEXT_COLOR)],
    );

    // Blocker overlay, visible until the pointer is captured
    commands
        .spawn((
            BlockerRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(BLOCKER_BACKGROUND),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Virtual Showroom"),
                title_text_style(),
                TextColor(TITLE_TEXT_COLOR),
            ));
            parent.spawn((
                Text::new(INSTRUCTIONS),
                body_text_style(),
                TextColor(BODY_TEXT_COLOR),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
}

/// Mirrors the [`Hud`] resource into the overlay nodes.
pub fn sync_hud(
    hud: Res<Hud>,
    mut panels: Query<(&PanelRoot, &mut Node)>,
    mut texts: Query<(&HudText, &mut Text)>,
) {
    if !hud.is_changed() {
        return;
    }

    for (root, mut node) in panels.iter_mut() {
        let display = if hud.is_showing(root.0) {
            Display::Flex
        } else {
            Display::None
        };
        if node.display != display {
            node.display = display;
        }
    }

    for (field, mut text) in texts.iter_mut() {
        let value = match field {
            HudText::CarName => &hud.car_name,
            HudText::CarPrice => &hud.car_price,
            HudText::BillingTotal => &hud.billing_total,
        };
        if text.0 != *value {
            text.0.clone_from(value);
        }
    }
}

pub fn show_blocker(mut query: Query<&mut Node, With<BlockerRoot>>) {
    for mut node in query.iter_mut() {
        node.display = Display::Flex;
    }
}

pub fn hide_blocker(mut query: Query<&mut Node, With<BlockerRoot>>) {
    for mut node in query.iter_mut() {
        node.display = Display::None;
    }
}
