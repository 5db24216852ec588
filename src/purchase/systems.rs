use bevy::prelude::*;

use super::machine::{PurchaseOutcome, PurchaseState, ScheduledKind};
use crate::hud::Hud;
use crate::world::{Platform, ProximityReport};

pub const SELECT_KEY: KeyCode = KeyCode::KeyI;
pub const CONFIRM_KEY: KeyCode = KeyCode::KeyE;
pub const DECLINE_KEY: KeyCode = KeyCode::KeyQ;

pub fn present_proximity(
    report: Res<ProximityReport>,
    platforms: Query<&Platform>,
    mut purchase: ResMut<PurchaseState>,
    mut hud: ResMut<Hud>,
) {
    let car = report
        .prompt_car(purchase.selected_car)
        .and_then(|entity| platforms.get(entity).ok().map(|platform| (entity, platform)));
    let near_billing = report.billing_active;

    purchase.present_proximity(car, near_billing, &mut hud);
}

pub fn tick_purchase_timers(
    time: Res<Time>,
    mut purchase: ResMut<PurchaseState>,
    mut hud: ResMut<Hud>,
) {
    match purchase.tick(time.delta(), &mut hud) {
        Some(ScheduledKind::ConfirmationTimeout) => info!("Purchase complete, ready for the next customer"),
        Some(ScheduledKind::DeclineTimeout) => debug!("Declined purchase cleared"),
        Some(ScheduledKind::NoticeTimeout) | None => {}
    }
}

pub fn handle_purchase_keys(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    report: Res<ProximityReport>,
    platforms: Query<&Platform>,
    mut purchase: ResMut<PurchaseState>,
    mut hud: ResMut<Hud>,
) {
    if keyboard_input.just_pressed(SELECT_KEY) {
        let car = report
            .prompt_car(purchase.selected_car)
            .and_then(|entity| platforms.get(entity).ok().map(|platform| (entity, platform)));

        if purchase.select(car, &mut hud) == PurchaseOutcome::Selected {
            info!(
                "Car selected for purchase: {} - ${}",
                purchase.car_name, purchase.car_price
            );
        }
    }

    if keyboard_input.just_pressed(CONFIRM_KEY) {
        match purchase.confirm(&mut hud) {
            PurchaseOutcome::Confirmed => info!("Purchase confirmed: {}", purchase.car_name),
            PurchaseOutcome::NothingSelected => debug!("Confirm pressed with no car selected"),
            _ => {}
        }
    }

    if keyboard_input.just_pressed(DECLINE_KEY)
        && purchase.decline(&mut hud) == PurchaseOutcome::Declined
    {
        info!("Purchase declined: {}", purchase.car_name);
    }
}

/// Releasing the pointer drops any purchase in progress.
pub fn reset_on_release(mut purchase: ResMut<PurchaseState>, mut hud: ResMut<Hud>) {
    purchase.force_reset(&mut hud);
}

pub fn clear_hud_on_capture(mut hud: ResMut<Hud>) {
    hud.hide_all();
}
