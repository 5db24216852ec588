use std::time::Duration;

use bevy::prelude::*;

use crate::hud::{billing_total_text, format_price, Hud, HudPanel, NO_CAR_SELECTED_TEXT, ZERO_TOTAL_TEXT};
use crate::world::Platform;

/// How long the confirmation stays up before the purchase resets.
pub const CONFIRMATION_DISPLAY_SECS: f32 = 4.0;
/// How long the declined and no-car messages stay up.
pub const NOTICE_DISPLAY_SECS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchasePhase {
    Idle,
    Selected,
    Confirmed,
    Declined,
}

/// Deferred step that fires when its timer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledKind {
    /// Hide the confirmation and reset.
    ConfirmationTimeout,
    /// Hide the declined message and reset.
    DeclineTimeout,
    /// Hide the "no car selected" message.
    NoticeTimeout,
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    kind: ScheduledKind,
    timer: Timer,
}

/// Result of a key press against the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Selected,
    Confirmed,
    Declined,
    NothingSelected,
    Ignored,
}

/// One in-flight purchase. Lost when the pointer is released.
#[derive(Resource, Debug, Default)]
pub struct PurchaseState {
    pub selected_car: Option<Entity>,
    pub car_name: String,
    pub car_price: u64,
    pub is_selected: bool,
    pub is_near_billing: bool,
    pub has_confirmed: bool,
    /// Single pending timer slot. A new schedule replaces it, a reset cancels it.
    pending: Option<ScheduledEvent>,
}

impl PurchaseState {
    pub fn phase(&self) -> PurchasePhase {
        match self.pending_kind() {
            Some(ScheduledKind::DeclineTimeout) => PurchasePhase::Declined,
            _ if self.has_confirmed => PurchasePhase::Confirmed,
            _ if self.is_selected => PurchasePhase::Selected,
            _ => PurchasePhase::Idle,
        }
    }

    pub fn pending_kind(&self) -> Option<ScheduledKind> {
        self.pending.as_ref().map(|event| event.kind)
    }

    fn schedule(&mut self, kind: ScheduledKind, secs: f32) {
        self.pending = Some(ScheduledEvent {
            kind,
            timer: Timer::from_seconds(secs, TimerMode::Once),
        });
    }

    /// Updates prompts from this frame's zones. Leaves timed messages alone.
    pub fn present_proximity(
        &mut self,
        car: Option<(Entity, &Platform)>,
        near_billing: bool,
        hud: &mut Hud,
    ) {
        self.is_near_billing = near_billing;

        if self.pending.is_some() {
            return;
        }

        if !self.is_selected {
            match car {
                Some((_, platform)) => {
                    hud.car_name = platform.car_name.clone();
                    hud.car_price = format_price(platform.car_price);
                    hud.show(HudPanel::PurchasePrompt);
                }
                None => hud.hide(HudPanel::PurchasePrompt),
            }
        }

        if near_billing {
            hud.billing_total = billing_total_text(self.car_price);
            hud.show(HudPanel::BillingPrompt);
        } else {
            hud.hide(HudPanel::BillingPrompt);
        }
    }

    /// Picks the car in front of the player.
    pub fn select(&mut self, car: Option<(Entity, &Platform)>, hud: &mut Hud) -> PurchaseOutcome {
        let Some((entity, platform)) = car else {
            return PurchaseOutcome::Ignored;
        };
        if self.is_selected || self.is_near_billing {
            return PurchaseOutcome::Ignored;
        }

        // Only the no-car notice can be pending before a selection
        self.pending = None;
        self.selected_car = Some(entity);
        self.car_name = platform.car_name.clone();
        self.car_price = platform.car_price;
        self.is_selected = true;
        hud.hide_all();
        PurchaseOutcome::Selected
    }

    pub fn confirm(&mut self, hud: &mut Hud) -> PurchaseOutcome {
        if !self.is_near_billing || self.phase() == PurchasePhase::Declined {
            return PurchaseOutcome::Ignored;
        }

        if self.is_selected && !self.has_confirmed {
            self.has_confirmed = true;
            hud.show(HudPanel::Confirmation);
            self.schedule(ScheduledKind::ConfirmationTimeout, CONFIRMATION_DISPLAY_SECS);
            PurchaseOutcome::Confirmed
        } else if !self.is_selected {
            hud.billing_total = NO_CAR_SELECTED_TEXT.to_string();
            hud.show(HudPanel::BillingPrompt);
            self.schedule(ScheduledKind::NoticeTimeout, NOTICE_DISPLAY_SECS);
            PurchaseOutcome::NothingSelected
        } else {
            PurchaseOutcome::Ignored
        }
    }

    pub fn decline(&mut self, hud: &mut Hud) -> PurchaseOutcome {
        if !self.is_near_billing || !self.is_selected || self.has_confirmed {
            return PurchaseOutcome::Ignored;
        }
        if self.phase() == PurchasePhase::Declined {
            return PurchaseOutcome::Ignored;
        }

        hud.show(HudPanel::Declined);
        self.schedule(ScheduledKind::DeclineTimeout, NOTICE_DISPLAY_SECS);
        PurchaseOutcome::Declined
    }

    /// Clears the purchase and cancels any pending timer. Safe to call repeatedly.
    pub fn reset(&mut self, hud: &mut Hud) {
        self.selected_car = None;
        self.car_name.clear();
        self.car_price = 0;
        self.is_selected = false;
        self.has_confirmed = false;
        self.pending = None;
        hud.billing_total = ZERO_TOTAL_TEXT.to_string();
    }

    /// Reset that also clears the overlay, used when the pointer is released.
    pub fn force_reset(&mut self, hud: &mut Hud) {
        hud.hide_all();
        self.reset(hud);
    }

    /// Advances the pending timer and applies it if it ran out.
    pub fn tick(&mut self, delta: Duration, hud: &mut Hud) -> Option<ScheduledKind> {
        let event = self.pending.as_mut()?;
        event.timer.tick(delta);
        if !event.timer.finished() {
            return None;
        }

        let kind = event.kind;
        self.pending = None;
        hud.hide_all();
        match kind {
            ScheduledKind::ConfirmationTimeout | ScheduledKind::DeclineTimeout => self.reset(hud),
            ScheduledKind::NoticeTimeout => {}
        }
        Some(kind)
    }
}
