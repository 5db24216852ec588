use bevy::prelude::*;

pub const ZERO_TOTAL_TEXT: &str = "Total: $0";
pub const NO_CAR_SELECTED_TEXT: &str = "No car selected! Go pick one!";

/// Overlay panels. At most one is on screen at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudPanel {
    PurchasePrompt,
    BillingPrompt,
    Confirmation,
    Declined,
}

/// What the overlay should show. Mirrored into UI nodes once per frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Hud {
    pub panel: Option<HudPanel>,
    pub car_name: String,
    pub car_price: String,
    pub billing_total: String,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            panel: None,
            car_name: String::new(),
            car_price: String::new(),
            billing_total: ZERO_TOTAL_TEXT.to_string(),
        }
    }
}

impl Hud {
    /// Shows `panel`, hiding whichever one was up.
    pub fn show(&mut self, panel: HudPanel) {
        self.panel = Some(panel);
    }

    pub fn hide_all(&mut self) {
        self.panel = None;
    }

    /// Hides `panel` if it is the one showing.
    pub fn hide(&mut self, panel: HudPanel) {
        if self.panel == Some(panel) {
            self.panel = None;
        }
    }

    pub fn is_showing(&self, panel: HudPanel) -> bool {
        self.panel == Some(panel)
    }
}

/// `75000` -> `"$75,000"`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

pub fn billing_total_text(price: u64) -> String {
    format!("Total: {}", format_price(price))
}
