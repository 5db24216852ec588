use bevy::prelude::*;

use crate::catalog::{CarListing, SeatPlacement};

// Platform constants
pub const PLATFORM_RADIUS: f32 = 4.5;
pub const PLATFORM_HEIGHT: f32 = 0.2;
/// Extra clearance so the camera never grazes the platform edge.
pub const COLLISION_MARGIN: f32 = 0.01;
/// Radians per second.
pub const DEFAULT_PLATFORM_SPEED: f32 = 0.05;
pub const INTERACT_SPEED_MULTIPLIER: f32 = 3.0;

/// Rotating pedestal carrying one car and its purchase details.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Platform {
    pub car_name: String,
    pub car_price: u64,
    pub collision_radius: f32,
    /// Current spin, written only by the proximity pass.
    pub rotation_speed: f32,
    pub interior: Option<SeatPlacement>,
}

impl Platform {
    pub fn from_listing(listing: &CarListing) -> Self {
        Self {
            car_name: listing.name.clone(),
            car_price: listing.price,
            collision_radius: PLATFORM_RADIUS + COLLISION_MARGIN,
            rotation_speed: DEFAULT_PLATFORM_SPEED,
            interior: listing.interior,
        }
    }
}

/// One of the two sliding glass panels in the annex doorway.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorPanel {
    Left,
    Right,
}
