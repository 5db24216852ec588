use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Horizontal velocity in the camera's frame: x is right, y is forward.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Camera controller for first-person mouse look.
///
/// While seated in a car, yaw and pitch are relative to the car's platform.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraController {
    pub pitch: f32,
    /// Zero faces -Z, toward the back wall.
    pub yaw: f32,
}

/// Movement keys held this frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub running: bool,
}

// Player physics constants
pub const BASE_SPEED: f32 = 30.0;
pub const RUN_MULTIPLIER: f32 = 3.0;
pub const DAMPING_RATE: f32 = 10.0;
pub const EYE_HEIGHT: f32 = 1.8;

// Mouse look constants
pub const MOUSE_SENSITIVITY: f32 = 0.003;
pub const PITCH_LIMIT: f32 = 1.5; // ~86 degrees, just under 90
