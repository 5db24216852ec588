use bevy::prelude::*;

use super::components::DoorPanel;
use super::zones::ProximityReport;
use super::DOORWAY_WIDTH;

/// How far each panel slides away from the center when open.
pub const DOOR_OPEN_OFFSET: f32 = 2.5;
pub const DOOR_SPEED: f32 = 1.0;

/// Closed panel positions along Z, each covering half the doorway.
pub const LEFT_CLOSED_Z: f32 = -DOORWAY_WIDTH / 4.0;
pub const RIGHT_CLOSED_Z: f32 = DOORWAY_WIDTH / 4.0;

/// Sliding door panel offsets, eased toward open or closed.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DoorState {
    pub left_z: f32,
    pub right_z: f32,
    pub target_open: bool,
}

impl Default for DoorState {
    fn default() -> Self {
        Self {
            left_z: LEFT_CLOSED_Z,
            right_z: RIGHT_CLOSED_Z,
            target_open: false,
        }
    }
}

impl DoorState {
    /// Target (left, right) Z for the given state.
    pub fn targets(open: bool) -> (f32, f32) {
        if open {
            (LEFT_CLOSED_Z - DOOR_OPEN_OFFSET, RIGHT_CLOSED_Z + DOOR_OPEN_OFFSET)
        } else {
            (LEFT_CLOSED_Z, RIGHT_CLOSED_Z)
        }
    }

    /// Exponential smoothing toward the target. Never overshoots.
    pub fn tick(&mut self, door_active: bool, delta: f32) {
        self.target_open = door_active;
        let t = if delta.is_finite() {
            (DOOR_SPEED * delta).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (left, right) = Self::targets(door_active);
        self.left_z += (left - self.left_z) * t;
        self.right_z += (right - self.right_z) * t;
    }
}

pub fn animate_door(
    time: Res<Time>,
    report: Res<ProximityReport>,
    mut door: ResMut<DoorState>,
    mut panels: Query<(&DoorPanel, &mut Transform)>,
) {
    door.tick(report.door_active, time.delta_secs());

    for (panel, mut transform) in panels.iter_mut() {
        transform.translation.z = match panel {
            DoorPanel::Left => door.left_z,
            DoorPanel::Right => door.right_z,
        };
    }
}
