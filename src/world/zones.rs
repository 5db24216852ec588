use bevy::prelude::*;

use crate::player::{Player, EYE_HEIGHT};

use super::{DOORWAY_HEIGHT, DOORWAY_WIDTH, DOORWAY_X, DOORWAY_Y};

/// Generous box around each car platform.
pub const CAR_ZONE_SIZE: Vec3 = Vec3::new(10.0, 5.0, 10.0);
pub const BILLING_ZONE_SIZE: Vec3 = Vec3::new(5.0, 4.0, 5.0);
/// Thin slab across the doorway, a little wider than the opening.
pub const DOOR_ZONE_SIZE: Vec3 = Vec3::new(1.0, DOORWAY_HEIGHT, DOORWAY_WIDTH + 2.0);

/// Axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            half_extents: size / 2.0,
        }
    }

    /// Inclusive on every face.
    pub fn contains(&self, point: Vec3) -> bool {
        let min = self.center - self.half_extents;
        let max = self.center + self.half_extents;
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    CarPurchase,
    BillingCounter,
    DoorTrigger,
}

/// What a zone points back at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZonePayload {
    None,
    Platform(Entity),
}

/// Invisible trigger volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub shape: Aabb,
    pub kind: ZoneKind,
    pub payload: ZonePayload,
}

impl Zone {
    /// Car zone centered on a platform at eye level.
    pub fn car(platform: Entity, position: Vec2) -> Self {
        Self {
            shape: Aabb::from_size(Vec3::new(position.x, EYE_HEIGHT, position.y), CAR_ZONE_SIZE),
            kind: ZoneKind::CarPurchase,
            payload: ZonePayload::Platform(platform),
        }
    }

    pub fn billing(center: Vec3) -> Self {
        Self {
            shape: Aabb::from_size(center, BILLING_ZONE_SIZE),
            kind: ZoneKind::BillingCounter,
            payload: ZonePayload::None,
        }
    }

    pub fn door() -> Self {
        Self {
            shape: Aabb::from_size(Vec3::new(DOORWAY_X, DOORWAY_Y, 0.0), DOOR_ZONE_SIZE),
            kind: ZoneKind::DoorTrigger,
            payload: ZonePayload::None,
        }
    }
}

/// All trigger volumes in the showroom. Filled once while the scene is built.
#[derive(Resource, Debug, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    pub fn register(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Classifies which zones contain `position`.
    pub fn evaluate(&self, position: Vec3) -> ProximityReport {
        let mut report = ProximityReport::default();

        for zone in self.zones.iter().filter(|z| z.shape.contains(position)) {
            match (zone.kind, zone.payload) {
                (ZoneKind::CarPurchase, ZonePayload::Platform(platform)) => {
                    if !report.active_cars.contains(&platform) {
                        report.active_cars.push(platform);
                    }
                }
                (ZoneKind::CarPurchase, _) => {}
                (ZoneKind::BillingCounter, _) => report.billing_active = true,
                (ZoneKind::DoorTrigger, _) => report.door_active = true,
            }
        }

        report
    }
}

/// Result of the last proximity pass.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct ProximityReport {
    /// Platforms whose zone holds the player, in registration order.
    pub active_cars: Vec<Entity>,
    pub billing_active: bool,
    pub door_active: bool,
}

impl ProximityReport {
    /// First car zone the player stands in.
    pub fn car_zone(&self) -> Option<Entity> {
        self.active_cars.first().copied()
    }

    /// First car zone whose car isn't the one already picked.
    pub fn prompt_car(&self, selected: Option<Entity>) -> Option<Entity> {
        self.active_cars
            .iter()
            .copied()
            .find(|&platform| Some(platform) != selected)
    }

    pub fn is_occupied(&self, platform: Entity) -> bool {
        self.active_cars.contains(&platform)
    }
}

pub fn update_proximity(
    registry: Res<ZoneRegistry>,
    mut report: ResMut<ProximityReport>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(transform) = player_query.get_single() else {
        return;
    };

    let next = registry.evaluate(transform.translation);
    // Avoid tripping change detection every frame
    if *report != next {
        *report = next;
    }
}
