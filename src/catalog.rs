use std::f32::consts::PI;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable pointing at a JSON catalog to use instead of the built-in one.
pub const CATALOG_ENV: &str = "SHOWROOM_CATALOG";

/// Where the camera sits when the player climbs into a car, relative to its platform.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SeatPlacement {
    pub offset: [f32; 3],
    pub yaw: f32,
}

impl SeatPlacement {
    pub fn offset(&self) -> Vec3 {
        Vec3::from_array(self.offset)
    }
}

/// One car on display.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CarListing {
    pub name: String,
    /// Price in whole dollars.
    pub price: u64,
    /// Platform center on the floor plane (x, z).
    pub position: [f32; 2],
    #[serde(default)]
    pub interior: Option<SeatPlacement>,
}

/// Every car the showroom puts on a platform.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    pub cars: Vec<CarListing>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog entry {index} is invalid: {reason}")]
    Invalid { index: usize, reason: String },
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (index, car) in self.cars.iter().enumerate() {
            let invalid = |reason: &str| CatalogError::Invalid {
                index,
                reason: reason.to_string(),
            };

            if car.name.trim().is_empty() {
                return Err(invalid("car name is empty"));
            }
            if !car.position.iter().all(|v| v.is_finite()) {
                return Err(invalid("platform position is not finite"));
            }
            if let Some(seat) = &car.interior {
                if !seat.offset.iter().all(|v| v.is_finite()) || !seat.yaw.is_finite() {
                    return Err(invalid("interior placement is not finite"));
                }
            }
        }
        Ok(())
    }

    /// The showroom as it ships: six cars in the main hall, three in the annex.
    pub fn built_in() -> Self {
        let annex_x = crate::world::ANNEX_OFFSET_X;
        let car = |name: &str, price: u64, x: f32, z: f32| CarListing {
            name: name.to_string(),
            price,
            position: [x, z],
            interior: None,
        };

        Self {
            cars: vec![
                car("Mustang GTR", 75_000, -8.0, -15.0),
                car("Lamborghini Countach", 2_500_000, -8.0, -3.0),
                car("The Tourbillon", 9_500_000, -8.0, 9.0),
                car("Ford GT", 380_000, 8.0, -15.0),
                car("911 Turbo", 230_000, 8.0, 9.0),
                CarListing {
                    interior: Some(SeatPlacement {
                        offset: [-0.3, 0.7, -1.3],
                        yaw: -PI / 10.0,
                    }),
                    ..car("911", 350_000, 8.0, -3.0)
                },
                car("Ferrari SF90", 750_000, annex_x - 9.0, -5.5),
                car("Mclaren F1 Track Car", 58_000_000, annex_x + 9.0, -5.5),
                car("Carrera GT", 5_000_000, annex_x, 5.5),
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Reads the catalog named by [`CATALOG_ENV`], falling back to the built-in one.
pub fn load_catalog() -> Catalog {
    let Ok(path) = std::env::var(CATALOG_ENV) else {
        return Catalog::built_in();
    };

    match Catalog::load(&path) {
        Ok(catalog) => {
            info!("Loaded {} cars from {}", catalog.cars.len(), path);
            catalog
        }
        Err(e) => {
            warn!("Using built-in catalog: {}", e);
            Catalog::built_in()
        }
    }
}
