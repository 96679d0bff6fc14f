//! Best-effort position lookup for biasing study-spot searches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LocationError;
use crate::storage::Config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[allow(async_fn_in_trait)]
pub trait Locator {
    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

/// Coordinates taken from the `[location]` config section.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocator {
    coordinates: Option<Coordinates>,
}

impl FixedLocator {
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self { coordinates }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .coordinates()
                .map(|(latitude, longitude)| Coordinates {
                    latitude,
                    longitude,
                }),
        )
    }
}

impl Locator for FixedLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        self.coordinates.ok_or(LocationError::Unavailable)
    }
}

/// Always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocator;

impl Locator for NoLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Denied)
    }
}

/// Ask `locator` for a position, giving up after `timeout`.
///
/// Every failure collapses to `None`; the search then runs without a
/// position.
pub async fn locate_within<L: Locator + ?Sized>(
    locator: &L,
    timeout: Duration,
) -> Option<Coordinates> {
    match tokio::time::timeout(timeout, locator.locate()).await {
        Ok(Ok(coords)) => Some(coords),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "continuing without location");
            None
        }
        Err(_) => {
            tracing::warn!(?timeout, "location lookup timed out");
            None
        }
    }
}
