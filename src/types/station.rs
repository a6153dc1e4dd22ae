//! Defines the data structures representing IEM stations, plus the
//! implementations needed to index them spatially with `rstar`.

use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// A single IEM observation station and its metadata.
///
/// Mirrors an entry of the `data` array returned by `/api/1/network/{id}.json`
/// and `/api/1/station/{id}.json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    #[serde(default)]
    pub index: i64,
    /// The station identifier (e.g. "DSM").
    pub id: String,
    /// WMO SYNOP block number, if the station has one.
    pub synop: Option<f64>,
    pub name: String,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Elevation above sea level in meters.
    pub elevation: Option<f64>,
    /// Identifier of the network the station belongs to.
    pub network: String,
    /// Whether the station is currently reporting.
    #[serde(default)]
    pub online: bool,
    pub params: Option<String>,
    pub county: Option<String>,
    pub plot_name: Option<String>,
    pub climate_site: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Envelope of the station endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct StationsResponse {
    pub data: Vec<Station>,
}

// --- R-Tree Implementations ---

impl RTreeObject for Station {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.latitude, self.longitude])
    }
}

impl PointDistance for Station {
    // Squared Euclidean distance in degrees; only used to order candidates.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.latitude - point[0];
        let dy = self.longitude - point[1];
        dx * dx + dy * dy
    }
}
