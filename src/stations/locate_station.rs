use crate::types::station::Station;
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;
use rstar::RTree;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Spatial index over a set of stations, typically one network's.
#[derive(Debug, Clone)]
pub struct StationLocator {
    rtree: RTree<Station>,
}

// Helper struct for BinaryHeap ordering
struct StationCandidate<'a> {
    distance_km: OrderedFloat<f64>,
    station: &'a Station,
}
// Only distance takes part in ordering
impl PartialEq for StationCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance_km == other.distance_km
    }
}
impl Eq for StationCandidate<'_> {}
impl PartialOrd for StationCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for StationCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_km.cmp(&other.distance_km)
    }
}

// Slightly under the true ~111.19 km, so the degree radius errs large.
const KM_PER_DEGREE: f64 = 111.0;

fn haversine_km(latitude: f64, longitude: f64, station: &Station) -> f64 {
    distance(
        HaversineLocation {
            latitude,
            longitude,
        },
        HaversineLocation {
            latitude: station.latitude,
            longitude: station.longitude,
        },
        Units::Kilometers,
    )
}

impl StationLocator {
    pub fn new(stations: Vec<Station>) -> Self {
        StationLocator {
            rtree: RTree::bulk_load(stations),
        }
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// Finds up to `n_results` stations within `max_distance_km`, closest first,
    /// paired with their distance in kilometers. With `online_only`, stations
    /// that are no longer reporting are skipped.
    pub fn query(
        &self,
        latitude: f64,
        longitude: f64,
        n_results: usize,
        max_distance_km: f64,
        online_only: bool,
    ) -> Vec<(Station, f64)> {
        if n_results == 0 || max_distance_km < 0.0 {
            return vec![];
        }

        let radius_deg = search_radius_deg(latitude, max_distance_km);
        let mut heap: BinaryHeap<StationCandidate<'_>> = BinaryHeap::with_capacity(n_results);

        for station in self
            .rtree
            .locate_within_distance([latitude, longitude], radius_deg * radius_deg)
        {
            if online_only && !station.online {
                continue;
            }

            let dist_km = haversine_km(latitude, longitude, station);
            if dist_km > max_distance_km {
                continue;
            }

            let candidate = StationCandidate {
                distance_km: OrderedFloat(dist_km),
                station,
            };

            match heap.peek() {
                Some(worst) if heap.len() >= n_results => {
                    if candidate.distance_km < worst.distance_km {
                        heap.pop();
                        heap.push(candidate);
                    }
                }
                _ => heap.push(candidate),
            }
        }

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| (c.station.to_owned(), c.distance_km.into_inner()))
            .collect()
    }
}

/// Radius, in degrees, of a circle around the query point that contains every
/// point within `max_distance_km` of it.
///
/// A degree of longitude shrinks with latitude, so the longitude span is taken
/// at the most poleward latitude the search can reach.
fn search_radius_deg(latitude: f64, max_distance_km: f64) -> f64 {
    let lat_span = max_distance_km / KM_PER_DEGREE;
    let poleward = (latitude.abs() + lat_span).min(90.0);
    let cos = poleward.to_radians().cos();
    if cos <= f64::EPSILON {
        return 360.0;
    }
    let lon_span = (max_distance_km / (KM_PER_DEGREE * cos)).min(360.0);
    lat_span.max(lon_span)
}
