//! Provides the `StationClient` for looking up IEM stations.
//!
//! Obtained via [`Iem::stations()`], it lists the stations of a network, fetches
//! the metadata of a single station, and finds the stations of a network
//! closest to a coordinate.

use crate::error::{IemError, NotFoundError};
use crate::iem::{Iem, LatLon};
use crate::stations::locate_station::StationLocator;
use crate::transport::Transport;
use crate::types::station::{Station, StationsResponse};
use bon::bon;
use log::debug;

fn network_path(network: &str) -> String {
    format!("/api/1/network/{network}.json")
}

fn station_path(station: &str) -> String {
    format!("/api/1/station/{station}.json")
}

/// A client for station metadata.
pub struct StationClient<'a, T> {
    client: &'a Iem<T>,
}

#[bon]
impl<'a, T: Transport> StationClient<'a, T> {
    pub(crate) fn new(client: &'a Iem<T>) -> Self {
        Self { client }
    }

    /// All stations belonging to `network`, e.g. `"IA_ASOS"`.
    ///
    /// # Errors
    ///
    /// Returns [`IemError::NotFound`] when IEM does not know the network.
    pub async fn network(&self, network: &str) -> Result<Vec<Station>, IemError> {
        let response: StationsResponse = self.client.get_json(&network_path(network)).await?;
        debug!("Network {} has {} stations", network, response.data.len());
        Ok(response.data)
    }

    /// Metadata for a single station.
    ///
    /// IEM answers with a list; the first entry is returned. A station that
    /// exists in several networks is reported once per network, and only the
    /// first one is kept.
    ///
    /// # Errors
    ///
    /// Returns [`IemError::NotFound`] if the station is unknown, including when
    /// IEM answers with an empty list.
    pub async fn station(&self, station: &str) -> Result<Station, IemError> {
        let response: StationsResponse = self.client.get_json(&station_path(station)).await?;
        response.data.into_iter().next().ok_or_else(|| {
            NotFoundError {
                detail: format!("No station found for {station}"),
                code: 404,
            }
            .into()
        })
    }

    /// Finds the stations of a network nearest to a location, closest first.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.network(&str)`: **Required.** Network to search, e.g. `"IA_ASOS"`.
    /// * `.location(LatLon)`: **Required.** Point to search around.
    /// * `.max_distance_km(f64)`: Optional. Search radius. Defaults to `50.0`.
    /// * `.station_limit(usize)`: Optional. Maximum number of stations. Defaults to `5`.
    /// * `.online_only(bool)`: Optional. Skip stations that stopped reporting.
    ///   Defaults to `false`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use iem::{Iem, IemError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), IemError> {
    /// let iem = Iem::new()?;
    /// let nearby = iem
    ///     .stations()
    ///     .nearest()
    ///     .network("IA_ASOS")
    ///     .location(LatLon(41.5868, -93.6250))
    ///     .max_distance_km(100.0)
    ///     .online_only(true)
    ///     .call()
    ///     .await?;
    /// for station in nearby {
    ///     println!("{} {}", station.id, station.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn nearest(
        &self,
        network: &str,
        location: LatLon,
        max_distance_km: Option<f64>,
        station_limit: Option<usize>,
        online_only: Option<bool>,
    ) -> Result<Vec<Station>, IemError> {
        let max_distance_km = max_distance_km.unwrap_or(50.0);
        let station_limit = station_limit.unwrap_or(5);
        let online_only = online_only.unwrap_or(false);

        let locator = StationLocator::new(self.network(network).await?);
        let stations_with_distance = locator.query(
            location.0,
            location.1,
            station_limit,
            max_distance_km,
            online_only,
        );

        Ok(stations_with_distance
            .into_iter()
            .map(|(station, _distance)| station)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    const IA_ASOS: &str = r#"{"data": [
        {"index": 0, "id": "DSM", "synop": 72546, "name": "DES MOINES INTL", "state": "IA", "country": "US",
         "elevation": 291.0, "network": "IA_ASOS", "online": true, "params": null, "county": "Polk",
         "plot_name": "Des Moines", "climate_site": "IATDSM", "latitude": 41.534, "longitude": -93.6531},
        {"index": 1, "id": "IKV", "synop": null, "name": "ANKENY", "state": "IA", "country": "US",
         "elevation": 268.0, "network": "IA_ASOS", "online": false, "params": null, "county": "Polk",
         "plot_name": "Ankeny", "climate_site": null, "latitude": 41.6914, "longitude": -93.5664},
        {"index": 2, "id": "AMW", "synop": null, "name": "AMES", "state": "IA", "country": "US",
         "elevation": 291.0, "network": "IA_ASOS", "online": true, "params": null, "county": "Story",
         "plot_name": "Ames", "climate_site": null, "latitude": 41.9903, "longitude": -93.6218}
    ]}"#;

    fn iem() -> Iem<MemoryTransport> {
        Iem::with_transport(
            MemoryTransport::new()
                .with_response("/api/1/network/IA_ASOS.json", IA_ASOS)
                .with_response("/api/1/station/EMPTY.json", r#"{"data": []}"#),
        )
    }

    #[tokio::test]
    async fn test_network_stations() -> Result<(), IemError> {
        let stations = iem().stations().network("IA_ASOS").await?;
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].id, "DSM");
        assert_eq!(stations[0].climate_site.as_deref(), Some("IATDSM"));
        assert!(!stations[1].online);
        Ok(())
    }

    #[tokio::test]
    async fn test_station_takes_first_entry() -> Result<(), IemError> {
        let iem = Iem::with_transport(
            MemoryTransport::new().with_response("/api/1/station/DSM.json", IA_ASOS),
        );
        let station = iem.stations().station("DSM").await?;
        assert_eq!(station.id, "DSM");
        assert_eq!(station.elevation, Some(291.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_station_empty_list_is_not_found() {
        let err = iem().stations().station("EMPTY").await.unwrap_err();
        assert!(
            matches!(err, IemError::NotFound(e) if e.code == 404 && e.detail.contains("EMPTY"))
        );
    }

    #[tokio::test]
    async fn test_unknown_network_is_not_found() {
        let err = iem().stations().network("XX_ASOS").await.unwrap_err();
        assert!(matches!(err, IemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_nearest_defaults() -> Result<(), IemError> {
        let stations = iem()
            .stations()
            .nearest()
            .network("IA_ASOS")
            .location(LatLon(41.5868, -93.6250))
            .call()
            .await?;
        let ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        // AMW is ~45 km away and still inside the default radius.
        assert_eq!(ids, ["DSM", "IKV", "AMW"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_nearest_online_only_with_limit() -> Result<(), IemError> {
        let stations = iem()
            .stations()
            .nearest()
            .network("IA_ASOS")
            .location(LatLon(41.5868, -93.6250))
            .online_only(true)
            .station_limit(1)
            .call()
            .await?;
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "DSM");
        Ok(())
    }
}
