//! This module provides the main entry point for the IEM client. From an [`Iem`]
//! instance, networks, stations and weather observations are reached through
//! [`Iem::networks`], [`Iem::stations`] and [`Iem::weather`].

use crate::clients::network_client::NetworkClient;
use crate::clients::station_client::StationClient;
use crate::clients::weather_client::WeatherClient;
use crate::error::IemError;
use crate::transport::{HttpTransport, Transport};
use bon::Builder;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Public IEM endpoint.
pub const IEM_URL: &str = "https://mesonet.agron.iastate.edu";

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use iem::LatLon;
///
/// let des_moines = LatLon(41.5868, -93.6250);
/// assert_eq!(des_moines.0, 41.5868); // Latitude
/// assert_eq!(des_moines.1, -93.6250); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Settings for the HTTP transport used by [`Iem::with_config`].
///
/// # Examples
///
/// ```
/// use iem::IemConfig;
/// use std::time::Duration;
///
/// let config = IemConfig::builder()
///     .base_url("http://localhost:8080")
///     .timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(config.base_url, "http://localhost:8080");
/// assert!(config.user_agent.starts_with("iem-rs/"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct IemConfig {
    /// Scheme and host requests are made against.
    #[builder(into, default = IEM_URL.to_string())]
    pub base_url: String,
    #[builder(into, default = concat!("iem-rs/", env!("CARGO_PKG_VERSION")).to_string())]
    pub user_agent: String,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for IemConfig {
    fn default() -> Self {
        IemConfig::builder().build()
    }
}

/// The main client struct for accessing IEM data.
///
/// `Iem` is generic over its [`Transport`]. [`Iem::new`] and
/// [`Iem::with_config`] talk to IEM over HTTP; [`Iem::with_transport`] accepts
/// any other transport, such as [`crate::MemoryTransport`] for offline use.
///
/// # Examples
///
/// ```no_run
/// # use iem::{DataField, Iem, IemError, WeatherQuery};
/// # #[tokio::main]
/// # async fn main() -> Result<(), IemError> {
/// let iem = Iem::new()?;
///
/// let networks = iem.networks().all().await?;
/// let stations = iem.stations().network("IA_ASOS").await?;
///
/// let query = WeatherQuery::new()
///     .station("DSM")
///     .fields([DataField::TempF, DataField::Feel]);
/// let observations = iem.weather().get(&query).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Iem<T = HttpTransport> {
    transport: T,
}

impl Iem<HttpTransport> {
    /// Creates a client for the public IEM service with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`IemError::ClientBuild`] if the underlying HTTP client cannot be
    /// created (e.g. the TLS backend fails to initialise).
    pub fn new() -> Result<Self, IemError> {
        Self::with_config(IemConfig::default())
    }

    /// Creates an HTTP client from explicit settings.
    pub fn with_config(config: IemConfig) -> Result<Self, IemError> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(IemError::ClientBuild)?;
        Ok(Self::with_transport(HttpTransport::new(client, config.base_url)))
    }
}

impl<T: Transport> Iem<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Network listings.
    pub fn networks(&self) -> NetworkClient<'_, T> {
        NetworkClient::new(self)
    }

    /// Station metadata and nearest-station search.
    pub fn stations(&self) -> StationClient<'_, T> {
        StationClient::new(self)
    }

    /// ASOS weather observations.
    pub fn weather(&self) -> WeatherClient<'_, T> {
        WeatherClient::new(self)
    }

    /// Fetches `path` and decodes its JSON body.
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, IemError> {
        let body = self.transport.get(path, &[]).await?;
        serde_json::from_slice(&body).map_err(|source| IemError::JsonParse {
            url: path.to_string(),
            source,
        })
    }

    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<u8>, IemError> {
        self.transport.get(path, query).await
    }
}
