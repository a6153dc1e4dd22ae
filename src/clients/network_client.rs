//! Provides the `NetworkClient` for listing IEM station networks.

use crate::error::IemError;
use crate::iem::Iem;
use crate::transport::Transport;
use crate::types::network::{Network, NetworksResponse};

const NETWORKS_PATH: &str = "/api/1/networks.json";

/// Obtained via [`Iem::networks()`].
pub struct NetworkClient<'a, T> {
    client: &'a Iem<T>,
}

impl<'a, T: Transport> NetworkClient<'a, T> {
    pub(crate) fn new(client: &'a Iem<T>) -> Self {
        Self { client }
    }

    /// Every network IEM knows about.
    ///
    /// # Errors
    ///
    /// Transport errors are returned unchanged; an undecodable body gives
    /// [`IemError::JsonParse`].
    pub async fn all(&self) -> Result<Vec<Network>, IemError> {
        let response: NetworksResponse = self.client.get_json(NETWORKS_PATH).await?;
        Ok(response.data)
    }
}
