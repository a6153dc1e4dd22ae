use serde::{Deserialize, Serialize};

/// A named grouping of IEM stations, e.g. `IA_ASOS`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Network {
    #[serde(default)]
    pub index: i64,
    /// Network identifier used in station lookups.
    pub id: String,
    pub name: String,
    /// IANA timezone of the network.
    #[serde(rename = "tzname")]
    pub timezone: Option<String>,
    /// When IEM last regenerated the network's wind roses, as reported.
    pub windrose_update: Option<String>,
}

/// Envelope of `/api/1/networks.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct NetworksResponse {
    pub data: Vec<Network>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_networks_envelope() {
        let body = r#"{"data": [
            {"index": 0, "id": "IA_ASOS", "name": "Iowa ASOS", "tzname": "America/Chicago", "windrose_update": null},
            {"index": 1, "id": "AWOS", "name": "Iowa AWOS", "tzname": "America/Chicago", "extent": "..."}
        ]}"#;

        let response: NetworksResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].id, "IA_ASOS");
        assert_eq!(response.data[0].timezone.as_deref(), Some("America/Chicago"));
        assert_eq!(response.data[1].windrose_update, None);
    }
}
