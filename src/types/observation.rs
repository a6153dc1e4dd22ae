use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of an ASOS response: a reading at a station at a time.
///
/// Which fields are populated depends on the columns the query asked for. A
/// field is `None` when its column was absent from the response, or when the
/// cell held the query's missing or trace token.
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
pub struct Observation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(rename = "time", skip_serializing_if = "Option::is_none")]
    pub valid: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,

    #[serde(rename = "tmpf", skip_serializing_if = "Option::is_none")]
    pub temperature_f: Option<f64>,
    #[serde(rename = "tmpc", skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(rename = "dwpf", skip_serializing_if = "Option::is_none")]
    pub dew_point_f: Option<f64>,
    #[serde(rename = "dwpc", skip_serializing_if = "Option::is_none")]
    pub dew_point_c: Option<f64>,
    #[serde(rename = "relh", skip_serializing_if = "Option::is_none")]
    pub relative_humidity: Option<f64>,
    /// Heat index or wind chill [F].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feel: Option<f64>,

    #[serde(rename = "drct", skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    #[serde(rename = "sknt", skip_serializing_if = "Option::is_none")]
    pub wind_speed_knots: Option<f64>,
    #[serde(rename = "sped", skip_serializing_if = "Option::is_none")]
    pub wind_speed_mph: Option<f64>,
    #[serde(rename = "gust", skip_serializing_if = "Option::is_none")]
    pub wind_gust_knots: Option<f64>,
    #[serde(rename = "gust_mph", skip_serializing_if = "Option::is_none")]
    pub wind_gust_mph: Option<f64>,

    #[serde(rename = "peak_wind_gust", skip_serializing_if = "Option::is_none")]
    pub peak_wind_gust_knots: Option<f64>,
    #[serde(rename = "peak_wind_gust_mph", skip_serializing_if = "Option::is_none")]
    pub peak_wind_gust_mph: Option<f64>,
    #[serde(rename = "peak_wind_drct", skip_serializing_if = "Option::is_none")]
    pub peak_wind_direction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_wind_time: Option<NaiveDateTime>,

    /// Altimeter setting [inches].
    #[serde(rename = "alti", skip_serializing_if = "Option::is_none")]
    pub altimeter: Option<f64>,
    /// Sea level pressure [mb].
    #[serde(rename = "mslp", skip_serializing_if = "Option::is_none")]
    pub sea_level_pressure: Option<f64>,

    #[serde(rename = "p01m", skip_serializing_if = "Option::is_none")]
    pub precip_mm: Option<f64>,
    #[serde(rename = "p01i", skip_serializing_if = "Option::is_none")]
    pub precip_inch: Option<f64>,

    /// Visibility [miles].
    #[serde(rename = "vsby", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,

    #[serde(rename = "skyc1", skip_serializing_if = "Option::is_none")]
    pub cloud_coverage_l1: Option<String>,
    #[serde(rename = "skyc2", skip_serializing_if = "Option::is_none")]
    pub cloud_coverage_l2: Option<String>,
    #[serde(rename = "skyc3", skip_serializing_if = "Option::is_none")]
    pub cloud_coverage_l3: Option<String>,
    #[serde(rename = "skyl1", skip_serializing_if = "Option::is_none")]
    pub cloud_height_l1: Option<f64>,
    #[serde(rename = "skyl2", skip_serializing_if = "Option::is_none")]
    pub cloud_height_l2: Option<f64>,
    #[serde(rename = "skyl3", skip_serializing_if = "Option::is_none")]
    pub cloud_height_l3: Option<f64>,

    #[serde(rename = "wxcodes", skip_serializing_if = "Option::is_none")]
    pub present_weather_codes: Option<String>,

    #[serde(rename = "ice_accretion_1hr", skip_serializing_if = "Option::is_none")]
    pub ice_accretion_1hr: Option<f64>,
    #[serde(rename = "ice_accretion_3hr", skip_serializing_if = "Option::is_none")]
    pub ice_accretion_3hr: Option<f64>,
    #[serde(rename = "ice_accretion_6hr", skip_serializing_if = "Option::is_none")]
    pub ice_accretion_6hr: Option<f64>,

    /// Snow depth (4-group) [inch].
    #[serde(rename = "snowdepth", skip_serializing_if = "Option::is_none")]
    pub snow_depth: Option<f64>,

    /// The raw METAR report the row was decoded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serialize_skips_absent_fields() {
        let observation = Observation {
            station: Some("DSM".to_string()),
            valid: NaiveDate::from_ymd_opt(2023, 10, 3).and_then(|d| d.and_hms_opt(12, 54, 0)),
            temperature_f: Some(0.0),
            ..Default::default()
        };

        let json = serde_json::to_value(&observation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "station": "DSM",
                "time": "2023-10-03T12:54:00",
                "tmpf": 0.0,
            })
        );
    }
}
