//! Defines the `DataField` enum, the closed set of data points that can be
//! requested from the IEM ASOS endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A data point requested from the IEM ASOS service via the `data` parameter.
///
/// The string form of each variant (see [`DataField::as_str`]) is both the value
/// transmitted in the request and the name of the column IEM returns for it.
///
/// # Examples
///
/// ```
/// use iem::DataField;
///
/// assert_eq!(DataField::TempF.as_str(), "tmpf");
/// assert_eq!("gust_mph".parse::<DataField>(), Ok(DataField::WindGustMph));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataField {
    /// Every available column.
    #[serde(rename = "all")]
    All,
    /// Air temperature [F].
    #[serde(rename = "tmpf")]
    TempF,
    /// Air temperature [C].
    #[serde(rename = "tmpc")]
    TempC,
    /// Dew point [F].
    #[serde(rename = "dwpf")]
    DewPointF,
    /// Dew point [C].
    #[serde(rename = "dwpc")]
    DewPointC,
    /// Relative humidity [%].
    #[serde(rename = "relh")]
    RelativeHumidity,
    /// Heat index or wind chill [F].
    #[serde(rename = "feel")]
    Feel,
    /// Wind direction [deg].
    #[serde(rename = "drct")]
    WindDirection,
    /// Wind speed [knots].
    #[serde(rename = "sknt")]
    WindSpeedKnots,
    /// Wind speed [mph].
    #[serde(rename = "sped")]
    WindSpeedMph,
    /// Altimeter [inches].
    #[serde(rename = "alti")]
    Altimeter,
    /// Sea level pressure [mb].
    #[serde(rename = "mslp")]
    SeaLevelPressure,
    /// One hour precipitation [mm].
    #[serde(rename = "p01m")]
    PrecipMm,
    /// One hour precipitation [inch].
    #[serde(rename = "p01i")]
    PrecipInch,
    /// Visibility [miles].
    #[serde(rename = "vsby")]
    Visibility,
    /// Wind gust [knots].
    #[serde(rename = "gust")]
    WindGustKnots,
    /// Wind gust [mph].
    #[serde(rename = "gust_mph")]
    WindGustMph,
    /// Cloud coverage, level 1.
    #[serde(rename = "skyc1")]
    CloudCoverageL1,
    /// Cloud coverage, level 2.
    #[serde(rename = "skyc2")]
    CloudCoverageL2,
    /// Cloud coverage, level 3.
    #[serde(rename = "skyc3")]
    CloudCoverageL3,
    /// Cloud height, level 1 [ft].
    #[serde(rename = "skyl1")]
    CloudHeightL1,
    /// Cloud height, level 2 [ft].
    #[serde(rename = "skyl2")]
    CloudHeightL2,
    /// Cloud height, level 3 [ft].
    #[serde(rename = "skyl3")]
    CloudHeightL3,
    /// Present weather code(s).
    #[serde(rename = "wxcodes")]
    PresentWeatherCodes,
    /// Ice accretion over one hour.
    #[serde(rename = "ice_accretion_1hr")]
    IceAccretion1Hr,
    /// Ice accretion over three hours.
    #[serde(rename = "ice_accretion_3hr")]
    IceAccretion3Hr,
    /// Ice accretion over six hours.
    #[serde(rename = "ice_accretion_6hr")]
    IceAccretion6Hr,
    /// Peak wind gust [knots].
    #[serde(rename = "peak_wind_gust")]
    PeakWindGustKnots,
    /// Peak wind gust [mph].
    #[serde(rename = "peak_wind_gust_mph")]
    PeakWindGustMph,
    /// Peak wind direction [deg].
    #[serde(rename = "peak_wind_drct")]
    PeakWindDirection,
    /// Peak wind time.
    #[serde(rename = "peak_wind_time")]
    PeakWindTime,
    /// Snow depth (4-group) [inch].
    #[serde(rename = "snowdepth")]
    SnowDepth,
    /// Raw METAR report.
    #[serde(rename = "metar")]
    Metar,
}

impl DataField {
    /// Every variant, in the order IEM documents them.
    pub const ALL: [DataField; 33] = [
        DataField::All,
        DataField::TempF,
        DataField::TempC,
        DataField::DewPointF,
        DataField::DewPointC,
        DataField::RelativeHumidity,
        DataField::Feel,
        DataField::WindDirection,
        DataField::WindSpeedKnots,
        DataField::WindSpeedMph,
        DataField::Altimeter,
        DataField::SeaLevelPressure,
        DataField::PrecipMm,
        DataField::PrecipInch,
        DataField::Visibility,
        DataField::WindGustKnots,
        DataField::WindGustMph,
        DataField::CloudCoverageL1,
        DataField::CloudCoverageL2,
        DataField::CloudCoverageL3,
        DataField::CloudHeightL1,
        DataField::CloudHeightL2,
        DataField::CloudHeightL3,
        DataField::PresentWeatherCodes,
        DataField::IceAccretion1Hr,
        DataField::IceAccretion3Hr,
        DataField::IceAccretion6Hr,
        DataField::PeakWindGustKnots,
        DataField::PeakWindGustMph,
        DataField::PeakWindDirection,
        DataField::PeakWindTime,
        DataField::SnowDepth,
        DataField::Metar,
    ];

    /// The value sent as `data=` and the column name IEM uses in its response.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataField::All => "all",
            DataField::TempF => "tmpf",
            DataField::TempC => "tmpc",
            DataField::DewPointF => "dwpf",
            DataField::DewPointC => "dwpc",
            DataField::RelativeHumidity => "relh",
            DataField::Feel => "feel",
            DataField::WindDirection => "drct",
            DataField::WindSpeedKnots => "sknt",
            DataField::WindSpeedMph => "sped",
            DataField::Altimeter => "alti",
            DataField::SeaLevelPressure => "mslp",
            DataField::PrecipMm => "p01m",
            DataField::PrecipInch => "p01i",
            DataField::Visibility => "vsby",
            DataField::WindGustKnots => "gust",
            DataField::WindGustMph => "gust_mph",
            DataField::CloudCoverageL1 => "skyc1",
            DataField::CloudCoverageL2 => "skyc2",
            DataField::CloudCoverageL3 => "skyc3",
            DataField::CloudHeightL1 => "skyl1",
            DataField::CloudHeightL2 => "skyl2",
            DataField::CloudHeightL3 => "skyl3",
            DataField::PresentWeatherCodes => "wxcodes",
            DataField::IceAccretion1Hr => "ice_accretion_1hr",
            DataField::IceAccretion3Hr => "ice_accretion_3hr",
            DataField::IceAccretion6Hr => "ice_accretion_6hr",
            DataField::PeakWindGustKnots => "peak_wind_gust",
            DataField::PeakWindGustMph => "peak_wind_gust_mph",
            DataField::PeakWindDirection => "peak_wind_drct",
            DataField::PeakWindTime => "peak_wind_time",
            DataField::SnowDepth => "snowdepth",
            DataField::Metar => "metar",
        }
    }
}

impl fmt::Display for DataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string does not name any [`DataField`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown IEM data field '{0}'")]
pub struct UnknownDataField(pub String);

impl FromStr for DataField {
    type Err = UnknownDataField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownDataField(s.to_string()))
    }
}
