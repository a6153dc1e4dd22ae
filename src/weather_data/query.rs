//! The `WeatherQuery` builder: everything IEM's `asos.py` endpoint needs to know
//! to produce a table of observations.

use crate::error::IemError;
use crate::types::data_field::DataField;
use crate::types::query_options::{Format, MissingValue, TraceValue};
use crate::weather_data::error::QueryError;
use chrono::{Datelike, NaiveDate, Utc};
use reqwest::Url;

pub const DEFAULT_TIMEZONE: &str = "Etc/UTC";
pub const DEFAULT_REPORT_TYPES: [u32; 2] = [3, 4];

/// Parameters of an ASOS observation request.
///
/// Stations and data fields must be added before the query can be sent; every
/// other option has a default:
///
/// | option         | default      |
/// |----------------|--------------|
/// | start / end    | today (UTC)  |
/// | timezone       | `Etc/UTC`    |
/// | format         | `onlycomma`  |
/// | latlon / elev  | no           |
/// | missing        | `M`          |
/// | trace          | `T`          |
/// | direct         | no           |
/// | report types   | 3, 4         |
///
/// # Examples
///
/// ```
/// use iem::{DataField, WeatherQuery};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 10, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 10, 4).unwrap();
///
/// let query = WeatherQuery::new()
///     .stations(["DSM", "AMW"])
///     .fields([DataField::TempF, DataField::TempC])
///     .range(start, end)
///     .timezone("America/Chicago");
///
/// let params = query.params().unwrap();
/// assert_eq!(params[0], ("station", "DSM".to_string()));
/// assert_eq!(params[2], ("data", "tmpf".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    stations: Vec<String>,
    fields: Vec<DataField>,
    start: NaiveDate,
    end: NaiveDate,
    timezone: String,
    format: Format,
    lat_lon: bool,
    elevation: bool,
    missing: MissingValue,
    trace: TraceValue,
    direct: bool,
    report_types: Vec<u32>,
}

impl Default for WeatherQuery {
    fn default() -> Self {
        let today = Utc::now().date_naive();
        Self {
            stations: Vec::new(),
            fields: Vec::new(),
            start: today,
            end: today,
            timezone: DEFAULT_TIMEZONE.to_string(),
            format: Format::default(),
            lat_lon: false,
            elevation: false,
            missing: MissingValue::default(),
            trace: TraceValue::default(),
            direct: false,
            report_types: DEFAULT_REPORT_TYPES.to_vec(),
        }
    }
}

impl WeatherQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends stations. Duplicates are kept.
    pub fn stations<I, S>(mut self, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stations.extend(stations.into_iter().map(Into::into));
        self
    }

    /// Appends a single station.
    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.stations.push(station.into());
        self
    }

    /// Appends requested data fields. Duplicates are kept.
    pub fn fields(mut self, fields: impl IntoIterator<Item = DataField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn field(mut self, field: DataField) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets both ends of the (inclusive) date range.
    pub fn range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(start).end(end)
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = end;
        self
    }

    /// IANA name of the zone IEM reports timestamps in. Sent as-is; the date
    /// range is not shifted by it.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Include `lat` and `lon` columns in the response.
    pub fn lat_lon(mut self, lat_lon: bool) -> Self {
        self.lat_lon = lat_lon;
        self
    }

    /// Include an `elevation` column in the response.
    pub fn elevation(mut self, elevation: bool) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn missing(mut self, missing: MissingValue) -> Self {
        self.missing = missing;
        self
    }

    pub fn trace(mut self, trace: TraceValue) -> Self {
        self.trace = trace;
        self
    }

    /// Ask IEM to stream the result as a file download rather than inline text.
    pub fn direct(mut self, direct: bool) -> Self {
        self.direct = direct;
        self
    }

    /// Replaces the report types (defaults to 3 and 4).
    pub fn report_types(mut self, report_types: impl IntoIterator<Item = u32>) -> Self {
        self.report_types = report_types.into_iter().collect();
        self
    }

    pub fn station_ids(&self) -> &[String] {
        &self.stations
    }

    pub fn data_fields(&self) -> &[DataField] {
        &self.fields
    }

    pub fn output_format(&self) -> Format {
        self.format
    }

    pub fn missing_value(&self) -> MissingValue {
        self.missing
    }

    pub fn trace_value(&self) -> TraceValue {
        self.trace
    }

    /// True when `cell` is this query's missing or trace token.
    pub fn is_missing_or_trace(&self, cell: &str) -> bool {
        cell == self.missing.cell() || cell == self.trace.cell()
    }

    /// Serializes the query into the ordered, repeated-key parameter list IEM
    /// expects.
    ///
    /// # Errors
    ///
    /// [`QueryError::MissingStations`] when no station was added, otherwise
    /// [`QueryError::MissingFields`] when no data field was added.
    pub fn params(&self) -> Result<Vec<(&'static str, String)>, QueryError> {
        if self.stations.is_empty() {
            return Err(QueryError::MissingStations);
        }
        if self.fields.is_empty() {
            return Err(QueryError::MissingFields);
        }

        let mut params = Vec::with_capacity(self.stations.len() + self.fields.len() + 16);

        params.extend(self.stations.iter().map(|s| ("station", s.clone())));
        params.extend(self.fields.iter().map(|f| ("data", f.as_str().to_string())));

        params.push(("year1", self.start.year().to_string()));
        params.push(("month1", self.start.month().to_string()));
        params.push(("day1", self.start.day().to_string()));

        params.push(("year2", self.end.year().to_string()));
        params.push(("month2", self.end.month().to_string()));
        params.push(("day2", self.end.day().to_string()));

        params.push(("tz", self.timezone.clone()));
        params.push(("format", self.format.as_str().to_string()));
        params.push(("latlon", yes_no(self.lat_lon).to_string()));
        params.push(("elev", yes_no(self.elevation).to_string()));
        params.push(("missing", self.missing.param().to_string()));
        params.push(("trace", self.trace.param().to_string()));
        params.push(("direct", yes_no(self.direct).to_string()));

        params.extend(self.report_types.iter().map(|rt| ("report_type", rt.to_string())));

        Ok(params)
    }

    /// The full request URL for this query against `endpoint`
    /// (e.g. `https://mesonet.agron.iastate.edu/cgi-bin/request/asos.py`).
    pub fn to_url(&self, endpoint: &str) -> Result<Url, IemError> {
        let params = self.params()?;
        Url::parse_with_params(endpoint, &params).map_err(|e| IemError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn keys(params: &[(&'static str, String)]) -> Vec<&'static str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_params_order_and_defaults() {
        let query = WeatherQuery::new()
            .stations(["1HW", "DSM"])
            .fields([DataField::TempF, DataField::TempC])
            .range(date(2023, 10, 3), date(2023, 10, 4));

        let params = query.params().unwrap();
        assert_eq!(
            keys(&params),
            [
                "station", "station", "data", "data", "year1", "month1", "day1", "year2",
                "month2", "day2", "tz", "format", "latlon", "elev", "missing", "trace", "direct",
                "report_type", "report_type",
            ]
        );

        let values: Vec<&str> = params.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(
            values,
            [
                "1HW", "DSM", "tmpf", "tmpc", "2023", "10", "3", "2023", "10", "4", "Etc/UTC",
                "onlycomma", "no", "no", "M", "T", "no", "3", "4",
            ]
        );
    }

    #[test]
    fn test_missing_stations_checked_first() {
        assert_eq!(WeatherQuery::new().params(), Err(QueryError::MissingStations));
        assert_eq!(
            WeatherQuery::new().field(DataField::TempF).params(),
            Err(QueryError::MissingStations)
        );
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            WeatherQuery::new().station("DSM").params(),
            Err(QueryError::MissingFields)
        );
    }

    #[test]
    fn test_insertion_order_and_duplicates_kept() {
        let query = WeatherQuery::new()
            .station("C")
            .stations(vec!["A".to_string(), "C".to_string()])
            .field(DataField::Metar)
            .field(DataField::All)
            .field(DataField::Metar);

        let params = query.params().unwrap();
        let stations: Vec<&str> = params
            .iter()
            .filter(|(k, _)| *k == "station")
            .map(|(_, v)| v.as_str())
            .collect();
        let data: Vec<&str> = params
            .iter()
            .filter(|(k, _)| *k == "data")
            .map(|(_, v)| v.as_str())
            .collect();

        assert_eq!(stations, ["C", "A", "C"]);
        assert_eq!(data, ["metar", "all", "metar"]);
    }

    #[test]
    fn test_booleans_serialize_as_yes_no() {
        let query = WeatherQuery::new()
            .station("DSM")
            .field(DataField::TempF)
            .lat_lon(true)
            .elevation(true)
            .direct(true);

        let params = query.params().unwrap();
        for key in ["latlon", "elev", "direct"] {
            let value = params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str());
            assert_eq!(value, Some("yes"), "{key}");
        }
        assert!(!params.iter().any(|(_, v)| v == "true" || v == "false"));
    }

    #[test]
    fn test_dates_ignore_timezone() {
        let query = WeatherQuery::new()
            .station("DSM")
            .field(DataField::TempF)
            .range(date(2023, 12, 31), date(2024, 1, 1))
            .timezone("Pacific/Kiritimati");

        let params = query.params().unwrap();
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("year1"), "2023");
        assert_eq!(get("month1"), "12");
        assert_eq!(get("day1"), "31");
        assert_eq!(get("year2"), "2024");
        assert_eq!(get("month2"), "1");
        assert_eq!(get("day2"), "1");
        assert_eq!(get("tz"), "Pacific/Kiritimati");
    }

    #[test]
    fn test_report_types_overwrite() {
        let query = WeatherQuery::new()
            .station("DSM")
            .field(DataField::TempF)
            .report_types([1])
            .report_types([3]);

        let params = query.params().unwrap();
        let report_types: Vec<&str> = params
            .iter()
            .filter(|(k, _)| *k == "report_type")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(report_types, ["3"]);
    }

    #[test]
    fn test_option_tokens() {
        let query = WeatherQuery::new()
            .station("DSM")
            .field(DataField::PrecipInch)
            .format(Format::Comma)
            .missing(MissingValue::Empty)
            .trace(TraceValue::Float);

        let params = query.params().unwrap();
        assert!(params.contains(&("format", "comma".to_string())));
        assert!(params.contains(&("missing", "empty".to_string())));
        assert!(params.contains(&("trace", "0.0001".to_string())));

        assert!(query.is_missing_or_trace(""));
        assert!(query.is_missing_or_trace("0.0001"));
        assert!(!query.is_missing_or_trace("M"));
    }

    #[test]
    fn test_to_url_repeats_keys() {
        let query = WeatherQuery::new()
            .stations(["A", "B"])
            .fields([DataField::TempF, DataField::TempC])
            .range(date(2023, 10, 3), date(2023, 10, 4));

        let url = query
            .to_url("https://mesonet.agron.iastate.edu/cgi-bin/request/asos.py")
            .unwrap();

        assert_eq!(url.path(), "/cgi-bin/request/asos.py");
        assert_eq!(
            url.query(),
            Some(
                "station=A&station=B&data=tmpf&data=tmpc&year1=2023&month1=10&day1=3\
                 &year2=2023&month2=10&day2=4&tz=Etc%2FUTC&format=onlycomma&latlon=no\
                 &elev=no&missing=M&trace=T&direct=no&report_type=3&report_type=4"
            )
        );
    }

    #[test]
    fn test_to_url_validates_first() {
        let err = WeatherQuery::new().to_url("https://example.com/asos.py").unwrap_err();
        assert!(matches!(err, IemError::Query(QueryError::MissingStations)));
    }
}
