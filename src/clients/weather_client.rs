//! Provides the `WeatherClient` for fetching ASOS observations.

use crate::error::IemError;
use crate::iem::Iem;
use crate::transport::Transport;
use crate::types::observation::Observation;
use crate::types::observation_frame::ObservationFrame;
use crate::weather_data::parser::parse_observations;
use crate::weather_data::query::WeatherQuery;
use log::info;

/// Path of IEM's ASOS download script.
pub const ASOS_PATH: &str = "/cgi-bin/request/asos.py";

/// A client for weather observations, obtained via [`Iem::weather()`].
pub struct WeatherClient<'a, T> {
    client: &'a Iem<T>,
}

impl<'a, T: Transport> WeatherClient<'a, T> {
    pub(crate) fn new(client: &'a Iem<T>) -> Self {
        Self { client }
    }

    /// Runs `query` and parses every returned row.
    ///
    /// # Errors
    ///
    /// * [`IemError::Query`] if the query has no stations or no data fields.
    ///   Nothing is sent in that case.
    /// * [`IemError::Parse`] if the response cannot be parsed.
    /// * Transport errors, unchanged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use iem::{DataField, Iem, IemError, WeatherQuery};
    /// # use chrono::NaiveDate;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), IemError> {
    /// let iem = Iem::new()?;
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let query = WeatherQuery::new()
    ///     .station("DSM")
    ///     .fields([DataField::TempF, DataField::WindSpeedKnots])
    ///     .range(day, day.succ_opt().unwrap());
    ///
    /// for observation in iem.weather().get(&query).await? {
    ///     println!("{:?} {:?}", observation.valid, observation.temperature_f);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, query: &WeatherQuery) -> Result<Vec<Observation>, IemError> {
        let params = query.params()?;
        info!(
            "Fetching {} field(s) for station(s) {}",
            query.data_fields().len(),
            query.station_ids().join(",")
        );
        let body = self.client.get_bytes(ASOS_PATH, &params).await?;
        Ok(parse_observations(&body[..], query)?)
    }

    /// Like [`WeatherClient::get`], but returns the observations as an
    /// [`ObservationFrame`] for further filtering with Polars.
    pub async fn frame(&self, query: &WeatherQuery) -> Result<ObservationFrame, IemError> {
        let observations = self.get(query).await?;
        ObservationFrame::from_observations(&observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use crate::types::data_field::DataField;
    use crate::types::query_options::{Format, MissingValue};
    use crate::weather_data::error::{ParseError, QueryError};
    use chrono::NaiveDate;
    use polars::prelude::*;

    const PAYLOAD: &str = "station,valid,tmpf,sknt\n\
        DSM,2024-01-15 00:54,-12.00,14.00\n\
        DSM,2024-01-15 01:54,null,13.00\n\
        AMW,2024-01-15 00:55,-14.00,null\n";

    fn query() -> WeatherQuery {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        WeatherQuery::new()
            .stations(["DSM", "AMW"])
            .fields([DataField::TempF, DataField::WindSpeedKnots])
            .range(day, day.succ_opt().unwrap())
            .missing(MissingValue::Null)
    }

    fn iem() -> Iem<MemoryTransport> {
        Iem::with_transport(MemoryTransport::new().with_response(ASOS_PATH, PAYLOAD))
    }

    #[tokio::test]
    async fn test_get_parses_rows_in_order() -> Result<(), IemError> {
        let iem = iem();
        let observations = iem.weather().get(&query()).await?;

        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0].station.as_deref(), Some("DSM"));
        assert_eq!(observations[0].temperature_f, Some(-12.0));
        assert_eq!(observations[1].temperature_f, None);
        assert_eq!(observations[1].wind_speed_knots, Some(13.0));
        assert_eq!(observations[2].station.as_deref(), Some("AMW"));
        assert_eq!(observations[2].wind_speed_knots, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_sends_query_params() -> Result<(), IemError> {
        let iem = iem();
        let query = query();
        iem.weather().get(&query).await?;

        let requests = iem.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, ASOS_PATH);
        let expected: Vec<(String, String)> = query
            .params()?
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(requests[0].query, expected);
        assert!(requests[0]
            .query
            .contains(&("missing".to_string(), "null".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_query_sends_nothing() {
        let iem = iem();
        let err = iem
            .weather()
            .get(&WeatherQuery::new().field(DataField::TempF))
            .await
            .unwrap_err();
        assert!(matches!(err, IemError::Query(QueryError::MissingStations)));
        assert!(iem.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_parse_error_is_reported() {
        let iem = Iem::with_transport(
            MemoryTransport::new().with_response(ASOS_PATH, "station,valid,tmpf\nDSM,2024-01-15 00:54,warm\n"),
        );
        let err = iem.weather().get(&query()).await.unwrap_err();
        assert!(matches!(
            err,
            IemError::Parse(ParseError::Field { column: "tmpf", .. })
        ));
    }

    #[tokio::test]
    async fn test_tdf_payload_with_debug_preamble() -> Result<(), IemError> {
        let iem = Iem::with_transport(MemoryTransport::new().with_response(
            ASOS_PATH,
            "#DEBUG: Format Typ    -> tdf\n\
             station\tvalid\ttmpf\tsknt\n\
             DSM\t2024-01-15 00:54\t-12.00\t14.00\n",
        ));
        let query = query().format(Format::Tdf);
        let observations = iem.weather().get(&query).await?;

        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].temperature_f, Some(-12.0));
        assert_eq!(observations[0].wind_speed_knots, Some(14.0));
        assert!(iem.transport().requests()[0]
            .query
            .contains(&("format".to_string(), "tdf".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn test_frame_filters_by_station() -> Result<(), IemError> {
        let frame = iem().weather().frame(&query()).await?;
        let df = frame.for_station("DSM").frame.collect()?;
        assert_eq!(df.height(), 2);
        let temps: Vec<Option<f64>> = df.column("tmpf")?.f64()?.into_iter().collect();
        assert_eq!(temps, [Some(-12.0), None]);
        Ok(())
    }
}
