//! Parsing of the delimited text IEM's `asos.py` endpoint returns.
//!
//! The first row names the columns; which columns appear depends on the fields
//! the query requested. Columns are matched against the static
//! [`COLUMNS`](crate::weather_data::columns::COLUMNS) table, unknown columns are
//! ignored and absent ones leave their field `None`.

use crate::types::observation::Observation;
use crate::weather_data::columns::{ColumnKind, ColumnSpec, COLUMNS, TIME_FORMAT};
use crate::weather_data::error::{ParseError, ValueError};
use crate::weather_data::query::WeatherQuery;
use chrono::NaiveDateTime;
use csv::StringRecord;
use log::debug;
use std::collections::HashMap;
use std::io::Read;

/// Parses a complete payload into observations, in row order.
///
/// The query's format picks the delimiter (comma or tab) and lines starting
/// with `#` are skipped. Beyond that only the query's missing and trace tokens
/// are consulted: a cell equal to either leaves its field `None`.
///
/// # Errors
///
/// The first bad row aborts the whole parse; no partial result is returned.
/// * [`ParseError::Field`] when a cell cannot be converted to its column's type.
/// * [`ParseError::RowShape`] when a row is too short for a column in the header.
/// * [`ParseError::NoKnownColumns`] when the header names none of the known columns,
///   usually because the payload is not in the query's format.
/// * [`ParseError::Csv`] when the payload itself cannot be read.
///
/// # Examples
///
/// ```
/// use iem::{parse_observations, DataField, WeatherQuery};
///
/// let query = WeatherQuery::new().station("KXYZ").fields([DataField::TempF, DataField::TempC]);
/// let payload = "station,valid,tmpf,tmpc\nKXYZ,2023-10-03 12:00,M,5.0\n";
///
/// let observations = parse_observations(payload.as_bytes(), &query).unwrap();
/// assert_eq!(observations.len(), 1);
/// assert_eq!(observations[0].temperature_f, None);
/// assert_eq!(observations[0].temperature_c, Some(5.0));
/// ```
pub fn parse_observations<R: Read>(
    reader: R,
    query: &WeatherQuery,
) -> Result<Vec<Observation>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(query.output_format().delimiter())
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    let mapping = HeaderMapping::from_headers(headers);
    if mapping.columns.is_empty() && !headers.is_empty() {
        return Err(ParseError::NoKnownColumns {
            header: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut observations = Vec::new();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        observations.push(mapping.record_to_observation(&record, query)?);
    }

    debug!(
        "Parsed {} observations using {} of {} known columns",
        observations.len(),
        mapping.columns.len(),
        COLUMNS.len()
    );
    Ok(observations)
}

/// Convenience wrapper around [`parse_observations`] for in-memory text.
pub fn parse_observations_str(
    payload: &str,
    query: &WeatherQuery,
) -> Result<Vec<Observation>, ParseError> {
    parse_observations(payload.as_bytes(), query)
}

/// Known columns present in the header, with their positions.
struct HeaderMapping {
    columns: Vec<(&'static ColumnSpec, usize)>,
}

impl HeaderMapping {
    fn from_headers(headers: &StringRecord) -> Self {
        let name_to_index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name, index))
            .collect();

        let columns = COLUMNS
            .iter()
            .filter_map(|spec| name_to_index.get(spec.name).map(|&index| (spec, index)))
            .collect();

        HeaderMapping { columns }
    }

    fn record_to_observation(
        &self,
        record: &StringRecord,
        query: &WeatherQuery,
    ) -> Result<Observation, ParseError> {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let mut observation = Observation::default();

        for &(spec, index) in &self.columns {
            let cell = record.get(index).ok_or(ParseError::RowShape {
                line,
                column: spec.name,
                index,
                len: record.len(),
            })?;

            if query.is_missing_or_trace(cell) {
                continue;
            }

            set_cell(&mut observation, spec, cell).map_err(|source| ParseError::Field {
                column: spec.name,
                line,
                value: cell.to_string(),
                source,
            })?;
        }

        Ok(observation)
    }
}

fn set_cell(observation: &mut Observation, spec: &ColumnSpec, cell: &str) -> Result<(), ValueError> {
    match spec.kind {
        ColumnKind::Float { set, .. } => set(observation, cell.parse::<f64>()?),
        ColumnKind::Text { set, .. } => set(observation, cell.to_string()),
        ColumnKind::Time { set, .. } => {
            set(observation, NaiveDateTime::parse_from_str(cell, TIME_FORMAT)?)
        }
    }
    Ok(())
}
