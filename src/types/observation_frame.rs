//! Contains the `ObservationFrame` structure for lazy operations on parsed ASOS
//! observations.

use crate::error::IemError;
use crate::types::observation::Observation;
use crate::weather_data::columns::{ColumnKind, COLUMNS};
use chrono::NaiveDateTime;
use polars::prelude::*;

/// A Polars `LazyFrame` holding one row per [`Observation`] and one column per
/// known IEM column (`station`, `valid`, `tmpf`, ...).
///
/// Missing values become nulls. Timestamps are naive, in whatever timezone the
/// query asked IEM to report in.
///
/// # Example
///
/// ```no_run
/// # use iem::{DataField, Iem, IemError, WeatherQuery};
/// # #[tokio::main]
/// # async fn main() -> Result<(), IemError> {
/// let iem = Iem::new()?;
/// let query = WeatherQuery::new().station("DSM").field(DataField::TempF);
///
/// let frame = iem.weather().frame(&query).await?;
/// let df = frame.for_station("DSM").frame.collect()?;
/// println!("{df}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ObservationFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl ObservationFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Builds a frame from parsed observations, keeping their order.
    pub fn from_observations(observations: &[Observation]) -> Result<Self, IemError> {
        let columns: Vec<Column> = COLUMNS
            .iter()
            .map(|spec| {
                let name = PlSmallStr::from_static(spec.name);
                let series = match spec.kind {
                    ColumnKind::Float { get, .. } => {
                        let values: Vec<Option<f64>> = observations.iter().map(get).collect();
                        Series::new(name, values)
                    }
                    ColumnKind::Text { get, .. } => {
                        let values: Vec<Option<&str>> = observations.iter().map(get).collect();
                        Series::new(name, values)
                    }
                    ColumnKind::Time { get, .. } => {
                        let values: Vec<Option<NaiveDateTime>> =
                            observations.iter().map(get).collect();
                        Series::new(name, values)
                    }
                };
                Column::from(series)
            })
            .collect();

        let df = DataFrame::new(columns)?;
        Ok(Self::new(df.lazy()))
    }

    /// Applies an arbitrary Polars predicate, returning a new frame.
    pub fn filter(&self, predicate: Expr) -> ObservationFrame {
        ObservationFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps rows whose `valid` timestamp lies in `start..=end`.
    pub fn get_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> ObservationFrame {
        self.filter(
            col("valid")
                .gt_eq(lit(start))
                .and(col("valid").lt_eq(lit(end))),
        )
    }

    /// Keeps rows reported by `station`.
    pub fn for_station(&self, station: &str) -> ObservationFrame {
        self.filter(col("station").eq(lit(station)))
    }
}
