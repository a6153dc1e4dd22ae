mod clients;
mod error;
mod iem;
mod stations;
mod transport;
mod types;
mod weather_data;

pub use error::{IemError, NotFoundError};
pub use iem::*;

pub use clients::network_client::*;
pub use clients::station_client::*;
pub use clients::weather_client::*;

pub use transport::memory::RecordedRequest;
pub use transport::{HttpTransport, MemoryTransport, Transport};

pub use types::data_field::{DataField, UnknownDataField};
pub use types::network::Network;
pub use types::observation::Observation;
pub use types::observation_frame::ObservationFrame;
pub use types::query_options::{Format, MissingValue, TraceValue};
pub use types::station::Station;

pub use stations::locate_station::StationLocator;

pub use weather_data::columns;
pub use weather_data::error::{ParseError, QueryError, ValueError};
pub use weather_data::parser::{parse_observations, parse_observations_str};
pub use weather_data::query::{WeatherQuery, DEFAULT_REPORT_TYPES, DEFAULT_TIMEZONE};
