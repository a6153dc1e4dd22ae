//! The fixed mapping from IEM column names to [`Observation`] fields.
//!
//! Each entry names a column, the type its cells are parsed as, and how to read
//! and write the matching field. The parser and the frame builder both walk
//! this table, so adding a column here is enough to support it everywhere.

use crate::types::observation::Observation;
use chrono::NaiveDateTime;

/// Layout of timestamp cells (`valid`, `peak_wind_time`).
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Declared type of a column, with its field accessors.
#[derive(Clone, Copy)]
pub enum ColumnKind {
    Float {
        get: fn(&Observation) -> Option<f64>,
        set: fn(&mut Observation, f64),
    },
    Text {
        get: fn(&Observation) -> Option<&str>,
        set: fn(&mut Observation, String),
    },
    Time {
        get: fn(&Observation) -> Option<NaiveDateTime>,
        set: fn(&mut Observation, NaiveDateTime),
    },
}

#[derive(Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

macro_rules! column {
    ($name:literal, Float, $field:ident) => {
        ColumnSpec {
            name: $name,
            kind: ColumnKind::Float {
                get: |o| o.$field,
                set: |o, v| o.$field = Some(v),
            },
        }
    };
    ($name:literal, Text, $field:ident) => {
        ColumnSpec {
            name: $name,
            kind: ColumnKind::Text {
                get: |o| o.$field.as_deref(),
                set: |o, v| o.$field = Some(v),
            },
        }
    };
    ($name:literal, Time, $field:ident) => {
        ColumnSpec {
            name: $name,
            kind: ColumnKind::Time {
                get: |o| o.$field,
                set: |o, v| o.$field = Some(v),
            },
        }
    };
}

pub static COLUMNS: &[ColumnSpec] = &[
    column!("station", Text, station),
    column!("valid", Time, valid),
    column!("lon", Float, lon),
    column!("lat", Float, lat),
    column!("elevation", Float, elevation),
    column!("tmpf", Float, temperature_f),
    column!("tmpc", Float, temperature_c),
    column!("dwpf", Float, dew_point_f),
    column!("dwpc", Float, dew_point_c),
    column!("relh", Float, relative_humidity),
    column!("feel", Float, feel),
    column!("drct", Float, wind_direction),
    column!("sknt", Float, wind_speed_knots),
    column!("sped", Float, wind_speed_mph),
    column!("gust", Float, wind_gust_knots),
    column!("gust_mph", Float, wind_gust_mph),
    column!("peak_wind_gust", Float, peak_wind_gust_knots),
    column!("peak_wind_gust_mph", Float, peak_wind_gust_mph),
    column!("peak_wind_drct", Float, peak_wind_direction),
    column!("peak_wind_time", Time, peak_wind_time),
    column!("alti", Float, altimeter),
    column!("mslp", Float, sea_level_pressure),
    column!("p01m", Float, precip_mm),
    column!("p01i", Float, precip_inch),
    column!("vsby", Float, visibility),
    column!("skyc1", Text, cloud_coverage_l1),
    column!("skyc2", Text, cloud_coverage_l2),
    column!("skyc3", Text, cloud_coverage_l3),
    column!("skyl1", Float, cloud_height_l1),
    column!("skyl2", Float, cloud_height_l2),
    column!("skyl3", Float, cloud_height_l3),
    column!("wxcodes", Text, present_weather_codes),
    column!("ice_accretion_1hr", Float, ice_accretion_1hr),
    column!("ice_accretion_3hr", Float, ice_accretion_3hr),
    column!("ice_accretion_6hr", Float, ice_accretion_6hr),
    column!("snowdepth", Float, snow_depth),
    column!("metar", Text, metar),
];

/// Looks up a column by its IEM name.
pub fn column(name: &str) -> Option<&'static ColumnSpec> {
    COLUMNS.iter().find(|c| c.name == name)
}
