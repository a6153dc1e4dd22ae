//! Prints the observations of one station for a single day.
//!
//! ```text
//! cargo run --example weather -- --station DSM
//! cargo run --example weather -- --station DSM --date 2024-01-15 --field tmpf --field sknt
//! ```

use chrono::{Days, NaiveDate, Utc};
use clap::Parser;
use iem::{DataField, Iem, WeatherQuery};
use std::error::Error;

/// Print ASOS observations of one station as JSON.
#[derive(Debug, Parser)]
#[command(name = "weather")]
struct Args {
    /// Station to fetch weather for
    #[arg(short, long)]
    station: String,

    /// Day to fetch (YYYY-MM-DD). Defaults to the day before yesterday.
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// IANA timezone timestamps are reported in
    #[arg(long, default_value = "America/Chicago")]
    timezone: String,

    /// Data field to request, by IEM name. Repeatable.
    #[arg(short, long = "field", default_values_t = [DataField::TempF, DataField::TempC, DataField::Feel])]
    fields: Vec<DataField>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let day = match args.date {
        Some(day) => day,
        None => Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(2))
            .ok_or("date out of range")?,
    };

    let query = WeatherQuery::new()
        .station(args.station)
        .timezone(args.timezone)
        .report_types([3])
        .fields(args.fields)
        .range(day, day);

    let iem = Iem::new()?;
    let observations = iem.weather().get(&query).await?;

    println!("{}", serde_json::to_string_pretty(&observations)?);
    println!("Weather Records Count: {}", observations.len());
    Ok(())
}
