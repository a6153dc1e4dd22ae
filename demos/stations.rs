//! Usage:
//!
//! ```text
//! cargo run --example stations -- --station DSM
//! cargo run --example stations -- --network IA_ASOS
//! cargo run --example stations -- --network IA_ASOS --near 41.5868,-93.6250
//! ```

use clap::Parser;
use iem::{Iem, LatLon};
use std::error::Error;

/// Print IEM station metadata as JSON.
#[derive(Debug, Parser)]
#[command(name = "stations")]
struct Args {
    /// Station to fetch
    #[arg(long, conflicts_with = "network")]
    station: Option<String>,

    /// Network to fetch stations for
    #[arg(long)]
    network: Option<String>,

    /// Only the stations of the network nearest to <lat>,<lon>
    #[arg(long, requires = "network", value_parser = parse_lat_lon, allow_hyphen_values = true)]
    near: Option<LatLon>,

    /// Search radius for --near, in kilometers
    #[arg(long, default_value_t = 50.0)]
    max_distance_km: f64,
}

fn parse_lat_lon(value: &str) -> Result<LatLon, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected <lat>,<lon>, got '{value}'"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("longitude: {e}"))?;
    Ok(LatLon(lat, lon))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let iem = Iem::new()?;

    if let Some(station) = args.station {
        let station = iem.stations().station(&station).await?;
        println!("{}", serde_json::to_string_pretty(&station)?);
        return Ok(());
    }

    let Some(network) = args.network else {
        println!("Pass --network or --station to run this example");
        return Ok(());
    };

    let stations = match args.near {
        Some(location) => {
            iem.stations()
                .nearest()
                .network(&network)
                .location(location)
                .max_distance_km(args.max_distance_km)
                .call()
                .await?
        }
        None => iem.stations().network(&network).await?,
    };

    println!("{}", serde_json::to_string_pretty(&stations)?);
    println!("Station count for network ({network}): {}", stations.len());
    Ok(())
}
