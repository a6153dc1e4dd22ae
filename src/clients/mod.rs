pub mod network_client;
pub mod station_client;
pub mod weather_client;
