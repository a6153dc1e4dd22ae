pub mod data_field;
pub mod network;
pub mod observation;
pub mod observation_frame;
pub mod query_options;
pub mod station;
