//! The capability the client needs from the outside world: fetch the bytes at a
//! path, given some query parameters.
//!
//! [`HttpTransport`] talks to IEM with `reqwest`. [`MemoryTransport`] serves
//! fixtures from memory so queries and parsing can be exercised offline.

pub mod http;
pub mod memory;

use crate::error::IemError;
use std::future::Future;

pub use http::HttpTransport;
pub use memory::MemoryTransport;

/// Fetches a complete response body.
///
/// `path` is relative to the transport's base URL (e.g. `/api/1/networks.json`).
/// `query` holds parameters in order; keys may repeat.
///
/// Implementations map an HTTP 404 to [`IemError::NotFound`] and return every
/// other failure unchanged; they do not retry.
pub trait Transport {
    fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Vec<u8>, IemError>> + Send;
}
