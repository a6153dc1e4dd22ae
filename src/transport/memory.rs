use crate::error::{IemError, NotFoundError};
use crate::transport::Transport;
use std::collections::HashMap;
use std::sync::Mutex;

/// A request seen by a [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// [`Transport`] that answers from fixtures registered per path.
///
/// Query parameters are ignored when matching but recorded, so callers can
/// assert on exactly what would have been sent. Unknown paths answer with
/// [`IemError::NotFound`], as IEM does.
///
/// # Examples
///
/// ```
/// use iem::{Iem, IemError, MemoryTransport};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), IemError> {
/// let transport = MemoryTransport::new().with_response(
///     "/api/1/networks.json",
///     r#"{"data": [{"index": 0, "id": "IA_ASOS", "name": "Iowa ASOS", "tzname": "America/Chicago"}]}"#,
/// );
/// let iem = Iem::with_transport(transport);
///
/// let networks = iem.networks().all().await?;
/// assert_eq!(networks[0].id, "IA_ASOS");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryTransport {
    responses: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the body served for `path`.
    pub fn with_response(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(path.into(), body.into());
        self
    }

    /// Every request made so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Transport for MemoryTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<u8>, IemError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                path: path.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });
        }

        self.responses.get(path).cloned().ok_or_else(|| {
            IemError::NotFound(NotFoundError {
                detail: format!("No fixture registered for {path}"),
                code: 404,
            })
        })
    }
}
