use crate::error::{IemError, NotFoundError};
use crate::transport::Transport;
use log::{debug, info};
use reqwest::{Client, StatusCode};

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<u8>, IemError> {
        let url = format!("{}{}", self.base_url, path);
        info!("Requesting {} ({} parameters)", url, query.len());

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| IemError::NetworkRequest(url.clone(), e))?;

        if response.status() == StatusCode::NOT_FOUND {
            let body = response
                .bytes()
                .await
                .map_err(|e| IemError::NetworkRequest(url.clone(), e))?;
            return Err(not_found(&body).into());
        }

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    IemError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    IemError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| IemError::NetworkRequest(url.clone(), e))?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

/// Decodes IEM's `{"detail": ...}` 404 body, falling back to the raw text.
pub(crate) fn not_found(body: &[u8]) -> NotFoundError {
    let mut error = serde_json::from_slice::<NotFoundError>(body).unwrap_or_else(|_| NotFoundError {
        detail: String::from_utf8_lossy(body).trim().to_string(),
        code: 0,
    });
    if error.detail.is_empty() {
        error.detail = "Not Found".to_string();
    }
    error.code = StatusCode::NOT_FOUND.as_u16();
    error
}
