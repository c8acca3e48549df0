use reqwest::{blocking::Client, header::USER_AGENT};

use super::runner::{CoverFetcher, FetchError, FetchRequest};

/// Blocking HTTP fetcher. Redirects are followed; any final non-2xx status
/// is an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl CoverFetcher for HttpFetcher {
    fn fetch(&self, request: &FetchRequest<'_>) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(request.url)
            .header(USER_AGENT, request.user_agent)
            .timeout(request.timeout)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let bytes = response
            .bytes()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
