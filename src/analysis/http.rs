use super::{AnalysisError, AnalysisRequest, AnalysisResponse, AnalysisService, ErrorBody};
use anyhow::{Context, Result};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the analysis endpoint, relative to the server base URL.
pub const ANALYZE_PATH: &str = "api/analyze";

/// Analyses routinely take 10-20 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// [`AnalysisService`] backed by the HTTP analysis server.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpAnalysisService {
    /// Build a client for the server at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .with_context(|| format!("Invalid server URL: {}", base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(ANALYZE_PATH)
            .with_context(|| format!("Failed to build analysis endpoint from: {}", base_url))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// The full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        debug!(endpoint = %self.endpoint, handle = %request.handle, lang = %request.lang, "posting analysis request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let message = match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "error response had no readable body");
                None
            }
        };
        Err(AnalysisError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}
