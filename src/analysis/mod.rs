//! # Remote Analysis
//!
//! Types and transport for the personality analysis service.
//!
//! ## Wire Contract
//!
//! ```text
//! POST <server>/api/analyze
//! { "handle": "alice.test", "lang": "en" }
//!
//! 2xx  { "profile":  { "avatar"?, "displayName"?, "handle" },
//!        "analysis": { "mbti", "animal", "description" } }
//! else { "error": "rate limited" }
//! ```
//!
//! [`AnalysisService`] is the seam between the controller and the network;
//! [`HttpAnalysisService`] is the production implementation.

mod error;
mod http;

pub use error::AnalysisError;
pub use http::{HttpAnalysisService, ANALYZE_PATH, DEFAULT_TIMEOUT};

use crate::i18n::LanguageCode;
use serde::{Deserialize, Deserializer, Serialize};
use std::future::Future;

/// Body of an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    /// Trimmed, non-empty handle.
    pub handle: String,
    pub lang: LanguageCode,
}

/// Subject metadata returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "non_empty")]
    pub avatar: Option<String>,
    #[serde(default, rename = "displayName", deserialize_with = "non_empty")]
    pub display_name: Option<String>,
    pub handle: String,
}

/// The categorical and narrative part of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Personality {
    pub mbti: String,
    pub animal: String,
    pub description: String,
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisResponse {
    pub profile: Profile,
    pub analysis: Personality,
}

/// Failure response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default, deserialize_with = "non_empty")]
    pub error: Option<String>,
}

/// An analysis together with what was typed to request it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub profile: Profile,
    pub personality: Personality,
    /// Handle text exactly as it was when the request was issued.
    pub submitted_handle: String,
}

/// Something that can analyze a handle.
pub trait AnalysisService: Send + Sync + 'static {
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResponse, AnalysisError>> + Send;
}

// Empty strings count as absent, like a falsy value would in a web client.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
