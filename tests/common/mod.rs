#![allow(dead_code)]

use persona::analysis::{
    AnalysisError, AnalysisRequest, AnalysisResponse, AnalysisService, Personality, Profile,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted analysis service that records every request it receives.
#[derive(Default)]
pub struct MockService {
    responses: Mutex<VecDeque<Result<AnalysisResponse, AnalysisError>>>,
    requests: Mutex<Vec<AnalysisRequest>>,
    gate: Option<Arc<Notify>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next call.
    pub fn respond(self, outcome: Result<AnalysisResponse, AnalysisError>) -> Self {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(outcome);
        self
    }

    /// Hold every call until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

impl AnalysisService for MockService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or(Err(AnalysisError::Aborted))
    }
}

/// A success response for `handle`.
pub fn success(
    handle: &str,
    avatar: Option<&str>,
    display_name: Option<&str>,
) -> Result<AnalysisResponse, AnalysisError> {
    Ok(AnalysisResponse {
        profile: Profile {
            avatar: avatar.map(str::to_string),
            display_name: display_name.map(str::to_string),
            handle: handle.to_string(),
        },
        analysis: Personality {
            mbti: "INFJ".to_string(),
            animal: "Owl".to_string(),
            description: "A quiet observer who writes at dawn.".to_string(),
        },
    })
}

/// A non-success response carrying the service's error text.
pub fn remote_error(status: u16, message: Option<&str>) -> Result<AnalysisResponse, AnalysisError> {
    Err(AnalysisError::Remote {
        status,
        message: message.map(str::to_string),
    })
}

/// A success status with a body that does not decode.
pub fn malformed() -> Result<AnalysisResponse, AnalysisError> {
    let err = serde_json::from_str::<AnalysisResponse>(r#"{"profile": {}}"#)
        .expect_err("body should not decode");
    Err(AnalysisError::Decode(err))
}
