//! # Analysis Request Controller
//!
//! Drives [`InteractionState`] through one analysis:
//!
//! ```text
//! Idle ──submit──▶ Pending ──▶ Succeeded(result) | Failed(message)
//!   ▲                                   │
//!   └──── next submit / set_language ◀──┘
//! ```
//!
//! There are two ways to run a request. [`submit`](AnalysisRequestController::submit)
//! awaits the service inline and is used by the headless mode.
//! [`dispatch`](AnalysisRequestController::dispatch) spawns the call on the
//! tokio runtime and hands the [`Completion`] back over a channel, so the
//! terminal keeps accepting edits while the request is outstanding. Both
//! release the busy flag on every exit path, including a panicking or
//! cancelled request.
//!
//! A response is applied even if the language was switched while it was in
//! flight. There is no cancellation or generation check; such a response is
//! logged as stale.

use crate::analysis::{
    AnalysisError, AnalysisRequest, AnalysisResponse, AnalysisResult, AnalysisService,
};
use crate::i18n;
use crate::ui::state::{InteractionState, NoticeKind, RequestLifecycle};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Why a submission did not issue a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("handle is empty")]
    EmptyHandle,
    #[error("an analysis is already in flight")]
    InFlight,
}

/// One issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub request: AnalysisRequest,
    /// Handle text before trimming.
    pub raw_handle: String,
}

/// A finished request, ready to be applied to the state.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Result<AnalysisResponse, AnalysisError>,
}

pub struct AnalysisRequestController<S> {
    service: Arc<S>,
}

impl<S: AnalysisService> AnalysisRequestController<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Validate the handle and move the state to `Pending`.
    ///
    /// An empty handle raises a validation notice and leaves the lifecycle
    /// untouched. A submission while busy is silently ignored.
    pub fn begin(&self, state: &mut InteractionState) -> Result<Ticket, Rejection> {
        if state.is_busy() {
            debug!("submission ignored: analysis already in flight");
            return Err(Rejection::InFlight);
        }

        let handle = state.handle_text().trim();
        if handle.is_empty() {
            let pack = i18n::lookup(state.language());
            state.raise_notice(NoticeKind::Validation, pack.alert_input);
            return Err(Rejection::EmptyHandle);
        }

        let ticket = Ticket {
            request: AnalysisRequest {
                handle: handle.to_string(),
                lang: state.language(),
            },
            raw_handle: state.handle_text().to_string(),
        };
        state.dismiss_notice();
        state.begin_request();
        info!(handle = %ticket.request.handle, lang = %ticket.request.lang, "analysis requested");
        Ok(ticket)
    }

    /// Apply a finished request: `Succeeded` or `Failed` plus a notice.
    pub fn resolve(&self, state: &mut InteractionState, completion: Completion) {
        apply_completion(state, completion);
    }

    /// Run one analysis to completion, suspending until the service answers.
    pub async fn submit(&self, state: &mut InteractionState) -> Result<(), Rejection> {
        let ticket = self.begin(state)?;
        let request = ticket.request.clone();
        let guard = InFlight {
            state,
            ticket: Some(ticket),
        };
        let outcome = self.service.analyze(&request).await;
        guard.complete(outcome);
        Ok(())
    }

    /// Issue the request on the runtime; its [`Completion`] arrives on `tx`.
    pub fn dispatch(
        &self,
        state: &mut InteractionState,
        tx: &UnboundedSender<Completion>,
    ) -> Result<(), Rejection> {
        let ticket = self.begin(state)?;
        let request = ticket.request.clone();
        let sender = CompletionSender {
            tx: tx.clone(),
            ticket: Some(ticket),
        };
        let service = Arc::clone(&self.service);

        tokio::spawn(async move {
            let outcome = service.analyze(&request).await;
            sender.deliver(outcome);
        });
        Ok(())
    }
}

fn apply_completion(state: &mut InteractionState, completion: Completion) {
    let Completion { ticket, outcome } = completion;

    if ticket.request.lang != state.language() {
        warn!(
            requested = %ticket.request.lang,
            current = %state.language(),
            "applying analysis issued under a different language"
        );
    }

    let lifecycle = match outcome {
        Ok(response) => {
            info!(handle = %response.profile.handle, mbti = %response.analysis.mbti, "analysis succeeded");
            RequestLifecycle::Succeeded(AnalysisResult {
                profile: response.profile,
                personality: response.analysis,
                submitted_handle: ticket.raw_handle,
            })
        }
        Err(err) => {
            let fallback = i18n::lookup(state.language()).request_failed;
            let message = err.user_message(fallback);
            warn!(handle = %ticket.request.handle, error = %err, "analysis failed");
            state.raise_notice(NoticeKind::Failure, message.clone());
            RequestLifecycle::Failed(message)
        }
    };
    state.finish_request(lifecycle);
}

/// Holds the state for the duration of an inline request. Dropping it
/// before [`complete`](InFlight::complete) resolves the ticket as aborted.
struct InFlight<'a> {
    state: &'a mut InteractionState,
    ticket: Option<Ticket>,
}

impl InFlight<'_> {
    fn complete(mut self, outcome: Result<AnalysisResponse, AnalysisError>) {
        if let Some(ticket) = self.ticket.take() {
            apply_completion(self.state, Completion { ticket, outcome });
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            apply_completion(
                self.state,
                Completion {
                    ticket,
                    outcome: Err(AnalysisError::Aborted),
                },
            );
        }
    }
}

/// Sends exactly one completion per dispatched request, even if the task
/// unwinds before the service answers.
struct CompletionSender {
    tx: UnboundedSender<Completion>,
    ticket: Option<Ticket>,
}

impl CompletionSender {
    fn deliver(mut self, outcome: Result<AnalysisResponse, AnalysisError>) {
        if let Some(ticket) = self.ticket.take() {
            self.send(Completion { ticket, outcome });
        }
    }

    fn send(&self, completion: Completion) {
        if self.tx.send(completion).is_err() {
            debug!("analysis finished after the UI loop exited");
        }
    }
}

impl Drop for CompletionSender {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.send(Completion {
                ticket,
                outcome: Err(AnalysisError::Aborted),
            });
        }
    }
}
