//! # Interaction State
//!
//! The single value the terminal UI is drawn from: the handle being typed,
//! the selected language, and what happened to the latest analysis.
//!
//! Only the edit operations are public. Lifecycle transitions belong to the
//! [`AnalysisRequestController`](crate::ui::controller::AnalysisRequestController).

use crate::analysis::AnalysisResult;
use crate::i18n::LanguageCode;

/// Handle pre-filled on first launch.
pub const DEFAULT_HANDLE: &str = "scievents.bsky.social";

/// Language selected on first launch.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::Jp;

/// State of the latest analysis attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Pending,
    Succeeded(AnalysisResult),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The handle was empty when the user tried to submit.
    Validation,
    /// An analysis request failed.
    Failure,
}

/// A message the user has to acknowledge before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    handle_text: String,
    language: LanguageCode,
    lifecycle: RequestLifecycle,
    in_flight: bool,
    notice: Option<Notice>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLE, DEFAULT_LANGUAGE)
    }
}

impl InteractionState {
    pub fn new(handle_text: impl Into<String>, language: LanguageCode) -> Self {
        Self {
            handle_text: handle_text.into(),
            language,
            lifecycle: RequestLifecycle::Idle,
            in_flight: false,
            notice: None,
        }
    }

    pub fn handle_text(&self) -> &str {
        &self.handle_text
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn lifecycle(&self) -> &RequestLifecycle {
        &self.lifecycle
    }

    /// True while a request is outstanding. Submission is disabled meanwhile.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replace the handle text verbatim. Validation happens on submit.
    pub fn set_handle_text(&mut self, text: impl Into<String>) {
        self.handle_text = text.into();
    }

    /// Switch language and discard whatever the lifecycle was showing.
    ///
    /// An outstanding request keeps the UI busy until it resolves.
    pub fn set_language(&mut self, code: LanguageCode) {
        self.language = code;
        self.lifecycle = RequestLifecycle::Idle;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub(crate) fn raise_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
        });
    }

    pub(crate) fn begin_request(&mut self) {
        self.lifecycle = RequestLifecycle::Pending;
        self.in_flight = true;
    }

    pub(crate) fn finish_request(&mut self, lifecycle: RequestLifecycle) {
        self.lifecycle = lifecycle;
        self.in_flight = false;
    }
}
