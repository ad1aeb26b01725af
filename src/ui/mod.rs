//! # UI Module
//!
//! This module provides the single-screen terminal interface for Persona.
//!
//! ## Components
//!
//! - [`InteractionState`] - handle text, language and the latest analysis
//! - [`AnalysisRequestController`] - validates and issues analysis requests
//! - [`mod@view`] - pure projection of the state into a [`ViewModel`]
//! - [`mod@render`] - drawing a [`ViewModel`] with ratatui
//! - [`App`] - key handling and the completion channel
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                     中文  日本語  English        │
//! │ Title                                           │
//! │ Subtitle                                        │
//! ├──────────────────────────────────────┬──────────┤
//! │ @ Handle                             │ Analyze  │
//! ├──────────────────────────────────────┴──────────┤
//! │ Profile header                                  │
//! ├────────────────────────┬────────────────────────┤
//! │ MBTI Type              │ Spirit Animal          │
//! ├────────────────────────┴────────────────────────┤
//! │ Portrait                                        │
//! ├─────────────────────────────────────────────────┤
//! │ Footer                                          │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod controller;
pub mod render;
pub mod state;
pub mod view;

pub use app::App;
pub use controller::{AnalysisRequestController, Completion, Rejection, Ticket};
pub use render::render;
pub use state::{InteractionState, Notice, NoticeKind, RequestLifecycle};
pub use view::{project, ViewModel};
