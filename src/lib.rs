//! Persona TUI - A terminal client for BlueSky personality analysis
//!
//! This library provides the core of the client: localized labels, the
//! analysis service client, and the interaction state machine that decides
//! when a request may be issued and what the screen shows.

pub mod analysis;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod ui;
