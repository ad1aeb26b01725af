//! # Localization
//!
//! The client speaks three languages. [`LanguageCode`] is the closed set of
//! supported codes and [`lookup`] maps each one to its static
//! [`LanguagePackEntry`].
//!
//! ## Wire Codes
//!
//! The same lowercase codes are used in the configuration file, on the
//! command line and in the body sent to the analysis service:
//!
//! ```text
//! cn  -> Simplified Chinese
//! jp  -> Japanese
//! en  -> English
//! ```

mod pack;

pub use pack::{lookup, LanguagePackEntry};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported UI / narrative language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Cn,
    Jp,
    En,
}

impl LanguageCode {
    /// All codes in language-switch order.
    pub const ALL: [LanguageCode; 3] = [LanguageCode::Cn, LanguageCode::Jp, LanguageCode::En];

    /// The code as sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::Cn => "cn",
            LanguageCode::Jp => "jp",
            LanguageCode::En => "en",
        }
    }

    /// The language's own name, shown on the language switch.
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::Cn => "中文",
            LanguageCode::Jp => "日本語",
            LanguageCode::En => "English",
        }
    }

    /// Next language in switch order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            LanguageCode::Cn => LanguageCode::Jp,
            LanguageCode::Jp => LanguageCode::En,
            LanguageCode::En => LanguageCode::Cn,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the supported codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code '{0}' (expected cn, jp or en)")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cn" => Ok(LanguageCode::Cn),
            "jp" => Ok(LanguageCode::Jp),
            "en" => Ok(LanguageCode::En),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}
