//! # Presentation
//!
//! [`project`] turns an [`InteractionState`] into the [`ViewModel`] the
//! renderer draws. It is pure: the same state always yields the same view.
//!
//! | Lifecycle      | Busy region | Result region |
//! |----------------|-------------|---------------|
//! | `Idle`         | -           | -             |
//! | `Pending`      | shown       | -             |
//! | `Succeeded(r)` | -           | shown         |
//! | `Failed(msg)`  | -           | -             |
//!
//! Switching language while a request is outstanding returns the lifecycle
//! to `Idle` but the submit button stays disabled until that request
//! resolves. The footer says so in the meantime.

use crate::analysis::AnalysisResult;
use crate::i18n::{self, LanguageCode};
use crate::ui::state::{InteractionState, NoticeKind, RequestLifecycle};
use reqwest::Url;

/// Service that renders initials into an image for profiles without an avatar.
pub const AVATAR_PLACEHOLDER_BASE: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub languages: Vec<LanguageTab>,
    pub input: InputView,
    pub button: ButtonView,
    pub busy: Option<BusyView>,
    pub result: Option<ResultView>,
    pub notice: Option<NoticeView>,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTab {
    pub code: LanguageCode,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub label: &'static str,
    pub text: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyView {
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub avatar_label: &'static str,
    pub avatar_url: String,
    pub display_name: String,
    pub handle: String,
    pub mbti: ResultCard,
    pub animal: ResultCard,
    pub description_label: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub text: String,
    pub dismiss_hint: &'static str,
}

pub fn project(state: &InteractionState) -> ViewModel {
    let pack = i18n::lookup(state.language());

    let languages = LanguageCode::ALL
        .iter()
        .map(|&code| LanguageTab {
            code,
            label: code.native_name(),
            active: code == state.language(),
        })
        .collect();

    let (busy, result) = match state.lifecycle() {
        RequestLifecycle::Pending => (
            Some(BusyView {
                message: pack.loading,
            }),
            None,
        ),
        RequestLifecycle::Succeeded(analysis) => (None, Some(project_result(analysis, pack))),
        RequestLifecycle::Idle | RequestLifecycle::Failed(_) => (None, None),
    };

    let notice = state.notice().map(|notice| NoticeView {
        text: match notice.kind {
            NoticeKind::Validation => notice.message.clone(),
            NoticeKind::Failure => format!("{}: {}", pack.error_prefix, notice.message),
        },
        dismiss_hint: pack.dismiss_hint,
    });

    let footer = if state.is_busy() && *state.lifecycle() == RequestLifecycle::Idle {
        pack.still_running
    } else {
        pack.footer
    };

    ViewModel {
        title: pack.title,
        subtitle: pack.subtitle,
        languages,
        input: InputView {
            label: pack.handle_label,
            text: state.handle_text().to_string(),
            placeholder: pack.placeholder,
        },
        button: ButtonView {
            label: pack.button,
            enabled: !state.is_busy(),
        },
        busy,
        result,
        notice,
        footer,
    }
}

fn project_result(analysis: &AnalysisResult, pack: &i18n::LanguagePackEntry) -> ResultView {
    let profile = &analysis.profile;
    ResultView {
        avatar_label: pack.avatar_label,
        avatar_url: profile
            .avatar
            .clone()
            .unwrap_or_else(|| placeholder_avatar_url(&profile.handle)),
        display_name: profile
            .display_name
            .clone()
            .unwrap_or_else(|| analysis.submitted_handle.clone()),
        handle: profile.handle.clone(),
        mbti: ResultCard {
            label: pack.mbti,
            value: analysis.personality.mbti.clone(),
        },
        animal: ResultCard {
            label: pack.animal,
            value: analysis.personality.animal.clone(),
        },
        description_label: pack.description,
        description: analysis.personality.description.clone(),
    }
}

/// Generated avatar image for `handle`.
pub fn placeholder_avatar_url(handle: &str) -> String {
    match Url::parse_with_params(AVATAR_PLACEHOLDER_BASE, &[("name", handle)]) {
        Ok(url) => url.into(),
        Err(_) => format!("{}?name={}", AVATAR_PLACEHOLDER_BASE, handle),
    }
}

/// Render a view as plain text lines, for headless output.
pub fn plain_text(view: &ViewModel) -> String {
    let mut lines = vec![view.title.to_string(), view.subtitle.to_string(), String::new()];

    if let Some(busy) = &view.busy {
        lines.push(busy.message.to_string());
    }

    if let Some(result) = &view.result {
        lines.push(format!("{} (@{})", result.display_name, result.handle));
        lines.push(format!("{}: {}", result.avatar_label, result.avatar_url));
        lines.push(String::new());
        lines.push(format!("{}: {}", result.mbti.label, result.mbti.value));
        lines.push(format!("{}: {}", result.animal.label, result.animal.value));
        lines.push(String::new());
        lines.push(format!("{}:", result.description_label));
        lines.push(result.description.clone());
    }

    if let Some(notice) = &view.notice {
        lines.push(notice.text.clone());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_avatar_url() {
        assert_eq!(
            placeholder_avatar_url("alice.test"),
            "https://ui-avatars.com/api/?name=alice.test"
        );
    }

    #[test]
    fn test_placeholder_avatar_url_encodes_query() {
        assert_eq!(
            placeholder_avatar_url("a b&c"),
            "https://ui-avatars.com/api/?name=a+b%26c"
        );
    }

    #[test]
    fn test_idle_view_has_static_chrome_only() {
        let state = InteractionState::new("alice.test", LanguageCode::En);
        let view = project(&state);
        assert_eq!(view.title, "BlueSky Personality Analyzer");
        assert_eq!(view.button.label, "Analyze");
        assert!(view.button.enabled);
        assert_eq!(view.input.placeholder, "e.g. scievents.bsky.social");
        assert!(view.busy.is_none());
        assert!(view.result.is_none());
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_language_tabs_mark_active_code() {
        let state = InteractionState::new("", LanguageCode::Cn);
        let view = project(&state);
        let active: Vec<_> = view
            .languages
            .iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.code)
            .collect();
        assert_eq!(active, vec![LanguageCode::Cn]);
        assert_eq!(view.languages.len(), 3);
        assert_eq!(view.languages[1].label, "日本語");
    }

    #[test]
    fn test_pending_view_shows_loading() {
        let mut state = InteractionState::new("alice.test", LanguageCode::Jp);
        state.begin_request();
        let view = project(&state);
        assert_eq!(
            view.busy,
            Some(BusyView {
                message: "ニューロン接続中... 10-20秒かかる場合があります"
            })
        );
        assert!(view.result.is_none());
        assert!(!view.button.enabled);
    }

    #[test]
    fn test_failure_notice_is_prefixed() {
        let mut state = InteractionState::new("alice.test", LanguageCode::En);
        state.raise_notice(NoticeKind::Failure, "rate limited");
        let view = project(&state);
        let notice = view.notice.unwrap();
        assert_eq!(notice.text, "Error: rate limited");
        assert_eq!(notice.dismiss_hint, "Press Enter to dismiss");
    }

    #[test]
    fn test_language_switch_while_busy_explains_disabled_button() {
        let mut state = InteractionState::new("alice.test", LanguageCode::Jp);
        state.begin_request();
        state.set_language(LanguageCode::En);

        let view = project(&state);
        assert!(view.busy.is_none());
        assert!(!view.button.enabled);
        assert_eq!(view.footer, i18n::lookup(LanguageCode::En).still_running);

        state.finish_request(RequestLifecycle::Failed("late".to_string()));
        assert_eq!(project(&state).footer, i18n::lookup(LanguageCode::En).footer);
    }

    #[test]
    fn test_labels_follow_language() {
        let state = InteractionState::new("", LanguageCode::Jp);
        assert_eq!(project(&state).input.label, "@ ハンドル");
    }

    #[test]
    fn test_plain_text_of_idle_view() {
        let state = InteractionState::new("alice.test", LanguageCode::En);
        let text = plain_text(&project(&state));
        assert!(text.starts_with("BlueSky Personality Analyzer\n"));
        assert!(!text.contains("Portrait"));
    }
}
