//! Analysis request controller tests
//!
//! Tests for submission validation, lifecycle transitions, busy-flag release
//! and the interaction between language switching and displayed results.

mod common;

use common::{malformed, remote_error, success, MockService};
use persona::analysis::{AnalysisError, AnalysisResponse};
use persona::i18n::LanguageCode;
use persona::ui::{
    AnalysisRequestController, App, InteractionState, NoticeKind, Rejection, RequestLifecycle,
};
use std::sync::Arc;
use tokio::sync::Notify;

fn make_controller(service: MockService) -> (AnalysisRequestController<MockService>, Arc<MockService>) {
    let service = Arc::new(service);
    (AnalysisRequestController::new(Arc::clone(&service)), service)
}

#[tokio::test]
async fn test_blank_handles_never_reach_the_service() {
    for blank in ["", " ", "   ", "\t", "\n", " \t \r\n "] {
        let (controller, service) = make_controller(MockService::new());
        let mut state = InteractionState::new(blank, LanguageCode::En);

        let result = controller.submit(&mut state).await;

        assert_eq!(result, Err(Rejection::EmptyHandle));
        assert_eq!(service.call_count(), 0);
        assert_eq!(state.lifecycle(), &RequestLifecycle::Idle);
        assert!(!state.is_busy());
        let notice = state.notice().expect("validation notice");
        assert_eq!(notice.kind, NoticeKind::Validation);
        assert_eq!(notice.message, "Please enter a valid BlueSky Handle!");
    }
}

#[tokio::test]
async fn test_blank_handle_keeps_previous_result() {
    let (controller, service) =
        make_controller(MockService::new().respond(success("alice.test", None, None)));
    let mut state = InteractionState::new("alice.test", LanguageCode::Cn);
    controller.submit(&mut state).await.unwrap();
    let before = state.lifecycle().clone();

    state.set_handle_text("  ");
    assert_eq!(controller.submit(&mut state).await, Err(Rejection::EmptyHandle));

    assert_eq!(state.lifecycle(), &before);
    assert_eq!(service.call_count(), 1);
    assert_eq!(
        state.notice().map(|n| n.message.as_str()),
        Some("请输入有效的 BlueSky Handle！")
    );
}

#[tokio::test]
async fn test_submit_sends_trimmed_handle_and_language() {
    let (controller, service) = make_controller(
        MockService::new().respond(success("scievents.bsky.social", None, None)),
    );
    let mut state = InteractionState::new("  scievents.bsky.social  ", LanguageCode::En);

    controller.submit(&mut state).await.unwrap();

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].handle, "scievents.bsky.social");
    assert_eq!(requests[0].lang, LanguageCode::En);
}

#[tokio::test]
async fn test_success_stores_result_verbatim() {
    let (controller, _service) =
        make_controller(MockService::new().respond(success("alice.test", None, Some("Alice"))));
    let mut state = InteractionState::new("alice.test", LanguageCode::En);

    controller.submit(&mut state).await.unwrap();

    match state.lifecycle() {
        RequestLifecycle::Succeeded(result) => {
            assert_eq!(result.personality.mbti, "INFJ");
            assert_eq!(result.personality.animal, "Owl");
            assert_eq!(
                result.personality.description,
                "A quiet observer who writes at dawn."
            );
            assert_eq!(result.profile.display_name.as_deref(), Some("Alice"));
        }
        other => panic!("expected success, got {:?}", other),
    }
    assert!(!state.is_busy());
    assert!(state.notice().is_none());
}

#[tokio::test]
async fn test_remote_error_message_is_surfaced() {
    let (controller, _service) =
        make_controller(MockService::new().respond(remote_error(429, Some("rate limited"))));
    let mut state = InteractionState::new("alice.test", LanguageCode::Jp);

    controller.submit(&mut state).await.unwrap();

    assert_eq!(
        state.lifecycle(),
        &RequestLifecycle::Failed("rate limited".to_string())
    );
    assert!(!state.is_busy());
    let notice = state.notice().expect("failure notice");
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.message, "rate limited");
}

#[tokio::test]
async fn test_remote_error_without_message_uses_localized_fallback() {
    let (controller, _service) = make_controller(MockService::new().respond(remote_error(500, None)));
    let mut state = InteractionState::new("alice.test", LanguageCode::Cn);

    controller.submit(&mut state).await.unwrap();

    assert_eq!(
        state.lifecycle(),
        &RequestLifecycle::Failed("请求失败".to_string())
    );
}

#[tokio::test]
async fn test_malformed_response_fails_with_fallback() {
    let (controller, _service) = make_controller(MockService::new().respond(malformed()));
    let mut state = InteractionState::new("alice.test", LanguageCode::En);

    controller.submit(&mut state).await.unwrap();

    assert_eq!(
        state.lifecycle(),
        &RequestLifecycle::Failed("Request failed".to_string())
    );
    assert!(!state.is_busy());
}

#[tokio::test]
async fn test_busy_is_released_after_every_outcome() {
    let outcomes = vec![
        success("alice.test", None, None),
        remote_error(404, Some("Failed to fetch profile or profile not found")),
        remote_error(502, None),
        malformed(),
    ];
    for outcome in outcomes {
        let (controller, _service) = make_controller(MockService::new().respond(outcome));
        let mut state = InteractionState::new("alice.test", LanguageCode::En);

        controller.submit(&mut state).await.unwrap();

        assert!(!state.is_busy());
        assert_ne!(state.lifecycle(), &RequestLifecycle::Pending);
    }
}

#[tokio::test]
async fn test_resubmit_after_failure_clears_notice_and_succeeds() {
    let (controller, service) = make_controller(
        MockService::new()
            .respond(remote_error(429, Some("rate limited")))
            .respond(success("alice.test", None, None)),
    );
    let mut state = InteractionState::new("alice.test", LanguageCode::En);

    controller.submit(&mut state).await.unwrap();
    state.dismiss_notice();
    controller.submit(&mut state).await.unwrap();

    assert!(matches!(state.lifecycle(), RequestLifecycle::Succeeded(_)));
    assert!(state.notice().is_none());
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn test_set_language_always_returns_to_idle() {
    let setups: [fn() -> Result<AnalysisResponse, AnalysisError>; 2] = [
        || success("alice.test", None, None),
        || remote_error(429, Some("rate limited")),
    ];
    for setup in setups {
        for target in LanguageCode::ALL {
            let (controller, _service) = make_controller(MockService::new().respond(setup()));
            let mut state = InteractionState::new("alice.test", LanguageCode::Jp);
            controller.submit(&mut state).await.unwrap();
            assert_ne!(state.lifecycle(), &RequestLifecycle::Idle);

            state.set_language(target);

            assert_eq!(state.lifecycle(), &RequestLifecycle::Idle);
            assert_eq!(state.language(), target);
        }
    }
}

#[tokio::test]
async fn test_editing_handle_keeps_result() {
    let (controller, _service) =
        make_controller(MockService::new().respond(success("alice.test", None, None)));
    let mut state = InteractionState::new("alice.test", LanguageCode::En);
    controller.submit(&mut state).await.unwrap();

    state.set_handle_text("bob.test");

    assert!(matches!(state.lifecycle(), RequestLifecycle::Succeeded(_)));
    assert_eq!(state.handle_text(), "bob.test");
}

#[tokio::test]
async fn test_second_submission_while_pending_is_ignored() {
    let gate = Arc::new(Notify::new());
    let service = Arc::new(
        MockService::new()
            .gated(Arc::clone(&gate))
            .respond(success("alice.test", None, None)),
    );
    let mut app = App::new(Arc::clone(&service), InteractionState::new("alice.test", LanguageCode::En));

    app.submit();
    assert_eq!(app.state.lifecycle(), &RequestLifecycle::Pending);
    app.submit();

    gate.notify_one();
    assert!(app.wait_for_completion().await);

    assert_eq!(service.call_count(), 1);
    assert_eq!(app.poll_completions(), 0);
    assert!(!app.state.is_busy());
    assert!(matches!(app.state.lifecycle(), RequestLifecycle::Succeeded(_)));
}

#[tokio::test]
async fn test_late_response_after_language_switch_is_still_applied() {
    let gate = Arc::new(Notify::new());
    let service = Arc::new(
        MockService::new()
            .gated(Arc::clone(&gate))
            .respond(success("alice.test", None, None)),
    );
    let mut app = App::new(Arc::clone(&service), InteractionState::new("alice.test", LanguageCode::Jp));

    app.submit();
    app.select_language(LanguageCode::En);
    assert_eq!(app.state.lifecycle(), &RequestLifecycle::Idle);
    assert!(app.state.is_busy());

    // Still serialized: no second request while the first is outstanding
    app.submit();

    gate.notify_one();
    assert!(app.wait_for_completion().await);

    assert_eq!(service.call_count(), 1);
    assert_eq!(service.requests()[0].lang, LanguageCode::Jp);
    assert!(matches!(app.state.lifecycle(), RequestLifecycle::Succeeded(_)));
    assert!(!app.state.is_busy());
}
