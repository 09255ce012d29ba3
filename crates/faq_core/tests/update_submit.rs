use std::sync::Once;
use std::time::Duration;

use faq_core::{update, AppState, Effect, FormInput, Msg, Phase, SUBMIT_FAILED};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(faq_logging::initialize_for_tests);
}

fn submit(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::Submitted(FormInput::new(url)))
}

#[test]
fn invalid_url_shows_error_without_effects() {
    init_logging();
    const MALFORMED: &str = "Please enter a valid URL (e.g. https://example.com)";
    const NO_HOST: &str = "URL must include a host";
    for (url, expected) in [
        ("", MALFORMED),
        ("not a url", MALFORMED),
        ("example.com", MALFORMED),
        ("mailto:someone@example.com", NO_HOST),
        ("file:///etc/hosts", NO_HOST),
    ] {
        let (mut state, effects) = submit(AppState::new(), url);
        let view = state.view();

        assert!(effects.is_empty(), "no request expected for {url:?}");
        assert_eq!(view.phase, Phase::Errored);
        assert_eq!(view.error.as_deref(), Some(expected), "message for {url:?}");
        assert!(view.submit_enabled);
        assert!(!view.busy_visible);
        assert!(state.consume_dirty());
    }
}

#[test]
fn valid_submit_disables_form_and_creates_job() {
    init_logging();
    let input = FormInput {
        url: "  https://example.com/faq ".to_string(),
        platform: "fb".to_string(),
        language: "de".to_string(),
        faq_count: 5,
    };
    let (state, effects) = update(AppState::new(), Msg::Submitted(input));
    let view = state.view();

    assert_eq!(view.phase, Phase::Submitting);
    assert!(!view.submit_enabled);
    assert!(view.busy_visible);
    assert_eq!(view.busy_label, "Submitting...");
    assert_eq!(view.error, None);
    assert_eq!(
        effects,
        vec![Effect::CreateJob {
            input: FormInput {
                url: "https://example.com/faq".to_string(),
                platform: "fb".to_string(),
                language: "de".to_string(),
                faq_count: 5,
            }
        }]
    );
}

#[test]
fn submit_ignored_while_busy() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, effects) = submit(state, "https://other.example.com");
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Submitting);

    let (state, _) = update(
        state,
        Msg::JobCreated {
            job_id: "job-1".to_string(),
        },
    );
    let (state, effects) = submit(state, "https://other.example.com");
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Polling);
}

#[test]
fn job_created_polls_that_exact_id_immediately() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, effects) = update(
        state,
        Msg::JobCreated {
            job_id: "4f6c-uuid".to_string(),
        },
    );

    assert_eq!(state.phase(), Phase::Polling);
    assert_eq!(state.job_id(), Some("4f6c-uuid"));
    assert_eq!(
        effects,
        vec![Effect::SchedulePoll {
            job_id: "4f6c-uuid".to_string(),
            delay: Duration::ZERO,
        }]
    );
}

#[test]
fn submit_failure_shows_server_message_and_reenables() {
    init_logging();
    let (state, _) = submit(AppState::new(), "https://example.com");
    let (state, effects) = update(
        state,
        Msg::SubmitFailed {
            error: Some("Invalid platform 'zz'.".to_string()),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.phase, Phase::Errored);
    assert_eq!(view.error.as_deref(), Some("Invalid platform 'zz'."));
    assert!(view.submit_enabled);
    assert!(!view.busy_visible);
}

#[test]
fn submit_failure_without_message_uses_fallback() {
    init_logging();
    for error in [None, Some("   ".to_string())] {
        let (state, _) = submit(AppState::new(), "https://example.com");
        let (state, _) = update(state, Msg::SubmitFailed { error });
        assert_eq!(state.error(), Some(SUBMIT_FAILED));
    }
}

#[test]
fn resubmit_after_error_clears_error() {
    init_logging();
    let (state, _) = submit(AppState::new(), "nope");
    assert_eq!(state.phase(), Phase::Errored);

    let (state, effects) = submit(state, "https://example.com");
    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(state.view().error, None);
    assert_eq!(effects.len(), 1);
}

#[test]
fn stray_job_created_is_ignored_when_idle() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::JobCreated {
            job_id: "late".to_string(),
        },
    );
    assert_eq!(next, state);
    assert!(effects.is_empty());
}
