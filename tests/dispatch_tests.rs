//! Dispatch-contract tests: lookup, validation, and snapshot emission.

mod common;

use common::quiet_gateways;
use pretty_assertions::assert_eq;
use serde_json::json;

use questline::error::QuestlineError;
use questline::events::SessionEvent;
use questline::state::SessionState;
use questline::tools::{ToolOutcome, ToolRegistry};

#[tokio::test]
async fn unknown_tool_is_an_error() {
    let registry = ToolRegistry::with_builtin_tools();
    let mut session = SessionState::default();

    let err = registry
        .dispatch("summon_dragon", json!({}), &mut session, &quiet_gateways())
        .await
        .unwrap_err();

    assert!(matches!(err, QuestlineError::UnknownTool(name) if name == "summon_dragon"));
}

#[tokio::test]
async fn missing_required_argument_rejected_before_execution() {
    let registry = ToolRegistry::with_builtin_tools();
    let mut session = SessionState::default();

    let err = registry
        .dispatch("set_consent", json!({}), &mut session, &quiet_gateways())
        .await
        .unwrap_err();

    assert!(matches!(err, QuestlineError::InvalidArgument(_)));
    assert_eq!(session.revision, 0);
}

#[tokio::test]
async fn wrong_argument_type_rejected() {
    let registry = ToolRegistry::with_builtin_tools();
    let mut session = SessionState::default();

    let err = registry
        .dispatch(
            "set_consent",
            json!({ "consent_type": "linkedin_access", "granted": "yes" }),
            &mut session,
            &quiet_gateways(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, QuestlineError::InvalidArgument(_)));
    assert!(session.consents.is_empty());
}

#[tokio::test]
async fn mutating_call_attaches_snapshot_deep_equal_to_state() {
    let registry = ToolRegistry::with_builtin_tools();
    let mut session = SessionState::default();

    let result = registry
        .dispatch(
            "add_skills",
            json!({ "skills": ["rust", "postgres"] }),
            &mut session,
            &quiet_gateways(),
        )
        .await
        .unwrap();

    match result.outcome {
        ToolOutcome::StateChanged { state } => assert_eq!(state, session),
        other => panic!("expected state_changed, got {other:?}"),
    }
    match result.event {
        Some(SessionEvent::StateSnapshot { snapshot }) => assert_eq!(snapshot, session),
        None => panic!("mutating call must attach a snapshot event"),
    }
}

#[tokio::test]
async fn read_only_call_attaches_no_event() {
    let registry = ToolRegistry::with_builtin_tools();
    let mut session = SessionState::default();

    let result = registry
        .dispatch("get_profile", json!({}), &mut session, &quiet_gateways())
        .await
        .unwrap();

    assert!(result.event.is_none());
    assert!(matches!(result.outcome, ToolOutcome::Data { .. }));
}

#[tokio::test]
async fn data_returning_mutation_still_emits_snapshot() {
    // search_jobs returns the job list as data but bumps jobs_shown.
    let registry = ToolRegistry::with_builtin_tools();
    let mut session = SessionState::default();

    let result = registry
        .dispatch(
            "search_jobs",
            json!({ "role": "Engineer", "location": "London" }),
            &mut session,
            &quiet_gateways(),
        )
        .await
        .unwrap();

    assert!(matches!(result.outcome, ToolOutcome::Data { .. }));
    match result.event {
        Some(SessionEvent::StateSnapshot { snapshot }) => {
            assert_eq!(snapshot.jobs_shown, 3);
            assert_eq!(snapshot, session);
        }
        None => panic!("search_jobs mutates jobs_shown and must emit a snapshot"),
    }
}

#[tokio::test]
async fn snapshot_tracks_every_kind_of_mutation() {
    let registry = ToolRegistry::with_builtin_tools();
    let gateways = quiet_gateways();
    let mut session = SessionState::default();

    let calls = [
        ("update_profile", json!({ "role": "CTO", "location": "Remote" })),
        ("add_skills", json!({ "skills": ["rust"] })),
        ("set_skills", json!({ "skills": ["golang", "sql"] })),
        ("set_consent", json!({ "consent_type": "linkedin_access", "granted": true })),
        ("set_stage", json!({ "stage": "enrichment" })),
    ];

    for (name, args) in calls {
        let result = registry
            .dispatch(name, args, &mut session, &gateways)
            .await
            .unwrap();

        let Some(SessionEvent::StateSnapshot { snapshot }) = result.event else {
            panic!("{name} should emit a snapshot");
        };
        assert_eq!(snapshot, session, "{name} snapshot must mirror live state");
    }
}

#[tokio::test]
async fn descriptors_expose_the_full_tool_set() {
    let registry = ToolRegistry::with_builtin_tools();

    let descriptors = registry.descriptors();

    assert_eq!(descriptors.len(), 19);
    assert!(descriptors.iter().any(|d| d.name == "update_profile"));
    assert!(descriptors.iter().any(|d| d.name == "load_profile_from_db"));
    for descriptor in &descriptors {
        assert!(!descriptor.description.is_empty());
        assert_eq!(descriptor.parameters.schema["type"], "object");
    }
}

#[tokio::test]
async fn registration_order_is_preserved() {
    let registry = ToolRegistry::with_builtin_tools();
    let names = registry.names();

    assert_eq!(names.first(), Some(&"get_profile"));
    assert_eq!(names.last(), Some(&"load_profile_from_db"));
}
