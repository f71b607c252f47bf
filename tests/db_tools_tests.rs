//! Database-backed tools: anonymous short-circuit, persistence calls, merge.

mod common;

use common::{gateways_with, outcome_text, MockGraph, MockMemory, MockStore};
use pretty_assertions::assert_eq;
use serde_json::json;

use questline::events::SessionEvent;
use questline::gateway::StoredProfile;
use questline::state::SessionState;
use questline::tools::ToolRegistry;

#[tokio::test]
async fn anonymous_sessions_never_touch_the_store() {
    let registry = ToolRegistry::with_builtin_tools();
    let store = MockStore::empty();
    let gateways = gateways_with(MockMemory::empty(), MockGraph::empty(), store.clone());
    let mut session = SessionState::default();

    let calls = [
        ("save_profile_to_db", json!({})),
        ("add_skill_to_db", json!({ "skill": "rust" })),
        ("add_need_to_db", json!({ "need": "flexible hours" })),
        ("load_profile_from_db", json!({})),
    ];

    for (name, args) in calls {
        let result = registry
            .dispatch(name, args, &mut session, &gateways)
            .await
            .unwrap();

        let text = outcome_text(&result.outcome);
        assert!(text.contains("Not logged in"), "{name}: {text}");
        assert!(result.event.is_none(), "{name} must not emit a snapshot");
    }

    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn save_profile_upserts_for_logged_in_user() {
    let registry = ToolRegistry::with_builtin_tools();
    let store = MockStore::empty();
    let gateways = gateways_with(MockMemory::empty(), MockGraph::empty(), store.clone());
    let mut session = SessionState::new("user-42");

    registry
        .dispatch(
            "update_profile",
            json!({ "role": "CTO", "day_rate": "£700" }),
            &mut session,
            &gateways,
        )
        .await
        .unwrap();

    let result = registry
        .dispatch("save_profile_to_db", json!({}), &mut session, &gateways)
        .await
        .unwrap();

    assert_eq!(outcome_text(&result.outcome), "Profile saved.");
    assert_eq!(
        store.calls.lock().unwrap().as_slice(),
        ["upsert_profile:user-42"]
    );
}

#[tokio::test]
async fn skill_and_need_inserts_reach_the_store() {
    let registry = ToolRegistry::with_builtin_tools();
    let store = MockStore::empty();
    let gateways = gateways_with(MockMemory::empty(), MockGraph::empty(), store.clone());
    let mut session = SessionState::new("user-42");

    registry
        .dispatch(
            "add_skill_to_db",
            json!({ "skill": "rust" }),
            &mut session,
            &gateways,
        )
        .await
        .unwrap();
    registry
        .dispatch(
            "add_need_to_db",
            json!({ "need": "remote work" }),
            &mut session,
            &gateways,
        )
        .await
        .unwrap();

    assert_eq!(
        store.calls.lock().unwrap().as_slice(),
        ["insert_skill:user-42:rust", "insert_need:user-42:remote work"]
    );
}

#[tokio::test]
async fn store_failure_becomes_a_descriptive_string() {
    let registry = ToolRegistry::with_builtin_tools();
    let gateways = gateways_with(MockMemory::empty(), MockGraph::empty(), MockStore::failing());
    let mut session = SessionState::new("user-42");

    let result = registry
        .dispatch("save_profile_to_db", json!({}), &mut session, &gateways)
        .await
        .unwrap();

    assert!(outcome_text(&result.outcome).starts_with("Error saving profile:"));
}

#[tokio::test]
async fn load_merges_stored_profile_into_session() {
    let registry = ToolRegistry::with_builtin_tools();
    let store = MockStore::with_profile(StoredProfile {
        name: Some("Ada".into()),
        role: Some("Engineer".into()),
        location: None,
        day_rate: Some("£650".into()),
        availability: None,
        work_style: None,
        skills: vec!["rust".into(), "sql".into()],
        updated_at: None,
    });
    let gateways = gateways_with(MockMemory::empty(), MockGraph::empty(), store);
    let mut session = SessionState::new("user-42");

    // Session already holds a location and one overlapping skill.
    registry
        .dispatch(
            "update_profile",
            json!({ "location": "London" }),
            &mut session,
            &gateways,
        )
        .await
        .unwrap();
    registry
        .dispatch(
            "add_skills",
            json!({ "skills": ["rust"] }),
            &mut session,
            &gateways,
        )
        .await
        .unwrap();

    let result = registry
        .dispatch("load_profile_from_db", json!({}), &mut session, &gateways)
        .await
        .unwrap();

    assert_eq!(session.profile.name.as_deref(), Some("Ada"));
    assert_eq!(session.profile.role.as_deref(), Some("Engineer"));
    assert_eq!(session.profile.location.as_deref(), Some("London"));
    assert_eq!(session.profile.skills, vec!["rust", "sql"]);

    match result.event {
        Some(SessionEvent::StateSnapshot { snapshot }) => assert_eq!(snapshot, session),
        None => panic!("load must emit a snapshot when it changes state"),
    }
}

#[tokio::test]
async fn load_with_no_record_returns_sentinel() {
    let registry = ToolRegistry::with_builtin_tools();
    let store = MockStore::empty();
    let gateways = gateways_with(MockMemory::empty(), MockGraph::empty(), store.clone());
    let mut session = SessionState::new("user-42");

    let result = registry
        .dispatch("load_profile_from_db", json!({}), &mut session, &gateways)
        .await
        .unwrap();

    assert_eq!(outcome_text(&result.outcome), "No saved profile found.");
    assert_eq!(store.call_count(), 1);
}
