//! Tests for the account and settings popup definitions.
//!
//! This module tests:
//! - Local validation short-circuits before any service call
//! - Service outcomes become the right toasts and snapshot updates
//! - Pre-show hooks adapt inputs and labels to the account's providers
//!
//! ## Test Strategy
//! Handlers run directly through `exec()` against a `wiremock` server and
//! emit actions on a channel; assertions inspect the drained actions.

mod helpers;

use helpers::*;
use serde_json::json;
use std::time::Duration;
use typist_client::{AuthProviderId, PersonalBests, Tag};
use typist_tui::action::Action;
use typist_tui::popup::definitions::{
    self, add_password_auth, apply_custom_font, clear_tag_pb, delete_account, ids,
    reset_personal_bests, reset_settings, unlink_discord, update_email, update_name,
    update_password,
};
use typist_tui::popup::{PopupDefinition, PopupEngine, PopupError, PopupRegistry};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(definition: &PopupDefinition, values: &[&str]) {
    let values = values.iter().map(|v| v.to_string()).collect();
    (definition.exec())(definition.invocation(), values).await;
}

async fn mock_reauth_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/reauthenticate"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// The last loader action lowered it.
fn ends_with_loader_down(actions: &[Action]) -> bool {
    matches!(
        actions.iter().rev().find(|a| matches!(a, Action::Loading(_))),
        Some(Action::Loading(false))
    )
}

#[tokio::test]
async fn test_update_email_mismatch_skips_service() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(
        &update_email(&services),
        &["pw", "new@example.com", "other@example.com"],
    )
    .await;

    let actions = drain(&mut rx);
    assert_eq!(toasts(&actions), vec!["Emails don't match"]);
    assert!(!actions.iter().any(|a| matches!(a, Action::Loading(_))));
}

#[tokio::test]
async fn test_update_email_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reauthenticate"))
        .and(body_json(json!({"email": "alice@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/users/email"))
        .and(body_json(json!({
            "newEmail": "new@example.com",
            "previousEmail": "alice@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Email updated"})))
        .expect(1)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(
        &update_email(&services),
        &["pw", "new@example.com", "new@example.com"],
    )
    .await;

    let actions = drain(&mut rx);
    assert_eq!(toasts(&actions), vec!["Email updated"]);
    assert!(ends_with_loader_down(&actions));
}

#[tokio::test]
async fn test_update_email_service_rejection_reports_message() {
    let server = MockServer::start().await;
    mock_reauth_ok(&server).await;
    Mock::given(method("PATCH"))
        .and(path("/users/email"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Email already in use"})),
        )
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(&update_email(&services), &["pw", "a@b.c", "a@b.c"]).await;

    let actions = drain(&mut rx);
    assert_eq!(
        toasts(&actions),
        vec!["Failed to update email: Email already in use"]
    );
    assert!(ends_with_loader_down(&actions));
}

#[tokio::test]
async fn test_update_email_hook_without_password_provider() {
    let (services, _rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Google));
    let mut registry = PopupRegistry::new();
    definitions::register_all(&mut registry, &services).unwrap();
    let mut engine = PopupEngine::new().with_fade(Duration::ZERO);

    engine
        .show(&mut registry, ids::UPDATE_EMAIL, vec![])
        .unwrap();

    let surface = engine.surface().unwrap();
    assert!(surface.form().is_empty());
    assert!(!surface.has_confirm());
    assert_eq!(surface.text(), "Password authentication is not enabled");
}

#[tokio::test]
async fn test_update_password_mismatch() {
    let (services, mut rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Password));

    run(&update_password(&services), &["old", "new1", "new2"]).await;

    assert_eq!(toasts(&drain(&mut rx)), vec!["New passwords don't match"]);
}

#[tokio::test]
async fn test_update_password_success() {
    let server = MockServer::start().await;
    mock_reauth_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/auth/password"))
        .and(body_json(json!({"password": "new-secret"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(
        &update_password(&services),
        &["old", "new-secret", "new-secret"],
    )
    .await;

    let actions = drain(&mut rx);
    assert_eq!(toasts(&actions), vec!["Password updated"]);
    assert!(ends_with_loader_down(&actions));
}

#[tokio::test]
async fn test_update_name_success_updates_snapshot() {
    let server = MockServer::start().await;
    mock_reauth_ok(&server).await;
    Mock::given(method("GET"))
        .and(path("/users/checkName/bob"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/users/name"))
        .and(body_json(json!({"name": "bob"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(&update_name(&services), &["pw", "bob"]).await;

    assert_eq!(toasts(&drain(&mut rx)), vec!["Name updated"]);
    assert_eq!(services.account().profile.unwrap().name, "bob");
}

#[tokio::test]
async fn test_update_name_taken_stops_before_update() {
    let server = MockServer::start().await;
    mock_reauth_ok(&server).await;
    Mock::given(method("GET"))
        .and(path("/users/checkName/bob"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Username unavailable"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/users/name"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(&update_name(&services), &["pw", "bob"]).await;

    let actions = drain(&mut rx);
    assert_eq!(
        toasts(&actions),
        vec!["Failed to check name: Username unavailable"]
    );
    assert!(ends_with_loader_down(&actions));
    assert_eq!(services.account().profile.unwrap().name, "alice");
}

#[tokio::test]
async fn test_update_name_hook_follows_provider() {
    let (services, _rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Google));
    let mut registry = PopupRegistry::new();
    definitions::register_all(&mut registry, &services).unwrap();
    let mut engine = PopupEngine::new().with_fade(Duration::ZERO);

    engine.show(&mut registry, ids::UPDATE_NAME, vec![]).unwrap();
    let surface = engine.surface().unwrap();
    assert!(surface.form().fields()[0].is_hidden());
    assert_eq!(surface.button_text(), "Reauthenticate to update");
    assert_eq!(surface.form().focused(), Some(1));

    *services.account.write().unwrap() = account_with(AuthProviderId::Password);
    engine.show(&mut registry, ids::UPDATE_NAME, vec![]).unwrap();
    let surface = engine.surface().unwrap();
    assert!(!surface.form().fields()[0].is_hidden());
    assert_eq!(surface.button_text(), "Update");
}

#[tokio::test]
async fn test_delete_account_wrong_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reauthenticate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "auth/wrong-password",
            "message": "The password is invalid"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(&delete_account(&services), &["nope"]).await;

    let actions = drain(&mut rx);
    assert_eq!(toasts(&actions), vec!["Incorrect password"]);
    assert!(ends_with_loader_down(&actions));
}

#[tokio::test]
async fn test_delete_account_google_runs_every_step() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/reauthenticate/google.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/auth/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Google));

    run(&delete_account(&services), &[]).await;

    let actions = drain(&mut rx);
    assert_eq!(
        toasts(&actions),
        vec![
            "Deleting stats...",
            "Deleting results...",
            "Deleting login information...",
            "Goodbye",
        ]
    );
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::Notify(_, msg, Some(ttl)) if msg == "Goodbye" && *ttl == Duration::from_secs(5)
    )));
}

#[tokio::test]
async fn test_delete_account_stops_when_results_fail() {
    let server = MockServer::start().await;
    mock_reauth_ok(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/auth/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Password));

    run(&delete_account(&services), &["pw"]).await;

    assert_eq!(
        toasts(&drain(&mut rx)),
        vec![
            "Deleting stats...",
            "Deleting results...",
            "Failed to delete user results: db down",
        ]
    );
}

#[tokio::test]
async fn test_add_password_auth_validates_both_pairs() {
    let (services, mut rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Google));
    let definition = add_password_auth(&services);

    run(&definition, &["a@b.c", "x@b.c", "pw", "pw"]).await;
    run(&definition, &["a@b.c", "a@b.c", "pw", "px"]).await;

    assert_eq!(
        toasts(&drain(&mut rx)),
        vec!["Emails don't match", "Passwords don't match"]
    );
}

#[tokio::test]
async fn test_add_password_auth_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/providers/password"))
        .and(body_json(json!({"email": "a@b.c", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with(AuthProviderId::Google));

    run(&add_password_auth(&services), &["a@b.c", "a@b.c", "pw", "pw"]).await;

    let actions = drain(&mut rx);
    assert_eq!(toasts(&actions), vec!["Password authentication added"]);
    assert!(ends_with_loader_down(&actions));
}

fn account_with_tag() -> typist_tui::AccountState {
    let mut state = account_with(AuthProviderId::Password);
    if let Some(profile) = state.profile.as_mut() {
        let mut bests = PersonalBests::default();
        bests.time.insert("60".to_string(), vec![Default::default()]);
        profile.tags.push(Tag {
            id: "t1".to_string(),
            name: "long".to_string(),
            personal_bests: bests,
        });
    }
    state
}

#[tokio::test]
async fn test_clear_tag_pb_success_clears_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/tags/t1/personalBest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Tag PB cleared",
            "data": {"resultCode": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with_tag());
    let mut definition = clear_tag_pb(&services);
    definition.parameters = vec!["t1".to_string(), "long".to_string()];

    run(&definition, &[]).await;

    let actions = drain(&mut rx);
    assert_eq!(toasts(&actions), vec!["Tag PB cleared."]);
    assert!(ends_with_loader_down(&actions));
    let profile = services.account().profile.unwrap();
    assert_eq!(profile.tags[0].personal_bests, PersonalBests::cleared());
}

#[tokio::test]
async fn test_clear_tag_pb_unexpected_result_code() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/tags/t1/personalBest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Nothing cleared",
            "data": {"resultCode": 0}
        })))
        .mount(&server)
        .await;
    let (services, mut rx) = services_for(&server.uri(), account_with_tag());
    let mut definition = clear_tag_pb(&services);
    definition.parameters = vec!["t1".to_string(), "long".to_string()];

    run(&definition, &[]).await;

    assert_eq!(
        toasts(&drain(&mut rx)),
        vec!["Something went wrong: Nothing cleared"]
    );
    let profile = services.account().profile.unwrap();
    assert_eq!(profile.tags[0].personal_bests.entry_count(), 1);
}

#[tokio::test]
async fn test_clear_tag_pb_hook_names_tag() {
    let (services, _rx) = services_for("http://127.0.0.1:9", account_with_tag());
    let mut registry = PopupRegistry::new();
    definitions::register_all(&mut registry, &services).unwrap();
    let mut engine = PopupEngine::new().with_fade(Duration::ZERO);

    engine
        .show(
            &mut registry,
            ids::CLEAR_TAG_PB,
            vec!["t1".to_string(), "long".to_string()],
        )
        .unwrap();

    assert_eq!(
        engine.surface().unwrap().text(),
        "Are you sure you want to clear PB for tag long?"
    );
}

#[tokio::test]
async fn test_reset_personal_bests_success() {
    let server = MockServer::start().await;
    mock_reauth_ok(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/users/personalBests"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let mut state = account_with(AuthProviderId::Password);
    if let Some(profile) = state.profile.as_mut() {
        profile
            .personal_bests
            .words
            .insert("10".to_string(), vec![Default::default()]);
    }
    let (services, mut rx) = services_for(&server.uri(), state);

    run(&reset_personal_bests(&services), &["pw"]).await;

    assert_eq!(
        toasts(&drain(&mut rx)),
        vec!["Personal bests have been reset"]
    );
    assert_eq!(
        services.account().profile.unwrap().personal_bests,
        PersonalBests::cleared()
    );
}

#[tokio::test]
async fn test_unlink_discord_failure_keeps_link() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/discord/unlink"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Discord down"})))
        .mount(&server)
        .await;
    let mut state = account_with(AuthProviderId::Password);
    if let Some(profile) = state.profile.as_mut() {
        profile.discord_id = Some("1234".to_string());
    }
    let (services, mut rx) = services_for(&server.uri(), state);

    run(&unlink_discord(&services), &[]).await;

    let actions = drain(&mut rx);
    assert_eq!(
        toasts(&actions),
        vec!["Failed to unlink Discord: Discord down"]
    );
    assert!(ends_with_loader_down(&actions));
    assert_eq!(
        services.account().profile.unwrap().discord_id.as_deref(),
        Some("1234")
    );
}

#[tokio::test]
async fn test_unlink_discord_success_clears_link() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/discord/unlink"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let mut state = account_with(AuthProviderId::Password);
    if let Some(profile) = state.profile.as_mut() {
        profile.discord_id = Some("1234".to_string());
    }
    let (services, mut rx) = services_for(&server.uri(), state);

    run(&unlink_discord(&services), &[]).await;

    assert_eq!(toasts(&drain(&mut rx)), vec!["Accounts unlinked"]);
    assert!(services.account().profile.unwrap().discord_id.is_none());
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let (services, mut rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Password));

    run(&unlink_discord(&services), &[]).await;

    let actions = drain(&mut rx);
    let messages = toasts(&actions);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Something went wrong: "));
    assert!(ends_with_loader_down(&actions));
}

#[tokio::test]
async fn test_apply_custom_font_normalizes_name() {
    let (services, mut rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Password));
    let definition = apply_custom_font(&services);

    run(&definition, &["Fira Code"]).await;
    run(&definition, &[""]).await;

    let actions = drain(&mut rx);
    assert_eq!(actions.len(), 1);
    assert!(matches!(&actions[0], Action::SetFontFamily(name) if name == "Fira_Code"));
}

#[tokio::test]
async fn test_reset_settings_requests_reset() {
    let (services, mut rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Password));

    run(&reset_settings(&services), &[]).await;

    let actions = drain(&mut rx);
    assert!(matches!(actions.as_slice(), [Action::ResetSettings]));
}

#[tokio::test]
async fn test_register_all_registers_every_popup_once() {
    let (services, _rx) = services_for("http://127.0.0.1:9", account_with(AuthProviderId::Password));
    let mut registry = PopupRegistry::new();

    definitions::register_all(&mut registry, &services).unwrap();

    assert_eq!(registry.len(), 10);
    for id in [
        ids::UPDATE_EMAIL,
        ids::UPDATE_NAME,
        ids::UPDATE_PASSWORD,
        ids::ADD_PASSWORD_AUTH,
        ids::DELETE_ACCOUNT,
        ids::CLEAR_TAG_PB,
        ids::APPLY_CUSTOM_FONT,
        ids::RESET_PERSONAL_BESTS,
        ids::RESET_SETTINGS,
        ids::UNLINK_DISCORD,
    ] {
        assert!(registry.contains(id), "missing {id}");
    }

    let err = definitions::register_all(&mut registry, &services).unwrap_err();
    assert_eq!(err, PopupError::DuplicateId(ids::UPDATE_EMAIL.to_string()));
}
