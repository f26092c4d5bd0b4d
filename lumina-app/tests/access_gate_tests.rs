//! Access gate tests
//!
//! Validates the CheckingSession → Granted/Denied machine against a live
//! session store: no protected content before the first notification, a
//! single replacing redirect per denial, live invalidation while mounted,
//! and the out-of-order notification guard.

use chrono::Utc;
use lumina_app::Effect;
use lumina_app::domains::access::{AccessGate, GateState};
use lumina_core::SessionStore;
use lumina_model::{DesignerProfile, Locale, Plan, Session, UserId};

fn login_redirect(locale: Locale) -> Effect {
    Effect::Navigate {
        path: format!("/{locale}/login"),
        replace: true,
    }
}

#[test]
fn gate_checks_session_before_rendering_anything() {
    let store = SessionStore::new();
    let gate = AccessGate::mount(&store, Locale::Es);
    assert_eq!(gate.state(), GateState::CheckingSession);
    assert!(!gate.renders_subtree());
}

#[test]
fn anonymous_first_notification_redirects_once() {
    let store = SessionStore::new();
    let mut gate = AccessGate::mount(&store, Locale::Es);

    let effects = gate.observe();
    assert_eq!(effects, vec![login_redirect(Locale::Es)]);
    assert_eq!(gate.state(), GateState::Denied);
    assert!(!gate.renders_subtree(), "no denied flash of the subtree");

    // A repeated anonymous notification must not redirect again
    let effects = gate.observe();
    assert!(effects.is_empty());
}

#[test]
fn authenticated_first_notification_grants_without_redirect() {
    let store = SessionStore::new();
    let user = UserId::new();
    store.sign_in(user);

    let mut gate = AccessGate::mount(&store, Locale::En);
    let effects = gate.observe();
    assert!(effects.is_empty());
    assert_eq!(gate.state(), GateState::Granted { user_id: user });
    assert!(gate.renders_subtree());
}

#[tokio::test]
async fn live_invalidation_unmounts_and_redirects_exactly_once() {
    let store = SessionStore::new();
    store.sign_in(UserId::new());
    let mut gate = AccessGate::mount(&store, Locale::Zh);
    gate.observe();
    assert!(gate.renders_subtree());

    // Session revoked while the protected page is open
    store.sign_out();
    let effects = gate.changed().await.expect("store alive");
    assert_eq!(effects, vec![login_redirect(Locale::Zh)]);
    assert!(!gate.renders_subtree());

    // No second redirect without an intervening grant
    assert!(gate.observe().is_empty());
}

#[tokio::test]
async fn regrant_after_denial_allows_a_future_redirect() {
    let store = SessionStore::new();
    let mut gate = AccessGate::mount(&store, Locale::En);
    assert_eq!(gate.observe(), vec![login_redirect(Locale::En)]);

    store.sign_in(UserId::new());
    let effects = gate.changed().await.expect("store alive");
    assert!(effects.is_empty());
    assert!(gate.renders_subtree());

    store.sign_out();
    let effects = gate.changed().await.expect("store alive");
    assert_eq!(effects, vec![login_redirect(Locale::En)]);
}

#[test]
fn out_of_order_notification_cannot_roll_state_back() {
    let store = SessionStore::new();
    let mut gate = AccessGate::mount(&store, Locale::En);
    let user = UserId::new();

    gate.on_session(2, Session::Authenticated { user_id: user });
    assert!(gate.renders_subtree());

    // An older resolution arriving late must be dropped silently
    let effects = gate.on_session(1, Session::Anonymous);
    assert!(effects.is_empty());
    assert_eq!(gate.state(), GateState::Granted { user_id: user });
}

#[test]
fn incomplete_profile_redirects_to_complete_profile_flow() {
    let store = SessionStore::new();
    let user = UserId::new();
    store.sign_in(user);
    let mut gate = AccessGate::mount(&store, Locale::Es);
    gate.observe();

    let mut profile = DesignerProfile {
        id: user,
        display_name: String::new(),
        bio: String::new(),
        logo_file: None,
        plan: Plan::Free,
        profile_complete: false,
        created_at: Utc::now(),
    };
    assert_eq!(
        gate.on_profile(&profile),
        vec![Effect::Navigate {
            path: "/es/complete-profile".to_string(),
            replace: true,
        }]
    );

    profile.profile_complete = true;
    assert!(gate.on_profile(&profile).is_empty());
}

#[test]
fn unmount_detaches_the_subscription() {
    let store = SessionStore::new();
    let gate = AccessGate::mount(&store, Locale::En);
    drop(gate);
    // Writers must not notice departed subscribers
    store.sign_in(UserId::new());
    assert!(store.is_authenticated());
}
