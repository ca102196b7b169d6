use profile_directory::{
    role_switched, AppError, Call, ClientError, Notification, Role, Scene, SceneAction,
    SceneError, LOAD_PROFILES_FAILED, ROLE_SWITCH_FAILED,
};

use crate::support::{app_with, profile};

#[tokio::test]
async fn entering_user_sets_guest_and_loads_once() {
    let (backend, mut app) = app_with(vec![profile("joe", 30, "chess")]);

    let transition = app.enter_as_user().await.unwrap();
    assert_eq!(transition.to, Scene::User);
    assert_eq!(app.scene(), Scene::User);

    assert_eq!(
        backend.calls(),
        vec![Call::SetRole(Role::Guest), Call::ListProfiles, Call::ListInterests]
    );
    assert_eq!(app.store().profiles(), vec![profile("joe", 30, "chess")]);
    assert_eq!(app.interests().len(), 5);
    assert_eq!(app.acknowledged_role(), Role::Guest);
    assert_eq!(
        app.notification(),
        Some(Notification::success(role_switched(Role::Guest)))
    );
    assert!(!app.is_loading());
}

#[tokio::test]
async fn entering_admin_sets_admin_and_loads_once() {
    let (backend, mut app) = app_with(Vec::new());

    app.enter_as_admin().await.unwrap();

    assert_eq!(app.scene(), Scene::Admin);
    assert_eq!(
        backend.calls(),
        vec![Call::SetRole(Role::Admin), Call::ListProfiles, Call::ListInterests]
    );
    assert_eq!(backend.role(), Some(Role::Admin));
    assert_eq!(app.acknowledged_role(), Role::Admin);
}

#[tokio::test]
async fn logout_does_not_reload() {
    for admin in [false, true] {
        let (backend, mut app) = app_with(Vec::new());
        if admin {
            app.enter_as_admin().await.unwrap();
        } else {
            app.enter_as_user().await.unwrap();
        }
        backend.clear_calls();

        let transition = app.logout().unwrap();
        assert_eq!(transition.to, Scene::Login);
        assert_eq!(app.scene(), Scene::Login);
        assert!(backend.calls().is_empty());
    }
}

#[tokio::test]
async fn reentering_the_same_scene_does_not_reload() {
    let (backend, mut app) = app_with(Vec::new());
    app.enter_as_user().await.unwrap();
    backend.clear_calls();

    let transition = app.enter_as_user().await.unwrap();
    assert!(transition.is_noop());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn cycle_reloads_on_every_entry() {
    let (backend, mut app) = app_with(Vec::new());
    app.enter_as_user().await.unwrap();
    app.logout().unwrap();
    app.enter_as_admin().await.unwrap();
    app.logout().unwrap();

    assert_eq!(backend.count_calls(|c| *c == Call::ListProfiles), 2);
    assert_eq!(backend.count_calls(|c| *c == Call::ListInterests), 2);
}

#[tokio::test]
async fn role_failure_does_not_block_entry() {
    let (backend, mut app) = app_with(vec![profile("joe", 30, "chess")]);
    backend.fail_next(ClientError::Rejected { status: 500 });

    app.enter_as_admin().await.unwrap();

    assert_eq!(app.scene(), Scene::Admin);
    assert_eq!(app.acknowledged_role(), Role::Guest);
    assert_eq!(app.store().profile_count(), 1);
    assert_eq!(app.notification(), Some(Notification::error(ROLE_SWITCH_FAILED)));
}

#[tokio::test]
async fn unreachable_backend_still_changes_scene() {
    let (backend, mut app) = app_with(vec![profile("joe", 30, "chess")]);
    backend.set_offline(true);

    app.enter_as_user().await.unwrap();

    assert_eq!(app.scene(), Scene::User);
    assert!(app.store().profiles().is_empty());
    assert!(app.interests().is_empty());
    assert!(!app.is_loading());
    // The profile failure is posted last and supersedes the role failure.
    assert_eq!(app.notification(), Some(Notification::error(LOAD_PROFILES_FAILED)));
}

#[tokio::test]
async fn switching_user_to_admin_requires_logout() {
    let (backend, mut app) = app_with(Vec::new());
    app.enter_as_user().await.unwrap();
    backend.clear_calls();

    let err = app.enter_as_admin().await.unwrap_err();
    assert_eq!(
        err,
        AppError::Scene(SceneError::InvalidTransition {
            from: Scene::User,
            action: SceneAction::EnterAsAdmin,
        })
    );
    assert_eq!(app.scene(), Scene::User);
    assert!(backend.calls().is_empty());
}
