use profile_directory::{
    AppError, Call, ClientError, CommitOutcome, EditSession, Notification, RENAMED,
    RENAME_FAILED,
};

use crate::support::{profile, user_app};

fn renames(calls: &[Call]) -> usize {
    calls
        .iter()
        .filter(|c| matches!(c, Call::RenameProfile { .. }))
        .count()
}

#[tokio::test]
async fn second_begin_abandons_first_without_calling_backend() {
    let (backend, mut app) =
        user_app(vec![profile("alice", 30, "x"), profile("bob", 40, "y")]).await;

    app.begin_edit("alice").unwrap();
    app.set_rename_draft("alicia");
    app.begin_edit("bob").unwrap();

    assert_eq!(
        app.edit_session(),
        Some(&EditSession {
            target: "bob".into(),
            draft: "bob".into(),
        })
    );
    assert_eq!(renames(&backend.calls()), 0);
}

#[tokio::test]
async fn commit_renames_and_reloads() {
    let (backend, mut app) = user_app(vec![profile("bob", 40, "y")]).await;

    app.begin_edit("bob").unwrap();
    app.set_rename_draft("robert");
    let outcome = app.commit_edit().await.unwrap();

    assert_eq!(outcome, CommitOutcome::Renamed);
    assert_eq!(
        backend.calls(),
        vec![
            Call::RenameProfile {
                current: "bob".into(),
                new_name: "robert".into(),
            },
            Call::ListProfiles,
        ]
    );
    assert_eq!(app.edit_session(), None);
    assert_eq!(app.store().profiles(), vec![profile("robert", 40, "y")]);
    assert_eq!(app.notification(), Some(Notification::success(RENAMED)));
}

#[tokio::test]
async fn failed_rename_leaves_session_open() {
    let (backend, mut app) = user_app(vec![profile("bob", 40, "y")]).await;
    backend.fail_next(ClientError::Rejected { status: 500 });

    app.begin_edit("bob").unwrap();
    app.set_rename_draft("robert");
    let err = app.commit_edit().await.unwrap_err();

    assert_eq!(err, AppError::Client(ClientError::Rejected { status: 500 }));
    assert_eq!(app.edit_session().map(|s| s.draft.as_str()), Some("robert"));
    assert_eq!(app.notification(), Some(Notification::error(RENAME_FAILED)));
    assert_eq!(app.store().profiles(), vec![profile("bob", 40, "y")]);
}

#[tokio::test]
async fn blank_draft_sends_nothing() {
    let (backend, mut app) = user_app(vec![profile("bob", 40, "y")]).await;
    app.begin_edit("bob").unwrap();
    app.set_rename_draft("  ");

    assert_eq!(app.commit_edit().await.unwrap(), CommitOutcome::Blank);
    assert!(app.edit_session().is_some());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn unchanged_draft_closes_without_sending() {
    let (backend, mut app) = user_app(vec![profile("bob", 40, "y")]).await;
    app.begin_edit("bob").unwrap();

    assert_eq!(app.commit_edit().await.unwrap(), CommitOutcome::Unchanged);
    assert!(app.edit_session().is_none());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn commit_without_session_is_a_noop() {
    let (backend, mut app) = user_app(Vec::new()).await;
    assert_eq!(app.commit_edit().await.unwrap(), CommitOutcome::NoSession);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn logout_abandons_edit() {
    let (_backend, mut app) = user_app(vec![profile("bob", 40, "y")]).await;
    app.begin_edit("bob").unwrap();
    app.logout().unwrap();
    assert!(app.edit_session().is_none());
    assert!(matches!(
        app.begin_edit("bob"),
        Err(AppError::NotPermitted { .. })
    ));
}
