use profile_directory::{
    DirectoryApp, DirectoryConfig, InMemoryDirectory, Profile, Role, Scene,
};

use crate::backend;

#[tokio::test]
async fn user_session_over_http() {
    let dir = InMemoryDirectory::with_profiles(vec![Profile::new("joe", 30, "Chess")]);
    let base = backend::start(dir.clone()).await;
    let mut app = DirectoryApp::connect(&DirectoryConfig::new().with_api_base(base)).unwrap();

    app.enter_as_user().await.unwrap();
    assert_eq!(app.scene(), Scene::User);
    assert_eq!(app.acknowledged_role(), Role::Guest);
    assert_eq!(app.store().profile_count(), 1);
    assert_eq!(app.interests().len(), 5);

    let draft = app.draft_mut();
    draft.set_username("ann");
    assert!(draft.set_age("25"));
    draft.set_interest("Hiking");
    app.create_profile().await.unwrap();

    app.set_search("hik");
    assert_eq!(app.search_view(), vec![Profile::new("ann", 25, "Hiking")]);
    assert_eq!(dir.profiles().len(), 2);
}

#[tokio::test]
async fn admin_session_over_http() {
    let dir = InMemoryDirectory::with_profiles(vec![
        Profile::new("joe", 30, "Chess"),
        Profile::new("ann", 25, "Hiking"),
    ]);
    let base = backend::start(dir.clone()).await;
    let mut app = DirectoryApp::connect(&DirectoryConfig::new().with_api_base(base)).unwrap();

    app.enter_as_admin().await.unwrap();
    app.delete_profile("ann").await.unwrap();

    let view = app.admin_view().unwrap();
    assert_eq!(view.total_profiles, 1);
    assert_eq!(view.role, Role::Admin);
    assert_eq!(dir.role(), Some(Role::Admin));
}
