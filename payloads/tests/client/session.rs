use payloads::{ClientError, SessionStatus};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn unauthorized_marks_session_expired() {
    let app = spawn_app().await;
    app.require_session(true);
    let mut expiry = app.client.session.subscribe();

    let result = app.client.list_exhibitions().await;

    assert_status_code(result, StatusCode::UNAUTHORIZED);
    assert_eq!(app.client.session.status(), SessionStatus::Expired);
    assert!(expiry.has_changed().unwrap());
}

#[tokio::test]
async fn unauthorized_error_reaches_caller_unchanged() {
    let app = spawn_app().await;
    app.require_session(true);

    let error = app.client.list_exhibitions().await.unwrap_err();

    assert!(error.is_unauthorized());
    match error {
        ClientError::APIError(status, body) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "Invalid login session");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }
}

#[tokio::test]
async fn session_cookie_is_sent_with_requests() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.require_session(true);

    app.login("ines").await?;
    let exhibitions = app.client.list_exhibitions().await?;

    assert!(!exhibitions.is_empty());
    assert_eq!(app.client.session.status(), SessionStatus::Active);
    Ok(())
}

#[tokio::test]
async fn current_user_without_session() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_eq!(app.client.current_user().await?, None);
    Ok(())
}

#[tokio::test]
async fn current_user_restores_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.require_session(true);
    assert!(app.client.list_exhibitions().await.is_err());
    assert_eq!(app.client.session.status(), SessionStatus::Expired);

    app.login("marta").await?;
    let profile = app.client.current_user().await?.expect("signed in");

    assert_eq!(profile.username, "marta");
    assert_eq!(profile.shown_name(), "marta");
    assert_eq!(app.client.session.status(), SessionStatus::Active);
    Ok(())
}

#[tokio::test]
async fn logout_drops_the_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login("ines").await?;
    assert!(app.client.current_user().await?.is_some());

    app.client.logout().await?;

    assert_eq!(app.client.current_user().await?, None);
    Ok(())
}
