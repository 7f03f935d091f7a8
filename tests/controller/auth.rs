//! Tests for signing in and out.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use docrack::server::{
    controller::auth::{login, login_form, logout, LoginForm},
    model::session::{csrf::SessionCsrf, user::SessionUserId},
};
use docrack_test_utils::prelude::*;

use crate::util::{body_text, sign_in};

fn credentials(csrf_token: &str, username: &str, password: &str) -> Form<LoginForm> {
    Form(LoginForm {
        csrf_token: csrf_token.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Expect 303 to the dashboard and the user stored in session for correct credentials
#[tokio::test]
async fn signs_in_with_correct_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user(TEST_USERNAME, TEST_PASSWORD).await?;
    let csrf_token = SessionCsrf::get_or_create(&test.session).await.unwrap();

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials(&csrf_token, TEST_USERNAME, TEST_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");
    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user, Some(user.id));

    Ok(())
}

/// Expect 401 with the login form and message for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user(TEST_USERNAME, TEST_PASSWORD)
        .build()
        .await?;
    let csrf_token = SessionCsrf::get_or_create(&test.session).await.unwrap();

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials(&csrf_token, TEST_USERNAME, "not the password"),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_text(resp).await;
    assert!(body.contains("Invalid username or password"));
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 401 for an unknown username, with the same message as a wrong password
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user(TEST_USERNAME, TEST_PASSWORD)
        .build()
        .await?;
    let csrf_token = SessionCsrf::get_or_create(&test.session).await.unwrap();

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials(&csrf_token, "nobody", TEST_PASSWORD),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(resp).await.contains("Invalid username or password"));

    Ok(())
}

/// Expect 400 when the form carries a different CSRF token
#[tokio::test]
async fn rejects_csrf_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user(TEST_USERNAME, TEST_PASSWORD)
        .build()
        .await?;
    SessionCsrf::get_or_create(&test.session).await.unwrap();

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        credentials("forged", TEST_USERNAME, TEST_PASSWORD),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect the login form with a CSRF token for an anonymous session
#[tokio::test]
async fn shows_login_form_when_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = login_form(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let token = SessionCsrf::get(&test.session).await.unwrap().unwrap();
    assert!(body_text(resp).await.contains(&token));

    Ok(())
}

/// Expect a signed-in user to be sent to the dashboard instead of the login form
#[tokio::test]
async fn redirects_signed_in_user_away_from_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test).await?;

    let result = login_form(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");

    Ok(())
}

/// Expect 303 to the login page and the user removed from session
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test).await?;

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/login");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect a redirect even when nobody was signed in
#[tokio::test]
async fn logout_without_session_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}
