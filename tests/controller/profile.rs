//! Tests for password changes and the theme preference.

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Form,
};
use docrack::{
    model::{flash::FlashKind, user::Theme},
    server::{
        controller::profile::{change_password, profile, set_theme, PasswordForm, ThemeForm},
        model::session::flash::SessionFlash,
        service::auth::AuthService,
    },
};
use docrack_test_utils::prelude::*;
use entity::prelude::*;
use sea_orm::EntityTrait;

use crate::util::{body_text, sign_in};

fn password_form(csrf_token: &str, current: &str, new: &str, confirm: &str) -> Form<PasswordForm> {
    Form(PasswordForm {
        csrf_token: csrf_token.to_string(),
        current_password: current.to_string(),
        new_password: new.to_string(),
        confirm_password: confirm.to_string(),
    })
}

fn theme_form(csrf_token: &str, theme: &str, redirect_to: &str) -> Form<ThemeForm> {
    Form(ThemeForm {
        csrf_token: csrf_token.to_string(),
        theme: theme.to_string(),
        redirect_to: redirect_to.to_string(),
    })
}

/// Expect the old password to stop working once changed
#[tokio::test]
async fn changed_password_replaces_old_one() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_form(&csrf_token, TEST_PASSWORD, "correct horse", "correct horse"),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Password changed"));

    let auth = AuthService::new(&test.db);
    assert!(auth
        .authenticate(TEST_USERNAME, TEST_PASSWORD)
        .await
        .unwrap()
        .is_none());
    assert!(auth
        .authenticate(TEST_USERNAME, "correct horse")
        .await
        .unwrap()
        .is_some());

    Ok(())
}

/// Expect 422 and an unchanged password for a wrong current password
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_form(&csrf_token, "guess", "correct horse", "correct horse"),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(resp).await.contains("Current password is incorrect"));
    assert!(AuthService::new(&test.db)
        .authenticate(TEST_USERNAME, TEST_PASSWORD)
        .await
        .unwrap()
        .is_some());

    Ok(())
}

/// Expect 422 when the confirmation differs
#[tokio::test]
async fn rejects_mismatched_confirmation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_form(&csrf_token, TEST_PASSWORD, "correct horse", "correct horses"),
    )
    .await;

    assert_eq!(result.unwrap().status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 422 for a new password under eight characters
#[tokio::test]
async fn rejects_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_form(&csrf_token, TEST_PASSWORD, "short", "short"),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(resp).await.contains("at least 8 characters"));

    Ok(())
}

/// Expect 422 for a new password past the 72 bytes bcrypt hashes
#[tokio::test]
async fn rejects_overlong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let long = "x".repeat(73);

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_form(&csrf_token, TEST_PASSWORD, &long, &long),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(resp).await.contains("at most 72 bytes"));

    Ok(())
}

/// Expect the profile page for a signed-in user
#[tokio::test]
async fn shows_profile_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    sign_in(&test).await?;

    let result = profile(State(test.to_app_state()), test.session.clone()).await;

    let body = body_text(result.unwrap().into_response()).await;
    assert!(body.contains("Change password"));
    assert!(body.contains(TEST_USERNAME));

    Ok(())
}

/// Expect 303 to the login page without a signed-in user
#[tokio::test]
async fn profile_redirects_when_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = profile(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

    Ok(())
}

/// Expect the theme to be stored and the client sent back to the page it came from
#[tokio::test]
async fn stores_theme_and_returns_to_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (user_id, csrf_token) = sign_in(&test).await?;

    let result = set_theme(
        State(test.to_app_state()),
        test.session.clone(),
        theme_form(&csrf_token, "dark", "/connections"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/connections");
    let user = DocrackUser::find_by_id(user_id).one(&test.db).await?.unwrap();
    assert_eq!(user.theme, Theme::Dark.to_string());

    Ok(())
}

/// Expect an off-site redirect target to be replaced with the dashboard
#[tokio::test]
async fn ignores_external_redirect_target() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;

    let result = set_theme(
        State(test.to_app_state()),
        test.session.clone(),
        theme_form(&csrf_token, "light", "//evil.example.com/"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.headers()["location"], "/");

    Ok(())
}

/// Expect an unknown theme to be flashed and the stored theme kept
#[tokio::test]
async fn unknown_theme_is_flashed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (user_id, csrf_token) = sign_in(&test).await?;

    set_theme(
        State(test.to_app_state()),
        test.session.clone(),
        theme_form(&csrf_token, "sepia", "/"),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    let user = DocrackUser::find_by_id(user_id).one(&test.db).await?.unwrap();
    assert_eq!(user.theme, Theme::System.to_string());

    Ok(())
}
