//! End-to-end requests through the full router and session layer.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use docrack::server::{model::app::AppState, router::routes};
use docrack_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{body_text, csrf_token_from};

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.to_app_state::<AppState>())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// `name=value` part of the session cookie set on a response.
fn session_cookie(resp: &axum::response::Response) -> String {
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set the session cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

/// Expect the stylesheet to be served without a session
#[tokio::test]
async fn serves_stylesheet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/static/style.css", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
    assert!(body_text(resp).await.contains("data-theme"));

    Ok(())
}

/// Expect unknown paths to render the not found page
#[tokio::test]
async fn unknown_path_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/no/such/page", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect pages to send anonymous visitors to the login page
#[tokio::test]
async fn dashboard_redirects_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test).oneshot(get("/", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/login");

    Ok(())
}

/// Expect the API to answer 401 rather than redirecting
#[tokio::test]
async fn api_rejects_anonymous_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = app(&test).oneshot(get("/api/racks", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect a visitor to sign in, create a rack and see it on the dashboard
#[tokio::test]
async fn sign_in_and_create_rack() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME, TEST_PASSWORD)
        .build()
        .await?;
    let app = app(&test);

    let resp = app.clone().oneshot(get("/login", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);
    let csrf_token = csrf_token_from(&body_text(resp).await);

    let resp = app
        .clone()
        .oneshot(post_form(
            "/login",
            &cookie,
            &[
                ("csrf_token", csrf_token.as_str()),
                ("username", TEST_USERNAME),
                ("password", TEST_PASSWORD),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");
    let cookie = session_cookie(&resp);

    let resp = app
        .clone()
        .oneshot(post_form(
            "/racks",
            &cookie,
            &[
                ("csrf_token", csrf_token.as_str()),
                ("name", "Core A"),
                ("location", "Room 1"),
                ("height", "42"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = app.clone().oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Core A"));
    assert!(body.contains("Room 1"));

    let resp = app.oneshot(get("/api/racks", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect a wrong password to keep the visitor signed out
#[tokio::test]
async fn wrong_password_stays_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME, TEST_PASSWORD)
        .build()
        .await?;
    let app = app(&test);

    let resp = app.clone().oneshot(get("/login", None)).await.unwrap();
    let cookie = session_cookie(&resp);
    let csrf_token = csrf_token_from(&body_text(resp).await);

    let resp = app
        .clone()
        .oneshot(post_form(
            "/login",
            &cookie,
            &[
                ("csrf_token", csrf_token.as_str()),
                ("username", TEST_USERNAME),
                ("password", "wrong"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app.oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}
