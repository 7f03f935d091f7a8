use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::csrf::validate_csrf,
        error::Error,
        model::{
            app::AppState,
            session::{csrf::SessionCsrf, user::SessionUserId},
        },
        service::{auth::AuthService, user::UserService},
    },
    view::pages::login::login_page,
};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login page
///
/// # Responses
/// - 200 (OK): Login form
/// - 303 (See Other): Already signed in, redirect to the dashboard
/// - 500 (Internal Server Error): Session or database error
pub async fn login_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    if let Some(user_id) = SessionUserId::get(&session).await? {
        if UserService::new(&state.db).get_user(user_id).await?.is_some() {
            return Ok(Redirect::to("/").into_response());
        }
    }

    let csrf_token = SessionCsrf::get_or_create(&session).await?;

    Ok(login_page(csrf_token, String::new(), None).into_response())
}

/// Check credentials and sign the user in
///
/// The session ID is cycled on success.
///
/// # Responses
/// - 303 (See Other): Signed in, redirect to the dashboard
/// - 400 (Bad Request): CSRF token mismatch
/// - 401 (Unauthorized): Wrong username or password, login form shown again
/// - 500 (Internal Server Error): Session, hashing or database error
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, Error> {
    validate_csrf(&session, &form.csrf_token).await?;

    let auth_service = AuthService::new(&state.db);
    let Some(user) = auth_service
        .authenticate(&form.username, &form.password)
        .await?
    else {
        tracing::debug!("Failed login attempt for username {:?}", form.username);

        let csrf_token = SessionCsrf::get_or_create(&session).await?;
        let page = login_page(
            csrf_token,
            form.username,
            Some("Invalid username or password".to_string()),
        );

        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    };

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(user_id = %user.id, "User {:?} signed in", user.username);

    Ok(Redirect::to("/").into_response())
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 303 (See Other): Redirect to the login page
/// - 500 (Internal Server Error): There was an issue reading the session
pub async fn logout(session: Session) -> Result<Redirect, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::to("/login"))
}
