use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{flash::FlashMessage, user::Theme},
    server::{
        controller::util::{
            csrf::validate_csrf, form::local_redirect_target, get_user::get_user_from_session,
            page::page_context,
        },
        error::{validation::ValidationError, Error},
        model::{app::AppState, session::flash::SessionFlash},
        service::user::UserService,
    },
    view::pages::profile::profile_page,
};

#[derive(Deserialize)]
pub struct PasswordForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub redirect_to: String,
}

/// Show the signed-in user's profile
///
/// # Responses
/// - 200 (OK): Profile page with the theme selector and password form
/// - 303 (See Other): Not signed in, redirect to /login
pub async fn profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let ctx = page_context(&state, &session, "/profile").await?;

    Ok(profile_page(ctx))
}

/// Change the signed-in user's password
///
/// # Responses
/// - 200 (OK): Password changed, profile page with a confirmation
/// - 400 (Bad Request): CSRF token mismatch
/// - 422 (Unprocessable Entity): Wrong current password, mismatching confirmation, too short or too long
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PasswordForm>,
) -> Result<Response, Error> {
    let user = get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = UserService::new(&state.db)
        .change_password(
            user.id,
            &form.current_password,
            &form.new_password,
            &form.confirm_password,
            state.password_hash_cost,
        )
        .await;

    let (status, message) = match result {
        Ok(()) => (
            StatusCode::OK,
            FlashMessage::success("Password changed"),
        ),
        Err(Error::ValidationError(err)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            FlashMessage::error(err.to_string()),
        ),
        Err(err) => return Err(err),
    };

    let mut ctx = page_context(&state, &session, "/profile").await?;
    ctx.flash = Some(message);

    Ok((status, profile_page(ctx)).into_response())
}

/// Store the signed-in user's theme and go back to the page the form was on
///
/// # Responses
/// - 303 (See Other): Redirect to `redirect_to` when it is a local path, else to `/`
/// - 400 (Bad Request): CSRF token mismatch
pub async fn set_theme(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect, Error> {
    let user = get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let target = local_redirect_target(&form.redirect_to);

    match form.theme.parse::<Theme>() {
        Ok(theme) => {
            UserService::new(&state.db).set_theme(user.id, theme).await?;
        }
        Err(_) => {
            let err = ValidationError::UnknownTheme(form.theme.clone());
            SessionFlash::insert(&session, FlashMessage::error(err.to_string())).await?;
        }
    }

    Ok(Redirect::to(target))
}
