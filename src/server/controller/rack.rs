use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::{
            csrf::validate_csrf,
            flash::flash_outcome,
            form::{parse_number, CsrfForm},
            get_user::get_user_from_session,
            page::page_context,
        },
        error::Error,
        model::app::AppState,
        service::rack::{RackService, DEFAULT_RACK_HEIGHT},
    },
    view::pages::{dashboard::dashboard_page, rack::rack_page},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RackForm {
    pub csrf_token: String,
    pub name: String,
    pub location: String,
    /// Blank means the default height
    pub height: String,
}

/// Dashboard listing every rack
///
/// # Responses
/// - 200 (OK): Rack list with the add-rack form
/// - 303 (See Other): Not signed in, redirect to `/login`
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let ctx = page_context(&state, &session, "/").await?;
    let racks = RackService::new(&state.db).list_summaries().await?;

    Ok(dashboard_page(ctx, racks))
}

/// Create a rack, then return to the dashboard
///
/// # Responses
/// - 303 (See Other): Redirect to `/`, with a flash message describing the outcome
/// - 400 (Bad Request): CSRF token mismatch
pub async fn create_rack(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RackForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = match parse_number("Height", &form.height, DEFAULT_RACK_HEIGHT) {
        Ok(height) => {
            RackService::new(&state.db)
                .create(&form.name, &form.location, height)
                .await
        }
        Err(err) => Err(err.into()),
    };
    flash_outcome(&session, result, |rack| format!("Rack {} created", rack.name)).await?;

    Ok(Redirect::to("/"))
}

/// Rack diagram and equipment list
///
/// # Responses
/// - 200 (OK): Rack page
/// - 303 (See Other): Not signed in, redirect to `/login`
/// - 404 (Not Found): Unknown rack
pub async fn view_rack(
    State(state): State<AppState>,
    session: Session,
    Path(rack_id): Path<i32>,
) -> Result<Html<String>, Error> {
    let ctx = page_context(&state, &session, format!("/racks/{}", rack_id)).await?;
    let rack = RackService::new(&state.db).get_rack(rack_id).await?;

    Ok(rack_page(ctx, rack))
}

/// Update a rack's name, location and height
///
/// # Responses
/// - 303 (See Other): Redirect to the rack page with a flash message
/// - 404 (Not Found): Unknown rack
pub async fn edit_rack(
    State(state): State<AppState>,
    session: Session,
    Path(rack_id): Path<i32>,
    Form(form): Form<RackForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = match parse_number("Height", &form.height, DEFAULT_RACK_HEIGHT) {
        Ok(height) => {
            RackService::new(&state.db)
                .update(rack_id, &form.name, &form.location, height)
                .await
        }
        Err(err) => Err(err.into()),
    };
    flash_outcome(&session, result, |rack| format!("Rack {} saved", rack.name)).await?;

    Ok(Redirect::to(&format!("/racks/{}", rack_id)))
}

/// Delete a rack with everything mounted in it
///
/// # Responses
/// - 303 (See Other): Redirect to `/`
/// - 404 (Not Found): Unknown rack
pub async fn delete_rack(
    State(state): State<AppState>,
    session: Session,
    Path(rack_id): Path<i32>,
    Form(form): Form<CsrfForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = RackService::new(&state.db).delete(rack_id).await;
    flash_outcome(&session, result, |rack| format!("Rack {} deleted", rack.name)).await?;

    Ok(Redirect::to("/"))
}
