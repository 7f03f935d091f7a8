use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::{
        csrf::validate_csrf,
        flash::flash_outcome,
        form::{parse_required_number, CsrfForm},
        get_user::get_user_from_session,
    },
    error::Error,
    model::app::AppState,
    service::{connection::ConnectionService, port::PortService},
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct PortsForm {
    pub csrf_token: String,
    /// Comma-separated port names
    pub names: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ConnectForm {
    pub csrf_token: String,
    pub target_port_id: String,
}

/// Add ports to equipment from a comma-separated list
///
/// # Responses
/// - 303 (See Other): Redirect to the equipment page with a flash message
/// - 404 (Not Found): Unknown equipment
pub async fn add_ports(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
    Form(form): Form<PortsForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = PortService::new(&state.db)
        .add_ports(equipment_id, &form.names)
        .await;
    flash_outcome(&session, result, |ports| {
        format!("Added {} port(s)", ports.len())
    })
    .await?;

    Ok(Redirect::to(&format!("/equipment/{}", equipment_id)))
}

/// Delete a port and its connection
///
/// # Responses
/// - 303 (See Other): Redirect to the equipment page
/// - 404 (Not Found): Unknown port
pub async fn delete_port(
    State(state): State<AppState>,
    session: Session,
    Path(port_id): Path<i32>,
    Form(form): Form<CsrfForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let port = PortService::new(&state.db).delete(port_id).await?;
    let equipment_id = port.equipment_id;
    flash_outcome(&session, Ok(port), |port| {
        format!("Port {} deleted", port.name)
    })
    .await?;

    Ok(Redirect::to(&format!("/equipment/{}", equipment_id)))
}

/// Connect a port to another free port
///
/// # Responses
/// - 303 (See Other): Redirect to the equipment page with a flash message
/// - 404 (Not Found): Unknown port or target port
pub async fn connect_port(
    State(state): State<AppState>,
    session: Session,
    Path(port_id): Path<i32>,
    Form(form): Form<ConnectForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let port = PortService::new(&state.db).get(port_id).await?;

    let result = match parse_required_number("Target port", &form.target_port_id) {
        Ok(target_port_id) => {
            ConnectionService::new(&state.db)
                .connect(port.id, target_port_id)
                .await
        }
        Err(err) => Err(err.into()),
    };
    flash_outcome(&session, result, |_| format!("Port {} connected", port.name)).await?;

    Ok(Redirect::to(&format!("/equipment/{}", port.equipment_id)))
}

/// Remove a port's connection
///
/// # Responses
/// - 303 (See Other): Redirect to the equipment page with a flash message
/// - 404 (Not Found): Unknown port
pub async fn disconnect_port(
    State(state): State<AppState>,
    session: Session,
    Path(port_id): Path<i32>,
    Form(form): Form<CsrfForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let port = PortService::new(&state.db).get(port_id).await?;

    let result = ConnectionService::new(&state.db).disconnect(port.id).await;
    flash_outcome(&session, result, |port| {
        format!("Port {} disconnected", port.name)
    })
    .await?;

    Ok(Redirect::to(&format!("/equipment/{}", port.equipment_id)))
}
