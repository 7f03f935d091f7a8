//! Read-only JSON API.
//!
//! Mirrors what the pages show for scripts and exports. Requires a signed-in session like the
//! pages do; errors are returned as [`ErrorDto`] bodies.

use axum::{
    extract::{Path, State},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        port::{ConnectionDto, EquipmentDetailDto},
        rack::{RackDto, RackSummaryDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::api::ApiError,
        model::app::AppState,
        service::{connection::ConnectionService, equipment::EquipmentService, rack::RackService},
    },
};

pub static RACK_TAG: &str = "rack";
pub static CONNECTION_TAG: &str = "connection";

/// List every rack with unit usage
#[utoipa::path(
    get,
    path = "/api/racks",
    tag = RACK_TAG,
    responses(
        (status = 200, description = "Racks ordered by name", body = Vec<RackSummaryDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_racks(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<RackSummaryDto>>, ApiError> {
    get_user_from_session(&state, &session).await?;

    let racks = RackService::new(&state.db).list_summaries().await?;

    Ok(Json(racks))
}

/// Get a rack with its equipment and diagram slots
#[utoipa::path(
    get,
    path = "/api/racks/{rack_id}",
    tag = RACK_TAG,
    params(("rack_id" = i32, Path, description = "Rack ID")),
    responses(
        (status = 200, description = "Rack with layout from the top unit down", body = RackDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Rack not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rack(
    State(state): State<AppState>,
    session: Session,
    Path(rack_id): Path<i32>,
) -> Result<Json<RackDto>, ApiError> {
    get_user_from_session(&state, &session).await?;

    let rack = RackService::new(&state.db).get_rack(rack_id).await?;

    Ok(Json(rack))
}

/// Get equipment with its ports and their connection peers
#[utoipa::path(
    get,
    path = "/api/equipment/{equipment_id}",
    tag = RACK_TAG,
    params(("equipment_id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment with ports", body = EquipmentDetailDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
) -> Result<Json<EquipmentDetailDto>, ApiError> {
    get_user_from_session(&state, &session).await?;

    let detail = EquipmentService::new(&state.db)
        .get_detail(equipment_id)
        .await?;

    Ok(Json(detail))
}

/// List every connection with both endpoints
#[utoipa::path(
    get,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    responses(
        (status = 200, description = "All connections", body = Vec<ConnectionDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_connections(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<ConnectionDto>>, ApiError> {
    get_user_from_session(&state, &session).await?;

    let connections = ConnectionService::new(&state.db).list().await?;

    Ok(Json(connections))
}
