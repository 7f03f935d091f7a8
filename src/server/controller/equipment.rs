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
            form::{parse_number, parse_required_number, CsrfForm},
            get_user::get_user_from_session,
            page::page_context,
        },
        data::equipment::EquipmentFields,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::{equipment::EquipmentService, port::PortService},
    },
    view::pages::equipment::equipment_page,
};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct EquipmentForm {
    pub csrf_token: String,
    pub name: String,
    pub kind: String,
    pub u_position: String,
    /// Blank means a single unit
    pub u_height: String,
}

impl EquipmentForm {
    fn fields(&self) -> Result<EquipmentFields<'_>, ValidationError> {
        Ok(EquipmentFields {
            name: &self.name,
            kind: &self.kind,
            u_position: parse_required_number("Bottom unit", &self.u_position)?,
            u_height: parse_number("Height", &self.u_height, 1)?,
        })
    }
}

/// Mount equipment in a rack
///
/// # Responses
/// - 303 (See Other): Redirect to the rack page with a flash message
/// - 404 (Not Found): Unknown rack
pub async fn create_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(rack_id): Path<i32>,
    Form(form): Form<EquipmentForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = match form.fields() {
        Ok(fields) => {
            EquipmentService::new(&state.db)
                .create(rack_id, &fields)
                .await
        }
        Err(err) => Err(err.into()),
    };
    flash_outcome(&session, result, |equipment| {
        format!("{} mounted", equipment.name)
    })
    .await?;

    Ok(Redirect::to(&format!("/racks/{}", rack_id)))
}

/// Equipment details with its ports
///
/// # Responses
/// - 200 (OK): Equipment page
/// - 404 (Not Found): Unknown equipment
pub async fn view_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
) -> Result<Html<String>, Error> {
    let ctx = page_context(&state, &session, format!("/equipment/{}", equipment_id)).await?;
    let detail = EquipmentService::new(&state.db)
        .get_detail(equipment_id)
        .await?;
    let free_ports = PortService::new(&state.db).free_ports().await?;

    Ok(equipment_page(ctx, detail, free_ports))
}

/// Update equipment name, kind and position
///
/// # Responses
/// - 303 (See Other): Redirect to the equipment page with a flash message
/// - 404 (Not Found): Unknown equipment
pub async fn edit_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
    Form(form): Form<EquipmentForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let result = match form.fields() {
        Ok(fields) => {
            EquipmentService::new(&state.db)
                .update(equipment_id, &fields)
                .await
        }
        Err(err) => Err(err.into()),
    };
    flash_outcome(&session, result, |equipment| {
        format!("{} saved", equipment.name)
    })
    .await?;

    Ok(Redirect::to(&format!("/equipment/{}", equipment_id)))
}

/// Delete equipment with its ports and their connections
///
/// # Responses
/// - 303 (See Other): Redirect to the rack the equipment was mounted in
/// - 404 (Not Found): Unknown equipment
pub async fn delete_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(equipment_id): Path<i32>,
    Form(form): Form<CsrfForm>,
) -> Result<Redirect, Error> {
    get_user_from_session(&state, &session).await?;
    validate_csrf(&session, &form.csrf_token).await?;

    let equipment = EquipmentService::new(&state.db).delete(equipment_id).await?;
    let rack_id = equipment.rack_id;
    flash_outcome(&session, Ok(equipment), |equipment| {
        format!("{} deleted", equipment.name)
    })
    .await?;

    Ok(Redirect::to(&format!("/racks/{}", rack_id)))
}
