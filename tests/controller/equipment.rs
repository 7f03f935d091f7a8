//! Tests for mounting, editing and removing equipment.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use docrack::{
    model::flash::FlashKind,
    server::{
        controller::{
            equipment::{
                create_equipment, delete_equipment, edit_equipment, view_equipment, EquipmentForm,
            },
            util::form::CsrfForm,
        },
        model::session::flash::SessionFlash,
    },
};
use docrack_test_utils::prelude::*;
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{body_text, sign_in};

fn equipment_form(csrf_token: &str, name: &str, u_position: &str, u_height: &str) -> Form<EquipmentForm> {
    Form(EquipmentForm {
        csrf_token: csrf_token.to_string(),
        name: name.to_string(),
        kind: "Switch".to_string(),
        u_position: u_position.to_string(),
        u_height: u_height.to_string(),
    })
}

/// Expect equipment that fits to be mounted and the rack page to be the redirect target
#[tokio::test]
async fn mounts_fitting_equipment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;

    let result = create_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(rack.id),
        equipment_form(&csrf_token, "core-sw", "40", "3"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], format!("/racks/{}", rack.id).as_str());
    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Success);

    let mounted = DocrackEquipment::find().all(&test.db).await?;
    assert_eq!(mounted.len(), 1);
    assert_eq!(mounted[0].u_position, 40);
    assert_eq!(mounted[0].u_height, 3);

    Ok(())
}

/// Expect equipment reaching past the top of the rack to be refused
#[tokio::test]
async fn rejects_equipment_exceeding_rack() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;

    create_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(rack.id),
        equipment_form(&csrf_token, "core-sw", "41", "3"),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(DocrackEquipment::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect equipment overlapping mounted equipment to be refused
#[tokio::test]
async fn rejects_overlapping_equipment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    test.rack().insert_equipment(rack.id, "core-sw", 10, 2).await?;

    create_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(rack.id),
        equipment_form(&csrf_token, "patch", "11", "1"),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    assert!(flash.message.contains("core-sw"));
    assert_eq!(DocrackEquipment::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect a missing bottom unit to be flashed rather than failing the request
#[tokio::test]
async fn rejects_missing_position() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;

    let result = create_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(rack.id),
        equipment_form(&csrf_token, "core-sw", "", ""),
    )
    .await;

    assert!(result.is_ok());
    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(DocrackEquipment::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 404 when mounting into a rack that does not exist
#[tokio::test]
async fn create_in_unknown_rack_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;

    let result = create_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(999),
        equipment_form(&csrf_token, "core-sw", "1", "1"),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect moving equipment within its own range to be allowed
#[tokio::test]
async fn edit_ignores_own_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    let equipment = test.rack().insert_equipment(rack.id, "core-sw", 10, 2).await?;

    edit_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(equipment.id),
        equipment_form(&csrf_token, "core-sw", "11", "2"),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Success);
    let stored = DocrackEquipment::find_by_id(equipment.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.u_position, 11);

    Ok(())
}

/// Expect the equipment page to list its ports with their peers
#[tokio::test]
async fn view_shows_ports_and_peers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test).await?;
    let (_, [switch_a, _], _, _) = test.rack().insert_cabled_rack("Core A").await?;

    let result = view_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(switch_a.id),
    )
    .await;

    let body = body_text(result.unwrap().into_response()).await;
    assert!(body.contains("switch-a"));
    assert!(body.contains("eth0"));
    assert!(body.contains("switch-b"));

    Ok(())
}

/// Expect deleting equipment to remove its ports and connection and return to the rack
#[tokio::test]
async fn delete_cascades_and_returns_to_rack() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let (rack, [switch_a, switch_b], _, _) = test.rack().insert_cabled_rack("Core A").await?;

    let result = delete_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(switch_a.id),
        Form(CsrfForm { csrf_token }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.headers()["location"], format!("/racks/{}", rack.id).as_str());
    assert!(DocrackEquipment::find_by_id(switch_a.id)
        .one(&test.db)
        .await?
        .is_none());
    assert!(DocrackEquipment::find_by_id(switch_b.id)
        .one(&test.db)
        .await?
        .is_some());
    assert_eq!(DocrackPort::find().count(&test.db).await?, 1);
    assert_eq!(DocrackConnection::find().count(&test.db).await?, 0);

    Ok(())
}
