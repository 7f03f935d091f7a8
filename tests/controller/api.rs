//! Tests for the read-only JSON API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use docrack::{model::rack::RackSlotDto, server::controller::api};
use docrack_test_utils::prelude::*;

use crate::util::{body_text, sign_in};

/// Expect every rack with its unit usage
#[tokio::test]
async fn lists_racks_with_usage() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test).await?;
    test.rack().insert_cabled_rack("Core B").await?;
    test.rack().insert_rack("Core A", 24).await?;

    let result = api::list_racks(State(test.to_app_state()), test.session.clone()).await;

    let Json(racks) = result.unwrap();
    let names: Vec<&str> = racks.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Core A", "Core B"]);
    assert_eq!(racks[1].equipment_count, 2);
    assert_eq!(racks[1].used_units, 2);
    assert_eq!(racks[1].free_units, 40);

    Ok(())
}

/// Expect 401 with a JSON error body when not signed in
#[tokio::test]
async fn requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = api::list_racks(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["error"], "Not authenticated");

    Ok(())
}

/// Expect the rack layout to start at the top unit
#[tokio::test]
async fn rack_layout_starts_at_top() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test).await?;
    let (rack, _, _, _) = test.rack().insert_cabled_rack("Core A").await?;

    let result = api::get_rack(
        State(test.to_app_state()),
        test.session.clone(),
        Path(rack.id),
    )
    .await;

    let Json(dto) = result.unwrap();
    assert_eq!(dto.equipment.len(), 2);
    assert_eq!(dto.layout.len(), 42);
    assert!(matches!(dto.layout[0], RackSlotDto::Empty { u: 42 }));

    Ok(())
}

/// Expect 404 JSON for an unknown rack
#[tokio::test]
async fn unknown_rack_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test).await?;

    let result = api::get_rack(State(test.to_app_state()), test.session.clone(), Path(7)).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect equipment ports with their connection peer
#[tokio::test]
async fn equipment_includes_port_peers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test).await?;
    let (_, [switch_a, switch_b], _, _) = test.rack().insert_cabled_rack("Core A").await?;

    let result = api::get_equipment(
        State(test.to_app_state()),
        test.session.clone(),
        Path(switch_a.id),
    )
    .await;

    let Json(detail) = result.unwrap();
    assert_eq!(detail.ports.len(), 1);
    let link = detail.ports[0].connection.as_ref().unwrap();
    assert_eq!(link.peer.equipment_id, switch_b.id);

    Ok(())
}

/// Expect each connection with both endpoints described
#[tokio::test]
async fn lists_connections() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    sign_in(&test).await?;
    test.rack().insert_cabled_rack("Core A").await?;

    let result = api::list_connections(State(test.to_app_state()), test.session.clone()).await;

    let Json(connections) = result.unwrap();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].a.rack_name, "Core A");
    assert_eq!(connections[0].b.rack_name, "Core A");

    Ok(())
}
