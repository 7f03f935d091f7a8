//! Tests for adding, removing and cabling ports.

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
            port::{add_ports, connect_port, delete_port, disconnect_port, ConnectForm, PortsForm},
            util::form::CsrfForm,
        },
        model::session::flash::SessionFlash,
    },
};
use docrack_test_utils::prelude::*;
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::sign_in;

fn connect_form(csrf_token: &str, target_port_id: i32) -> Form<ConnectForm> {
    Form(ConnectForm {
        csrf_token: csrf_token.to_string(),
        target_port_id: target_port_id.to_string(),
    })
}

/// Expect every trimmed, non-empty name in the list to become a port
#[tokio::test]
async fn adds_ports_from_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    let equipment = test.rack().insert_equipment(rack.id, "core-sw", 1, 1).await?;

    let result = add_ports(
        State(test.to_app_state()),
        test.session.clone(),
        Path(equipment.id),
        Form(PortsForm {
            csrf_token,
            names: " Gi1/0/1, Gi1/0/2,,Gi1/0/3 ".to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(
        resp.headers()["location"],
        format!("/equipment/{}", equipment.id).as_str()
    );
    let names: Vec<String> = DocrackPort::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Gi1/0/1", "Gi1/0/2", "Gi1/0/3"]);

    Ok(())
}

/// Expect a name already on the equipment to reject the whole list
#[tokio::test]
async fn rejects_existing_port_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    let equipment = test.rack().insert_equipment(rack.id, "core-sw", 1, 1).await?;
    test.rack().insert_ports(equipment.id, &["eth0"]).await?;

    add_ports(
        State(test.to_app_state()),
        test.session.clone(),
        Path(equipment.id),
        Form(PortsForm {
            csrf_token,
            names: "eth1, eth0".to_string(),
        }),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(DocrackPort::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect two free ports to be connected
#[tokio::test]
async fn connects_free_ports() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    let equipment = test.rack().insert_equipment(rack.id, "core-sw", 1, 1).await?;
    let ports = test.rack().insert_ports(equipment.id, &["eth0", "eth1"]).await?;

    let result = connect_port(
        State(test.to_app_state()),
        test.session.clone(),
        Path(ports[0].id),
        connect_form(&csrf_token, ports[1].id),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::SEE_OTHER);
    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Success);
    assert_eq!(DocrackConnection::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect a port that is already cabled to refuse a second connection
#[tokio::test]
async fn rejects_second_connection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let (_, [switch_a, _], [port_a, _], _) = test.rack().insert_cabled_rack("Core A").await?;
    let spare = test.rack().insert_ports(switch_a.id, &["eth1"]).await?;

    connect_port(
        State(test.to_app_state()),
        test.session.clone(),
        Path(spare[0].id),
        connect_form(&csrf_token, port_a.id),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(DocrackConnection::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect a port to refuse a connection to itself
#[tokio::test]
async fn rejects_self_connection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    let equipment = test.rack().insert_equipment(rack.id, "core-sw", 1, 1).await?;
    let ports = test.rack().insert_ports(equipment.id, &["eth0"]).await?;

    connect_port(
        State(test.to_app_state()),
        test.session.clone(),
        Path(ports[0].id),
        connect_form(&csrf_token, ports[0].id),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(flash.message, "A port cannot be connected to itself");
    assert_eq!(DocrackConnection::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 404 when the target port does not exist
#[tokio::test]
async fn connect_to_unknown_port_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    let equipment = test.rack().insert_equipment(rack.id, "core-sw", 1, 1).await?;
    let ports = test.rack().insert_ports(equipment.id, &["eth0"]).await?;

    let result = connect_port(
        State(test.to_app_state()),
        test.session.clone(),
        Path(ports[0].id),
        connect_form(&csrf_token, 999),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect disconnecting to free both ports
#[tokio::test]
async fn disconnect_removes_connection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let (_, [switch_a, _], [port_a, _], _) = test.rack().insert_cabled_rack("Core A").await?;

    let result = disconnect_port(
        State(test.to_app_state()),
        test.session.clone(),
        Path(port_a.id),
        Form(CsrfForm { csrf_token }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(
        resp.headers()["location"],
        format!("/equipment/{}", switch_a.id).as_str()
    );
    assert_eq!(DocrackConnection::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect disconnecting a free port to flash an error
#[tokio::test]
async fn disconnect_free_port_is_flashed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let rack = test.rack().insert_rack("Core A", 42).await?;
    let equipment = test.rack().insert_equipment(rack.id, "core-sw", 1, 1).await?;
    let ports = test.rack().insert_ports(equipment.id, &["eth0"]).await?;

    disconnect_port(
        State(test.to_app_state()),
        test.session.clone(),
        Path(ports[0].id),
        Form(CsrfForm { csrf_token }),
    )
    .await
    .unwrap();

    let flash = SessionFlash::take(&test.session).await.unwrap().unwrap();
    assert_eq!(flash.kind, FlashKind::Error);

    Ok(())
}

/// Expect deleting a port to remove its connection but keep the peer port
#[tokio::test]
async fn delete_removes_connection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (_, csrf_token) = sign_in(&test).await?;
    let (_, _, [port_a, port_b], _) = test.rack().insert_cabled_rack("Core A").await?;

    delete_port(
        State(test.to_app_state()),
        test.session.clone(),
        Path(port_a.id),
        Form(CsrfForm { csrf_token }),
    )
    .await
    .unwrap();

    assert!(DocrackPort::find_by_id(port_a.id).one(&test.db).await?.is_none());
    assert!(DocrackPort::find_by_id(port_b.id).one(&test.db).await?.is_some());
    assert_eq!(DocrackConnection::find().count(&test.db).await?, 0);

    Ok(())
}
