use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::port::{ConnectionDto, PortEndpointDto},
    view::{
        components::Layout,
        render::{render_document, PageContext},
    },
};

#[component]
fn Endpoint(endpoint: PortEndpointDto) -> Element {
    rsx!(
        td {
            a { href: "/racks/{endpoint.rack_id}", "{endpoint.rack_name}" }
        }
        td {
            a { href: "/equipment/{endpoint.equipment_id}", "{endpoint.equipment_name}" }
        }
        td { "{endpoint.port_name}" }
    )
}

#[component]
fn ConnectionsPage(ctx: PageContext, connections: Vec<ConnectionDto>) -> Element {
    rsx!(
        Layout { title: "Connections".to_string(), ctx: ctx.clone(),
            if connections.is_empty() {
                p { class: "muted", "No connections documented yet." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { colspan: "3", "A side" }
                            th { colspan: "3", "B side" }
                        }
                        tr {
                            th { "Rack" }
                            th { "Equipment" }
                            th { "Port" }
                            th { "Rack" }
                            th { "Equipment" }
                            th { "Port" }
                        }
                    }
                    tbody {
                        for connection in connections.iter() {
                            tr {
                                Endpoint { endpoint: connection.a.clone() }
                                Endpoint { endpoint: connection.b.clone() }
                            }
                        }
                    }
                }
            }
        }
    )
}

pub fn connections_page(ctx: PageContext, connections: Vec<ConnectionDto>) -> Html<String> {
    render_document(ctx.user.theme, rsx!(ConnectionsPage { ctx, connections }))
}
