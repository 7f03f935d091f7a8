use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::port::{EquipmentDetailDto, PortEndpointDto},
    view::{
        components::{form::ActionButton, CsrfField, Layout},
        render::{render_document, PageContext},
    },
};

#[component]
fn EquipmentPage(
    ctx: PageContext,
    detail: EquipmentDetailDto,
    free_ports: Vec<PortEndpointDto>,
) -> Element {
    let equipment = detail.equipment.clone();

    rsx!(
        Layout { title: equipment.name.clone(), ctx: ctx.clone(),
            p { class: "muted",
                "{equipment.kind} in "
                a { href: "/racks/{equipment.rack_id}", "{detail.rack_name}" }
                " at U{equipment.u_position}-U{equipment.top_u}"
            }
            div { class: "columns",
                section {
                    h2 { "Ports" }
                    if detail.ports.is_empty() {
                        p { class: "muted", "No ports documented yet." }
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Port" }
                                    th { "Connected to" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for port in detail.ports.iter() {
                                    tr {
                                        td { "{port.name}" }
                                        td {
                                            if let Some(link) = &port.connection {
                                                a { href: "/equipment/{link.peer.equipment_id}",
                                                    "{link.peer.rack_name} / {link.peer.equipment_name} / {link.peer.port_name}"
                                                }
                                                ActionButton {
                                                    action: format!("/ports/{}/disconnect", port.id),
                                                    token: ctx.csrf_token.clone(),
                                                    label: "Disconnect".to_string(),
                                                    class: "btn btn-small",
                                                }
                                            } else {
                                                form { class: "inline", method: "post", action: "/ports/{port.id}/connect",
                                                    CsrfField { token: ctx.csrf_token.clone() }
                                                    select { name: "target_port_id", "aria-label": "Target port", required: true,
                                                        option { value: "", "Choose a free port" }
                                                        for target in free_ports.iter().filter(|t| t.port_id != port.id) {
                                                            option { value: "{target.port_id}",
                                                                "{target.rack_name} / {target.equipment_name} / {target.port_name}"
                                                            }
                                                        }
                                                    }
                                                    button { r#type: "submit", class: "btn btn-small", "Connect" }
                                                }
                                            }
                                        }
                                        td {
                                            ActionButton {
                                                action: format!("/ports/{}/delete", port.id),
                                                token: ctx.csrf_token.clone(),
                                                label: "Delete".to_string(),
                                                class: "btn btn-small btn-danger",
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "card",
                        h2 { "Add ports" }
                        form { class: "stack", method: "post", action: "/equipment/{equipment.id}/ports",
                            CsrfField { token: ctx.csrf_token.clone() }
                            label { r#for: "port-names", "Names, separated by commas" }
                            input { id: "port-names", name: "names", placeholder: "Gi1/0/1, Gi1/0/2", required: true }
                            button { r#type: "submit", class: "btn btn-primary", "Add ports" }
                        }
                    }
                }
                section {
                    div { class: "card",
                        h2 { "Edit equipment" }
                        form { class: "stack", method: "post", action: "/equipment/{equipment.id}/edit",
                            CsrfField { token: ctx.csrf_token.clone() }
                            label { r#for: "eq-name", "Name" }
                            input { id: "eq-name", name: "name", value: "{equipment.name}", required: true }
                            label { r#for: "eq-kind", "Kind" }
                            input { id: "eq-kind", name: "kind", value: "{equipment.kind}" }
                            label { r#for: "eq-position", "Bottom unit" }
                            input {
                                id: "eq-position",
                                name: "u_position",
                                r#type: "number",
                                min: "1",
                                value: "{equipment.u_position}",
                            }
                            label { r#for: "eq-height", "Height (U)" }
                            input {
                                id: "eq-height",
                                name: "u_height",
                                r#type: "number",
                                min: "1",
                                value: "{equipment.u_height}",
                            }
                            button { r#type: "submit", class: "btn", "Save" }
                        }
                        ActionButton {
                            action: format!("/equipment/{}/delete", equipment.id),
                            token: ctx.csrf_token.clone(),
                            label: "Delete equipment and its ports".to_string(),
                            class: "btn btn-danger",
                        }
                    }
                }
            }
        }
    )
}

pub fn equipment_page(
    ctx: PageContext,
    detail: EquipmentDetailDto,
    free_ports: Vec<PortEndpointDto>,
) -> Html<String> {
    render_document(ctx.user.theme, rsx!(EquipmentPage {
        ctx,
        detail,
        free_ports,
    }))
}
