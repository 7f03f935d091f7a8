use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::rack::RackDto,
    server::service::rack::MAX_RACK_HEIGHT,
    view::{
        components::{form::ActionButton, CsrfField, Layout, RackDiagram},
        render::{render_document, PageContext},
    },
};

#[component]
fn RackPage(ctx: PageContext, rack: RackDto) -> Element {
    let location = rack.location.clone().unwrap_or_default();

    rsx!(
        Layout { title: rack.name.clone(), ctx: ctx.clone(),
            p { class: "muted",
                if !location.is_empty() { "{location} · " }
                "{rack.height} U"
            }
            div { class: "columns",
                section {
                    h2 { "Front view" }
                    RackDiagram { rack: rack.clone() }
                }
                section {
                    h2 { "Equipment" }
                    if rack.equipment.is_empty() {
                        p { class: "muted", "Nothing mounted yet." }
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Kind" }
                                    th { "Units" }
                                }
                            }
                            tbody {
                                for equipment in rack.equipment.iter() {
                                    tr {
                                        td {
                                            a { href: "/equipment/{equipment.id}", "{equipment.name}" }
                                        }
                                        td { "{equipment.kind}" }
                                        td { "U{equipment.u_position}-U{equipment.top_u}" }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "card",
                        h2 { "Add equipment" }
                        form { class: "stack", method: "post", action: "/racks/{rack.id}/equipment",
                            CsrfField { token: ctx.csrf_token.clone() }
                            label { r#for: "eq-name", "Name" }
                            input { id: "eq-name", name: "name", required: true }
                            label { r#for: "eq-kind", "Kind" }
                            input { id: "eq-kind", name: "kind", placeholder: "Switch, Server, Patch panel" }
                            label { r#for: "eq-position", "Bottom unit" }
                            input {
                                id: "eq-position",
                                name: "u_position",
                                r#type: "number",
                                min: "1",
                                max: "{rack.height}",
                                required: true,
                            }
                            label { r#for: "eq-height", "Height (U)" }
                            input {
                                id: "eq-height",
                                name: "u_height",
                                r#type: "number",
                                min: "1",
                                max: "{rack.height}",
                                value: "1",
                            }
                            button { r#type: "submit", class: "btn btn-primary", "Add equipment" }
                        }
                    }
                    div { class: "card",
                        h2 { "Edit rack" }
                        form { class: "stack", method: "post", action: "/racks/{rack.id}/edit",
                            CsrfField { token: ctx.csrf_token.clone() }
                            label { r#for: "rack-name", "Name" }
                            input { id: "rack-name", name: "name", value: "{rack.name}", required: true }
                            label { r#for: "rack-location", "Location" }
                            input { id: "rack-location", name: "location", value: "{location}" }
                            label { r#for: "rack-height", "Height (U)" }
                            input {
                                id: "rack-height",
                                name: "height",
                                r#type: "number",
                                min: "1",
                                max: "{MAX_RACK_HEIGHT}",
                                value: "{rack.height}",
                            }
                            button { r#type: "submit", class: "btn", "Save" }
                        }
                        ActionButton {
                            action: format!("/racks/{}/delete", rack.id),
                            token: ctx.csrf_token.clone(),
                            label: "Delete rack and everything in it".to_string(),
                            class: "btn btn-danger",
                        }
                    }
                }
            }
        }
    )
}

pub fn rack_page(ctx: PageContext, rack: RackDto) -> Html<String> {
    render_document(ctx.user.theme, rsx!(RackPage { ctx, rack }))
}
