use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::rack::RackSummaryDto,
    server::service::rack::{DEFAULT_RACK_HEIGHT, MAX_RACK_HEIGHT},
    view::{
        components::{CsrfField, Layout},
        render::{render_document, PageContext},
    },
};

#[component]
fn DashboardPage(ctx: PageContext, racks: Vec<RackSummaryDto>) -> Element {
    rsx!(
        Layout { title: "Racks".to_string(), ctx: ctx.clone(),
            if racks.is_empty() {
                p { class: "muted", "No racks documented yet. Add the first one below." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Location" }
                            th { "Height" }
                            th { "Equipment" }
                            th { "Used" }
                            th { "Free" }
                        }
                    }
                    tbody {
                        for rack in racks.iter() {
                            tr {
                                td {
                                    a { href: "/racks/{rack.id}", "{rack.name}" }
                                }
                                td { {rack.location.clone().unwrap_or_default()} }
                                td { "{rack.height} U" }
                                td { "{rack.equipment_count}" }
                                td { "{rack.used_units} U" }
                                td { "{rack.free_units} U" }
                            }
                        }
                    }
                }
            }
            section { class: "card",
                h2 { "Add rack" }
                form { class: "stack", method: "post", action: "/racks",
                    CsrfField { token: ctx.csrf_token.clone() }
                    label { r#for: "name", "Name" }
                    input { id: "name", name: "name", required: true }
                    label { r#for: "location", "Location" }
                    input { id: "location", name: "location", placeholder: "Room, row" }
                    label { r#for: "height", "Height (U)" }
                    input {
                        id: "height",
                        name: "height",
                        r#type: "number",
                        min: "1",
                        max: "{MAX_RACK_HEIGHT}",
                        value: "{DEFAULT_RACK_HEIGHT}",
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Add rack" }
                }
            }
        }
    )
}

pub fn dashboard_page(ctx: PageContext, racks: Vec<RackSummaryDto>) -> Html<String> {
    render_document(ctx.user.theme, rsx!(DashboardPage { ctx, racks }))
}
