use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::{
    model::user::Theme,
    view::{components::Document, render::render_document},
};

#[component]
fn ErrorPage(status: u16, reason: String, message: String) -> Element {
    rsx!(
        Document { title: reason.clone(),
            main { class: "page page-narrow",
                h1 { "{status} {reason}" }
                p { "{message}" }
                p {
                    a { class: "btn", href: "/", "Back to racks" }
                }
            }
        }
    )
}

/// Render a standalone error page with the given status.
pub fn render_error_page(status: StatusCode, message: &str) -> Response {
    let reason = status.canonical_reason().unwrap_or("Error").to_string();

    let page = render_document(Theme::System, rsx!(ErrorPage {
        status: status.as_u16(),
        reason,
        message: message.to_string(),
    }));

    (status, page).into_response()
}
