use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::user::Theme,
    view::{
        components::{CsrfField, Document},
        render::render_document,
    },
};

#[component]
fn LoginPage(csrf_token: String, username: String, error: Option<String>) -> Element {
    rsx!(
        Document { title: "Sign in".to_string(),
            main { class: "page page-narrow",
                h1 { "DocRack" }
                if let Some(error) = error {
                    div { class: "flash flash-error", role: "alert", "{error}" }
                }
                form { class: "card stack", method: "post", action: "/login",
                    CsrfField { token: csrf_token }
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        name: "username",
                        value: "{username}",
                        autocomplete: "username",
                        required: true,
                        autofocus: true,
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        name: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        required: true,
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Sign in" }
                }
            }
        }
    )
}

/// Login form, optionally showing why the previous attempt failed.
pub fn login_page(csrf_token: String, username: String, error: Option<String>) -> Html<String> {
    render_document(Theme::System, rsx!(LoginPage {
        csrf_token,
        username,
        error,
    }))
}
