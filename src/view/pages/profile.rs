use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::user::Theme,
    server::service::user::MIN_PASSWORD_LENGTH,
    view::{
        components::{CsrfField, Layout},
        render::{render_document, PageContext},
    },
};

#[component]
fn ProfilePage(ctx: PageContext) -> Element {
    rsx!(
        Layout { title: "Profile".to_string(), ctx: ctx.clone(),
            p { "Signed in as " strong { "{ctx.user.username}" } }
            div { class: "columns",
                section { class: "card",
                    h2 { "Theme" }
                    form { class: "stack", method: "post", action: "/profile/theme",
                        CsrfField { token: ctx.csrf_token.clone() }
                        input { r#type: "hidden", name: "redirect_to", value: "/profile" }
                        for theme in Theme::ALL {
                            label { class: "choice",
                                input {
                                    r#type: "radio",
                                    name: "theme",
                                    value: theme.as_str(),
                                    checked: theme == ctx.user.theme,
                                }
                                " {theme.label()}"
                            }
                        }
                        button { r#type: "submit", class: "btn", "Save theme" }
                    }
                }
                section { class: "card",
                    h2 { "Change password" }
                    form { class: "stack", method: "post", action: "/profile/password",
                        CsrfField { token: ctx.csrf_token.clone() }
                        label { r#for: "current-password", "Current password" }
                        input {
                            id: "current-password",
                            name: "current_password",
                            r#type: "password",
                            autocomplete: "current-password",
                            required: true,
                        }
                        label { r#for: "new-password", "New password" }
                        input {
                            id: "new-password",
                            name: "new_password",
                            r#type: "password",
                            autocomplete: "new-password",
                            minlength: "{MIN_PASSWORD_LENGTH}",
                            required: true,
                        }
                        label { r#for: "confirm-password", "Confirm new password" }
                        input {
                            id: "confirm-password",
                            name: "confirm_password",
                            r#type: "password",
                            autocomplete: "new-password",
                            required: true,
                        }
                        button { r#type: "submit", class: "btn btn-primary", "Change password" }
                    }
                }
            }
        }
    )
}

/// Profile page. A result message from the last form post travels in `ctx.flash`.
pub fn profile_page(ctx: PageContext) -> Html<String> {
    render_document(ctx.user.theme, rsx!(ProfilePage { ctx }))
}
