use dioxus::prelude::*;

use crate::{
    model::user::Theme,
    view::{components::CsrfField, render::PageContext},
};

#[component]
pub fn Navbar(ctx: PageContext) -> Element {
    rsx!(
        nav { class: "navbar",
            a { class: "brand", href: "/", "DocRack" }
            div { class: "nav-links",
                a { href: "/", "Racks" }
                a { href: "/connections", "Connections" }
                a { href: "/profile", "{ctx.user.username}" }
                a { href: "/logout", "Logout" }
            }
            form { class: "theme-switcher", method: "post", action: "/profile/theme",
                CsrfField { token: ctx.csrf_token.clone() }
                input { r#type: "hidden", name: "redirect_to", value: "{ctx.path}" }
                select { name: "theme", "aria-label": "Theme",
                    for theme in Theme::ALL {
                        option {
                            value: theme.as_str(),
                            selected: theme == ctx.user.theme,
                            "{theme.label()}"
                        }
                    }
                }
                button { r#type: "submit", class: "btn btn-small", "Apply" }
            }
        }
    )
}
