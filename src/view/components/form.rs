use dioxus::prelude::*;

/// Hidden CSRF token input, required in every form that posts.
#[component]
pub fn CsrfField(token: String) -> Element {
    rsx!(
        input { r#type: "hidden", name: "csrf_token", value: "{token}" }
    )
}

/// A small form posting to `action` with a single button.
#[component]
pub fn ActionButton(
    action: String,
    token: String,
    label: String,
    class: Option<&'static str>,
) -> Element {
    let class = class.unwrap_or("btn");

    rsx!(
        form { class: "inline", method: "post", action: "{action}",
            CsrfField { token }
            button { r#type: "submit", class: class, "{label}" }
        }
    )
}
