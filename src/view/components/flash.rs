use dioxus::prelude::*;

use crate::model::flash::{FlashKind, FlashMessage};

#[component]
pub fn FlashBanner(flash: Option<FlashMessage>) -> Element {
    let Some(flash) = flash else {
        return rsx!();
    };

    let class = match flash.kind {
        FlashKind::Success => "flash flash-success",
        FlashKind::Error => "flash flash-error",
    };

    rsx!(
        div { class: class, role: "alert", "{flash.message}" }
    )
}
