use dioxus::prelude::*;

use crate::view::{
    components::{FlashBanner, Navbar},
    render::PageContext,
};

/// Head with the stylesheet, followed by the page body.
#[component]
pub fn Document(title: String, children: Element) -> Element {
    rsx!(
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | DocRack" }
            link { rel: "stylesheet", href: "/static/style.css" }
        }
        body {
            {children}
        }
    )
}

/// Signed-in page frame: navbar, flash banner and content area.
#[component]
pub fn Layout(title: String, ctx: PageContext, children: Element) -> Element {
    rsx!(
        Document { title: title.clone(),
            Navbar { ctx: ctx.clone() }
            main { class: "page",
                FlashBanner { flash: ctx.flash.clone() }
                h1 { "{title}" }
                {children}
            }
        }
    )
}
