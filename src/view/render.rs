use axum::response::Html;
use dioxus::prelude::*;

use crate::model::{
    flash::FlashMessage,
    user::{Theme, UserDto},
};

/// Data every signed-in page needs besides its own content.
#[derive(Clone, Debug, PartialEq)]
pub struct PageContext {
    pub user: UserDto,
    /// Synchronizer token embedded in every form
    pub csrf_token: String,
    pub flash: Option<FlashMessage>,
    /// Path of the current page, used to return here after switching theme
    pub path: String,
}

/// Render an element tree to a complete HTML document.
///
/// The element supplies `head` and `body`; the `<html>` root carries the theme as
/// `data-theme` for the stylesheet.
pub fn render_document(theme: Theme, element: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\" data-theme=\"{}\">{}</html>",
        theme.as_str(),
        dioxus_ssr::render_element(element)
    ))
}
