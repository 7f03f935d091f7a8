use axum::{extract::State, response::Html};
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::page::page_context, error::Error, model::app::AppState,
        service::connection::ConnectionService,
    },
    view::pages::connections::connections_page,
};

/// Every documented connection with both endpoints
///
/// # Responses
/// - 200 (OK): Connection list
/// - 303 (See Other): Not signed in, redirect to `/login`
pub async fn connections(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let ctx = page_context(&state, &session, "/connections").await?;
    let connections = ConnectionService::new(&state.db).list().await?;

    Ok(connections_page(ctx, connections))
}
