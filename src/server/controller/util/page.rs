use tower_sessions::Session;

use crate::{
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{
            app::AppState,
            session::{csrf::SessionCsrf, flash::SessionFlash},
        },
    },
    view::render::PageContext,
};

/// Gather what every signed-in page renders: the user, a CSRF token and any pending flash
/// message, which is consumed.
pub async fn page_context(
    state: &AppState,
    session: &Session,
    path: impl Into<String>,
) -> Result<PageContext, Error> {
    let user = get_user_from_session(state, session).await?;
    let csrf_token = SessionCsrf::get_or_create(session).await?;
    let flash = SessionFlash::take(session).await?;

    Ok(PageContext {
        user,
        csrf_token,
        flash,
        path: path.into(),
    })
}
