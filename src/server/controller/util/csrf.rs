use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::csrf::SessionCsrf,
};

/// Validate that the session holds a CSRF token equal to `submitted`.
/// Returns `Ok(())` when valid or the appropriate `Error` otherwise.
pub async fn validate_csrf(session: &Session, submitted: &str) -> Result<(), Error> {
    let stored = SessionCsrf::get(session).await?;

    match stored {
        Some(token) if !submitted.is_empty() && token == submitted => Ok(()),
        _ => Err(Error::AuthError(AuthError::CsrfValidationFailed)),
    }
}
