use tower_sessions::Session;

use crate::{
    model::flash::FlashMessage,
    server::{error::Error, model::session::flash::SessionFlash},
};

/// Record the outcome of a form post as a flash message for the page redirected to.
///
/// Validation errors become error messages and `Ok(None)`; successes store the message built
/// by `success` and return the value. Any other error is passed through for the error page.
pub async fn flash_outcome<T>(
    session: &Session,
    result: Result<T, Error>,
    success: impl FnOnce(&T) -> String,
) -> Result<Option<T>, Error> {
    match result {
        Ok(value) => {
            SessionFlash::insert(session, FlashMessage::success(success(&value))).await?;

            Ok(Some(value))
        }
        Err(Error::ValidationError(err)) => {
            SessionFlash::insert(session, FlashMessage::error(err.to_string())).await?;

            Ok(None)
        }
        Err(err) => Err(err),
    }
}
