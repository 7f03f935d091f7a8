//! One-shot flash messages carried across a redirect.

use tower_sessions::Session;

use crate::{model::flash::FlashMessage, server::error::Error};

pub const SESSION_FLASH_KEY: &str = "docrack:flash";

pub struct SessionFlash;

impl SessionFlash {
    /// Store a flash message, replacing any message not yet shown.
    pub async fn insert(session: &Session, message: FlashMessage) -> Result<(), Error> {
        session.insert(SESSION_FLASH_KEY, message).await?;

        Ok(())
    }

    /// Remove and return the pending flash message.
    pub async fn take(session: &Session) -> Result<Option<FlashMessage>, Error> {
        Ok(session.remove::<FlashMessage>(SESSION_FLASH_KEY).await?)
    }
}
