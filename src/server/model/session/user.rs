use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "docrack:user:id";

/// ID of the signed-in user.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// `None` until a user has signed in on this session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session.get::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(user_id.map(|SessionUserId(id)| id))
    }
}
