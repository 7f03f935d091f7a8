//! Per-session CSRF token.
//!
//! A random token is created the first time a form is rendered for a session and stays valid
//! for the session's lifetime. Every HTML form embeds it as `csrf_token`, and POST handlers
//! compare the submitted value with the stored one.

use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_CSRF_KEY: &str = "docrack:csrf";

/// Length of generated CSRF tokens.
pub const CSRF_TOKEN_LENGTH: usize = 32;

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCsrf(pub String);

impl SessionCsrf {
    /// Returns the session's CSRF token, generating and storing one if absent.
    pub async fn get_or_create(session: &Session) -> Result<String, Error> {
        if let Some(token) = Self::get(session).await? {
            return Ok(token);
        }

        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CSRF_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        session
            .insert(SESSION_CSRF_KEY, SessionCsrf(token.clone()))
            .await?;

        Ok(token)
    }

    /// Get the CSRF token from session without creating one.
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionCsrf>(SESSION_CSRF_KEY)
            .await?
            .map(|SessionCsrf(token)| token))
    }
}
