use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Theme,
    server::{data::user::UserRepository, error::Error, model::db::UserModel},
};

/// Hash a password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, Error> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a password against a stored bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    Ok(bcrypt::verify(password, password_hash)?)
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a user by username and check the password.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Credentials are correct
    /// - `Ok(None)` - Unknown username or wrong password
    /// - `Err(Error)` - Database or hashing failure
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username.trim()).await? else {
            return Ok(None);
        };

        if !verify_password(password, &user.password_hash)? {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Create the administrator account if no user with `username` exists yet.
    ///
    /// Returns `true` when the account was created.
    pub async fn bootstrap_admin(
        &self,
        username: &str,
        password: &str,
        cost: u32,
    ) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let password_hash = hash_password(password, cost)?;
        let user = user_repo
            .create(username, &password_hash, Theme::default().as_str())
            .await?;

        tracing::warn!(
            user_id = %user.id,
            "Created administrator account {:?}, change its password from the profile page",
            user.username
        );

        Ok(true)
    }
}
