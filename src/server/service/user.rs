use sea_orm::DatabaseConnection;

use crate::{
    model::user::Theme,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
        model::db::UserModel,
        service::auth::{hash_password, verify_password},
    },
};

/// Shortest password accepted when changing it.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// bcrypt ignores everything past this many bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?)
    }

    /// Replace a user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - New hash stored, the old password no longer works
    /// - `Err(Error::ValidationError)` - Wrong current password, mismatching confirmation or
    ///   a new password shorter than [`MIN_PASSWORD_LENGTH`] or longer than
    ///   [`MAX_PASSWORD_BYTES`]
    /// - `Err(Error::AuthError)` - The user no longer exists
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
        cost: u32,
    ) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(current_password, &user.password_hash)? {
            return Err(ValidationError::IncorrectPassword.into());
        }

        if new_password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }

        if new_password.len() > MAX_PASSWORD_BYTES {
            return Err(ValidationError::PasswordTooLong(MAX_PASSWORD_BYTES).into());
        }

        let password_hash = hash_password(new_password, cost)?;
        user_repo
            .update_password_hash(user_id, &password_hash)
            .await?;

        Ok(())
    }

    pub async fn set_theme(&self, user_id: i32, theme: Theme) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_theme(user_id, theme.as_str())
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
