use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::TEST_PASSWORD_COST, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is hashed with [`TEST_PASSWORD_COST`].
    pub async fn insert_user(&self, username: &str, password: &str) -> Result<UserModel, TestError> {
        let password_hash = bcrypt::hash(password, TEST_PASSWORD_COST)?;
        let now = Utc::now().naive_utc();

        let user = entity::docrack_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            theme: ActiveValue::Set("system".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }
}
