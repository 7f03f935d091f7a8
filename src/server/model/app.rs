use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// bcrypt cost used when hashing new passwords
    pub password_hash_cost: u32,
}

impl From<(DatabaseConnection, u32)> for AppState {
    fn from((db, password_hash_cost): (DatabaseConnection, u32)) -> Self {
        Self {
            db,
            password_hash_cost,
        }
    }
}
