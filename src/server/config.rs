//! Application configuration read from environment variables.

use crate::server::error::config::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://docrack.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";
pub const DEFAULT_PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;
pub const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 24;

/// Range of bcrypt costs the hashing library accepts.
const MIN_HASH_COST: u32 = 4;
const MAX_HASH_COST: u32 = 31;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub admin_username: String,
    pub admin_password: String,
    pub password_hash_cost: u32,
    pub secure_cookies: bool,
    pub session_expiry_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source, applying defaults for unset
    /// or empty variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let password_hash_cost = match var("PASSWORD_HASH_COST") {
            Some(value) => parse_hash_cost(&value)?,
            None => DEFAULT_PASSWORD_HASH_COST,
        };

        let secure_cookies = match var("SECURE_COOKIES") {
            Some(value) => parse_bool("SECURE_COOKIES", &value)?,
            None => false,
        };

        let session_expiry_hours = match var("SESSION_EXPIRY_HOURS") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_EXPIRY_HOURS".to_string(),
                        reason: format!("expected a positive number of hours, got {:?}", value),
                    })
                }
            },
            None => DEFAULT_SESSION_EXPIRY_HOURS,
        };

        let admin_username = var("ADMIN_USERNAME")
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            admin_username,
            admin_password: var("ADMIN_PASSWORD")
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            password_hash_cost,
            secure_cookies,
            session_expiry_hours,
        })
    }
}

fn parse_hash_cost(value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(cost) if (MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) => Ok(cost),
        _ => Err(ConfigError::InvalidEnvValue {
            var: "PASSWORD_HASH_COST".to_string(),
            reason: format!(
                "expected a bcrypt cost between {} and {}, got {:?}",
                MIN_HASH_COST,
                MAX_HASH_COST,
                value
            ),
        }),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected true or false, got {:?}", value),
        }),
    }
}
