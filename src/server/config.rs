use crate::server::{
    error::{config::ConfigError, AppError},
    model::gamification::DEFAULT_DAY_OFFSET_HOURS,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub internal_api_key: String,
    pub bind_address: String,

    /// UTC offset in hours that defines the activity day for daily limits.
    pub day_offset_hours: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            internal_api_key: required_non_empty("INTERNAL_API_KEY")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            day_offset_hours: match std::env::var("ACTIVITY_DAY_UTC_OFFSET_HOURS") {
                Ok(value) => parse_offset_hours(&value)?,
                Err(_) => DEFAULT_DAY_OFFSET_HOURS,
            },
        })
    }
}

fn required_non_empty(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "value must not be empty".to_string(),
        }),
        Err(_) => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn parse_offset_hours(value: &str) -> Result<i32, ConfigError> {
    let hours = value
        .trim()
        .parse::<i32>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "ACTIVITY_DAY_UTC_OFFSET_HOURS".to_string(),
            reason: e.to_string(),
        })?;

    if !(-23..=23).contains(&hours) {
        return Err(ConfigError::InvalidEnvVar {
            name: "ACTIVITY_DAY_UTC_OFFSET_HOURS".to_string(),
            reason: format!("{} is outside -23..=23", hours),
        });
    }

    Ok(hours)
}
