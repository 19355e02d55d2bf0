use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub question_file: String,
    pub test_duration_minutes: u32,
    pub questions_per_test: usize,
    pub excellent_threshold_pct: f64,
    pub review_threshold_pct: f64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let config = Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:8080"),
            question_file: get_env_or("QUESTION_FILE", "questions.json"),
            test_duration_minutes: get_env_parse_or("TEST_DURATION_MINUTES", 30)?,
            questions_per_test: get_env_parse_or("QUESTIONS_PER_TEST", 30)?,
            excellent_threshold_pct: get_env_parse_or("EXCELLENT_THRESHOLD_PCT", 83.0)?,
            review_threshold_pct: get_env_parse_or("REVIEW_THRESHOLD_PCT", 50.0)?,
        };

        if config.questions_per_test == 0 {
            return Err(Error::Config(
                "QUESTIONS_PER_TEST must be at least 1".to_string(),
            ));
        }
        if config.review_threshold_pct > config.excellent_threshold_pct {
            return Err(Error::Config(
                "REVIEW_THRESHOLD_PCT must not exceed EXCELLENT_THRESHOLD_PCT".to_string(),
            ));
        }

        Ok(config)
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
