use std::env;
use std::fmt::Formatter;
use std::time::Duration;

use dotenv::dotenv;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 5;
const DEFAULT_GEOCODER_USER_AGENT: &str = "omenucesoir/0.1";
const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { name: &'static str, value: String }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value for {}: {:?}", name, value)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub geocoder_url: String,
    pub geocoder_timeout: Duration,
    pub geocoder_user_agent: String,
    pub tile_url: String
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Config::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let or_default = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_owned());

        let geocoder_timeout = match var("GEOCODER_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue { name: "GEOCODER_TIMEOUT_SECS", value })?,
            None => DEFAULT_GEOCODER_TIMEOUT_SECS
        };

        Ok(Config {
            bind_address: or_default("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            geocoder_url: or_default("GEOCODER_URL", DEFAULT_GEOCODER_URL),
            geocoder_timeout: Duration::from_secs(geocoder_timeout),
            geocoder_user_agent: or_default("GEOCODER_USER_AGENT", DEFAULT_GEOCODER_USER_AGENT),
            tile_url: or_default("TILE_URL", DEFAULT_TILE_URL)
        })
    }
}
