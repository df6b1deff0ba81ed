//! Environment selection and merchant credentials.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const ENV_ENVIRONMENT: &str = "CHECKOUT_ENVIRONMENT";
pub const ENV_CLIENT_ID: &str = "CHECKOUT_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "CHECKOUT_CLIENT_SECRET";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown environment {0:?}, expected \"sandbox\" or \"production\"")]
    UnknownEnvironment(String),

    #[error("missing required setting {0}")]
    Missing(&'static str),
}

/// Which checkout API deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api.sandbox.paypal.com",
            Environment::Production => "https://api.paypal.com",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Merchant credentials plus the selected environment.
#[derive(Clone, PartialEq, Eq)]
pub struct MerchantSettings {
    pub environment: Environment,
    pub client_id: String,
    pub client_secret: String,
}

impl MerchantSettings {
    /// Read settings from `CHECKOUT_ENVIRONMENT` (optional, defaults to
    /// sandbox), `CHECKOUT_CLIENT_ID` and `CHECKOUT_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(ENV_ENVIRONMENT) {
            Some(raw) => raw.parse()?,
            None => Environment::default(),
        };
        let client_id = lookup(ENV_CLIENT_ID)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(ENV_CLIENT_ID))?;
        let client_secret = lookup(ENV_CLIENT_SECRET)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(ENV_CLIENT_SECRET))?;
        Ok(Self {
            environment,
            client_id,
            client_secret,
        })
    }

    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }
}

impl fmt::Debug for MerchantSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantSettings")
            .field("environment", &self.environment)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
