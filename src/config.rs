use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Application metadata
    pub deployment: Deployment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8000,
            deployment: Deployment::Local,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `API_PORT` is set but is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            // API settings
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),
            api_port: match env::var("API_PORT") {
                Ok(raw) => parse_port(&raw)?,
                Err(_) => defaults.api_port,
            },

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var: "API_PORT",
        value: raw.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
