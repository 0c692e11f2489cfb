use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub graphql: GraphqlConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphqlConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl GraphqlConfig {
    pub fn client_options(&self) -> chefbook_graphql::ClientOptions {
        chefbook_graphql::ClientOptions {
            endpoint: self.endpoint.to_owned(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CHEFBOOK__GRAPHQL__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("graphql.endpoint", chefbook_graphql::DEFAULT_ENDPOINT)?
            .set_default("graphql.timeout_secs", 30)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when absent
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CHEFBOOK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(endpoint) = env::var("GRAPHQL_ENDPOINT") {
            builder = builder.set_override("graphql.endpoint", endpoint)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let endpoint = Url::parse(&self.graphql.endpoint)
            .map_err(|e| format!("GraphQL endpoint `{}` is invalid: {e}", self.graphql.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err("GraphQL endpoint must use http or https".to_string());
        }
        if self.graphql.timeout_secs == 0 {
            return Err("GraphQL timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
