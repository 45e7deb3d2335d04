//! Gate configuration from the environment.
//!
//! Every remote-facing setting comes from `GSK_*` environment variables.
//! The whole set is validated up front so a run fails with one message
//! naming every missing variable instead of stopping at the first read.

use crate::error::ConfigError;

/// Environment variable holding the service base URL.
pub const ENV_URL: &str = "GSK_URL";
/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "GSK_TOKEN";
/// Environment variable holding the project key.
pub const ENV_PROJECT_KEY: &str = "GSK_PROJECT_KEY";
/// Environment variable holding the project display name.
pub const ENV_PROJECT_NAME: &str = "GSK_PROJECT_NAME";
/// Environment variable holding the project description.
pub const ENV_PROJECT_DESCRIPTION: &str = "GSK_PROJECT_DESCRIPTION";

/// All variables the gate requires, in reporting order.
pub const REQUIRED_VARS: [&str; 5] = [
    ENV_URL,
    ENV_TOKEN,
    ENV_PROJECT_KEY,
    ENV_PROJECT_NAME,
    ENV_PROJECT_DESCRIPTION,
];

/// Validated gate configuration.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Service base URL without a trailing slash.
    pub url: String,
    /// API bearer token.
    pub token: String,
    /// Remote project key.
    pub project_key: String,
    /// Remote project display name.
    pub project_name: String,
    /// Remote project description.
    pub project_description: String,
}

impl GateConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset and empty values are both treated as missing; all missing
    /// variables are reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |name: &str| -> String {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        };

        let url = require(ENV_URL);
        let token = require(ENV_TOKEN);
        let project_key = require(ENV_PROJECT_KEY);
        let project_name = require(ENV_PROJECT_NAME);
        let project_description = require(ENV_PROJECT_DESCRIPTION);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            token,
            project_key,
            project_name,
            project_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        vars(&[
            (ENV_URL, "https://giskard.example.com/"),
            (ENV_TOKEN, "secret"),
            (ENV_PROJECT_KEY, "credit_scoring"),
            (ENV_PROJECT_NAME, "Credit Scoring"),
            (ENV_PROJECT_DESCRIPTION, "German credit default model"),
        ])
    }

    #[test]
    fn test_complete_environment() {
        let env = full_env();
        let config = GateConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.url, "https://giskard.example.com");
        assert_eq!(config.project_key, "credit_scoring");
    }

    #[test]
    fn test_all_missing_vars_reported_together() {
        let mut env = full_env();
        env.remove(ENV_TOKEN);
        env.insert(ENV_PROJECT_NAME.to_string(), "  ".to_string());

        let error = GateConfig::from_lookup(|name| env.get(name).cloned()).unwrap_err();
        let ConfigError::MissingVars(missing) = error;
        assert_eq!(missing, vec![ENV_TOKEN, ENV_PROJECT_NAME]);
    }

    #[test]
    fn test_empty_environment_lists_every_var() {
        let error = GateConfig::from_lookup(|_| None).unwrap_err();
        let ConfigError::MissingVars(missing) = error;
        assert_eq!(missing.len(), REQUIRED_VARS.len());
    }
}
