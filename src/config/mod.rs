mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use std::path::Path;

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("endpoints.local_url", &self.endpoints.local_url),
            ("endpoints.production_url", &self.endpoints.production_url),
        ] {
            url::Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
                field,
                value: value.clone(),
                source,
            })?;
        }

        for (field, value) in [
            ("paths.health", &self.paths.health),
            ("paths.reviews", &self.paths.reviews),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidPath {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.retry.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_cold_start_policy() {
        let config = Config::default();
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.backoff_base_ms, 1000);
        assert_eq!(config.timeouts.request_ms, 8000);
        assert_eq!(config.timeouts.prewarm_ms, 5000);
        assert_eq!(config.prewarm.delay_ms, 500);
        assert_eq!(config.paths.health, "/healthz");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoints:\n  production_url: https://api.example.org\nretry:\n  max_attempts: 3"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.endpoints.production_url, "https://api.example.org");
        assert_eq!(config.endpoints.local_url, "http://localhost:3000");
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.backoff_base_ms, 1000);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/reviewkit.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.endpoints.production_url = "not a url".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { field: "endpoints.production_url", .. })
        ));

        let mut config = Config::default();
        config.paths.reviews = "api/reviews".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPath { .. })
        ));

        let mut config = Config::default();
        config.retry.max_attempts = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroAttempts)));
    }
}
