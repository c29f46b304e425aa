use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

/// Which backend holds class records. Instances always stay local.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Local,
    Remote,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub backend: BackendKind,
    pub database_path: String,
    pub catalog_base_url: Url,
    pub debug: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP").separator("_"))
            .set_default("backend", "local")?
            .set_default("database_path", "yoga_classes.db")?
            .set_default("catalog_base_url", "http://10.0.2.2:5000")?
            .set_default("debug", false)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_defaults() {
        unsafe {
            std::env::remove_var("APP_BACKEND");
            std::env::remove_var("APP_DEBUG");
        }
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.backend, BackendKind::Local);
        assert_eq!(settings.database_path, "yoga_classes.db");
        assert_eq!(settings.catalog_base_url.as_str(), "http://10.0.2.2:5000/");
        assert!(!settings.debug);
    }

    #[test]
    #[serial]
    fn test_backend_from_env() {
        unsafe {
            std::env::set_var("APP_BACKEND", "remote");
        }
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.backend, BackendKind::Remote);
        unsafe {
            std::env::remove_var("APP_BACKEND");
        }
    }
}
