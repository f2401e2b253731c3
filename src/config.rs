use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "AP_MANAGER_CONFIG";

pub const DEFAULT_DUE_IN_DAYS: i64 = 30;
/// Longest payment term a config may set, ten years.
pub const MAX_DUE_IN_DAYS: i64 = 3650;
const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
const MIN_WINDOW_SIDE: f32 = 200.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub company_name: String,
    pub vendors: Vec<String>,
    pub bank_accounts: Vec<String>,
    pub due_in_days: i64,
    pub window: WindowConfig,
}

impl WindowConfig {
    fn sanitized(self) -> Self {
        let side = |value: f32, fallback: f32, name: &str| {
            if value.is_finite() && value >= MIN_WINDOW_SIDE {
                value
            } else {
                tracing::warn!(value, fallback, "ignoring window {name}");
                fallback
            }
        };

        Self {
            width: side(self.width, DEFAULT_WINDOW_WIDTH, "width"),
            height: side(self.height, DEFAULT_WINDOW_HEIGHT, "height"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company_name: "Mach 5 LLC".to_string(),
            vendors: vec![
                "Hacienda Design".to_string(),
                "Cisco's".to_string(),
                "FedEx".to_string(),
                "Snyder Uniform Supply".to_string(),
            ],
            bank_accounts: vec![
                "Bank of America - 1408".to_string(),
                "Wells Fargo - 2356".to_string(),
            ],
            due_in_days: DEFAULT_DUE_IN_DAYS,
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    /// `$AP_MANAGER_CONFIG`, falling back to `<config dir>/ap-manager/config.json`.
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ap-manager")
            .join("config.json")
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Clamps values the rest of the program cannot use.
    fn sanitized(mut self) -> Self {
        if !(0..=MAX_DUE_IN_DAYS).contains(&self.due_in_days) {
            let clamped = self.due_in_days.clamp(0, MAX_DUE_IN_DAYS);
            tracing::warn!(due_in_days = self.due_in_days, clamped, "due_in_days out of range");
            self.due_in_days = clamped;
        }
        self.window = self.window.sanitized();
        self
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "configuration loaded");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    pub fn default_bank_account(&self) -> String {
        self.bank_accounts.first().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.company_name, "Mach 5 LLC");
        assert_eq!(config.default_bank_account(), "Bank of America - 1408");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"company_name": "Acme Corp", "window": {{"width": 1400}}}}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.company_name, "Acme Corp");
        assert_eq!(config.window.width, 1400.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.due_in_days, 30);
        assert_eq!(config.vendors.len(), 4);
    }

    #[test]
    fn out_of_range_due_term_is_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"due_in_days": 1000000000}}"#).unwrap();
        assert_eq!(AppConfig::load_or_default(file.path()).due_in_days, MAX_DUE_IN_DAYS);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"due_in_days": -5}}"#).unwrap();
        assert_eq!(AppConfig::load(file.path()).unwrap().due_in_days, 0);
    }

    #[test]
    fn unusable_window_size_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"window": {{"width": 0, "height": -300}}}}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.window, WindowConfig::default());

        let window = WindowConfig {
            width: f32::NAN,
            height: 900.0,
        }
        .sanitized();
        assert_eq!(window.width, 1200.0);
        assert_eq!(window.height, 900.0);
    }

    // The only test touching the process environment, so nothing races on it.
    #[test]
    fn config_path_honours_env_override() {
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
        let fallback = AppConfig::default_path();
        assert!(fallback.ends_with(Path::new("ap-manager").join("config.json")));

        let file = tempfile::NamedTempFile::new().unwrap();
        unsafe { std::env::set_var(CONFIG_ENV_VAR, file.path()) };
        let overridden = AppConfig::default_path();
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

        assert_eq!(overridden, file.path());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(AppConfig::load_or_default(file.path()), AppConfig::default());
    }

    #[test]
    fn empty_bank_list_has_blank_default() {
        let config = AppConfig {
            bank_accounts: Vec::new(),
            ..AppConfig::default()
        };
        assert_eq!(config.default_bank_account(), "");
    }
}
