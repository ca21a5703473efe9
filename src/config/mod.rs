use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.ynab.com/v1/";

const APP_DIR: &str = "ynab-transaction";
const CONFIG_FILE: &str = "config.json";

pub const CONFIG_PATH_VAR: &str = "YNAB_CONFIG";
pub const TOKEN_VAR: &str = "YNAB_TOKEN";
pub const BUDGET_ID_VAR: &str = "YNAB_BUDGET_ID";
pub const BASE_URL_VAR: &str = "YNAB_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file {path}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing `{field}`: set {var} or add it to the configuration file")]
    Missing {
        field: &'static str,
        var: &'static str,
    },
}

/// Settings read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub budget_id: String,
    pub base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("budget_id", &self.budget_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// On-disk shape of the configuration file. Every field is optional so the
/// environment can fill the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub budget_id: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ConfigFile {
    /// Reads `path`, treating a missing file as empty.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Serde {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Loads the configuration file (if any) and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) => ConfigFile::load(&path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Merges file values with overrides looked up through `lookup`.
    pub fn resolve(
        file: ConfigFile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let pick = |var: &str, fallback: Option<String>| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .or(fallback)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = pick(TOKEN_VAR, file.token).ok_or(ConfigError::Missing {
            field: "token",
            var: TOKEN_VAR,
        })?;
        let budget_id = pick(BUDGET_ID_VAR, file.budget_id).ok_or(ConfigError::Missing {
            field: "budget_id",
            var: BUDGET_ID_VAR,
        })?;
        let base_url =
            pick(BASE_URL_VAR, file.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            token,
            budget_id,
            base_url,
        })
    }
}

/// Location of the configuration file: `YNAB_CONFIG` when set, otherwise
/// `<config dir>/ynab-transaction/config.json`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
