use crate::error::{CrudgenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_PACKAGE: &str = "com.example";
pub const DEFAULT_FRAMEWORK: &str = "spring-boot";

/// Defaults for command-line options, stored in `config.json`.
///
/// Every field is optional; command-line flags always win over the file, and the
/// file wins over the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub api_url: Option<String>,
    pub package_name: Option<String>,
    pub framework: Option<String>,

    /// Where this config was read from, if anywhere
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl ClientConfig {
    /// Load config from the given directory. Returns `None` if there is no config file.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Option<Self>> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&config_path).map_err(|e| CrudgenError::Config {
            path: config_path.clone(),
            message: e.to_string(),
        })?;
        let mut config: ClientConfig =
            serde_json::from_str(&content).map_err(|e| CrudgenError::Config {
                path: config_path.clone(),
                message: e.to_string(),
            })?;
        config.source = Some(config_path);
        Ok(Some(config))
    }

    /// First config found among `dirs`, or the empty config.
    pub fn discover<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        for dir in dirs {
            if let Some(config) = Self::load(dir)? {
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    pub fn api_url(&self, flag: Option<String>) -> String {
        pick(flag, self.api_url.as_deref(), DEFAULT_API_URL)
    }

    pub fn package_name(&self, flag: Option<String>) -> String {
        pick(flag, self.package_name.as_deref(), DEFAULT_PACKAGE)
    }

    pub fn framework(&self, flag: Option<String>) -> String {
        pick(flag, self.framework.as_deref(), DEFAULT_FRAMEWORK)
    }
}

fn pick(flag: Option<String>, configured: Option<&str>, default: &str) -> String {
    flag.unwrap_or_else(|| configured.unwrap_or(default).to_string())
}
