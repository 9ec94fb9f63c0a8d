//! Where the plant list lives.
//!
//! Data directory precedence: explicit flag, then `PLANTAS_DATA_DIR`,
//! then the platform data directory, then `./.mis-plantas`.

use std::path::PathBuf;

use crate::db::DEFAULT_STORE_KEY;

pub const DATA_DIR_ENV: &str = "PLANTAS_DATA_DIR";
pub const STORE_KEY_ENV: &str = "PLANTAS_STORE_KEY";
const APP_DIR: &str = "mis-plantas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub store_key: String,
}

impl Config {
    /// Resolve from a CLI override and the process environment.
    pub fn resolve(data_dir_flag: Option<PathBuf>) -> Self {
        Self::resolve_with(data_dir_flag, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::resolve`] with an injectable environment lookup.
    pub fn resolve_with<F>(data_dir_flag: Option<PathBuf>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = data_dir_flag
            .or_else(|| non_empty(env(DATA_DIR_ENV)).map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(format!(".{}", APP_DIR)));

        let store_key =
            non_empty(env(STORE_KEY_ENV)).unwrap_or_else(|| DEFAULT_STORE_KEY.to_string());

        Self {
            data_dir,
            store_key,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
