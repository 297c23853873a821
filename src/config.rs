// src/config.rs
// Environment-driven settings for the demo app

use std::path::PathBuf;

use crate::error::{BizEdgeError, Result};
use crate::i18n::Language;

pub const BACKEND_URL_VAR: &str = "BIZEDGE_BACKEND_URL";
pub const DB_PATH_VAR: &str = "BIZEDGE_DB_PATH";
pub const LOG_DIR_VAR: &str = "BIZEDGE_LOG_DIR";
pub const LANG_VAR: &str = "BIZEDGE_LANG";
pub const DEBUG_VAR: &str = "DEBUG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Insights backend base. `None` lets the resolver use its built-in default.
    pub backend_url: Option<String>,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub language: Language,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            db_path: PathBuf::from("./db/bizedge.db"),
            log_dir: PathBuf::from("./logs"),
            language: Language::En,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let language = match get(LANG_VAR) {
            Some(code) => Language::from_code(&code)
                .ok_or_else(|| BizEdgeError::Config(format!("unsupported language '{}'", code)))?,
            None => defaults.language,
        };

        Ok(Self {
            backend_url: get(BACKEND_URL_VAR),
            db_path: get(DB_PATH_VAR).map(PathBuf::from).unwrap_or(defaults.db_path),
            log_dir: get(LOG_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.log_dir),
            language,
            debug: get(DEBUG_VAR).as_deref() == Some("true"),
        })
    }
}
