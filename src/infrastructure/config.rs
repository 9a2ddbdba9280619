use crate::domain::error::FtError;
use crate::domain::model::LanguagePair;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "floattrans";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    pub http_proxy: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub hotkey: HotkeyConfig,
    #[serde(default)]
    pub language: LanguagePair,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HotkeyConfig {
    #[serde(default = "default_combo")]
    pub combo: String,
    #[serde(default = "default_presses")]
    pub presses: u32,
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            combo: default_combo(),
            presses: default_presses(),
            window_ms: default_window_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_emoji: default_enable_emoji(),
            http_proxy: None,
            timeout_secs: default_timeout_secs(),
            hotkey: HotkeyConfig::default(),
            language: LanguagePair::default(),
            logging: Logging::default(),
        }
    }
}

// Defaults
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_combo() -> String {
    "ctrl+c".to_string()
}
fn default_presses() -> u32 {
    3
}
fn default_window_ms() -> u64 {
    1000
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

/// Directory holding both config.toml and the provider settings document
pub fn get_app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

pub fn get_config_path() -> Option<PathBuf> {
    get_app_dir().map(|p| p.join("config.toml"))
}

/// Provider settings live next to config.toml (~/.config/floattrans/config.json on Linux)
pub fn get_settings_path() -> PathBuf {
    get_app_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

pub fn load_config() -> Result<Config, FtError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(parse_config(&content));
        }
    }

    Ok(Config::default())
}

/// Parse config.toml, falling back to defaults on malformed content
pub fn parse_config(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Config::default()
        }
    }
}

pub fn generate_config_sample() -> Result<(), FtError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| FtError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| FtError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(FtError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
