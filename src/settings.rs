//! Host settings and preferences
//!
//! Persisted in LocalStorage on the web; read from the JSON file named by
//! `ARCADE_SETTINGS` on native.

use std::str::FromStr;

use log::LevelFilter;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::codebreak::Color;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Palette color selected when a color-guess game starts
    pub default_color: Color,
    /// Fixed seed for replaying the same secrets and rolls
    pub seed: Option<u64>,
    /// Show what each open category would score after a roll
    pub show_score_preview: bool,
    /// `log` level name (error, warn, info, debug, trace, off)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_color: Color::Red,
            seed: None,
            show_score_preview: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "arcade_settings";

    /// Env var holding the native settings file path
    #[allow(dead_code)]
    const PATH_VAR: &'static str = "ARCADE_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parsed log level, falling back to Info for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Seed to use: the fixed one if configured, else `fallback`
    pub fn effective_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// RNG to inject into new sessions
    pub fn rng(&self, fallback_seed: u64) -> Pcg32 {
        crate::seeded_rng(self.effective_seed(fallback_seed))
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from `$ARCADE_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Write settings back to `$ARCADE_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let Ok(path) = std::env::var(Self::PATH_VAR) else {
            return;
        };
        match self.to_json() {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Cannot write settings file {}: {}", path, e);
                }
            }
            Err(e) => log::warn!("Cannot encode settings: {}", e),
        }
    }
}
