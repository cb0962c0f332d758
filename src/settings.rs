//! User settings stored as settings.json in the app data directory

use crate::constants::{ASSET_DIR_NAME, COUNTER_DURATION_SECS, SETTINGS_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
    pub start_fullscreen: bool,

    // Navigation
    pub remember_slide: bool,
    pub last_slide: usize,

    // Assets
    pub asset_dir: Option<String>,

    // Motion
    pub counter_duration_secs: f32,
    pub reduce_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            start_fullscreen: false,
            remember_slide: false,
            last_slide: 0,
            asset_dir: None,
            counter_duration_secs: COUNTER_DURATION_SECS,
            reduce_motion: false,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Slide to open on startup, clamped to the deck length
    pub fn initial_slide(&self, slide_count: usize) -> usize {
        if self.remember_slide && self.last_slide < slide_count {
            self.last_slide
        } else {
            0
        }
    }

    /// Negative or non-finite durations collapse to zero (counters jump to their end value).
    /// Durations too large to represent fall back to the default.
    pub fn counter_duration(&self) -> Duration {
        if self.reduce_motion || !self.counter_duration_secs.is_finite() {
            return Duration::ZERO;
        }
        match Duration::try_from_secs_f32(self.counter_duration_secs.max(0.0)) {
            Ok(duration) => duration,
            Err(e) => {
                warn!(secs = self.counter_duration_secs, error = %e, "Counter duration out of range, using default");
                Duration::from_secs_f32(COUNTER_DURATION_SECS)
            }
        }
    }

    /// Override from settings, else `assets/` beside the executable, else `./assets`
    pub fn asset_dir_or_default(&self) -> PathBuf {
        if let Some(dir) = &self.asset_dir {
            return PathBuf::from(dir);
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join(ASSET_DIR_NAME)))
            .filter(|p| p.is_dir())
            .unwrap_or_else(|| PathBuf::from(ASSET_DIR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(720.0),
            remember_slide: true,
            last_slide: 4,
            asset_dir: Some("/srv/deck".into()),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), r#"{ "reduce_motion": true }"#).unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.reduce_motion);
        assert_eq!(settings.counter_duration_secs, COUNTER_DURATION_SECS);
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_initial_slide() {
        let mut settings = Settings { last_slide: 5, ..Settings::default() };
        assert_eq!(settings.initial_slide(7), 0);
        settings.remember_slide = true;
        assert_eq!(settings.initial_slide(7), 5);
        assert_eq!(settings.initial_slide(3), 0);
    }

    #[test]
    fn test_counter_duration() {
        let mut settings = Settings::default();
        assert_eq!(settings.counter_duration(), Duration::from_secs(2));
        settings.counter_duration_secs = -1.0;
        assert_eq!(settings.counter_duration(), Duration::ZERO);
        settings.counter_duration_secs = 2.0;
        settings.reduce_motion = true;
        assert_eq!(settings.counter_duration(), Duration::ZERO);
    }

    #[test]
    fn test_huge_counter_duration_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), r#"{ "counter_duration_secs": 1e20 }"#).unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.counter_duration(), Duration::from_secs_f32(COUNTER_DURATION_SECS));
    }

    #[test]
    fn test_asset_dir_override() {
        let settings = Settings { asset_dir: Some("/tmp/slides".into()), ..Settings::default() };
        assert_eq!(settings.asset_dir_or_default(), PathBuf::from("/tmp/slides"));
    }
}
