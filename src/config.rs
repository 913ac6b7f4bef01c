use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::error::{Result, SlidedeckError};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub state_dir: PathBuf,
    pub position_key: String,
    pub window_width: i32,
    pub window_height: i32,
    pub fps: u32,
    pub swipe_threshold: f32,
    pub fullscreen: bool,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(STATE_DIR),
            position_key: POSITION_KEY.into(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,
            swipe_threshold: SWIPE_THRESHOLD,
            fullscreen: false,
            title: "Slidedeck".into(),
        }
    }
}

/// Every key of the TOML file is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    state_dir: Option<PathBuf>,
    position_key: Option<String>,
    window_width: Option<i32>,
    window_height: Option<i32>,
    fps: Option<u32>,
    swipe_threshold: Option<f32>,
    fullscreen: Option<bool>,
    title: Option<String>,
}

impl Settings {
    fn merge_file(&mut self, file: FileSettings) {
        if let Some(v) = file.state_dir {
            self.state_dir = v;
        }
        if let Some(v) = file.position_key {
            self.position_key = v;
        }
        if let Some(v) = file.window_width {
            self.window_width = v;
        }
        if let Some(v) = file.window_height {
            self.window_height = v;
        }
        if let Some(v) = file.fps {
            self.fps = v;
        }
        if let Some(v) = file.swipe_threshold {
            self.swipe_threshold = v;
        }
        if let Some(v) = file.fullscreen {
            self.fullscreen = v;
        }
        if let Some(v) = file.title {
            self.title = v;
        }
    }

    fn merge_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("SLIDEDECK_STATE_DIR") {
            self.state_dir = PathBuf::from(v);
        }
        if let Some(v) = var("SLIDEDECK_POSITION_KEY") {
            self.position_key = v;
        }
        if let Some(v) = var("SLIDEDECK_FULLSCREEN") {
            if let Some(parsed) = parse_flag(&v) {
                self.fullscreen = parsed;
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_file_settings(path: &Path) -> Result<FileSettings> {
    let raw = fs::read_to_string(path).map_err(|e| SlidedeckError::io(path, e))?;
    toml::from_str(&raw).map_err(|e| SlidedeckError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Defaults, then the config file, then `SLIDEDECK_*` variables.
///
/// An explicit `path` must exist; otherwise `slidedeck.toml` is read only if present.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

fn load_settings_with_env(
    path: Option<&Path>,
    var: impl Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let mut settings = Settings::default();

    match path {
        Some(path) => settings.merge_file(read_file_settings(path)?),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.is_file() {
                settings.merge_file(read_file_settings(default_path)?);
            }
        }
    }

    settings.merge_env(var);
    Ok(settings)
}
