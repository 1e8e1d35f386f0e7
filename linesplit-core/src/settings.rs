use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
}

/// Last-used settings, reloaded at startup and rewritten after each user
/// action that changes one of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    pub num_parts: usize,
    pub theme: ThemeChoice,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            output_dir: None,
            num_parts: 2,
            theme: ThemeChoice::Dark,
        }
    }
}

pub fn normalize_settings(mut settings: AppSettings) -> AppSettings {
    settings.num_parts = settings.num_parts.max(1);
    if let Some(dir) = &settings.output_dir {
        if !dir.is_dir() {
            settings.output_dir = None;
        }
    }
    settings
}

pub fn load_settings_file(path: &Path) -> Result<AppSettings, String> {
    let data = std::fs::read(path)
        .map_err(|e| format!("Failed to read settings file '{}': {e}", path.display()))?;
    let settings: AppSettings = serde_json::from_slice(&data)
        .map_err(|e| format!("Failed to parse settings file '{}': {e}", path.display()))?;
    Ok(normalize_settings(settings))
}

pub fn save_settings_file(path: &Path, settings: &AppSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let data = serde_json::to_vec_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    std::fs::write(path, data)
        .map_err(|e| format!("Failed to write settings file '{}': {e}", path.display()))
}

pub fn default_settings_path() -> PathBuf {
    let base = std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join(".linesplit").join("settings.json")
}

/// Owns the settings file path plus the current values; every mutation goes
/// through [`SettingsStore::update`] so the file stays in sync with the UI.
pub struct SettingsStore {
    path: PathBuf,
    pub settings: AppSettings,
}

impl SettingsStore {
    pub fn load_or_default(path: PathBuf) -> Self {
        let settings = match load_settings_file(&path) {
            Ok(settings) => settings,
            Err(err) => {
                if path.exists() {
                    log::warn!("{err}");
                }
                AppSettings::default()
            }
        };
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn update(&mut self, apply: impl FnOnce(&mut AppSettings)) {
        apply(&mut self.settings);
        self.settings = normalize_settings(self.settings.clone());
        if let Err(err) = save_settings_file(&self.path, &self.settings) {
            log::warn!("{err}");
        }
    }
}
