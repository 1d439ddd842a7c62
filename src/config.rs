use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_AVATAR: &str = "assets/avatar.png";

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

/// Persisted panel settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Path to the avatar image shown next to every message.
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            avatar: default_avatar(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("io", "chatpane", "chatpane") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            log::warn!("failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings {
            theme: "light".to_string(),
            avatar: "/tmp/face.png".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, DEFAULT_THEME);
        assert_eq!(settings.avatar, DEFAULT_AVATAR);

        let partial: Settings = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(partial.theme, "light");
        assert_eq!(partial.avatar, DEFAULT_AVATAR);
    }
}
