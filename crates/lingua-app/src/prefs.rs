//! Local preference and data-file persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Platform-specific data directory for the store file and preferences.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LINGUA_DATA_DIR") {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/lingua-companion");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("lingua-companion");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/lingua-companion");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("lingua-companion");
        }
    }
    PathBuf::from(".").join("lingua-companion")
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    theme: Option<String>,
}

fn prefs_path(data_dir: &Path) -> PathBuf {
    data_dir.join("prefs.json")
}

/// Saved theme preference, if any.
pub fn load_theme(data_dir: &Path) -> Option<Theme> {
    let raw = std::fs::read_to_string(prefs_path(data_dir)).ok()?;
    let prefs: Preferences = serde_json::from_str(&raw).ok()?;
    prefs.theme.as_deref().and_then(Theme::parse)
}

/// Persist the theme preference. Failures are logged, never surfaced — the
/// preference is non-critical.
pub fn save_theme(data_dir: &Path, theme: Theme) {
    let prefs = Preferences {
        theme: Some(theme.as_str().to_string()),
    };
    let result = std::fs::create_dir_all(data_dir).and_then(|_| {
        let raw = serde_json::to_string_pretty(&prefs).unwrap_or_default();
        std::fs::write(prefs_path(data_dir), raw)
    });
    if let Err(e) = result {
        tracing::warn!("failed to save theme preference: {}", e);
    }
}
