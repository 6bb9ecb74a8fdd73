use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use cloner_core::Theme;
use cloner_engine::AtomicFileWriter;
use cloner_logging::{cloner_info, cloner_warn};

const THEME_KEY: &str = "theme";

/// Small key-value store backed by one RON file holding a string map.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.load_map().remove(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map();
        map.insert(key.to_string(), value.to_string());

        let content = ron::ser::to_string_pretty(&map, ron::ser::PrettyConfig::new())?;
        let (dir, filename) = split_path(&self.path);
        AtomicFileWriter::new(dir).write(&filename, &content)?;
        Ok(())
    }

    /// Theme read once at start-up; missing or unknown values mean the default.
    pub fn load_theme(&self) -> Theme {
        match self.get(THEME_KEY) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                cloner_warn!("Ignoring unknown theme {:?} in {:?}", value, self.path);
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        match self.set(THEME_KEY, theme.as_str()) {
            Ok(()) => cloner_info!("Saved theme {} to {:?}", theme.as_str(), self.path),
            Err(err) => cloner_warn!("Failed to save theme to {:?}: {}", self.path, err),
        }
    }

    fn load_map(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return BTreeMap::new();
            }
            Err(err) => {
                cloner_warn!("Failed to read preferences from {:?}: {}", self.path, err);
                return BTreeMap::new();
            }
        };

        match ron::from_str(&content) {
            Ok(map) => map,
            Err(err) => {
                cloner_warn!("Failed to parse preferences from {:?}: {}", self.path, err);
                BTreeMap::new()
            }
        }
    }
}

fn split_path(path: &Path) -> (PathBuf, String) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".cloner_prefs.ron".to_string());
    (dir, filename)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use cloner_core::{update, AppState, Effect, Msg, Theme};
    use tempfile::TempDir;

    use super::PreferenceStore;

    fn store_in(temp: &TempDir) -> PreferenceStore {
        PreferenceStore::new(temp.path().join("prefs.ron"))
    }

    #[test]
    fn missing_file_means_default_theme() {
        let temp = TempDir::new().unwrap();
        assert_eq!(store_in(&temp).load_theme(), Theme::Dark);
    }

    #[test]
    fn theme_is_stored_as_plain_literal() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save_theme(Theme::Light);

        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.load_theme(), Theme::Light);
    }

    #[test]
    fn other_keys_survive_theme_writes() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.set("last_url", "https://example.com").unwrap();
        store.save_theme(Theme::Light);

        assert_eq!(store.get("last_url").as_deref(), Some("https://example.com"));
    }

    #[test]
    fn garbage_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(temp.path().join("prefs.ron"), "{{{{").unwrap();
        assert_eq!(store.load_theme(), Theme::Dark);

        store.set("theme", "sepia").unwrap();
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn toggling_twice_round_trips_persisted_value() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save_theme(Theme::Light);

        let mut state = AppState::new();
        for msg in [
            Msg::ThemeRestored(store.load_theme()),
            Msg::ThemeToggled,
            Msg::ThemeToggled,
        ] {
            let (next, effects) = update(state, msg);
            for effect in effects {
                if let Effect::PersistTheme(theme) = effect {
                    store.save_theme(theme);
                }
            }
            state = next;
        }

        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }
}
