use crate::client::store::storage::{SharedStorage, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Name of the color token set applied to the document root; switching
    /// it restyles the whole tree.
    pub fn theme_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Global visual mode switch, persisted across sessions as a JSON boolean.
/// Defaults to dark when nothing usable is stored.
pub struct ThemeStore {
    mode: ThemeMode,
    storage: SharedStorage,
}

impl ThemeStore {
    pub fn new(storage: SharedStorage) -> Self {
        let mode = match storage.get(THEME_KEY).as_deref().map(serde_json::from_str::<bool>) {
            Some(Ok(false)) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };

        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };

        if let Ok(value) = serde_json::to_string(&self.mode.is_dark()) {
            self.storage.set(THEME_KEY, &value);
        }
    }
}
