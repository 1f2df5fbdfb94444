use web_sys::window;

use crate::config::THEME_STORAGE_KEY;

const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

/// Which of the sun/moon icons should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeIcons {
    pub sun_visible: bool,
    pub moon_visible: bool,
}

impl ThemePreference {
    /// Anything other than `"dark"`, including a missing value, reads as light.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn icons(self) -> ThemeIcons {
        ThemeIcons {
            sun_visible: !self.is_dark(),
            moon_visible: self.is_dark(),
        }
    }

    pub fn activated_message(self) -> &'static str {
        match self {
            ThemePreference::Light => "Light theme activated",
            ThemePreference::Dark => "Dark theme activated",
        }
    }
}

/// Durable key-value storage. Failures are swallowed by implementations.
pub trait PreferenceBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::debug!("theme preference not persisted");
                }
            }
        }
    }
}

pub struct PreferenceStore<B> {
    backend: B,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> ThemePreference {
        ThemePreference::parse(self.backend.read(THEME_STORAGE_KEY).as_deref())
    }

    pub fn save(&self, pref: ThemePreference) {
        self.backend.write(THEME_STORAGE_KEY, pref.as_str());
    }

    /// Flips `current`, persists the result and returns it.
    pub fn toggle(&self, current: ThemePreference) -> ThemePreference {
        let next = current.toggled();
        self.save(next);
        next
    }
}

impl PreferenceStore<LocalStorage> {
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }
}

/// Sets or clears the `dark` class on `<html>` and returns the icon state
/// the toggles should render.
pub fn apply(pref: ThemePreference) -> ThemeIcons {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = if pref.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
    pref.icons()
}

/// Reads the theme currently applied to the document.
pub fn applied() -> ThemePreference {
    let dark = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map_or(false, |root| root.class_list().contains(DARK_CLASS));
    if dark {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl PreferenceBackend for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn missing_or_malformed_value_defaults_to_light() {
        let store = PreferenceStore::new(MemoryStorage::default());
        assert_eq!(store.load(), ThemePreference::Light);

        let backend = MemoryStorage::default();
        backend.write(THEME_STORAGE_KEY, "solarized");
        assert_eq!(PreferenceStore::new(backend).load(), ThemePreference::Light);
    }

    #[test]
    fn saved_preference_restores_same_icons() {
        for pref in [ThemePreference::Light, ThemePreference::Dark] {
            let store = PreferenceStore::new(MemoryStorage::default());
            store.save(pref);
            assert_eq!(store.load().icons(), pref.icons());
        }
    }

    #[test]
    fn exactly_one_icon_is_visible() {
        let light = ThemePreference::Light.icons();
        assert!(light.sun_visible && !light.moon_visible);
        let dark = ThemePreference::Dark.icons();
        assert!(!dark.sun_visible && dark.moon_visible);
    }

    #[test]
    fn toggle_persists_flipped_value() {
        let store = PreferenceStore::new(MemoryStorage::default());
        let next = store.toggle(ThemePreference::Light);
        assert_eq!(next, ThemePreference::Dark);
        assert_eq!(store.load(), ThemePreference::Dark);
        assert_eq!(next.activated_message(), "Dark theme activated");

        let back = store.toggle(next);
        assert_eq!(back, ThemePreference::Light);
        assert_eq!(store.load(), ThemePreference::Light);
    }
}
