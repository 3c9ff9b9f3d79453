//! Theme preference initialization and toggle.
//!
//! Reads the stored preference once at startup and applies the `dark` class
//! to the `<html>` element. Toggle writes back to the store and updates that
//! class. Both sides are injected (`PreferenceStore`, `RootMarker`) so the
//! flip is testable without a browser.
//!
//! TRADE-OFFS
//! ==========
//! With no stored value the console starts light; the OS color-scheme hint is
//! deliberately not consulted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::PreferenceStore;

pub const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

/// Persisted theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Parse a stored value. Only `"dark"` and `"light"` are recognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Visual marker on the document root.
pub trait RootMarker {
    fn set_dark(&self, enabled: bool);
}

/// The `<html>` element of the current document. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl RootMarker for DocumentRoot {
    fn set_dark(&self, enabled: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (enabled, DARK_CLASS);
        }
    }
}

/// Read the stored preference, if it holds a recognized value.
pub fn read_preference(store: &impl PreferenceStore) -> Option<ThemePreference> {
    store.get(STORAGE_KEY).as_deref().and_then(ThemePreference::parse)
}

/// Startup theme: the stored preference, or light.
pub fn initial(store: &impl PreferenceStore, marker: &impl RootMarker) -> ThemePreference {
    let pref = read_preference(store).unwrap_or_default();
    apply(marker, pref);
    pref
}

/// Apply or remove the dark marker for `pref`.
pub fn apply(marker: &impl RootMarker, pref: ThemePreference) {
    marker.set_dark(pref.is_dark());
}

/// Flip the theme, apply the marker, and persist the new preference.
pub fn toggle(current: ThemePreference, store: &impl PreferenceStore, marker: &impl RootMarker) -> ThemePreference {
    let next = current.toggled();
    apply(marker, next);
    store.set(STORAGE_KEY, next.as_str());
    next
}
