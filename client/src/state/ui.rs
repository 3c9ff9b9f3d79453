//! Application-wide presentation state.
//!
//! DESIGN
//! ======
//! Only the theme is shared across routes. It is injected once at startup
//! from the preference store and changed through `util::theme::toggle`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::ThemePreference;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePreference,
}

impl UiState {
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}
