//! Local chrome state owned by one `DashboardLayout` instance.
//!
//! DESIGN
//! ======
//! Nothing here is persisted or shared; each flag is flipped only by explicit
//! user action inside the shell.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Placeholder until notifications have a real source.
pub const PLACEHOLDER_NOTIFICATIONS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    /// Mobile overlay visibility.
    pub sidebar_open: bool,
    /// Desktop narrow mode.
    pub sidebar_collapsed: bool,
    pub notification_count: u32,
}

impl Default for ShellState {
    fn default() -> Self {
        Self { sidebar_open: false, sidebar_collapsed: false, notification_count: PLACEHOLDER_NOTIFICATIONS }
    }
}

impl ShellState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
