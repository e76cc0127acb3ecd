//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k for cursor movement and h/l for page cycling
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("h/l", "Page"));
        self
    }

    /// Add / for search
    pub fn with_search(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self
    }

    /// Add Ctrl+q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("C-q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
