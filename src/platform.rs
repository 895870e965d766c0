//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for wizard shortcuts (Ctrl+N next, Ctrl+U clear).
/// Control on every platform.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Next shortcut display for form help text
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

/// Clear field shortcut display
pub const CLEAR_SHORTCUT: &str = "Ctrl+U";
