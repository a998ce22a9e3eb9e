//! Platform-specific configuration

use crossterm::event::{KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for app shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Whether the key was pressed with the shortcut modifier
pub fn is_command(key: &KeyEvent) -> bool {
    key.modifiers.contains(COMMAND_MODIFIER) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Submit shortcut display for the help line
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password reveal shortcut display
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+P";

/// Login shortcut display
#[cfg(target_os = "macos")]
pub const LOGIN_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const LOGIN_SHORTCUT: &str = "Ctrl+L";
