//! Color-mode detection for the dry-run preview

use std::io::IsTerminal;

/// Decide whether the preview may emit ANSI styling.
///
/// Precedence: NO_COLOR (https://no-color.org/) disables styling
/// unconditionally, CLICOLOR_FORCE turns it on even when piped,
/// CLICOLOR=0 opts out, and otherwise styling follows whether stdout
/// is a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(force) = std::env::var("CLICOLOR_FORCE") {
        if force != "0" {
            return true;
        }
    }

    if matches!(std::env::var("CLICOLOR").as_deref(), Ok("0")) {
        return false;
    }

    std::io::stdout().is_terminal()
}
