//! Terminal styling helpers.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Style the total line: bold green unless colors are disabled.
#[must_use]
pub fn styled_total(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().green().to_string()
    }
}

/// Style secondary text such as the empty-state hint.
#[must_use]
pub fn styled_muted(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print a confirmation of a completed action.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
