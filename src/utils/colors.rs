/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Greys out empty cells (no project, no data) and leaves the rest as is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Hours column: green when there is flight time, grey when zero.
pub fn colorize_hours(hours: f64, text: &str) -> String {
    if hours > 0.0 {
        format!("{GREEN}{text}{RESET}")
    } else {
        format!("{GREY}{text}{RESET}")
    }
}
