/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const BOLD: &str = "\x1b[1m";

// Block backgrounds (white foreground on top).
pub const BG_RED: &str = "\x1b[97;41m";
pub const BG_GREEN: &str = "\x1b[97;42m";
pub const BG_YELLOW: &str = "\x1b[30;43m";
pub const BG_BLUE: &str = "\x1b[97;44m";
pub const BG_PURPLE: &str = "\x1b[97;45m";
pub const BG_CYAN: &str = "\x1b[30;46m";
pub const BG_GREY: &str = "\x1b[97;100m";
pub const BG_PINK: &str = "\x1b[97;48;5;205m";
pub const BG_ORANGE: &str = "\x1b[30;48;5;208m";

/// Wrap `text` in `code` … RESET when `enabled`.
pub fn paint(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Grey out empty grid cells and placeholders.
pub fn dim(text: &str, enabled: bool) -> String {
    paint(text, GREY, enabled)
}
