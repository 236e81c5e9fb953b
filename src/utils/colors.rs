/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Paid/unpaid and done/pending flags share the same coloring.
pub fn colorize_flag(value: &str, on: bool) -> String {
    if on {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{YELLOW}{value}{RESET}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_coloring_follows_the_flag() {
        assert_eq!(colorize_flag("✔", true), format!("{GREEN}✔{RESET}"));
        assert_eq!(colorize_flag(" ", false), format!("{YELLOW} {RESET}"));
    }
}
