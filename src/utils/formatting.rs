//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render a monetary amount with two decimals and the configured symbol.
/// Negative values keep the sign in front of the symbol: `-$ 12.50`.
pub fn money(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{} {:.2}", symbol, value.abs())
    } else {
        format!("{} {:.2}", symbol, value)
    }
}

/// Render an optional rate ("17.50" or "--" for undefined).
pub fn rate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_keeps_sign_outside_symbol() {
        assert_eq!(money(12.5, "$"), "$ 12.50");
        assert_eq!(money(-12.5, "$"), "-$ 12.50");
        assert_eq!(money(0.0, "€"), "€ 0.00");
    }

    #[test]
    fn undefined_rate_renders_as_dashes() {
        assert_eq!(rate(None), "--");
        assert_eq!(rate(Some(17.5)), "17.50");
    }
}
