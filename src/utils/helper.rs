/// Render an amount with exactly two fraction digits.
///
/// Rounds to nearest on the exact binary value of the `f64`, which is
/// what the standard float formatter does. `1.005_f64` sits just below
/// the decimal tie, so it renders as `1.00`.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Render a USD value for display, e.g. `$4000.00`.
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
