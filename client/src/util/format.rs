//! Display formatting for lengths and prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a length with at most two decimals and no trailing zeros.
pub fn format_length(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Group an integer total with thousands separators for display.
///
/// The clipboard always receives the plain digits.
pub fn format_total(total: u64) -> String {
    let digits = total.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
