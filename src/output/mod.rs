// Output formatting — terminal display and snapshot export.

pub mod export;
pub mod terminal;

/// Format a value that is already a percentage (0-100) with one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a 0.0-1.0 fraction as a percentage with one decimal.
pub fn format_fraction(fraction: f64) -> String {
    format_percent(fraction * 100.0)
}

/// Group digits in thousands: `1234567` → `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Share of `part` in `total` as a percentage, 0 when `total` is 0.
pub fn share_percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Parse a `#rrggbb` color. Returns `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
