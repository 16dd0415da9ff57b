/// `1234567` → `1,234,567`
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

/// Explicit `+` on positive deltas, thousands separators either way
pub fn format_signed(value: i64) -> String {
    let magnitude = format_thousands(value.unsigned_abs());
    match value {
        v if v > 0 => format!("+{}", magnitude),
        v if v < 0 => format!("-{}", magnitude),
        _ => magnitude,
    }
}

/// Growth rate label: `+12.5%` when positive, unmodified otherwise
pub fn format_growth(rate: f64) -> String {
    if rate > 0.0 {
        format!("+{}%", rate)
    } else {
        format!("{}%", rate)
    }
}
