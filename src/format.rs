// ---------------------------------------------------------------------------
// Number formatting for KPI metrics and axis labels
// ---------------------------------------------------------------------------

/// `$1,234,567.89`: two decimals, comma thousands separators.
///
/// Negatives keep the sign after the dollar (`$-1,500.50`). A value that
/// rounds to zero drops its sign.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("${sign}{}.{frac_part}", group_thousands(int_part))
}

/// Fixed-precision decimal, e.g. `format_decimal(3.14159, 2) == "3.14"`.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Compact salary for axis ticks: `$85K`, `$1.3M`.
pub fn format_salary_tick(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${:.0}K", abs / 1_000.0)
    } else {
        format!("{sign}${abs:.0}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
