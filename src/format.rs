//! Display formatting for whole-yen amounts.

/// Formats an amount with a yen sign and thousand separators.
/// e.g. `1234567` → `"¥1,234,567"`
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let with_commas: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if amount < 0 {
        format!("-¥{with_commas}")
    } else {
        format!("¥{with_commas}")
    }
}

/// Compact form for narrow calendar cells: amounts of four digits or fewer
/// print as-is, larger ones as tenths of 万 with an `m` suffix.
/// e.g. `12345` → `"1.2m"`
pub fn compact_total(amount: i64) -> String {
    if amount >= 10_000 {
        format!("{:.1}m", amount as f64 / 10_000.0)
    } else {
        amount.to_string()
    }
}
