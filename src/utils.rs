// src/utils.rs

/// `1234567` -> `"1,234,567"`
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

/// Currency in millions, e.g. `$8.1M` with one decimal.
pub fn format_millions(amount: u64, decimals: usize) -> String {
    format!("${:.*}M", decimals, amount as f64 / 1_000_000.0)
}
