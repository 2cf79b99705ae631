#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price with exactly two fractional digits and comma thousands
/// separators: `35000.0` → `"35,000.00"`. Components prepend the currency
/// symbol themselves.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
