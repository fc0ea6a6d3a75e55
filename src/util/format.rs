//! Display formatting for summary figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Round to whole units and group thousands with commas, e.g. `12345.6` → `12,346`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_whole_with_commas(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
