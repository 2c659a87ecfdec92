//! Display helpers shared by the text and SVG front ends.

use chrono::NaiveDate;

/// "April 15, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Groups digits in threes with commas: 1040000000 -> "1,040,000,000".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

pub fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
