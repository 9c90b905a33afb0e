use chrono::NaiveDate;

/// Formats an amount as US dollars: `$1,234.50`, `-$5.00`.
///
/// The amount is rounded to whole cents first.
///
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}${dollars}.{:02}", cents % 100)
}

/// Formats a calendar date in medium US form, e.g. `Jan 28, 2026`.
///
/// The date never goes through a timezone, so it cannot shift by a day.
///
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
