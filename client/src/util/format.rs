//! Display formatting for the product table.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Format a price the way the `id-ID` locale prints numbers, prefixed with
/// `Rp `: `.` groups thousands, `,` separates up to three fraction digits.
#[must_use]
pub fn format_rupiah(price: f64) -> String {
    if !price.is_finite() {
        return format!("Rp {price}");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (price.abs() * 1000.0).round() as u128;
    let (whole, fraction) = (scaled / 1000, scaled % 1000);
    let sign = if price < 0.0 && scaled != 0 { "-" } else { "" };

    let mut out = format!("Rp {sign}{}", group_thousands(whole));
    if fraction != 0 {
        let digits = format!("{fraction:03}");
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// First 50 characters plus `...` when the description is longer.
#[must_use]
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return text.to_owned();
    }
    let mut preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
