use crate::domain::errors::{AppError, AppResult};

/// Lenient integer parsing with the semantics of `parseInt(text, 10)`:
/// leading whitespace is skipped, an optional sign is accepted and parsing
/// stops at the first non-digit. `None` when no digit was read.
pub fn parse_js_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Narrow a parsed integer to a count; counts are never negative.
pub fn count_from_js_int(value: i64, field: &str) -> AppResult<u32> {
    if value < 0 {
        return Err(AppError::Validation(format!("{field} cannot be negative")));
    }
    u32::try_from(value).map_err(|_| AppError::Validation(format!("{field} is too large")))
}

/// en-US number formatting: comma grouping, up to three fraction digits.
pub fn format_price(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round();
    let whole = (scaled / 1000.0).trunc() as u64;
    let millis = (scaled % 1000.0) as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if millis > 0 {
        let fraction = format!("{millis:03}");
        grouped.push('.');
        grouped.push_str(fraction.trim_end_matches('0'));
    }

    if value < 0.0 && scaled > 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stops_at_first_non_digit() {
        assert_eq!(parse_js_int("3 beds"), Some(3));
        assert_eq!(parse_js_int("  42"), Some(42));
        assert_eq!(parse_js_int("1.5"), Some(1));
        assert_eq!(parse_js_int("abc"), None);
        assert_eq!(parse_js_int(""), None);
        assert_eq!(parse_js_int("-"), None);
    }

    #[test]
    fn format_small_values_without_grouping() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(-1500.25), "-1,500.25");
    }
}
