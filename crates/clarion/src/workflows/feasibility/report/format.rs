/// Whole pounds with thousands separators, e.g. `£1,234,567` or `-£1,234`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let pounds = value.abs().round() as u64;
    let digits = pounds.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if value < 0.0 && pounds > 0 {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "£0");
        assert_eq!(format_currency(999.4), "£999");
        assert_eq!(format_currency(1_000.0), "£1,000");
        assert_eq!(format_currency(1_234_567.0), "£1,234,567");
        assert_eq!(format_currency(-1_234.0), "-£1,234");
        assert_eq!(format_currency(-0.2), "£0");
    }

    #[test]
    fn percentage_uses_fixed_decimals() {
        assert_eq!(format_percentage(12.34, 1), "12.3%");
        assert_eq!(format_percentage(8.0, 1), "8.0%");
        assert_eq!(format_percentage(6.0, 0), "6%");
    }
}
