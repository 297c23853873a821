pub struct StringUtils {}

const CENTS_LIMIT: f64 = 1e15;

impl StringUtils {
    /// Groups the whole part of `amount` in threes, e.g. `1250000` -> `1,250,000`.
    /// Fractions are kept to two places and trailing zeros dropped.
    pub fn format_amount(amount: f64) -> String {
        if !amount.is_finite() {
            return "—".to_string();
        }

        // Past this magnitude f64 holds no cents
        let rounded = if amount.abs() < CENTS_LIMIT {
            (amount * 100.0).round() / 100.0
        } else {
            amount.trunc()
        };
        let negative = rounded < 0.0;
        let abs = rounded.abs();
        let cents = ((abs - abs.trunc()) * 100.0).round() as u8;

        let digits = format!("{:.0}", abs.trunc());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&grouped);
        if cents > 0 {
            let fraction = format!("{:02}", cents);
            out.push('.');
            out.push_str(fraction.trim_end_matches('0'));
        }
        out
    }

    /// `+8%` / `-3%` style delta badge.
    pub fn format_delta(delta: i32) -> String {
        if delta >= 0 {
            format!("+{}%", delta)
        } else {
            format!("{}%", delta)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(StringUtils::format_amount(0.0), "0");
        assert_eq!(StringUtils::format_amount(999.0), "999");
        assert_eq!(StringUtils::format_amount(1250000.0), "1,250,000");
        assert_eq!(StringUtils::format_amount(-820000.0), "-820,000");
        assert_eq!(StringUtils::format_amount(1234.5), "1,234.5");
        assert_eq!(StringUtils::format_amount(f64::NAN), "—");
    }

    #[test]
    fn test_format_huge_amount() {
        assert_eq!(
            StringUtils::format_amount(1e20),
            "100,000,000,000,000,000,000"
        );
        assert_eq!(
            StringUtils::format_amount(-2.5e19),
            "-25,000,000,000,000,000,000"
        );
        assert_eq!(StringUtils::format_amount(f64::MAX).len(), 309 + 102);
        assert_eq!(StringUtils::format_amount(123456789012.34), "123,456,789,012.34");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(StringUtils::format_delta(8), "+8%");
        assert_eq!(StringUtils::format_delta(0), "+0%");
        assert_eq!(StringUtils::format_delta(-3), "-3%");
    }
}
