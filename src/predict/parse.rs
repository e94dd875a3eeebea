/// Parse the longest leading decimal number in `input`, the way a browser's
/// `parseFloat` reads form values. Leading whitespace is skipped and trailing
/// garbage ignored; input with no leading number yields NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digits += end - frac_start;
    }

    if digits == 0 {
        return f64::NAN;
    }

    // exponent only counts when at least one digit follows
    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float("3"), 3.0);
        assert_eq!(parse_float("12.9716"), 12.9716);
        assert_eq!(parse_float("-7.25"), -7.25);
        assert_eq!(parse_float("+4"), 4.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        assert_eq!(parse_float("4e"), 4.0);
        assert_eq!(parse_float("4e+"), 4.0);
    }

    #[test]
    fn test_leading_whitespace_and_trailing_garbage() {
        assert_eq!(parse_float("  42"), 42.0);
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("7 kWh"), 7.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
    }

    #[test]
    fn test_non_numeric_is_nan() {
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("nan").is_nan());
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_infinity_literal() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }
}
