//! Python literal rendering
//!
//! Floats are written the way Python's `repr(float)` writes them, so the
//! generated module reads the same as one produced by a Python script:
//! shortest round-trip digits, a trailing `.0` on integral values and
//! exponent notation outside `1e-4 <= |x| < 1e16`.
//!
//! When two 17-digit strings both round-trip to the same `f64`, the last
//! digit may differ from Python's choice (seen for |x| above about 1e14).
//! The value read back is identical either way.

/// Render an `f64` as a Python float literal
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` gives the shortest round-trip digits, e.g. "-3.35e-6"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if negative { "-" } else { "" };

    if (-4..16).contains(&exponent) {
        format!("{}{}", sign, fixed_notation(&digits, exponent))
    } else {
        format!("{}{}", sign, exponent_notation(&digits, exponent))
    }
}

fn fixed_notation(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let padding = "0".repeat(int_len - digits.len());
        format!("{}{}.0", digits, padding)
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn exponent_notation(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{}e{}{:02}", lead, exp_sign, exponent.abs())
    } else {
        format!("{}.{}e{}{:02}", lead, rest, exp_sign, exponent.abs())
    }
}

/// Round to `digits` decimal places, matching Python's `round(x, digits)`
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Render a list of floats as a Python list literal
pub fn format_float_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_float(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// Render a string as a single-quoted Python string literal
pub fn format_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float_integral_values() {
        assert_eq!(format_float(10500.0), "10500.0");
        assert_eq!(format_float(150000000.0), "150000000.0");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-2.0), "-2.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn test_format_float_fractions() {
        assert_eq!(format_float(298.15), "298.15");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(-910.7), "-910.7");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00123), "0.00123");
    }

    #[test]
    fn test_format_float_exponent_form() {
        assert_eq!(format_float(1e-05), "1e-05");
        assert_eq!(format_float(2.269e-05), "2.269e-05");
        assert_eq!(format_float(-3.35e-09), "-3.35e-09");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(format_float(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn test_format_float_large_values_round_trip() {
        for value in [
            -139723478168608.62,
            123456789012345.67,
            9007199254740993.0,
            -2.5e15 + 0.25,
        ] {
            let text = format_float(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{}", text);
            assert!(text.contains('.') || text.contains('e'));
        }
    }

    #[test]
    fn test_format_float_non_finite() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456789012345, 10), 1.2345678901);
        assert_eq!(round_to(97.9, 10), 97.9);
        assert_eq!(round_to(-0.00000000001, 10), 0.0);
        assert_eq!(round_to(2.0, 10), 2.0);
    }

    #[test]
    fn test_format_lists_and_strings() {
        assert_eq!(format_float_list(&[97.9, -0.00335, 0.0]), "[97.9, -0.00335, 0.0]");
        assert_eq!(format_float_list(&[]), "[]");
        assert_eq!(format_str("fo"), "'fo'");
        assert_eq!(format_str("it's"), "'it\\'s'");
    }
}
