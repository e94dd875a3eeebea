/// Format `value` with `digits` decimals the way a browser's
/// `Number.prototype.toFixed` does: exact ties round away from zero and
/// non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        // -0 prints unsigned
        return format!("{:.*}", digits, 0.0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    match round_tie_away(abs, digits) {
        Some(text) => format!("{}{}", sign, text),
        None => format!("{}{:.*}", sign, digits, abs),
    }
}

/// Exact halfway values are the only inputs where correctly rounded
/// formatting (ties to even) differs from `toFixed`. A tie at `digits`
/// decimals is always a multiple of 2^-(digits + 1), so it is detected and
/// rounded with integer arithmetic.
fn round_tie_away(abs: f64, digits: usize) -> Option<String> {
    let exp = u32::try_from(digits).ok()?;
    let halves = abs * 2f64.powi(i32::try_from(digits + 1).ok()?);
    if halves.fract() != 0.0 || halves >= 2f64.powi(100) {
        return None;
    }

    // abs * 10^digits * 2
    let doubled = (halves as u128).checked_mul(5u128.checked_pow(exp)?)?;
    if doubled % 2 == 0 {
        return None;
    }

    let rounded = (doubled + 1) / 2;
    if digits == 0 {
        return Some(rounded.to_string());
    }
    let unit = 10u128.checked_pow(exp)?;
    Some(format!(
        "{}.{:0width$}",
        rounded / unit,
        rounded % unit,
        width = digits
    ))
}
