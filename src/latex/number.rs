//! Numeric literal formatting.
//!
//! Canonicalizes a finite double into LaTeX text. Plain integers and small
//! decimals are emitted verbatim; values large or small enough to warrant an
//! exponent are split into mantissa and power-of-ten factors and wrapped in
//! inline math. NaN and the infinities never reach this module - they are
//! represented upstream as constants.

/// The original tool formats integers through a 32-bit cast, so only values
/// in this range take the integer shortcut; larger whole numbers like
/// `1.5e10` fall through to scientific notation.
const INTEGER_SHORTCUT_MIN: f64 = i32::MIN as f64;
const INTEGER_SHORTCUT_MAX: f64 = i32::MAX as f64;

/// Format a finite double as LaTeX text.
///
/// Total over all finite values; the result is locale-invariant with `.` as
/// the decimal separator. Only the scientific form carries `$...$`
/// delimiters.
///
/// # Examples
///
/// ```
/// use sbmltex::latex::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-2.0), "-2");
/// assert_eq!(format_number(1.27), "1.27");
/// assert_eq!(format_number(1.5e10), "$1.5\\cdot 10^{10}$");
/// assert_eq!(format_number(1.0e10), "$10^{10}$");
/// ```
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && (INTEGER_SHORTCUT_MIN..=INTEGER_SHORTCUT_MAX).contains(&value) {
        return format!("{}", value as i64);
    }

    if needs_exponent(value) {
        // `{:e}` yields the shortest round-trip mantissa, e.g. "1.5e10".
        let shortest = format!("{:e}", value);
        let Some((mantissa, exponent)) = shortest.split_once('e') else {
            return shortest;
        };
        return split_scientific(mantissa, exponent);
    }

    format!("{}", value)
}

/// Whether the value's shortest decimal form would carry an exponent
/// marker. Mirrors the float-to-string policy of the original runtime:
/// scientific at magnitude 1e7 and above, or below 1e-3.
fn needs_exponent(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude >= 1e7 || (magnitude > 0.0 && magnitude < 1e-3)
}

/// Assemble the `mantissa * 10^exponent` form. A mantissa of `1` is dropped
/// entirely and `-1` folds into a leading minus; anything else is
/// recursively formatted and joined with `\cdot`.
fn split_scientific(mantissa: &str, exponent: &str) -> String {
    let power = format!("10^{{{}}}", reformat(exponent));
    match mantissa {
        "1" => format!("${}$", power),
        "-1" => format!("$-{}$", power),
        _ => format!("${}\\cdot {}$", reformat(mantissa), power),
    }
}

/// Recursively format a mantissa or exponent substring as a literal.
fn reformat(digits: &str) -> String {
    digits
        .parse::<f64>()
        .map(format_number)
        .unwrap_or_else(|_| digits.to_string())
}
