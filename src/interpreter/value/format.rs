/// Renders a float result as text.
///
/// The format keeps 15 significant digits with trailing zeros stripped and
/// uses `,` as the decimal separator. A magnitude below the smallest normal
/// double renders `0`. When the decimal exponent leaves the `[-4, 15)` window
/// the rendering switches to scientific form with the marker `E-`/`E+` and an
/// exponent of at least two digits.
///
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity`; they are
/// never intercepted earlier in the pipeline.
///
/// # Example
/// ```
/// use basicalc::interpreter::value::format::render_float;
///
/// assert_eq!(render_float(0.0), "0");
/// assert_eq!(render_float(9.0), "9");
/// assert_eq!(render_float(-0.0001), "-0,0001");
/// assert_eq!(render_float(-0.00001), "-1E-05");
/// assert_eq!(render_float(255.984375), "255,984375");
/// assert_eq!(render_float(3e15), "3E+15");
/// ```
#[must_use]
pub fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if value.abs() < f64::MIN_POSITIVE {
        return "0".to_string();
    }

    // 14 fractional digits in scientific notation = 15 significant digits,
    // rounded ties-to-even by the standard formatter.
    let scientific = format!("{value:.14e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    let rendered = if (-4..15).contains(&exponent) {
        fixed_form(digits, exponent)
    } else {
        scientific_form(digits, exponent)
    };

    if value < 0.0 {
        format!("-{rendered}")
    } else {
        rendered
    }
}

/// Positions the significant digits around a `,` for exponents inside the
/// fixed-point window.
#[allow(clippy::cast_sign_loss)]
fn fixed_form(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let leading_zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0,{leading_zeros}{digits}");
    }

    let integer_len = (exponent + 1) as usize;
    if digits.len() <= integer_len {
        let trailing_zeros = "0".repeat(integer_len - digits.len());
        format!("{digits}{trailing_zeros}")
    } else {
        format!("{},{}", &digits[..integer_len], &digits[integer_len..])
    }
}

/// Renders `d,dddE±XX` with the exponent printed with at least two digits.
fn scientific_form(digits: &str, exponent: i32) -> String {
    let mantissa = if digits.len() > 1 {
        format!("{},{}", &digits[..1], &digits[1..])
    } else {
        digits.to_string()
    };
    let sign = if exponent < 0 { '-' } else { '+' };

    format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
}
