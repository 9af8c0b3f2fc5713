//! Round-trip–accurate number formatting. NaN and Infinity (not
//! representable in JSON) print as `null`. A value equal to its own
//! saturated `i32` mirror prints as a plain integer. Otherwise the
//! output mimics `%.15g`, re-parsed and checked for an exact round
//! trip, falling back to `%.17g` (which always round-trips an IEEE 754
//! double) when 15 digits aren't enough.

pub(crate) fn format(value: f64, mirror: i32) -> String {
    if value.is_nan() || value.is_infinite() {
        return "null".to_string();
    }
    if value == mirror as f64 {
        return mirror.to_string();
    }
    let short = format_g(value, 15);
    if short.parse::<f64>() == Ok(value) {
        return short;
    }
    format_g(value, 17)
}

/// `%g`-style formatting at `sig_figs` significant digits: scientific
/// notation when the decimal exponent is < -4 or >= `sig_figs`, fixed
/// notation otherwise, with trailing fractional zeros stripped either
/// way.
fn format_g(value: f64, sig_figs: usize) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }
    let negative = value.is_sign_negative();
    let (digits, exp) = significant_digits(value.abs(), sig_figs);
    let body = if exp < -4 || exp >= sig_figs as i32 { scientific(&digits, exp) } else { fixed(&digits, exp) };
    if negative { format!("-{body}") } else { body }
}

/// Round `value` to `sig_figs` significant decimal digits and return
/// the digit string (length `sig_figs`, no sign or point) plus the
/// base-10 exponent of its leading digit.
fn significant_digits(value: f64, sig_figs: usize) -> (String, i32) {
    let formatted = format!("{:.*e}", sig_figs - 1, value);
    let (mantissa, exp_str) = formatted.split_once('e').expect("Rust's `{:e}` always contains an exponent");
    let exponent: i32 = exp_str.parse().expect("Rust's exponent is always a plain signed integer");
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent)
}

fn scientific(digits: &str, exp: i32) -> String {
    let mut mantissa = digits[..1].to_string();
    let frac = digits[1..].trim_end_matches('0');
    if !frac.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac);
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{}", exp.abs())
}

fn fixed(digits: &str, exp: i32) -> String {
    if exp >= 0 {
        let int_len = (exp as usize) + 1;
        if int_len >= digits.len() {
            format!("{digits}{}", "0".repeat(int_len - digits.len()))
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            let frac_trimmed = frac_part.trim_end_matches('0');
            if frac_trimmed.is_empty() { int_part.to_string() } else { format!("{int_part}.{frac_trimmed}") }
        }
    } else {
        let leading_zeros = "0".repeat((-exp - 1) as usize);
        let frac_trimmed = format!("{leading_zeros}{digits}");
        let frac_trimmed = frac_trimmed.trim_end_matches('0');
        let frac_final = if frac_trimmed.is_empty() { "0" } else { frac_trimmed };
        format!("0.{frac_final}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_valued_double_prints_as_plain_integer() {
        assert_eq!(format(3.0, 3), "3");
        assert_eq!(format(-7.0, -7), "-7");
    }

    #[test]
    fn nan_and_infinity_print_as_null() {
        assert_eq!(format(f64::NAN, 0), "null");
        assert_eq!(format(f64::INFINITY, i32::MAX), "null");
    }

    #[test]
    fn large_exponent_round_trips() {
        let out = format(1.0e300, i32::MAX);
        assert_eq!(out.parse::<f64>().unwrap(), 1.0e300);
    }

    #[test]
    fn fraction_round_trips() {
        let out = format(-0.5, 0);
        assert_eq!(out, "-0.5");
    }

    #[test]
    fn seventeen_digit_fallback_round_trips() {
        let value = 0.1 + 0.2;
        let out = format(value, 0);
        assert_eq!(out.parse::<f64>().unwrap(), value);
    }
}
