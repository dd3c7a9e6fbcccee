//! Result formatting

use planefit_core::Plane3d;
use std::io::Write;

/// Significant digits used by a default-configured C++ stream
pub const DEFAULT_OUTPUT_PRECISION: usize = 6;

/// Format a double the way `printf("%.*g")` does
///
/// Fixed notation is used while the decimal exponent lies in
/// `[-4, precision)`, scientific notation otherwise. Trailing zeros and a
/// dangling decimal point are removed in both cases.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Format plane coefficients as `a b c d`
pub fn format_plane(plane: &Plane3d, precision: usize) -> String {
    [plane.a, plane.b, plane.c, plane.d]
        .iter()
        .map(|&c| format_general(c, precision))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write plane coefficients as a single newline-terminated line
pub fn write_plane<W: Write>(writer: &mut W, plane: &Plane3d, precision: usize) -> std::io::Result<()> {
    writeln!(writer, "{}", format_plane(plane, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_general(0.70710678118, 6), "0.707107");
        assert_eq!(format_general(-0.5, 6), "-0.5");
        assert_eq!(format_general(1.0, 6), "1");
        assert_eq!(format_general(123456.4, 6), "123456");
        assert_eq!(format_general(0.0001234567, 6), "0.000123457");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(0.00001, 6), "1e-05");
        assert_eq!(format_general(-2.5e-12, 6), "-2.5e-12");
        assert_eq!(format_general(999999.7, 6), "1e+06");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(-0.0, 6), "-0");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(format_general(f64::NAN.copysign(1.0), 6), "nan");
    }

    #[test]
    fn test_precision_is_configurable() {
        assert_eq!(format_general(std::f64::consts::PI, 3), "3.14");
        assert_eq!(format_general(std::f64::consts::PI, 10), "3.141592654");
    }

    #[test]
    fn test_write_plane_line() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let plane = Plane3d::new(0.0, 0.0, s, -s);

        let mut out = Vec::new();
        write_plane(&mut out, &plane, DEFAULT_OUTPUT_PRECISION).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 0 0.707107 -0.707107\n");
    }
}
