/// Label used for the value axis of every chart.
pub fn axis_label(unit: &str) -> String {
    format!("Vertical difference ({unit})")
}

/// Formats a float the way it reads in chart titles: shortest representation
/// that round-trips, keeping a trailing `.0` on integral values so that a
/// threshold of one meter reads `1.0` and not `1`. Decimal exponents below -4
/// or from 16 up switch to scientific notation (`1e-05`, `1.5e+16`).
pub fn format_value(number: f64) -> String {
    if number.is_nan() {
        return "nan".to_owned();
    }
    if !number.is_finite() || number == 0.0 {
        return format!("{number:.1}");
    }
    let scientific = format!("{number:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (&scientific[..], 0),
    };
    if exponent < -4 || exponent >= 16 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if number.fract() == 0.0 {
        format!("{number:.1}")
    } else {
        format!("{number}")
    }
}

/// Formats an axis tick with no more decimals than needed (up to `decimals`).
pub fn format_tick(number: f64, decimals: usize) -> String {
    let text = format!("{number:.decimals$}");
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_owned(),
        _ => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_with_unit() {
        assert_eq!(axis_label("m"), "Vertical difference (m)");
        assert_eq!(axis_label("ft"), "Vertical difference (ft)");
    }

    #[test]
    fn integral_values_keep_decimal() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-3.0), "-3.0");
    }

    #[test]
    fn fractional_values_are_shortest() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(4.91), "4.91");
        assert_eq!(format_value(-0.25), "-0.25");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_value(f64::NAN), "nan");
    }

    #[test]
    fn scientific_outside_plain_range() {
        assert_eq!(format_value(1e-5), "1e-05");
        assert_eq!(format_value(-2.5e-7), "-2.5e-07");
        assert_eq!(format_value(1e16), "1e+16");
        assert_eq!(format_value(1.5e16), "1.5e+16");
        assert_eq!(format_value(1e308), "1e+308");
    }

    #[test]
    fn plain_at_range_edges() {
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(1e15), "1000000000000000.0");
        assert_eq!(format_value(123.25), "123.25");
    }

    #[test]
    fn ticks_drop_trailing_zeros() {
        assert_eq!(format_tick(2.5, 3), "2.5");
        assert_eq!(format_tick(-5.0, 3), "-5");
        assert_eq!(format_tick(0.126, 2), "0.13");
        assert_eq!(format_tick(-0.0001, 2), "0");
        assert_eq!(format_tick(10.0, 0), "10");
    }
}
