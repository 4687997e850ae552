use crate::Value;

/// Column in which values of a summary are aligned
pub const SUMMARY_COLUMN_WIDTH: usize = 41;

/// Pads `text` with trailing spaces up to `width` characters, truncating longer input
pub fn pad_right(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

/// Renders a statistic with a fixed number of decimals.
/// Missing statistics (`None`) and NaN render as `NaN`, infinities as `Infinity`.
pub fn format_value(value: Option<Value>, decimals: usize) -> String {
    match value {
        None => String::from("NaN"),
        Some(v) if v.is_nan() => String::from("NaN"),
        Some(v) if v == f64::INFINITY => String::from("Infinity"),
        Some(v) if v == f64::NEG_INFINITY => String::from("-Infinity"),
        Some(v) => format!("{:.*}", decimals, v),
    }
}

/// Width left for the label once the integer part of `value` is accounted for, so lines stay
/// visually aligned for values >= 1.
fn label_width(value: Option<Value>) -> usize {
    match value {
        Some(v) if v >= 1.0 => {
            // saturating cast, infinity ends up as i32::MAX
            let integer_digits = (v as i32).to_string().len();
            SUMMARY_COLUMN_WIDTH.saturating_sub(integer_digits + 1)
        }
        _ => SUMMARY_COLUMN_WIDTH,
    }
}

/// One report line: the statistic name padded into the summary column, the value with four
/// decimals and a line break
pub fn summary_line(name: &str, value: Option<Value>) -> String {
    format!(
        "{}{}\n",
        pad_right(name, label_width(value)),
        format_value(value, 4)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_short_text() {
        assert_eq!("abc   ", pad_right("abc", 6));
    }

    #[test]
    fn pad_truncates_long_text() {
        assert_eq!("abcd", pad_right("abcdefgh", 4));
    }

    #[test]
    fn value_has_four_decimals() {
        assert_eq!("0.0866", format_value(Some(0.08660254), 4));
        assert_eq!("0.1000", format_value(Some(0.1), 4));
        assert_eq!("12.0000", format_value(Some(12.0), 4));
    }

    #[test]
    fn non_finite_values() {
        assert_eq!("NaN", format_value(None, 4));
        assert_eq!("NaN", format_value(Some(f64::NAN), 4));
        assert_eq!("Infinity", format_value(Some(f64::INFINITY), 4));
        assert_eq!("-Infinity", format_value(Some(f64::NEG_INFINITY), 4));
    }

    #[test]
    fn line_below_one_uses_full_column() {
        let actual = summary_line("RMSPE", Some(0.5));
        let expected = format!("RMSPE{}0.5000\n", " ".repeat(36));
        assert_eq!(expected, actual);
    }

    #[test]
    fn line_shrinks_by_integer_digits() {
        let actual = summary_line("RMSPE", Some(12.25));
        // 41 - (2 + 1) = 38 characters for the label
        let expected = format!("RMSPE{}12.2500\n", " ".repeat(33));
        assert_eq!(expected, actual);
    }

    #[test]
    fn infinite_value_line() {
        let actual = summary_line("RMSPE", Some(f64::INFINITY));
        // i32::MAX has 10 digits
        let expected = format!("{}Infinity\n", pad_right("RMSPE", 30));
        assert_eq!(expected, actual);
    }

    #[test]
    fn missing_value_line() {
        let actual = summary_line("RMSPE", None);
        assert_eq!(format!("{}NaN\n", pad_right("RMSPE", 41)), actual);
    }
}
