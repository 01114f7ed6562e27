// ============================================================================
// FORMAT - Formateo de números, fechas y teléfonos
// ============================================================================

use chrono::{Datelike, Timelike};

use crate::utils::constants::{DEFAULT_PADDED_DIGITS, DEFAULT_PADDING};
use crate::utils::validate::not_empty_string;

/// Rellena con ceros la parte entera de `number` a dos dígitos.
/// `pad_number(1.0)` da `"01"`, `pad_number(12.0)` da `"12"`.
pub fn pad_number(number: f64) -> String {
    pad_number_with(number, DEFAULT_PADDED_DIGITS, DEFAULT_PADDING)
}

/// Rellena la parte entera de `number` con `padding` hasta tener al menos
/// `padded_digits` dígitos. La parte decimal queda igual y el signo va
/// adelante: `pad_number_with(123.456, 5, "x")` da `"xx123.456"`.
///
/// Devuelve un string vacío con NaN, infinitos o `padding` vacío.
pub fn pad_number_with(number: f64, padded_digits: usize, padding: &str) -> String {
    if !number.is_finite() || !not_empty_string(padding) {
        return String::new();
    }

    // -0.0 se imprime como "-0"
    let number = if number == 0.0 { 0.0 } else { number };
    let text = number.to_string();

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, decimal) = match unsigned.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (unsigned, None),
    };

    let missing = padded_digits.saturating_sub(integer.chars().count());
    let mut padded = String::with_capacity(text.len() + missing * padding.len());
    padded.push_str(sign);
    padded.push_str(&padding.repeat(missing));
    padded.push_str(integer);
    if let Some(decimal) = decimal.filter(|d| not_empty_string(d)) {
        padded.push('.');
        padded.push_str(decimal);
    }
    padded
}

/// Formato `M/D/YYYY @ h:mm AM|PM`, p. ej. `11/21/2024 @ 3:03 PM`.
/// Medianoche es `12:xx AM` y mediodía `12:xx PM`.
pub fn format_human_readable_timestamp<T>(date: &T) -> String
where
    T: Datelike + Timelike,
{
    let (is_pm, hour) = date.hour12();
    format!(
        "{}/{}/{} @ {}:{} {}",
        date.month(),
        date.day(),
        date.year(),
        hour,
        pad_number(f64::from(date.minute())),
        if is_pm { "PM" } else { "AM" },
    )
}

/// Formatea teléfonos de EE. UU.:
///
/// - `5556669999` -> `(555) 666-9999`
/// - `15556669999` -> `+1 (555) 666-9999`
/// - `+15556669999` -> `+1 (555) 666-9999`
///
/// Cualquier otro valor se devuelve sin cambios.
pub fn format_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let part = |from: usize, to: usize| -> String { chars[from..to].iter().collect() };

    match chars.len() {
        10 => format!("({}) {}-{}", part(0, 3), part(3, 6), part(6, 10)),
        11 if chars[0] == '1' => {
            format!("+1 ({}) {}-{}", part(1, 4), part(4, 7), part(7, 11))
        }
        12 if chars[0] == '+' && chars[1] == '1' => {
            format!("+1 ({}) {}-{}", part(2, 5), part(5, 8), part(8, 12))
        }
        _ => phone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 21)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn pads_integers() {
        assert_eq!(pad_number(1.0), "01");
        assert_eq!(pad_number(12.0), "12");
        assert_eq!(pad_number(0.0), "00");
        assert_eq!(pad_number_with(123.0, 5, "0"), "00123");
        assert_eq!(pad_number_with(123_456.0, 5, "0"), "123456");
    }

    #[test]
    fn pads_only_integer_part_of_decimals() {
        assert_eq!(pad_number_with(123.456, 5, "0"), "00123.456");
        assert_eq!(pad_number_with(123.456, 5, "x"), "xx123.456");
        assert_eq!(pad_number_with(1.05, 3, "0"), "001.05");
    }

    #[test]
    fn keeps_sign_in_front() {
        assert_eq!(pad_number_with(-5.0, 3, "0"), "-005");
        assert_eq!(pad_number(-0.0), "00");
    }

    #[test]
    fn invalid_input_yields_empty_string() {
        assert_eq!(pad_number(f64::NAN), "");
        assert_eq!(pad_number(f64::INFINITY), "");
        assert_eq!(pad_number_with(1.0, 2, ""), "");
    }

    #[test]
    fn formats_afternoon_timestamp() {
        assert_eq!(format_human_readable_timestamp(&at(15, 3)), "11/21/2024 @ 3:03 PM");
    }

    #[test]
    fn formats_midnight_and_noon() {
        assert_eq!(format_human_readable_timestamp(&at(0, 5)), "11/21/2024 @ 12:05 AM");
        assert_eq!(format_human_readable_timestamp(&at(12, 0)), "11/21/2024 @ 12:00 PM");
        assert_eq!(format_human_readable_timestamp(&at(1, 0)), "11/21/2024 @ 1:00 AM");
        assert_eq!(format_human_readable_timestamp(&at(23, 59)), "11/21/2024 @ 11:59 PM");
    }

    #[test]
    fn month_is_one_based() {
        let january = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(format_human_readable_timestamp(&january), "1/2/2025 @ 9:30 AM");
    }

    #[test]
    fn formats_phone_numbers() {
        assert_eq!(format_phone_number("5556669999"), "(555) 666-9999");
        assert_eq!(format_phone_number("15556669999"), "+1 (555) 666-9999");
        assert_eq!(format_phone_number("+15556669999"), "+1 (555) 666-9999");
    }

    #[test]
    fn other_phone_inputs_pass_through() {
        assert_eq!(format_phone_number("123"), "123");
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("25556669999"), "25556669999");
        assert_eq!(format_phone_number("+25556669999"), "+25556669999");
    }
}
