//! Pure input checks shared by the ledger and the configuration loader.

const MIN_YEAR: u32 = 2024;
const MAX_YEAR: u32 = 2100;

/// Checks a `YYYY/MM/DD` date for numeric ranges only.
///
/// Month lengths and leap years are not considered, so `2024/02/31` passes.
pub fn is_valid_date(date: &str) -> bool {
    if date.len() != 10 {
        return false;
    }
    let mut parts = date.split('/');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return false;
    }
    match (parse_digits(year), parse_digits(month), parse_digits(day)) {
        (Some(year), Some(month), Some(day)) => {
            (MIN_YEAR..=MAX_YEAR).contains(&year)
                && (1..=12).contains(&month)
                && (1..=31).contains(&day)
        }
        _ => false,
    }
}

/// Checks that `time` is `HH:MM` with ASCII digits around the colon.
///
/// Values are not range checked here; `25:00` is well formed.
pub fn is_time_format_valid(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit())
}

/// Inclusive check of `time` against the `opening`..=`closing` window.
///
/// Returns false if any of the three strings is not well formed.
pub fn is_time_within_operating_hours(time: &str, opening: &str, closing: &str) -> bool {
    match (parse_clock(time), parse_clock(opening), parse_clock(closing)) {
        (Some(time), Some(opening), Some(closing)) => opening <= time && time <= closing,
        _ => false,
    }
}

/// Splits a well formed `HH:MM` string into `(hour, minute)`.
pub(crate) fn parse_clock(time: &str) -> Option<(u32, u32)> {
    if !is_time_format_valid(time) {
        return None;
    }
    Some((parse_digits(&time[..2])?, parse_digits(&time[3..])?))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_ranges() {
        assert!(is_valid_date("2024/01/01"));
        assert!(is_valid_date("2100/12/31"));
        assert!(!is_valid_date("2023/12/31"));
        assert!(!is_valid_date("2101/01/01"));
        assert!(!is_valid_date("2025/13/01"));
        assert!(!is_valid_date("2025/00/10"));
        assert!(!is_valid_date("2025/05/00"));
        assert!(!is_valid_date("2025/05/32"));
    }

    #[test]
    fn test_date_without_month_length_check() {
        assert!(is_valid_date("2024/02/31"));
        assert!(is_valid_date("2025/04/31"));
    }

    #[test]
    fn test_date_shape() {
        assert!(!is_valid_date("2025-05-10"));
        assert!(!is_valid_date("2025/5/10"));
        assert!(!is_valid_date("2025/05/1x"));
        assert!(!is_valid_date("25/05/2025"));
        assert!(!is_valid_date("2025/05/10/"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_time_format() {
        assert!(is_time_format_valid("09:00"));
        assert!(is_time_format_valid("25:00"));
        assert!(!is_time_format_valid("9:00"));
        assert!(!is_time_format_valid("09-00"));
        assert!(!is_time_format_valid("0a:00"));
        assert!(!is_time_format_valid("09:000"));
        assert!(!is_time_format_valid("１2:00"));
    }

    #[test]
    fn test_operating_hours_bounds() {
        let within = |t| is_time_within_operating_hours(t, "09:00", "21:00");
        assert!(within("09:00"));
        assert!(within("12:30"));
        assert!(within("21:00"));
        assert!(!within("08:59"));
        assert!(!within("21:01"));
        assert!(!within("25:00"));
        assert!(!within("noon!"));
    }

    #[test]
    fn test_operating_hours_minute_bounds() {
        assert!(!is_time_within_operating_hours("10:15", "10:30", "22:45"));
        assert!(is_time_within_operating_hours("10:30", "10:30", "22:45"));
        assert!(is_time_within_operating_hours("22:45", "10:30", "22:45"));
        assert!(!is_time_within_operating_hours("22:46", "10:30", "22:45"));
    }
}
