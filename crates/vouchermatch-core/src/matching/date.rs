use chrono::NaiveDate;

/// Strict `YYYY-MM-DD` parse. Anything else — wrong shape, impossible
/// calendar values — yields `None`. Upstream extractors produce enough
/// garbage dates that the comparator treats them as missing rather than
/// failing the lookup.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    if !looks_like_iso_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// True when both dates are present, parseable, and at most `window_days`
/// apart in either direction (inclusive).
pub fn dates_within_window(first: Option<&str>, second: Option<&str>, window_days: i64) -> bool {
    let (Some(first), Some(second)) = (first, second) else {
        return false;
    };
    let (Some(first), Some(second)) = (parse_record_date(first), parse_record_date(second)) else {
        return false;
    };
    (first - second).num_days().abs() <= window_days
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
