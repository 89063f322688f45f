use chrono::{Duration, NaiveDate};

/// Wire format used for every date field in the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Derives the pickup date from the order date and the production duration.
///
/// Returns `None` when either input is empty or fails to parse. Callers must
/// treat `None` as "unknown", never as zero days. The duration may be
/// fractional; it is floored to whole days.
pub fn pickup_date(order_date: &str, production_days: &str) -> Option<String> {
    if order_date.is_empty() || production_days.is_empty() {
        return None;
    }

    let date = NaiveDate::parse_from_str(order_date, DATE_FORMAT).ok()?;
    let days = production_days.trim().parse::<f64>().ok()?;
    if !days.is_finite() {
        return None;
    }

    // Durations beyond chrono's range count as unknown, same as a parse
    // failure.
    let duration = Duration::try_days(days.floor() as i64)?;
    date.checked_add_signed(duration)
        .map(|pickup| pickup.format(DATE_FORMAT).to_string())
}
