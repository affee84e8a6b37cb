// src/clean/dates.rs
use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN: &str = "unknown";

static DAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").unwrap());

const FORMATS: &[&str] = &["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Day-first parse. ISO input is accepted so cleaned values parse again.
pub fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    FORMATS.iter().find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// "Date" column: ISO string or empty.
pub fn clean_date(s: &str) -> String {
    parse_day_first(s).map(|d| d.to_string()).unwrap_or_default()
}

/// "Expire Date" column: relative phrases resolved against `today`.
pub fn resolve_expire(s: &str, today: NaiveDate) -> String {
    if s.contains("Hôm nay") || s.contains("hôm nay") {
        return today.to_string();
    }
    if s.contains("ngày") {
        return DAYS
            .captures(s)
            .and_then(|c| c[1].parse::<i64>().ok())
            .and_then(Duration::try_days)
            .and_then(|d| today.checked_add_signed(d))
            .map(|d| d.to_string())
            .unwrap_or_else(|| s!(UNKNOWN));
    }
    if s.contains('-') {
        if let Some(d) = parse_day_first(s) {
            return d.to_string();
        }
    }
    s!(UNKNOWN)
}
