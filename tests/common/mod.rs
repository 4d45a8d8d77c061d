// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use rashod::application::ExpenseService;
use rashod::storage::Ledger;

/// Helper to create a service backed by a fresh ledger
pub fn test_service() -> ExpenseService {
    ExpenseService::new(Ledger::new())
}

/// Helper to parse a date string into DateTime<Utc>
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Helper to parse a date-time string such as "2024-01-15 18:30"
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .unwrap()
        .and_utc()
}
