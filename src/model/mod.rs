pub mod user;
pub mod tenant;
pub mod rent_payment;
pub mod update;
pub mod room;
pub mod booking;
pub mod chat;

use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width RFC 3339 UTC timestamp, so string order matches time order.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
