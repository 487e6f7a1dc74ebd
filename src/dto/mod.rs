pub mod auth_dto;
pub mod booking_dto;
pub mod chat_dto;
pub mod rent_dto;
pub mod room_dto;
pub mod tenant_dto;
pub mod update_dto;

use chrono::{DateTime, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

use crate::model::room::RoomStatus;
use crate::model::user::Role;

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn known_role(value: &str) -> Result<(), ValidationError> {
    Role::parse(value).map(|_| ()).ok_or_else(|| ValidationError::new("unknown_role"))
}

pub fn known_room_status(value: &str) -> Result<(), ValidationError> {
    RoomStatus::parse(value).map(|_| ()).ok_or_else(|| ValidationError::new("unknown_status"))
}

pub fn calendar_date(value: &str) -> Result<(), ValidationError> {
    parse_calendar_date(value).map(|_| ()).ok_or_else(|| ValidationError::new("invalid_date"))
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Amounts from HTML forms arrive as strings; accepts `8500` and `"8500"`.
/// A blank string counts as missing.
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid number: {:?}", text)))?,
    };
    if !amount.is_finite() {
        return Err(D::Error::custom("number must be finite"));
    }
    Ok(Some(amount))
}

/// Optional text where an empty or whitespace-only value means absent.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}
