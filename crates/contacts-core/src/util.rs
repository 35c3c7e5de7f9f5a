use chrono::{DateTime, Utc};
use uuid::Uuid;

pub fn get_uuid_v4() -> Uuid {
    Uuid::new_v4()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Trims the value, keeping `None` as is
pub fn trim_optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned())
}
