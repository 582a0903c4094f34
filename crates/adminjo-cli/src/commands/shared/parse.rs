use adminjo_core::status::{parse_date, parse_schedule};
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` command-line date.
pub fn parse_day(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    parse_date(raw).map_err(|error| anyhow::anyhow!("invalid {field}: {error}"))
}

/// Parse `YYYY-MM-DDTHH:MM[:SS]` (a space may replace the `T`).
pub fn parse_instant(raw: &str, field: &str) -> anyhow::Result<NaiveDateTime> {
    let trimmed = raw.trim();
    let (date, time) = trimmed
        .split_once(['T', ' '])
        .ok_or_else(|| anyhow::anyhow!("invalid {field} '{raw}': expected YYYY-MM-DDTHH:MM"))?;
    parse_schedule(date, time).map_err(|error| anyhow::anyhow!("invalid {field}: {error}"))
}
