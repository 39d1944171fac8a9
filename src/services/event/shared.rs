use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::{self, Result};

use crate::models::event::{parse_timestamp, EventId};
use crate::services::error::BackendError;

/// Store timestamps in UTC so `ORDER BY start_time` sorts chronologically
pub(crate) fn to_storage_timestamp(value: &DateTime<Local>) -> String {
    value
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn to_local_datetime(value: String) -> Result<DateTime<Local>> {
    parse_timestamp(&value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("invalid timestamp '{}'", value).into(),
        )
    })
}

/// Local rows are keyed by integer; any other id cannot exist here
pub(crate) fn row_id(id: &EventId) -> std::result::Result<i64, BackendError> {
    id.as_str()
        .parse::<i64>()
        .map_err(|_| BackendError::NotFound(id.clone()))
}
