use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

use crate::ValidationError;

/// Point in time accepted by the historical snapshot endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDate {
    /// Seconds since the Unix epoch.
    Unix(i64),
    /// Calendar date, taken at midnight UTC.
    Date(Date),
    DateTime(OffsetDateTime),
}

impl HistoryDate {
    pub fn unix_seconds(self) -> i64 {
        match self {
            Self::Unix(seconds) => seconds,
            Self::Date(date) => date.with_time(Time::MIDNIGHT).assume_utc().unix_timestamp(),
            Self::DateTime(value) => value.unix_timestamp(),
        }
    }

    /// Renders the date as `dd-MM-yyyy` in UTC.
    pub fn to_query_value(self) -> Result<String, ValidationError> {
        let seconds = self.unix_seconds();
        let utc = OffsetDateTime::from_unix_timestamp(seconds)
            .map_err(|_| ValidationError::TimestampOutOfRange { seconds })?;

        utc.format(format_description!("[day]-[month]-[year]"))
            .map_err(|error| ValidationError::DateFormat {
                message: error.to_string(),
            })
    }
}

impl From<i64> for HistoryDate {
    fn from(seconds: i64) -> Self {
        Self::Unix(seconds)
    }
}

impl From<Date> for HistoryDate {
    fn from(date: Date) -> Self {
        Self::Date(date)
    }
}

impl From<OffsetDateTime> for HistoryDate {
    fn from(value: OffsetDateTime) -> Self {
        Self::DateTime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn calendar_date_formats_day_first() {
        let value = HistoryDate::from(date!(2021 - 01 - 01));
        assert_eq!(value.to_query_value().expect("must format"), "01-01-2021");
    }

    #[test]
    fn epoch_seconds_format_in_utc() {
        // 2022-03-09T23:59:59Z
        let value = HistoryDate::from(1_646_870_399_i64);
        assert_eq!(value.to_query_value().expect("must format"), "09-03-2022");
    }

    #[test]
    fn offset_datetime_is_normalized_to_utc() {
        let value = HistoryDate::from(datetime!(2021-06-01 01:30 +03:00));
        assert_eq!(value.to_query_value().expect("must format"), "31-05-2021");
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let err = HistoryDate::Unix(i64::MAX)
            .to_query_value()
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::TimestampOutOfRange { .. }));
    }
}
