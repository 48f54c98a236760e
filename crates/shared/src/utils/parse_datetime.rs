use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp truncated to its UTC date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.with_timezone(&Utc).date_naive())
                .ok()
        })
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    parse_date(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates() {
        assert_eq!(
            parse_date("2024-03-01"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn timestamps_are_truncated_to_their_utc_date() {
        assert_eq!(
            parse_date("2024-03-01T23:30:00+07:00"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            parse_date("2024-03-01T01:00:00+09:00"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            parse_date("2024-02-29T20:00:00-05:00"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn mixed_offsets_keep_instant_order() {
        // 16:00 UTC and 20:00 UTC on the same day
        let payment = parse_date("2024-02-16T01:00:00+09:00").unwrap();
        let due = parse_date("2024-02-15T20:00:00+00:00").unwrap();

        assert_eq!(payment, due);
        assert!(payment <= due);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date("01/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }
}
