use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson;

pub fn to_bson_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

pub fn from_bson_datetime(dt: bson::DateTime) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(dt.timestamp_millis())
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset};

    #[test]
    fn offset_timestamps_are_normalised_to_utc() {
        let local = DateTime::<FixedOffset>::parse_from_rfc3339("2021-11-27T20:29:54+05:30").unwrap();
        let stored = to_bson_datetime(&local);
        let back = from_bson_datetime(stored);

        assert_eq!(back.to_rfc3339(), "2021-11-27T14:59:54+00:00");
    }

    #[test]
    fn month_boundary_follows_utc() {
        // Local first of the month is still the previous month in UTC.
        let local = DateTime::<FixedOffset>::parse_from_rfc3339("2022-03-01T02:00:00+05:30").unwrap();
        let back = from_bson_datetime(to_bson_datetime(&local));

        assert_eq!(back.month(), 2);
    }
}
