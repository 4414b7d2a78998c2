use std::time::SystemTime;

use chrono::prelude::*;

// Layout of a date field, e.g. "Mon Oct 19 14:03:11 +02:00 2026".
const DATE_FIELD_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

// Layout of the modification time in the logger diagnostic.
const MODIFIED_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn format_date_field(date: &DateTime<FixedOffset>) -> String {
    date.format(DATE_FIELD_FORMAT).to_string()
}

pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(MODIFIED_FORMAT)
        .to_string()
}

pub fn to_fixed_offset<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<FixedOffset> {
    date.with_timezone(&date.offset().fix())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_format_date_field() -> std::result::Result<(), Box<dyn std::error::Error>> {
        #[rustfmt::skip]
        let tests = [
            ("2021-01-01T00:00:00+00:00", "Fri Jan 01 00:00:00 +00:00 2021"),
            ("2026-10-19T14:03:11+02:00", "Mon Oct 19 14:03:11 +02:00 2026"),
            ("1999-12-31T23:59:59-09:30", "Fri Dec 31 23:59:59 -09:30 1999"),
        ];

        for (input, expected) in &tests {
            let date = DateTime::parse_from_rfc3339(input)?;
            assert_eq!(*expected, format_date_field(&date), "while formatting {}", input);
        }
        Ok(())
    }

    #[test]
    fn test_to_fixed_offset_keeps_instant() {
        let utc = Utc.timestamp_opt(1609459200, 0).unwrap();
        let fixed = to_fixed_offset(&utc);
        assert_eq!(utc.timestamp(), fixed.timestamp());
        assert_eq!(0, fixed.offset().local_minus_utc());
    }

    #[test]
    fn test_format_modified() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1609459200);
        let expected = Local
            .timestamp_opt(1609459200, 0)
            .unwrap()
            .format("%d/%m/%Y %H:%M")
            .to_string();
        assert_eq!(expected, format_modified(time));
        assert_eq!(16, format_modified(time).len());
    }
}
