use std::borrow::Cow;
use std::fmt;

use chrono::prelude::*;

use crate::utils::time::{format_date_field, to_fixed_offset};

/// A single field the logger knows how to put on a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Date(DateTime<FixedOffset>),
    Str(Cow<'a, str>),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Null,
}

impl Value<'_> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text of the field as written to the file. `Null` renders empty.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Value::Date(d) => format_date_field(d).into(),
            Value::Str(s) => Cow::Borrowed(&**s),
            Value::Int(n) => n.to_string().into(),
            Value::Long(n) => n.to_string().into(),
            // Debug keeps the fractional part: 16.0 rather than 16.
            Value::Float(n) => format!("{:?}", n).into(),
            Value::Double(n) => format!("{:?}", n).into(),
            Value::Null => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<f32> for Value<'_> {
    fn from(n: f32) -> Self {
        Value::Float(n)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value<'_> {
    fn from(d: DateTime<Tz>) -> Self {
        Value::Date(to_fixed_offset(&d))
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let date = DateTime::parse_from_rfc3339("2021-01-01T00:00:00+00:00")?;

        #[rustfmt::skip]
        let tests: Vec<(Value, &str)> = vec![
            (Value::from("TestString"),   "TestString"),
            (Value::from(String::new()),  ""),
            (Value::from(15),             "15"),
            (Value::from(-15i64),         "-15"),
            (Value::from(16.0f32),        "16.0"),
            (Value::from(17.0),           "17.0"),
            (Value::from(0.25),           "0.25"),
            (Value::from(date),           "Fri Jan 01 00:00:00 +00:00 2021"),
            (Value::from(None::<&str>),   ""),
            (Value::Null,                 ""),
        ];

        for (value, expected) in &tests {
            assert_eq!(*expected, value.render(), "while rendering {:?}", value);
        }
        Ok(())
    }

    #[test]
    fn test_from_option() {
        assert!(Value::from(None::<f64>).is_null());
        assert!(Value::from(None::<DateTime<Utc>>).is_null());
        assert_eq!(Value::Int(3), Value::from(Some(3)));
        assert_eq!("x", Value::from(Some("x")).to_string());
    }
}
