//! Date and datetime converters
//!
//! Dates parse from ISO `YYYY-MM-DD`; datetimes from RFC 3339 text or Unix
//! seconds. Both dump back to their textual forms.

use chrono::{DateTime, NaiveDate, Utc};

use super::Converter;
use crate::cast::{CastError, CastResult};
use crate::schema::FieldSpec;
use crate::value::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DateConverter;

impl Converter for DateConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        match raw {
            Value::Date(d) => Ok(Value::Date(*d)),
            Value::DateTime(dt) => Ok(Value::Date(dt.date_naive())),
            Value::Str(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map(Value::Date)
                .map_err(|e| {
                    CastError::invalid("date (YYYY-MM-DD)", format!("{} ({})", raw.describe(), e))
                }),
            _ => Err(CastError::invalid("date (YYYY-MM-DD)", raw.describe())),
        }
    }

    fn dump(&self, value: &Value) -> CastResult<Value> {
        match value {
            Value::Date(d) => Ok(Value::Str(d.format(DATE_FORMAT).to_string())),
            other => Ok(other.clone()),
        }
    }
}

pub struct DateTimeConverter;

impl Converter for DateTimeConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        match raw {
            Value::DateTime(dt) => Ok(Value::DateTime(*dt)),
            Value::Str(s) => DateTime::parse_from_rfc3339(s.trim())
                .map(|dt| Value::DateTime(dt.with_timezone(&Utc)))
                .map_err(|e| {
                    CastError::invalid("RFC 3339 datetime", format!("{} ({})", raw.describe(), e))
                }),
            Value::Int(secs) => DateTime::<Utc>::from_timestamp(*secs, 0)
                .map(Value::DateTime)
                .ok_or_else(|| CastError::invalid("Unix timestamp in range", raw.describe())),
            _ => Err(CastError::invalid("RFC 3339 datetime", raw.describe())),
        }
    }

    fn dump(&self, value: &Value) -> CastResult<Value> {
        match value {
            Value::DateTime(dt) => Ok(Value::Str(dt.to_rfc3339())),
            other => Ok(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Primitive;
    use chrono::TimeZone;

    fn field() -> FieldSpec {
        FieldSpec::new(Primitive::Any)
    }

    #[test]
    fn test_date_cast() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            DateConverter.cast(&Value::from("2024-01-31"), &field()),
            Ok(Value::Date(expected))
        );
        assert!(DateConverter.cast(&Value::from("2024-02-30"), &field()).is_err());
        assert!(DateConverter.cast(&Value::Int(1), &field()).is_err());
    }

    #[test]
    fn test_datetime_cast() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap();
        assert_eq!(
            DateTimeConverter.cast(&Value::from("2024-01-31T12:00:00+02:00"), &field()),
            Ok(Value::DateTime(expected))
        );
        assert_eq!(
            DateTimeConverter.cast(&Value::Int(expected.timestamp()), &field()),
            Ok(Value::DateTime(expected))
        );
        assert!(DateTimeConverter.cast(&Value::from("yesterday"), &field()).is_err());
    }

    #[test]
    fn test_dump_round_trip_text() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 31, 10, 0, 0).unwrap();
        assert_eq!(
            DateTimeConverter.dump(&Value::DateTime(dt)),
            Ok(Value::from("2024-01-31T10:00:00+00:00"))
        );
        let d = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(DateConverter.dump(&Value::Date(d)), Ok(Value::from("2024-01-31")));
    }
}
