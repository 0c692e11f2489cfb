use time::{
    OffsetDateTime, PrimitiveDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

/// Parses an ISO-8601 timestamp such as `2024-01-01T00:00:00Z`.
///
/// Date-times without an offset (`2024-01-01T00:00:00`) are read as UTC.
pub fn parse_timestamp(value: &str) -> crate::Result<OffsetDateTime> {
    if let Ok(value) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(value);
    }

    if let Ok(value) = OffsetDateTime::parse(value, &Iso8601::DEFAULT) {
        return Ok(value);
    }

    Ok(PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)?.assume_utc())
}

pub fn format_timestamp(value: OffsetDateTime) -> crate::Result<String> {
    Ok(value.format(&Rfc3339)?)
}
