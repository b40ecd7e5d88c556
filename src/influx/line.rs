//! InfluxDB line protocol encoding.

use crate::models::Point;

/// Escape a measurement name for line protocol
///
/// Commas and spaces are significant in the measurement position.
#[must_use]
pub fn escape_measurement(name: &str) -> String {
    name.replace(',', "\\,").replace(' ', "\\ ")
}

/// Escape a tag key or value for line protocol
///
/// Commas, equals signs, and spaces are significant in the tag set.
#[must_use]
pub fn escape_tag(value: &str) -> String {
    value
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}

/// Encode a single point as one line of line protocol
///
/// Tags are emitted in sorted key order (`source` before `unit`), the
/// timestamp in epoch seconds to match the write precision.
#[must_use]
pub fn point_to_line(point: &Point) -> String {
    let mut line = escape_measurement(&point.measurement);

    if let Some(source) = &point.tags.source {
        line.push_str(",source=");
        line.push_str(&escape_tag(source));
    }
    if let Some(unit) = &point.tags.unit {
        line.push_str(",unit=");
        line.push_str(&escape_tag(unit));
    }

    line.push_str(" value=");
    line.push_str(&point.fields.value.to_string());
    line.push(' ');
    line.push_str(&point.time.timestamp().to_string());
    line
}

/// Encode a batch of points as one newline-separated write body
#[must_use]
pub fn encode_batch(points: &[Point]) -> String {
    points
        .iter()
        .map(point_to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split points into write bodies of at most `batch_size` points each
#[must_use]
pub fn batch_bodies(points: &[Point], batch_size: usize) -> Vec<String> {
    points
        .chunks(batch_size.max(1))
        .map(encode_batch)
        .collect()
}
