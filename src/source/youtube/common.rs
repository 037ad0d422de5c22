use super::{ARTWORK_URL_BASE, WATCH_URL_BASE};
use crate::models::DURATION_MS_UNKNOWN;

/// Parse a duration string like "3:42" or "1:05:30" into milliseconds.
/// Any other shape, including non-numeric components or values too large
/// to hold in milliseconds, maps to the unknown sentinel rather than an
/// error. Live items carry no duration text at all.
pub fn parse_duration_text(text: &str) -> u64 {
    let parts: Option<Vec<u64>> = text.split(':').map(|p| p.parse::<u64>().ok()).collect();

    match parts.as_deref() {
        Some([hours, minutes, seconds]) => {
            sum_ms(&[(*hours, 3_600_000), (*minutes, 60_000), (*seconds, 1_000)])
        }
        Some([minutes, seconds]) => sum_ms(&[(*minutes, 60_000), (*seconds, 1_000)]),
        _ => None,
    }
    .unwrap_or(DURATION_MS_UNKNOWN)
}

fn sum_ms(components: &[(u64, u64)]) -> Option<u64> {
    components.iter().try_fold(0u64, |total, (value, scale)| {
        total.checked_add(value.checked_mul(*scale)?)
    })
}

pub fn watch_url(identifier: &str) -> String {
    format!("{}?v={}", WATCH_URL_BASE, identifier)
}

pub fn artwork_url(identifier: &str) -> String {
    format!("{}/{}/0.jpg", ARTWORK_URL_BASE, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_minutes_seconds() {
        assert_eq!(parse_duration_text("1:02:03"), 3_723_000);
        assert_eq!(parse_duration_text("0:00:01"), 1_000);
        assert_eq!(parse_duration_text("10:00:00"), 36_000_000);
    }

    #[test]
    fn parses_minutes_seconds() {
        assert_eq!(parse_duration_text("3:45"), 225_000);
        assert_eq!(parse_duration_text("0:30"), 30_000);
    }

    #[test]
    fn unrecognized_shapes_map_to_sentinel() {
        assert_eq!(parse_duration_text(""), DURATION_MS_UNKNOWN);
        assert_eq!(parse_duration_text("LIVE"), DURATION_MS_UNKNOWN);
        assert_eq!(parse_duration_text("1:2:3:4"), DURATION_MS_UNKNOWN);
        assert_eq!(parse_duration_text("90"), DURATION_MS_UNKNOWN);
        assert_eq!(parse_duration_text("1:xx"), DURATION_MS_UNKNOWN);
        assert_eq!(parse_duration_text("-1:30"), DURATION_MS_UNKNOWN);
    }

    #[test]
    fn overflowing_components_map_to_sentinel() {
        assert_eq!(
            parse_duration_text("9999999999999999:00:00"),
            DURATION_MS_UNKNOWN
        );
        assert_eq!(
            parse_duration_text("18446744073709551615:00"),
            DURATION_MS_UNKNOWN
        );
        // Each product fits but the sum does not.
        assert_eq!(
            parse_duration_text("5124095576030:30:00"),
            DURATION_MS_UNKNOWN
        );
    }

    #[test]
    fn derived_urls_substitute_the_identifier() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(
            artwork_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg"
        );
    }
}
