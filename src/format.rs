use crate::{
    config::{self, CalendarConfig},
    error::{calendar_fault, ParseError},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Renders `t` with a strftime `pattern` in `config`'s timezone.
pub(crate) fn render(config: &CalendarConfig, t: DateTime<Utc>, pattern: &str) -> String {
    t.with_timezone(&config.timezone()).format(pattern).to_string()
}

/// Parses `input` against a chrono strftime `pattern`, interpreting the
/// result in the process-wide timezone.
///
/// The pattern must pin down at least a full calendar date; if it carries no
/// time fields, the instant is midnight of the parsed day. A mismatched input
/// is the recoverable [`ParseError`] — round-tripping through
/// [`DateTimeExt::format_as`](crate::DateTimeExt::format_as) always parses
/// back.
///
/// # Examples
///
/// ```
/// use tempo::prelude::*;
///
/// let t = tempo::parse_from_pattern("2023-02-15 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(t, tempo::datetime(2023, 2, 15, 10, 0, 0));
///
/// let midnight = tempo::parse_from_pattern("2023-02-15", "%Y-%m-%d").unwrap();
/// assert_eq!(midnight, tempo::date(2023, 2, 15));
///
/// assert!(tempo::parse_from_pattern("not a date", "%Y-%m-%d").is_err());
/// ```
///
/// # Errors
///
/// - [`ParseError::PatternMismatch`] if `input` does not match `pattern`.
pub fn parse_from_pattern(input: &str, pattern: &str) -> Result<DateTime<Utc>, ParseError> {
    parse_with(&config::global(), input, pattern)
}

/// Like [`parse_from_pattern`], but under an explicit [`CalendarConfig`].
///
/// # Errors
///
/// - [`ParseError::PatternMismatch`] if `input` does not match `pattern`.
pub fn parse_with(
    config: &CalendarConfig,
    input: &str,
    pattern: &str,
) -> Result<DateTime<Utc>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(input, pattern)
        .or_else(|_| NaiveDate::parse_from_str(input, pattern).map(|d| d.and_time(NaiveTime::MIN)))
        .map_err(|source| ParseError::PatternMismatch {
            input: input.to_owned(),
            pattern: pattern.to_owned(),
            source,
        })?;
    Ok(config
        .timezone()
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| calendar_fault("parsed datetime is not representable"))
        .with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_render_and_parse_round_trip() {
        let config = CalendarConfig::utc();
        let pattern = "%Y-%m-%d %H:%M:%S";
        let t = utc(2023, 2, 15, 10, 0, 0);
        let rendered = render(&config, t, pattern);
        assert_eq!(rendered, "2023-02-15 10:00:00");
        assert_eq!(parse_with(&config, &rendered, pattern), Ok(t));
    }

    #[test]
    fn test_parse_date_only_lands_at_midnight() {
        let config = CalendarConfig::utc();
        assert_eq!(
            parse_with(&config, "2023-02-15", "%Y-%m-%d"),
            Ok(utc(2023, 2, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_respects_config_timezone() {
        let ist = CalendarConfig::with_timezone(FixedOffset::east_opt(19800).unwrap());
        // 10:00 IST is 04:30 UTC
        assert_eq!(
            parse_with(&ist, "2023-02-15 10:00:00", "%Y-%m-%d %H:%M:%S"),
            Ok(utc(2023, 2, 15, 4, 30, 0))
        );
    }

    #[test]
    fn test_render_respects_config_timezone() {
        let ist = CalendarConfig::with_timezone(FixedOffset::east_opt(19800).unwrap());
        let t = utc(2023, 2, 15, 4, 30, 0);
        assert_eq!(render(&ist, t, "%H:%M"), "10:00");
    }

    #[test]
    fn test_parse_mismatch_is_recoverable() {
        let config = CalendarConfig::utc();
        let args = [
            ("not a date", "%Y-%m-%d"),
            ("2023-02-15", "%Y/%m/%d"),
            ("2023-02", "%Y-%m-%d"),
            ("10:00:00", "%H:%M:%S"), // no date fields to anchor an instant
        ];
        for (input, pattern) in args {
            match parse_with(&config, input, pattern) {
                Err(ParseError::PatternMismatch {
                    input: got_input,
                    pattern: got_pattern,
                    ..
                }) => {
                    assert_eq!(got_input, input);
                    assert_eq!(got_pattern, pattern);
                }
                other => panic!("expected a pattern mismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_global_default_is_utc() {
        let _guard = crate::config::test_lock();
        assert_eq!(
            parse_from_pattern("2023-02-15 10:00:00", "%Y-%m-%d %H:%M:%S"),
            Ok(utc(2023, 2, 15, 10, 0, 0))
        );
    }
}
