//! Parsing for human-readable time specifications like `1h15m30s`.
//!
//! The grammar is deliberately lenient rather than validated: we look for a
//! run of digits immediately followed by `h`, `m`, or `s`, each searched for
//! independently. Components may appear in any order, any of them may be
//! missing (contributing zero), and characters that match none of the three
//! patterns are ignored. If a unit letter appears more than once, the first
//! occurrence with digits in front of it wins.
//!
//! That leniency is load-bearing: existing invocations rely on inputs like
//! `"90s"`, `"1h30"`, or `"2H"` all doing something sensible.

/// Parse an optional time specification into milliseconds.
///
/// `None` means "unbounded" and maps straight through to `None`. An empty
/// string is *not* unbounded: every component is absent, so it parses to
/// `Some(0)`.
///
/// ```
/// use snip::timespec::parse_time;
///
/// assert_eq!(parse_time(Some("1h15m30s")), Some(4_530_000));
/// assert_eq!(parse_time(Some("45s")), Some(45_000));
/// assert_eq!(parse_time(None), None);
/// ```
pub fn parse_time(spec: Option<&str>) -> Option<u64> {
    let spec = spec?.to_ascii_lowercase();

    let hours = component(&spec, b'h');
    let minutes = component(&spec, b'm');
    let seconds = component(&spec, b's');

    // Saturate rather than overflow: an absurdly large offset still means
    // "way past the end", and slicing clamps it to the clip length anyway.
    let total_seconds = hours
        .saturating_mul(60)
        .saturating_add(minutes)
        .saturating_mul(60)
        .saturating_add(seconds);
    Some(total_seconds.saturating_mul(1000))
}

/// Find the first run of decimal digits immediately followed by `unit`.
///
/// Unit letters with no digits in front of them are skipped, matching what a
/// `(\d+)<unit>` regex search would do. A missing component contributes zero;
/// a digit run too large for `u64` saturates to `u64::MAX` so the overall
/// offset still lands past the end of any clip.
fn component(spec: &str, unit: u8) -> u64 {
    let bytes = spec.as_bytes();

    for (i, &b) in bytes.iter().enumerate() {
        if b != unit {
            continue;
        }

        let mut start = i;
        while start > 0 && bytes[start - 1].is_ascii_digit() {
            start -= 1;
        }

        if start == i {
            continue;
        }

        return spec[start..i].parse().unwrap_or(u64::MAX);
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(parse_time(Some("1m30s")), Some(90_000));
    }

    #[test]
    fn parses_only_seconds() {
        assert_eq!(parse_time(Some("45s")), Some(45_000));
    }

    #[test]
    fn parses_hours_minutes_and_seconds() {
        assert_eq!(parse_time(Some("1h15m30s")), Some(4_530_000));
    }

    #[test]
    fn parses_only_hours() {
        assert_eq!(parse_time(Some("2h")), Some(7_200_000));
    }

    #[test]
    fn absent_spec_is_unbounded() {
        assert_eq!(parse_time(None), None);
    }

    #[test]
    fn empty_spec_is_zero_not_unbounded() {
        assert_eq!(parse_time(Some("")), Some(0));
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(parse_time(Some("1H5M")), Some(3_900_000));
    }

    #[test]
    fn components_may_appear_out_of_order() {
        assert_eq!(parse_time(Some("30s1m")), Some(90_000));
    }

    #[test]
    fn first_match_wins_for_repeated_units() {
        assert_eq!(parse_time(Some("1m2m")), Some(60_000));
    }

    #[test]
    fn unit_without_digits_is_skipped_not_matched() {
        // The bare `h` must not shadow the later `3h`.
        assert_eq!(parse_time(Some("h3h")), Some(10_800_000));
    }

    #[test]
    fn huge_specs_saturate_instead_of_overflowing() {
        // Grammar-valid but far beyond any real clip; must not wrap or panic.
        assert_eq!(parse_time(Some("9999999999999h")), Some(u64::MAX));

        // A digit run that doesn't even fit in u64 clamps the same way.
        assert_eq!(
            parse_time(Some("999999999999999999999999s")),
            Some(u64::MAX)
        );
    }

    #[test]
    fn junk_is_ignored() {
        assert_eq!(parse_time(Some("abc")), Some(0));
        assert_eq!(parse_time(Some("90")), Some(0));
    }
}
