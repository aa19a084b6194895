use std::num::{IntErrorKind, ParseIntError};

use mona::{Maybe, NothingError, OneOf, Result, catch};

#[derive(Debug, thiserror::Error)]
#[error("{0} does not fit in a byte")]
pub struct OutOfRange(pub String);

/// Parses a decimal byte.
///
/// Blank input fails with `NothingError`, malformed input with `ParseIntError`
/// and any number outside `0..=255`, however many digits it has, with
/// [`OutOfRange`].
pub fn parse_byte(input: &str) -> anyhow::Result<u8> {
    let trimmed = Maybe::Some(input.trim())
        .and_then(|s| {
            if s.is_empty() {
                Maybe::Nothing
            } else {
                Maybe::Some(s)
            }
        })
        .or_fail(Some("blank input"))?;
    let out_of_range = || OutOfRange(trimmed.to_owned());
    let n: i64 = trimmed.parse().map_err(|e: ParseIntError| -> anyhow::Error {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range().into(),
            _ => e.into(),
        }
    })?;
    u8::try_from(n).map_err(|_| out_of_range().into())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub parsed: usize,
    pub total: u32,
}

/// Sums the inputs that parse as bytes, skipping malformed and blank ones.
///
/// Out-of-range values are not declared, so they abort the run through `?`.
pub fn tally<'a>(inputs: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Tally> {
    let parse = catch::<OneOf<ParseIntError, NothingError>>().wrap(parse_byte);

    let mut tally = Tally::default();
    for input in inputs {
        match parse(input)? {
            Result::Ok(byte) => {
                tracing::info!("{:?} -> {}", input, byte);
                tally.total += u32::from(byte);
                tally.parsed += 1;
            }
            Result::Err(OneOf::First(e)) => tracing::warn!("{:?} is not a number: {}", input, e),
            Result::Err(OneOf::Second(_)) => tracing::warn!("Skipping blank input"),
        }
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bytes() {
        assert_eq!(parse_byte(" 42 ").unwrap(), 42);
        assert_eq!(parse_byte("255").unwrap(), 255);
    }

    #[test]
    fn classifies_failures() {
        assert!(parse_byte("   ").unwrap_err().is::<NothingError>());
        assert!(parse_byte("4x").unwrap_err().is::<ParseIntError>());
        assert!(parse_byte("256").unwrap_err().is::<OutOfRange>());
        assert!(parse_byte("-1").unwrap_err().is::<OutOfRange>());
    }

    #[test]
    fn numbers_past_i64_are_out_of_range() {
        let err = parse_byte("99999999999999999999").unwrap_err();
        assert!(err.is::<OutOfRange>());
        assert_eq!(err.to_string(), "99999999999999999999 does not fit in a byte");
        assert!(parse_byte("-99999999999999999999").unwrap_err().is::<OutOfRange>());
    }

    #[test]
    fn tally_counts_only_parsed_inputs() {
        let tally = tally(["1", "", "x", "2"]).unwrap();
        assert_eq!(tally, Tally { parsed: 2, total: 3 });
    }

    #[test]
    fn tally_stops_on_out_of_range() {
        let err = tally(["1", "99999999999999999999", "2"]).unwrap_err();
        assert!(err.is::<OutOfRange>());
    }
}
