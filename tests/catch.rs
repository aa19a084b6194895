use std::{num::ParseIntError, sync::Once};

use mona::{Maybe, NothingError, OneOf, Result, catch};
use pretty_assertions::assert_eq;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .init();
    });
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0} is negative")]
struct Negative(i64);

fn to_int(text: &str) -> anyhow::Result<i64> {
    let n: i64 = text.parse()?;
    if n < 0 {
        return Err(Negative(n).into());
    }
    Ok(n)
}

#[test]
fn text_to_integer() {
    init_tracing();
    let parse = catch::<ParseIntError>().wrap(to_int);

    assert_eq!(parse("2").unwrap(), Result::Ok(2));

    match parse("abc").unwrap() {
        Result::Ok(n) => panic!("parsed {n} from garbage"),
        Result::Err(e) => assert_eq!(e.to_string(), "invalid digit found in string"),
    }

    let undeclared = parse("-5").unwrap_err();
    assert_eq!(undeclared.downcast::<Negative>().unwrap(), Negative(-5));
}

#[test]
fn undeclared_failure_reaches_caller_through_question_mark() {
    init_tracing();
    let parse = catch::<ParseIntError>().wrap(to_int);

    fn total(
        parse: impl Fn(&'static str) -> anyhow::Result<Result<i64, ParseIntError>>,
    ) -> anyhow::Result<i64> {
        let mut sum = 0;
        for text in ["1", "x", "2", "-3", "4"] {
            sum += parse(text)?.get(0);
        }
        Ok(sum)
    }

    let err = total(parse).unwrap_err();
    assert_eq!(err.to_string(), "-3 is negative");
}

#[test]
fn declared_kinds_nest() {
    init_tracing();
    let lookup = catch::<OneOf<NothingError, OneOf<ParseIntError, Negative>>>().wrap(|key: &str| {
        let raw = Maybe::from(["7", "-1", "z"].into_iter().find(|v| *v == key)).or_fail(None)?;
        to_int(raw)
    });

    assert_eq!(lookup("7").unwrap().ok(), Maybe::Some(7));
    assert!(matches!(lookup("missing").unwrap(), Result::Err(OneOf::First(_))));
    assert!(matches!(lookup("z").unwrap(), Result::Err(OneOf::Second(OneOf::First(_)))));
    assert!(matches!(
        lookup("-1").unwrap(),
        Result::Err(OneOf::Second(OneOf::Second(Negative(-1))))
    ));
}

#[test]
fn wrapped_function_is_reusable() {
    init_tracing();
    let parse = catch::<ParseIntError>().wrap(|s: &str| s.parse::<u16>());
    let parsed: Vec<_> = ["1", "two", "3"].into_iter().map(|s| parse(s).unwrap().get(0)).collect();
    assert_eq!(parsed, vec![1, 0, 3]);
}
