//! `Maybe` and `Result` containers for handling absent values and failed
//! computations as ordinary values.
//!
//! Both are closed enums, so `match` over them is checked for exhaustiveness:
//!
//! ```
//! use mona::Maybe;
//!
//! fn describe(m: Maybe<u32>) -> String {
//!     match m {
//!         Maybe::Some(n) => format!("got {n}"),
//!         Maybe::Nothing => "nothing".to_owned(),
//!     }
//! }
//!
//! assert_eq!(describe(Maybe::Some(3).map(|n| n * 2)), "got 6");
//! assert_eq!(describe(Maybe::Nothing), "nothing");
//! ```
//!
//! Leaving out a variant does not compile:
//!
//! ```compile_fail
//! use mona::Result;
//!
//! fn describe(r: Result<u32, String>) -> u32 {
//!     match r {
//!         Result::Ok(n) => n,
//!     }
//! }
//! ```
//!
//! Functions passed to `map`, `and_then` and the other combinators are called
//! as-is: a panic inside one unwinds through the combinator untouched.

mod catch;
pub mod convert;
mod maybe;
mod result;

pub use catch::{Catch, Declared, OneOf, catch};
pub use convert::from_optional;
pub use maybe::{Maybe, NothingError};
pub use result::{Result, ResultError};
