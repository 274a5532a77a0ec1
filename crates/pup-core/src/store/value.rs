//! Conversion from stored strings to typed values.
//!
//! # Why a closed set of kinds? (for beginners)
//!
//! Every value in a [`Config`](crate::Config) is stored as text.  When a
//! caller asks for a number or a flag, the text has to be converted, and
//! "what counts as a boolean" is a convention, not a law of nature.  Rather
//! than accept anything that happens to implement [`FromStr`], the set of
//! supported target types is fixed here and each kind gets one explicit
//! conversion rule:
//!
//! | Kind                          | Accepted text                                 |
//! |-------------------------------|-----------------------------------------------|
//! | integers (`i8`..`u128`, etc.) | the whole string, via the standard `FromStr`  |
//! | floats (`f32`, `f64`)         | the whole string, via the standard `FromStr`; |
//! |                               | includes `inf`, `infinity` and `NaN`          |
//! | `bool`                        | `true`/`false` (any ASCII case), `1`/`0`      |
//! | `String`                      | anything; returned unchanged                  |
//!
//! Conversions are strict: `"10abc"` is *not* the integer 10.  Float
//! conversion does accept the non-finite spellings `inf`, `+inf`, `-inf`,
//! `infinity` and `NaN` (ASCII case-insensitive); callers that need a
//! finite number must check [`f64::is_finite`] themselves.

use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// A scalar type that can be read out of a configuration entry.
///
/// Implemented for all primitive integers, `f32`, `f64`, `bool` and
/// `String`.  The trait is sealed; the set of kinds is closed.
pub trait ConfigValue: sealed::Sealed + Sized {
    /// Converts the raw stored text, returning `None` when the text is not
    /// a complete, valid rendering of `Self`.
    fn from_config_str(raw: &str) -> Option<Self>;
}

/// Implements [`ConfigValue`] for types whose standard `FromStr` already
/// rejects partial input.
macro_rules! impl_from_str_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ConfigValue for $ty {
                fn from_config_str(raw: &str) -> Option<Self> {
                    <$ty as FromStr>::from_str(raw).ok()
                }
            }
        )*
    };
}

impl_from_str_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl sealed::Sealed for bool {}

impl ConfigValue for bool {
    fn from_config_str(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("true") || raw == "1" {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
            Some(false)
        } else {
            None
        }
    }
}

impl sealed::Sealed for String {}

impl ConfigValue for String {
    fn from_config_str(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}
