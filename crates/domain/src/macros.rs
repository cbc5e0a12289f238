//! Macro for implementing Display and FromStr for label enums
//!
//! Wire-level enums such as [`SlotKind`](crate::SlotKind) travel as lowercase
//! strings. This macro provides both directions in one place, with
//! case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use chroney_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Day,
//!     Night,
//! }
//!
//! impl_domain_label_conversions!(Shift, "shift" {
//!     Day => "day",
//!     Night => "night",
//! });
//!
//! assert_eq!("NIGHT".parse::<Shift>().unwrap(), Shift::Night);
//! assert_eq!(Shift::Day.to_string(), "day");
//! ```

/// Implements Display and FromStr traits for label enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$field` - Input field name reported when parsing fails
/// * `$variant => $str` - Mapping of enum variants to their lowercase labels
///
/// Parse failures are reported as
/// [`ChroneyError::MalformedInput`](crate::ChroneyError::MalformedInput)
/// listing the accepted labels.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident, $field:literal { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::ChroneyError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::ChroneyError::malformed(
                        $field,
                        s,
                        format!(
                            "expected one of: {}",
                            [$($str),+].join(", ")
                        ),
                    )),
                }
            }
        }
    };
}
