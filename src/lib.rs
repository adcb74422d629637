//! Conditional class-name concatenation and variant selection.
//!
//! [`cx`] (alias [`cn`]) joins the truthy subset of a list of class values
//! into one space-separated string. [`create_variants`] builds a resolver
//! that picks `variant` and `size` classes from a static [`VariantConfig`]
//! and merges them after the config's `base`.
//!
//! ```
//! use class_variants::{cx, ClassValue};
//!
//! let active = true;
//! let classes = class_variants::cx!(
//!     "btn",
//!     [("btn-active", active), ("btn-disabled", false)],
//!     None::<&str>,
//! );
//! assert_eq!(classes, "btn btn-active");
//! assert_eq!(cx(["a", "b"]), "a b");
//! # let _ = ClassValue::Empty;
//! ```

pub mod class_value;
pub mod config;
pub mod errors;
pub mod merger;
pub mod variants;

#[cfg(feature = "cli")]
pub mod args;
#[cfg(feature = "cli")]
pub mod cli;

pub use class_value::{ClassValue, Truthy};
pub use config::{VariantConfig, VariantConfigBuilder, DEFAULT_KEY};
pub use errors::{VariantError, Result};
pub use merger::{cn, cx, merge};
pub use variants::{create_variants, Selection, VariantProps, VariantResolver, Variants};

#[cfg(feature = "cli")]
pub use args::{Cli, Commands, CxArgs, VariantsArgs};
#[cfg(feature = "cli")]
pub use cli::run;

/// Merge heterogeneous class values.
///
/// Each argument goes through `ClassValue::from`, so strings, options,
/// booleans, `(name, flag)` arrays and JSON values can be mixed freely.
#[macro_export]
macro_rules! cx {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::merge(&[$($crate::ClassValue::from($value)),+])
    };
}
