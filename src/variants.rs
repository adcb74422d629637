//! Variant resolution on top of the class merger.
//!
//! A [`Variants`] value closes over a [`VariantConfig`] and turns a
//! per-call [`Selection`] into `base`, `variant` and `size` classes, merged
//! in that fixed order.
//!
//! An unset or empty selection field means `"default"`. A name that is
//! not in the config resolves to nothing; it does not fall back to the
//! group's default.

use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use crate::class_value::ClassValue;
use crate::config::{VariantConfig, DEFAULT_KEY};
use crate::errors::Result;
use crate::merger::merge;

/// Per-call choice of variant and size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub variant: Option<String>,
    pub size: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variant = Some(name.into());
        self
    }

    pub fn size(mut self, name: impl Into<String>) -> Self {
        self.size = Some(name.into());
        self
    }
}

/// Something that turns optional props into a class string.
pub trait VariantResolver {
    /// The props accepted by [`VariantResolver::resolve`].
    type Props;

    fn resolve(&self, props: Option<&Self::Props>) -> String;
}

/// Props type accepted by a resolver, e.g. `VariantProps<Variants>` is [`Selection`].
pub type VariantProps<R> = <R as VariantResolver>::Props;

/// Resolver produced by [`create_variants`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variants {
    config: VariantConfig,
}

/// Close over `config` without validating it.
///
/// ```
/// use class_variants::{create_variants, Selection, VariantConfig};
///
/// let button = create_variants(
///     VariantConfig::builder()
///         .base("btn")
///         .variant("default", "btn-primary")
///         .variant("secondary", "btn-secondary")
///         .size("default", "btn-md")
///         .size("lg", "btn-lg")
///         .build(),
/// );
///
/// let selection = Selection::new().variant("secondary").size("lg");
/// assert_eq!(button.resolve(Some(&selection)), "btn btn-secondary btn-lg");
/// assert_eq!(button.resolve(None), "btn btn-primary btn-md");
/// ```
pub fn create_variants(config: VariantConfig) -> Variants {
    Variants::new(config)
}

impl Variants {
    pub fn new(config: VariantConfig) -> Self {
        Self { config }
    }

    /// Like [`Variants::new`], but rejects groups without a `"default"` entry.
    pub fn try_new(config: VariantConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn resolve(&self, props: Option<&Selection>) -> String {
        let variant_key = effective_key(props.and_then(|p| p.variant.as_deref()));
        let size_key = effective_key(props.and_then(|p| p.size.as_deref()));

        let variant = lookup(&self.config.variant, "variant", variant_key);
        let size = lookup(&self.config.size, "size", size_key);

        let classes = merge([&self.config.base, variant, size]);
        tracing::trace!(variant = variant_key, size = size_key, classes = %classes, "Resolved variants");
        classes
    }

    /// Expose the resolver as a plain closure.
    pub fn into_fn(self) -> impl Fn(Option<&Selection>) -> String + Send + Sync + Clone {
        move |props| self.resolve(props)
    }
}

impl VariantResolver for Variants {
    type Props = Selection;

    fn resolve(&self, props: Option<&Selection>) -> String {
        Variants::resolve(self, props)
    }
}

fn effective_key(requested: Option<&str>) -> &str {
    match requested {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_KEY,
    }
}

static EMPTY: ClassValue = ClassValue::Empty;

fn lookup<'a>(group: &'a IndexMap<String, ClassValue>, group_name: &str, key: &str) -> &'a ClassValue {
    match group.get(key) {
        Some(value) => value,
        None => {
            tracing::debug!(group = group_name, key, "Unknown selection contributes no classes");
            &EMPTY
        }
    }
}
