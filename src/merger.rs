use crate::class_value::ClassValue;

/// Accumulates contributions, one separator after each.
#[derive(Debug, Default)]
struct ClassAccumulator {
    out: String,
}

impl ClassAccumulator {
    fn push(&mut self, value: &ClassValue) {
        value.append_to(&mut self.out);
    }

    /// Drop the single separator left behind by the last contribution.
    fn finish(mut self) -> String {
        if self.out.ends_with(' ') {
            self.out.pop();
        }
        self.out
    }
}

/// Concatenate borrowed class values into one space-separated string.
///
/// Empty markers are skipped, atoms are copied verbatim and flag maps
/// contribute the names whose flag is set, in insertion order. Whitespace
/// inside caller fragments is preserved; only the trailing separator added
/// here is removed.
pub fn merge<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a ClassValue>,
{
    let mut acc = ClassAccumulator::default();
    for value in values {
        acc.push(value);
    }
    acc.finish()
}

/// Concatenate anything convertible into a [`ClassValue`].
///
/// ```
/// use class_variants::{cx, ClassValue};
///
/// let classes = cx([
///     ClassValue::from("foo"),
///     ClassValue::flags([("bar", true), ("baz", false)]),
///     ClassValue::Empty,
///     ClassValue::from("qux"),
/// ]);
/// assert_eq!(classes, "foo bar qux");
/// ```
pub fn cx<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let mut acc = ClassAccumulator::default();
    for value in values {
        acc.push(&value.into());
    }
    acc.finish()
}

/// Alias of [`cx`].
pub fn cn<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    cx(values)
}
