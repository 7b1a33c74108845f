//! Non-owning references to tagged values

use std::ptr;

use super::TaggedValue;

/// A borrowed, possibly absent, reference to a [`TaggedValue`].
///
/// Containers store these instead of values. The referenced value belongs to
/// whoever created it and must outlive every container holding a reference;
/// dropping a container never drops the values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValueRef<'a> {
    value: Option<&'a TaggedValue>,
}

impl<'a> ValueRef<'a> {
    /// Reference an existing value.
    pub fn new(value: &'a TaggedValue) -> Self {
        Self { value: Some(value) }
    }

    /// A reference to nothing. Displays as `Invalid Data`.
    pub fn absent() -> Self {
        Self { value: None }
    }

    /// The referenced value, if any.
    pub fn get(self) -> Option<&'a TaggedValue> {
        self.value
    }

    /// Check if this reference points at nothing
    pub fn is_absent(self) -> bool {
        self.value.is_none()
    }

    /// Whether this reference points at exactly `other` (identity, not equality).
    pub fn points_to(self, other: &TaggedValue) -> bool {
        self.value.is_some_and(|v| ptr::eq(v, other))
    }
}

impl<'a> From<&'a TaggedValue> for ValueRef<'a> {
    fn from(value: &'a TaggedValue) -> Self {
        Self::new(value)
    }
}

impl<'a> From<Option<&'a TaggedValue>> for ValueRef<'a> {
    fn from(value: Option<&'a TaggedValue>) -> Self {
        Self { value }
    }
}

/// Reference every value of a slice, in order.
pub fn refs_of(values: &[TaggedValue]) -> Vec<ValueRef<'_>> {
    values.iter().map(ValueRef::new).collect()
}
