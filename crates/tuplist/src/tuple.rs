//! Fixed-size containers of value references
//!
//! A [`Tuple`] is sized once, from the references it is given, and never
//! reallocated. Its buffer has no spare slots.

use std::fmt;
use std::io;
use std::slice;

use crate::error::{Result, TuplistError};
use crate::layout::Footprint;
use crate::value::display::{fmt_indexed, write_indexed};
use crate::value::ValueRef;

/// An exact-size, immutable sequence of references.
///
/// # Example
///
/// ```
/// use tuplist::{TaggedValue, Tuple, ValueRef};
///
/// let a = TaggedValue::Int(42);
/// let b = TaggedValue::Char('A');
///
/// let tuple = Tuple::new("pair", &[ValueRef::new(&a), ValueRef::new(&b)]).unwrap();
/// assert_eq!(tuple.len(), 2);
/// assert_eq!(tuple.footprint().spare(), 0);
/// assert_eq!(tuple.to_string(), "Index: 0, Type: INT, Value: 42\nIndex: 1, Type: CHAR, Value: A\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tuple<'a> {
    /// Label, informational only
    name: String,

    /// Backing buffer, exactly `len` slots
    slots: Box<[ValueRef<'a>]>,
}

impl<'a> Tuple<'a> {
    /// Build a tuple holding a copy of each reference in `elements`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`TuplistError::Allocation`] if the buffer cannot be reserved.
    pub fn new(name: impl Into<String>, elements: &[ValueRef<'a>]) -> Result<Self> {
        let count = elements.len();
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(count)
            .map_err(|_| TuplistError::Allocation { requested: count })?;
        buffer.extend_from_slice(elements);

        let name = name.into();
        log::trace!("tuple {:?}: allocated {} slots", name, count);

        Ok(Self {
            name,
            slots: buffer.into_boxed_slice(),
        })
    }

    /// The tuple's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of references, fixed at construction.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the tuple holds no references
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reference at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<ValueRef<'a>> {
        self.slots.get(index).copied()
    }

    /// All references, in construction order.
    pub fn as_slice(&self) -> &[ValueRef<'a>] {
        &self.slots
    }

    /// Iterate over the references in order.
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, ValueRef<'a>>> {
        self.slots.iter().copied()
    }

    /// Allocated versus used slots; always equal for a tuple.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.len(), self.slots.len())
    }

    /// Write one `Index: N, ...` line per element.
    ///
    /// Absent references produce an `Invalid Data` line; only `out` can fail.
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_indexed(out, self.iter())
    }
}

impl Drop for Tuple<'_> {
    fn drop(&mut self) {
        log::trace!("tuple {:?}: releasing {} slots", self.name, self.slots.len());
    }
}

impl fmt::Display for Tuple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_indexed(f, self.iter())
    }
}

impl<'t, 'a> IntoIterator for &'t Tuple<'a> {
    type Item = ValueRef<'a>;
    type IntoIter = std::iter::Copied<slice::Iter<'t, ValueRef<'a>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TaggedValue;

    #[test]
    fn test_empty_tuple() {
        let tuple = Tuple::new("empty", &[]).unwrap();
        assert!(tuple.is_empty());
        assert_eq!(tuple.footprint(), Footprint::new(0, 0));
        assert_eq!(tuple.to_string(), "");
    }

    #[test]
    fn test_buffer_has_no_spare_capacity() {
        let v = TaggedValue::Int(1);
        let refs = vec![ValueRef::new(&v); 5];
        let tuple = Tuple::new("five", &refs).unwrap();
        assert_eq!(tuple.len(), 5);
        assert_eq!(tuple.footprint().slots, 5);
        assert_eq!(tuple.footprint().spare(), 0);
    }

    #[test]
    fn test_holds_references_not_copies() {
        let v = TaggedValue::Float(1.5);
        let tuple = Tuple::new("one", &[ValueRef::new(&v)]).unwrap();
        assert!(tuple.get(0).unwrap().points_to(&v));
        assert_eq!(tuple.get(1), None);
    }

    #[test]
    fn test_name_is_informational() {
        let v = TaggedValue::Int(3);
        let a = Tuple::new("a", &[ValueRef::new(&v)]).unwrap();
        let b = Tuple::new("b", &[ValueRef::new(&v)]).unwrap();
        assert_eq!(a.name(), "a");
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_display_with_absent_entry() {
        let v = TaggedValue::Char('z');
        let tuple = Tuple::new("gap", &[ValueRef::absent(), ValueRef::new(&v)]).unwrap();
        assert_eq!(
            tuple.to_string(),
            "Index: 0, Invalid Data\nIndex: 1, Type: CHAR, Value: z\n"
        );
        assert_eq!(tuple.len(), 2);
    }
}
