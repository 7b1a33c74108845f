//! Growable containers of value references
//!
//! A [`List`] tracks a logical capacity separately from its length. When an
//! append finds the list full, the capacity doubles and the buffer is
//! reallocated before the new reference is stored, so `len <= capacity`
//! holds after every operation and the total number of references moved by
//! reallocation stays below twice the number of appends.

use std::fmt;
use std::io;
use std::slice;

use crate::error::{Result, TuplistError};
use crate::layout::Footprint;
use crate::value::display::{fmt_indexed, write_indexed};
use crate::value::ValueRef;

/// Starting capacity of [`List::new`].
pub const DEFAULT_CAPACITY: usize = 2;

/// Fill state of a list relative to its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// No references stored
    Empty,
    /// Some slots free
    Partial,
    /// Every slot used; the next append grows the buffer
    Full,
}

/// A growable sequence of references with doubling capacity.
///
/// # Example
///
/// ```
/// use tuplist::{List, TaggedValue};
///
/// let values = [TaggedValue::Int(1), TaggedValue::Int(2), TaggedValue::Int(3)];
/// let mut list = List::new().unwrap();
///
/// list.append(&values[0]).unwrap();
/// list.append(&values[1]).unwrap();
/// assert_eq!(list.capacity(), 2);
///
/// // Full: this append doubles the capacity first
/// list.append(&values[2]).unwrap();
/// assert_eq!(list.capacity(), 4);
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Debug)]
pub struct List<'a> {
    /// Backing buffer; holds at least `capacity` slots
    slots: Vec<ValueRef<'a>>,

    /// Logical slot count, doubled on every grow
    capacity: usize,

    /// References copied across all grows
    moved: usize,
}

impl<'a> List<'a> {
    /// Create an empty list with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`TuplistError::Allocation`] if the buffer cannot be reserved.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty list with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`TuplistError::ZeroCapacity`] for a capacity of 0, since
    /// doubling it would never make room, and [`TuplistError::Allocation`]
    /// if the buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TuplistError::ZeroCapacity);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| TuplistError::Allocation {
                requested: capacity,
            })?;
        log::trace!("list: allocated {} slots", capacity);

        Ok(Self {
            slots,
            capacity,
            moved: 0,
        })
    }

    /// Create a new list and append each of `elements` in order.
    ///
    /// This always returns a fresh list; there is no way to initialize a
    /// list someone else created other than appending to it.
    ///
    /// # Errors
    ///
    /// Returns the first allocation error hit while growing.
    pub fn from_refs(elements: &[ValueRef<'a>]) -> Result<Self> {
        let mut list = Self::new()?;
        list.extend_from_refs(elements.iter().copied())?;
        Ok(list)
    }

    /// Append a reference at the end, doubling the capacity first if full.
    ///
    /// On error the list is unchanged: the length is only bumped once the
    /// slot is known to exist.
    ///
    /// # Errors
    ///
    /// Returns [`TuplistError::CapacityOverflow`] or
    /// [`TuplistError::Allocation`] if the grow fails.
    pub fn append(&mut self, value: impl Into<ValueRef<'a>>) -> Result<()> {
        if self.slots.len() == self.capacity {
            self.grow()?;
        }
        // len < capacity <= slots.capacity(), so this never reallocates
        self.slots.push(value.into());
        Ok(())
    }

    /// Append every reference of `elements`, one [`append`](Self::append) at a time.
    ///
    /// References appended before a failure stay in the list.
    pub fn extend_from_refs<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = ValueRef<'a>>,
    {
        for value in elements {
            self.append(value)?;
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let current = self.capacity;
        let doubled = current
            .checked_mul(2)
            .ok_or(TuplistError::CapacityOverflow { current })?;

        let len = self.slots.len();
        self.slots
            .try_reserve_exact(doubled - len)
            .map_err(|_| TuplistError::Allocation { requested: doubled })?;

        log::debug!(
            "list: growing from {} to {} slots, moving {} references",
            current,
            doubled,
            len
        );
        self.capacity = doubled;
        self.moved += len;
        Ok(())
    }

    /// Number of stored references.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the list holds no references
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots available before the next grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total references copied by grows so far.
    pub fn moved(&self) -> usize {
        self.moved
    }

    /// Current fill state.
    pub fn state(&self) -> ListState {
        match self.len() {
            0 => ListState::Empty,
            n if n == self.capacity => ListState::Full,
            _ => ListState::Partial,
        }
    }

    /// Reference at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<ValueRef<'a>> {
        self.slots.get(index).copied()
    }

    /// All references, in insertion order.
    pub fn as_slice(&self) -> &[ValueRef<'a>] {
        &self.slots
    }

    /// Iterate over the references in insertion order.
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, ValueRef<'a>>> {
        self.slots.iter().copied()
    }

    /// Used slots against allocated capacity.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.len(), self.capacity)
    }

    /// Write one `Index: N, ...` line per element.
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_indexed(out, self.iter())
    }
}

impl Drop for List<'_> {
    fn drop(&mut self) {
        log::trace!("list: releasing {} slots", self.capacity);
    }
}

impl fmt::Display for List<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_indexed(f, self.iter())
    }
}

impl<'l, 'a> IntoIterator for &'l List<'a> {
    type Item = ValueRef<'a>;
    type IntoIter = std::iter::Copied<slice::Iter<'l, ValueRef<'a>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TaggedValue;

    #[test]
    fn test_new_list_is_empty() {
        let list = List::new().unwrap();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert_eq!(list.state(), ListState::Empty);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(List::with_capacity(0).unwrap_err(), TuplistError::ZeroCapacity);
    }

    #[test]
    fn test_grow_only_when_full() {
        let v = TaggedValue::Int(0);
        let mut list = List::with_capacity(2).unwrap();

        list.append(&v).unwrap();
        assert_eq!(list.state(), ListState::Partial);
        list.append(&v).unwrap();
        assert_eq!(list.state(), ListState::Full);
        assert_eq!(list.capacity(), 2);
        assert_eq!(list.moved(), 0);

        list.append(&v).unwrap();
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.len(), 3);
        assert_eq!(list.moved(), 2);
        assert_eq!(list.state(), ListState::Partial);
    }

    #[test]
    fn test_capacity_one_doubles() {
        let v = TaggedValue::Char('c');
        let mut list = List::with_capacity(1).unwrap();
        let mut seen = Vec::new();
        for _ in 0..9 {
            list.append(&v).unwrap();
            seen.push(list.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn test_doubling_overflow() {
        let mut list = List::with_capacity(1).unwrap();
        list.capacity = usize::MAX / 2 + 1;
        assert_eq!(
            list.grow().unwrap_err(),
            TuplistError::CapacityOverflow {
                current: usize::MAX / 2 + 1
            }
        );
        assert_eq!(list.capacity(), usize::MAX / 2 + 1);
        assert_eq!(list.moved(), 0);
    }

    #[test]
    fn test_allocator_refusal_is_an_error() {
        let v = TaggedValue::Int(5);
        let mut list = List::with_capacity(1).unwrap();
        list.append(&v).unwrap();
        // The doubled buffer would exceed isize::MAX bytes
        list.capacity = usize::MAX / 4;
        let err = list.grow().unwrap_err();
        assert!(err.is_allocation());
        assert_eq!(list.len(), 1);
        assert_eq!(list.capacity(), usize::MAX / 4);
        assert!(list.get(0).unwrap().points_to(&v));
    }

    #[test]
    fn test_append_absent_reference() {
        let mut list = List::new().unwrap();
        list.append(ValueRef::absent()).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.to_string(), "Index: 0, Invalid Data\n");
    }
}
