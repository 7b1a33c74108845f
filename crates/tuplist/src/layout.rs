//! Memory footprint of a container's backing buffer

use std::fmt;
use std::mem;

use crate::value::ValueRef;

/// How much of a backing buffer is allocated and how much is used.
///
/// Only the buffer of references is counted. The referenced values live
/// elsewhere and are the same size whichever container points at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    /// Number of stored references
    pub len: usize,

    /// Number of allocated slots
    pub slots: usize,
}

impl Footprint {
    /// Size in bytes of one slot.
    pub const SLOT_BYTES: usize = mem::size_of::<ValueRef<'static>>();

    /// Create a footprint for `len` used slots out of `slots`.
    pub fn new(len: usize, slots: usize) -> Self {
        debug_assert!(len <= slots);
        Self { len, slots }
    }

    /// Bytes allocated for the slots.
    pub fn bytes(&self) -> usize {
        self.slots * Self::SLOT_BYTES
    }

    /// Allocated slots not holding a reference.
    pub fn spare(&self) -> usize {
        self.slots - self.len
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "len={} slots={} bytes={} spare={}",
            self.len,
            self.slots,
            self.bytes(),
            self.spare()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_one_pointer() {
        // Option<&T> uses the null niche
        assert_eq!(Footprint::SLOT_BYTES, mem::size_of::<usize>());
    }

    #[test]
    fn test_spare_and_bytes() {
        let fp = Footprint::new(3, 4);
        assert_eq!(fp.spare(), 1);
        assert_eq!(fp.bytes(), 4 * Footprint::SLOT_BYTES);
        assert_eq!(
            fp.to_string(),
            format!("len=3 slots=4 bytes={} spare=1", 4 * Footprint::SLOT_BYTES)
        );
    }
}
