//! # Tuplist
//!
//! Two ways to hold a sequence of heterogeneous scalars by reference.
//!
//! A [`Tuple`] is sized exactly once, from the references it is handed, and
//! never reallocated. A [`List`] starts with a small capacity and doubles it
//! whenever an append finds it full, which keeps the total copying across N
//! appends linear in N.
//!
//! ## Ownership
//!
//! Neither container owns the [`TaggedValue`]s it points at. Both hold
//! [`ValueRef`]s borrowed for the container's lifetime, so the borrow checker
//! rejects any container that would outlive its values, and dropping a
//! container releases only its buffer of references.
//!
//! ## Allocation
//!
//! Every buffer is reserved fallibly. Construction and growth return
//! [`TuplistError`] instead of aborting; the `tuplist` binary reports the
//! error and exits non-zero.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod demo;
pub mod error;
pub mod layout;
pub mod list;
pub mod tuple;
pub mod value;

// Re-export main types
pub use demo::DemoConfig;
pub use error::{Result, TuplistError};
pub use layout::Footprint;
pub use list::{List, ListState, DEFAULT_CAPACITY};
pub use tuple::Tuple;
pub use value::{refs_of, RawValue, Tag, TaggedValue, ValueRef};

/// Tuplist version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
