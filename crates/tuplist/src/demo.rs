//! The fixed demonstration: one tuple and one list over the same three values

use std::io;

use anyhow::{Context, Result};

use crate::list::{List, DEFAULT_CAPACITY};
use crate::tuple::Tuple;
use crate::value::{refs_of, TaggedValue};

/// Settings for [`run`].
///
/// The default reproduces the plain demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Label given to the tuple
    pub name: String,

    /// Starting capacity of the list
    pub capacity: usize,

    /// Also print each container's footprint
    pub layout: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: "mytuple".to_string(),
            capacity: DEFAULT_CAPACITY,
            layout: false,
        }
    }
}

/// The values every demonstration run displays, in order.
#[allow(clippy::approx_constant)]
pub fn sample_values() -> [TaggedValue; 3] {
    [
        TaggedValue::Int(42),
        TaggedValue::Float(3.14),
        TaggedValue::Char('A'),
    ]
}

/// Build both containers over [`sample_values`] and write them to `out`.
///
/// The tuple's lines come first, then the list's. Both containers are
/// dropped before returning; the values outlive them.
///
/// # Errors
///
/// Fails if either container cannot allocate, or if writing to `out` fails.
pub fn run<W: io::Write + ?Sized>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let values = sample_values();
    let refs = refs_of(&values);

    let tuple = Tuple::new(config.name.as_str(), &refs)
        .with_context(|| format!("building tuple {:?}", config.name))?;
    tuple.write_to(out).context("writing tuple")?;

    let mut list = List::with_capacity(config.capacity)
        .with_context(|| format!("creating list with capacity {}", config.capacity))?;
    list.extend_from_refs(refs.iter().copied())
        .context("appending to list")?;
    list.write_to(out).context("writing list")?;

    if config.layout {
        writeln!(out, "tuple {}: {}", tuple.name(), tuple.footprint())?;
        writeln!(out, "list: {} moved={}", list.footprint(), list.moved())?;
    }

    log::debug!(
        "demo: tuple {} slots, list {} of {} slots",
        tuple.len(),
        list.len(),
        list.capacity()
    );
    Ok(())
}
