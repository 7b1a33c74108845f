//! Tagged scalar values and the non-owning references containers hold

pub(crate) mod display;
mod impls;
mod refs;

pub use refs::{refs_of, ValueRef};

/// A scalar tagged with its kind.
///
/// The set of kinds is closed: a value is an integer, a float or a
/// character, and the variant itself is the tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaggedValue {
    /// 32-bit signed integer
    Int(i32),

    /// 32-bit floating point
    Float(f32),

    /// Unicode scalar value
    Char(char),
}

/// The kind of a [`TaggedValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Integer kind
    Int,
    /// Floating point kind
    Float,
    /// Character kind
    Char,
}

impl Tag {
    /// Wire number of this tag in a [`RawValue`].
    pub fn code(self) -> u32 {
        match self {
            Tag::Int => 0,
            Tag::Float => 1,
            Tag::Char => 2,
        }
    }

    /// Look up a tag by its wire number.
    pub fn from_code(code: u32) -> Option<Tag> {
        match code {
            0 => Some(Tag::Int),
            1 => Some(Tag::Float),
            2 => Some(Tag::Char),
            _ => None,
        }
    }
}

/// Tag-plus-payload encoding of a scalar.
///
/// The payload is the 32-bit pattern of whichever kind `tag` names. Nothing
/// forces the two to agree, which is why decoding is fallible and why this
/// type, unlike [`TaggedValue`], can display as an unknown kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawValue {
    /// Kind discriminant, see [`Tag::code`]
    pub tag: u32,

    /// Payload bits
    pub bits: u32,
}

impl RawValue {
    /// Create a raw value from its parts.
    pub fn new(tag: u32, bits: u32) -> Self {
        Self { tag, bits }
    }

    /// Decode into a tagged value, if the tag and payload are valid.
    pub fn decode(self) -> Option<TaggedValue> {
        TaggedValue::try_from(self).ok()
    }
}
