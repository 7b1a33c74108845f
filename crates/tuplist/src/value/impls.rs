//! TaggedValue trait implementations: accessors, From traits, raw encoding

use crate::error::TuplistError;

use super::*;

impl TaggedValue {
    /// The kind of this value.
    pub fn tag(&self) -> Tag {
        match self {
            TaggedValue::Int(_) => Tag::Int,
            TaggedValue::Float(_) => Tag::Float,
            TaggedValue::Char(_) => Tag::Char,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract integer value
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TaggedValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract float value
    pub fn as_float(&self) -> Option<f32> {
        match self {
            TaggedValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract character value
    pub fn as_char(&self) -> Option<char> {
        match self {
            TaggedValue::Char(c) => Some(*c),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i32> for TaggedValue {
    fn from(n: i32) -> Self {
        TaggedValue::Int(n)
    }
}

impl From<f32> for TaggedValue {
    fn from(n: f32) -> Self {
        TaggedValue::Float(n)
    }
}

impl From<char> for TaggedValue {
    fn from(c: char) -> Self {
        TaggedValue::Char(c)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Raw Encoding
// ═══════════════════════════════════════════════════════════════════

impl From<TaggedValue> for RawValue {
    fn from(value: TaggedValue) -> Self {
        let bits = match value {
            TaggedValue::Int(n) => n as u32,
            TaggedValue::Float(n) => n.to_bits(),
            TaggedValue::Char(c) => c as u32,
        };
        RawValue::new(value.tag().code(), bits)
    }
}

impl TryFrom<RawValue> for TaggedValue {
    type Error = TuplistError;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        match Tag::from_code(raw.tag) {
            Some(Tag::Int) => Ok(TaggedValue::Int(raw.bits as i32)),
            Some(Tag::Float) => Ok(TaggedValue::Float(f32::from_bits(raw.bits))),
            // A surrogate or out-of-range payload is no character at all
            Some(Tag::Char) => char::from_u32(raw.bits)
                .map(TaggedValue::Char)
                .ok_or(TuplistError::UnknownTag(raw.tag)),
            None => Err(TuplistError::UnknownTag(raw.tag)),
        }
    }
}
