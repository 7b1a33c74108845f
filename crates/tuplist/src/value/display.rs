//! Display implementations for tagged values and references

use std::fmt;
use std::io;

use super::*;

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Int => write!(f, "INT"),
            Tag::Float => write!(f, "FLOAT"),
            Tag::Char => write!(f, "CHAR"),
        }
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Value: ", self.tag())?;
        match self {
            TaggedValue::Int(n) => write!(f, "{}", n),
            TaggedValue::Float(n) => write!(f, "{:.2}", n),
            TaggedValue::Char(c) => write!(f, "{}", c),
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "Invalid Data"),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "Unknown type"),
        }
    }
}

/// Write one `Index: N, <value>` line per entry, in iteration order.
///
/// Shared by both containers' display. Absent entries are written as
/// `Invalid Data` lines, so the only way this fails is through `out`.
pub(crate) fn write_indexed<'a, W, I>(out: &mut W, entries: I) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: IntoIterator<Item = ValueRef<'a>>,
{
    for (i, entry) in entries.into_iter().enumerate() {
        writeln!(out, "Index: {}, {}", i, entry)?;
    }
    Ok(())
}

/// Same as [`write_indexed`], for `fmt::Display` impls.
pub(crate) fn fmt_indexed<'a, I>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    I: IntoIterator<Item = ValueRef<'a>>,
{
    for (i, entry) in entries.into_iter().enumerate() {
        writeln!(f, "Index: {}, {}", i, entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_each_kind() {
        assert_eq!(TaggedValue::Int(42).to_string(), "Type: INT, Value: 42");
        assert_eq!(TaggedValue::Float(3.14).to_string(), "Type: FLOAT, Value: 3.14");
        assert_eq!(TaggedValue::Char('A').to_string(), "Type: CHAR, Value: A");
    }

    #[test]
    fn test_float_rounds_to_two_digits() {
        assert_eq!(TaggedValue::Float(2.0).to_string(), "Type: FLOAT, Value: 2.00");
        assert_eq!(TaggedValue::Float(-1.5).to_string(), "Type: FLOAT, Value: -1.50");
        assert_eq!(TaggedValue::Float(2.999).to_string(), "Type: FLOAT, Value: 3.00");
    }

    #[test]
    fn test_absent_reference() {
        assert_eq!(ValueRef::absent().to_string(), "Invalid Data");
    }

    #[test]
    fn test_raw_unknown_type() {
        assert_eq!(RawValue::new(99, 1).to_string(), "Unknown type");
        assert_eq!(
            RawValue::from(TaggedValue::Int(5)).to_string(),
            "Type: INT, Value: 5"
        );
    }

    #[test]
    fn test_write_indexed() {
        let a = TaggedValue::Int(1);
        let mut out = Vec::new();
        write_indexed(&mut out, [ValueRef::new(&a), ValueRef::absent()]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Index: 0, Type: INT, Value: 1\nIndex: 1, Invalid Data\n"
        );
    }
}
