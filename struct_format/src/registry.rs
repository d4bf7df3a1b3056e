//! Static table of registered type characters.

use core::ffi::{
    c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong,
    c_ushort,
};
use core::mem::size_of;

use crate::{FormatError, ModeSpec, Result};

/// Kind of value a type character stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Zero byte that consumes no argument
    Pad,
    Bool,
    /// Single raw byte
    Char,
    Signed,
    Unsigned,
    Float,
    /// Zero-padded byte string
    Bytes,
}

/// Registry entry for one type character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode {
    pub ch: char,
    pub standard_size: usize,
    pub native_size: usize,
    pub kind: ValueKind,
}

impl TypeCode {
    const fn new(ch: char, standard_size: usize, native_size: usize, kind: ValueKind) -> Self {
        Self {
            ch,
            standard_size,
            native_size,
            kind,
        }
    }

    /// Byte size of one instance under `mode`.
    #[inline]
    pub fn size(&self, mode: &ModeSpec) -> usize {
        if mode.use_native_sizes {
            self.native_size
        } else {
            self.standard_size
        }
    }
}

use ValueKind::*;

pub static TYPE_TABLE: [TypeCode; 16] = [
    TypeCode::new('x', 1, 1, Pad),
    TypeCode::new('c', 1, 1, Char),
    TypeCode::new('b', 1, size_of::<c_schar>(), Signed),
    TypeCode::new('B', 1, size_of::<c_uchar>(), Unsigned),
    TypeCode::new('?', 1, size_of::<bool>(), Bool),
    TypeCode::new('h', 2, size_of::<c_short>(), Signed),
    TypeCode::new('H', 2, size_of::<c_ushort>(), Unsigned),
    TypeCode::new('i', 4, size_of::<c_int>(), Signed),
    TypeCode::new('I', 4, size_of::<c_uint>(), Unsigned),
    TypeCode::new('l', 4, size_of::<c_long>(), Signed),
    TypeCode::new('L', 4, size_of::<c_ulong>(), Unsigned),
    TypeCode::new('q', 8, size_of::<c_longlong>(), Signed),
    TypeCode::new('Q', 8, size_of::<c_ulonglong>(), Unsigned),
    TypeCode::new('f', 4, size_of::<f32>(), Float),
    TypeCode::new('d', 8, size_of::<f64>(), Float),
    TypeCode::new('s', 1, 1, Bytes),
];

#[cfg(feature = "half_support")]
static OPTIONAL_TYPES: [TypeCode; 1] = [TypeCode::new('e', 2, 2, Float)];

#[cfg(not(feature = "half_support"))]
static OPTIONAL_TYPES: [TypeCode; 0] = [];

/// All registered entries, including feature-gated ones.
pub fn registered() -> impl Iterator<Item = &'static TypeCode> {
    TYPE_TABLE.iter().chain(OPTIONAL_TYPES.iter())
}

/// Registry entry for `ch`.
///
/// # Errors
/// [`FormatError::UnsupportedType`] when `ch` has no entry, even if the grammar accepts it.
pub fn lookup(ch: char) -> Result<&'static TypeCode> {
    registered()
        .find(|code| code.ch == ch)
        .ok_or(FormatError::UnsupportedType(ch))
}

/// Size of one `ch` instance under `mode`.
pub fn represented_size(ch: char, mode: &ModeSpec) -> Result<usize> {
    lookup(ch).map(|code| code.size(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::is_type_char;

    #[test]
    fn standard_sizes() {
        let big = ModeSpec::BIG;
        for (ch, size) in [
            ('x', 1),
            ('c', 1),
            ('b', 1),
            ('B', 1),
            ('?', 1),
            ('h', 2),
            ('H', 2),
            ('i', 4),
            ('I', 4),
            ('l', 4),
            ('L', 4),
            ('q', 8),
            ('Q', 8),
            ('f', 4),
            ('d', 8),
            ('s', 1),
        ] {
            assert_eq!(represented_size(ch, &big).unwrap(), size, "type {ch}");
        }
    }

    #[test]
    fn native_sizes_follow_host_c_types() {
        let native = ModeSpec::NATIVE_ALIGNED;
        assert_eq!(represented_size('l', &native).unwrap(), size_of::<c_long>());
        assert_eq!(represented_size('i', &native).unwrap(), size_of::<c_int>());
        assert_eq!(represented_size('B', &native).unwrap(), 1);
    }

    #[test]
    fn kinds() {
        assert_eq!(lookup('x').unwrap().kind, ValueKind::Pad);
        assert_eq!(lookup('?').unwrap().kind, ValueKind::Bool);
        assert_eq!(lookup('b').unwrap().kind, ValueKind::Signed);
        assert_eq!(lookup('B').unwrap().kind, ValueKind::Unsigned);
        assert_eq!(lookup('c').unwrap().kind, ValueKind::Char);
        assert_eq!(lookup('s').unwrap().kind, ValueKind::Bytes);
        assert_eq!(lookup('d').unwrap().kind, ValueKind::Float);
    }

    #[test]
    fn grammar_chars_without_entry_are_unsupported() {
        for ch in ['n', 'N', 'p', 'P'] {
            assert!(is_type_char(ch));
            assert_eq!(lookup(ch), Err(FormatError::UnsupportedType(ch)));
        }
    }

    #[test]
    fn every_entry_is_a_grammar_char() {
        assert!(registered().all(|code| is_type_char(code.ch)));
    }

    #[cfg(feature = "half_support")]
    #[test]
    fn half_registered() {
        assert_eq!(represented_size('e', &ModeSpec::LITTLE).unwrap(), 2);
    }

    #[cfg(not(feature = "half_support"))]
    #[test]
    fn half_unsupported_without_feature() {
        assert_eq!(lookup('e'), Err(FormatError::UnsupportedType('e')));
    }
}
