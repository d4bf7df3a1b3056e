//! Byte order and alignment policy selected by the leading format character.

use byte_view::ByteOrder;

/// Byte order, size and alignment policy of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeSpec {
    /// Marker character this mode was selected by (`@` when absent)
    pub marker: char,
    pub byte_order: ByteOrder,
    /// Insert padding so each item starts at a multiple of its unit size
    pub pad_alignment: bool,
    /// Take sizes from the host C types instead of the fixed standard sizes
    pub use_native_sizes: bool,
}

impl ModeSpec {
    pub const NATIVE_ALIGNED: ModeSpec = ModeSpec {
        marker: '@',
        byte_order: ByteOrder::Native,
        pad_alignment: true,
        use_native_sizes: true,
    };

    pub const NATIVE_STANDARD: ModeSpec = ModeSpec {
        marker: '=',
        byte_order: ByteOrder::Native,
        pad_alignment: false,
        use_native_sizes: false,
    };

    pub const LITTLE: ModeSpec = ModeSpec {
        marker: '<',
        byte_order: ByteOrder::Little,
        pad_alignment: false,
        use_native_sizes: false,
    };

    pub const BIG: ModeSpec = ModeSpec {
        marker: '>',
        byte_order: ByteOrder::Big,
        pad_alignment: false,
        use_native_sizes: false,
    };

    pub const NETWORK: ModeSpec = ModeSpec {
        marker: '!',
        byte_order: ByteOrder::Big,
        pad_alignment: false,
        use_native_sizes: false,
    };

    /// Mode for a marker character, `None` if `ch` is not one.
    pub const fn from_marker(ch: char) -> Option<ModeSpec> {
        match ch {
            '@' => Some(Self::NATIVE_ALIGNED),
            '=' => Some(Self::NATIVE_STANDARD),
            '<' => Some(Self::LITTLE),
            '>' => Some(Self::BIG),
            '!' => Some(Self::NETWORK),
            _ => None,
        }
    }

    pub const fn is_marker(ch: char) -> bool {
        Self::from_marker(ch).is_some()
    }
}

impl Default for ModeSpec {
    fn default() -> Self {
        Self::NATIVE_ALIGNED
    }
}
