/// Byte order used when storing multi-byte scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Whatever the host uses
    Native,
    Little,
    Big,
}

impl ByteOrder {
    /// The concrete order of the host.
    #[cfg(target_endian = "little")]
    pub const HOST: ByteOrder = ByteOrder::Little;
    #[cfg(target_endian = "big")]
    pub const HOST: ByteOrder = ByteOrder::Big;

    /// Resolve `Native` to the host's concrete order.
    pub const fn resolve(self) -> ByteOrder {
        match self {
            ByteOrder::Native => Self::HOST,
            other => other,
        }
    }

    /// True when bytes laid out in host order must be reversed to match `self`.
    #[inline]
    pub fn needs_swap(self) -> bool {
        self.resolve() != Self::HOST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_never_swaps() {
        assert!(!ByteOrder::Native.needs_swap());
        assert_eq!(ByteOrder::Native.resolve(), ByteOrder::HOST);
    }

    #[test]
    fn exactly_one_explicit_order_swaps() {
        assert_ne!(ByteOrder::Little.needs_swap(), ByteOrder::Big.needs_swap());
    }
}
