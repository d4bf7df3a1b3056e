#[cfg(feature = "std")]
use thiserror::Error;

/// Byte view errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteViewError {
    /// Access of `len` bytes at `offset` runs past the end of the slice
    #[cfg_attr(
        feature = "std",
        error("access of {len} bytes at offset {offset} exceeds buffer of {available} bytes")
    )]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ByteViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteViewError::OutOfBounds {
                offset,
                len,
                available,
            } => write!(
                f,
                "access of {} bytes at offset {} exceeds buffer of {} bytes",
                len, offset, available
            ),
        }
    }
}
