//! Convenience re-exports for common usage

pub use crate::{PackError, Schema, Value, calcsize, pack, unpack};

#[cfg(feature = "io")]
pub use crate::io::{PackWriter, UnpackReader};
