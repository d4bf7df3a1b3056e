use byte_view::ByteViewError;
use struct_format::FormatError;
use thiserror::Error;

/// Errors raised while packing or unpacking against a schema.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("format expects {expected} arguments, got {found}")]
    ItemCountMismatch { expected: usize, found: usize },

    #[error("argument {index} is {found}, which cannot be packed as '{type_char}'")]
    TypeMismatch {
        index: usize,
        type_char: char,
        found: &'static str,
    },

    #[error("argument {index} is out of range for '{type_char}'")]
    ValueOutOfRange { index: usize, type_char: char },

    #[error("buffer of {available} bytes cannot hold {needed} bytes")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("unpack expects exactly {expected} bytes, got {found}")]
    BufferSizeMismatch { expected: usize, found: usize },

    #[error("buffer of {len} bytes is not a multiple of the {record_size}-byte record")]
    RaggedBuffer { record_size: usize, len: usize },

    #[error("cannot iterate over records of size 0")]
    ZeroSizedRecord,

    #[error("byte view error: {0}")]
    View(#[from] ByteViewError),

    #[cfg(feature = "io")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PackError>;
