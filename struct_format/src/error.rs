use thiserror::Error;

/// Errors raised while reading a format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Character outside the grammar, including a mode marker past position 0
    #[error("invalid format character {ch:?} at position {position}")]
    InvalidFormatChar { ch: char, position: usize },

    #[error("repeat count at position {position} is not followed by a type character")]
    MissingTypeChar { position: usize },

    #[error("repeat count at position {position} overflows usize")]
    RepeatOverflow { position: usize },

    /// Grammar character with no registry entry
    #[error("type character {0:?} is not supported")]
    UnsupportedType(char),

    #[error("format describes more bytes than fit in usize")]
    SizeOverflow,
}

pub type Result<T> = std::result::Result<T, FormatError>;
