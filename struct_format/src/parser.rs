//! Format string tokenizer.
//!
//! Grammar: `[mode] ( [digits] type )*`. The parser only checks the grammar;
//! whether a type character is backed by the registry is decided later.

use crate::{FormatError, ModeSpec, Result};

/// Every type character the grammar accepts, registered or not.
pub const GRAMMAR_TYPE_CHARS: &str = "xcbB?hHiIlLqQnNefdspP";

/// Type character for a zero-padded byte string.
pub const STRING_CHAR: char = 's';

/// Type character for a padding byte.
pub const PAD_CHAR: char = 'x';

#[inline]
pub fn is_type_char(ch: char) -> bool {
    GRAMMAR_TYPE_CHARS.contains(ch)
}

/// One `(repeat, type)` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawItem {
    pub type_char: char,
    /// Leading decimal count, 1 when absent. An explicit 0 is kept.
    pub repeat: usize,
}

impl RawItem {
    pub const fn new(type_char: char, repeat: usize) -> Self {
        Self { type_char, repeat }
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.type_char == STRING_CHAR
    }

    #[inline]
    pub fn is_pad(&self) -> bool {
        self.type_char == PAD_CHAR
    }

    /// Number of pack arguments this token consumes.
    pub fn arg_count(&self) -> usize {
        if self.is_string() {
            1
        } else if self.is_pad() {
            0
        } else {
            self.repeat
        }
    }
}

/// Mode plus tokens of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormat {
    pub mode: ModeSpec,
    pub items: Vec<RawItem>,
}

/// Tokenize `format`.
///
/// # Errors
/// - [`FormatError::InvalidFormatChar`] for a character that is neither a
///   leading mode marker, a digit, nor a grammar type character
/// - [`FormatError::MissingTypeChar`] when the string ends after a repeat count
/// - [`FormatError::RepeatOverflow`] when a repeat count does not fit in `usize`
///
/// Positions are byte offsets into `format`.
pub fn parse(format: &str) -> Result<ParsedFormat> {
    let mut chars = format.char_indices().peekable();

    let mut mode = ModeSpec::default();
    if let Some(&(_, first)) = chars.peek() {
        if let Some(selected) = ModeSpec::from_marker(first) {
            mode = selected;
            chars.next();
        }
    }

    let mut items = Vec::new();
    while let Some((start, ch)) = chars.next() {
        let mut repeat = 1usize;
        let mut current = (start, ch);

        if ch.is_ascii_digit() {
            let mut count = digit_value(ch);
            loop {
                match chars.next() {
                    Some((_, d)) if d.is_ascii_digit() => {
                        count = count
                            .checked_mul(10)
                            .and_then(|n| n.checked_add(digit_value(d)))
                            .ok_or(FormatError::RepeatOverflow { position: start })?;
                    }
                    Some(next) => {
                        current = next;
                        break;
                    }
                    None => return Err(FormatError::MissingTypeChar { position: start }),
                }
            }
            repeat = count;
        }

        let (position, type_char) = current;
        if !is_type_char(type_char) {
            return Err(FormatError::InvalidFormatChar {
                ch: type_char,
                position,
            });
        }
        items.push(RawItem::new(type_char, repeat));
    }

    Ok(ParsedFormat { mode, items })
}

#[inline]
fn digit_value(ch: char) -> usize {
    (ch as u8 - b'0') as usize
}

/// Number of arguments a pack call must supply for `items`.
///
/// A string token is one argument whatever its repeat, a pad token consumes
/// none, and any other token consumes `repeat` arguments.
pub fn count_items(items: &[RawItem]) -> usize {
    items
        .iter()
        .fold(0usize, |total, item| total.saturating_add(item.arg_count()))
}
