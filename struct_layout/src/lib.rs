//! # struct_layout
//!
//! Expands parsed format tokens into concrete items and places them in a
//! buffer, inserting alignment padding when the mode asks for it.
//!
//! ```rust
//! use struct_layout::calcsize;
//!
//! assert_eq!(calcsize(">BHILQ").unwrap(), 19);
//! assert_eq!(calcsize("=BH").unwrap(), 3);
//! // '@' aligns the u16 to an even offset
//! assert_eq!(calcsize("@BH").unwrap(), 4);
//! ```

pub mod layout;
pub mod resolve;

pub use layout::{Layout, calcsize, offsets_of};
pub use resolve::{ResolvedItem, resolve};

pub use struct_format::{FormatError, ModeSpec, RawItem, Result, ValueKind};
