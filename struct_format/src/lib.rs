//! # struct_format
//!
//! Parser and type registry for `struct`-style format strings such as
//! `">BHILQ"` or `"@3H4B10s"`.
//!
//! ```rust
//! use struct_format::{parse, count_items, ByteOrder};
//!
//! let parsed = parse("!2B10s").unwrap();
//! assert_eq!(parsed.mode.byte_order, ByteOrder::Big);
//! assert_eq!(parsed.items.len(), 2);
//! assert_eq!(count_items(&parsed.items), 3);
//! ```

pub mod error;
pub mod mode;
pub mod parser;
pub mod registry;

pub use byte_view::ByteOrder;
pub use error::{FormatError, Result};
pub use mode::ModeSpec;
pub use parser::{ParsedFormat, RawItem, count_items, parse};
pub use registry::{TypeCode, ValueKind, lookup, represented_size};
