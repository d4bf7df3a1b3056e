//! # struct_pack
//!
//! Pack and unpack heterogeneous values with `struct`-style format strings.
//!
//! ## Format strings
//!
//! An optional leading mode character picks byte order, sizes and alignment:
//!
//! | char | order  | sizes    | alignment |
//! |------|--------|----------|-----------|
//! | `@`  | native | native   | yes       |
//! | `=`  | native | standard | no        |
//! | `<`  | little | standard | no        |
//! | `>`  | big    | standard | no        |
//! | `!`  | big    | standard | no        |
//!
//! Without one, `@` applies. It is followed by any number of type characters,
//! each with an optional decimal repeat count: `x` pad byte, `c` char,
//! `b`/`B` 8-bit, `?` bool, `h`/`H` 16-bit, `i`/`I` and `l`/`L` 32-bit,
//! `q`/`Q` 64-bit, `e` half (feature `half_support`), `f` float, `d` double,
//! `s` byte string. `4B` is four separate `u8` arguments; `4s` is one
//! argument packed into four bytes, truncated or zero-padded on the right.
//!
//! ## Quick start
//!
//! ```rust
//! use struct_pack::prelude::*;
//!
//! let bytes = pack(
//!     ">BHILQ",
//!     &[
//!         254u8.into(),
//!         65534u16.into(),
//!         4294967294u32.into(),
//!         4294967294u32.into(),
//!         18446744073709551614u64.into(),
//!     ],
//! )?;
//! assert_eq!(bytes.len(), calcsize(">BHILQ")?);
//! assert_eq!(&bytes[..3], &[0xFE, 0xFF, 0xFE]);
//!
//! // compile once, reuse for every record
//! let schema = Schema::compile("!5s")?;
//! assert_eq!(schema.pack(&["ab".into()])?, b"ab\0\0\0");
//! # Ok::<(), PackError>(())
//! ```

mod convert;
pub mod error;
#[cfg(feature = "io")]
pub mod io;
pub mod iter;
pub mod prelude;
pub mod schema;
pub mod value;

pub use error::{PackError, Result};
pub use iter::UnpackIter;
pub use schema::Schema;
pub use value::Value;

pub use byte_view::ByteOrder;
pub use struct_format::{FormatError, ModeSpec, RawItem, ValueKind, count_items, parse};
pub use struct_layout::{Layout, ResolvedItem};

/// Pack `args` according to `format`.
///
/// Compiles the format on every call; keep a [`Schema`] when packing many records.
pub fn pack(format: &str, args: &[Value]) -> Result<Vec<u8>> {
    Schema::compile(format)?.pack(args)
}

/// Unpack `bytes`, which must be exactly `calcsize(format)` long.
pub fn unpack(format: &str, bytes: &[u8]) -> Result<Vec<Value>> {
    Schema::compile(format)?.unpack(bytes)
}

/// Packed size of `format` in bytes.
pub fn calcsize(format: &str) -> Result<usize> {
    Ok(struct_layout::calcsize(format)?)
}
