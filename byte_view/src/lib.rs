//! # byte_view
//!
//! Order-aware reads and writes of plain scalars at arbitrary byte offsets.
//!
//! ```rust
//! use byte_view::{ByteOrder, ByteViewMut};
//!
//! let mut buf = [0u8; 6];
//! let mut view = ByteViewMut::new(&mut buf, ByteOrder::Big);
//! view.store(0, 0xFEFFu16).unwrap();
//! view.store(2, 0xFFFF_FFFEu32).unwrap();
//! assert_eq!(buf, [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod order;
pub mod view;

pub use error::ByteViewError;
pub use order::ByteOrder;
pub use view::{ByteView, ByteViewMut, Scalar};
