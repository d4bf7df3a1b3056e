use bytemuck::Pod;

use crate::{ByteOrder, ByteViewError};

/// Fixed-width scalars that can be stored through a view.
///
/// Implemented for the primitive integers and floats (and `half::f16` with the
/// `half_support` feature). The byte image of a `Scalar` is reversed whole when
/// the view's order differs from the host, so only single-field types belong here.
pub trait Scalar: Pod {}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

#[cfg(feature = "half_support")]
impl Scalar for half::f16 {}

fn bounds(
    offset: usize,
    len: usize,
    available: usize,
) -> Result<core::ops::Range<usize>, ByteViewError> {
    match offset.checked_add(len) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(ByteViewError::OutOfBounds {
            offset,
            len,
            available,
        }),
    }
}

/// Read-only order-aware window over a byte slice.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
    order: ByteOrder,
}

impl<'a> ByteView<'a> {
    pub fn new(bytes: &'a [u8], order: ByteOrder) -> Self {
        Self { bytes, order }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read a scalar stored at `offset` in the view's byte order.
    pub fn load<T: Scalar>(&self, offset: usize) -> Result<T, ByteViewError> {
        let range = bounds(offset, core::mem::size_of::<T>(), self.bytes.len())?;
        let mut value = T::zeroed();
        let dst = bytemuck::bytes_of_mut(&mut value);
        dst.copy_from_slice(&self.bytes[range]);
        if self.order.needs_swap() {
            dst.reverse();
        }
        Ok(value)
    }

    /// Borrow `len` raw bytes at `offset`. Byte order does not apply.
    pub fn load_bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], ByteViewError> {
        let bytes = self.bytes;
        let range = bounds(offset, len, bytes.len())?;
        Ok(&bytes[range])
    }
}

/// Mutable order-aware window over a byte slice.
#[derive(Debug)]
pub struct ByteViewMut<'a> {
    bytes: &'a mut [u8],
    order: ByteOrder,
}

impl<'a> ByteViewMut<'a> {
    pub fn new(bytes: &'a mut [u8], order: ByteOrder) -> Self {
        Self { bytes, order }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write `value` at `offset` in the view's byte order.
    ///
    /// # Errors
    /// Returns [`ByteViewError::OutOfBounds`] if the scalar does not fit; the
    /// buffer is left untouched in that case.
    pub fn store<T: Scalar>(&mut self, offset: usize, value: T) -> Result<(), ByteViewError> {
        let range = bounds(offset, core::mem::size_of::<T>(), self.bytes.len())?;
        let dst = &mut self.bytes[range];
        dst.copy_from_slice(bytemuck::bytes_of(&value));
        if self.order.needs_swap() {
            dst.reverse();
        }
        Ok(())
    }

    /// Copy raw bytes to `offset`. Byte order does not apply.
    pub fn store_bytes(&mut self, offset: usize, src: &[u8]) -> Result<(), ByteViewError> {
        let range = bounds(offset, src.len(), self.bytes.len())?;
        self.bytes[range].copy_from_slice(src);
        Ok(())
    }

    /// Zero `len` bytes starting at `offset`.
    pub fn zero(&mut self, offset: usize, len: usize) -> Result<(), ByteViewError> {
        let range = bounds(offset, len, self.bytes.len())?;
        self.bytes[range].fill(0);
        Ok(())
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> ByteView<'_> {
        ByteView::new(self.bytes, self.order)
    }
}
