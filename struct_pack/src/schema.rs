//! Compiled format strings.

use byte_view::{ByteView, ByteViewMut};
use struct_format::{FormatError, ModeSpec, count_items, parse};
use struct_layout::{Layout, ResolvedItem, resolve};
use tracing::{debug, trace};

use crate::convert::{decode, encode, is_storable_width};
use crate::iter::UnpackIter;
use crate::{PackError, Result, Value};

/// A format string parsed and laid out once, ready for any number of
/// pack and unpack calls.
///
/// A `Schema` is immutable and `Send + Sync`; share it by reference across
/// threads instead of recompiling.
///
/// # Example
/// ```
/// use struct_pack::{Schema, Value};
///
/// let schema = Schema::compile("!BB").unwrap();
/// assert_eq!(schema.size(), 2);
///
/// let bytes = schema.pack(&[Value::from(0x12u8), Value::from(0x34u8)]).unwrap();
/// assert_eq!(bytes, vec![0x12, 0x34]);
/// assert_eq!(schema.unpack(&bytes).unwrap(), vec![Value::UInt(0x12), Value::UInt(0x34)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    format: String,
    mode: ModeSpec,
    items: Vec<ResolvedItem>,
    layout: Layout,
    arg_count: usize,
}

impl Schema {
    /// Parse, resolve and lay out `format`.
    ///
    /// # Errors
    /// Any [`FormatError`]: grammar violations, unregistered type characters,
    /// or sizes that overflow `usize`.
    pub fn compile(format: &str) -> std::result::Result<Schema, FormatError> {
        let parsed = parse(format)?;
        let items = resolve(&parsed.items, &parsed.mode)?;
        if let Some(item) = items
            .iter()
            .find(|item| !is_storable_width(item.kind, item.unit_size))
        {
            return Err(FormatError::UnsupportedType(item.type_char));
        }
        let layout = Layout::compute(&items, &parsed.mode)?;
        let arg_count = count_items(&parsed.items);
        debug_assert_eq!(arg_count, items.iter().filter(|i| i.takes_arg()).count());

        debug!(
            format,
            fields = items.len(),
            args = arg_count,
            size = layout.size,
            "compiled schema"
        );
        Ok(Schema {
            format: format.to_owned(),
            mode: parsed.mode,
            items,
            layout,
            arg_count,
        })
    }

    /// The source format string.
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn mode(&self) -> &ModeSpec {
        &self.mode
    }

    /// Resolved fields, pad fields included.
    pub fn items(&self) -> &[ResolvedItem] {
        &self.items
    }

    /// Byte offset of each field in [`items`](Self::items).
    pub fn offsets(&self) -> &[usize] {
        &self.layout.offsets
    }

    /// Packed size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.layout.size
    }

    /// Number of arguments [`pack`](Self::pack) expects.
    #[inline]
    pub fn arg_count(&self) -> usize {
        self.arg_count
    }

    /// Pack `args` into a fresh zero-filled buffer of [`size`](Self::size) bytes.
    ///
    /// # Errors
    /// - [`PackError::ItemCountMismatch`] before anything is allocated
    /// - [`PackError::TypeMismatch`] / [`PackError::ValueOutOfRange`] for an
    ///   argument that does not convert; no buffer is returned
    pub fn pack(&self, args: &[Value]) -> Result<Vec<u8>> {
        if args.len() != self.arg_count {
            return Err(PackError::ItemCountMismatch {
                expected: self.arg_count,
                found: args.len(),
            });
        }

        let mut buffer = vec![0u8; self.size()];
        let mut view = ByteViewMut::new(&mut buffer, self.mode.byte_order);
        let mut args = args.iter().enumerate();
        for (item, &offset) in self.fields() {
            if !item.takes_arg() {
                continue;
            }
            // count checked above, so every argument-taking field has one
            let Some((index, value)) = args.next() else {
                break;
            };
            encode(&mut view, offset, item, index, value)?;
        }

        trace!(format = %self.format, size = buffer.len(), "packed record");
        Ok(buffer)
    }

    /// Pack `args` into `buffer` starting at `offset`.
    ///
    /// The caller's buffer is only written once every argument has converted;
    /// on error it is untouched. Bytes of the record not covered by a value
    /// (padding, short strings) are zeroed.
    pub fn pack_into(&self, buffer: &mut [u8], offset: usize, args: &[Value]) -> Result<()> {
        let end = self.record_end(buffer.len(), offset)?;
        let packed = self.pack(args)?;
        buffer[offset..end].copy_from_slice(&packed);
        Ok(())
    }

    /// Unpack a buffer of exactly [`size`](Self::size) bytes.
    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<Value>> {
        if bytes.len() != self.size() {
            return Err(PackError::BufferSizeMismatch {
                expected: self.size(),
                found: bytes.len(),
            });
        }

        let view = ByteView::new(bytes, self.mode.byte_order);
        let mut values = Vec::with_capacity(self.arg_count);
        for (item, &offset) in self.fields() {
            if item.takes_arg() {
                values.push(decode(&view, offset, item)?);
            }
        }
        Ok(values)
    }

    /// Unpack one record starting at `offset`; trailing bytes are ignored.
    pub fn unpack_from(&self, bytes: &[u8], offset: usize) -> Result<Vec<Value>> {
        let end = self.record_end(bytes.len(), offset)?;
        self.unpack(&bytes[offset..end])
    }

    /// Iterate over consecutive records filling `bytes`.
    ///
    /// # Errors
    /// [`PackError::ZeroSizedRecord`] for an empty schema and
    /// [`PackError::RaggedBuffer`] when `bytes` is not a whole number of records.
    pub fn iter_unpack<'s, 'b>(&'s self, bytes: &'b [u8]) -> Result<UnpackIter<'s, 'b>> {
        if self.size() == 0 {
            return Err(PackError::ZeroSizedRecord);
        }
        if bytes.len() % self.size() != 0 {
            return Err(PackError::RaggedBuffer {
                record_size: self.size(),
                len: bytes.len(),
            });
        }
        Ok(UnpackIter::new(self, bytes))
    }

    fn fields(&self) -> impl Iterator<Item = (&ResolvedItem, &usize)> {
        self.items.iter().zip(self.layout.offsets.iter())
    }

    fn record_end(&self, available: usize, offset: usize) -> Result<usize> {
        match offset.checked_add(self.size()) {
            Some(end) if end <= available => Ok(end),
            _ => Err(PackError::BufferTooSmall {
                needed: offset.saturating_add(self.size()),
                available,
            }),
        }
    }
}
