//! Record-by-record unpacking.

use crate::{Result, Schema, Value};

/// Iterator over consecutive fixed-size records, created by
/// [`Schema::iter_unpack`].
///
/// # Example
/// ```
/// use struct_pack::{Schema, Value};
///
/// let schema = Schema::compile("<H").unwrap();
/// let bytes = [1u8, 0, 2, 0, 3, 0];
/// let records: Vec<Vec<Value>> = schema
///     .iter_unpack(&bytes)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(records.len(), 3);
/// assert_eq!(records[2], vec![Value::UInt(3)]);
/// ```
#[derive(Debug, Clone)]
pub struct UnpackIter<'s, 'b> {
    schema: &'s Schema,
    bytes: &'b [u8],
    pos: usize,
}

impl<'s, 'b> UnpackIter<'s, 'b> {
    pub(crate) fn new(schema: &'s Schema, bytes: &'b [u8]) -> Self {
        Self {
            schema,
            bytes,
            pos: 0,
        }
    }

    fn remaining(&self) -> usize {
        (self.bytes.len() - self.pos) / self.schema.size()
    }
}

impl Iterator for UnpackIter<'_, '_> {
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.schema.size();
        if self.pos + size > self.bytes.len() {
            return None;
        }

        let chunk = &self.bytes[self.pos..self.pos + size];
        self.pos += size;
        Some(self.schema.unpack(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for UnpackIter<'_, '_> {}
