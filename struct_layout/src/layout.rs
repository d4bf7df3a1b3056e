//! Offset and total size computation.

use struct_format::{FormatError, ModeSpec, Result, parse};
use tracing::trace;

use crate::{ResolvedItem, resolve};

/// Byte placement of every field of a format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Start of each field, same indexing as the resolved items
    pub offsets: Vec<usize>,
    /// Total buffer size; no trailing padding is added
    pub size: usize,
}

impl Layout {
    /// Place `items` one after another, aligning each field whose unit size
    /// exceeds 1 when `mode.pad_alignment` is set.
    pub fn compute(items: &[ResolvedItem], mode: &ModeSpec) -> Result<Layout> {
        let mut offsets = Vec::with_capacity(items.len());
        let mut cursor = 0usize;
        for item in items {
            if mode.pad_alignment && item.unit_size > 1 {
                cursor = align_up(cursor, item.unit_size)?;
            }
            offsets.push(cursor);
            cursor = cursor
                .checked_add(item.total_size)
                .ok_or(FormatError::SizeOverflow)?;
        }
        trace!(fields = items.len(), size = cursor, mode = %mode.marker, "computed layout");
        Ok(Layout {
            offsets,
            size: cursor,
        })
    }

    /// Padding bytes inserted directly before field `index`, or `None` when
    /// `index` is not a field of this layout.
    pub fn padding_before(&self, items: &[ResolvedItem], index: usize) -> Option<usize> {
        let offset = *self.offsets.get(index)?;
        match index.checked_sub(1) {
            None => Some(offset),
            Some(prev) => {
                let prev_end = self.offsets[prev] + items.get(prev)?.total_size;
                offset.checked_sub(prev_end)
            }
        }
    }
}

fn align_up(offset: usize, align: usize) -> Result<usize> {
    match offset % align {
        0 => Ok(offset),
        rem => offset
            .checked_add(align - rem)
            .ok_or(FormatError::SizeOverflow),
    }
}

/// Offsets of `items` under `mode`.
pub fn offsets_of(items: &[ResolvedItem], mode: &ModeSpec) -> Result<Vec<usize>> {
    Layout::compute(items, mode).map(|layout| layout.offsets)
}

/// Byte size of the buffer described by `format`.
pub fn calcsize(format: &str) -> Result<usize> {
    let parsed = parse(format)?;
    let items = resolve(&parsed.items, &parsed.mode)?;
    Layout::compute(&items, &parsed.mode).map(|layout| layout.size)
}
