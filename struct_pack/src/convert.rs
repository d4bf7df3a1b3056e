//! Conversion between [`Value`]s and field bytes.

use byte_view::{ByteView, ByteViewMut};
use struct_layout::{ResolvedItem, ValueKind};

use crate::{PackError, Result, Value};

/// Widths an integer or float field may have.
pub(crate) fn is_storable_width(kind: ValueKind, size: usize) -> bool {
    match kind {
        ValueKind::Signed | ValueKind::Unsigned => matches!(size, 1 | 2 | 4 | 8),
        #[cfg(feature = "half_support")]
        ValueKind::Float => matches!(size, 2 | 4 | 8),
        #[cfg(not(feature = "half_support"))]
        ValueKind::Float => matches!(size, 4 | 8),
        ValueKind::Bool | ValueKind::Char => size == 1,
        ValueKind::Pad | ValueKind::Bytes => true,
    }
}

fn integer_arg(value: &Value) -> Option<i128> {
    match *value {
        Value::Int(v) => Some(v as i128),
        Value::UInt(v) => Some(v as i128),
        Value::Bool(v) => Some(v as i128),
        Value::Char(v) => Some(v as i128),
        _ => None,
    }
}

fn integer_range(kind: ValueKind, size: usize) -> (i128, i128) {
    let bits = (size * 8) as u32;
    match kind {
        ValueKind::Signed => (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1),
        _ => (0, (1i128 << bits) - 1),
    }
}

/// Write `value` as field `item` at `offset`.
///
/// `index` is the argument position, reported in errors. Nothing is written
/// when the value is rejected.
pub(crate) fn encode(
    view: &mut ByteViewMut<'_>,
    offset: usize,
    item: &ResolvedItem,
    index: usize,
    value: &Value,
) -> Result<()> {
    let mismatch = || PackError::TypeMismatch {
        index,
        type_char: item.type_char,
        found: value.kind_name(),
    };
    let out_of_range = || PackError::ValueOutOfRange {
        index,
        type_char: item.type_char,
    };

    match item.kind {
        ValueKind::Pad => {}
        ValueKind::Signed | ValueKind::Unsigned => {
            let v = integer_arg(value).ok_or_else(mismatch)?;
            let (min, max) = integer_range(item.kind, item.unit_size);
            if v < min || v > max {
                return Err(out_of_range());
            }
            // two's complement truncation is exact once the range check passed
            match item.unit_size {
                1 => view.store(offset, v as u8)?,
                2 => view.store(offset, v as u16)?,
                4 => view.store(offset, v as u32)?,
                8 => view.store(offset, v as u64)?,
                size => unreachable!("integer width {size} rejected at compile"),
            }
        }
        ValueKind::Bool => {
            let truth = match *value {
                Value::Bool(b) => b,
                Value::Int(v) => v != 0,
                Value::UInt(v) => v != 0,
                _ => return Err(mismatch()),
            };
            view.store(offset, truth as u8)?;
        }
        ValueKind::Char => {
            let byte = match value {
                Value::Char(c) => *c,
                Value::Bytes(b) if b.len() == 1 => b[0],
                _ => return Err(mismatch()),
            };
            view.store(offset, byte)?;
        }
        ValueKind::Float => {
            let v = match *value {
                Value::Float(f) => f,
                Value::Int(i) => i as f64,
                Value::UInt(u) => u as f64,
                _ => return Err(mismatch()),
            };
            encode_float(view, offset, item, index, v)?;
        }
        ValueKind::Bytes => {
            let bytes = value.as_bytes().ok_or_else(mismatch)?;
            let len = bytes.len().min(item.total_size);
            view.store_bytes(offset, &bytes[..len])?;
            view.zero(offset + len, item.total_size - len)?;
        }
    }
    Ok(())
}

/// Store `v` at the field's float width; finite values that overflow it are
/// rejected rather than stored as infinity.
fn encode_float(
    view: &mut ByteViewMut<'_>,
    offset: usize,
    item: &ResolvedItem,
    index: usize,
    v: f64,
) -> Result<()> {
    let out_of_range = PackError::ValueOutOfRange {
        index,
        type_char: item.type_char,
    };
    match item.unit_size {
        #[cfg(feature = "half_support")]
        2 => {
            let h = half::f16::from_f64(v);
            if h.is_infinite() && v.is_finite() {
                return Err(out_of_range);
            }
            view.store(offset, h)?;
        }
        4 => {
            let f = v as f32;
            if f.is_infinite() && v.is_finite() {
                return Err(out_of_range);
            }
            view.store(offset, f)?;
        }
        8 => view.store(offset, v)?,
        size => unreachable!("float width {size} rejected at compile"),
    }
    Ok(())
}

/// Read field `item` at `offset` as its canonical [`Value`].
///
/// Must not be called for pad fields.
pub(crate) fn decode(view: &ByteView<'_>, offset: usize, item: &ResolvedItem) -> Result<Value> {
    let value = match (item.kind, item.unit_size) {
        (ValueKind::Signed, 1) => Value::Int(view.load::<i8>(offset)? as i64),
        (ValueKind::Signed, 2) => Value::Int(view.load::<i16>(offset)? as i64),
        (ValueKind::Signed, 4) => Value::Int(view.load::<i32>(offset)? as i64),
        (ValueKind::Signed, 8) => Value::Int(view.load::<i64>(offset)?),
        (ValueKind::Unsigned, 1) => Value::UInt(view.load::<u8>(offset)? as u64),
        (ValueKind::Unsigned, 2) => Value::UInt(view.load::<u16>(offset)? as u64),
        (ValueKind::Unsigned, 4) => Value::UInt(view.load::<u32>(offset)? as u64),
        (ValueKind::Unsigned, 8) => Value::UInt(view.load::<u64>(offset)?),
        #[cfg(feature = "half_support")]
        (ValueKind::Float, 2) => Value::Float(view.load::<half::f16>(offset)?.to_f64()),
        (ValueKind::Float, 4) => Value::Float(view.load::<f32>(offset)? as f64),
        (ValueKind::Float, 8) => Value::Float(view.load::<f64>(offset)?),
        (ValueKind::Bool, _) => Value::Bool(view.load::<u8>(offset)? != 0),
        (ValueKind::Char, _) => Value::Char(view.load::<u8>(offset)?),
        (ValueKind::Bytes, _) => Value::Bytes(view.load_bytes(offset, item.total_size)?.to_vec()),
        (kind, size) => unreachable!("no decoder for {kind:?} of width {size}"),
    };
    Ok(value)
}
