use struct_format::{FormatError, ModeSpec, RawItem, Result, ValueKind, lookup};

/// A format token expanded to one buffer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedItem {
    pub type_char: char,
    pub kind: ValueKind,
    /// Bytes per scalar instance; also the alignment in aligned modes
    pub unit_size: usize,
    /// Bytes the whole field occupies
    pub total_size: usize,
}

impl ResolvedItem {
    #[inline]
    pub fn is_pad(&self) -> bool {
        self.kind == ValueKind::Pad
    }

    /// Whether packing this item consumes an argument.
    #[inline]
    pub fn takes_arg(&self) -> bool {
        !self.is_pad()
    }
}

/// Expand tokens into fields.
///
/// A string token of repeat `r` is one field of `r` bytes, and so is a pad
/// token. Any other token of repeat `r` becomes `r` separate scalar fields.
///
/// # Errors
/// [`FormatError::UnsupportedType`] for a grammar character with no registry
/// entry, [`FormatError::SizeOverflow`] if a field size does not fit in `usize`
/// or a scalar run is too long to expand.
pub fn resolve(items: &[RawItem], mode: &ModeSpec) -> Result<Vec<ResolvedItem>> {
    let mut resolved = Vec::new();
    for item in items {
        let code = lookup(item.type_char)?;
        let unit_size = code.size(mode);
        match code.kind {
            ValueKind::Bytes | ValueKind::Pad => {
                let total_size = unit_size
                    .checked_mul(item.repeat)
                    .ok_or(FormatError::SizeOverflow)?;
                resolved.push(ResolvedItem {
                    type_char: item.type_char,
                    kind: code.kind,
                    unit_size,
                    total_size,
                });
            }
            kind => {
                unit_size
                    .checked_mul(item.repeat)
                    .ok_or(FormatError::SizeOverflow)?;
                resolved
                    .try_reserve(item.repeat)
                    .map_err(|_| FormatError::SizeOverflow)?;
                let field = ResolvedItem {
                    type_char: item.type_char,
                    kind,
                    unit_size,
                    total_size: unit_size,
                };
                resolved.extend(std::iter::repeat_n(field, item.repeat));
            }
        }
    }
    Ok(resolved)
}
