//! Raw text to typed field coercion

use crate::error::{Error, Result};
use crate::reflect::{FloatSlot, IntSlot, Slot, UintSlot};

impl IntSlot<'_> {
    /// Parse base-10 text at the field's width
    pub fn set_from_str(&mut self, raw: &str) -> Result<()> {
        match self {
            IntSlot::I8(v) => **v = raw.parse()?,
            IntSlot::I16(v) => **v = raw.parse()?,
            IntSlot::I32(v) => **v = raw.parse()?,
            IntSlot::I64(v) => **v = raw.parse()?,
            IntSlot::I128(v) => **v = raw.parse()?,
            IntSlot::Isize(v) => **v = raw.parse()?,
        }
        Ok(())
    }
}

impl UintSlot<'_> {
    /// Parse base-10 text at the field's width
    pub fn set_from_str(&mut self, raw: &str) -> Result<()> {
        match self {
            UintSlot::U8(v) => **v = raw.parse()?,
            UintSlot::U16(v) => **v = raw.parse()?,
            UintSlot::U32(v) => **v = raw.parse()?,
            UintSlot::U64(v) => **v = raw.parse()?,
            UintSlot::U128(v) => **v = raw.parse()?,
            UintSlot::Usize(v) => **v = raw.parse()?,
        }
        Ok(())
    }
}

impl FloatSlot<'_> {
    /// Parse text at the field's width; finite text that overflows the
    /// width is a range error
    pub fn set_from_str(&mut self, raw: &str) -> Result<()> {
        match self {
            FloatSlot::F32(v) => {
                let parsed: f32 = raw.parse()?;
                **v = check_float_range(parsed.is_finite(), parsed, raw)?;
            }
            FloatSlot::F64(v) => {
                let parsed: f64 = raw.parse()?;
                **v = check_float_range(parsed.is_finite(), parsed, raw)?;
            }
        }
        Ok(())
    }
}

fn check_float_range<T>(finite: bool, parsed: T, raw: &str) -> Result<T> {
    if finite || is_non_finite_literal(raw) {
        Ok(parsed)
    } else {
        Err(Error::FloatRange(raw.to_string()))
    }
}

/// `inf`, `infinity` or `nan` in any case, optionally signed
fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
}

/// Write `raw` into a scalar slot.
///
/// Booleans take the literal text `true` or `false`. Nested records and
/// unsupported kinds are rejected with `TypeNotSupport`.
pub fn assign_text(slot: Slot<'_>, raw: &str) -> Result<()> {
    match slot {
        Slot::Int(mut v) => v.set_from_str(raw),
        Slot::Uint(mut v) => v.set_from_str(raw),
        Slot::Float(mut v) => v.set_from_str(raw),
        Slot::Bool(v) => {
            *v = raw.parse()?;
            Ok(())
        }
        Slot::Str(v) => {
            raw.clone_into(v);
            Ok(())
        }
        Slot::Text(v) => v.decode_text(raw).map_err(Error::Decode),
        other => Err(Error::TypeNotSupport(other.kind_name().to_string())),
    }
}
