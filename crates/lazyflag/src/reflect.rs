//! Field metadata and typed field access
//!
//! A [`Record`] lists its fields in declaration order and hands out a
//! [`Slot`] per field, a typed mutable view the binders write through.
//! `#[derive(Record)]` generates both halves; hand-written impls work too.

use crate::error::BoxError;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

/// Static metadata for one record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field identifier as written in the source
    pub name: &'static str,
    /// `(tag_name, value)` pairs, e.g. `("json", "name_info")`
    pub tags: &'static [(&'static str, &'static str)],
    /// Key in the short-flag table
    pub short: Option<&'static str>,
    /// Absence is an error for token and getter binding
    pub required: bool,
}

impl FieldInfo {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tags: &[],
            short: None,
            required: false,
        }
    }

    /// Value of the tag named `tag_name`, if present and non-empty
    pub fn tag(&self, tag_name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(name, _)| *name == tag_name)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty())
    }
}

/// A structured value whose fields can be enumerated and written
pub trait Record {
    /// Field metadata in declaration order
    fn fields(&self) -> &'static [FieldInfo];

    /// Mutable view of the field at `index` in [`Record::fields`]
    fn field_mut(&mut self, index: usize) -> Option<Slot<'_>>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A type that can appear as a record field
pub trait Field {
    fn slot(&mut self) -> Slot<'_>;
}

/// Custom text decoding, checked before any primitive rule
pub trait TextDecode {
    fn decode_text(&mut self, text: &str) -> Result<(), BoxError>;
}

/// Typed mutable view of one field
pub enum Slot<'a> {
    Int(IntSlot<'a>),
    Uint(UintSlot<'a>),
    Float(FloatSlot<'a>),
    Bool(&'a mut bool),
    Str(&'a mut String),
    Text(&'a mut dyn TextDecode),
    Record(&'a mut dyn Record),
    /// Kind with no coercion rule, carrying the kind's name
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Short kind name used in error messages and logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Slot::Int(_) => "int",
            Slot::Uint(_) => "uint",
            Slot::Float(_) => "float",
            Slot::Bool(_) => "bool",
            Slot::Str(_) => "string",
            Slot::Text(_) => "text",
            Slot::Record(_) => "struct",
            Slot::Unsupported(kind) => kind,
        }
    }
}

pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
}

pub enum UintSlot<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
}

pub enum FloatSlot<'a> {
    F32(&'a mut f32),
    F64(&'a mut f64),
}

macro_rules! slot_field {
    ($($ty:ty => $kind:ident($view:ident::$variant:ident)),* $(,)?) => {
        $(
            impl Field for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$kind($view::$variant(self))
                }
            }
        )*
    };
}

slot_field! {
    i8 => Int(IntSlot::I8),
    i16 => Int(IntSlot::I16),
    i32 => Int(IntSlot::I32),
    i64 => Int(IntSlot::I64),
    i128 => Int(IntSlot::I128),
    isize => Int(IntSlot::Isize),
    u8 => Uint(UintSlot::U8),
    u16 => Uint(UintSlot::U16),
    u32 => Uint(UintSlot::U32),
    u64 => Uint(UintSlot::U64),
    u128 => Uint(UintSlot::U128),
    usize => Uint(UintSlot::Usize),
    f32 => Float(FloatSlot::F32),
    f64 => Float(FloatSlot::F64),
}

impl Field for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl Field for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Str(self)
    }
}

impl<T: Field + ?Sized> Field for Box<T> {
    fn slot(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}

macro_rules! unsupported_field {
    ($($kind:literal => [$($ty:ty),*]),* $(,)?) => {
        $($(
            impl<T> Field for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported($kind)
                }
            }
        )*)*
    };
}

unsupported_field! {
    "slice" => [Vec<T>, VecDeque<T>],
    "set" => [HashSet<T>, BTreeSet<T>],
    "option" => [Option<T>],
}

impl<K, V> Field for HashMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("map")
    }
}

impl<K, V> Field for BTreeMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("map")
    }
}

impl Field for char {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("char")
    }
}

impl Field for () {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("unit")
    }
}

/// Bind one or more `FromStr` types as text-decoded fields
///
/// ```ignore
/// lazyflag::impl_text_field!(Level, Duration);
/// ```
#[macro_export]
macro_rules! impl_text_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::TextDecode for $ty {
                fn decode_text(&mut self, text: &str) -> ::std::result::Result<(), $crate::BoxError> {
                    *self = text.parse::<$ty>()?;
                    Ok(())
                }
            }

            impl $crate::Field for $ty {
                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::Text(self)
                }
            }
        )+
    };
}

impl_text_field!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, PathBuf);
