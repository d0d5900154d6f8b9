//! Binding from already-structured documents
//!
//! Input is a decoded JSON object (or anything converted into
//! `serde_json::Value`, such as YAML). Nested objects bind into nested
//! records, and alias paths are dotted (`info.iname`) so overrides can reach
//! deep fields.

use crate::alias::Alias;
use crate::attr::LoaderAttr;
use crate::bind::{missing_slot, FieldKey};
use crate::error::{Error, Result};
use crate::reflect::{Record, Slot};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Bind a string-keyed object into `record`.
///
/// Absent keys and nulls leave fields untouched. A value whose runtime type
/// does not fit the field fails with `TypeNotSupport`.
pub fn object_bind<R: Record>(
    data: &Map<String, Value>,
    record: &mut R,
    attr: &LoaderAttr,
    alias: Option<&Alias>,
) -> Result<()> {
    debug!(record = record.type_name(), keys = data.len(), "binding from object");
    bind_object(data, record, attr, alias, "")
}

/// Bind any JSON value into `record`; only objects are accepted
pub fn value_bind<R: Record>(
    data: &Value,
    record: &mut R,
    attr: &LoaderAttr,
    alias: Option<&Alias>,
) -> Result<()> {
    match data {
        Value::Object(map) => object_bind(map, record, attr, alias),
        other => Err(Error::InvalidTarget(format!(
            "expected an object, got {}",
            value_kind(other)
        ))),
    }
}

fn bind_object(
    data: &Map<String, Value>,
    record: &mut dyn Record,
    attr: &LoaderAttr,
    alias: Option<&Alias>,
    parent: &str,
) -> Result<()> {
    for (index, info) in record.fields().iter().enumerate() {
        let Some(slot) = record.field_mut(index) else {
            return Err(missing_slot(info));
        };
        if let Slot::Unsupported(kind) = slot {
            return Err(Error::TypeNotSupport(kind.to_string()));
        }

        let field = FieldKey::resolve(info, attr, alias, parent);
        let value = match data.get(&field.key) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };
        trace!(path = %field.path, key = %field.key, kind = value_kind(value), "resolved field");

        match (slot, value) {
            (Slot::Record(nested), Value::Object(map)) => {
                bind_object(map, nested, attr, alias, &field.path)?
            }
            (Slot::Str(target), Value::String(s)) => s.clone_into(target),
            (Slot::Text(target), Value::String(s)) => {
                target.decode_text(s).map_err(Error::Decode)?
            }
            (Slot::Bool(target), Value::Bool(b)) => *target = *b,
            (Slot::Int(mut target), Value::Number(n)) => target.set_from_str(&n.to_string())?,
            (Slot::Uint(mut target), Value::Number(n)) => target.set_from_str(&n.to_string())?,
            (Slot::Float(mut target), Value::Number(n)) => target.set_from_str(&n.to_string())?,
            (slot, value) => {
                return Err(Error::TypeNotSupport(format!(
                    "{} for {} field",
                    value_kind(value),
                    slot.kind_name()
                )))
            }
        }
    }
    Ok(())
}

/// Runtime type name of a document value
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
