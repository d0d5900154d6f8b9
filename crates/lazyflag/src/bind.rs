//! Field key resolution and the flat struct binders
//!
//! Both binders here walk a record in declaration order and resolve every
//! field against one flat key namespace: nested records share the keys of
//! their parent.

use crate::alias::{resolve_alias, Alias};
use crate::attr::LoaderAttr;
use crate::coerce::assign_text;
use crate::error::{Error, Result};
use crate::loader::{single, Loader};
use crate::mode::Mode;
use crate::reflect::{FieldInfo, Record, Slot};
use tracing::{debug, trace};

/// Effective lookup for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
    /// Tag value or translated identifier, dotted under `parent`
    pub path: String,
    /// Key looked up in the source after alias resolution
    pub key: String,
    /// Key looked up in the short-flag table
    pub short: Option<&'static str>,
    pub mode: Mode,
}

impl FieldKey {
    /// Resolve `info` to a lookup key.
    ///
    /// The base name is the field's tag under `attr`'s tag name, or the
    /// translated identifier when the tag is absent or empty. The alias table
    /// is then consulted with `parent.name`; without an override the key is
    /// the base name.
    pub fn resolve(
        info: &FieldInfo,
        attr: &LoaderAttr,
        alias: Option<&Alias>,
        parent: &str,
    ) -> Self {
        let name = match info.tag(attr.tag_name()) {
            Some(tag) => tag.to_string(),
            None => attr.translate(info.name),
        };
        let path = if parent.is_empty() {
            name
        } else {
            format!("{}.{}", parent, name)
        };
        let key = resolve_alias(alias, &path).to_string();

        let mut mode = Mode::LONG;
        if info.short.is_some() {
            mode |= Mode::SHORT;
        }
        if info.required {
            mode |= Mode::REQUIRED;
        }

        Self {
            path,
            key,
            short: info.short,
            mode,
        }
    }

    /// Key for the short-flag table: the declared short key, else the long key
    pub fn short_key(&self) -> &str {
        self.short.unwrap_or(&self.key)
    }
}

impl Loader {
    /// Bind tokenized arguments into `record`
    pub fn bind<R: Record>(&self, record: &mut R) -> Result<()> {
        self.bind_with_alias(record, None)
    }

    /// Bind tokenized arguments into `record`, consulting `alias` for keys.
    ///
    /// Booleans are true when their flag is present, with or without values.
    /// Every other field takes exactly one value; fields without a value keep
    /// their current contents unless they are required.
    pub fn bind_with_alias<R: Record>(
        &self,
        record: &mut R,
        alias: Option<&Alias>,
    ) -> Result<()> {
        debug!(record = record.type_name(), "binding from argument tokens");
        self.bind_record(record, alias)
    }

    fn bind_record(&self, record: &mut dyn Record, alias: Option<&Alias>) -> Result<()> {
        for (index, info) in record.fields().iter().enumerate() {
            let Some(slot) = record.field_mut(index) else {
                return Err(missing_slot(info));
            };
            let field = FieldKey::resolve(info, &self.attr, alias, "");
            trace!(field = info.name, key = %field.key, kind = slot.kind_name(), "resolved field");

            match slot {
                Slot::Record(nested) => self.bind_record(nested, alias)?,
                Slot::Unsupported(kind) => return Err(Error::TypeNotSupport(kind.to_string())),
                Slot::Bool(flag) => {
                    if self.presence(field.mode, &field.key, field.short_key()) {
                        *flag = true;
                    } else if field.mode.is_required() {
                        return Err(Error::NotFound);
                    }
                }
                slot => {
                    let values = self.lookup(field.mode, &field.key, field.short_key());
                    if let Some(raw) = single(values, field.mode)? {
                        assign_text(slot, raw)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Bind values from a `key -> string` getter into `record`.
///
/// An empty string counts as absent. Booleans must read `true` or `false`.
/// Nested records are bound from the same flat key namespace.
pub fn string_load<F, R>(
    mut getter: F,
    attr: &LoaderAttr,
    record: &mut R,
    alias: Option<&Alias>,
) -> Result<()>
where
    F: FnMut(&str) -> Option<String>,
    R: Record,
{
    debug!(record = record.type_name(), tag = attr.tag_name(), "binding from key getter");
    bind_strings(&mut getter, attr, record, alias)
}

fn bind_strings(
    getter: &mut dyn FnMut(&str) -> Option<String>,
    attr: &LoaderAttr,
    record: &mut dyn Record,
    alias: Option<&Alias>,
) -> Result<()> {
    for (index, info) in record.fields().iter().enumerate() {
        let Some(slot) = record.field_mut(index) else {
            return Err(missing_slot(info));
        };
        let field = FieldKey::resolve(info, attr, alias, "");
        trace!(field = info.name, key = %field.key, kind = slot.kind_name(), "resolved field");

        match slot {
            Slot::Record(nested) => bind_strings(getter, attr, nested, alias)?,
            Slot::Unsupported(kind) => return Err(Error::TypeNotSupport(kind.to_string())),
            slot => match getter(&field.key).filter(|raw| !raw.is_empty()) {
                Some(raw) => assign_text(slot, &raw)?,
                None if field.mode.is_required() => return Err(Error::NotFound),
                None => {}
            },
        }
    }
    Ok(())
}

/// A record listing a field it cannot hand out is not bindable
pub(crate) fn missing_slot(info: &FieldInfo) -> Error {
    Error::InvalidTarget(format!("no slot for field `{}`", info.name))
}
