//! Tag name and translator configuration

use crate::translate::camel_to_snake;
use std::fmt;
use std::sync::Arc;

/// Default tag read from field metadata
pub const DEFAULT_TAG_NAME: &str = "json";

/// Identifier to lookup key translator
pub type Translate = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Which tag to read and how to translate untagged field names
#[derive(Clone)]
pub struct LoaderAttr {
    tag_name: String,
    translate: Translate,
}

impl LoaderAttr {
    /// Build an attribute pair; an empty tag name or a missing translator
    /// falls back to the default
    pub fn new(tag_name: &str, translate: Option<Translate>) -> Self {
        let mut attr = Self::default();
        attr.set(tag_name, translate);
        attr
    }

    /// Override the tag name when `tag_name` is non-empty and the translator
    /// when one is given
    pub fn set(&mut self, tag_name: &str, translate: Option<Translate>) {
        if !tag_name.is_empty() {
            self.tag_name = tag_name.to_string();
        }
        if let Some(translate) = translate {
            self.translate = translate;
        }
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        if !tag_name.is_empty() {
            self.tag_name = tag_name;
        }
        self
    }

    pub fn with_translate<F>(mut self, translate: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.translate = Arc::new(translate);
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn translate(&self, ident: &str) -> String {
        (self.translate)(ident)
    }
}

impl Default for LoaderAttr {
    fn default() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            translate: Arc::new(camel_to_snake),
        }
    }
}

impl fmt::Debug for LoaderAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderAttr")
            .field("tag_name", &self.tag_name)
            .finish_non_exhaustive()
    }
}
