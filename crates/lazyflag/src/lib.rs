//! lazyflag - Bind struct fields from flags, key getters and decoded documents
//!
//! Three sources feed the same name-resolution rules:
//! - [`Loader`] tokenizes `--key value` / `-k value` arguments
//! - [`string_load`] reads from any `key -> string` getter (environment,
//!   key-value stores)
//! - [`object_bind`] walks a decoded `serde_json` object
//!
//! A field's key is its tag under the configured tag name (default `json`),
//! else its translated identifier; an [`Alias`] table can then redirect it.
//!
//! ```ignore
//! use lazyflag::{Loader, Record};
//!
//! #[derive(Record, Default)]
//! struct Opts {
//!     name: String,
//!     #[bind(json = "listen", short = "p")]
//!     port: u16,
//!     verbose: bool,
//! }
//!
//! let loader = Loader::from_args(std::env::args().skip(1))?;
//! let mut opts = Opts::default();
//! loader.bind(&mut opts)?;
//! ```

pub mod alias;
pub mod attr;
pub mod bind;
pub mod coerce;
pub mod error;
pub mod loader;
pub mod mode;
pub mod object;
pub mod reflect;
pub mod translate;

pub use alias::{resolve_alias, Alias};
pub use attr::{LoaderAttr, Translate, DEFAULT_TAG_NAME};
pub use bind::{string_load, FieldKey};
pub use error::{BoxError, Error, Result};
pub use loader::{Loader, TokenTable};
pub use mode::Mode;
pub use object::{object_bind, value_bind};
pub use reflect::{Field, FieldInfo, FloatSlot, IntSlot, Record, Slot, TextDecode, UintSlot};
pub use translate::{camel_to_snake, upper_snake};

#[cfg(feature = "derive")]
pub use lazyflag_derive::Record;
