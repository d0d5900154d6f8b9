//! Procedural macros for lazyflag
//!
//! `#[derive(Record)]` generates the field table and slot accessors the
//! binders walk, plus a `Field` impl so the type can nest inside other
//! records.

use proc_macro::TokenStream;

mod record;

/// Derive `lazyflag::Record` for a struct with named fields.
///
/// # Attributes
///
/// - `#[bind(<tag> = "...")]` - Lookup key under a tag name such as `json`,
///   `yaml` or `env`; any identifier other than the reserved ones below is a
///   tag name
/// - `#[bind(short = "n")]` - Also search the `-n` short-flag table
/// - `#[bind(required)]` - Absence is an error for flag and getter binding
/// - `#[bind(skip)]` - Leave the field out of binding entirely
///
/// # Example
///
/// ```ignore
/// #[derive(Record, Default)]
/// pub struct Opts {
///     #[bind(json = "name_info", yaml = "info")]
///     pub n_info: String,
///     #[bind(short = "p", required)]
///     pub port: u16,
///     #[bind(skip)]
///     pub cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(bind))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
