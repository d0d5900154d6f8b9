//! Implementation of #[derive(Record)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Parsed `#[bind(...)]` options for one field
#[derive(Default)]
struct FieldAttrs {
    tags: Vec<(String, String)>,
    short: Option<String>,
    required: bool,
    skip: bool,
}

pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record only works on structs",
            ))
        }
    };

    let mut infos = Vec::new();
    let mut members = Vec::new();

    for field in fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        // Named fields always carry an ident
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let field_name = ident.unraw().to_string();
        let tags = attrs.tags.iter().map(|(tag, value)| quote! { (#tag, #value) });
        let short = match &attrs.short {
            Some(short) => quote! { ::std::option::Option::Some(#short) },
            None => quote! { ::std::option::Option::None },
        };
        let required = attrs.required;

        infos.push(quote! {
            ::lazyflag::FieldInfo {
                name: #field_name,
                tags: &[#(#tags),*],
                short: #short,
                required: #required,
            }
        });
        members.push(ident.clone());
    }

    let indices = 0..members.len();

    Ok(quote! {
        impl #impl_generics ::lazyflag::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> &'static [::lazyflag::FieldInfo] {
                const FIELDS: &[::lazyflag::FieldInfo] = &[#(#infos),*];
                FIELDS
            }

            fn field_mut(&mut self, index: usize) -> ::std::option::Option<::lazyflag::Slot<'_>> {
                match index {
                    #(#indices => ::std::option::Option::Some(::lazyflag::Field::slot(&mut self.#members)),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl #impl_generics ::lazyflag::Field for #name #ty_generics #where_clause {
            fn slot(&mut self) -> ::lazyflag::Slot<'_> {
                ::lazyflag::Slot::Record(self)
            }
        }
    })
}

fn parse_field_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("bind") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("required") {
                parsed.required = true;
            } else if meta.path.is_ident("short") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.short = Some(value.value());
            } else if let Some(tag) = meta.path.get_ident() {
                let value: LitStr = meta.value()?.parse()?;
                parsed.tags.push((tag.unraw().to_string(), value.value()));
            } else {
                return Err(meta.error("expected `skip`, `required`, `short = \"..\"` or `<tag> = \"..\"`"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}
