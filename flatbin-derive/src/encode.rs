//! Code generation for the BinEncode derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, Ident, Result};

use crate::attr::{FieldAttrs, Order};

/// Generate the BinEncode implementation for a struct.
///
/// Fields are walked in declaration order, exactly once each: a `skip`
/// field emits nothing, a `sizeof` producer records its count before its
/// own value is written, and every encoded field gets a fresh options
/// value built from its own directives.
pub fn derive_encode(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "BinEncode only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "BinEncode only supports structs",
            ))
        }
    };

    let mut parsed: Vec<(Ident, FieldAttrs)> = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::from_attrs(&field.attrs)?;
        parsed.push((field.ident.clone().unwrap(), attrs));
    }

    // The link table is only materialized when a sizeof directive exists;
    // directive-free structs compile to straight-line field writes.
    let has_links = parsed.iter().any(|(_, a)| !a.skip && a.sizeof.is_some());

    let links_decl = if has_links {
        quote! { let mut links = ::flatbin::SizeLinks::new(); }
    } else {
        TokenStream::new()
    };

    let mut steps = Vec::new();
    for (ident, attrs) in &parsed {
        if attrs.skip {
            continue;
        }

        // Producers record before anything is written for this field, so a
        // producer placed ahead of its consumer populates the table in
        // time. A link aimed at an earlier or unknown field name is simply
        // never consulted.
        if let Some(target) = &attrs.sizeof {
            steps.push(quote! {
                links.record(#target, ::flatbin::BinEncode::size_value(&self.#ident)?);
            });
        }

        let byte_order = match attrs.order {
            Some(Order::Big) => quote! { ::flatbin::ByteOrder::Big },
            _ => quote! { ::flatbin::ByteOrder::Little },
        };
        let optional = attrs.optional;
        let name_str = ident.to_string();
        let size_override = if has_links {
            quote! { links.get(#name_str) }
        } else {
            quote! { ::std::option::Option::None }
        };

        steps.push(quote! {
            {
                let opt = ::flatbin::EncodeOptions {
                    byte_order: #byte_order,
                    optional: #optional,
                    size_override: #size_override,
                };
                ::flatbin::encode_value(&self.#ident, _enc, &opt)?;
            }
        });
    }

    let zero_checks: Vec<_> = parsed
        .iter()
        .filter(|(_, a)| !a.skip)
        .map(|(ident, _)| quote! { ::flatbin::BinEncode::is_zero(&self.#ident) })
        .collect();
    let is_zero_body = quote! { true #(&& #zero_checks)* };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::flatbin::BinEncode for #name #ty_generics #where_clause {
            fn encode<__W: ::std::io::Write>(
                &self,
                _enc: &mut ::flatbin::Encoder<__W>,
                _opt: &::flatbin::EncodeOptions,
            ) -> ::flatbin::Result<()> {
                #links_decl
                #(#steps)*
                ::std::result::Result::Ok(())
            }

            fn is_zero(&self) -> bool {
                #is_zero_body
            }
        }
    })
}
