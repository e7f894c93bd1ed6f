//! Derive macro for flatbin binary encoding.
//!
//! This crate provides `#[derive(BinEncode)]`, which generates the
//! field-walking encoder for a struct: fields are encoded in declaration
//! order, each with options built from its `#[bin(...)]` directives.
//!
//! # Example
//!
//! ```rust,ignore
//! use flatbin::BinEncode;
//!
//! #[derive(BinEncode)]
//! struct Frame {
//!     #[bin(sizeof = "payload")]
//!     len: u16,
//!     #[bin(order = "big")]
//!     kind: u32,
//!     payload: Vec<u8>,
//! }
//! ```

mod attr;
mod encode;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro generating a `BinEncode` implementation.
///
/// # Attributes
///
/// All directives live under `#[bin(...)]` and combine freely:
///
/// - `#[bin(skip)]` - omit the field from the output entirely.
/// - `#[bin(optional)]` - prefix the field with a one-byte presence flag.
/// - `#[bin(order = "big")]` / `#[bin(order = "little")]` - byte order for
///   this field and the values it forwards options into.
/// - `#[bin(sizeof = "name")]` - this field's value supplies the element
///   count for the later sequence field `name`, which then encodes without
///   a length prefix.
///
/// Unrecognized directive names are ignored so that annotations written
/// for a newer revision of the format still compile here.
#[proc_macro_derive(BinEncode, attributes(bin))]
pub fn derive_bin_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    encode::derive_encode(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
