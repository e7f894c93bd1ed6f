//! Flatbin: attribute-driven flat binary encoding for Rust values.
//!
//! Values serialize to a fixed deterministic layout derived from their type
//! shape plus optional per-field directives: skip a field, prefix it with a
//! presence flag, override its byte order, or declare it the length carrier
//! for a sibling sequence. Zero values encode to nothing at all.
//!
//! # Quick Start
//!
//! ```rust
//! use flatbin::BinEncode;
//!
//! #[derive(BinEncode)]
//! struct Header {
//!     #[bin(sizeof = "body")]
//!     count: u32,
//!     #[bin(optional)]
//!     version: u16,
//!     body: Vec<u8>,
//! }
//!
//! let header = Header { count: 2, version: 0, body: vec![0xaa, 0xbb] };
//! let bytes = flatbin::to_vec(&header).unwrap();
//! // count (u32 LE), absent version flag, body with no length prefix
//! assert_eq!(bytes, [2, 0, 0, 0, 0, 0xaa, 0xbb]);
//! ```
//!
//! Types may take full control of their own bytes by implementing
//! [`BinEncode`] by hand instead of deriving it; the dispatcher's presence
//! and zero-value handling still apply on the outside.

pub mod encode;
pub mod encoder;
pub mod error;
pub mod options;

mod impls;

pub use encode::{encode_value, to_vec, BinEncode};
pub use encoder::Encoder;
pub use error::{EncodeError, Result};
pub use options::{ByteOrder, EncodeOptions, SizeLinks};

// Re-export the derive macro when the feature is enabled
#[cfg(feature = "derive")]
pub use flatbin_derive::BinEncode;
