//! Per-field encoding options and the size-linkage table.

use std::collections::HashMap;

/// Byte order for fixed-width integer and float writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least-significant byte first. The crate-wide default.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::Little
    }
}

/// Ephemeral per-value encoding configuration.
///
/// A fresh `EncodeOptions` is built for every struct field and threaded as
/// an explicit argument through the recursive dispatch. It is never stored
/// on the [`Encoder`](crate::Encoder), so overlapping or re-entrant encode
/// calls cannot corrupt each other's state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Byte order for this value and everything it forwards options to.
    pub byte_order: ByteOrder,
    /// Prefix the value with a one-byte presence flag.
    pub optional: bool,
    /// For variable-length sequences: encode exactly this many elements
    /// and omit the length prefix. The count was (or will be) carried by a
    /// linked sibling field.
    pub size_override: Option<usize>,
}

impl EncodeOptions {
    /// Options for a top-level encode: little-endian, not optional, no
    /// size linkage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of `self` with the presence flag cleared. Used after the flag
    /// byte has been written so the value underneath encodes exactly once.
    pub(crate) fn consumed_optional(&self) -> Self {
        EncodeOptions {
            optional: false,
            ..*self
        }
    }
}

/// Field-name to element-count mapping, scoped to one struct-encoding pass.
///
/// A field annotated `sizeof = "g"` records an entry under `"g"` before
/// `g` itself is reached; when the walker gets to `g` it consults the table
/// under `g`'s own name. Entries for fields that are never reached stay
/// unused, which is not an error.
#[derive(Debug, Default)]
pub struct SizeLinks {
    entries: HashMap<&'static str, usize>,
}

impl SizeLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the element count a later field must use.
    pub fn record(&mut self, field: &'static str, count: usize) {
        tracing::trace!(field, count, "recording size link");
        self.entries.insert(field, count);
    }

    /// Look up the count recorded for `field`, if any. Entries persist for
    /// the whole pass; a repeated lookup sees the same value.
    pub fn get(&self, field: &str) -> Option<usize> {
        self.entries.get(field).copied()
    }
}
