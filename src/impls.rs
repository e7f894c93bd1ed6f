//! Built-in `BinEncode` implementations for primitives and containers.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use crate::encode::{encode_value, BinEncode};
use crate::encoder::Encoder;
use crate::error::{EncodeError, Result};
use crate::options::EncodeOptions;

impl BinEncode for bool {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, _opt: &EncodeOptions) -> Result<()> {
        enc.write_bool(*self)
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl BinEncode for u8 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, _opt: &EncodeOptions) -> Result<()> {
        enc.write_u8(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        Ok(*self as usize)
    }
}

impl BinEncode for i8 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, _opt: &EncodeOptions) -> Result<()> {
        enc.write_i8(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        signed_size(*self as i64)
    }
}

impl BinEncode for u16 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_u16(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        Ok(*self as usize)
    }
}

impl BinEncode for i16 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_i16(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        signed_size(*self as i64)
    }
}

impl BinEncode for u32 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_u32(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        Ok(*self as usize)
    }
}

impl BinEncode for i32 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_i32(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        signed_size(*self as i64)
    }
}

impl BinEncode for u64 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_u64(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        Ok(*self as usize)
    }
}

impl BinEncode for i64 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_i64(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn size_value(&self) -> Result<usize> {
        signed_size(*self)
    }
}

fn signed_size(v: i64) -> Result<usize> {
    if v < 0 {
        return Err(EncodeError::NegativeLength(v));
    }
    Ok(v as usize)
}

impl BinEncode for f32 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_f32(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl BinEncode for f64 {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        enc.write_f64(*self, opt.byte_order)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl BinEncode for str {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, _opt: &EncodeOptions) -> Result<()> {
        enc.write_str(self)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn size_value(&self) -> Result<usize> {
        Ok(self.len())
    }
}

impl BinEncode for String {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        self.as_str().encode(enc, opt)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn size_value(&self) -> Result<usize> {
        Ok(self.len())
    }
}

impl<T: BinEncode + ?Sized> BinEncode for &T {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        (**self).encode(enc, opt)
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn size_value(&self) -> Result<usize> {
        (**self).size_value()
    }
}

impl<T: BinEncode + ?Sized> BinEncode for Box<T> {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        // Dereference once and re-enter the dispatch with the same options.
        encode_value(&**self, enc, opt)
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn size_value(&self) -> Result<usize> {
        (**self).size_value()
    }
}

impl<T: BinEncode> BinEncode for Option<T> {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        match self {
            // An absent value is zero and was already elided upstream.
            None => Ok(()),
            Some(v) => encode_value(v, enc, opt),
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn size_value(&self) -> Result<usize> {
        match self {
            None => Ok(0),
            Some(v) => v.size_value(),
        }
    }
}

impl<T: BinEncode, const N: usize> BinEncode for [T; N] {
    /// Fixed-size array: element by element, no length prefix. The length
    /// is part of the type.
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        for elem in self {
            encode_value(elem, enc, opt)?;
        }
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.iter().all(BinEncode::is_zero)
    }

    fn size_value(&self) -> Result<usize> {
        Ok(N)
    }
}

impl<T: BinEncode> BinEncode for [T] {
    /// Variable-length sequence. With a size override the length prefix is
    /// omitted and exactly that many elements are written (the count
    /// travels in the linked field); otherwise the live length goes out as
    /// a uvarint followed by every element. Elements re-enter the dispatch
    /// with the same options forwarded.
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        match opt.size_override {
            Some(n) => {
                tracing::trace!(count = n, "sequence with linked length");
                for elem in self.iter().take(n) {
                    encode_value(elem, enc, opt)?;
                }
            }
            None => {
                enc.write_uvarint(self.len() as u64)?;
                for elem in self {
                    encode_value(elem, enc, opt)?;
                }
            }
        }
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn size_value(&self) -> Result<usize> {
        Ok(self.len())
    }
}

impl<T: BinEncode> BinEncode for Vec<T> {
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()> {
        self.as_slice().encode(enc, opt)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn size_value(&self) -> Result<usize> {
        Ok(self.len())
    }
}

impl<K: BinEncode, V: BinEncode> BinEncode for HashMap<K, V> {
    /// Entry count as uvarint, then each key and value through a fresh
    /// top-level dispatch with default options: the map field's own
    /// byte-order and optionality do not reach its entries. Iteration
    /// order is whatever the hasher yields, so byte output is not
    /// reproducible across runs.
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, _opt: &EncodeOptions) -> Result<()> {
        tracing::trace!(entries = self.len(), "encode map");
        enc.write_uvarint(self.len() as u64)?;
        for (key, value) in self {
            encode_value(key, enc, &EncodeOptions::new())?;
            encode_value(value, enc, &EncodeOptions::new())?;
        }
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K: BinEncode, V: BinEncode> BinEncode for BTreeMap<K, V> {
    /// Same layout as `HashMap`, but the ordered container makes the byte
    /// output deterministic for callers that need it.
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, _opt: &EncodeOptions) -> Result<()> {
        tracing::trace!(entries = self.len(), "encode map");
        enc.write_uvarint(self.len() as u64)?;
        for (key, value) in self {
            encode_value(key, enc, &EncodeOptions::new())?;
            encode_value(value, enc, &EncodeOptions::new())?;
        }
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}
