//! The byte sink: fixed-width, varint and length-prefixed primitive writes.

use std::io::Write;

use crate::encode::{encode_value, BinEncode};
use crate::error::Result;
use crate::options::{ByteOrder, EncodeOptions};

/// Binary encoder owning a single output sink.
///
/// One encoder serves one sink; recursive traversal state (the current
/// [`EncodeOptions`](crate::EncodeOptions)) is threaded through call
/// arguments, never stored here, so the only thing an `Encoder` holds is
/// the writer itself.
pub struct Encoder<W: Write> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    /// Create an encoder writing to `writer`.
    pub fn new(writer: W) -> Self {
        Encoder { writer }
    }

    /// Encode a value with fresh default options. This is the top-level
    /// entry into the dispatch and may be called repeatedly to concatenate
    /// values into the same sink.
    pub fn encode<T: BinEncode + ?Sized>(&mut self, value: &T) -> Result<()> {
        encode_value(value, self, &EncodeOptions::new())
    }

    /// Consume the encoder and return the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Append raw bytes with no prefix.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }

    #[inline]
    pub fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_raw(&[v])
    }

    #[inline]
    pub fn write_i8(&mut self, v: i8) -> Result<()> {
        self.write_raw(&[v as u8])
    }

    #[inline]
    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_u8(if v { 1 } else { 0 })
    }

    #[inline]
    pub fn write_u16(&mut self, v: u16, order: ByteOrder) -> Result<()> {
        match order {
            ByteOrder::Little => self.write_raw(&v.to_le_bytes()),
            ByteOrder::Big => self.write_raw(&v.to_be_bytes()),
        }
    }

    #[inline]
    pub fn write_i16(&mut self, v: i16, order: ByteOrder) -> Result<()> {
        self.write_u16(v as u16, order)
    }

    #[inline]
    pub fn write_u32(&mut self, v: u32, order: ByteOrder) -> Result<()> {
        match order {
            ByteOrder::Little => self.write_raw(&v.to_le_bytes()),
            ByteOrder::Big => self.write_raw(&v.to_be_bytes()),
        }
    }

    #[inline]
    pub fn write_i32(&mut self, v: i32, order: ByteOrder) -> Result<()> {
        self.write_u32(v as u32, order)
    }

    #[inline]
    pub fn write_u64(&mut self, v: u64, order: ByteOrder) -> Result<()> {
        match order {
            ByteOrder::Little => self.write_raw(&v.to_le_bytes()),
            ByteOrder::Big => self.write_raw(&v.to_be_bytes()),
        }
    }

    #[inline]
    pub fn write_i64(&mut self, v: i64, order: ByteOrder) -> Result<()> {
        self.write_u64(v as u64, order)
    }

    #[inline]
    pub fn write_f32(&mut self, v: f32, order: ByteOrder) -> Result<()> {
        self.write_u32(v.to_bits(), order)
    }

    #[inline]
    pub fn write_f64(&mut self, v: f64, order: ByteOrder) -> Result<()> {
        self.write_u64(v.to_bits(), order)
    }

    /// Write an unsigned variable-length integer: 7 bits per byte, least
    /// significant group first, high bit set on every byte but the last.
    pub fn write_uvarint(&mut self, mut v: u64) -> Result<()> {
        loop {
            let mut byte = (v & 0x7f) as u8;
            v >>= 7;
            if v != 0 {
                byte |= 0x80;
            }
            self.write_u8(byte)?;
            if v == 0 {
                return Ok(());
            }
        }
    }

    /// Write a signed variable-length integer: zigzag-mapped to unsigned,
    /// then uvarint, so small magnitudes of either sign stay short.
    pub fn write_varint(&mut self, v: i64) -> Result<()> {
        let mut u = (v as u64) << 1;
        if v < 0 {
            u = !u;
        }
        self.write_uvarint(u)
    }

    /// Write a length-prefixed byte string: `uvarint(len)` then the bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_uvarint(bytes.len() as u64)?;
        self.write_raw(bytes)
    }

    /// Write a length-prefixed UTF-8 string.
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }
}
