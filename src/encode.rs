//! The value dispatcher: presence flags, zero elision, shape hand-off.

use std::io::Write;

use crate::encoder::Encoder;
use crate::error::{EncodeError, Result};
use crate::options::EncodeOptions;

/// Trait for values encodable to the flat binary format.
///
/// Built-in impls cover the primitive and container shapes; structs get an
/// implementation from `#[derive(BinEncode)]`. A hand-written impl takes
/// full control of the value's byte representation (the custom-marshal
/// path): the dispatcher still runs the presence-flag and zero-value checks
/// first, then everything the impl writes is the encoding.
///
/// # Example
///
/// ```rust
/// use flatbin::BinEncode;
///
/// #[derive(BinEncode)]
/// struct Frame {
///     #[bin(sizeof = "payload")]
///     len: u16,
///     #[bin(order = "big")]
///     kind: u32,
///     payload: Vec<u8>,
/// }
///
/// let frame = Frame { len: 3, kind: 7, payload: vec![1, 2, 3] };
/// let bytes = flatbin::to_vec(&frame).unwrap();
/// assert_eq!(bytes, [3, 0, 0, 0, 0, 7, 1, 2, 3]);
/// ```
pub trait BinEncode {
    /// Encode this value's shape into `enc`. Called by [`encode_value`]
    /// after the presence and zero checks have run; implementations must
    /// forward `opt` into any values they recurse into.
    fn encode<W: Write>(&self, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()>;

    /// Whether this value is its type's zero value (0, empty, absent).
    /// Zero values are elided by the dispatcher. Defaults to `false` so
    /// hand-written impls are never elided unless they opt in.
    fn is_zero(&self) -> bool {
        false
    }

    /// The element count this value supplies when it is a `sizeof`
    /// producer: integers yield their numeric value, sequences their live
    /// length, smart pointers defer to what they point at.
    fn size_value(&self) -> Result<usize> {
        Err(EncodeError::UnsupportedType(std::any::type_name::<Self>()))
    }
}

/// Encode one value: the dispatcher entry every field, element, key and
/// value passes through.
///
/// Check order, each step short-circuiting the rest:
///
/// 1. `opt.optional`: write a one-byte presence flag. A zero value writes
///    `false` and nothing else; otherwise `true` is written and the value
///    continues with the flag cleared, so exactly one flag precedes the
///    normal encoding.
/// 2. A zero value encodes to nothing, optional or not. "No bytes written"
///    therefore does not imply optionality.
/// 3. The value's own [`BinEncode::encode`] runs: built-in shape dispatch,
///    derived struct walk, or custom marshal.
///
/// The first error anywhere in the traversal aborts the whole call; bytes
/// already in the sink stay written. Callers wanting all-or-nothing output
/// should buffer through [`to_vec`].
pub fn encode_value<T, W>(value: &T, enc: &mut Encoder<W>, opt: &EncodeOptions) -> Result<()>
where
    T: BinEncode + ?Sized,
    W: Write,
{
    tracing::trace!(ty = std::any::type_name::<T>(), ?opt, "encode value");

    if opt.optional {
        if value.is_zero() {
            tracing::trace!(ty = std::any::type_name::<T>(), "eliding zero optional value");
            return enc.write_bool(false);
        }
        enc.write_bool(true)?;
        return value.encode(enc, &opt.consumed_optional());
    }

    if value.is_zero() {
        return Ok(());
    }

    value.encode(enc, opt)
}

/// Encode `value` into a fresh buffer with default options.
///
/// The buffer is only returned on full success, which gives callers the
/// atomic all-or-nothing behavior the streaming path cannot.
pub fn to_vec<T: BinEncode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut enc = Encoder::new(Vec::new());
    enc.encode(value)?;
    Ok(enc.into_inner())
}
