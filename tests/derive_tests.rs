//! Tests for the `#[derive(BinEncode)]` struct walker.

use std::collections::HashMap;

use flatbin::{to_vec, BinEncode, EncodeError, Encoder};
use pretty_assertions::assert_eq;

#[derive(BinEncode)]
struct Counted {
    #[bin(sizeof = "items")]
    count: u32,
    items: Vec<u8>,
}

#[test]
fn test_sizeof_link_replaces_length_prefix() {
    let msg = Counted {
        count: 3,
        items: vec![1, 2, 3],
    };
    // Four-byte little-endian count, then the items with no varint.
    assert_eq!(to_vec(&msg).unwrap(), vec![3, 0, 0, 0, 1, 2, 3]);
}

#[derive(BinEncode)]
struct Named {
    name: String,
}

#[test]
fn test_string_field_layout() {
    let msg = Named { name: "ab".into() };
    assert_eq!(to_vec(&msg).unwrap(), vec![0x02, b'a', b'b']);
}

#[derive(BinEncode)]
struct WithOptional {
    #[bin(optional)]
    version: u16,
    tail: u8,
}

#[test]
fn test_optional_zero_is_a_single_false_byte() {
    let msg = WithOptional {
        version: 0,
        tail: 9,
    };
    assert_eq!(to_vec(&msg).unwrap(), vec![0, 9]);
}

#[test]
fn test_optional_nonzero_is_flag_then_plain_encoding() {
    let msg = WithOptional {
        version: 0x0102,
        tail: 9,
    };
    assert_eq!(to_vec(&msg).unwrap(), vec![1, 0x02, 0x01, 9]);
}

#[derive(BinEncode)]
struct OptionalSeq {
    #[bin(optional)]
    items: Vec<u8>,
}

#[test]
fn test_optional_sequence_writes_exactly_one_flag() {
    let msg = OptionalSeq {
        items: vec![5, 6],
    };
    // One presence byte, then the normal varint-prefixed encoding; the
    // flag does not repeat per element.
    assert_eq!(to_vec(&msg).unwrap(), vec![1, 0x02, 5, 6]);

    let empty = OptionalSeq { items: vec![] };
    assert_eq!(to_vec(&empty).unwrap(), vec![0]);
}

#[derive(BinEncode)]
struct OptionalField {
    #[bin(optional)]
    id: Option<u32>,
}

#[test]
fn test_optional_directive_on_option_type() {
    assert_eq!(to_vec(&OptionalField { id: None }).unwrap(), vec![0]);
    assert_eq!(
        to_vec(&OptionalField { id: Some(9) }).unwrap(),
        vec![1, 9, 0, 0, 0]
    );
}

fn nop() {}

#[derive(BinEncode)]
struct WithSkip {
    lead: u8,
    // Function values have no encoding rule; skip keeps them out of the
    // walker entirely.
    #[bin(skip)]
    callback: fn(),
    tail: u8,
}

#[test]
fn test_skipped_field_writes_nothing() {
    let msg = WithSkip {
        lead: 1,
        callback: nop,
        tail: 2,
    };
    assert_eq!(to_vec(&msg).unwrap(), vec![1, 2]);
}

#[derive(BinEncode)]
struct Mixed {
    #[bin(order = "big")]
    kind: u32,
    #[bin(order = "little")]
    seq: u16,
    plain: u16,
}

#[test]
fn test_byte_order_directive_is_per_field() {
    let msg = Mixed {
        kind: 7,
        seq: 0x0102,
        plain: 0x0304,
    };
    assert_eq!(
        to_vec(&msg).unwrap(),
        vec![0, 0, 0, 7, 0x02, 0x01, 0x04, 0x03]
    );
}

#[derive(BinEncode)]
struct BigSeq {
    #[bin(order = "big")]
    values: Vec<u16>,
}

#[test]
fn test_byte_order_directive_reaches_elements() {
    let msg = BigSeq {
        values: vec![0x0102, 0x0304],
    };
    assert_eq!(to_vec(&msg).unwrap(), vec![0x02, 0x01, 0x02, 0x03, 0x04]);
}

#[derive(BinEncode)]
struct Inner {
    a: u8,
    b: u16,
}

#[derive(BinEncode)]
struct Outer {
    head: u8,
    inner: Inner,
    tail: u8,
}

#[test]
fn test_nested_struct_fields_flatten_in_order() {
    let msg = Outer {
        head: 1,
        inner: Inner { a: 2, b: 0x0304 },
        tail: 5,
    };
    assert_eq!(to_vec(&msg).unwrap(), vec![1, 2, 0x04, 0x03, 5]);
}

#[test]
fn test_all_zero_nested_struct_is_elided() {
    let msg = Outer {
        head: 1,
        inner: Inner { a: 0, b: 0 },
        tail: 5,
    };
    assert_eq!(to_vec(&msg).unwrap(), vec![1, 5]);
}

#[derive(BinEncode)]
struct Reversed {
    items: Vec<u8>,
    #[bin(sizeof = "items")]
    count: u32,
}

#[test]
fn test_link_recorded_after_consumer_never_applies() {
    let msg = Reversed {
        items: vec![1, 2],
        count: 2,
    };
    // The consumer ran first, so it keeps its own varint prefix and the
    // recorded entry stays unused.
    assert_eq!(to_vec(&msg).unwrap(), vec![0x02, 1, 2, 2, 0, 0, 0]);
}

#[derive(BinEncode)]
struct BadProducer {
    #[bin(sizeof = "xs")]
    n: i32,
    xs: Vec<u8>,
}

#[test]
fn test_negative_sizeof_producer_fails() {
    let msg = BadProducer {
        n: -1,
        xs: vec![1],
    };
    let err = to_vec(&msg).unwrap_err();
    assert!(matches!(err, EncodeError::NegativeLength(-1)));
}

#[derive(BinEncode)]
struct UnsizableProducer {
    #[bin(sizeof = "xs")]
    flag: bool,
    xs: Vec<u8>,
}

#[test]
fn test_sizeof_on_unsupported_type_fails() {
    let msg = UnsizableProducer {
        flag: true,
        xs: vec![1],
    };
    let err = to_vec(&msg).unwrap_err();
    assert!(matches!(err, EncodeError::UnsupportedType("bool")));
}

#[test]
fn test_failed_field_keeps_already_written_siblings() {
    #[derive(BinEncode)]
    struct Partial {
        lead: u8,
        #[bin(sizeof = "xs")]
        n: i64,
        xs: Vec<u8>,
    }

    let msg = Partial {
        lead: 7,
        n: -5,
        xs: vec![1],
    };
    let mut enc = Encoder::new(Vec::new());
    assert!(enc.encode(&msg).is_err());
    // No rollback: the first field's byte is already in the sink.
    assert_eq!(enc.into_inner(), vec![7]);
}

#[derive(BinEncode)]
struct FutureProofed {
    #[bin(tag = 3, packed)]
    value: u8,
}

#[test]
fn test_unrecognized_directives_are_ignored() {
    assert_eq!(to_vec(&FutureProofed { value: 9 }).unwrap(), vec![9]);
}

#[derive(BinEncode)]
struct Scores {
    scores: HashMap<String, u32>,
}

#[test]
fn test_map_field_shape() {
    let mut scores = HashMap::new();
    scores.insert("ab".to_string(), 1u32);
    scores.insert("cd".to_string(), 2u32);

    let bytes = to_vec(&Scores { scores }).unwrap();
    // Entry order is unordered by contract, so assert shape only: count
    // prefix plus two (string, u32) entries.
    assert_eq!(bytes[0], 0x02);
    assert_eq!(bytes.len(), 1 + 2 * (1 + 2 + 4));
}

#[test]
fn test_same_value_encodes_identically_twice() {
    let msg = Counted {
        count: 3,
        items: vec![1, 2, 3],
    };
    assert_eq!(to_vec(&msg).unwrap(), to_vec(&msg).unwrap());
}

#[derive(BinEncode)]
struct Empty {}

#[test]
fn test_empty_struct_encodes_to_nothing() {
    assert_eq!(to_vec(&Empty {}).unwrap(), Vec::<u8>::new());
}

#[derive(BinEncode)]
struct Wrapper {
    inner: Option<Box<Inner>>,
}

#[test]
fn test_boxed_optional_struct() {
    assert_eq!(to_vec(&Wrapper { inner: None }).unwrap(), Vec::<u8>::new());

    let msg = Wrapper {
        inner: Some(Box::new(Inner { a: 1, b: 2 })),
    };
    assert_eq!(to_vec(&msg).unwrap(), vec![1, 2, 0]);
}
