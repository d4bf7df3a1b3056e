//! End-to-end packing scenarios.

use std::ffi::{c_int, c_short};
use std::mem::size_of;

use struct_pack::{FormatError, PackError, Schema, Value, calcsize, pack, unpack};

#[test]
fn network_order_bytes() {
    let packed = pack("!BB", &[0x12u8.into(), 0x34u8.into()]).unwrap();
    assert_eq!(packed, vec![0x12, 0x34]);
}

#[test]
fn big_endian_mixed_widths() {
    let packed = pack(
        ">BHILQ",
        &[
            Value::from(254u8),
            Value::from(65534u16),
            Value::from(4294967294u32),
            Value::from(4294967294u32),
            Value::from(18446744073709551614u64),
        ],
    )
    .unwrap();

    assert_eq!(
        packed,
        vec![
            0xFE, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF,
            0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
        ]
    );
}

#[test]
fn little_endian_mixed_widths() {
    let packed = pack("<hIq", &[Value::Int(-2), Value::UInt(1), Value::Int(-1)]).unwrap();
    assert_eq!(
        packed,
        vec![0xFE, 0xFF, 1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn native_order_matches_host() {
    let packed = pack("=I", &[Value::UInt(0x0102_0304)]).unwrap();
    assert_eq!(packed, 0x0102_0304u32.to_ne_bytes().to_vec());
}

#[test]
fn calcsize_both_alignment_branches() {
    assert_eq!(calcsize("=3H4B10s").unwrap(), 3 * 2 + 4 + 10);
    assert_eq!(calcsize(">3H4B10s").unwrap(), 20);
    // a 10s field has unit size 1 and is never padded
    assert_eq!(
        calcsize("@3H4B10s").unwrap(),
        3 * size_of::<c_short>() + 4 + 10
    );
    // an aligned wide field after the bytes does pick up padding
    let int = size_of::<c_int>();
    let unaligned = 3 * size_of::<c_short>() + 4 + 10;
    let padded = unaligned.div_ceil(int) * int + int;
    assert_eq!(calcsize("@3H4B10si").unwrap(), padded);
    assert_eq!(calcsize("=3H4B10si").unwrap(), 24);
}

#[test]
fn aligned_pack_zero_fills_padding() {
    let int = size_of::<c_int>();
    let packed = pack("@Bi", &[Value::UInt(0xAB), Value::Int(1)]).unwrap();
    assert_eq!(packed.len(), 2 * int);
    assert_eq!(packed[0], 0xAB);
    assert!(packed[1..int].iter().all(|&b| b == 0));
    assert_eq!(&packed[int..], &1i32.to_ne_bytes()[..int]);
}

#[test]
fn unregistered_character_rejected() {
    assert!(matches!(
        pack("Z", &[]),
        Err(PackError::Format(FormatError::InvalidFormatChar { ch: 'Z', position: 0 }))
    ));
    assert_eq!(
        Schema::compile("Z").unwrap_err(),
        FormatError::InvalidFormatChar { ch: 'Z', position: 0 }
    );
}

#[test]
fn grammar_char_without_registry_entry() {
    assert!(matches!(
        calcsize("!P"),
        Err(PackError::Format(FormatError::UnsupportedType('P')))
    ));
}

#[test]
fn too_few_arguments_fails_before_output() {
    let err = pack("!BB", &[0x12u8.into()]).unwrap_err();
    assert!(matches!(
        err,
        PackError::ItemCountMismatch {
            expected: 2,
            found: 1
        }
    ));
    assert_eq!(err.to_string(), "format expects 2 arguments, got 1");
}

#[test]
fn short_string_is_right_padded() {
    let packed = pack("!5s", &["ab".into()]).unwrap();
    assert_eq!(packed, vec![b'a', b'b', 0, 0, 0]);
}

#[test]
fn long_string_is_truncated() {
    let packed = pack("!3s", &["abcdef".into()]).unwrap();
    assert_eq!(packed, b"abc".to_vec());
}

#[test]
fn repeated_string_is_one_argument() {
    let schema = Schema::compile("!2s3B").unwrap();
    assert_eq!(schema.arg_count(), 4);
    let packed = schema
        .pack(&["hi".into(), 1u8.into(), 2u8.into(), 3u8.into()])
        .unwrap();
    assert_eq!(packed, vec![b'h', b'i', 1, 2, 3]);
}

#[test]
fn zero_length_string() {
    let schema = Schema::compile("!0sB").unwrap();
    assert_eq!(schema.size(), 1);
    assert_eq!(schema.arg_count(), 2);
    assert_eq!(schema.pack(&["ignored".into(), 9u8.into()]).unwrap(), vec![9]);
    assert_eq!(
        schema.unpack(&[9]).unwrap(),
        vec![Value::Bytes(Vec::new()), Value::UInt(9)]
    );
}

#[test]
fn bool_char_and_floats() {
    let packed = pack(
        ">?cfd",
        &[true.into(), 'x'.into(), 1.5f32.into(), (-0.25f64).into()],
    )
    .unwrap();
    let mut expected = vec![1, b'x'];
    expected.extend_from_slice(&1.5f32.to_be_bytes());
    expected.extend_from_slice(&(-0.25f64).to_be_bytes());
    assert_eq!(packed, expected);

    assert_eq!(
        unpack(">?cfd", &packed).unwrap(),
        vec![
            Value::Bool(true),
            Value::Char(b'x'),
            Value::Float(1.5),
            Value::Float(-0.25)
        ]
    );
}

#[cfg(feature = "half_support")]
#[test]
fn half_precision() {
    let packed = pack("<e", &[Value::Float(1.0)]).unwrap();
    assert_eq!(packed, vec![0x00, 0x3C]);
    assert_eq!(unpack("<e", &packed).unwrap(), vec![Value::Float(1.0)]);
    assert!(matches!(
        pack("<e", &[Value::Float(1e6)]),
        Err(PackError::ValueOutOfRange { index: 0, type_char: 'e' })
    ));
}

#[test]
fn wrong_argument_type() {
    let err = pack("!H", &["12".into()]).unwrap_err();
    assert!(matches!(
        err,
        PackError::TypeMismatch {
            index: 0,
            type_char: 'H',
            found: "bytes"
        }
    ));
}

#[test]
fn char_wider_than_a_byte_is_rejected() {
    let err = pack("!c", &['€'.into()]).unwrap_err();
    assert!(matches!(
        err,
        PackError::TypeMismatch {
            index: 0,
            type_char: 'c',
            found: "bytes"
        }
    ));
    assert_eq!(pack("!c", &['\u{E9}'.into()]).unwrap(), vec![0xE9]);
}

#[test]
fn schema_shared_across_threads() {
    let schema = Schema::compile(">IH").unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u32)
            .map(|n| {
                let schema = &schema;
                scope.spawn(move || schema.pack(&[Value::UInt(n as u64), Value::UInt(7)]))
            })
            .collect();
        for (n, handle) in handles.into_iter().enumerate() {
            let bytes = handle.join().unwrap().unwrap();
            assert_eq!(bytes, vec![0, 0, 0, n as u8, 0, 7]);
        }
    });
}
