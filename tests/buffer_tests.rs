use octet_buffer::{
    ByteBuffer, ByteConstruct, ByteOrder, ByteView, Error, FixedBuffer, HashProvider, PadLeft,
    WritableBuffer, swap_endianness,
};

// ── Construction ──────────────────────────────────────────────────────────

#[test]
fn test_from_base16_variants() {
    let expected = [0x0a, 0xbc];
    for input in ["0abc", "0ABC", "0x0abc", "abc", "0xABC"] {
        let buf = ByteBuffer::from_base16(input).unwrap();
        assert_eq!(buf.as_bytes(), expected, "input {:?}", input);
    }
    assert!(ByteBuffer::from_base16("").unwrap().is_empty());
}

#[test]
fn test_from_base16_rejects_garbage() {
    for input in ["0x", "xyz", "12 34", "0x0x12"] {
        assert!(
            matches!(
                ByteBuffer::from_base16(input),
                Err(Error::InvalidEncoding { encoding: "base16", .. })
            ),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_from_base64() {
    let buf = ByteBuffer::from_base64("AQID").unwrap();
    assert_eq!(buf.as_bytes(), [1, 2, 3]);
    assert!(ByteBuffer::from_base64("").unwrap().is_empty());
    assert!(ByteBuffer::from_base64("AQI").is_err());
    assert!(ByteBuffer::from_base64("A?ID").is_err());
}

#[test]
fn test_from_binary() {
    let buf = ByteBuffer::from_binary(&["1", "00000010", "11111111"]).unwrap();
    assert_eq!(buf.as_bytes(), [1, 2, 255]);

    let empty: [&str; 0] = [];
    assert!(ByteBuffer::from_binary(&empty).is_err());
    assert!(ByteBuffer::from_binary(&["101010101"]).is_err());
    assert!(ByteBuffer::from_binary(&["12"]).is_err());
    assert!(ByteBuffer::from_binary(&[""]).is_err());
}

#[test]
fn test_from_byte_array() {
    let buf = ByteBuffer::from_byte_array(&[0i32, 127, 255]).unwrap();
    assert_eq!(buf.as_bytes(), [0, 127, 255]);

    assert_eq!(
        ByteBuffer::from_byte_array(&[1i32, 256]),
        Err(Error::InvalidByteValue {
            index: 1,
            value: 256
        })
    );
    assert_eq!(
        ByteBuffer::from_byte_array(&[-1i64]),
        Err(Error::InvalidByteValue {
            index: 0,
            value: -1
        })
    );
}

// ── Encodings ─────────────────────────────────────────────────────────────

#[test]
fn test_encodings_of_one_buffer() {
    let buf = ByteBuffer::from(vec![0x01, 0xAB, 0x00]);
    assert_eq!(buf.to_base16(false), "01ab00");
    assert_eq!(buf.to_base16(true), "0x01ab00");
    assert_eq!(buf.to_base64(), "AasA");
    assert_eq!(buf.to_binary(false), ["1", "10101011", "0"]);
    assert_eq!(buf.to_binary(true), ["00000001", "10101011", "00000000"]);
    assert_eq!(buf.byte_array(), vec![0x01, 0xAB, 0x00]);
}

#[test]
fn test_empty_buffer_encodings() {
    let buf = ByteBuffer::new();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.to_base16(false), "");
    assert_eq!(buf.to_base16(true), "0x");
    assert_eq!(buf.to_base64(), "");
    assert!(buf.to_binary(true).is_empty());
}

#[test]
fn test_to_big_integer_is_big_endian() {
    let buf = ByteBuffer::from_base16("0x0100").unwrap();
    assert_eq!(buf.to_big_integer(), 256);
    assert_eq!(ByteBuffer::new().to_big_integer(), 0);
}

// ── Copy / switch / transform ─────────────────────────────────────────────

#[test]
fn test_copy_clamps_to_bounds() {
    let buf = ByteBuffer::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(buf.copy(None, None), buf);
    assert_eq!(buf.copy(Some(1), Some(3)).as_bytes(), [2, 3, 4]);
    assert_eq!(buf.copy(Some(3), Some(100)).as_bytes(), [4, 5]);
    assert!(buf.copy(Some(10), None).is_empty());
}

#[test]
fn test_switch_endianness_leaves_source_alone() {
    let buf = ByteBuffer::from(vec![1, 2, 3]);
    let switched = buf.switch_endianness();
    assert_eq!(switched.as_bytes(), [3, 2, 1]);
    assert_eq!(buf.as_bytes(), [1, 2, 3]);
    assert_eq!(switched.switch_endianness(), buf);
    assert_eq!(swap_endianness(&[0xAA, 0xBB]), [0xBB, 0xAA]);
}

#[test]
fn test_transform() {
    let buf = ByteBuffer::from(vec![1, 2, 3]);
    let doubled = buf.transform(|b| b.iter().map(|x| x * 2).collect());
    assert_eq!(doubled.as_bytes(), [2, 4, 6]);
    let dropped = buf.transform(|b| b[1..].to_vec());
    assert_eq!(dropped.as_bytes(), [2, 3]);
}

#[test]
fn test_equals_across_buffer_types() {
    let a = ByteBuffer::from(vec![9, 8]);
    let b = WritableBuffer::from(vec![9, 8]);
    let c = FixedBuffer::<2>::from([9, 8]);
    assert!(a.equals(&b));
    assert!(b.equals(&c));
    assert!(!a.equals(&ByteBuffer::from(vec![9, 8, 7])));
}

#[test]
fn test_equals_all() {
    let a = ByteBuffer::from(vec![1, 2]);
    let same = ByteBuffer::from(vec![1, 2]);
    let longer = ByteBuffer::from(vec![1, 2, 3]);
    let other = ByteBuffer::from(vec![1, 3]);

    assert!(a.equals_all(&[&same, &a.clone()]));
    assert!(!a.equals_all(&[&same, &longer]));
    assert!(!a.equals_all(&[&other, &same]));
    assert!(a.equals_all::<ByteBuffer>(&[]));

    let w = WritableBuffer::from(vec![1, 2]);
    let f = FixedBuffer::<2>::from([1, 2]);
    assert!(a.equals_all(&[w.as_bytes(), f.as_bytes()]));
    assert!(!a.equals_all(&[w.as_bytes(), longer.as_bytes()]));
}

// ── WritableBuffer ────────────────────────────────────────────────────────

#[test]
fn test_append_and_prepend() {
    let mut buf = WritableBuffer::new();
    buf.append([3u8, 4]).prepend([1u8, 2]).append(ByteBuffer::from(vec![5]));
    assert_eq!(buf.as_bytes(), [1, 2, 3, 4, 5]);

    buf.append([0u8; 0]).prepend(Vec::<u8>::new());
    assert_eq!(buf.len(), 5);
}

#[test]
fn test_append_fixed_width_integers() {
    let mut buf = WritableBuffer::new();
    buf.append_u8(0xFF)
        .unwrap()
        .append_u16(0x1234, ByteOrder::LittleEndian)
        .unwrap()
        .append_u32(0xDEADBEEF, ByteOrder::LittleEndian)
        .unwrap()
        .append_u32(0xDEADBEEF, ByteOrder::BigEndian)
        .unwrap();
    assert_eq!(
        buf.as_bytes(),
        [0xFF, 0x34, 0x12, 0xEF, 0xBE, 0xAD, 0xDE, 0xDE, 0xAD, 0xBE, 0xEF]
    );
}

#[test]
fn test_append_u64_native_and_decimal() {
    let mut buf = WritableBuffer::new();
    buf.append_u64(1u32, ByteOrder::BigEndian)
        .unwrap()
        .append_u64("18446744073709551615", ByteOrder::LittleEndian)
        .unwrap();
    assert_eq!(buf.to_base16(false), "0000000000000001ffffffffffffffff");
}

#[test]
fn test_failed_append_leaves_buffer_unchanged() {
    let mut buf = WritableBuffer::from(vec![1]);
    assert_eq!(
        buf.append_u16(70_000, ByteOrder::BigEndian).unwrap_err(),
        Error::IntegerOverflow {
            bits: 16,
            max: 65535
        }
    );
    assert_eq!(
        buf.append_u8(-1).unwrap_err(),
        Error::IntegerUnderflow { bits: 8 }
    );
    assert!(buf.append_u64("not a number", ByteOrder::BigEndian).is_err());
    assert_eq!(buf.as_bytes(), [1]);
}

#[test]
fn test_flush_and_freeze() {
    let mut buf = WritableBuffer::from_base16("0102").unwrap();
    buf.flush();
    assert!(buf.is_empty());

    buf.append([7u8]);
    let frozen: ByteBuffer = buf.freeze();
    assert_eq!(frozen.as_bytes(), [7]);
}

#[test]
fn test_writable_copy_is_independent() {
    let mut buf = WritableBuffer::from(vec![1, 2, 3]);
    let copy = buf.copy(Some(1), None);
    buf.append([4u8]);
    assert_eq!(copy.as_bytes(), [2, 3]);
    assert_eq!(buf.switch_endianness().as_bytes(), [4, 3, 2, 1]);
}

// ── FixedBuffer ───────────────────────────────────────────────────────────

#[test]
fn test_fixed_exact_length() {
    let buf = FixedBuffer::<4>::from_base16("0x01020304").unwrap();
    assert_eq!(buf.as_array(), &[1, 2, 3, 4]);
    assert_eq!(FixedBuffer::<4>::LEN, 4);

    assert_eq!(
        FixedBuffer::<4>::from_bytes(&[1, 2]),
        Err(Error::FixedLengthMismatch {
            expected: 4,
            actual: 2
        })
    );
}

#[test]
fn test_fixed_pad_left() {
    let buf = FixedBuffer::<4, PadLeft>::from_base16("0x0102").unwrap();
    assert_eq!(buf.as_bytes(), [0, 0, 1, 2]);

    // longer input is never truncated
    assert_eq!(
        FixedBuffer::<4, PadLeft>::from_bytes(&[1, 2, 3, 4, 5]),
        Err(Error::FixedLengthMismatch {
            expected: 4,
            actual: 5
        })
    );
}

#[test]
fn test_fixed_in_place_edits() {
    let mut buf = FixedBuffer::<3>::zeroed();
    buf.as_mut_bytes()[1] = 0xAA;
    assert_eq!(buf.as_bytes(), [0, 0xAA, 0]);

    buf.set([1u8, 2, 3]).unwrap();
    assert_eq!(buf.switch_endianness().as_bytes(), [3, 2, 1]);

    buf.zeroize();
    assert_eq!(buf, FixedBuffer::<3>::default());
}

#[test]
fn test_fixed_transform_rechecks_length() {
    let buf = FixedBuffer::<2>::from([1, 2]);
    assert_eq!(
        buf.transform(|b| b.iter().map(|x| x + 1).collect())
            .unwrap()
            .as_bytes(),
        [2, 3]
    );
    assert!(buf.transform(|b| b[..1].to_vec()).is_err());

    let padded = FixedBuffer::<2, PadLeft>::from([1, 2]);
    assert_eq!(
        padded.transform(|b| b[1..].to_vec()).unwrap().as_bytes(),
        [0, 2]
    );
}

#[test]
fn test_fixed_copy_and_freeze() {
    let buf = FixedBuffer::<4>::from([1, 2, 3, 4]);
    assert_eq!(buf.copy(Some(2), None).as_bytes(), [3, 4]);
    assert_eq!(buf.freeze().as_bytes(), [1, 2, 3, 4]);
}

// ── Digest ────────────────────────────────────────────────────────────────

struct XorFold;

impl HashProvider for XorFold {
    type Error = String;

    fn digest(&self, algorithm: &str, input: &[u8]) -> Result<Vec<u8>, String> {
        match algorithm {
            "xor8" => Ok(vec![input.iter().fold(0, |acc, b| acc ^ b)]),
            other => Err(format!("unsupported algorithm {other}")),
        }
    }
}

#[test]
fn test_digest_through_provider() {
    let buf = ByteBuffer::from(vec![0b1100, 0b1010]);
    assert_eq!(buf.digest(&XorFold, "xor8").unwrap().as_bytes(), [0b0110]);
    assert_eq!(buf.digest_raw(&XorFold, "xor8").unwrap(), vec![0b0110]);
    assert_eq!(
        buf.digest(&XorFold, "sha256").unwrap_err(),
        "unsupported algorithm sha256"
    );

    let fixed = FixedBuffer::<2>::from([1, 1]);
    assert_eq!(fixed.digest(&&XorFold, "xor8").unwrap().as_bytes(), [0]);
}
