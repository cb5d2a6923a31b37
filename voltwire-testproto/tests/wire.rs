//! Byte-level wire conformance against hand-built streams.
use {
    voltwire::{wire, DecodeError, EncodeError, ErrorKind, WireRead, WireSize, WireWrite},
    voltwire_testproto::{
        editions::{ExplicitPresence, ImplicitPresence},
        sample::{Child, Frame, Header, NoUnknown, Sample, SampleShape, Scalars},
    },
};

fn varint(value: u64) -> Vec<u8> {
    let len = wire::varint_len(value);
    let mut buf = vec![0u8; len];
    wire::put_varint(&mut buf, len, value);
    buf
}

#[test]
fn empty_message_encodes_to_nothing() {
    let m = Scalars::default();
    assert_eq!(m.encoded_len(), 0);
    assert_eq!(m.encode(), Vec::<u8>::new());
}

#[test]
fn known_varint_byte_pattern() {
    let m = Scalars {
        uint64_field: 150,
        ..Default::default()
    };
    // Tag (6 << 3) | 0 = 48, then 150 as a two-byte varint.
    assert_eq!(m.encode(), vec![48, 150, 1]);
    assert_eq!(m.encoded_len(), 3);
}

#[test]
fn invalid_utf8_in_string_field_14_is_rejected() {
    // Tag (14 << 3) | 2 = 114, length 4, then an invalid UTF-8 sequence.
    let bad = [114u8, 4, 0xFF, 0xFE, 0xFD, 0xFC];
    let mut m = Scalars::default();
    let err = m.decode(&bad).unwrap_err();
    assert_eq!(err, DecodeError::InvalidUtf8);
    assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
}

#[test]
fn valid_ascii_in_string_field_14_is_accepted() {
    let good = [114u8, 3, b'a', b'b', b'c'];
    let mut m = Scalars::default();
    m.decode(&good).unwrap();
    assert_eq!(m.string_field, "abc");
}

#[test]
fn implicit_zero_is_indistinguishable_from_never_set() {
    let zeroed = ImplicitPresence {
        currency_code: String::new(),
        units: 0,
        scale: 0,
        is_active: false,
        rate: 0.0,
        amount: 0.0,
        unknown_fields: Vec::new(),
    };
    assert_eq!(zeroed.encode(), Vec::<u8>::new());

    let mut decoded = ImplicitPresence::default();
    decoded.decode(&[]).unwrap();
    assert_eq!(decoded, zeroed);
}

#[test]
fn explicit_zero_is_still_emitted_and_distinguishable() {
    let m = ExplicitPresence {
        units: Some(0),
        ..Default::default()
    };
    // Tag (2 << 3) | 0 = 16, then the zero payload.
    assert_eq!(m.encode(), vec![16, 0]);

    let mut decoded = ExplicitPresence::default();
    decoded.decode(&[16, 0]).unwrap();
    assert_eq!(decoded.units, Some(0));
    assert_eq!(decoded.scale, None);
}

#[test]
fn absent_and_explicitly_empty_bytes_encode_identically() {
    let absent = Scalars::default();
    let empty = Scalars {
        bytes_field: Vec::with_capacity(16),
        ..Default::default()
    };
    assert_eq!(absent.encode(), empty.encode());
}

#[test]
fn singular_last_occurrence_wins() {
    // uint64_field (tag 48) appears twice; the second value sticks.
    let mut m = Scalars::default();
    m.decode(&[48, 5, 48, 9]).unwrap();
    assert_eq!(m.uint64_field, 9);
}

#[test]
fn oneof_last_occurrence_wins_across_variants() {
    // circle (tag (11 << 3) | 1 = 89) then label (tag (12 << 3) | 2 = 98).
    let mut bytes = vec![89u8];
    bytes.extend_from_slice(&1.5f64.to_le_bytes());
    bytes.extend_from_slice(&[98, 2, b'h', b'i']);

    let mut m = Sample::default();
    m.decode(&bytes).unwrap();
    assert_eq!(m.shape, Some(SampleShape::Label("hi".into())));
}

#[test]
fn duplicate_map_key_takes_the_later_value() {
    // Two metadata entries (tag (9 << 3) | 2 = 74) sharing key "k".
    let stream = [
        74, 5, 10, 1, b'k', 16, 1, // {"k": 1}
        74, 5, 10, 1, b'k', 16, 2, // {"k": 2}
    ];
    let mut m = Sample::default();
    m.decode(&stream).unwrap();
    assert_eq!(m.metadata.len(), 1);
    assert_eq!(m.metadata["k"], 2);
}

#[test]
fn map_entry_roundtrips_bytewise() {
    let mut m = Sample::default();
    m.metadata.insert("k".into(), 2);
    let bytes = m.encode();
    assert_eq!(bytes, vec![74, 5, 10, 1, b'k', 16, 2]);
    assert_eq!(m.encoded_len(), bytes.len());
}

#[test]
fn group_frames_roundtrip_bytewise() {
    let frame = Frame {
        header: Some(Header {
            id: 1,
            ..Default::default()
        }),
        ..Default::default()
    };
    // start-group (1 << 3) | 3 = 11, id field, end-group (1 << 3) | 4 = 12.
    let bytes = frame.encode();
    assert_eq!(bytes, vec![11, 8, 1, 12]);

    let mut decoded = Frame::default();
    decoded.decode(&bytes).unwrap();
    assert_eq!(decoded, frame);
}

#[test]
fn unterminated_group_is_truncated() {
    let mut m = Frame::default();
    assert_eq!(m.decode(&[11, 8, 1]), Err(DecodeError::Truncated));
}

#[test]
fn stray_end_group_is_rejected() {
    let mut m = Frame::default();
    assert_eq!(m.decode(&[12]), Err(DecodeError::UnexpectedEndGroup));
}

#[test]
fn wire_type_mismatch_falls_to_unknown_not_error() {
    // double_field is fixed64; feed it as a varint instead.
    let stream = [8u8, 42];
    let mut m = Scalars::default();
    m.decode(&stream).unwrap();
    assert_eq!(m.double_field, 0.0);
    assert_eq!(m.unknown_fields, stream);
}

#[test]
fn unknown_fields_are_retained_and_reencoded_at_the_tail() {
    // Unknown varint field 99: tag (99 << 3) | 0.
    let mut stream = varint(99 << 3);
    stream.extend_from_slice(&[7]);

    let mut m = Scalars::default();
    m.decode(&stream).unwrap();
    assert_eq!(m.unknown_fields, stream);

    m.uint64_field = 1;
    let reencoded = m.encode();
    // Known fields first, retained bytes at the end.
    let mut expected = vec![48, 1];
    expected.extend_from_slice(&stream);
    assert_eq!(reencoded, expected);
    assert_eq!(m.encoded_len(), reencoded.len());
}

#[test]
fn unknown_group_is_skipped_whole_and_retained() {
    // Unknown group field 99 wrapping a varint field.
    let mut stream = varint((99 << 3) | 3);
    stream.extend_from_slice(&[8, 42]);
    stream.extend_from_slice(&varint((99 << 3) | 4));

    let mut m = Scalars::default();
    m.decode(&stream).unwrap();
    assert_eq!(m.unknown_fields, stream);
}

#[test]
fn ignore_unknown_messages_discard_silently() {
    let mut stream = varint(99 << 3);
    stream.extend_from_slice(&[7, 8, 3]);

    let mut m = NoUnknown::default();
    m.decode(&stream).unwrap();
    assert_eq!(m.id, 3);
    assert_eq!(m.encode(), vec![8, 3]);
}

#[test]
fn truncated_varint_is_rejected() {
    let mut m = Scalars::default();
    assert_eq!(m.decode(&[48, 0x80]), Err(DecodeError::Truncated));
}

#[test]
fn overlong_varint_is_rejected() {
    let stream = [0x80u8; 11];
    let mut m = Scalars::default();
    assert_eq!(m.decode(&stream), Err(DecodeError::IntOverflow));
}

#[test]
fn declared_span_past_end_of_input_is_rejected() {
    // string_field claims 10 bytes but only one follows.
    let mut m = Scalars::default();
    assert_eq!(m.decode(&[114, 10, b'a']), Err(DecodeError::InvalidLength));
}

#[test]
fn nesting_past_the_recursion_limit_is_rejected() {
    // A Tree whose `left` chain nests beyond the decoder's depth bound.
    let mut bytes = vec![8u8, 1];
    for _ in 0..=wire::RECURSION_LIMIT {
        let mut outer = vec![18u8];
        outer.extend_from_slice(&varint(bytes.len() as u64));
        outer.extend_from_slice(&bytes);
        bytes = outer;
    }
    let mut m = voltwire_testproto::sample::Tree::default();
    assert_eq!(m.decode(&bytes), Err(DecodeError::RecursionLimit));
}

#[test]
fn packed_and_unpacked_forms_both_decode() {
    // values (field 3): packed run [1, 2, 3] then one unpacked element 4.
    let stream = [26, 3, 1, 2, 3, 24, 4];
    let mut m = Sample::default();
    m.decode(&stream).unwrap();
    assert_eq!(m.values, vec![1, 2, 3, 4]);
}

#[test]
fn encode_to_reports_undersized_buffers() {
    let m = Scalars {
        uint64_field: 150,
        ..Default::default()
    };
    let mut small = [0u8; 2];
    assert_eq!(
        m.encode_to(&mut small),
        Err(EncodeError::BufferTooSmall {
            needed: 3,
            available: 2,
        })
    );

    let mut big = [0u8; 8];
    assert_eq!(m.encode_to(&mut big), Ok(3));
    assert_eq!(&big[..3], &[48, 150, 1]);
}

#[test]
fn nested_message_roundtrips_through_exactly_sized_buffer() {
    let mut m = Sample {
        id: 7,
        name: "order".into(),
        ..Default::default()
    };
    m.values = vec![1, 128, 300_000];
    m.nested = Some(Child {
        id: 9,
        payload: b"abc".to_vec(),
        tags: vec!["x".into(), "y".into()],
        ..Default::default()
    });
    m.shape = Some(SampleShape::Circle(2.5));

    let bytes = m.encode();
    assert_eq!(bytes.len(), m.encoded_len());

    let mut decoded = Sample::default();
    decoded.decode(&bytes).unwrap();
    assert_eq!(decoded, m);
}
