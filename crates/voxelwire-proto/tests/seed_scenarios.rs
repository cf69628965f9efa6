//! Concrete scenario tests: fixed inputs with known expected wire bytes.

use voxelwire_proto::{
    codec,
    cursor::ByteCursor,
    errors::ProtocolError,
    messages::{
        handshake::Handshake,
        play::{PlayChatMessage, PlayKeepAlive},
        LogicalId, Message,
    },
    metadata::{MetadataEntry, MetadataValue},
    position::BlockPos,
    version::ProtocolVersion,
};

#[test]
fn handshake_to_status_encodes_to_the_documented_bytes() {
    let message = Message::Handshake(Handshake {
        protocol_version: 765,
        server_addr: "localhost".to_string(),
        server_port: 25565,
        next_state: 1,
    });

    let mut cursor = ByteCursor::new(ProtocolVersion::V765);
    codec::encode(&mut cursor, &message).unwrap();

    let mut expected = vec![0xFD, 0x05];
    expected.extend_from_slice(&[0x09, b'l', b'o', b'c', b'a', b'l', b'h', b'o', b's', b't']);
    expected.extend_from_slice(&25565u16.to_be_bytes());
    expected.push(0x01);
    assert_eq!(cursor.as_bytes(), expected.as_slice());

    let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, cursor.into_bytes());
    let decoded = codec::decode(&mut reader, LogicalId::Handshake).unwrap();
    assert_eq!(decoded, message);
    assert!(reader.is_exhausted());
}

#[test]
fn varint_boundary_values_encode_exactly() {
    let cases: &[(i32, &[u8])] = &[
        (0, &[0x00]),
        (127, &[0x7F]),
        (128, &[0x80, 0x01]),
        (2_147_483_647, &[0xFF, 0xFF, 0xFF, 0xFF, 0x07]),
        (-1, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
    ];
    for &(value, expected) in cases {
        let mut cursor = ByteCursor::new(ProtocolVersion::V765);
        cursor.pack_varint(value).unwrap();
        assert_eq!(cursor.as_bytes(), expected, "value {value}");

        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, cursor.into_bytes());
        assert_eq!(reader.unpack_varint().unwrap(), value);
    }
}

#[test]
fn packed_position_all_negative_one_is_all_ones() {
    let mut cursor = ByteCursor::new(ProtocolVersion::V765);
    cursor.pack_position(BlockPos::new(-1, -1, -1)).unwrap();
    assert_eq!(cursor.as_bytes(), &0xFFFF_FFFF_FFFF_FFFFu64.to_be_bytes());

    let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, cursor.into_bytes());
    assert_eq!(reader.unpack_position().unwrap(), BlockPos::new(-1, -1, -1));
}

#[test]
fn keep_alive_cross_version_tokens_encode_independently() {
    let modern = Message::PlayKeepAlive(PlayKeepAlive {
        keep_alive_id: 0,
        keep_alive_id_long: 0x0123_4567_89AB_CDEF,
    });
    let mut modern_cursor = ByteCursor::new(ProtocolVersion::V765);
    codec::encode(&mut modern_cursor, &modern).unwrap();
    assert_eq!(modern_cursor.as_bytes(), &0x0123_4567_89AB_CDEFu64.to_be_bytes());

    let legacy = Message::PlayKeepAlive(PlayKeepAlive { keep_alive_id: 300, keep_alive_id_long: 0 });
    let mut legacy_cursor = ByteCursor::new(ProtocolVersion::V47);
    codec::encode(&mut legacy_cursor, &legacy).unwrap();
    assert_eq!(legacy_cursor.as_bytes(), &[0xAC, 0x02]);
}

#[test]
fn entity_metadata_byte_and_string_entries_round_trip_in_order() {
    let entries = vec![
        MetadataEntry { index: 3, value: MetadataValue::Byte(7) },
        MetadataEntry { index: 5, value: MetadataValue::Str("hi".to_string()) },
    ];
    let mut cursor = ByteCursor::new(ProtocolVersion::V765);
    cursor.pack_entity_metadata(&entries).unwrap();
    assert_eq!(cursor.as_bytes().last(), Some(&0x7F));

    let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, cursor.into_bytes());
    let decoded = reader.unpack_entity_metadata().unwrap();
    assert_eq!(decoded, entries);
    assert!(reader.is_exhausted());
}

#[test]
fn chat_message_with_declared_length_past_the_buffer_end_is_buffer_overflow() {
    let mut cursor = ByteCursor::new(ProtocolVersion::V47);
    cursor.pack_varint(100).unwrap();
    cursor.append_bytes(b"short").unwrap();
    cursor.pack_i8(0).unwrap();

    let mut reader = ByteCursor::from_bytes(ProtocolVersion::V47, cursor.into_bytes());
    let result = codec::decode(&mut reader, LogicalId::PlayChatMessage);
    assert!(matches!(result, Err(ProtocolError::BufferOverflow)));
}

#[test]
fn chat_message_with_well_formed_length_round_trips() {
    let message = Message::PlayChatMessage(PlayChatMessage { position: 0, message: "hi".to_string() });
    let mut cursor = ByteCursor::new(ProtocolVersion::V47);
    codec::encode(&mut cursor, &message).unwrap();

    let mut reader = ByteCursor::from_bytes(ProtocolVersion::V47, cursor.into_bytes());
    let decoded = codec::decode(&mut reader, LogicalId::PlayChatMessage).unwrap();
    assert_eq!(decoded, message);
    assert!(reader.is_exhausted());
}
