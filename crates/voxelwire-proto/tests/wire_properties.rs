//! Property-based tests for the wire primitives: varint, packed position,
//! and the entity-metadata tagged stream.

use proptest::prelude::*;
use voxelwire_proto::{
    cursor::ByteCursor,
    metadata::{MetadataEntry, MetadataValue},
    position::BlockPos,
    slot::Slot,
    tag::TagTree,
    version::ProtocolVersion,
};

fn arbitrary_block_pos() -> impl Strategy<Value = BlockPos> {
    (-(1i32 << 25)..(1i32 << 25), -(1i32 << 11)..(1i32 << 11), -(1i32 << 25)..(1i32 << 25))
        .prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

fn arbitrary_slot() -> impl Strategy<Value = Slot> {
    prop_oneof![
        Just(Slot::Absent),
        (any::<i16>().prop_filter("present slots carry a non-negative id", |id| *id >= 0), any::<i8>(), any::<i16>(), prop::collection::vec(any::<u8>(), 0..8))
            .prop_map(|(item_id, count, metadata, tag_bytes)| Slot::Present {
                item_id,
                count,
                metadata,
                tag: TagTree::from_raw(tag_bytes),
            }),
    ]
}

fn arbitrary_metadata_value() -> impl Strategy<Value = MetadataValue> {
    prop_oneof![
        any::<i8>().prop_map(MetadataValue::Byte),
        any::<i16>().prop_map(MetadataValue::Short),
        any::<i32>().prop_map(MetadataValue::Int),
        any::<f32>().prop_map(MetadataValue::Float),
        "[a-zA-Z0-9 ]{0,32}".prop_map(MetadataValue::Str),
        arbitrary_slot().prop_map(MetadataValue::Slot),
        (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(x, y, z)| MetadataValue::Position { x, y, z }),
        (any::<f32>(), any::<f32>(), any::<f32>()).prop_map(|(x, y, z)| MetadataValue::Rotation { x, y, z }),
    ]
}

fn arbitrary_metadata_entries() -> impl Strategy<Value = Vec<MetadataEntry>> {
    prop::collection::vec((0u8..0x1F, arbitrary_metadata_value()), 0..8)
        .prop_map(|entries| entries.into_iter().map(|(index, value)| MetadataEntry { index, value }).collect())
}

proptest! {
    #[test]
    fn varint_round_trips_every_i32(value in any::<i32>()) {
        let mut cursor = ByteCursor::new(ProtocolVersion::V765);
        cursor.pack_varint(value).unwrap();
        prop_assert!(cursor.length() <= 5);

        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, cursor.into_bytes());
        prop_assert_eq!(reader.unpack_varint().unwrap(), value);
        prop_assert!(reader.is_exhausted());
    }

    #[test]
    fn packed_position_round_trips_within_its_bit_width(pos in arbitrary_block_pos()) {
        let mut cursor = ByteCursor::new(ProtocolVersion::V765);
        cursor.pack_position(pos).unwrap();
        prop_assert_eq!(cursor.length(), 8);

        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, cursor.into_bytes());
        prop_assert_eq!(reader.unpack_position().unwrap(), pos);
    }

    #[test]
    fn entity_metadata_stream_round_trips(entries in arbitrary_metadata_entries()) {
        let mut cursor = ByteCursor::new(ProtocolVersion::V765);
        cursor.pack_entity_metadata(&entries).unwrap();

        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, cursor.into_bytes());
        let decoded = reader.unpack_entity_metadata().unwrap();
        prop_assert_eq!(decoded, entries);
        prop_assert!(reader.is_exhausted());
    }

    #[test]
    fn cursor_position_never_exceeds_length(writes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut cursor = ByteCursor::new(ProtocolVersion::V765);
        cursor.append_bytes(&writes).unwrap();
        prop_assert!(cursor.position() <= cursor.length());
        prop_assert!(cursor.length() <= cursor.capacity());

        let mut consumed = 0usize;
        while consumed < writes.len() {
            let n = (writes.len() - consumed).min(3);
            cursor.read_bytes(n).unwrap();
            consumed += n;
            prop_assert!(cursor.position() <= cursor.length());
            prop_assert!(cursor.length() <= cursor.capacity());
        }
    }
}
