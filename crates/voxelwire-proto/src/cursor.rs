//! The byte cursor: a grow-on-write, bounds-checked-read mutable byte store.
//!
//! A cursor is simultaneously in "write mode" (bytes appended at `length`,
//! capacity doubling as needed) and "read mode" (bytes consumed from
//! `position`); both counters live on the same structure because encoders
//! build a frame by writing into a fresh cursor while decoders consume one
//! built by the transport collaborator.

use crate::{
    errors::{ProtocolError, Result},
    metadata::{MetadataEntry, MetadataValue, TERMINATOR},
    position::BlockPos,
    slot::Slot,
    tag::TagTree,
    version::ProtocolVersion,
};

const VARINT_SEGMENT_BITS: u32 = 0x7F;
const VARINT_CONTINUE_BIT: u8 = 0x80;
const VARINT_MAX_BYTES: u32 = 5;

/// Default maximum string length, in UTF-16 code units, matching
/// `INT16_MAX`.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 32767;

/// A cursor-backed byte store with typed reads and writes.
///
/// Invariant: `0 <= position <= length <= capacity` always holds; `capacity`
/// never shrinks.
#[derive(Debug, Clone)]
pub struct ByteCursor {
    data: Vec<u8>,
    position: usize,
    version: ProtocolVersion,
}

impl ByteCursor {
    /// An empty cursor in both read and write mode.
    #[must_use]
    pub fn new(version: ProtocolVersion) -> Self {
        Self { data: Vec::new(), position: 0, version }
    }

    /// An empty cursor with `n` bytes of capacity pre-allocated.
    #[must_use]
    pub fn new_with_size(version: ProtocolVersion, n: usize) -> Self {
        Self { data: Vec::with_capacity(n), position: 0, version }
    }

    /// Wraps already-received bytes for reading. Position starts at 0.
    #[must_use]
    pub fn from_bytes(version: ProtocolVersion, data: Vec<u8>) -> Self {
        Self { data, position: 0, version }
    }

    /// The pinned protocol version for this cursor.
    #[must_use]
    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Next read position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of valid bytes written.
    #[must_use]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// Allocated capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Whether every written byte has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.data.len()
    }

    /// Consumes the cursor and returns its written bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Borrows the written bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn grow_to_fit(&mut self, additional: usize) {
        let required = self.data.len() + additional;
        if required <= self.data.capacity() {
            return;
        }
        let mut new_capacity = self.data.capacity().max(1);
        while new_capacity < required {
            new_capacity *= 2;
        }
        self.data.reserve_exact(new_capacity - self.data.len());
    }

    /// Appends `src` at `length`, growing capacity by doubling until it
    /// fits.
    pub fn append_bytes(&mut self, src: &[u8]) -> Result<()> {
        self.grow_to_fit(src.len());
        self.data.extend_from_slice(src);
        Ok(())
    }

    /// Returns a copy of the next `n` bytes and advances `position`.
    ///
    /// # Errors
    ///
    /// `ProtocolError::BufferOverflow` if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        if self.position + n > self.data.len() {
            return Err(ProtocolError::BufferOverflow);
        }
        let slice = self.data[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(slice)
    }

    // -- fixed-width primitives, all big-endian on the wire --

    /// Writes a boolean as a single byte; non-zero on read is `true`.
    pub fn pack_bool(&mut self, value: bool) -> Result<()> {
        self.append_bytes(&[u8::from(value)])
    }

    /// Reads a single-byte boolean; non-zero is `true`.
    pub fn unpack_bool(&mut self) -> Result<bool> {
        Ok(self.read_bytes(1)?[0] != 0)
    }

    /// Writes an unsigned byte.
    pub fn pack_u8(&mut self, value: u8) -> Result<()> {
        self.append_bytes(&[value])
    }

    /// Reads an unsigned byte.
    pub fn unpack_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Writes a signed byte.
    pub fn pack_i8(&mut self, value: i8) -> Result<()> {
        self.pack_u8(value as u8)
    }

    /// Reads a signed byte.
    pub fn unpack_i8(&mut self) -> Result<i8> {
        Ok(self.unpack_u8()? as i8)
    }

    /// Writes a big-endian unsigned 16-bit integer.
    pub fn pack_u16(&mut self, value: u16) -> Result<()> {
        self.append_bytes(&value.to_be_bytes())
    }

    /// Reads a big-endian unsigned 16-bit integer.
    pub fn unpack_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Writes a big-endian signed 16-bit integer.
    pub fn pack_i16(&mut self, value: i16) -> Result<()> {
        self.pack_u16(value as u16)
    }

    /// Reads a big-endian signed 16-bit integer.
    pub fn unpack_i16(&mut self) -> Result<i16> {
        Ok(self.unpack_u16()? as i16)
    }

    /// Writes a big-endian unsigned 32-bit integer.
    pub fn pack_u32(&mut self, value: u32) -> Result<()> {
        self.append_bytes(&value.to_be_bytes())
    }

    /// Reads a big-endian unsigned 32-bit integer.
    pub fn unpack_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Writes a big-endian signed 32-bit integer.
    pub fn pack_i32(&mut self, value: i32) -> Result<()> {
        self.pack_u32(value as u32)
    }

    /// Reads a big-endian signed 32-bit integer.
    pub fn unpack_i32(&mut self) -> Result<i32> {
        Ok(self.unpack_u32()? as i32)
    }

    /// Writes a big-endian unsigned 64-bit integer.
    pub fn pack_u64(&mut self, value: u64) -> Result<()> {
        self.append_bytes(&value.to_be_bytes())
    }

    /// Reads a big-endian unsigned 64-bit integer.
    pub fn unpack_u64(&mut self) -> Result<u64> {
        let bytes = self.read_bytes(8)?;
        Ok(u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Writes a big-endian signed 64-bit integer.
    pub fn pack_i64(&mut self, value: i64) -> Result<()> {
        self.pack_u64(value as u64)
    }

    /// Reads a big-endian signed 64-bit integer.
    pub fn unpack_i64(&mut self) -> Result<i64> {
        Ok(self.unpack_u64()? as i64)
    }

    /// Writes a big-endian single-precision float.
    pub fn pack_f32(&mut self, value: f32) -> Result<()> {
        self.pack_u32(value.to_bits())
    }

    /// Reads a big-endian single-precision float.
    pub fn unpack_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.unpack_u32()?))
    }

    /// Writes a big-endian double-precision float.
    pub fn pack_f64(&mut self, value: f64) -> Result<()> {
        self.pack_u64(value.to_bits())
    }

    /// Reads a big-endian double-precision float.
    pub fn unpack_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.unpack_u64()?))
    }

    // -- variable-length integer --

    /// Writes `value` as a standard 7-bit-group variable-length integer,
    /// treating it as its unsigned two's-complement bit pattern. At most 5
    /// bytes.
    pub fn pack_varint(&mut self, value: i32) -> Result<()> {
        let mut number = value as u32;
        for _ in 0..VARINT_MAX_BYTES {
            let mut byte = (number & VARINT_SEGMENT_BITS) as u8;
            number >>= 7;
            if number != 0 {
                byte |= VARINT_CONTINUE_BIT;
            }
            self.pack_u8(byte)?;
            if number == 0 {
                break;
            }
        }
        Ok(())
    }

    /// Reads a variable-length integer, terminating at the first byte whose
    /// continuation bit is clear.
    ///
    /// # Errors
    ///
    /// `ProtocolError::BufferOverflow` if the cursor runs out of bytes
    /// before a terminating byte is found.
    pub fn unpack_varint(&mut self) -> Result<i32> {
        let mut number: u32 = 0;
        for i in 0..VARINT_MAX_BYTES {
            let byte = self.unpack_u8()?;
            number |= (u32::from(byte) & VARINT_SEGMENT_BITS) << (7 * i);
            if byte & VARINT_CONTINUE_BIT == 0 {
                break;
            }
        }
        Ok(number as i32)
    }

    // -- strings and byte arrays --

    /// Writes `value` length-prefixed by a variable-length int of its UTF-8
    /// byte length.
    ///
    /// # Errors
    ///
    /// `ProtocolError::StringLength` if the UTF-8 byte length exceeds
    /// `max_bytes`.
    pub fn pack_string_with_limit(&mut self, value: &str, max_bytes: usize) -> Result<()> {
        if value.len() > max_bytes {
            return Err(ProtocolError::StringLength);
        }
        self.pack_varint(value.len() as i32)?;
        self.append_bytes(value.as_bytes())
    }

    /// Writes `value` with the default string length limit.
    pub fn pack_string(&mut self, value: &str) -> Result<()> {
        self.pack_string_with_limit(value, DEFAULT_MAX_STRING_LENGTH)
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// # Errors
    ///
    /// `ProtocolError::InvalidArguments` if the decoded length is negative
    /// or exceeds `max_code_units * 4`. `ProtocolError::InvalidString` if
    /// the bytes are not valid UTF-8. `ProtocolError::BufferOverflow` if
    /// fewer bytes remain than the declared length.
    pub fn unpack_string_with_limit(&mut self, max_code_units: usize) -> Result<String> {
        let declared_len = self.unpack_varint()?;
        if declared_len < 0 || declared_len as usize > max_code_units * 4 {
            return Err(ProtocolError::InvalidArguments);
        }
        let bytes = self.read_bytes(declared_len as usize)?;
        String::from_utf8(bytes).map_err(|_| ProtocolError::InvalidString)
    }

    /// Reads a length-prefixed UTF-8 string with the default limit.
    pub fn unpack_string(&mut self) -> Result<String> {
        self.unpack_string_with_limit(DEFAULT_MAX_STRING_LENGTH)
    }

    /// Writes a variable-length-int-prefixed raw byte array.
    pub fn pack_byte_array(&mut self, bytes: &[u8]) -> Result<()> {
        self.pack_varint(bytes.len() as i32)?;
        self.append_bytes(bytes)
    }

    /// Reads a variable-length-int-prefixed raw byte array.
    pub fn unpack_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.unpack_varint()?;
        if len < 0 {
            return Err(ProtocolError::InvalidLength);
        }
        self.read_bytes(len as usize)
    }

    // -- packed position --

    /// Writes the packed coordinate triple as one big-endian 64-bit
    /// integer.
    pub fn pack_position(&mut self, pos: BlockPos) -> Result<()> {
        self.pack_u64(pos.encode())
    }

    /// Reads the packed coordinate triple, sign-extending each component.
    pub fn unpack_position(&mut self) -> Result<BlockPos> {
        Ok(BlockPos::decode(self.unpack_u64()?))
    }

    // -- universally-unique id --

    /// Writes a 128-bit id as two big-endian 64-bit halves (modern wire
    /// form).
    pub fn pack_uuid(&mut self, id: u128) -> Result<()> {
        self.pack_u64((id >> 64) as u64)?;
        self.pack_u64(id as u64)
    }

    /// Reads a 128-bit id from two big-endian 64-bit halves.
    pub fn unpack_uuid(&mut self) -> Result<u128> {
        let high = u128::from(self.unpack_u64()?);
        let low = u128::from(self.unpack_u64()?);
        Ok((high << 64) | low)
    }

    // -- item slot --

    /// Writes a slot: `-1` for absent, otherwise `(id, count, metadata,
    /// tag)`.
    pub fn pack_slot(&mut self, slot: &Slot) -> Result<()> {
        match slot {
            Slot::Absent => self.pack_i16(-1),
            Slot::Present { item_id, count, metadata, tag } => {
                self.pack_i16(*item_id)?;
                self.pack_i8(*count)?;
                self.pack_i16(*metadata)?;
                self.pack_tag_tree(tag)
            },
        }
    }

    /// Reads a slot, returning [`Slot::Absent`] when the item id is
    /// negative.
    pub fn unpack_slot(&mut self) -> Result<Slot> {
        let item_id = self.unpack_i16()?;
        if item_id < 0 {
            return Ok(Slot::Absent);
        }
        let count = self.unpack_i8()?;
        let metadata = self.unpack_i16()?;
        let tag = self.unpack_tag_tree()?;
        Ok(Slot::Present { item_id, count, metadata, tag })
    }

    // -- binary tag tree (opaque) --

    /// Delegates to the binary-tag collaborator. This crate does not
    /// implement the tag grammar, so the tree is treated as an opaque,
    /// length-prefixed byte span: a tag tree can appear anywhere in a
    /// record, not only as its final field, which matters once it is
    /// nested inside a present [`Slot`] inside an entity-metadata stream.
    pub fn pack_tag_tree(&mut self, tree: &TagTree) -> Result<()> {
        self.pack_byte_array(tree.raw())
    }

    /// Delegates to the binary-tag collaborator. See
    /// [`ByteCursor::pack_tag_tree`].
    pub fn unpack_tag_tree(&mut self) -> Result<TagTree> {
        Ok(TagTree::from_raw(self.unpack_byte_array()?))
    }

    // -- entity metadata --

    /// Writes the tagged entity-metadata stream, followed by the
    /// terminator byte.
    pub fn pack_entity_metadata(&mut self, entries: &[MetadataEntry]) -> Result<()> {
        for entry in entries {
            let header = (entry.value.tag() << 5) | (entry.index & 0x1F);
            self.pack_u8(header)?;
            match &entry.value {
                MetadataValue::Byte(v) => self.pack_i8(*v)?,
                MetadataValue::Short(v) => self.pack_i16(*v)?,
                MetadataValue::Int(v) => self.pack_i32(*v)?,
                MetadataValue::Float(v) => self.pack_f32(*v)?,
                MetadataValue::Str(v) => self.pack_string(v)?,
                MetadataValue::Slot(v) => self.pack_slot(v)?,
                MetadataValue::Position { x, y, z } => {
                    self.pack_i32(*x)?;
                    self.pack_i32(*y)?;
                    self.pack_i32(*z)?;
                },
                MetadataValue::Rotation { x, y, z } => {
                    self.pack_f32(*x)?;
                    self.pack_f32(*y)?;
                    self.pack_f32(*z)?;
                },
            }
        }
        self.pack_u8(TERMINATOR)
    }

    /// Reads the tagged entity-metadata stream up to and including the
    /// terminator byte.
    ///
    /// # Errors
    ///
    /// `ProtocolError::InvalidTagType` if a header's high 3 bits (read as
    /// an *unsigned* shift, never `abs`-aliased) select a tag outside the
    /// closed eight-tag set.
    pub fn unpack_entity_metadata(&mut self) -> Result<Vec<MetadataEntry>> {
        let mut entries = Vec::new();
        loop {
            let header = self.unpack_u8()?;
            if header == TERMINATOR {
                break;
            }
            let tag = header >> 5;
            let index = header & 0x1F;
            let value = match tag {
                0 => MetadataValue::Byte(self.unpack_i8()?),
                1 => MetadataValue::Short(self.unpack_i16()?),
                2 => MetadataValue::Int(self.unpack_i32()?),
                3 => MetadataValue::Float(self.unpack_f32()?),
                4 => MetadataValue::Str(self.unpack_string()?),
                5 => MetadataValue::Slot(self.unpack_slot()?),
                6 => MetadataValue::Position {
                    x: self.unpack_i32()?,
                    y: self.unpack_i32()?,
                    z: self.unpack_i32()?,
                },
                7 => MetadataValue::Rotation {
                    x: self.unpack_f32()?,
                    y: self.unpack_f32()?,
                    z: self.unpack_f32()?,
                },
                other => return Err(ProtocolError::InvalidTagType { tag: other }),
            };
            entries.push(MetadataEntry { index, value });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> ByteCursor {
        ByteCursor::new(ProtocolVersion::V765)
    }

    #[test]
    fn capacity_never_shrinks_and_doubles() {
        let mut c = cursor();
        assert_eq!(c.capacity(), 0);
        c.append_bytes(&[0; 3]).unwrap();
        assert!(c.capacity() >= 3);
        let cap_after_first = c.capacity();
        c.append_bytes(&[0; 1]).unwrap();
        assert!(c.capacity() >= cap_after_first);
    }

    #[test]
    fn read_past_length_is_buffer_overflow() {
        let mut c = ByteCursor::from_bytes(ProtocolVersion::V765, vec![1, 2]);
        assert!(matches!(c.read_bytes(3), Err(ProtocolError::BufferOverflow)));
    }

    #[test]
    fn varint_boundaries_round_trip() {
        let cases: &[(i32, &[u8])] = &[
            (0, &[0x00]),
            (127, &[0x7F]),
            (128, &[0x80, 0x01]),
            (2_147_483_647, &[0xFF, 0xFF, 0xFF, 0xFF, 0x07]),
            (-1, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
        ];
        for &(value, expected_bytes) in cases {
            let mut c = cursor();
            c.pack_varint(value).unwrap();
            assert_eq!(c.as_bytes(), expected_bytes);

            let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, c.into_bytes());
            assert_eq!(reader.unpack_varint().unwrap(), value);
        }
    }

    #[test]
    fn packed_position_negative_one_round_trips() {
        let mut c = cursor();
        let pos = BlockPos::new(-1, -1, -1);
        c.pack_position(pos).unwrap();
        assert_eq!(c.as_bytes(), &0xFFFF_FFFF_FFFF_FFFFu64.to_be_bytes());

        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, c.into_bytes());
        assert_eq!(reader.unpack_position().unwrap(), pos);
    }

    #[test]
    fn entity_metadata_round_trips_and_consumes_terminator() {
        let entries = vec![
            MetadataEntry { index: 3, value: MetadataValue::Byte(7) },
            MetadataEntry { index: 5, value: MetadataValue::Str("hi".to_string()) },
        ];
        let mut c = cursor();
        c.pack_entity_metadata(&entries).unwrap();

        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, c.into_bytes());
        let decoded = reader.unpack_entity_metadata().unwrap();
        assert_eq!(decoded, entries);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn entity_metadata_rejects_out_of_range_tag() {
        let mut c = ByteCursor::from_bytes(ProtocolVersion::V765, vec![(8 << 5) | 1]);
        assert!(matches!(
            c.unpack_entity_metadata(),
            Err(ProtocolError::InvalidTagType { tag: 8 })
        ));
    }

    #[test]
    fn string_over_limit_fails_to_pack() {
        let mut c = cursor();
        assert!(matches!(
            c.pack_string_with_limit("abcd", 2),
            Err(ProtocolError::StringLength)
        ));
    }

    #[test]
    fn string_with_negative_or_oversized_length_fails_to_unpack() {
        let mut too_long = cursor();
        too_long.pack_varint(9999).unwrap();
        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, too_long.into_bytes());
        assert!(matches!(
            reader.unpack_string_with_limit(10),
            Err(ProtocolError::InvalidArguments)
        ));
    }

    #[test]
    fn slot_absent_sentinel_round_trips() {
        let mut c = cursor();
        c.pack_slot(&Slot::Absent).unwrap();
        assert_eq!(c.as_bytes(), &(-1i16).to_be_bytes());

        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, c.into_bytes());
        assert_eq!(reader.unpack_slot().unwrap(), Slot::Absent);
    }

    #[test]
    fn uuid_round_trips_as_two_halves() {
        let id: u128 = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210;
        let mut c = cursor();
        c.pack_uuid(id).unwrap();
        let mut reader = ByteCursor::from_bytes(ProtocolVersion::V765, c.into_bytes());
        assert_eq!(reader.unpack_uuid().unwrap(), id);
    }
}
