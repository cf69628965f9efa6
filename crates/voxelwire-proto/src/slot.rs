//! Item-slot record: either absent, or a present item stack with metadata.

use crate::tag::TagTree;

/// An inventory slot.
///
/// Wire-absent is the sentinel `item_id == -1`; [`Slot::Present`] always
/// carries a non-negative item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// No item occupies this slot.
    Absent,
    /// An item stack.
    Present {
        /// Item registry id.
        item_id: i16,
        /// Stack size.
        count: i8,
        /// Legacy damage/metadata value.
        metadata: i16,
        /// Attached tag tree (enchantments, display name, etc.).
        tag: TagTree,
    },
}

impl Slot {
    /// Whether this slot holds an item.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slot_is_not_present() {
        assert!(!Slot::Absent.is_present());
    }

    #[test]
    fn present_slot_is_present() {
        let slot =
            Slot::Present { item_id: 1, count: 1, metadata: 0, tag: TagTree::empty() };
        assert!(slot.is_present());
    }
}
