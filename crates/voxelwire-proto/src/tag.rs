//! Binary tag tree: an opaque, recursive attribute container.
//!
//! This module specifies only the contract the per-message codec needs:
//! decode from a cursor's current position, encode back losslessly, and own
//! every child it decodes. The grammar of the tree (compound/list/named-tag
//! layout) is a collaborator concern and out of scope here; [`TagTree`]
//! carries its payload as an opaque, length-prefixed byte span produced by
//! that collaborator, so it round-trips regardless of where in a record it
//! appears.

use bytes::Bytes;

/// An opaque, recursively-owned attribute tree.
///
/// Held as already-encoded bytes because this crate does not implement the
/// tag grammar. A real deployment swaps the body of [`TagTree::decode`] /
/// [`TagTree::encode`] for calls into the binary-tag collaborator without
/// changing any caller of this type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagTree {
    raw: Bytes,
}

impl TagTree {
    /// The empty tag tree (no attributes).
    #[must_use]
    pub fn empty() -> Self {
        Self { raw: Bytes::new() }
    }

    /// Wraps an already-encoded tag tree body.
    #[must_use]
    pub fn from_raw(raw: impl Into<Bytes>) -> Self {
        Self { raw: raw.into() }
    }

    /// The opaque encoded body, as the collaborator produced it.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_has_no_bytes() {
        assert!(TagTree::empty().raw().is_empty());
    }

    #[test]
    fn round_trips_opaque_payload() {
        let tree = TagTree::from_raw(vec![1, 2, 3]);
        assert_eq!(tree.raw(), &[1, 2, 3]);
    }
}
