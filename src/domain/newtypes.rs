// SPDX-License-Identifier: MPL-2.0
//! Portal newtypes.
//!
//! Indexed content groups (role bullet items, feature entries) are addressed
//! by bounded indices so an out-of-range position cannot be expressed.

// =============================================================================
// Bounds
// =============================================================================

/// Index bounds for the indexed content groups.
pub mod index_bounds {
    /// Highest bullet item index on a role card.
    pub const MAX_ROLE_ITEM: u8 = 4;
    /// Highest feature entry index in the features section.
    pub const MAX_FEATURE: u8 = 6;
}

// =============================================================================
// ItemIndex
// =============================================================================

/// Position of a bullet item on a role card, guaranteed to be in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemIndex(u8);

impl ItemIndex {
    /// Creates an item index, returning `None` outside `1..=4`.
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        (1..=index_bounds::MAX_ROLE_ITEM)
            .contains(&index)
            .then_some(Self(index))
    }

    /// Returns the raw 1-based index.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Iterates over every valid item index in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=index_bounds::MAX_ROLE_ITEM).map(Self)
    }
}

// =============================================================================
// FeatureIndex
// =============================================================================

/// Position of an entry in the features section, guaranteed to be in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureIndex(u8);

impl FeatureIndex {
    /// Creates a feature index, returning `None` outside `1..=6`.
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        (1..=index_bounds::MAX_FEATURE)
            .contains(&index)
            .then_some(Self(index))
    }

    /// Returns the raw 1-based index.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Iterates over every valid feature index in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=index_bounds::MAX_FEATURE).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_index_rejects_out_of_range() {
        assert!(ItemIndex::new(0).is_none());
        assert!(ItemIndex::new(5).is_none());
        assert_eq!(ItemIndex::new(4).map(ItemIndex::value), Some(4));
    }

    #[test]
    fn feature_index_rejects_out_of_range() {
        assert!(FeatureIndex::new(0).is_none());
        assert!(FeatureIndex::new(7).is_none());
        assert_eq!(FeatureIndex::new(6).map(FeatureIndex::value), Some(6));
    }

    #[test]
    fn all_iterates_full_range() {
        assert_eq!(ItemIndex::all().count(), 4);
        assert_eq!(FeatureIndex::all().map(FeatureIndex::value).last(), Some(6));
    }
}
