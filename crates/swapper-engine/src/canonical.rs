//! Item variant canonicalization.
//!
//! Preferences are stored against a canonical item id so that every
//! dose, charge or cosmetic variant of an item shares one setting.

use std::collections::HashMap;

use swapper_core::ItemId;

/// Collapses item variants to one identity.
pub trait Canonicalize: Send + Sync {
    fn canonicalize(&self, item_id: ItemId) -> ItemId;
}

impl<F> Canonicalize for F
where
    F: Fn(ItemId) -> ItemId + Send + Sync,
{
    fn canonicalize(&self, item_id: ItemId) -> ItemId {
        self(item_id)
    }
}

/// Treats every id as its own canonical form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Canonicalize for Identity {
    fn canonicalize(&self, item_id: ItemId) -> ItemId {
        item_id
    }
}

/// Table-driven canonicalizer mapping variant ids to a base id.
///
/// Ids not present in the table are their own canonical form.
#[derive(Debug, Clone, Default)]
pub struct VariationMap {
    variants: HashMap<ItemId, ItemId>,
}

impl VariationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `variants` as variants of `base`.
    pub fn insert(&mut self, base: ItemId, variants: impl IntoIterator<Item = ItemId>) {
        for variant in variants {
            self.variants.insert(variant, base);
        }
    }

    /// Parse a JSON object of `"base": [variant, ...]`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let table: HashMap<String, Vec<i32>> = serde_json::from_str(json)?;
        let mut map = Self::new();
        for (base, variants) in table {
            let Ok(base) = base.parse::<i32>() else {
                tracing::warn!("Skipping non-numeric variation base '{}'", base);
                continue;
            };
            map.insert(ItemId(base), variants.into_iter().map(ItemId));
        }
        tracing::debug!("Loaded {} item variations", map.len());
        Ok(map)
    }

    /// Number of variant ids in the table.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Canonicalize for VariationMap {
    fn canonicalize(&self, item_id: ItemId) -> ItemId {
        self.variants.get(&item_id).copied().unwrap_or(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.canonicalize(ItemId(2434)), ItemId(2434));
    }

    #[test]
    fn test_closure_canonicalizer() {
        let even = |id: ItemId| ItemId(id.0 & !1);
        assert_eq!(even.canonicalize(ItemId(139)), ItemId(138));
    }

    #[test]
    fn test_variation_map_from_json() {
        let map = VariationMap::from_json(r#"{ "2434": [139, 141, 143], "bogus": [1] }"#).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.canonicalize(ItemId(141)), ItemId(2434));
        assert_eq!(map.canonicalize(ItemId(2434)), ItemId(2434));
        assert_eq!(map.canonicalize(ItemId(995)), ItemId(995));
    }

    #[test]
    fn test_variation_map_invalid_json() {
        assert!(VariationMap::from_json("[1, 2]").is_err());
    }
}
