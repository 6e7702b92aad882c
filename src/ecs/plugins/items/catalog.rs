use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Combat-relevant stats of an item definition.
///
/// `lifesteal` is the fraction of dealt damage returned to the wielder as
/// healing; items without it simply never appear in the lifesteal rule table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    #[serde(default)]
    pub damage: f32,
    #[serde(default)]
    pub lifesteal: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub stats: ItemStats,
}

/// All known item definitions, keyed by item id.
///
/// Built from a small builtin set plus an optional JSON manifest merged at
/// startup. This is the asset surface the lifesteal reload operation scans.
#[derive(Resource, Debug, Default, Clone)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDef>,
}

impl ItemCatalog {
    /// The builtin item set the server ships with.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert(ItemDef {
            id: "items/dagger_basic".into(),
            categories: vec!["Dagger".into()],
            stats: ItemStats {
                damage: 6.0,
                lifesteal: Some(0.12),
            },
        });
        catalog.insert(ItemDef {
            id: "items/sword_basic".into(),
            categories: vec!["Sword".into()],
            stats: ItemStats {
                damage: 10.0,
                lifesteal: None,
            },
        });
        catalog.insert(ItemDef {
            id: "items/club_crude".into(),
            categories: Vec::new(),
            stats: ItemStats {
                damage: 8.0,
                lifesteal: None,
            },
        });
        catalog
    }

    pub fn insert(&mut self, def: ItemDef) {
        self.items.insert(def.id.clone(), def);
    }

    pub fn get(&self, item_id: &str) -> Option<&ItemDef> {
        self.items.get(item_id)
    }

    /// Category tags for an item id; unknown items have none.
    pub fn categories(&self, item_id: &str) -> &[String] {
        self.get(item_id)
            .map(|def| def.categories.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge a JSON array of item definitions over the current catalog,
    /// replacing entries that share an id. Returns how many were merged.
    pub fn merge_manifest(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        let defs: Vec<ItemDef> = serde_json::from_str(json)?;
        let count = defs.len();
        for def in defs {
            self.insert(def);
        }
        Ok(count)
    }

    /// Every item that declares a lifesteal stat.
    pub fn lifesteal_entries(&self) -> impl Iterator<Item = (&str, f32)> {
        self.items.values().filter_map(|def| {
            def.stats
                .lifesteal
                .map(|fraction| (def.id.as_str(), fraction))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_the_basic_dagger() {
        let catalog = ItemCatalog::builtin();
        let dagger = catalog.get("items/dagger_basic").unwrap();
        assert_eq!(dagger.categories, vec!["Dagger".to_string()]);
        assert_eq!(dagger.stats.lifesteal, Some(0.12));
    }

    #[test]
    fn unknown_items_have_no_categories() {
        let catalog = ItemCatalog::builtin();
        assert!(catalog.categories("items/does_not_exist").is_empty());
    }

    #[test]
    fn manifest_merge_adds_and_overrides() {
        let mut catalog = ItemCatalog::builtin();
        let manifest = r#"[
            {
                "id": "items/dagger_basic",
                "categories": ["Dagger"],
                "stats": { "damage": 7.0, "lifesteal": 0.2 }
            },
            {
                "id": "items/fang_blade",
                "categories": ["Dagger", "Exotic"],
                "stats": { "damage": 9.0, "lifesteal": 0.3 }
            }
        ]"#;
        let merged = catalog.merge_manifest(manifest).unwrap();
        assert_eq!(merged, 2);
        assert_eq!(
            catalog.get("items/dagger_basic").unwrap().stats.lifesteal,
            Some(0.2)
        );
        assert_eq!(
            catalog.get("items/fang_blade").unwrap().stats.damage,
            9.0
        );
    }

    #[test]
    fn malformed_manifest_is_an_error_and_leaves_catalog_untouched() {
        let mut catalog = ItemCatalog::builtin();
        let before = catalog.len();
        assert!(catalog.merge_manifest("{ not json").is_err());
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn lifesteal_entries_only_lists_items_with_the_stat() {
        let catalog = ItemCatalog::builtin();
        let entries: Vec<_> = catalog.lifesteal_entries().collect();
        assert_eq!(entries, vec![("items/dagger_basic", 0.12)]);
    }

    #[test]
    fn manifest_defaults_optional_fields() {
        let mut catalog = ItemCatalog::default();
        catalog
            .merge_manifest(r#"[{ "id": "items/torch" }]"#)
            .unwrap();
        let torch = catalog.get("items/torch").unwrap();
        assert!(torch.categories.is_empty());
        assert_eq!(torch.stats.damage, 0.0);
        assert_eq!(torch.stats.lifesteal, None);
    }
}
