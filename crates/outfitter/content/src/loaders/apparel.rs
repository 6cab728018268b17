//! Apparel catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use outfitter_core::ApparelDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Apparel catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApparelCatalog {
    pub apparel: Vec<ApparelDefinition>,
}

/// Loader for apparel catalogs from RON files.
pub struct ApparelLoader;

impl ApparelLoader {
    /// Load apparel definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ApparelDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog; definition names must be unique.
    pub fn parse(content: &str) -> LoadResult<Vec<ApparelDefinition>> {
        let catalog: ApparelCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse apparel catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for def in &catalog.apparel {
            if !seen.insert(def.def_name.as_str()) {
                anyhow::bail!("Duplicate apparel definition: {}", def.def_name);
            }
        }

        Ok(catalog.apparel)
    }
}

#[cfg(test)]
mod tests {
    use outfitter_core::{ApparelClass, ApparelLayer, defs};

    use super::*;

    #[test]
    fn parses_minimal_definition() {
        let parsed = ApparelLoader::parse(r#"(apparel: [(def_name: "Apparel_Tuque")])"#).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].class, ApparelClass::Clothing);
        assert!(parsed[0].uses_hit_points);
        assert!(parsed[0].stat_bases.is_empty());
    }

    #[test]
    fn parses_stats_by_name() {
        let catalog = r#"(
            apparel: [(
                def_name: "Apparel_ShieldBelt",
                class: Shield,
                layers: [Belt],
                body_groups: [Waist],
                stat_bases: { "ArmorRating_Sharp": 0.1 },
                equipped_offsets: { "MoveSpeed": -0.1 },
            )],
        )"#;

        let parsed = ApparelLoader::parse(catalog).unwrap();

        let belt = &parsed[0];
        assert!(belt.is_shield());
        assert_eq!(belt.layers, vec![ApparelLayer::Belt]);
        assert_eq!(belt.stat_bases.get(&defs::ARMOR_RATING_SHARP), Some(0.1));
        assert_eq!(belt.equipped_offsets.get(&defs::MOVE_SPEED), Some(-0.1));
    }

    #[test]
    fn rejects_duplicate_names() {
        let catalog = r#"(apparel: [(def_name: "A"), (def_name: "A")])"#;
        let err = ApparelLoader::parse(catalog).unwrap_err();
        assert!(err.to_string().contains("Duplicate apparel definition: A"));
    }
}
