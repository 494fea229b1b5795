//! Typed view of a cleaned skill record.
//!
//! The projector works on untyped JSON so it can drop fields it has never
//! heard of; everything downstream of it (the filter engine, the filter CLI)
//! reads the normalized shape through these structs instead.

use crate::trees::Tree;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// One craftable skill from the dataset.
pub struct Skill {
    pub name: String,
    /// Tree name → required level. The keys are the skill's trees.
    #[serde(default)]
    pub requirements: BTreeMap<String, Value>,
    #[serde(default)]
    pub wiki_url: Option<String>,
    #[serde(default)]
    pub ability_details: Option<AbilityDetails>,
}

#[derive(Clone, Debug, Deserialize)]
/// Cost/range/cooldown metadata for a skill.
pub struct AbilityDetails {
    #[serde(default)]
    pub ap_cost: Option<u32>,
    #[serde(default)]
    pub sp_cost: Option<u32>,
    /// Either a number of tiles or a word like "melee"; left untyped.
    #[serde(default)]
    pub range: Option<Value>,
    #[serde(default)]
    pub cooldown: Option<u32>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub special_terms: Vec<String>,
}

impl Skill {
    /// The skill's trees, parsed from its requirement keys. Unknown tree
    /// names are skipped rather than rejected.
    pub fn trees(&self) -> Vec<Tree> {
        self.requirements
            .keys()
            .filter_map(|name| Tree::parse(name))
            .collect()
    }
}

/// Read and parse a skill collection from disk.
pub fn load_skills(path: &Path) -> Result<Vec<Skill>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let skills: Vec<Skill> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {} as a skill collection", path.display()))?;
    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trees_come_from_requirement_keys() {
        let skill: Skill = serde_json::from_value(json!({
            "name": "Dust Blast",
            "requirements": {"Geomancer": 2, "Huntsman": 1, "NotATree": 9},
            "wiki_url": "https://example.test/dust-blast",
            "ability_details": {
                "ap_cost": 2, "sp_cost": 1, "range": 13,
                "cooldown": 4, "effect": "Blind targets in the area"
            }
        }))
        .expect("skill parses");

        assert_eq!(skill.trees(), vec![Tree::Geomancer, Tree::Huntsman]);
        let details = skill.ability_details.expect("details present");
        assert_eq!(details.ap_cost, Some(2));
        assert_eq!(details.range, Some(json!(13)));
        assert!(details.special_terms.is_empty());
    }
}
