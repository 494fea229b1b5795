//! Shared library for the skillbook helper binaries.
//!
//! The crate models a skill dataset (`data/skills.json`): a list of craftable
//! game abilities, each requiring two skill trees. Two concerns live here. The
//! projector (`projection`) normalizes the dataset in place by stripping the
//! scraper-era fields out of every record. The filter engine (`filter`)
//! answers visibility queries over the normalized records, mirroring the
//! behavior of the skill browser the dataset feeds.

use std::env;
use std::path::PathBuf;

pub mod filter;
pub mod projection;
pub mod skill;
pub mod trees;

pub use filter::{
    FilterState, clean_secondary_filters, group_skills_by_element, highlight_special_terms,
    secondary_tree, should_skill_show, valid_secondary_options,
};
pub use projection::{CleanSummary, DROPPED_FIELDS, clean_file, project_collection, project_record};
pub use skill::{AbilityDetails, Skill, load_skills};
pub use trees::{ALL_TREES, ELEMENTAL_TREES, NON_ELEMENTAL_TREES, Tree};

/// Fixed location of the dataset, relative to the repository root.
pub const DATA_PATH: &str = "data/skills.json";

/// Environment override for the dataset location. Tests point the binaries at
/// scratch copies through this; normal runs never set it.
pub const DATA_ENV: &str = "SKILLBOOK_DATA";

/// Resolve the dataset path: honor `SKILLBOOK_DATA` when set and non-empty,
/// otherwise use the fixed relative location.
pub fn resolve_data_path() -> PathBuf {
    match env::var_os(DATA_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DATA_PATH),
    }
}
