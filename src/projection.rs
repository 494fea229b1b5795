//! The record projector behind `clean-skills`.
//!
//! Records pass through as untyped JSON objects so the projector can observe
//! and drop fields the schema does not name. A missing required field is only
//! discovered when it is read, and it aborts the whole run; there is no
//! validation pass and no partial-success mode.

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One skill record as stored on disk, before any typing is imposed.
pub type RawSkill = Map<String, Value>;

/// Fields retained at the top level of every record, in output order.
pub const RETAINED_FIELDS: &[&str] = &["name", "requirements", "wiki_url", "ability_details"];

/// Fields retained inside `ability_details`, in output order. `special_terms`
/// is handled separately because it is conditional.
pub const RETAINED_DETAIL_FIELDS: &[&str] = &["ap_cost", "sp_cost", "range", "cooldown", "effect"];

/// Scraper-era fields the cleaner exists to remove; itemized in the CLI
/// summary. Any other unrecognized field is dropped too, just not listed.
pub const DROPPED_FIELDS: &[&str] = &[
    "source_cost",
    "description",
    "found_on_page",
    "has_wiki_page",
];

/// Outcome of a [`clean_file`] run.
#[derive(Debug, Clone, Copy)]
pub struct CleanSummary {
    pub processed: usize,
}

fn require_field(record: &RawSkill, field: &str) -> Result<Value> {
    record
        .get(field)
        .cloned()
        .with_context(|| format!("skill record is missing required field '{field}'"))
}

/// Project one record down to the retained field set.
///
/// Values are copied untouched. `special_terms` survives only when it is a
/// non-empty list; an absent, null, or empty value omits the key entirely so
/// the cleaned record never carries an empty list.
pub fn project_record(record: &RawSkill) -> Result<RawSkill> {
    let mut projected = RawSkill::new();
    projected.insert("name".to_string(), require_field(record, "name")?);
    projected.insert(
        "requirements".to_string(),
        require_field(record, "requirements")?,
    );
    projected.insert("wiki_url".to_string(), require_field(record, "wiki_url")?);

    let details_value = require_field(record, "ability_details")?;
    let details = match details_value.as_object() {
        Some(details) => details,
        None => bail!("field 'ability_details' is not an object"),
    };

    let mut kept_details = RawSkill::new();
    for field in RETAINED_DETAIL_FIELDS {
        let value = details
            .get(*field)
            .cloned()
            .with_context(|| format!("ability_details is missing required field '{field}'"))?;
        kept_details.insert((*field).to_string(), value);
    }
    if let Some(Value::Array(terms)) = details.get("special_terms") {
        if !terms.is_empty() {
            kept_details.insert("special_terms".to_string(), Value::Array(terms.clone()));
        }
    }
    projected.insert(
        "ability_details".to_string(),
        Value::Object(kept_details),
    );

    Ok(projected)
}

/// Project every record, preserving collection order.
pub fn project_collection(skills: &[RawSkill]) -> Result<Vec<RawSkill>> {
    skills
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            project_record(record)
                .with_context(|| format!("projecting skill at index {idx}"))
        })
        .collect()
}

/// Load, project, and rewrite the dataset at `path`.
///
/// The whole collection is read and transformed before anything is written,
/// so a projection failure leaves the file as it was. The write itself is a
/// plain replacement with no atomic rename; a failed write can leave a
/// truncated file behind.
pub fn clean_file(path: &Path) -> Result<CleanSummary> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let skills: Vec<RawSkill> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {} as a skill collection", path.display()))?;

    let cleaned = project_collection(&skills)?;

    let mut output = serde_json::to_string_pretty(&cleaned)
        .context("serializing cleaned skill collection")?;
    output.push('\n');
    fs::write(path, output).with_context(|| format!("writing {}", path.display()))?;

    Ok(CleanSummary {
        processed: cleaned.len(),
    })
}
