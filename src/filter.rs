//! Pure skill-visibility logic for the browser and the `filter-skills` CLI.
//!
//! Everything here takes data in and returns a result; no I/O. The one
//! interesting rule is the Summoning wall: Summoning skills only appear when
//! Summoning is explicitly selected, and selecting Summoning hides everything
//! else. The pairing tables mirror the crafting rules the dataset follows, so
//! secondary filter options never offer a combination no skill can have.

use crate::skill::Skill;
use crate::trees::{ELEMENTAL_TREES, NON_ELEMENTAL_TREES, Tree};
use regex::{NoExpand, Regex};
use std::collections::{BTreeMap, BTreeSet};

// Valid secondaries with no primary selected: every tree except Summoning,
// in display order.
const OPEN_SECONDARIES: &[Tree] = &[
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
    Tree::Warfare,
    Tree::Huntsman,
    Tree::Scoundrel,
    Tree::Polymorph,
    Tree::Necromancer,
];

// Summoning pairs only with the elementals and Necromancer.
const SUMMONING_SECONDARIES: &[Tree] = &[
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
    Tree::Necromancer,
];

/// Secondary filter options that can pair with the given primary.
pub fn valid_secondary_options(primary: Option<Tree>) -> &'static [Tree] {
    match primary {
        None => OPEN_SECONDARIES,
        Some(Tree::Summoning) => SUMMONING_SECONDARIES,
        Some(tree) if tree.is_elemental() => NON_ELEMENTAL_TREES,
        Some(_) => ELEMENTAL_TREES,
    }
}

/// Whether a skill with the given trees is visible under the current filters.
///
/// The primary filter must match (AND); the secondary set matches when any of
/// its trees is one of the skill's (OR). The Summoning wall overrides both
/// directions: see the module docs.
pub fn should_skill_show(
    skill_trees: &[Tree],
    primary: Option<Tree>,
    secondary: &BTreeSet<Tree>,
) -> bool {
    if primary.is_none() && secondary.is_empty() {
        return true;
    }

    let matches_primary = primary.is_none_or(|tree| skill_trees.contains(&tree));
    let matches_secondary =
        secondary.is_empty() || secondary.iter().any(|tree| skill_trees.contains(tree));
    let summoning_selected =
        primary == Some(Tree::Summoning) || secondary.contains(&Tree::Summoning);

    if skill_trees.contains(&Tree::Summoning) {
        // Some filter is active here, so visibility requires the explicit pick.
        summoning_selected && matches_primary && matches_secondary
    } else {
        !summoning_selected && matches_primary && matches_secondary
    }
}

/// Drop secondaries that are no longer valid for the new primary.
pub fn clean_secondary_filters(
    primary: Option<Tree>,
    secondary: &BTreeSet<Tree>,
) -> BTreeSet<Tree> {
    let valid = valid_secondary_options(primary);
    secondary
        .iter()
        .copied()
        .filter(|tree| valid.contains(tree))
        .collect()
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Current filter selection: one optional primary plus a secondary set.
pub struct FilterState {
    pub primary: Option<Tree>,
    pub secondary: BTreeSet<Tree>,
}

impl FilterState {
    /// Parse filter state from a URL-style query string, e.g.
    /// `?and=Pyrokinetic&or=Warfare,Necromancer`.
    ///
    /// Unknown tree names and unknown keys are ignored; secondaries are
    /// re-validated against the primary so a stale or hand-edited link can
    /// never produce an impossible combination.
    pub fn parse_query(query: &str) -> FilterState {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut primary = None;
        let mut secondary = BTreeSet::new();

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "and" => {
                    if let Some(tree) = Tree::parse(value) {
                        primary = Some(tree);
                    }
                }
                "or" => {
                    for name in value.split(',') {
                        if let Some(tree) = Tree::parse(name) {
                            secondary.insert(tree);
                        }
                    }
                }
                _ => {}
            }
        }

        let secondary = clean_secondary_filters(primary, &secondary);
        FilterState { primary, secondary }
    }

    /// Build the inverse query string. Secondary names are sorted so the same
    /// selection always produces the same link; an empty selection produces
    /// an empty string.
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(primary) = self.primary {
            params.push(format!("and={primary}"));
        }
        if !self.secondary.is_empty() {
            let mut names: Vec<&str> = self.secondary.iter().map(Tree::as_str).collect();
            names.sort_unstable();
            params.push(format!("or={}", names.join(",")));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }

    /// Human-readable description of the selection.
    pub fn summary_text(&self) -> String {
        let secondaries: Vec<&str> = self.secondary.iter().map(Tree::as_str).collect();
        match (self.primary, secondaries.as_slice()) {
            (None, []) => "Showing all skills".to_string(),
            (Some(primary), []) => format!("Showing all {primary} skills"),
            (None, [only]) => format!("Showing all {only} skills"),
            (None, many) => format!("Showing skills with {}", join_or(many)),
            (Some(primary), [only]) => format!("Showing all {primary} skills, with {only}"),
            (Some(primary), many) => {
                format!("Showing all {primary} skills, with {}", join_or(many))
            }
        }
    }

    pub fn matches(&self, skill: &Skill) -> bool {
        should_skill_show(&skill.trees(), self.primary, &self.secondary)
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_empty()
    }
}

// "A, B, C" with the final comma turned into " or ".
fn join_or(names: &[&str]) -> String {
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

/// Wrap each whole-word, case-insensitive occurrence of each term in a
/// `special-term` span. The replacement uses the term's own casing, matching
/// the browser's rendering.
pub fn highlight_special_terms(text: &str, terms: &[String]) -> String {
    let mut result = text.to_string();
    for term in terms {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        let replacement = format!(r#"<span class="special-term">{term}</span>"#);
        result = re.replace_all(&result, NoExpand(&replacement)).into_owned();
    }
    result
}

/// The skill's other tree, relative to the category it is displayed under.
pub fn secondary_tree(skill_trees: &[Tree], primary_category: Tree) -> Option<Tree> {
    skill_trees
        .iter()
        .copied()
        .find(|tree| *tree != primary_category)
}

/// Group skills by display category: Summoning skills under Summoning,
/// everything else under its elemental tree. All categories are present in
/// the result even when empty; skills with neither Summoning nor an elemental
/// tree are left out.
pub fn group_skills_by_element(skills: &[Skill]) -> BTreeMap<Tree, Vec<&Skill>> {
    let mut grouped: BTreeMap<Tree, Vec<&Skill>> = BTreeMap::new();
    grouped.insert(Tree::Summoning, Vec::new());
    for tree in ELEMENTAL_TREES {
        grouped.insert(*tree, Vec::new());
    }

    for skill in skills {
        let trees = skill.trees();
        let category = if trees.contains(&Tree::Summoning) {
            Some(Tree::Summoning)
        } else {
            trees.iter().copied().find(Tree::is_elemental)
        };
        if let Some(category) = category {
            if let Some(bucket) = grouped.get_mut(&category) {
                bucket.push(skill);
            }
        }
    }

    grouped
}
