//! The ten skill trees and their groupings.
//!
//! Tree names are a closed set; the dataset and the filter engine both refer
//! to trees by display name, so the enum round-trips through those strings.
//! The slice constants preserve the browser's display order: elementals,
//! then Summoning, then the non-elemental trees.

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tree {
    Pyrokinetic,
    Aerotheurge,
    Geomancer,
    Hydrosophist,
    Summoning,
    Warfare,
    Huntsman,
    Scoundrel,
    Polymorph,
    Necromancer,
}

/// Trees whose skills are grouped by element in the browser.
pub const ELEMENTAL_TREES: &[Tree] = &[
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
];

pub const NON_ELEMENTAL_TREES: &[Tree] = &[
    Tree::Warfare,
    Tree::Huntsman,
    Tree::Scoundrel,
    Tree::Polymorph,
    Tree::Necromancer,
];

pub const ALL_TREES: &[Tree] = &[
    Tree::Pyrokinetic,
    Tree::Aerotheurge,
    Tree::Geomancer,
    Tree::Hydrosophist,
    Tree::Summoning,
    Tree::Warfare,
    Tree::Huntsman,
    Tree::Scoundrel,
    Tree::Polymorph,
    Tree::Necromancer,
];

impl Tree {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tree::Pyrokinetic => "Pyrokinetic",
            Tree::Aerotheurge => "Aerotheurge",
            Tree::Geomancer => "Geomancer",
            Tree::Hydrosophist => "Hydrosophist",
            Tree::Summoning => "Summoning",
            Tree::Warfare => "Warfare",
            Tree::Huntsman => "Huntsman",
            Tree::Scoundrel => "Scoundrel",
            Tree::Polymorph => "Polymorph",
            Tree::Necromancer => "Necromancer",
        }
    }

    /// Parse a display name. Unknown names yield `None` rather than an error;
    /// callers decide whether to ignore or reject them.
    pub fn parse(name: &str) -> Option<Tree> {
        match name {
            "Pyrokinetic" => Some(Tree::Pyrokinetic),
            "Aerotheurge" => Some(Tree::Aerotheurge),
            "Geomancer" => Some(Tree::Geomancer),
            "Hydrosophist" => Some(Tree::Hydrosophist),
            "Summoning" => Some(Tree::Summoning),
            "Warfare" => Some(Tree::Warfare),
            "Huntsman" => Some(Tree::Huntsman),
            "Scoundrel" => Some(Tree::Scoundrel),
            "Polymorph" => Some(Tree::Polymorph),
            "Necromancer" => Some(Tree::Necromancer),
            _ => None,
        }
    }

    pub fn is_elemental(&self) -> bool {
        ELEMENTAL_TREES.contains(self)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_trees_order_is_stable() {
        // Display order feeds the browser UI and the query-string round-trip
        // tests; lock it down so it cannot drift silently.
        let names: Vec<&str> = ALL_TREES.iter().map(Tree::as_str).collect();
        assert_eq!(
            names,
            vec![
                "Pyrokinetic",
                "Aerotheurge",
                "Geomancer",
                "Hydrosophist",
                "Summoning",
                "Warfare",
                "Huntsman",
                "Scoundrel",
                "Polymorph",
                "Necromancer",
            ]
        );
    }

    #[test]
    fn groupings_partition_all_trees() {
        for tree in ALL_TREES {
            let elemental = ELEMENTAL_TREES.contains(tree);
            let non_elemental = NON_ELEMENTAL_TREES.contains(tree);
            let summoning = *tree == Tree::Summoning;
            assert_eq!(
                1,
                usize::from(elemental) + usize::from(non_elemental) + usize::from(summoning),
                "{tree} must belong to exactly one grouping"
            );
        }
    }

    #[test]
    fn every_name_round_trips() {
        for tree in ALL_TREES {
            assert_eq!(Some(*tree), Tree::parse(tree.as_str()));
        }
        assert_eq!(None, Tree::parse("InvalidTree"));
        assert_eq!(None, Tree::parse("pyrokinetic"));
    }
}
