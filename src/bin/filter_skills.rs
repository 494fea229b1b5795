//! Query the skill dataset from the command line.
//!
//! Mirrors the browser's filter controls: `--and TREE` is the primary filter,
//! `--or TREE[,TREE...]` the secondary set. Prints the same summary line the
//! browser shows, then the matching skills grouped by display category.

use anyhow::{Result, bail};
use skillbook::{
    ELEMENTAL_TREES, FilterState, Tree, clean_secondary_filters, group_skills_by_element,
    load_skills, resolve_data_path, secondary_tree,
};
use std::collections::BTreeSet;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let state = CliArgs::parse()?.into_state();

    let path = resolve_data_path();
    let skills = load_skills(&path)?;
    let visible: Vec<_> = skills
        .iter()
        .filter(|skill| state.matches(skill))
        .cloned()
        .collect();

    println!("{}", state.summary_text());

    let grouped = group_skills_by_element(&visible);
    let mut categories = vec![Tree::Summoning];
    categories.extend_from_slice(ELEMENTAL_TREES);
    for category in categories {
        let Some(bucket) = grouped.get(&category) else {
            continue;
        };
        if bucket.is_empty() {
            continue;
        }
        println!();
        println!("{category}:");
        for skill in bucket {
            match secondary_tree(&skill.trees(), category) {
                Some(other) => println!("  - {} ({category} + {other})", skill.name),
                None => println!("  - {} ({category})", skill.name),
            }
        }
    }

    Ok(())
}

struct CliArgs {
    primary: Option<Tree>,
    secondary: BTreeSet<Tree>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut primary = None;
        let mut secondary = BTreeSet::new();

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--and" => {
                    let name = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--and requires a tree name"))?;
                    let Some(tree) = Tree::parse(&name) else {
                        bail!("unknown tree '{name}'");
                    };
                    if primary.replace(tree).is_some() {
                        bail!("--and provided multiple times");
                    }
                }
                "--or" => {
                    let names = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--or requires tree names"))?;
                    for name in names.split(',') {
                        let Some(tree) = Tree::parse(name) else {
                            bail!("unknown tree '{name}'");
                        };
                        secondary.insert(tree);
                    }
                }
                other => bail!("unknown argument '{other}' (expected --and or --or)"),
            }
        }

        Ok(CliArgs { primary, secondary })
    }

    // Same validation the query-string parser applies: secondaries that
    // cannot pair with the primary are dropped, not rejected.
    fn into_state(self) -> FilterState {
        let secondary = clean_secondary_filters(self.primary, &self.secondary);
        FilterState {
            primary: self.primary,
            secondary,
        }
    }
}
