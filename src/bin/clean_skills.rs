//! One-shot cleaner for `data/skills.json`.
//!
//! Reads the full collection, projects every record down to the retained
//! field set, and rewrites the file in place with 2-space indentation and a
//! trailing newline. Takes no arguments; any failure prints the error chain
//! and exits non-zero without touching the file.

use anyhow::{Result, bail};
use skillbook::projection::DROPPED_FIELDS;
use skillbook::{clean_file, resolve_data_path};
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    if let Some(arg) = env::args().nth(1) {
        bail!("unexpected argument '{arg}'; clean-skills takes no arguments");
    }

    let path = resolve_data_path();
    let summary = clean_file(&path)?;

    println!("✓ Cleaned {}", path.display());
    println!("  - Removed: {}", DROPPED_FIELDS.join(", "));
    println!("  - Processed {} skills", summary.processed);
    Ok(())
}
