//! List command implementation

use anyhow::Result;
use opds_rel_core::{RelationCategory, RelationKind};
use serde::Serialize;

/// Vocabulary row output
#[derive(Serialize)]
struct VocabularyEntry {
    kind: &'static str,
    rel: &'static str,
    category: RelationCategory,
    meaning: &'static str,
}

/// Print the relation vocabulary
pub fn list(json: bool) -> Result<()> {
    let entries: Vec<VocabularyEntry> = RelationKind::ALL
        .iter()
        .map(|&kind| VocabularyEntry {
            kind: kind.name(),
            rel: kind.as_str(),
            category: kind.category(),
            meaning: kind.meaning(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!(
                "{:<22} {:<11} {:<46} {}",
                entry.kind, entry.category, entry.rel, entry.meaning
            );
        }
    }

    Ok(())
}
