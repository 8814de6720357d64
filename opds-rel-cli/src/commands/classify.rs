//! Classify command implementation

use anyhow::{bail, Context, Result};
use opds_rel_core::{classify as classify_rel, RelationCategory};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Classification output for one input string
#[derive(Serialize)]
struct Classified {
    input: String,
    kind: Option<&'static str>,
    category: Option<RelationCategory>,
}

/// Classify relation strings from arguments, a file, or stdin
pub fn classify(rels: Vec<String>, input: Option<&str>, json: bool, strict: bool) -> Result<()> {
    let rels = if !rels.is_empty() {
        rels
    } else if let Some(path) = input {
        let file = File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
        read_lines(BufReader::new(file)).with_context(|| format!("Failed to read {}", path))?
    } else {
        read_lines(io::stdin().lock()).context("Failed to read stdin")?
    };

    tracing::debug!("Classifying {} relation(s)", rels.len());

    let results: Vec<Classified> = rels
        .into_iter()
        .map(|raw| {
            let relation = classify_rel(&raw);
            Classified {
                input: raw,
                kind: relation.kind().map(|k| k.name()),
                category: relation.category(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}\t{}", result.input, result.kind.unwrap_or("unknown"));
        }
    }

    let unknown = results.iter().filter(|r| r.kind.is_none()).count();
    if unknown > 0 {
        tracing::info!("{} of {} relation(s) not in the vocabulary", unknown, results.len());
        if strict {
            bail!("{} unknown relation(s)", unknown);
        }
    }

    Ok(())
}

/// One relation per line; only the line terminator is stripped
fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
