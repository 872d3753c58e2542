use anyhow::{Context, Result};
use colored::Colorize;
use monopack_core::{decoder::unpack, ArchiveConfig, EntryRecord};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Serialize)]
struct ListReport {
    entries: Vec<EntryRecord>,
    total_payload_bytes: u64,
}

pub fn execute(input: &str, config: &ArchiveConfig, json: bool) -> Result<()> {
    let archive = File::open(input).with_context(|| format!("failed to open {input}"))?;

    // Payload bytes are still consumed entry by entry; skipping them would
    // desynchronize every record after the first.
    let mut entries: Vec<EntryRecord> = Vec::new();
    for entry in unpack(BufReader::new(archive), config) {
        let entry = entry.with_context(|| format!("failed to read {input}"))?;
        entries.push(entry.record);
    }

    let total_payload_bytes: u64 = entries.iter().map(|r| r.size).sum();

    if json {
        let report = ListReport {
            entries,
            total_payload_bytes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for record in &entries {
            println!("{:>12}  {}", record.size, record.name.cyan());
        }
        println!(
            "{} entries, {} payload bytes",
            entries.len().to_string().bold(),
            total_payload_bytes
        );
    }

    Ok(())
}
