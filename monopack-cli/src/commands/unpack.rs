use anyhow::{bail, Context, Result};
use monopack_core::{decoder::unpack, ArchiveConfig};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

pub fn execute(input: &str, output: &str, config: &ArchiveConfig) -> Result<()> {
    info!("Unpacking {} into {}", input, output);

    let archive = File::open(input).with_context(|| format!("failed to open {input}"))?;
    let out_dir = Path::new(output);
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {output}"))?;

    let mut seen: HashMap<String, u32> = HashMap::new();
    let mut extracted = 0u64;

    for entry in unpack(BufReader::new(archive), config) {
        let entry = entry.with_context(|| format!("failed to unpack {input}"))?;

        check_name(&entry.record.name)?;
        let name = disambiguate(&mut seen, &entry.record.name);
        if name != entry.record.name {
            warn!(
                "Duplicate entry name {}, extracting as {}",
                entry.record.name, name
            );
        }

        info!("Extracting {} ({} bytes)", name, entry.record.size);
        fs::write(out_dir.join(&name), &entry.payload)
            .with_context(|| format!("failed to write {name}"))?;
        extracted += 1;
    }

    info!("Extracted {} entries from {}", extracted, input);
    Ok(())
}

/// Entry names come from the archive, not from us; refuse anything that
/// would land outside the output directory.
fn check_name(name: &str) -> Result<()> {
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        bail!("entry name {name:?} escapes the output directory");
    }
    Ok(())
}

/// Duplicate names are disambiguated by occurrence index: the second
/// `data.txt` becomes `data.txt.1`, the third `data.txt.2`. Nothing is
/// silently overwritten.
fn disambiguate(seen: &mut HashMap<String, u32>, name: &str) -> String {
    let count = seen.entry(name.to_string()).or_insert(0);
    let out = if *count == 0 {
        name.to_string()
    } else {
        format!("{name}.{count}")
    };
    *count += 1;
    out
}
