use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use monopack_core::{encoder::pack_entry, ArchiveConfig, PackSource};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn execute(
    input: &str,
    output: &str,
    ext: Option<&str>,
    config: &ArchiveConfig,
    progress: bool,
) -> Result<()> {
    info!("Packing files from {} into {}", input, output);

    let candidates = collect_candidates(Path::new(input), ext)?;
    info!("Found {} files to pack", candidates.len());

    let result = write_archive(&candidates, output, config, progress);
    if result.is_err() {
        // A partial archive is not valid; do not leave one behind
        let _ = fs::remove_file(output);
    }
    result?;

    info!(
        "Successfully packed {} entries into {}",
        candidates.len(),
        output
    );
    Ok(())
}

fn collect_candidates(dir: &Path, ext: Option<&str>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("input {} is not a directory", dir.display());
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if let Some(wanted) = ext {
            match path.extension().and_then(|e| e.to_str()) {
                Some(e) if e.eq_ignore_ascii_case(wanted) => {}
                _ => continue,
            }
        }
        candidates.push(path);
    }

    // Directory iteration order is platform-dependent; sort for determinism
    candidates.sort();
    Ok(candidates)
}

fn write_archive(
    candidates: &[PathBuf],
    output: &str,
    config: &ArchiveConfig,
    progress: bool,
) -> Result<()> {
    let out = File::create(output).with_context(|| format!("failed to create {output}"))?;
    let mut sink = BufWriter::new(out);

    let bar = progress.then(|| {
        let bar = ProgressBar::new(candidates.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("static template is valid"),
        );
        bar
    });

    for path in candidates {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("{} has a non-UTF-8 file name", path.display()))?
            .to_string();
        let len = fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

        pack_entry(PackSource::new(name.clone(), len, file), &mut sink, config)
            .with_context(|| format!("failed to pack {name}"))?;

        info!("Packed {} ({} bytes)", name, len);
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    sink.flush().context("failed to flush archive")?;
    Ok(())
}
