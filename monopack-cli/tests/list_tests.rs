use std::fs::{self, File};
use std::io::Cursor;
use tempfile::tempdir;

use monopack_cli::commands::list;
use monopack_core::{
    encoder::{pack, PackSource},
    ArchiveConfig,
};

fn build_archive(files: &[(&str, &[u8])], config: &ArchiveConfig, path: &std::path::Path) {
    let sources: Vec<_> = files
        .iter()
        .map(|(name, content)| {
            PackSource::new(*name, content.len() as u64, Cursor::new(content.to_vec()))
        })
        .collect();
    let mut out = File::create(path).unwrap();
    pack(sources, &mut out, config).unwrap();
}

#[test]
fn list_valid_archive() {
    let td = tempdir().unwrap();
    let archive = td.path().join("in.mpk");
    let config = ArchiveConfig::default();

    build_archive(&[("a.txt", b"hi"), ("b.txt", b"yo!")], &config, &archive);

    list::execute(archive.to_str().unwrap(), &config, /*json*/ false).unwrap();
    list::execute(archive.to_str().unwrap(), &config, /*json*/ true).unwrap();
}

#[test]
fn list_detects_corruption_past_first_entry() {
    let td = tempdir().unwrap();
    let archive = td.path().join("in.mpk");
    let config = ArchiveConfig::default();

    build_archive(&[("a.txt", b"hi"), ("b.txt", b"yo!")], &config, &archive);

    // Chop into the second record; listing must surface the truncation even
    // though the first entry is intact
    let bytes = fs::read(&archive).unwrap();
    fs::write(&archive, &bytes[..config.record_width + 2 + 10]).unwrap();

    let result = list::execute(archive.to_str().unwrap(), &config, false);
    assert!(result.is_err());
}

#[test]
fn list_missing_file_errors() {
    let result = list::execute("/nonexistent/archive.mpk", &ArchiveConfig::default(), false);
    assert!(result.is_err());
}
