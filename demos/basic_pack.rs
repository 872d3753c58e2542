//! Basic packing example

use monopack_core::{
    encoder::{pack, PackSource},
    ArchiveConfig,
};
use std::io::Cursor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Monopack Basic Packing Example\n");

    let files: Vec<(&str, &[u8])> = vec![
        ("greeting.txt", b"hello from monopack\n"),
        ("numbers.txt", b"1 2 3 4 5\n"),
        ("empty.txt", b""),
    ];

    let sources: Vec<_> = files
        .iter()
        .map(|(name, content)| {
            PackSource::new(*name, content.len() as u64, Cursor::new(content.to_vec()))
        })
        .collect();

    let config = ArchiveConfig::default();
    let mut archive = Vec::new();
    let count = pack(sources, &mut archive, &config)?;

    std::fs::write("example_output.mpk", &archive)?;

    println!("Packed {} entries ({} bytes total)", count, archive.len());
    println!("Use 'monopack list --input example_output.mpk' to read it back");

    Ok(())
}
