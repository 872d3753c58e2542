//! Pack a few files in memory, then unpack and print them

use monopack_core::{
    decoder::unpack,
    encoder::{pack, PackSource},
    ArchiveConfig,
};
use std::io::Cursor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Monopack Round-Trip Example\n");

    let files: Vec<(&str, &[u8])> = vec![
        ("a.txt", b"hi"),
        ("bee.txt", b"yo!"),
    ];

    let sources: Vec<_> = files
        .iter()
        .map(|(name, content)| {
            PackSource::new(*name, content.len() as u64, Cursor::new(content.to_vec()))
        })
        .collect();

    // Non-default geometry to show the config is honored end to end
    let config = ArchiveConfig::default().with_record_width(32).with_key(0x5A);

    let mut archive = Vec::new();
    pack(sources, &mut archive, &config)?;
    println!("Archive is {} bytes\n", archive.len());

    for entry in unpack(Cursor::new(archive), &config) {
        let entry = entry?;
        println!(
            "{} ({} bytes): {:?}",
            entry.record.name,
            entry.record.size,
            String::from_utf8_lossy(&entry.payload)
        );
    }

    Ok(())
}
