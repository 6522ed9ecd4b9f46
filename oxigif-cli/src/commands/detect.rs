//! Detect command implementation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn cmd_detect(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut magic = Vec::with_capacity(6);
    File::open(file)?.take(6).read_to_end(&mut magic)?;

    println!("File: {}", file.display());
    println!("Magic bytes: {:02X?}", magic);
    if oxigif::identify(&magic) {
        let version = oxigif::GifVersion::from_signature(&magic)
            .map(|v| v.name())
            .unwrap_or("GIF");
        println!("Format: {}", version);
    } else {
        println!("Format: not a GIF");
    }

    Ok(())
}
