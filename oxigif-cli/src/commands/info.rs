//! Info command implementation.

use oxigif::{DecodedGif, Frame, GifDecoder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON serializable frame metadata.
#[derive(Debug, Serialize, Deserialize)]
struct FrameJson {
    index: usize,
    left: u16,
    top: u16,
    width: u16,
    height: u16,
    delay_cs: u16,
    disposal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    transparent_index: Option<u8>,
    interlaced: bool,
    complete: bool,
}

impl FrameJson {
    fn from_frame(index: usize, frame: &Frame) -> Self {
        Self {
            index,
            left: frame.left,
            top: frame.top,
            width: frame.width,
            height: frame.height,
            delay_cs: frame.delay,
            disposal: frame.disposal.name().to_string(),
            transparent_index: frame.transparent_index,
            interlaced: frame.interlaced,
            complete: frame.complete,
        }
    }
}

/// JSON output for a decoded file.
#[derive(Debug, Serialize, Deserialize)]
struct GifInfoJson {
    file: String,
    size: u64,
    version: String,
    width: u16,
    height: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    global_table_entries: Option<usize>,
    background_index: u8,
    aspect_ratio: u8,
    frames: Vec<FrameJson>,
}

impl GifInfoJson {
    fn new(file: &Path, size: u64, gif: &DecodedGif) -> Self {
        Self {
            file: file.display().to_string(),
            size,
            version: gif.version.to_string(),
            width: gif.screen.width,
            height: gif.screen.height,
            global_table_entries: gif.global_table.as_ref().map(|t| t.len()),
            background_index: gif.screen.background_index,
            aspect_ratio: gif.screen.aspect_ratio,
            frames: gif
                .frames
                .iter()
                .enumerate()
                .map(|(i, f)| FrameJson::from_frame(i, f))
                .collect(),
        }
    }
}

pub fn cmd_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let gif = GifDecoder::default().decode(&data)?;
    let info = GifInfoJson::new(file, data.len() as u64, &gif);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("GIF Information");
    println!("===============");
    println!("File: {}", info.file);
    println!("Version: {}", info.version);
    println!("Size: {} bytes", info.size);
    println!("Screen: {}x{}", info.width, info.height);
    match info.global_table_entries {
        Some(n) => println!("Global color table: {} entries", n),
        None => println!("Global color table: none"),
    }
    println!("Background index: {}", info.background_index);
    println!();
    println!("Frames: {}", info.frames.len());
    println!(
        "{:>5} {:>11} {:>11} {:>7} {:>18} {:>5}  Flags",
        "#", "Size", "Offset", "Delay", "Disposal", "Trans",
    );
    println!("{}", "-".repeat(72));
    for frame in &info.frames {
        let transparent = frame
            .transparent_index
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut flags = Vec::new();
        if frame.interlaced {
            flags.push("interlaced");
        }
        if !frame.complete {
            flags.push("incomplete");
        }
        println!(
            "{:>5} {:>11} {:>11} {:>7} {:>18} {:>5}  {}",
            frame.index,
            format!("{}x{}", frame.width, frame.height),
            format!("+{}+{}", frame.left, frame.top),
            format!("{}cs", frame.delay_cs),
            frame.disposal,
            transparent,
            flags.join(",")
        );
    }

    Ok(())
}
