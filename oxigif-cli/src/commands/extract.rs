//! Extract command implementation.

use oxigif::{AnomalyPolicy, DecodeOptions, Frame, TransparencyMode};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decode switches for extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Fail on malformed image data instead of keeping partial frames.
    pub strict: bool,
    /// Keep transparent pixels opaque.
    pub opaque: bool,
}

impl ExtractOptions {
    fn decode_options(self) -> DecodeOptions {
        let mut options = DecodeOptions::DEFAULT;
        if self.strict {
            options = options.with_anomalies(AnomalyPolicy::Abort);
        }
        if self.opaque {
            options = options.with_transparency(TransparencyMode::Opaque);
        }
        options
    }
}

pub fn cmd_extract(
    file: &Path,
    output: &Path,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let frames = oxigif::decode_with(&data, options.decode_options())?;

    fs::create_dir_all(output)?;
    for (i, frame) in frames.iter().enumerate() {
        let path = output.join(format!("frame_{:03}.pam", i));
        write_pam(&path, frame)?;
        let note = if frame.complete { "" } else { " (incomplete)" };
        println!(
            "  {} {}x{}{}",
            path.display(),
            frame.width,
            frame.height,
            note
        );
    }

    println!("Extracted {} frame(s)", frames.len());
    Ok(())
}

/// Write a frame as a `P7` portable arbitrary map with `RGB_ALPHA` tuples.
fn write_pam(path: &Path, frame: &Frame) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(
        out,
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        frame.width, frame.height
    )?;
    out.write_all(frame.rgba())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_options() {
        assert_eq!(ExtractOptions::default().decode_options(), DecodeOptions::DEFAULT);

        let strict = ExtractOptions {
            strict: true,
            opaque: true,
        }
        .decode_options();
        assert_eq!(strict.anomalies, AnomalyPolicy::Abort);
        assert_eq!(strict.transparency, TransparencyMode::Opaque);
    }

    #[test]
    fn test_pam_layout() {
        let frame = Frame::new(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let path = std::env::temp_dir().join(format!("oxigif_pam_{}.pam", std::process::id()));
        write_pam(&path, &frame).unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let header = b"P7\nWIDTH 1\nHEIGHT 2\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
