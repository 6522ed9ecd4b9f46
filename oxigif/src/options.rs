//! Decoder configuration.

/// How the graphic control transparent index shows up in RGBA output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransparencyMode {
    /// Matching pixels keep their table color with alpha 0.
    #[default]
    Alpha,
    /// Matching pixels stay opaque; the index is only reported on the frame.
    Opaque,
}

/// What to do when an image's code stream is malformed.
///
/// Applies to corrupt codes, dictionary overflow and an invalid minimum
/// code size. Reads past the end of the buffer always fail the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnomalyPolicy {
    /// Keep the frame with the pixels produced so far, marked incomplete.
    #[default]
    KeepPartial,
    /// Drop the frame and continue with the next block.
    DiscardFrame,
    /// Fail the whole decode with the anomaly.
    Abort,
}

/// Decoder configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Alpha handling for the transparent index.
    pub transparency: TransparencyMode,
    /// Handling of malformed code streams.
    pub anomalies: AnomalyPolicy,
    /// Largest `width * height` accepted for a single image.
    pub max_frame_pixels: usize,
    /// Largest pixel count summed over every kept frame.
    pub max_total_pixels: usize,
}

impl DecodeOptions {
    /// Default pixel limit: 64 Mi pixels (256 MiB of RGBA).
    pub const DEFAULT_MAX_FRAME_PIXELS: usize = 1 << 26;

    /// Default budget over all frames: 128 Mi pixels (512 MiB of RGBA).
    pub const DEFAULT_MAX_TOTAL_PIXELS: usize = 1 << 27;

    /// Alpha transparency, partial frames kept.
    pub const DEFAULT: Self = Self {
        transparency: TransparencyMode::Alpha,
        anomalies: AnomalyPolicy::KeepPartial,
        max_frame_pixels: Self::DEFAULT_MAX_FRAME_PIXELS,
        max_total_pixels: Self::DEFAULT_MAX_TOTAL_PIXELS,
    };

    /// Alpha transparency, any malformed code stream fails the decode.
    pub const STRICT: Self = Self {
        transparency: TransparencyMode::Alpha,
        anomalies: AnomalyPolicy::Abort,
        max_frame_pixels: Self::DEFAULT_MAX_FRAME_PIXELS,
        max_total_pixels: Self::DEFAULT_MAX_TOTAL_PIXELS,
    };

    /// Opaque output, partial frames kept.
    pub const LENIENT: Self = Self {
        transparency: TransparencyMode::Opaque,
        anomalies: AnomalyPolicy::KeepPartial,
        max_frame_pixels: Self::DEFAULT_MAX_FRAME_PIXELS,
        max_total_pixels: Self::DEFAULT_MAX_TOTAL_PIXELS,
    };

    /// Create the default configuration.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the transparency mode.
    pub fn with_transparency(mut self, transparency: TransparencyMode) -> Self {
        self.transparency = transparency;
        self
    }

    /// Set the anomaly policy.
    pub fn with_anomalies(mut self, anomalies: AnomalyPolicy) -> Self {
        self.anomalies = anomalies;
        self
    }

    /// Set the per-image pixel limit.
    pub fn with_max_frame_pixels(mut self, max_frame_pixels: usize) -> Self {
        self.max_frame_pixels = max_frame_pixels;
        self
    }

    /// Set the pixel limit summed over all frames.
    pub fn with_max_total_pixels(mut self, max_total_pixels: usize) -> Self {
        self.max_total_pixels = max_total_pixels;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(DecodeOptions::default(), DecodeOptions::DEFAULT);
        assert_eq!(DecodeOptions::STRICT.anomalies, AnomalyPolicy::Abort);
        assert_eq!(DecodeOptions::LENIENT.transparency, TransparencyMode::Opaque);
        assert_eq!(DecodeOptions::DEFAULT.max_frame_pixels, 1 << 26);
        assert_eq!(DecodeOptions::STRICT.max_total_pixels, 1 << 27);
        // Four 8000x8000 frames must not fit the default budget
        let frames = 4usize;
        assert!(frames * 8000 * 8000 > DecodeOptions::DEFAULT.max_total_pixels);
    }

    #[test]
    fn test_builder() {
        let options = DecodeOptions::new()
            .with_anomalies(AnomalyPolicy::DiscardFrame)
            .with_max_frame_pixels(16)
            .with_max_total_pixels(32);
        assert_eq!(options.anomalies, AnomalyPolicy::DiscardFrame);
        assert_eq!(options.max_frame_pixels, 16);
        assert_eq!(options.max_total_pixels, 32);
        assert_eq!(options.transparency, TransparencyMode::Alpha);
    }
}
