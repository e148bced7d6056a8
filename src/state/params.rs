/// Transform parameters for the optimized image
///
/// These values describe the resize/transcode the gateway is asked to
/// perform. They are embedded verbatim in the derived gateway URL; the
/// gateway is the authority on what it accepts, so nothing here clamps or
/// re-validates ranges.

use std::fmt;

/// Output format the gateway should transcode to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    WebP,
    Jpeg,
    Png,
}

impl OutputFormat {
    /// All selectable formats, in display order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::WebP, OutputFormat::Jpeg, OutputFormat::Png];

    /// The value the gateway expects in the `img-format` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All transform parameters for one optimization request
///
/// Width and height of 0 mean "unset" and are passed through as-is.
/// Quality is nominally 1-100 but is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformParams {
    /// Target width in pixels (0 = unset)
    pub width: u32,
    /// Target height in pixels (0 = unset)
    pub height: u32,
    /// Compression quality, nominally 1-100
    pub quality: u32,
    /// Target encoding
    pub format: OutputFormat,
}

impl Default for TransformParams {
    fn default() -> Self {
        TransformParams {
            width: 0,
            height: 0,
            quality: 80,
            format: OutputFormat::WebP,
        }
    }
}

/// Parse the text of a numeric input field.
///
/// An empty field reads as 0; anything that is not a non-negative integer
/// is rejected so the caller keeps the previous value.
pub fn parse_numeric_input(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TransformParams::default();
        assert_eq!(params.width, 0);
        assert_eq!(params.height, 0);
        assert_eq!(params.quality, 80);
        assert_eq!(params.format, OutputFormat::WebP);
    }

    #[test]
    fn test_format_query_values() {
        assert_eq!(OutputFormat::WebP.to_string(), "webp");
        assert_eq!(OutputFormat::Jpeg.to_string(), "jpeg");
        assert_eq!(OutputFormat::Png.to_string(), "png");
    }

    #[test]
    fn test_numeric_input_parsing() {
        assert_eq!(parse_numeric_input(""), Some(0));
        assert_eq!(parse_numeric_input("300"), Some(300));
        assert_eq!(parse_numeric_input(" 42 "), Some(42));
        // Garbage and negatives are rejected; the field keeps its value
        assert_eq!(parse_numeric_input("12a"), None);
        assert_eq!(parse_numeric_input("-5"), None);
    }
}
