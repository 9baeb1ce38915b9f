use std::fmt;

use super::FontMetrics;

/// Error returned by [`FontSystem::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// [`FontMetrics`] backed by a TrueType / OpenType font.
///
/// Widths are the sum of horizontal advances at `px` size, rounded up to the
/// next whole GUI pixel so centered text never overhangs its box.
pub struct FontSystem {
    font: fontdue::Font,
    px: f32,
    line_height: i32,
}

impl FontSystem {
    /// Parses a font from raw bytes, measuring at `px` pixels per em.
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let px = px.max(1.0);
        let line_height = font
            .horizontal_line_metrics(px)
            .map(|m| m.new_line_size.ceil() as i32)
            .unwrap_or_else(|| (px * 1.2).ceil() as i32);
        log::debug!("font loaded: {} glyphs at {px}px", font.glyph_count());
        Ok(Self { font, px, line_height })
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }
}

impl FontMetrics for FontSystem {
    fn string_width(&self, text: &str) -> i32 {
        let w: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, self.px).advance_width)
            .sum();
        w.ceil() as i32
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = FontSystem::from_bytes(b"definitely not a font", 16.0).err();
        assert!(err.is_some_and(|e| e.to_string().starts_with("font load error: ")));
    }
}
