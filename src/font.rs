use crate::glyph::{GlyphBitmap, GlyphRasterizer, LineMetrics};
use std::fmt;
use std::sync::Arc;

//===========================================================================//

/// A registered font family at a specific pixel size.
///
/// Handles are cheap to clone; every handle for a family shares the same
/// parsed face.
#[derive(Clone)]
pub struct IconFont {
    family: String,
    size: f32,
    face: Arc<dyn GlyphRasterizer>,
}

impl IconFont {
    /// Creates a handle for `face` at `size` pixels per em.  Panics if `size`
    /// is not a positive, finite number.
    pub fn new(
        family: &str,
        size: f32,
        face: Arc<dyn GlyphRasterizer>,
    ) -> IconFont {
        if !(size.is_finite() && size > 0.0) {
            panic!("Invalid font size (was {}, but must be positive)", size);
        }
        IconFont { family: family.to_string(), size, face }
    }

    /// Returns the family name this font was requested under.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the size of this font, in pixels per em.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns a handle for the same face at a different size.
    pub fn with_size(&self, size: f32) -> IconFont {
        IconFont::new(&self.family, size, self.face.clone())
    }

    /// Returns true if the font can render `glyph`.
    pub fn has_glyph(&self, glyph: char) -> bool {
        self.face.has_glyph(glyph)
    }

    /// Returns the line box metrics at this font's size.
    pub fn line_metrics(&self) -> LineMetrics {
        self.face.line_metrics(self.size)
    }

    /// Rasterizes `glyph` at this font's size.
    pub fn rasterize(&self, glyph: char) -> GlyphBitmap {
        self.face.rasterize(glyph, self.size)
    }
}

impl fmt::Debug for IconFont {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("IconFont")
            .field("family", &self.family)
            .field("size", &self.size)
            .finish()
    }
}

//===========================================================================//
