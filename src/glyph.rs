//===========================================================================//

/// Vertical metrics of a font's line box at some pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    /// Distance from the baseline to the top of the line box (positive).
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box (zero or
    /// negative).
    pub descent: f32,
}

impl LineMetrics {
    /// Returns the total height of the line box.
    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}

//===========================================================================//

/// An 8-bit coverage bitmap for a single glyph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphBitmap {
    /// Width of the bitmap, in pixels.
    pub width: usize,
    /// Height of the bitmap, in pixels.
    pub height: usize,
    /// Offset from the pen position to the left edge of the bitmap.
    pub xmin: i32,
    /// Offset from the baseline to the bottom edge of the bitmap (positive
    /// is up).
    pub ymin: i32,
    /// Horizontal advance of the glyph.
    pub advance_width: f32,
    /// Row-major coverage values, top row first.
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// Returns the coverage at the given position within the bitmap.
    pub fn coverage_at(&self, x: usize, y: usize) -> u8 {
        self.coverage[y * self.width + x]
    }
}

//===========================================================================//

/// A loaded font face that can turn characters into coverage bitmaps.
pub trait GlyphRasterizer: Send + Sync {
    /// Returns true if the face has a glyph for `glyph`.
    fn has_glyph(&self, glyph: char) -> bool;

    /// Returns the line box metrics at `px` pixels per em.
    fn line_metrics(&self, px: f32) -> LineMetrics;

    /// Rasterizes `glyph` at `px` pixels per em.
    fn rasterize(&self, glyph: char, px: f32) -> GlyphBitmap;
}

impl GlyphRasterizer for fontdue::Font {
    fn has_glyph(&self, glyph: char) -> bool {
        self.lookup_glyph_index(glyph) != 0
    }

    fn line_metrics(&self, px: f32) -> LineMetrics {
        match self.horizontal_line_metrics(px) {
            Some(metrics) => LineMetrics {
                ascent: metrics.ascent,
                descent: metrics.descent,
            },
            // Fonts without a horizontal header still get a sane line box.
            None => LineMetrics { ascent: px, descent: 0.0 },
        }
    }

    fn rasterize(&self, glyph: char, px: f32) -> GlyphBitmap {
        let (metrics, coverage) = fontdue::Font::rasterize(self, glyph, px);
        GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            advance_width: metrics.advance_width,
            coverage,
        }
    }
}

//===========================================================================//


//===========================================================================//
