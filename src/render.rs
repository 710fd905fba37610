//! Rasterizing icons into images.

use crate::color::Rgba;
use crate::font::IconFont;
use crate::host::FontHost;
use crate::icon::Icon;
use crate::image::IconImage;
use crate::registrar::FontRegistrar;
use crate::FONT_AWESOME_FAMILY;
use std::io;

//===========================================================================//

/// Width-to-height ratio of a FontAwesome glyph box, from the font's fixed
/// width icon metrics.
pub const FONT_ASPECT_RATIO: f32 = 1.28571429;

//===========================================================================//

/// Colors used to render an icon.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IconStyle {
    /// Color of the glyph itself.
    pub foreground: Rgba,
    /// Color filling the rest of the image.
    pub background: Rgba,
}

impl IconStyle {
    /// Creates a style with the given glyph color on a transparent
    /// background.
    pub fn new(foreground: Rgba) -> IconStyle {
        IconStyle { foreground, background: Rgba::TRANSPARENT }
    }

    /// Returns this style with a different background color.
    pub fn with_background(self, background: Rgba) -> IconStyle {
        IconStyle { background, ..self }
    }
}

impl Default for IconStyle {
    fn default() -> IconStyle {
        IconStyle::new(Rgba::BLACK)
    }
}

//===========================================================================//

/// Returns the largest font size whose glyph box fits in a `width` by
/// `height` image without distortion.
pub fn font_size_for(width: u32, height: u32) -> f32 {
    (width as f32 / FONT_ASPECT_RATIO).min(height as f32)
}

/// Renders `icon` into a new `width` by `height` image, registering the
/// FontAwesome font with `registrar` if needed.  Panics if either dimension
/// is zero.
pub fn render_icon<H: FontHost>(
    registrar: &FontRegistrar<H>,
    icon: Icon,
    style: &IconStyle,
    width: u32,
    height: u32,
) -> io::Result<IconImage> {
    let mut image = IconImage::filled(width, height, style.background);
    let font =
        registrar.try_font(FONT_AWESOME_FAMILY, font_size_for(width, height))?;
    draw_glyph(&mut image, &font, icon.glyph(), style.foreground);
    Ok(image)
}

/// Draws `glyph` centered in `image`.  The glyph is centered horizontally on
/// its advance and vertically on the font's line box.
pub(crate) fn draw_glyph(
    image: &mut IconImage,
    font: &IconFont,
    glyph: char,
    color: Rgba,
) {
    let bitmap = font.rasterize(glyph);
    let metrics = font.line_metrics();
    let origin = (image.width() as f32 - bitmap.advance_width) / 2.0;
    let baseline =
        (image.height() as f32 - metrics.height()) / 2.0 + metrics.ascent;
    let left = (origin + bitmap.xmin as f32).round() as i64;
    let top = (baseline - (bitmap.ymin + bitmap.height as i32) as f32).round()
        as i64;
    for row in 0..bitmap.height {
        for col in 0..bitmap.width {
            let coverage = bitmap.coverage_at(col, row);
            if coverage == 0 {
                continue;
            }
            image.blend_pixel(
                left + col as i64,
                top + row as i64,
                color.with_coverage(coverage),
            );
        }
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{draw_glyph, font_size_for, FONT_ASPECT_RATIO};
    use crate::color::Rgba;
    use crate::font::IconFont;
    use crate::glyph::{GlyphBitmap, GlyphRasterizer, LineMetrics};
    use crate::image::IconImage;
    use std::sync::Arc;

    // Every glyph is a solid square one em wide, sitting on the baseline.
    struct SquareFace;

    impl GlyphRasterizer for SquareFace {
        fn has_glyph(&self, _glyph: char) -> bool {
            true
        }

        fn line_metrics(&self, px: f32) -> LineMetrics {
            LineMetrics { ascent: px.round(), descent: 0.0 }
        }

        fn rasterize(&self, _glyph: char, px: f32) -> GlyphBitmap {
            let side = px.round() as usize;
            GlyphBitmap {
                width: side,
                height: side,
                xmin: 0,
                ymin: 0,
                advance_width: side as f32,
                coverage: vec![u8::MAX; side * side],
            }
        }
    }

    #[test]
    fn font_size_fits_the_box() {
        assert_eq!(font_size_for(90, 100), 90.0 / FONT_ASPECT_RATIO);
        assert_eq!(font_size_for(200, 30), 30.0);
        for &(width, height) in [(1, 1), (16, 16), (64, 20), (7, 300)].iter() {
            let size = font_size_for(width, height);
            assert!(size <= height as f32);
            assert!(size <= width as f32 / FONT_ASPECT_RATIO);
        }
    }

    #[test]
    fn glyph_is_centered() {
        let font = IconFont::new("Square", 10.0, Arc::new(SquareFace));
        let mut image = IconImage::filled(20, 20, Rgba::TRANSPARENT);
        draw_glyph(&mut image, &font, 'x', Rgba::BLACK);
        for y in 0..20 {
            for x in 0..20 {
                let inside = (5..15).contains(&x) && (5..15).contains(&y);
                let expected =
                    if inside { Rgba::BLACK } else { Rgba::TRANSPARENT };
                assert_eq!(image.pixel(x, y), expected, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn oversized_glyph_is_clipped() {
        let font = IconFont::new("Square", 30.0, Arc::new(SquareFace));
        let mut image = IconImage::filled(10, 10, Rgba::WHITE);
        draw_glyph(&mut image, &font, 'x', Rgba::rgb(0, 0, 255));
        assert_eq!(image.width(), 10);
        assert_eq!(image.pixel(0, 0), Rgba::rgb(0, 0, 255));
        assert_eq!(image.pixel(9, 9), Rgba::rgb(0, 0, 255));
    }
}

//===========================================================================//
