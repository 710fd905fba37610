//! A library for drawing FontAwesome icons.
//!
//! Icons are named by the [`Icon`] enum or by their legacy CSS codes (such as
//! `"fa-github"`).  Each icon corresponds to a single glyph in the
//! FontAwesome font, which is loaded from a packaged `FontAwesome.otf` file
//! and registered with an in-process font manager the first time it is
//! needed.
//!
//! ```no_run
//! use fontawesome_glyphs::{glyph_string_for_code, icon_image, Icon, Rgba};
//!
//! assert_eq!(Icon::Github.glyph_string(), "\u{f09b}");
//! assert_eq!(glyph_string_for_code("fa-github"),
//!            Some(Icon::Github.glyph_string()));
//!
//! let image = icon_image(Icon::Github, Rgba::BLACK, (64, 64), None);
//! let file = std::fs::File::create("github.png").unwrap();
//! image.write_png(file).unwrap();
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod asset;
mod color;
mod font;
mod glyph;
mod host;
mod icon;
mod image;
pub mod registrar;
pub mod render;
mod table;

pub use crate::asset::{AssetLocator, BUNDLE_SUBDIR, RESOURCE_DIR_ENV};
pub use crate::color::{ParseColorError, Rgba};
pub use crate::font::IconFont;
pub use crate::glyph::{GlyphBitmap, GlyphRasterizer, LineMetrics};
pub use crate::host::{FontHost, SystemFontHost};
pub use crate::icon::{
    codes, glyph_string, glyph_string_for_code, icon_for_code, Icon,
    UnknownIcon,
};
pub use crate::image::IconImage;
pub use crate::registrar::FontRegistrar;
pub use crate::render::{IconStyle, FONT_ASPECT_RATIO};

//===========================================================================//

/// The family name the FontAwesome font is registered under.
pub const FONT_AWESOME_FAMILY: &str = "FontAwesome";

/// Returns the FontAwesome font at `size` pixels per em, registering it with
/// the global registrar on first use.
///
/// Panics if the font asset can't be found or registered, or if `size` is
/// not positive.
pub fn font_awesome(size: f32) -> IconFont {
    registrar::global().font(FONT_AWESOME_FAMILY, size)
}

/// Renders `icon` in `color` into a new image of the given `(width, height)`,
/// on top of `background` (transparent if `None`).
///
/// Panics if the font asset can't be found or registered, or if either
/// dimension is zero.
pub fn icon_image(
    icon: Icon,
    color: Rgba,
    size: (u32, u32),
    background: Option<Rgba>,
) -> IconImage {
    let style = IconStyle {
        foreground: color,
        background: background.unwrap_or(Rgba::TRANSPARENT),
    };
    let (width, height) = size;
    match render::render_icon(registrar::global(), icon, &style, width, height)
    {
        Ok(image) => image,
        Err(error) => panic!(
            "Font family {:?} is unavailable: {}",
            FONT_AWESOME_FAMILY, error
        ),
    }
}

//===========================================================================//
