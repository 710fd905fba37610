extern crate fontawesome_glyphs;

use fontawesome_glyphs::render::{
    font_size_for, render_icon, FONT_ASPECT_RATIO,
};
use fontawesome_glyphs::{
    AssetLocator, FontHost, FontRegistrar, GlyphBitmap, GlyphRasterizer,
    Icon, IconStyle, LineMetrics, Rgba, FONT_AWESOME_FAMILY,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

//===========================================================================//

// Draws every glyph as a solid square half an em wide, and remembers the
// sizes it was asked to draw at.
struct BlockFace {
    sizes: Arc<Mutex<Vec<f32>>>,
}

impl GlyphRasterizer for BlockFace {
    fn has_glyph(&self, glyph: char) -> bool {
        Icon::ALL.iter().any(|icon| icon.glyph() == glyph)
    }

    fn line_metrics(&self, px: f32) -> LineMetrics {
        LineMetrics { ascent: 0.75 * px, descent: -0.25 * px }
    }

    fn rasterize(&self, _glyph: char, px: f32) -> GlyphBitmap {
        self.sizes.lock().unwrap().push(px);
        let side = (px / 2.0).round() as usize;
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

// A font manager that counts registrations, and is slow to register so that
// racing callers overlap.
#[derive(Default)]
struct CountingHost {
    registered: Mutex<bool>,
    registrations: AtomicUsize,
    sizes: Arc<Mutex<Vec<f32>>>,
}

impl FontHost for CountingHost {
    fn family_members(&self, family: &str) -> Vec<String> {
        if family == FONT_AWESOME_FAMILY && *self.registered.lock().unwrap() {
            vec!["FontAwesome".to_string()]
        } else {
            Vec::new()
        }
    }

    fn register_font(&self, family: &str, data: Vec<u8>) -> io::Result<()> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        if data != family.as_bytes() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "bad font"));
        }
        *self.registered.lock().unwrap() = true;
        Ok(())
    }

    fn face(&self, family: &str) -> io::Result<Arc<dyn GlyphRasterizer>> {
        if self.family_members(family).is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no family"));
        }
        Ok(Arc::new(BlockFace { sizes: self.sizes.clone() }))
    }
}

fn registrar(name: &str) -> FontRegistrar<CountingHost> {
    let dir = std::env::temp_dir().join(format!(
        "fontawesome-render-{}-{}",
        std::process::id(),
        name
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("FontAwesome.otf"), b"FontAwesome").unwrap();
    let locator = AssetLocator::empty().with_dir(dir);
    FontRegistrar::new(CountingHost::default(), locator)
}

//===========================================================================//

#[test]
fn concurrent_first_use_registers_once() {
    let registrar = Arc::new(registrar("concurrent"));
    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));
    let handles: Vec<_> = (0..num_threads)
        .map(|index| {
            let registrar = registrar.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let size = 12.0 + index as f32;
                let font =
                    registrar.try_font(FONT_AWESOME_FAMILY, size).unwrap();
                assert_eq!(font.size(), size);
                assert!(font.has_glyph(Icon::Github.glyph()));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registrar.host().registrations.load(Ordering::SeqCst), 1);
    assert!(registrar.is_registered(FONT_AWESOME_FAMILY));
    assert_eq!(registrar.family_members(FONT_AWESOME_FAMILY).len(), 1);
}

#[test]
fn fonts_report_requested_sizes() {
    let registrar = registrar("sizes");
    let small = registrar.font(FONT_AWESOME_FAMILY, 12.0);
    let large = registrar.font(FONT_AWESOME_FAMILY, 48.0);
    let again = registrar.font(FONT_AWESOME_FAMILY, 48.0);
    assert_eq!(small.size(), 12.0);
    assert_eq!(large.size(), 48.0);
    assert_eq!(again.size(), 48.0);
    assert_eq!(large.with_size(6.0).size(), 6.0);
    assert_eq!(registrar.host().registrations.load(Ordering::SeqCst), 1);
}

#[test]
fn image_has_requested_size() {
    let registrar = registrar("size");
    let style = IconStyle::new(Rgba::BLACK);
    for &(width, height) in [(1, 1), (16, 16), (90, 20), (13, 70)].iter() {
        let image =
            render_icon(&registrar, Icon::Star, &style, width, height).unwrap();
        assert_eq!((image.width(), image.height()), (width, height));
        assert_eq!(image.rgba_data().len(), (width * height * 4) as usize);
    }
}

#[test]
fn image_colors() {
    let registrar = registrar("colors");
    let foreground = Rgba::rgb(200, 10, 10);
    let background = Rgba::rgb(10, 10, 200);
    let style = IconStyle::new(foreground).with_background(background);
    let image = render_icon(&registrar, Icon::Heart, &style, 90, 70).unwrap();
    // 90 / 1.28571429 = 70, so the glyph block is 35 pixels wide.
    assert_eq!(font_size_for(90, 70).round(), 70.0);
    assert_eq!(image.pixel(0, 0), background);
    assert_eq!(image.pixel(89, 69), background);
    assert_eq!(image.pixel(45, 35), foreground);
    assert!(!image.has_alpha());
}

#[test]
fn glyph_is_drawn_at_fitted_size() {
    let registrar = registrar("fitted");
    let style = IconStyle::default();
    for &(width, height) in [(90, 20), (13, 70), (64, 64), (1, 1)].iter() {
        render_icon(&registrar, Icon::Star, &style, width, height).unwrap();
        let size = *registrar.host().sizes.lock().unwrap().last().unwrap();
        assert_eq!(size, font_size_for(width, height));
        assert!(size <= height as f32);
        assert!(size <= width as f32 / FONT_ASPECT_RATIO);
    }
}

#[test]
fn transparent_background_by_default() {
    let registrar = registrar("transparent");
    let style = IconStyle::new(Rgba::WHITE);
    let image = render_icon(&registrar, Icon::Cog, &style, 32, 32).unwrap();
    assert_eq!(image.pixel(0, 0), Rgba::TRANSPARENT);
    assert_eq!(image.pixel(16, 16), Rgba::WHITE);
}

#[test]
fn missing_font_fails_to_render() {
    let registrar =
        FontRegistrar::new(CountingHost::default(), AssetLocator::empty());
    let style = IconStyle::default();
    let error =
        render_icon(&registrar, Icon::Star, &style, 16, 16).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::NotFound);
    assert_eq!(registrar.host().registrations.load(Ordering::SeqCst), 0);
}

#[test]
fn asset_dir_is_found_through_bundle() {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "fontawesome-render-{}-bundle",
        std::process::id()
    ));
    let bundle = dir.join(fontawesome_glyphs::BUNDLE_SUBDIR);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&bundle).unwrap();
    fs::write(bundle.join("FontAwesome.otf"), b"FontAwesome").unwrap();
    let registrar = FontRegistrar::new(
        CountingHost::default(),
        AssetLocator::empty().with_dir(&dir),
    );
    assert!(registrar.try_font(FONT_AWESOME_FAMILY, 20.0).is_ok());
}

//===========================================================================//
