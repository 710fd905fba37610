//! Registration of packaged fonts with a font host.

use crate::asset::AssetLocator;
use crate::font::IconFont;
use crate::host::{FontHost, SystemFontHost};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

//===========================================================================//

/// Makes packaged fonts available through a `FontHost`, registering each
/// family at most once.
pub struct FontRegistrar<H: FontHost = SystemFontHost> {
    host: H,
    locator: AssetLocator,
    // One guard per family; `true` once that family is known to the host.
    families: Mutex<HashMap<String, Arc<Mutex<bool>>>>,
}

impl<H: FontHost> FontRegistrar<H> {
    /// Creates a registrar that loads assets found by `locator` into `host`.
    pub fn new(host: H, locator: AssetLocator) -> FontRegistrar<H> {
        FontRegistrar { host, locator, families: Mutex::new(HashMap::new()) }
    }

    /// Returns the host that fonts are registered with.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the locator used to find font assets.
    pub fn locator(&self) -> &AssetLocator {
        &self.locator
    }

    /// Returns the names of every face the host has under `family`.
    pub fn family_members(&self, family: &str) -> Vec<String> {
        self.host.family_members(family)
    }

    /// Returns true if this registrar has made `family` available.
    pub fn is_registered(&self, family: &str) -> bool {
        let guard = {
            let families =
                self.families.lock().unwrap_or_else(PoisonError::into_inner);
            match families.get(family) {
                Some(guard) => guard.clone(),
                None => return false,
            }
        };
        let registered = *guard.lock().unwrap_or_else(PoisonError::into_inner);
        registered
    }

    /// Makes sure `family` is available from the host, loading and
    /// registering its packaged asset if the host doesn't have it yet.
    /// Concurrent callers for the same family wait for a single
    /// registration.
    pub fn ensure_registered(&self, family: &str) -> io::Result<()> {
        let guard = {
            let mut families =
                self.families.lock().unwrap_or_else(PoisonError::into_inner);
            families.entry(family.to_string()).or_default().clone()
        };
        let mut registered =
            guard.lock().unwrap_or_else(PoisonError::into_inner);
        if *registered {
            return Ok(());
        }
        if !self.host.family_members(family).is_empty() {
            debug!("Font family {:?} is already available", family);
            *registered = true;
            return Ok(());
        }
        match self.register(family) {
            Ok(()) => {
                *registered = true;
                Ok(())
            }
            Err(error) => {
                warn!("Failed to register font family {:?}: {}", family, error);
                Err(error)
            }
        }
    }

    fn register(&self, family: &str) -> io::Result<()> {
        let (path, data) = self.locator.load(family)?;
        let num_bytes = data.len();
        if let Err(error) = self.host.register_font(family, data) {
            return Err(io::Error::new(
                error.kind(),
                format!("Can't register {}: {}", path.display(), error),
            ));
        }
        info!(
            "Registered font family {:?} from {} ({} bytes)",
            family,
            path.display(),
            num_bytes
        );
        Ok(())
    }

    /// Returns `family` at `size` pixels per em, registering the family
    /// first if needed.  Panics if `size` is not a positive, finite number.
    pub fn try_font(&self, family: &str, size: f32) -> io::Result<IconFont> {
        if !(size.is_finite() && size > 0.0) {
            panic!("Invalid font size (was {}, but must be positive)", size);
        }
        self.ensure_registered(family)?;
        let face = self.host.face(family)?;
        Ok(IconFont::new(family, size, face))
    }

    /// Like `try_font`, but panics if the font can't be made available.  A
    /// missing or broken font asset is a packaging error, not something to
    /// recover from.
    pub fn font(&self, family: &str, size: f32) -> IconFont {
        match self.try_font(family, size) {
            Ok(font) => font,
            Err(error) => {
                panic!("Font family {:?} is unavailable: {}", family, error)
            }
        }
    }
}

//===========================================================================//

/// Returns the process-wide registrar.  It is backed by the fonts installed
/// on the system, and finds packaged assets with `AssetLocator::from_env`.
pub fn global() -> &'static FontRegistrar {
    static REGISTRAR: OnceLock<FontRegistrar> = OnceLock::new();
    REGISTRAR.get_or_init(|| {
        FontRegistrar::new(
            SystemFontHost::with_system_fonts(),
            AssetLocator::from_env(),
        )
    })
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::FontRegistrar;
    use crate::asset::AssetLocator;
    use crate::glyph::{GlyphBitmap, GlyphRasterizer, LineMetrics};
    use crate::host::FontHost;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct NullFace;

    impl GlyphRasterizer for NullFace {
        fn has_glyph(&self, _glyph: char) -> bool {
            false
        }

        fn line_metrics(&self, px: f32) -> LineMetrics {
            LineMetrics { ascent: px, descent: 0.0 }
        }

        fn rasterize(&self, _glyph: char, _px: f32) -> GlyphBitmap {
            GlyphBitmap::default()
        }
    }

    // Accepts data whose text is a family name, and registers that family.
    #[derive(Default)]
    struct NameHost {
        families: Mutex<Vec<String>>,
        registrations: AtomicUsize,
    }

    impl FontHost for NameHost {
        fn family_members(&self, family: &str) -> Vec<String> {
            let families = self.families.lock().unwrap();
            families.iter().filter(|name| *name == family).cloned().collect()
        }

        fn register_font(&self, family: &str, data: Vec<u8>) -> io::Result<()> {
            self.registrations.fetch_add(1, Ordering::SeqCst);
            match String::from_utf8(data) {
                Ok(ref name) if name == "garbage" => invalid_data!("bad font"),
                Ok(name) if name == family => {
                    self.families.lock().unwrap().push(name);
                    Ok(())
                }
                Ok(name) => invalid_data!("{:?} does not provide family", name),
                Err(_) => invalid_data!("bad font"),
            }
        }

        fn face(&self, family: &str) -> io::Result<Arc<dyn GlyphRasterizer>> {
            if self.family_members(family).is_empty() {
                not_found!("no family {:?}", family);
            }
            Ok(Arc::new(NullFace))
        }
    }

    fn asset_dir(name: &str, contents: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "fontawesome-registrar-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("FontAwesome.otf"), contents).unwrap();
        dir
    }

    #[test]
    fn registers_once() {
        let dir = asset_dir("once", b"FontAwesome");
        let registrar = FontRegistrar::new(
            NameHost::default(),
            AssetLocator::empty().with_dir(&dir),
        );
        assert!(!registrar.is_registered("FontAwesome"));
        let small = registrar.try_font("FontAwesome", 12.0).unwrap();
        let large = registrar.try_font("FontAwesome", 48.0).unwrap();
        let again = registrar.try_font("FontAwesome", 12.0).unwrap();
        assert_eq!(small.size(), 12.0);
        assert_eq!(large.size(), 48.0);
        assert_eq!(again.size(), 12.0);
        assert_eq!(small.family(), "FontAwesome");
        assert!(registrar.is_registered("FontAwesome"));
        assert_eq!(registrar.family_members("FontAwesome").len(), 1);
        assert_eq!(registrar.host().registrations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn skips_registration_for_known_family() {
        let host = NameHost::default();
        host.families.lock().unwrap().push("FontAwesome".to_string());
        let registrar = FontRegistrar::new(host, AssetLocator::empty());
        registrar.try_font("FontAwesome", 16.0).unwrap();
        assert!(registrar.is_registered("FontAwesome"));
        assert_eq!(registrar.host().registrations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn missing_asset_is_not_found() {
        let registrar =
            FontRegistrar::new(NameHost::default(), AssetLocator::empty());
        let error = registrar.try_font("FontAwesome", 16.0).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
        assert!(!registrar.is_registered("FontAwesome"));
    }

    #[test]
    fn malformed_asset_is_invalid_data() {
        let dir = asset_dir("garbage", b"garbage");
        let registrar = FontRegistrar::new(
            NameHost::default(),
            AssetLocator::empty().with_dir(&dir),
        );
        let error = registrar.try_font("FontAwesome", 16.0).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
        assert!(error.to_string().contains("FontAwesome.otf"));
    }

    #[test]
    fn asset_for_wrong_family_is_invalid_data() {
        let dir = asset_dir("wrong", b"SomethingElse");
        let registrar = FontRegistrar::new(
            NameHost::default(),
            AssetLocator::empty().with_dir(&dir),
        );
        for _ in 0..2 {
            let error = registrar.try_font("FontAwesome", 16.0).unwrap_err();
            assert_eq!(error.kind(), io::ErrorKind::InvalidData);
            assert!(error.to_string().contains("does not provide"));
            assert!(error.to_string().contains("FontAwesome.otf"));
        }
        assert!(!registrar.is_registered("FontAwesome"));
        assert!(registrar.host().families.lock().unwrap().is_empty());
        assert_eq!(registrar.host().registrations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failed_registration_can_be_retried() {
        let dir = asset_dir("retry", b"garbage");
        let registrar = FontRegistrar::new(
            NameHost::default(),
            AssetLocator::empty().with_dir(&dir),
        );
        assert!(registrar.try_font("FontAwesome", 16.0).is_err());
        fs::write(dir.join("FontAwesome.otf"), b"FontAwesome").unwrap();
        assert!(registrar.try_font("FontAwesome", 16.0).is_ok());
        assert_eq!(registrar.host().registrations.load(Ordering::SeqCst), 2);
    }

    #[test]
    #[should_panic(expected = "is unavailable")]
    fn font_panics_on_missing_asset() {
        let registrar =
            FontRegistrar::new(NameHost::default(), AssetLocator::empty());
        registrar.font("FontAwesome", 16.0);
    }

    #[test]
    #[should_panic(expected = "Invalid font size")]
    fn font_panics_on_zero_size() {
        let registrar =
            FontRegistrar::new(NameHost::default(), AssetLocator::empty());
        let _ = registrar.try_font("FontAwesome", 0.0);
    }
}

//===========================================================================//
