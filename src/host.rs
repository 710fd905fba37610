use crate::glyph::GlyphRasterizer;
use log::debug;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

//===========================================================================//

/// The font manager that fonts are registered with and looked up from.
pub trait FontHost: Send + Sync {
    /// Returns the names of every face available under `family`.  An empty
    /// list means the family is unknown to the host.
    fn family_members(&self, family: &str) -> Vec<String>;

    /// Registers the font in `data` with the host, which must provide
    /// `family`.  Returns an `InvalidData` error, leaving the host
    /// unchanged, if the data is not a usable font or lacks that family.
    fn register_font(&self, family: &str, data: Vec<u8>) -> io::Result<()>;

    /// Returns the face for `family`, ready for rasterizing.
    fn face(&self, family: &str) -> io::Result<Arc<dyn GlyphRasterizer>>;
}

//===========================================================================//

/// A `FontHost` backed by an in-process `fontdb` database, with faces
/// rasterized by `fontdue`.
pub struct SystemFontHost {
    database: RwLock<fontdb::Database>,
    faces: Mutex<HashMap<String, Arc<fontdue::Font>>>,
}

impl SystemFontHost {
    /// Creates a host that knows no fonts.
    pub fn new() -> SystemFontHost {
        SystemFontHost::from_database(fontdb::Database::new())
    }

    /// Creates a host that knows every font installed on the system.
    pub fn with_system_fonts() -> SystemFontHost {
        let mut database = fontdb::Database::new();
        database.load_system_fonts();
        debug!("Loaded {} system font faces", database.len());
        SystemFontHost::from_database(database)
    }

    /// Creates a host around an existing font database.
    pub fn from_database(database: fontdb::Database) -> SystemFontHost {
        SystemFontHost {
            database: RwLock::new(database),
            faces: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of faces the host knows about.
    pub fn face_count(&self) -> usize {
        self.database.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn load_face(&self, family: &str) -> io::Result<fontdue::Font> {
        let database =
            self.database.read().unwrap_or_else(PoisonError::into_inner);
        let families = [fontdb::Family::Name(family)];
        let query =
            fontdb::Query { families: &families, ..fontdb::Query::default() };
        match database.query(&query) {
            Some(id) => parse_face(&database, id, family),
            None => not_found!("Font family {:?} is not registered", family),
        }
    }
}

fn provides_family(face: &fontdb::FaceInfo, family: &str) -> bool {
    face.families.iter().any(|(name, _)| name == family)
}

fn parse_face(
    database: &fontdb::Database,
    id: fontdb::ID,
    family: &str,
) -> io::Result<fontdue::Font> {
    let parsed = database.with_face_data(id, |data, index| {
        let settings = fontdue::FontSettings {
            collection_index: index,
            ..fontdue::FontSettings::default()
        };
        fontdue::Font::from_bytes(data, settings)
    });
    match parsed {
        Some(Ok(font)) => Ok(font),
        Some(Err(error)) => {
            invalid_data!("Malformed font for family {:?}: {}", family, error)
        }
        None => not_found!("Font data for family {:?} is gone", family),
    }
}

impl Default for SystemFontHost {
    fn default() -> SystemFontHost {
        SystemFontHost::new()
    }
}

impl FontHost for SystemFontHost {
    fn family_members(&self, family: &str) -> Vec<String> {
        let database =
            self.database.read().unwrap_or_else(PoisonError::into_inner);
        database
            .faces()
            .filter(|face| provides_family(face, family))
            .map(|face| face.post_script_name.clone())
            .collect()
    }

    fn register_font(&self, family: &str, data: Vec<u8>) -> io::Result<()> {
        // Faces are vetted in a staging database so that a rejected font
        // never reaches the shared one.
        let source: Arc<dyn AsRef<[u8]> + Send + Sync> = Arc::new(data);
        let mut staged = fontdb::Database::new();
        let ids = staged.load_font_source(fontdb::Source::Binary(source));
        if ids.is_empty() {
            invalid_data!("Malformed font data");
        }
        let id = staged
            .faces()
            .find(|face| provides_family(face, family))
            .map(|face| face.id);
        let id = match id {
            Some(id) => id,
            None => {
                let found: Vec<&str> = staged
                    .faces()
                    .flat_map(|face| face.families.iter())
                    .map(|(name, _)| name.as_str())
                    .collect();
                invalid_data!(
                    "Font data does not provide family {:?} (found {:?})",
                    family,
                    found
                );
            }
        };
        let face = parse_face(&staged, id, family)?;
        {
            let mut database =
                self.database.write().unwrap_or_else(PoisonError::into_inner);
            for info in staged.faces() {
                database.push_face_info(info.clone());
            }
            debug!(
                "Host now has {} faces after adding {:?}",
                database.len(),
                family
            );
        }
        let mut faces =
            self.faces.lock().unwrap_or_else(PoisonError::into_inner);
        faces.insert(family.to_string(), Arc::new(face));
        Ok(())
    }

    fn face(&self, family: &str) -> io::Result<Arc<dyn GlyphRasterizer>> {
        let mut faces =
            self.faces.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(face) = faces.get(family) {
            return Ok(face.clone());
        }
        let face = Arc::new(self.load_face(family)?);
        faces.insert(family.to_string(), face.clone());
        Ok(face)
    }
}

//===========================================================================//


//===========================================================================//
