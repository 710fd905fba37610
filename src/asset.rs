use log::trace;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

//===========================================================================//

/// The environment variable naming an extra directory to search for font
/// assets.  It is searched before any other directory.
pub const RESOURCE_DIR_ENV: &str = "FONTAWESOME_RESOURCE_DIR";

/// The subdirectory that packaging tools place bundled resources under.
pub const BUNDLE_SUBDIR: &str = "FontAwesome.bundle";

// Font file extensions to try, in order.
const EXTENSIONS: &[&str] = &["otf", "ttf"];

//===========================================================================//

/// Finds packaged font files on disk.
///
/// A font for family `F` is stored as `F.otf` (or `F.ttf`), either at the
/// top level of a search directory or inside its `FontAwesome.bundle`
/// subdirectory.
#[derive(Clone, Debug, Default)]
pub struct AssetLocator {
    dirs: Vec<PathBuf>,
    include_exe_dir: bool,
}

impl AssetLocator {
    /// Creates a locator that searches no directories at all.
    pub fn empty() -> AssetLocator {
        AssetLocator { dirs: Vec::new(), include_exe_dir: false }
    }

    /// Creates a locator that searches `$FONTAWESOME_RESOURCE_DIR` (if set),
    /// then the directory containing the running executable and its
    /// `resources` subdirectory.
    pub fn from_env() -> AssetLocator {
        let mut locator = AssetLocator::empty();
        if let Some(dir) = env::var_os(RESOURCE_DIR_ENV) {
            if !dir.is_empty() {
                locator.dirs.push(PathBuf::from(dir));
            }
        }
        locator.include_exe_dir = true;
        locator
    }

    /// Adds a directory to search, after any already added.
    pub fn with_dir<P: Into<PathBuf>>(mut self, dir: P) -> AssetLocator {
        self.dirs.push(dir.into());
        self
    }

    /// Returns the directories that will be searched, in order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.dirs.clone();
        if self.include_exe_dir {
            if let Some(exe_dir) = env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
            {
                dirs.push(exe_dir.join("resources"));
                dirs.push(exe_dir);
            }
        }
        dirs
    }

    /// Returns every path that will be probed for `family`, in order.
    pub fn candidates(&self, family: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for dir in self.search_dirs() {
            for &subdir in ["", BUNDLE_SUBDIR].iter() {
                for &extension in EXTENSIONS.iter() {
                    let file_name = format!("{}.{}", family, extension);
                    let path = if subdir.is_empty() {
                        dir.join(file_name)
                    } else {
                        dir.join(subdir).join(file_name)
                    };
                    paths.push(path);
                }
            }
        }
        paths
    }

    /// Returns the path of the first font file found for `family`.  Returns
    /// a `NotFound` error listing every probed path if there is none.
    pub fn locate(&self, family: &str) -> io::Result<PathBuf> {
        let candidates = self.candidates(family);
        for path in candidates.iter() {
            trace!("Probing {} for font family {:?}", path.display(), family);
            if path.is_file() {
                return Ok(path.clone());
            }
        }
        let probed: Vec<String> =
            candidates.iter().map(|path| path.display().to_string()).collect();
        not_found!(
            "No font asset for family {:?} (searched: {})",
            family,
            if probed.is_empty() {
                "no directories".to_string()
            } else {
                probed.join(", ")
            }
        );
    }

    /// Locates and reads the font file for `family`.
    pub fn load(&self, family: &str) -> io::Result<(PathBuf, Vec<u8>)> {
        let path = self.locate(family)?;
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(error) => {
                return Err(io::Error::new(
                    error.kind(),
                    format!("Failed to read {}: {}", path.display(), error),
                ));
            }
        };
        if data.is_empty() {
            invalid_data!("Font asset {} is empty", path.display());
        }
        Ok((path, data))
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{AssetLocator, BUNDLE_SUBDIR};
    use std::fs;
    use std::io;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "fontawesome-asset-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn empty_locator_reports_not_found() {
        let error = AssetLocator::empty().locate("FontAwesome").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
        assert!(error.to_string().contains("no directories"));
    }

    #[test]
    fn missing_asset_lists_probed_paths() {
        let dir = scratch_dir("missing");
        let locator = AssetLocator::empty().with_dir(&dir);
        let error = locator.locate("FontAwesome").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
        let message = error.to_string();
        assert!(message.contains("FontAwesome.otf"));
        assert!(message.contains(BUNDLE_SUBDIR));
        assert_eq!(locator.candidates("FontAwesome").len(), 4);
    }

    #[test]
    fn finds_top_level_asset() {
        let dir = scratch_dir("top");
        fs::write(dir.join("FontAwesome.otf"), b"font").unwrap();
        let locator = AssetLocator::empty().with_dir(&dir);
        let (path, data) = locator.load("FontAwesome").unwrap();
        assert_eq!(path, dir.join("FontAwesome.otf"));
        assert_eq!(data, b"font");
    }

    #[test]
    fn finds_bundled_asset() {
        let dir = scratch_dir("bundle");
        fs::create_dir_all(dir.join(BUNDLE_SUBDIR)).unwrap();
        fs::write(dir.join(BUNDLE_SUBDIR).join("FontAwesome.otf"), b"font")
            .unwrap();
        let locator = AssetLocator::empty().with_dir(&dir);
        assert_eq!(
            locator.locate("FontAwesome").unwrap(),
            dir.join(BUNDLE_SUBDIR).join("FontAwesome.otf")
        );
    }

    #[test]
    fn top_level_wins_over_bundle() {
        let dir = scratch_dir("both");
        fs::create_dir_all(dir.join(BUNDLE_SUBDIR)).unwrap();
        fs::write(dir.join(BUNDLE_SUBDIR).join("FontAwesome.otf"), b"b")
            .unwrap();
        fs::write(dir.join("FontAwesome.ttf"), b"t").unwrap();
        let locator = AssetLocator::empty().with_dir(&dir);
        assert_eq!(
            locator.locate("FontAwesome").unwrap(),
            dir.join("FontAwesome.ttf")
        );
    }

    #[test]
    fn empty_asset_is_invalid() {
        let dir = scratch_dir("empty");
        fs::write(dir.join("FontAwesome.otf"), b"").unwrap();
        let locator = AssetLocator::empty().with_dir(&dir);
        let error = locator.load("FontAwesome").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn from_env_includes_executable_dir() {
        let locator = AssetLocator::from_env();
        let exe = std::env::current_exe().unwrap();
        let exe_dir = exe.parent().unwrap().to_path_buf();
        assert!(locator.search_dirs().contains(&exe_dir));
    }
}

//===========================================================================//
