//! Image loading from a theme directory

use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::glib;
use log::debug;
use std::path::{Path, PathBuf};

use super::error::{Result, WidgetError};

/// Decodes an image file into a pixbuf
pub trait ImageLoader {
    fn load(&self, path: &Path) -> std::result::Result<Pixbuf, glib::Error>;
}

/// Loads images from disk with gdk-pixbuf
#[derive(Debug, Default, Clone, Copy)]
pub struct PixbufFileLoader;

impl ImageLoader for PixbufFileLoader {
    fn load(&self, path: &Path) -> std::result::Result<Pixbuf, glib::Error> {
        Pixbuf::from_file(path)
    }
}

/// A theme directory paired with the loader used to read it
pub struct ImageDirectory<'a> {
    path: &'a Path,
    loader: &'a dyn ImageLoader,
}

impl<'a> ImageDirectory<'a> {
    pub fn new(path: &'a Path, loader: &'a dyn ImageLoader) -> Self {
        Self { path, loader }
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    /// Load an image relative to the directory, failing if it can not be found or decoded
    pub fn load_image(&self, image_name: &str) -> Result<Pixbuf> {
        let full_path: PathBuf = self.path.join(image_name);
        match self.loader.load(&full_path) {
            Ok(pixbuf) => {
                debug!(
                    "Loaded {} ({}x{})",
                    full_path.display(),
                    pixbuf.width(),
                    pixbuf.height()
                );
                Ok(pixbuf)
            }
            Err(source) => Err(WidgetError::ImageLoad {
                path: full_path,
                source,
            }),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryLoader;
    use super::*;

    #[test]
    fn test_load_image_joins_path() {
        let loader = MemoryLoader::new();
        let dir = ImageDirectory::new(Path::new("/assets/theme1/"), &loader);

        let pixbuf = dir.load_image("button/left.png").unwrap();
        assert_eq!(pixbuf.width(), 8);
        assert_eq!(
            loader.requested(),
            vec![PathBuf::from("/assets/theme1/button/left.png")]
        );
    }

    #[test]
    fn test_load_image_reports_missing_file() {
        let loader = MemoryLoader::new().missing("combo/left.png");
        let dir = ImageDirectory::new(Path::new("/assets/theme1"), &loader);

        match dir.load_image("combo/left.png") {
            Err(WidgetError::ImageLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("/assets/theme1/combo/left.png"));
            }
            other => panic!("expected ImageLoad error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_file_loader_fails_on_missing_file() {
        let result = PixbufFileLoader.load(Path::new("/nonexistent/livesupport/left.png"));
        assert!(result.is_err());
    }
}
