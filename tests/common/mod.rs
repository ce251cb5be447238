//! Theme fixtures written as real PNG files

#![allow(dead_code)]

use livesupport_widgets::{ConfigElement, WidgetFactory};
use livesupport_widgets::core::{CONFIG_ELEMENT_NAME, PATH_ATTRIBUTE};
use livesupport_widgets_types::required_files;
use std::fs::File;
use std::path::Path;

/// Write a solid-colour PNG
pub fn write_png(path: &Path, width: i32, height: i32, rgb: (f64, f64, f64)) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    {
        let cr = cairo::Context::new(&surface).unwrap();
        cr.set_source_rgb(rgb.0, rgb.1, rgb.2);
        cr.paint().unwrap();
    }
    let mut file = File::create(path).unwrap();
    surface.write_to_png(&mut file).unwrap();
}

/// Populate `dir` with every file a theme needs
pub fn write_theme(dir: &Path) {
    for (i, name) in required_files().iter().enumerate() {
        // Vary sizes a little so bundles are distinguishable
        let size = 6 + (i as i32 % 4);
        write_png(&dir.join(name), size, 2 * size, (0.2, 0.4, 0.8));
    }
}

pub fn factory_element(path: &Path) -> ConfigElement {
    ConfigElement::new(CONFIG_ELEMENT_NAME)
        .with_attribute(PATH_ATTRIBUTE, path.to_string_lossy().into_owned())
}

/// A factory configured from a fresh theme under `dir`
pub fn configured_factory(dir: &Path) -> WidgetFactory {
    write_theme(dir);
    let factory = WidgetFactory::new();
    livesupport_widgets::Configurable::configure(&factory, &factory_element(dir)).unwrap();
    factory
}
