//! Objects configured from a named configuration element

use livesupport_widgets_types::ConfigElement;
use log::debug;

use super::error::{Result, WidgetError};

/// An object that is configured once from a configuration element
pub trait Configurable {
    /// Name of the configuration element this object expects
    fn config_element_name(&self) -> &'static str;

    /// Configure the object from the supplied element
    fn configure(&self, element: &ConfigElement) -> Result<()>;
}

/// Find the element addressed to `target` and configure it.
///
/// Fails with an invalid configuration error if no element carries the
/// target's element name.
pub fn configure_from(elements: &[ConfigElement], target: &dyn Configurable) -> Result<()> {
    let name = target.config_element_name();
    let element = elements.iter().find(|e| e.name == name).ok_or_else(|| {
        WidgetError::InvalidConfiguration(format!("no <{}> configuration element", name))
    })?;

    debug!("Configuring <{}> with {} attribute(s)", name, element.attributes.len());
    target.configure(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        seen: RefCell<Option<ConfigElement>>,
    }

    impl Configurable for Recorder {
        fn config_element_name(&self) -> &'static str {
            "recorder"
        }

        fn configure(&self, element: &ConfigElement) -> Result<()> {
            *self.seen.borrow_mut() = Some(element.clone());
            Ok(())
        }
    }

    #[test]
    fn test_configure_from_picks_matching_element() {
        let recorder = Recorder { seen: RefCell::new(None) };
        let elements = vec![
            ConfigElement::new("other").with_attribute("a", "1"),
            ConfigElement::new("recorder").with_attribute("b", "2"),
        ];

        configure_from(&elements, &recorder).unwrap();

        let seen = recorder.seen.borrow();
        assert_eq!(seen.as_ref().and_then(|e| e.attribute("b")), Some("2"));
    }

    #[test]
    fn test_configure_from_missing_element() {
        let recorder = Recorder { seen: RefCell::new(None) };
        let err = configure_from(&[ConfigElement::new("other")], &recorder).unwrap_err();

        assert!(err.is_invalid_configuration());
        assert!(recorder.seen.borrow().is_none());
    }
}
