//! Declarative dropdown configuration.
//!
//! The serializable part of [`DropdownOptions`] can be kept in a TOML file
//! next to the rest of an application's settings:
//!
//! ```toml
//! class_name = "dropdown-menu emoji"
//! header = "Emoji"
//! max_count = 8
//! rotate = true
//!
//! [style]
//! maxHeight = "240px"
//! ```
//!
//! Generator-based header/footer content cannot be expressed in a file; set
//! it on the options returned by [`DropdownConfig::into_options`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use textcomplete_core::{Error, Result, tc_debug};

use crate::widget::{DropdownOptions, Edge};

/// File form of [`DropdownOptions`]. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownConfig {
    pub class_name: Option<String>,
    pub style: BTreeMap<String, String>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub max_count: Option<usize>,
    pub rotate: Option<bool>,
}

impl DropdownConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tc_debug!(path = %path.display(), "loaded dropdown configuration");
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Build options, falling back to the defaults for absent fields.
    pub fn into_options<T>(self) -> DropdownOptions<T> {
        let mut options = DropdownOptions::new();
        if let Some(class_name) = self.class_name {
            options = options.with_class_name(class_name);
        }
        for (property, value) in self.style {
            options = options.with_style(property, value);
        }
        if let Some(header) = self.header {
            options = options.with_header(Edge::Text(header));
        }
        if let Some(footer) = self.footer {
            options = options.with_footer(Edge::Text(footer));
        }
        if let Some(max_count) = self.max_count {
            options = options.with_max_count(max_count);
        }
        if let Some(rotate) = self.rotate {
            options = options.with_rotate(rotate);
        }
        options
    }

    fn validate(&self) -> Result<()> {
        match self.style.keys().find(|property| property.trim().is_empty()) {
            Some(property) => Err(Error::invalid_style(property.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::options::DEFAULT_CLASS_NAME;

    #[test]
    fn test_empty_config_gives_defaults() {
        let config = DropdownConfig::from_toml_str("").unwrap();
        assert_eq!(config, DropdownConfig::default());

        let options = config.into_options::<String>();
        assert_eq!(options.class_name(), DEFAULT_CLASS_NAME);
        assert!(options.rotate());
    }

    #[test]
    fn test_full_config() {
        let config = DropdownConfig::from_toml_str(
            r#"
            class_name = "emoji"
            header = "Emoji"
            footer = "esc to close"
            max_count = 8
            rotate = false

            [style]
            maxHeight = "240px"
            "#,
        )
        .unwrap();

        let options = config.into_options::<String>();
        assert_eq!(options.class_name(), "emoji");
        assert_eq!(options.style(), &[("maxHeight".to_string(), "240px".to_string())]);
        assert!(matches!(options.header(), Some(Edge::Text(text)) if text == "Emoji"));
        assert!(matches!(options.footer(), Some(Edge::Text(text)) if text == "esc to close"));
        assert_eq!(options.max_count(), Some(8));
        assert!(!options.rotate());
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let err = DropdownConfig::from_toml_str("max_count = \"ten\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = DropdownConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_blank_style_property_is_rejected() {
        let err = DropdownConfig::from_toml_str("[style]\n\" \" = \"red\"").unwrap_err();
        assert!(matches!(err, Error::InvalidStyle { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DropdownConfig {
            header: Some("Users".to_string()),
            max_count: Some(5),
            ..Default::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(DropdownConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DropdownConfig::load("/nonexistent/textcomplete/dropdown.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dropdown.toml");
        std::fs::write(&path, "class_name = \"mentions\"\n").unwrap();

        let config = DropdownConfig::load(&path).unwrap();
        assert_eq!(config.class_name.as_deref(), Some("mentions"));
    }
}
