//! Layout configuration
//!
//! Configuration is typically loaded from a `graph.toml` file, or JSON for
//! any other extension. A missing file yields the defaults.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::{ColorAllocator, Palette, DEFAULT_PALETTE};
use crate::decoration::ReferenceDecoder;
use crate::error::{GraphError, GraphResult};
use crate::model::Color;

/// Settings for a layout pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lane colors, cycled in order
    pub palette: Vec<Color>,
    /// Known remote names; when set, only `<remote>/...` tokens decode as remote refs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remotes: Vec<String>,
    /// Reference ids pinned to a color at the start of every pass
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub reference_colors: IndexMap<String, Color>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().copied().map(Color::from).collect(),
            remotes: Vec::new(),
            reference_colors: IndexMap::new(),
        }
    }
}

impl LayoutConfig {
    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GraphResult<()> {
        Palette::new(self.palette.clone())?;

        if let Some((reference, _)) = self
            .reference_colors
            .iter()
            .find(|(_, color)| color.as_str().trim().is_empty())
        {
            return Err(GraphError::config_error(format!(
                "reference color for '{reference}' cannot be empty"
            )));
        }

        if self.remotes.iter().any(|remote| remote.trim().is_empty()) {
            return Err(GraphError::config_error("remote names cannot be empty"));
        }

        Ok(())
    }

    /// The validated palette
    pub fn palette(&self) -> GraphResult<Palette> {
        Palette::new(self.palette.clone())
    }

    /// A fresh allocator for one pass, seeded with the pinned reference colors
    pub(crate) fn allocator(&self) -> ColorAllocator {
        let palette = self.palette().unwrap_or_else(|e| {
            tracing::warn!("Invalid layout palette ({}), using the default palette", e);
            Palette::default()
        });
        ColorAllocator::with_reference_colors(
            palette,
            self.reference_colors
                .iter()
                .map(|(id, color)| (id.clone(), color.clone())),
        )
    }

    pub fn decoder(&self) -> ReferenceDecoder {
        ReferenceDecoder::new().with_remotes(self.remotes.iter().cloned())
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> GraphResult<LayoutConfig> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!("No layout config at {}, using defaults", path.display());
        return Ok(LayoutConfig::default());
    }

    let content = fs::read_to_string(path)?;

    // Determine format based on file extension
    let config: LayoutConfig = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    if let Err(e) = config.validate() {
        tracing::warn!("Invalid layout config {}: {}", path.display(), e);
        return Err(e);
    }

    Ok(config)
}

/// Save configuration to a specific path
pub fn save_config_to_path<P: AsRef<Path>>(config: &LayoutConfig, path: P) -> GraphResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::to_string_pretty(config)
            .map_err(|e| GraphError::config_error(format!("failed to serialize config: {e}")))?
    } else {
        serde_json::to_string_pretty(config)?
    };

    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test_log::test]
    fn test_invalid_palette_falls_back_to_default() {
        let config = LayoutConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        let mut allocator = config.allocator();
        assert_eq!(allocator.palette(), &Palette::default());
        assert_eq!(allocator.next_color(), Color::from(DEFAULT_PALETTE[0]));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn test_toml_parsing() {
        let config = LayoutConfig::from_toml_str(
            r##"
            palette = ["#111111", "#222222"]
            remotes = ["origin", "upstream"]

            [reference_colors]
            "branch:main" = "#abcdef"
            "##,
        )
        .unwrap();

        assert_eq!(config.palette, vec![Color::from("#111111"), Color::from("#222222")]);
        assert_eq!(config.remotes, vec!["origin", "upstream"]);
        assert_eq!(
            config.reference_colors.get("branch:main"),
            Some(&Color::from("#abcdef"))
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LayoutConfig::from_toml_str(r#"remotes = ["origin"]"#).unwrap();
        assert_eq!(config.palette, LayoutConfig::default().palette);
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let result = LayoutConfig::from_toml_str("palette = []");
        assert!(matches!(result, Err(GraphError::EmptyPalette)));
    }

    #[test]
    fn test_malformed_toml() {
        let result = LayoutConfig::from_toml_str("palette = [\"#fff\"");
        assert!(matches!(result, Err(GraphError::Toml(_))));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let temp_dir = tempdir().unwrap();
        let config = load_config_from_path(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip_on_disk() {
        let temp_dir = tempdir().unwrap();
        let mut config = LayoutConfig::default();
        config
            .reference_colors
            .insert("tag:v1.0".to_string(), Color::from("#123456"));

        for name in ["nested/graph.toml", "graph.json"] {
            let path = temp_dir.path().join(name);
            save_config_to_path(&config, &path).unwrap();
            let loaded = load_config_from_path(&path).unwrap();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_invalid_json_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(&path, r#"{"palette": []}"#).unwrap();
        assert!(matches!(load_config_from_path(&path), Err(GraphError::EmptyPalette)));
    }
}
