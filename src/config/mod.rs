//! @acp:module "Configuration"
//! @acp:summary "Rendering configuration loading and defaults"
//! @acp:domain format
//! @acp:layer config

pub mod loader;

pub use loader::{load_config, ConfigOverrides};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name looked up by [`Config::load_or_default`]
pub const DEFAULT_CONFIG_FILE: &str = ".dataguess.json";

fn default_map_url() -> String {
    "https://www.openstreetmap.org/#map=5/".to_string()
}

fn default_link_target() -> String {
    "_blank".to_string()
}

fn default_precision() -> usize {
    2
}

fn default_indent() -> usize {
    2
}

fn default_pin() -> String {
    "📍".to_string()
}

fn default_affirmative() -> String {
    "✅".to_string()
}

fn default_negative() -> String {
    "❌".to_string()
}

/// @acp:summary "Rendering configuration"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// URL prefix for address links; `{lat}/{lng}` is appended
    #[serde(default = "default_map_url")]
    pub map_url: String,

    /// Link target used when the caller supplies none
    #[serde(default = "default_link_target")]
    pub link_target: String,

    /// Decimal places shown in address link text
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Indent width of the plain-object JSON block
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Glyph in front of address link text
    #[serde(default = "default_pin")]
    pub pin: String,

    /// Prefix for `true`
    #[serde(default = "default_affirmative")]
    pub affirmative: String,

    /// Prefix for `false`
    #[serde(default = "default_negative")]
    pub negative: String,

    /// Template overrides for the HTML leaves
    #[serde(default, skip_serializing_if = "TemplateConfig::is_empty")]
    pub templates: TemplateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_url: default_map_url(),
            link_target: default_link_target(),
            precision: default_precision(),
            indent: default_indent(),
            pin: default_pin(),
            affirmative: default_affirmative(),
            negative: default_negative(),
            templates: TemplateConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON or YAML file"
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if is_yaml(path) {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from default location or create default config"
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

/// Handlebars sources replacing the built-in templates.
///
/// The `pre` template receives `json`; the `link` template receives
/// `href`, `target` and `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TemplateConfig {
    pub fn is_empty(&self) -> bool {
        self.pre.is_none() && self.link.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.map_url, "https://www.openstreetmap.org/#map=5/");
        assert_eq!(config.link_target, "_blank");
        assert_eq!(config.precision, 2);
        assert!(config.templates.is_empty());
    }

    #[test]
    fn test_load_or_default_without_file() {
        assert_eq!(Config::load_or_default(), Config::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"linkTarget": "_self"}"#).unwrap();
        assert_eq!(config.link_target, "_self");
        assert_eq!(config.indent, 2);
        assert_eq!(config.affirmative, "✅");
    }

    #[test]
    fn test_save_and_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataguess.yml");

        let config = Config {
            precision: 4,
            templates: TemplateConfig {
                pre: Some("<code>{{{json}}}</code>".to_string()),
                link: None,
            },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataguess.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(crate::DataguessError::Json(_))
        ));
    }
}
