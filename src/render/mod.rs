//! @acp:module "Render"
//! @acp:summary "Renderer trait and the kind -> renderer dispatch table"
//! @acp:domain format
//! @acp:layer output
//!
//! Rendering dispatches on the resolved [`Kind`]. Kinds without a renderer
//! (and values without a kind) are returned untouched as [`Output::Raw`].

pub mod builtin;
pub mod link;
pub mod templates;

pub use builtin::{AddressRenderer, BooleanRenderer, PlainObjectRenderer};
pub use link::{link, to_fixed, Coordinate, Link, LinkAttrs, DEFAULT_TARGET};
pub use templates::{Templates, LINK_TEMPLATE, PRE_TEMPLATE};

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::kind::Kind;

/// Shared state handed to every renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub templates: &'a Templates,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, templates: &'a Templates) -> Self {
        Self { config, templates }
    }
}

/// Renderer trait - implement for each kind
pub trait Renderer: Send + Sync {
    /// Get the kind this renderer handles
    fn kind(&self) -> Kind;

    /// Render a value of this kind to display text
    fn render(&self, value: &Value, ctx: &RenderContext) -> Result<String>;
}

/// Result of rendering a value
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Rendered display text
    Text(String),
    /// The original value, passed through because no renderer applied
    Raw(Value),
}

impl Output {
    /// Get the rendered text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(s) => Some(s),
            Output::Raw(_) => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Output::Text(_))
    }

    /// Convert into a JSON value; rendered text becomes a string
    pub fn into_value(self) -> Value {
        match self {
            Output::Text(s) => Value::String(s),
            Output::Raw(v) => v,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(s) | Output::Raw(Value::String(s)) => write!(f, "{}", s),
            Output::Raw(v) => write!(f, "{}", v),
        }
    }
}

/// Dispatch table from kind to renderer
pub struct RendererRegistry {
    renderers: HashMap<Kind, Box<dyn Renderer>>,
    config: Config,
    templates: Templates,
}

impl RendererRegistry {
    /// Create a registry with the built-in renderers and default config
    pub fn new() -> Self {
        Self::with_parts(Config::default(), Templates::new())
    }

    /// Create a registry with the built-in renderers, compiling template overrides
    pub fn with_config(config: Config) -> Result<Self> {
        let templates = Templates::from_config(&config.templates)?;
        Ok(Self::with_parts(config, templates))
    }

    fn with_parts(config: Config, templates: Templates) -> Self {
        let mut renderers: HashMap<Kind, Box<dyn Renderer>> = HashMap::new();

        renderers.insert(Kind::PlainObject, Box::new(PlainObjectRenderer));
        renderers.insert(Kind::Boolean, Box::new(BooleanRenderer));
        renderers.insert(Kind::Address, Box::new(AddressRenderer::new()));

        Self {
            renderers,
            config,
            templates,
        }
    }

    /// Add a renderer, returning the one it replaced
    pub fn register(&mut self, renderer: Box<dyn Renderer>) -> Option<Box<dyn Renderer>> {
        let kind = renderer.kind();
        let previous = self.renderers.insert(kind.clone(), renderer);
        if previous.is_some() {
            tracing::debug!("Replaced renderer for kind {}", kind);
        }
        previous
    }

    /// Remove the renderer of a kind; its values then pass through raw
    pub fn unregister(&mut self, kind: &Kind) -> Option<Box<dyn Renderer>> {
        self.renderers.remove(kind)
    }

    pub fn contains(&self, kind: &Kind) -> bool {
        self.renderers.contains_key(kind)
    }

    /// Kinds that currently have a renderer
    pub fn kinds(&self) -> Vec<Kind> {
        self.renderers.keys().cloned().collect()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn templates_mut(&mut self) -> &mut Templates {
        &mut self.templates
    }

    /// Render a value by kind.
    ///
    /// Without a kind, or without a renderer for it, the value comes back
    /// unchanged.
    pub fn render(&self, kind: Option<&Kind>, value: &Value) -> Result<Output> {
        let Some(renderer) = kind.and_then(|k| self.renderers.get(k)) else {
            return Ok(Output::Raw(value.clone()));
        };

        let ctx = RenderContext::new(&self.config, &self.templates);
        renderer.render(value, &ctx).map(Output::Text)
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("kinds", &self.kinds())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct ShoutRenderer;

    impl Renderer for ShoutRenderer {
        fn kind(&self) -> Kind {
            Kind::custom("shout")
        }

        fn render(&self, value: &Value, _ctx: &RenderContext) -> Result<String> {
            Ok(value.to_string().to_uppercase())
        }
    }

    #[test]
    fn test_builtin_kinds_registered() {
        let registry = RendererRegistry::new();
        for kind in Kind::builtin() {
            assert!(registry.contains(kind));
        }
    }

    #[test]
    fn test_no_kind_passes_through() {
        let registry = RendererRegistry::new();
        let output = registry.render(None, &json!(42)).unwrap();
        assert_eq!(output, Output::Raw(json!(42)));
        assert!(!output.is_rendered());
        assert_eq!(output.to_string(), "42");
    }

    #[test]
    fn test_unregistered_kind_passes_through() {
        let registry = RendererRegistry::new();
        let output = registry
            .render(Some(&Kind::custom("shout")), &json!("hi"))
            .unwrap();
        assert_eq!(output.as_text(), None);
        assert_eq!(output.to_string(), "hi");
    }

    #[test]
    fn test_register_custom_renderer() {
        let mut registry = RendererRegistry::new();
        assert!(registry.register(Box::new(ShoutRenderer)).is_none());

        let output = registry
            .render(Some(&Kind::custom("shout")), &json!("hi"))
            .unwrap();
        assert_eq!(output.as_text(), Some("\"HI\""));

        assert!(registry.unregister(&Kind::Boolean).is_some());
        assert_eq!(
            registry.render(Some(&Kind::Boolean), &json!(true)).unwrap(),
            Output::Raw(json!(true))
        );
    }
}
