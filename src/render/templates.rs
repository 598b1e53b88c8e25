//! @acp:module "Render Templates"
//! @acp:summary "Optional handlebars templates replacing the built-in HTML leaves"
//! @acp:domain format
//! @acp:layer output

use handlebars::Handlebars;
use serde::Serialize;

use crate::config::TemplateConfig;
use crate::error::Result;

/// Template wrapping the plain-object JSON text; receives `json`
pub const PRE_TEMPLATE: &str = "pre";

/// Template for address links; receives `href`, `target` and `text`
pub const LINK_TEMPLATE: &str = "link";

/// Registered template overrides.
///
/// An empty set means every renderer uses its built-in markup. Output is
/// never HTML-escaped.
#[derive(Debug)]
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Create an empty template set
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Compile the overrides named in the config
    pub fn from_config(config: &TemplateConfig) -> Result<Self> {
        let mut templates = Self::new();
        if let Some(ref source) = config.pre {
            templates.register(PRE_TEMPLATE, source)?;
        }
        if let Some(ref source) = config.link {
            templates.register(LINK_TEMPLATE, source)?;
        }
        Ok(templates)
    }

    /// Compile and register a template, replacing any previous one
    pub fn register(&mut self, name: &str, source: &str) -> Result<()> {
        self.registry.register_template_string(name, source)?;
        tracing::debug!("Registered template override: {}", name);
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    /// Render a template if it is registered, `None` otherwise
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Option<String>> {
        if !self.has(name) {
            return Ok(None);
        }
        Ok(Some(self.registry.render(name, data)?))
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}
