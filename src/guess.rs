//! @acp:module "Dataguess"
//! @acp:summary "Public entry point: resolve a value's kind, then render it"
//! @acp:domain format
//! @acp:layer api

use serde_json::Value;

use crate::cache::KindCache;
use crate::config::Config;
use crate::error::Result;
use crate::kind::{Classifier, Inferencer, Kind};
use crate::render::{Output, Renderer, RendererRegistry};

/// @acp:summary "Kind inferencer, kind cache and renderer registry in one place"
///
/// Each instance owns its cache, so independent instances never share
/// classifications. Wrap an instance in a `Mutex` to share it between
/// threads; the first writer of a (context, name) slot then wins.
#[derive(Debug, Default)]
pub struct Dataguess {
    inferencer: Inferencer,
    cache: KindCache,
    registry: RendererRegistry,
}

impl Dataguess {
    /// Create an instance with the built-in kinds and default config
    pub fn new() -> Self {
        Self {
            inferencer: Inferencer::new(),
            cache: KindCache::new(),
            registry: RendererRegistry::new(),
        }
    }

    /// Create an instance rendering with the given config
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            inferencer: Inferencer::new(),
            cache: KindCache::new(),
            registry: RendererRegistry::with_config(config)?,
        })
    }

    /// Render a value for display.
    ///
    /// With a `name`, the kind is looked up in the cache under
    /// (`context`, `name`) and inferred and stored on a miss. Once stored it
    /// is reused for every later value of that field. Without a `name` the
    /// kind is inferred fresh and nothing is cached.
    ///
    /// Values without a kind, or whose kind has no renderer, come back as
    /// [`Output::Raw`].
    ///
    /// # Errors
    ///
    /// Fails when the renderer rejects the value, e.g.
    /// [`DataguessError::InvalidCoordinate`](crate::DataguessError::InvalidCoordinate)
    /// for an address whose `lat`/`lng` is not numeric-like.
    pub fn simple(
        &mut self,
        value: &Value,
        name: Option<&str>,
        context: Option<&str>,
    ) -> Result<Output> {
        let kind = self.kind_of(value, name, context);
        self.registry.render(kind.as_ref(), value)
    }

    /// Resolve the kind `simple` would render with, updating the cache
    pub fn kind_of(&mut self, value: &Value, name: Option<&str>, context: Option<&str>) -> Option<Kind> {
        let inferencer = &self.inferencer;
        self.cache
            .lookup_or_infer_with(value, name, context, |v| inferencer.infer(v))
    }

    /// Add a classifier consulted before the built-in heuristic
    pub fn register_classifier(&mut self, classifier: Box<dyn Classifier>) {
        self.inferencer.register(classifier);
    }

    /// Add or replace the renderer of a kind
    pub fn register_renderer(&mut self, renderer: Box<dyn Renderer>) -> Option<Box<dyn Renderer>> {
        self.registry.register(renderer)
    }

    pub fn cache(&self) -> &KindCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut KindCache {
        &mut self.cache
    }

    /// Forget every pinned kind
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        self.registry.config()
    }
}

/// Render a value once, without caching
pub fn simple(value: &Value) -> Result<Output> {
    Dataguess::new().simple(value, None, None)
}
