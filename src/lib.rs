#![forbid(unsafe_code)]

//! @acp:module "Dataguess Library"
//! @acp:summary "Guess a value's semantic kind and render it for display"
//! @acp:domain format
//! @acp:layer api
//! @acp:stability experimental
//!
//! # Dataguess
//!
//! Given an arbitrary JSON value, infer what it *is* and render it
//! human-readable:
//!
//! - **Plain objects** become indented JSON in a `<pre>` block
//! - **Booleans** get a ✅ / ❌ prefix
//! - **Addresses** (`{lat, lng}`) become OpenStreetMap links
//!
//! Kinds are memoized per (context, name), so a field is classified once.
//!
//! ## Example
//!
//! ```rust
//! use dataguess::Dataguess;
//! use serde_json::json;
//!
//! let mut guess = Dataguess::new();
//!
//! let html = guess.simple(&json!({"lat": 0.1, "lng": 0.2}), None, None)?;
//! assert_eq!(
//!     html.to_string(),
//!     r#"<a href="https://www.openstreetmap.org/#map=5/0.1/0.2" target="_blank">📍 0.10/0.20</a>"#
//! );
//!
//! // The first value pins the kind of `users.active`
//! guess.simple(&json!(true), Some("active"), Some("users"))?;
//! assert_eq!(guess.cache().len(), 1);
//! # Ok::<(), dataguess::DataguessError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod guess;
pub mod kind;
pub mod render;

// Re-exports
pub use cache::KindCache;
pub use config::{load_config, Config, ConfigOverrides, TemplateConfig};
pub use error::{DataguessError, Result};
pub use guess::{simple, Dataguess};
pub use kind::{infer, Classifier, Inferencer, Kind};
pub use render::{link, LinkAttrs, Output, RenderContext, Renderer, RendererRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
