//! @acp:module "Kind Cache"
//! @acp:summary "Two-level memo of inferred kinds keyed by context and field name"
//! @acp:domain format
//! @acp:layer model
//!
//! # Kind Cache
//!
//! Contexts group related field names (one per record or collection); the
//! name identifies a field within its context:
//!
//! ```text
//! {
//!   "users":  { "active": "boolean", "home": "address" },
//!   "orders": { "meta": "plain-object" }
//! }
//! ```
//!
//! The cache is keyed on identity only. Once a field has a kind, later
//! lookups for the same (context, name) return it whatever value is passed,
//! so the first classification pins the field until the cache is cleared.

mod store;

pub use store::{KindCache, ANONYMOUS_CONTEXT};
