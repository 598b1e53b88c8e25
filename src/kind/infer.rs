//! @acp:module "Kind Inference"
//! @acp:summary "Structural heuristic mapping a JSON value to its kind"
//! @acp:domain format
//! @acp:layer analysis

use serde_json::Value;

use super::Kind;

/// Check a value the way a dynamic language tests truthiness.
///
/// `null`, `false`, zero and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Infer the built-in kind of a value.
///
/// Checked in order, first match wins:
/// 1. arrays and objects are `PlainObject`
/// 2. objects with truthy `lat` and `lng` are `Address`
/// 3. booleans are `Boolean`
/// 4. anything else has no kind
///
/// A `lat` of `0` is falsy, so `{"lat": 0, "lng": 0.2}` stays a `PlainObject`.
pub fn infer(value: &Value) -> Option<Kind> {
    match value {
        Value::Object(map) => {
            let member = |key: &str| map.get(key).map(is_truthy).unwrap_or(false);
            if member("lat") && member("lng") {
                Some(Kind::Address)
            } else {
                Some(Kind::PlainObject)
            }
        }
        Value::Array(_) => Some(Kind::PlainObject),
        Value::Bool(_) => Some(Kind::Boolean),
        _ => None,
    }
}

/// Classifier trait - implement to recognize extension kinds
pub trait Classifier: Send + Sync {
    /// Human-readable name, used in diagnostics
    fn name(&self) -> &str;

    /// Return a kind if this classifier recognizes the value
    fn classify(&self, value: &Value) -> Option<Kind>;
}

/// Runs registered classifiers before the built-in heuristic
#[derive(Default)]
pub struct Inferencer {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl Inferencer {
    /// Create an inferencer with only the built-in heuristic
    pub fn new() -> Self {
        Self {
            classifiers: Vec::new(),
        }
    }

    /// Add a classifier; classifiers run in registration order
    pub fn register(&mut self, classifier: Box<dyn Classifier>) {
        tracing::debug!("Registered classifier: {}", classifier.name());
        self.classifiers.push(classifier);
    }

    /// Number of registered classifiers
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Classify a value
    pub fn infer(&self, value: &Value) -> Option<Kind> {
        let kind = self
            .classifiers
            .iter()
            .find_map(|classifier| classifier.classify(value))
            .or_else(|| infer(value));

        tracing::trace!(
            "Inferred kind {} for {}",
            kind.as_ref().map(Kind::as_str).unwrap_or("<none>"),
            value
        );
        kind
    }
}

impl std::fmt::Debug for Inferencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.classifiers.iter().map(|c| c.name()).collect();
        f.debug_struct("Inferencer")
            .field("classifiers", &names)
            .finish()
    }
}
