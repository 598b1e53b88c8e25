//! @acp:module "Kinds"
//! @acp:summary "Semantic kind tags and the inference heuristic that assigns them"
//! @acp:domain format
//! @acp:layer model
//!
//! # Kinds
//!
//! A kind is the display-oriented classification of a value:
//! - `plain-object`: any JSON object or array
//! - `address`: an object with truthy `lat` and `lng` members
//! - `boolean`: `true` / `false`
//!
//! Values that match none of these have no kind and are passed through
//! unrendered. The set is open: [`Kind::Custom`] tags can be produced by a
//! registered [`Classifier`] and rendered by a registered renderer.

pub mod infer;

pub use infer::{infer, is_truthy, Classifier, Inferencer};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataguessError;

/// Semantic kind of a value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Kind {
    PlainObject,
    Boolean,
    Address,
    /// Extension tag, rendered only if a renderer is registered for it
    Custom(String),
}

impl Kind {
    /// Get all built-in kinds
    pub fn builtin() -> &'static [Kind] {
        &[Kind::PlainObject, Kind::Boolean, Kind::Address]
    }

    /// Get the tag for this kind
    pub fn as_str(&self) -> &str {
        match self {
            Kind::PlainObject => "plain-object",
            Kind::Boolean => "boolean",
            Kind::Address => "address",
            Kind::Custom(tag) => tag,
        }
    }

    /// Check if this is one of the built-in kinds
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Kind::Custom(_))
    }

    /// Create a kind from a tag; built-in tags map to their built-in kind
    pub fn custom(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        match tag.parse() {
            Ok(kind) => kind,
            Err(_) => Kind::Custom(tag),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kind {
    type Err = DataguessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        match tag.to_lowercase().as_str() {
            "" => Err(DataguessError::UnknownKind(s.to_string())),
            "plain-object" | "object" => Ok(Kind::PlainObject),
            "boolean" | "bool" => Ok(Kind::Boolean),
            "address" => Ok(Kind::Address),
            _ => Ok(Kind::Custom(tag.to_string())),
        }
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl TryFrom<String> for Kind {
    type Error = DataguessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Kind::PlainObject.as_str(), "plain-object");
        assert_eq!(Kind::Boolean.as_str(), "boolean");
        assert_eq!(Kind::Address.as_str(), "address");
        assert_eq!(Kind::custom("currency").to_string(), "currency");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("plain-object".parse::<Kind>().unwrap(), Kind::PlainObject);
        assert_eq!("Boolean".parse::<Kind>().unwrap(), Kind::Boolean);
        assert_eq!(" address ".parse::<Kind>().unwrap(), Kind::Address);
        assert_eq!(
            "currency".parse::<Kind>().unwrap(),
            Kind::Custom("currency".to_string())
        );
        assert!("".parse::<Kind>().is_err());
    }

    #[test]
    fn test_custom_normalizes_builtin_tags() {
        assert_eq!(Kind::custom("boolean"), Kind::Boolean);
        assert_eq!(Kind::custom("Plain-Object"), Kind::PlainObject);
        assert_eq!(Kind::custom("address"), Kind::Address);
        assert!(!Kind::custom("currency").is_builtin());

        let kind = Kind::custom("boolean");
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(serde_json::from_str::<Kind>(&json).unwrap(), kind);
    }

    #[test]
    fn test_kind_serde_uses_tag() {
        let json = serde_json::to_string(&Kind::PlainObject).unwrap();
        assert_eq!(json, "\"plain-object\"");

        let kind: Kind = serde_json::from_str("\"address\"").unwrap();
        assert_eq!(kind, Kind::Address);

        let kind: Kind = serde_json::from_str("\"currency\"").unwrap();
        assert!(!kind.is_builtin());
    }
}
