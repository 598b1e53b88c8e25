//! @acp:module "Links"
//! @acp:summary "Hyperlink construction and coordinate formatting"
//! @acp:domain format
//! @acp:layer output

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DataguessError, Result};

/// Target used when link attributes leave it unset
pub const DEFAULT_TARGET: &str = "_blank";

/// Caller-supplied link attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl LinkAttrs {
    pub fn target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
        }
    }
}

/// A resolved `<a>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub target: String,
    pub text: String,
}

impl Link {
    /// Build a link to `url` + `suffix`.
    ///
    /// The target comes from `attrs`, falling back to `default_target` when
    /// no attributes are given or they carry no target.
    pub fn new(
        url: &str,
        suffix: &str,
        text: impl Into<String>,
        attrs: Option<&LinkAttrs>,
        default_target: &str,
    ) -> Self {
        let target = attrs
            .and_then(|a| a.target.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(default_target);

        Self {
            href: format!("{}{}", url, suffix),
            target: target.to_string(),
            text: text.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<a href="{}" target="{}">{}</a>"#,
            self.href, self.target, self.text
        )
    }
}

/// Render an `<a>` element, defaulting the target to `_blank`
pub fn link(url: &str, suffix: &str, text: &str, attrs: Option<&LinkAttrs>) -> String {
    Link::new(url, suffix, text, attrs, DEFAULT_TARGET).to_html()
}

/// A coordinate read from a `lat`/`lng` member
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    /// Text as given, used at full precision in URLs
    pub raw: String,
    pub value: f64,
}

impl Coordinate {
    /// Read a numeric-like member: a number or a string holding a finite float
    pub fn from_member(data: &Value, field: &'static str) -> Result<Self> {
        let invalid = |value: String| DataguessError::InvalidCoordinate { field, value };

        match data.get(field) {
            Some(Value::Number(n)) => {
                let value = n.as_f64().ok_or_else(|| invalid(n.to_string()))?;
                let raw = if n.is_f64() {
                    number_to_string(value)
                } else {
                    n.to_string()
                };
                Ok(Self { raw, value })
            }
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Self {
                    raw: s.clone(),
                    value,
                }),
                _ => Err(invalid(s.clone())),
            },
            Some(other) => Err(invalid(other.to_string())),
            None => Err(invalid("undefined".to_string())),
        }
    }

    pub fn to_fixed(&self, digits: usize) -> String {
        to_fixed(self.value, digits)
    }
}

/// Exact decimal expansion length; covers every fractional digit of an f64
const EXACT_DIGITS: usize = 1100;

/// Largest digit count `toFixed` accepts
const MAX_FIXED_DIGITS: usize = 100;

/// Format with a fixed number of decimals the way `Number#toFixed` does.
///
/// Rounds the exact binary value to nearest; only a true decimal tie
/// (e.g. `0.125`) rounds away from zero. `0.105` is stored as
/// `0.10499...` and gives `0.10`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FIXED_DIGITS);
    if !value.is_finite() || value.abs() >= 1e21 {
        return number_to_string(value);
    }
    // -0 prints without a sign
    let value = if value == 0.0 { 0.0 } else { value };

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let tail = frac.get(digits..).unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let mut kept: Vec<char> = int_part.chars().chain(frac[..digits].chars()).collect();
    round_up(&mut kept);

    let split = kept.len() - digits;
    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.extend(&kept[..split]);
    if digits > 0 {
        out.push('.');
        out.extend(&kept[split..]);
    }
    out
}

/// Add one unit in the last place of a decimal digit string
fn round_up(digits: &mut Vec<char>) {
    for d in digits.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = char::from(*d as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}

/// Print a number the way `Number#toString` does.
///
/// Shortest round-trip digits; whole numbers have no fraction (`1`, not
/// `1.0`) and exponent notation is used outside `[1e-6, 1e21)`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const OSM: &str = "https://www.openstreetmap.org/#map=5/";

    #[test]
    fn test_link_defaults_target() {
        assert_eq!(
            link(OSM, "1/2", "x", None),
            r#"<a href="https://www.openstreetmap.org/#map=5/1/2" target="_blank">x</a>"#
        );
        assert_eq!(
            link(OSM, "1/2", "x", Some(&LinkAttrs::default())),
            r#"<a href="https://www.openstreetmap.org/#map=5/1/2" target="_blank">x</a>"#
        );
    }

    #[test]
    fn test_link_target_override() {
        let attrs = LinkAttrs::target("_self");
        assert_eq!(
            link("https://a/", "b", "c", Some(&attrs)),
            r#"<a href="https://a/b" target="_self">c</a>"#
        );
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(0.1, 2), "0.10");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(48.8566, 2), "48.86");
        assert_eq!(to_fixed(2.0, 0), "2");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // Stored just below the midpoint, so these round down
        assert_eq!(to_fixed(0.105, 2), "0.10");
        assert_eq!(to_fixed(0.015, 2), "0.01");
        assert_eq!(to_fixed(0.205, 2), "0.20");
        assert_eq!(to_fixed(-0.105, 2), "-0.10");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        // Exact ties round away from zero
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(0.625, 2), "0.63");
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(2.5), "2.5");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(123456789.0), "123456789");
    }

    #[test]
    fn test_coordinate_from_member() {
        let data = json!({"lat": 0.1, "lng": "12.5", "bad": "north", "flag": true});

        let lat = Coordinate::from_member(&data, "lat").unwrap();
        assert_eq!(lat.raw, "0.1");
        assert_eq!(lat.to_fixed(2), "0.10");

        let lng = Coordinate::from_member(&data, "lng").unwrap();
        assert_eq!(lng.raw, "12.5");
        assert_eq!(lng.value, 12.5);

        assert!(matches!(
            Coordinate::from_member(&data, "bad"),
            Err(DataguessError::InvalidCoordinate { field: "bad", .. })
        ));
        assert!(Coordinate::from_member(&data, "flag").is_err());
        assert!(Coordinate::from_member(&data, "missing").is_err());
    }

    #[test]
    fn test_coordinate_whole_float_has_no_fraction() {
        let data: Value = serde_json::from_str(r#"{"lat": 1.0, "lng": 2.50, "alt": 7}"#).unwrap();
        assert_eq!(Coordinate::from_member(&data, "lat").unwrap().raw, "1");
        assert_eq!(Coordinate::from_member(&data, "lng").unwrap().raw, "2.5");
        assert_eq!(Coordinate::from_member(&data, "alt").unwrap().raw, "7");
    }
}
