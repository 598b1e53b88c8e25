//! @acp:module "Built-in Renderers"
//! @acp:summary "Renderers for plain objects, booleans and addresses"
//! @acp:domain format
//! @acp:layer output

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Value};

use super::link::{Coordinate, Link, LinkAttrs};
use super::templates::{LINK_TEMPLATE, PRE_TEMPLATE};
use super::{RenderContext, Renderer};
use crate::error::{DataguessError, Result};
use crate::kind::{is_truthy, Kind};

/// Indented JSON in a `<pre>` block
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainObjectRenderer;

impl Renderer for PlainObjectRenderer {
    fn kind(&self) -> Kind {
        Kind::PlainObject
    }

    fn render(&self, value: &Value, ctx: &RenderContext) -> Result<String> {
        let json = to_json_pretty(value, ctx.config.indent)?;
        if let Some(html) = ctx.templates.render(PRE_TEMPLATE, &json!({ "json": &json }))? {
            return Ok(html);
        }
        Ok(format!("<pre>{}</pre>", json))
    }
}

fn to_json_pretty(value: &Value, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| DataguessError::Other(e.to_string()))
}

/// Affirmative/negative glyph followed by the value
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanRenderer;

impl Renderer for BooleanRenderer {
    fn kind(&self) -> Kind {
        Kind::Boolean
    }

    fn render(&self, value: &Value, ctx: &RenderContext) -> Result<String> {
        // A pinned field may hand us a non-boolean; fall back to truthiness.
        let glyph = if is_truthy(value) {
            &ctx.config.affirmative
        } else {
            &ctx.config.negative
        };
        Ok(format!("{} {}", glyph, display_value(value)))
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Map link for `{lat, lng}` objects
#[derive(Debug, Default, Clone)]
pub struct AddressRenderer {
    attrs: Option<LinkAttrs>,
}

impl AddressRenderer {
    pub fn new() -> Self {
        Self { attrs: None }
    }

    /// Use these link attributes instead of the configured defaults
    pub fn with_attrs(attrs: LinkAttrs) -> Self {
        Self { attrs: Some(attrs) }
    }
}

impl Renderer for AddressRenderer {
    fn kind(&self) -> Kind {
        Kind::Address
    }

    fn render(&self, value: &Value, ctx: &RenderContext) -> Result<String> {
        let lat = Coordinate::from_member(value, "lat")
            .inspect_err(|e| tracing::warn!("Cannot render address: {}", e))?;
        let lng = Coordinate::from_member(value, "lng")
            .inspect_err(|e| tracing::warn!("Cannot render address: {}", e))?;

        let precision = ctx.config.precision;
        let link = Link::new(
            &ctx.config.map_url,
            &format!("{}/{}", lat.raw, lng.raw),
            format!(
                "{} {}/{}",
                ctx.config.pin,
                lat.to_fixed(precision),
                lng.to_fixed(precision)
            ),
            self.attrs.as_ref(),
            &ctx.config.link_target,
        );

        if let Some(html) = ctx.templates.render(LINK_TEMPLATE, &link)? {
            return Ok(html);
        }
        Ok(link.to_html())
    }
}
