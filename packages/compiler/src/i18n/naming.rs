//! Naming
//!
//! Textual names for tags, attributes and interpolated expressions, as they
//! appear in an extracted message.

use crate::config::ExtractorConfig;
use crate::error::{ExtractionError, Result};
use crate::jsx::{Attribute, AttributeName, Element, ElementName, Expression};

pub trait Naming: Send + Sync {
    /// Canonical tag name: `span`, `span:step-2`, `ReactIntl.FormattedNumber`
    fn tag_name(&self, element: &Element) -> String;

    fn attribute_name(&self, attribute: &Attribute) -> String;

    /// Literal value, escaped for embedding between double quotes
    fn attribute_value(&self, attribute: &Attribute) -> Result<String>;

    /// Dotted path of an interpolated expression: `this.props.subject`
    fn member_expression_path(&self, expression: &Expression) -> Result<String>;

    /// Value of the reserved identifier attribute, if present with a literal
    /// value. Namespaced tags already name themselves and have none.
    fn find_identifier_attribute(&self, element: &Element) -> Option<String>;

    /// Whether the tag itself already carries an identifier (`<span:step-2>`)
    fn has_namespaced_identifier(&self, element: &Element) -> bool {
        matches!(element.name, ElementName::Namespaced { .. })
    }

    /// Whether `attribute` is the reserved identifier attribute
    fn is_identifier_attribute(&self, attribute: &Attribute) -> bool;
}

/// Naming for JSX trees
#[derive(Debug, Clone)]
pub struct JsxNaming {
    id_attribute: String,
}

impl JsxNaming {
    pub fn new(id_attribute: impl Into<String>) -> Self {
        JsxNaming {
            id_attribute: id_attribute.into(),
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        JsxNaming::new(config.id_attribute.clone())
    }
}

impl Default for JsxNaming {
    fn default() -> Self {
        JsxNaming::from_config(&ExtractorConfig::default())
    }
}

impl Naming for JsxNaming {
    fn tag_name(&self, element: &Element) -> String {
        element.name.to_string()
    }

    fn attribute_name(&self, attribute: &Attribute) -> String {
        attribute.name.to_string()
    }

    fn attribute_value(&self, attribute: &Attribute) -> Result<String> {
        attribute
            .literal_value()
            .map(escape_attribute_value)
            .ok_or_else(|| ExtractionError::NonLiteralAttribute {
                name: attribute.name.to_string(),
            })
    }

    fn member_expression_path(&self, expression: &Expression) -> Result<String> {
        expression
            .member_path()
            .map(|path| path.join("."))
            .ok_or_else(|| ExtractionError::UnsupportedExpression {
                kind: expression.kind().to_string(),
                span: expression.source_span().copied(),
            })
    }

    fn find_identifier_attribute(&self, element: &Element) -> Option<String> {
        if self.has_namespaced_identifier(element) {
            return None;
        }
        element
            .attrs()
            .find(|attr| self.is_identifier_attribute(attr))
            .and_then(|attr| attr.literal_value())
            .map(str::to_string)
    }

    fn is_identifier_attribute(&self, attribute: &Attribute) -> bool {
        match &attribute.name {
            AttributeName::Identifier(name) => *name == self.id_attribute,
            AttributeName::Namespaced { .. } => attribute.name.to_string() == self.id_attribute,
        }
    }
}

fn escape_attribute_value(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
