//! Message Serializer
//!
//! Turns the element tree of one translation block into its canonical
//! message string: text verbatim, `{path}` placeholders for interpolations
//! and inline tags carrying only whitelisted attributes.
//!
//! ```text
//! <I18N>O, hai, <span title="boop">{name}</span>.</I18N>
//!   => O, hai, <span title="boop">{name}</span>.
//! ```
//!
//! Elements with attributes that cannot be serialized get their identifier
//! appended to the tag name (`<span:step-2>...</span:step-2>`) so the
//! renderer can map them back to the source element.

use crate::error::Result;
use crate::i18n::naming::Naming;
use crate::i18n::whitelisting::Whitelist;
use crate::jsx::{Attribute, Element, Expression, Node};

pub struct MessageSerializer<'a> {
    naming: &'a dyn Naming,
    whitelist: &'a dyn Whitelist,
}

impl<'a> MessageSerializer<'a> {
    pub fn new(naming: &'a dyn Naming, whitelist: &'a dyn Whitelist) -> Self {
        MessageSerializer { naming, whitelist }
    }

    /// Serializes the children of `root`, trimming the result once.
    pub fn extract_message(&self, root: &Element) -> Result<String> {
        Ok(self.extract_children(root)?.trim().to_string())
    }

    fn extract_children(&self, element: &Element) -> Result<String> {
        element
            .children
            .iter()
            .try_fold(String::new(), |mut message, child| {
                message.push_str(&self.extract_child(child)?);
                Ok(message)
            })
    }

    pub fn extract_child(&self, node: &Node) -> Result<String> {
        match node {
            Node::Literal(literal) => Ok(literal.text().into_owned()),
            Node::ExpressionContainer(container) => self.extract_expression(&container.expression),
            Node::Element(element) => self.extract_element(element),
            Node::Text(text) => Ok(text.value.clone()),
        }
    }

    pub fn extract_expression(&self, expression: &Expression) -> Result<String> {
        Ok(format!("{{{}}}", self.naming.member_expression_path(expression)?))
    }

    pub fn extract_attribute(&self, attribute: &Attribute) -> Result<String> {
        Ok(format!(
            "{}=\"{}\"",
            self.naming.attribute_name(attribute),
            self.naming.attribute_value(attribute)?
        ))
    }

    pub fn extract_attributes(&self, element: &Element) -> Result<String> {
        let attrs = self.whitelist.extractable_attributes(element);
        if attrs.is_empty() {
            return Ok(String::new());
        }

        let attrs_str = attrs
            .into_iter()
            .map(|attr| self.extract_attribute(attr))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!(" {}", attrs_str.join(" ")))
    }

    pub fn extract_element(&self, element: &Element) -> Result<String> {
        let mut name = self.naming.tag_name(element);
        if self.whitelist.has_unsafe_attributes(element) {
            if let Some(id) = self.naming.find_identifier_attribute(element) {
                name = format!("{}:{}", name, id);
            }
        }

        let attrs = self.extract_attributes(element)?;
        if element.is_self_closing() {
            return Ok(format!("<{}{} />", name, attrs));
        }

        let children = self.extract_children(element)?;
        Ok(format!("<{}{}>{}</{}>", name, attrs, children, name))
    }
}
