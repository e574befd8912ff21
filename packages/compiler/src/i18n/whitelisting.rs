//! Attribute Whitelisting
//!
//! Decides which attributes may be copied verbatim into an extracted message.
//! Anything else is stripped from the message and reattached at render time
//! by identifier lookup.
//!
//! Entries are `tag|attribute`; attributes applying to all tags use `*`.
//! Tag names are matched on the base name, so `span:step-2` looks up `span`.

use crate::config::ExtractorConfig;
use crate::i18n::naming::{JsxNaming, Naming};
use crate::jsx::{Attribute, Element};
use crate::logging::{Logger, NullLogger};
use crate::parse_util::describe_span;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

static DEFAULT_WHITELIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "*|title",
        "*|alt",
        "*|lang",
        "*|dir",
        "a|href",
        "a|target",
        "a|rel",
        "abbr|title",
        "img|src",
    ]
    .into_iter()
    .collect()
});

/// Default whitelist entries
pub fn default_whitelist() -> &'static HashSet<&'static str> {
    &DEFAULT_WHITELIST
}

pub trait Whitelist: Send + Sync {
    /// Attributes safe to serialize, in source order. Whitelisted attributes
    /// without a literal value are reported through the logger and skipped.
    fn extractable_attributes<'e>(&self, element: &'e Element) -> Vec<&'e Attribute>;

    /// Whether `element` carries any attribute outside the extractable set.
    /// The reserved identifier attribute counts as neither.
    fn has_unsafe_attributes(&self, element: &Element) -> bool;

    /// Whether `element` carries an attribute whose name is not whitelisted
    /// at all (spreads included).
    fn has_sanitized_attributes(&self, element: &Element) -> bool;
}

pub struct AttributeWhitelist {
    entries: HashSet<String>,
    naming: JsxNaming,
    logger: Arc<dyn Logger>,
}

impl AttributeWhitelist {
    pub fn new(config: &ExtractorConfig, logger: Arc<dyn Logger>) -> Self {
        let mut entries: HashSet<String> = if config.replace_default_attributes {
            HashSet::new()
        } else {
            DEFAULT_WHITELIST.iter().map(|e| e.to_string()).collect()
        };
        entries.extend(config.attributes.iter().cloned());

        AttributeWhitelist {
            entries,
            naming: JsxNaming::from_config(config),
            logger,
        }
    }

    pub fn is_whitelisted(&self, element: &Element, attribute: &Attribute) -> bool {
        let attr_name = self.naming.attribute_name(attribute);
        let tag = element.name.base_name();
        self.entries.contains(&format!("{}|{}", tag, attr_name))
            || self.entries.contains(&format!("*|{}", attr_name))
    }

    fn is_extractable(&self, element: &Element, attribute: &Attribute) -> bool {
        self.is_whitelisted(element, attribute) && attribute.literal_value().is_some()
    }

    /// Named attributes other than the reserved identifier attribute
    fn candidate_attributes<'e>(&'e self, element: &'e Element) -> impl Iterator<Item = &'e Attribute> + 'e {
        element
            .attrs()
            .filter(move |attr| !self.naming.is_identifier_attribute(attr))
    }
}

impl Default for AttributeWhitelist {
    fn default() -> Self {
        AttributeWhitelist::new(&ExtractorConfig::default(), Arc::new(NullLogger::new()))
    }
}

impl Whitelist for AttributeWhitelist {
    fn extractable_attributes<'e>(&self, element: &'e Element) -> Vec<&'e Attribute> {
        let mut extractable = Vec::new();

        for attr in element.attrs() {
            if self.naming.is_identifier_attribute(attr) || !self.is_whitelisted(element, attr) {
                continue;
            }
            if attr.literal_value().is_some() {
                extractable.push(attr);
            } else {
                self.logger.warn(&format!(
                    "Attribute `{}` of <{}>{} is whitelisted but has no literal value; it will not be extracted",
                    attr.name,
                    element.name,
                    describe_span(&attr.source_span),
                ));
            }
        }

        extractable
    }

    fn has_unsafe_attributes(&self, element: &Element) -> bool {
        element.has_spread_attributes()
            || self
                .candidate_attributes(element)
                .any(|attr| !self.is_extractable(element, attr))
    }

    fn has_sanitized_attributes(&self, element: &Element) -> bool {
        element.has_spread_attributes()
            || self
                .candidate_attributes(element)
                .any(|attr| !self.is_whitelisted(element, attr))
    }
}
