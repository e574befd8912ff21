//! Identifier validation
//!
//! An element whose attributes cannot all be serialized must be findable
//! again when the message is rendered. Within one message that requires:
//!
//! - an identifier on DOM elements carrying non-whitelisted attributes;
//! - an identifier on any element with unsafe attributes whose tag name
//!   occurs more than once among such elements.
//!
//! An identifier is either the reserved attribute or a namespaced tag name.

use crate::error::{ExtractionError, Result};
use crate::i18n::naming::Naming;
use crate::i18n::whitelisting::Whitelist;
use crate::jsx::Element;
use indexmap::IndexMap;

/// Checks every element below `root` (one translation block).
pub fn validate_message(root: &Element, naming: &dyn Naming, whitelist: &dyn Whitelist) -> Result<()> {
    let mut anonymous: IndexMap<String, Vec<&Element>> = IndexMap::new();

    for element in root.descendant_elements() {
        if !whitelist.has_unsafe_attributes(element) || has_identifier(element, naming) {
            continue;
        }

        let tag = naming.tag_name(element);
        if element.name.is_dom_element() && whitelist.has_sanitized_attributes(element) {
            return Err(ExtractionError::MissingIdentifier {
                tag,
                span: element.source_span,
            });
        }
        anonymous.entry(tag).or_default().push(element);
    }

    match anonymous.into_iter().find(|(_, elements)| elements.len() > 1) {
        Some((tag, elements)) => Err(ExtractionError::DuplicateElementName {
            tag,
            span: elements[1].source_span,
        }),
        None => Ok(()),
    }
}

fn has_identifier(element: &Element, naming: &dyn Naming) -> bool {
    naming.has_namespaced_identifier(element) || naming.find_identifier_attribute(element).is_some()
}
