//! Translation block scanner
//!
//! Finds the messages of a whole program AST (ESTree/Babel JSON): plain
//! `i18n("...")` calls and `<I18N>...</I18N>` element blocks. Blocks are not
//! searched for nested blocks.

use crate::error::Result;
use crate::i18n::extractor::{ExtractedMessage, MessageExtractor, MessageKind};
use crate::jsx::node_type;
use crate::parse_util::{describe_span, ParseSourceSpan};
use rayon::prelude::*;
use serde_json::Value;

/// Keys that never contain program nodes
const SKIPPED_KEYS: &[&str] = &["loc", "extra", "range", "comments", "leadingComments", "trailingComments", "innerComments", "tokens"];

enum Found<'v> {
    Call { message: String, node: &'v Value },
    Block(&'v Value),
}

impl Found<'_> {
    fn node(&self) -> &Value {
        match self {
            Found::Call { node, .. } => node,
            Found::Block(node) => node,
        }
    }
}

/// Extracts every message of `program` in source order.
pub fn scan_program(
    program: &Value,
    extractor: &MessageExtractor,
    source_file: Option<&str>,
) -> Result<Vec<ExtractedMessage>> {
    let mut found = Vec::new();
    collect(program, extractor, &mut found);

    if found.iter().all(|f| ParseSourceSpan::from_estree(f.node()).is_some()) {
        found.sort_by_key(|f| ParseSourceSpan::from_estree(f.node()).map(|s| s.start.offset));
    }

    let results: Vec<Result<ExtractedMessage>> = found
        .par_iter()
        .map(|f| {
            let (message, kind) = match f {
                Found::Call { message, .. } => (message.clone(), MessageKind::Call),
                Found::Block(node) => (extractor.extract_block_value(node)?, MessageKind::Element),
            };
            Ok(ExtractedMessage {
                message,
                kind,
                source_file: source_file.map(str::to_string),
                span: ParseSourceSpan::from_estree(f.node()),
            })
        })
        .collect();

    results.into_iter().collect()
}

/// Parses `content` as program JSON, then scans it.
pub fn scan_json(
    content: &str,
    extractor: &MessageExtractor,
    source_file: Option<&str>,
) -> Result<Vec<ExtractedMessage>> {
    let program: Value = serde_json::from_str(content)?;
    scan_program(&program, extractor, source_file)
}

fn collect<'v>(value: &'v Value, extractor: &MessageExtractor, found: &mut Vec<Found<'v>>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect(item, extractor, found);
            }
        }
        Value::Object(map) => {
            match node_type(value) {
                Some("JSXElement") if is_block_element(value, extractor) => {
                    found.push(Found::Block(value));
                    return;
                }
                Some("CallExpression") if is_block_call(value, extractor) => {
                    match call_message(value) {
                        Some(message) => found.push(Found::Call { message, node: value }),
                        None => extractor.logger().warn(&format!(
                            "{}() called without a string literal{}; nothing extracted",
                            extractor.config().block_function,
                            describe_span(&ParseSourceSpan::from_estree(value)),
                        )),
                    }
                    return;
                }
                _ => {}
            }

            for (key, child) in map {
                if !SKIPPED_KEYS.contains(&key.as_str()) {
                    collect(child, extractor, found);
                }
            }
        }
        _ => {}
    }
}

fn is_block_element(node: &Value, extractor: &MessageExtractor) -> bool {
    let name = node.get("openingElement").and_then(|o| o.get("name"));
    match name {
        Some(name) if node_type(name) == Some("JSXIdentifier") => {
            name.get("name").and_then(Value::as_str) == Some(extractor.config().block_element.as_str())
        }
        _ => false,
    }
}

fn is_block_call(node: &Value, extractor: &MessageExtractor) -> bool {
    match node.get("callee") {
        Some(callee) if node_type(callee) == Some("Identifier") => {
            callee.get("name").and_then(Value::as_str) == Some(extractor.config().block_function.as_str())
        }
        _ => false,
    }
}

fn call_message(node: &Value) -> Option<String> {
    let argument = node.get("arguments")?.as_array()?.first()?;
    match node_type(argument) {
        Some("StringLiteral") | Some("Literal") => argument.get("value")?.as_str().map(str::to_string),
        Some("TemplateLiteral") => {
            // Only template literals without substitutions are static text.
            let quasis = argument.get("quasis")?.as_array()?;
            if quasis.len() != 1 {
                return None;
            }
            let value = quasis[0].get("value")?;
            value
                .get("cooked")
                .or_else(|| value.get("raw"))
                .and_then(Value::as_str)
                .map(str::to_string)
        }
        _ => None,
    }
}
