//! ESTree / Babel JSON conversion
//!
//! Builds typed trees from the JSON an upstream JavaScript parser emits
//! (`@babel/parser`, acorn-jsx, ...). This is where malformed or unexpected
//! input is caught: a child kind outside the four supported ones is an
//! `UnexpectedNodeKind` error and nothing is converted.

use super::ast::*;
use crate::error::{ExtractionError, Result};
use crate::parse_util::ParseSourceSpan;
use serde_json::Value;

/// `type` field of an ESTree node
pub fn node_type(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

fn required<'a>(node: &'a Value, field: &str) -> Result<&'a Value> {
    node.get(field).filter(|v| !v.is_null()).ok_or_else(|| {
        ExtractionError::invalid_tree(format!(
            "{} node is missing `{}`",
            node_type(node).unwrap_or("untyped"),
            field
        ))
    })
}

fn required_str<'a>(node: &'a Value, field: &str) -> Result<&'a str> {
    required(node, field)?.as_str().ok_or_else(|| {
        ExtractionError::invalid_tree(format!(
            "`{}` of {} node is not a string",
            field,
            node_type(node).unwrap_or("untyped")
        ))
    })
}

fn required_array<'a>(node: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
    match node.get(field) {
        None | Some(Value::Null) => Err(ExtractionError::invalid_tree(format!(
            "{} node is missing `{}`",
            node_type(node).unwrap_or("untyped"),
            field
        ))),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ExtractionError::invalid_tree(format!(
            "`{}` of {} node is not an array",
            field,
            node_type(node).unwrap_or("untyped")
        ))),
    }
}

/// Converts a `JSXElement` node.
pub fn element_from_value(node: &Value) -> Result<Element> {
    match node_type(node) {
        Some("JSXElement") => {}
        Some(other) => {
            return Err(ExtractionError::UnexpectedNodeKind {
                kind: other.to_string(),
                span: ParseSourceSpan::from_estree(node),
            })
        }
        None => return Err(ExtractionError::invalid_tree("node has no `type`")),
    }

    let opening = required(node, "openingElement")?;
    let name = element_name_from_value(required(opening, "name")?)?;
    let attributes = required_array(opening, "attributes")?
        .iter()
        .map(attribute_from_value)
        .collect::<Result<Vec<_>>>()?;
    let children = match node.get("children") {
        Some(Value::Array(children)) => children
            .iter()
            .map(child_from_value)
            .collect::<Result<Vec<_>>>()?,
        None | Some(Value::Null) => Vec::new(),
        Some(_) => {
            return Err(ExtractionError::invalid_tree(
                "`children` of JSXElement node is not an array",
            ))
        }
    };

    Ok(Element {
        name,
        attributes,
        children,
        source_span: ParseSourceSpan::from_estree(node),
    })
}

/// Converts one child of a `JSXElement`.
pub fn child_from_value(node: &Value) -> Result<Node> {
    let span = ParseSourceSpan::from_estree(node);
    let kind = node_type(node).ok_or_else(|| ExtractionError::invalid_tree("child node has no `type`"))?;

    match kind {
        "JSXText" => Ok(Node::Text(Text {
            value: required_str(node, "value")?.to_string(),
            source_span: span,
        })),
        "JSXElement" => Ok(Node::Element(element_from_value(node)?)),
        "JSXExpressionContainer" => Ok(Node::ExpressionContainer(ExpressionContainer {
            expression: expression_from_value(required(node, "expression")?)?,
            source_span: span,
        })),
        "StringLiteral" | "NumericLiteral" | "Literal" => {
            let literal = literal_from_value(node)?.ok_or_else(|| ExtractionError::UnexpectedNodeKind {
                kind: kind.to_string(),
                span,
            })?;
            Ok(Node::Literal(literal))
        }
        other => Err(ExtractionError::UnexpectedNodeKind {
            kind: other.to_string(),
            span,
        }),
    }
}

/// Reads a string or numeric literal. `Ok(None)` for literal kinds that are
/// neither (regexes, booleans, `null`).
pub fn literal_from_value(node: &Value) -> Result<Option<Literal>> {
    let raw = node
        .get("extra")
        .and_then(|extra| extra.get("raw"))
        .or_else(|| node.get("raw"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let value = match required(node, "value")? {
        Value::String(s) => LiteralValue::String(s.clone()),
        Value::Number(n) => match n.as_f64() {
            Some(n) => LiteralValue::Number(n),
            None => return Ok(None),
        },
        _ => return Ok(None),
    };
    // Only numbers keep their raw text; string values are already unquoted.
    let raw = match value {
        LiteralValue::Number(_) => raw,
        LiteralValue::String(_) => None,
    };

    Ok(Some(Literal {
        value,
        raw,
        source_span: ParseSourceSpan::from_estree(node),
    }))
}

fn element_name_from_value(node: &Value) -> Result<ElementName> {
    match node_type(node) {
        Some("JSXIdentifier") => Ok(ElementName::Identifier(required_str(node, "name")?.to_string())),
        Some("JSXNamespacedName") => {
            let namespace = required_str(required(node, "namespace")?, "name")?;
            let name = required_str(required(node, "name")?, "name")?;
            Ok(ElementName::Namespaced {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
        }
        Some("JSXMemberExpression") => {
            let mut parts = smallvec::SmallVec::new();
            collect_jsx_member(node, &mut parts)?;
            Ok(ElementName::Member(parts))
        }
        Some(other) => Err(ExtractionError::invalid_tree(format!(
            "unsupported element name type {}",
            other
        ))),
        None => Err(ExtractionError::invalid_tree("element name has no `type`")),
    }
}

fn collect_jsx_member(node: &Value, parts: &mut smallvec::SmallVec<[String; 4]>) -> Result<()> {
    match node_type(node) {
        Some("JSXMemberExpression") => {
            collect_jsx_member(required(node, "object")?, parts)?;
            parts.push(required_str(required(node, "property")?, "name")?.to_string());
            Ok(())
        }
        Some("JSXIdentifier") => {
            parts.push(required_str(node, "name")?.to_string());
            Ok(())
        }
        Some(other) => Err(ExtractionError::invalid_tree(format!(
            "unsupported member name part {}",
            other
        ))),
        None => Err(ExtractionError::invalid_tree("member name part has no `type`")),
    }
}

fn attribute_from_value(node: &Value) -> Result<AttributeItem> {
    match node_type(node) {
        Some("JSXAttribute") => {
            let name_node = required(node, "name")?;
            let name = match node_type(name_node) {
                Some("JSXNamespacedName") => AttributeName::Namespaced {
                    namespace: required_str(required(name_node, "namespace")?, "name")?.to_string(),
                    name: required_str(required(name_node, "name")?, "name")?.to_string(),
                },
                _ => AttributeName::Identifier(required_str(name_node, "name")?.to_string()),
            };
            let value = match node.get("value") {
                None | Some(Value::Null) => None,
                Some(value) => Some(attribute_value_from_value(value)?),
            };
            Ok(AttributeItem::Attribute(Attribute {
                name,
                value,
                source_span: ParseSourceSpan::from_estree(node),
            }))
        }
        Some("JSXSpreadAttribute") => Ok(AttributeItem::Spread(expression_from_value(required(
            node, "argument",
        )?)?)),
        Some(other) => Err(ExtractionError::invalid_tree(format!(
            "unsupported attribute type {}",
            other
        ))),
        None => Err(ExtractionError::invalid_tree("attribute has no `type`")),
    }
}

fn attribute_value_from_value(node: &Value) -> Result<AttributeValue> {
    match node_type(node) {
        Some("StringLiteral") | Some("Literal") => match required(node, "value")? {
            Value::String(s) => Ok(AttributeValue::Literal(s.clone())),
            _ => Ok(AttributeValue::Expression(expression_from_value(node)?)),
        },
        Some("JSXExpressionContainer") => {
            let expression = required(node, "expression")?;
            // `title={"boop"}` is as static as `title="boop"`
            match node_type(expression) {
                Some("StringLiteral") | Some("Literal")
                    if expression.get("value").map_or(false, Value::is_string) =>
                {
                    Ok(AttributeValue::Literal(required_str(expression, "value")?.to_string()))
                }
                _ => Ok(AttributeValue::Expression(expression_from_value(expression)?)),
            }
        }
        Some("JSXElement") => Ok(AttributeValue::Element(Box::new(element_from_value(node)?))),
        Some(other) => Ok(AttributeValue::Expression(Expression::Other {
            kind: other.to_string(),
            source_span: ParseSourceSpan::from_estree(node),
        })),
        None => Err(ExtractionError::invalid_tree("attribute value has no `type`")),
    }
}

/// Converts an expression. Kinds without a dotted name become
/// `Expression::Other`; naming them later is the caller's error to raise.
pub fn expression_from_value(node: &Value) -> Result<Expression> {
    let source_span = ParseSourceSpan::from_estree(node);
    let kind = node_type(node).ok_or_else(|| ExtractionError::invalid_tree("expression has no `type`"))?;

    match kind {
        "Identifier" | "JSXIdentifier" => Ok(Expression::Identifier {
            name: required_str(node, "name")?.to_string(),
            source_span,
        }),
        "ThisExpression" => Ok(Expression::This { source_span }),
        "MemberExpression" | "JSXMemberExpression" => {
            let computed = node.get("computed").and_then(Value::as_bool).unwrap_or(false);
            let property = required(node, "property")?;
            let property_name = match node_type(property) {
                Some("Identifier") | Some("JSXIdentifier") if !computed => {
                    Some(required_str(property, "name")?.to_string())
                }
                _ => None,
            };
            match property_name {
                Some(property) => Ok(Expression::Member {
                    object: Box::new(expression_from_value(required(node, "object")?)?),
                    property,
                    source_span,
                }),
                None => Ok(Expression::Other {
                    kind: "ComputedMemberExpression".to_string(),
                    source_span,
                }),
            }
        }
        other => Ok(Expression::Other {
            kind: other.to_string(),
            source_span,
        }),
    }
}
