#![allow(dead_code)]

/**
 * Extraction Test Utilities
 *
 * Builders for the Babel-style JSON an upstream parser hands to the
 * extractor, so tests can describe source snippets compactly.
 */
use serde_json::{json, Value};

pub fn program(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "sourceType": "module", "body": body })
}

pub fn stmt(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

/// `let <name> = <init>;`
pub fn let_decl(name: &str, init: Value) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "let",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "Identifier", "name": name },
            "init": init
        }]
    })
}

/// `return <argument>;` inside a `render()` method of `React.createClass({...})`
pub fn create_class_render(body: Vec<Value>) -> Value {
    stmt(json!({
        "type": "CallExpression",
        "callee": path("React.createClass"),
        "arguments": [{
            "type": "ObjectExpression",
            "properties": [{
                "type": "ObjectMethod",
                "kind": "method",
                "key": { "type": "Identifier", "name": "render" },
                "params": [],
                "body": { "type": "BlockStatement", "body": body }
            }]
        }]
    }))
}

pub fn ret(argument: Value) -> Value {
    json!({ "type": "ReturnStatement", "argument": argument })
}

pub fn string(value: &str) -> Value {
    json!({ "type": "StringLiteral", "value": value, "extra": { "raw": format!("{:?}", value), "rawValue": value } })
}

pub fn call(callee: &str, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": path(callee), "arguments": arguments })
}

/// `i18n("<value>")`
pub fn i18n(value: &str) -> Value {
    call("i18n", vec![string(value)])
}

/// `` `${<expression>}` ``
pub fn template(expression: Value) -> Value {
    json!({
        "type": "TemplateLiteral",
        "expressions": [expression],
        "quasis": [
            { "type": "TemplateElement", "value": { "raw": "", "cooked": "" }, "tail": false },
            { "type": "TemplateElement", "value": { "raw": "", "cooked": "" }, "tail": true }
        ]
    })
}

/// `a`, `this.props.subject`, `Router.url`
pub fn path(path: &str) -> Value {
    let mut segments = path.split('.');
    let first = segments.next().unwrap_or_default();
    let root = if first == "this" {
        json!({ "type": "ThisExpression" })
    } else {
        json!({ "type": "Identifier", "name": first })
    };
    segments.fold(root, |object, property| {
        json!({
            "type": "MemberExpression",
            "computed": false,
            "object": object,
            "property": { "type": "Identifier", "name": property }
        })
    })
}

fn jsx_identifier(name: &str) -> Value {
    json!({ "type": "JSXIdentifier", "name": name })
}

/// Element name: `span`, `span:step-2` or `ReactIntl.FormattedNumber`
fn element_name(name: &str) -> Value {
    if let Some((namespace, local)) = name.split_once(':') {
        return json!({
            "type": "JSXNamespacedName",
            "namespace": jsx_identifier(namespace),
            "name": jsx_identifier(local)
        });
    }
    let mut parts = name.split('.');
    let first = jsx_identifier(parts.next().unwrap_or_default());
    parts.fold(first, |object, property| {
        json!({ "type": "JSXMemberExpression", "object": object, "property": jsx_identifier(property) })
    })
}

pub fn jsx(name: &str, attributes: Vec<Value>, children: Vec<Value>) -> Value {
    let self_closing = children.is_empty();
    let closing = if self_closing {
        Value::Null
    } else {
        json!({ "type": "JSXClosingElement", "name": element_name(name) })
    };
    json!({
        "type": "JSXElement",
        "openingElement": {
            "type": "JSXOpeningElement",
            "name": element_name(name),
            "attributes": attributes,
            "selfClosing": self_closing
        },
        "closingElement": closing,
        "children": children
    })
}

/// `<I18N>...</I18N>`
pub fn block(children: Vec<Value>) -> Value {
    jsx("I18N", vec![], children)
}

pub fn text(value: &str) -> Value {
    json!({ "type": "JSXText", "value": value, "extra": { "raw": value, "rawValue": value } })
}

/// `{<path>}`
pub fn interpolation(expression_path: &str) -> Value {
    container(path(expression_path))
}

pub fn container(expression: Value) -> Value {
    json!({ "type": "JSXExpressionContainer", "expression": expression })
}

/// `name="value"`
pub fn attr(name: &str, value: &str) -> Value {
    json!({ "type": "JSXAttribute", "name": jsx_identifier(name), "value": string(value) })
}

/// `name={expression}`
pub fn attr_expr(name: &str, expression: Value) -> Value {
    json!({ "type": "JSXAttribute", "name": jsx_identifier(name), "value": container(expression) })
}

/// Messages of a scanned program, with the default configuration
pub fn extract(program: &Value) -> jsx_i18n::Result<Vec<String>> {
    let extractor = jsx_i18n::MessageExtractor::default();
    extract_with(program, &extractor)
}

pub fn extract_with(program: &Value, extractor: &jsx_i18n::MessageExtractor) -> jsx_i18n::Result<Vec<String>> {
    let messages = jsx_i18n::i18n::scan_program(program, extractor, None)?;
    Ok(messages.into_iter().map(|m| m.message).collect())
}
