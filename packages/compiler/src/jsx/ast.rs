//! JSX AST
//!
//! Read-only element trees handed to the extractor by an upstream parser.
//! Only the four node kinds that may appear inside a translation block are
//! representable; anything else is rejected when the tree is built.

use crate::parse_util::ParseSourceSpan;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Child node of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Literal),
    ExpressionContainer(ExpressionContainer),
    Element(Element),
    Text(Text),
}

impl Node {
    pub fn source_span(&self) -> Option<&ParseSourceSpan> {
        match self {
            Node::Literal(n) => n.source_span.as_ref(),
            Node::ExpressionContainer(n) => n.source_span.as_ref(),
            Node::Element(n) => n.source_span.as_ref(),
            Node::Text(n) => n.source_span.as_ref(),
        }
    }

    /// ESTree-style type name, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Literal(l) => match l.value {
                LiteralValue::String(_) => "StringLiteral",
                LiteralValue::Number(_) => "NumericLiteral",
            },
            Node::ExpressionContainer(_) => "JSXExpressionContainer",
            Node::Element(_) => "JSXElement",
            Node::Text(_) => "JSXText",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
}

/// String or numeric literal
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    /// Source text of the literal, when the parser kept it
    pub raw: Option<String>,
    pub source_span: Option<ParseSourceSpan>,
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Literal {
            value: LiteralValue::String(value.into()),
            raw: None,
            source_span: None,
        }
    }

    pub fn number(value: f64) -> Self {
        Literal {
            value: LiteralValue::Number(value),
            raw: None,
            source_span: None,
        }
    }

    /// Textual value of the literal. Numbers prefer their raw source text and
    /// otherwise print the way JavaScript would (`1`, not `1.0`).
    pub fn text(&self) -> Cow<'_, str> {
        match &self.value {
            LiteralValue::String(s) => Cow::Borrowed(s.as_str()),
            LiteralValue::Number(n) => match &self.raw {
                Some(raw) => Cow::Borrowed(raw.as_str()),
                None => Cow::Owned(format_number(*n)),
            },
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // `1e21` => `1e+21`, `1.5e-7` stays
        let exponential = format!("{:e}", n);
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponential,
        }
    } else {
        format!("{}", n)
    }
}

/// Raw JSX text between tags
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
    pub source_span: Option<ParseSourceSpan>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
            source_span: None,
        }
    }
}

/// `{expression}` child
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionContainer {
    pub expression: Expression,
    pub source_span: Option<ParseSourceSpan>,
}

impl ExpressionContainer {
    pub fn new(expression: Expression) -> Self {
        ExpressionContainer {
            expression,
            source_span: None,
        }
    }
}

/// Expressions are only ever named, never evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier {
        name: String,
        source_span: Option<ParseSourceSpan>,
    },
    This {
        source_span: Option<ParseSourceSpan>,
    },
    Member {
        object: Box<Expression>,
        property: String,
        source_span: Option<ParseSourceSpan>,
    },
    /// Any expression kind that has no dotted name (calls, literals, ...)
    Other {
        kind: String,
        source_span: Option<ParseSourceSpan>,
    },
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier {
            name: name.into(),
            source_span: None,
        }
    }

    pub fn this() -> Self {
        Expression::This { source_span: None }
    }

    pub fn member(object: Expression, property: impl Into<String>) -> Self {
        Expression::Member {
            object: Box::new(object),
            property: property.into(),
            source_span: None,
        }
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Expression::Other {
            kind: kind.into(),
            source_span: None,
        }
    }

    /// Builds `a.b.c` from a dotted path; `this` becomes a this-expression.
    pub fn path(path: &str) -> Self {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let root = if first == "this" {
            Expression::this()
        } else {
            Expression::identifier(first)
        };
        segments.fold(root, |object, property| Expression::member(object, property))
    }

    pub fn kind(&self) -> &str {
        match self {
            Expression::Identifier { .. } => "Identifier",
            Expression::This { .. } => "ThisExpression",
            Expression::Member { .. } => "MemberExpression",
            Expression::Other { kind, .. } => kind,
        }
    }

    pub fn source_span(&self) -> Option<&ParseSourceSpan> {
        match self {
            Expression::Identifier { source_span, .. }
            | Expression::This { source_span }
            | Expression::Member { source_span, .. }
            | Expression::Other { source_span, .. } => source_span.as_ref(),
        }
    }

    /// Dotted segments from the root outwards, or `None` when some part of
    /// the chain is not a plain name.
    pub fn member_path(&self) -> Option<SmallVec<[&str; 4]>> {
        match self {
            Expression::Identifier { name, .. } => {
                let mut path = SmallVec::new();
                path.push(name.as_str());
                Some(path)
            }
            Expression::This { .. } => {
                let mut path = SmallVec::new();
                path.push("this");
                Some(path)
            }
            Expression::Member {
                object, property, ..
            } => {
                let mut path = object.member_path()?;
                path.push(property.as_str());
                Some(path)
            }
            Expression::Other { .. } => None,
        }
    }
}

/// Tag name of an element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementName {
    /// `span`, `Component`
    Identifier(String),
    /// `span:step-2`
    Namespaced { namespace: String, name: String },
    /// `ReactIntl.FormattedNumber`
    Member(SmallVec<[String; 4]>),
}

impl ElementName {
    /// Lower-case identifiers are DOM elements; everything else is a
    /// component reference.
    pub fn is_dom_element(&self) -> bool {
        match self {
            ElementName::Identifier(name) => name
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_lowercase()),
            ElementName::Namespaced { namespace, .. } => namespace
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_lowercase()),
            ElementName::Member(_) => false,
        }
    }

    /// Name used for whitelist lookups: the namespace of a namespaced name.
    pub fn base_name(&self) -> Cow<'_, str> {
        match self {
            ElementName::Identifier(name) => Cow::Borrowed(name.as_str()),
            ElementName::Namespaced { namespace, .. } => Cow::Borrowed(namespace.as_str()),
            ElementName::Member(parts) => Cow::Owned(parts.join(".")),
        }
    }
}

impl std::fmt::Display for ElementName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementName::Identifier(name) => write!(f, "{}", name),
            ElementName::Namespaced { namespace, name } => write!(f, "{}:{}", namespace, name),
            ElementName::Member(parts) => write!(f, "{}", parts.join(".")),
        }
    }
}

/// Attribute name, possibly namespaced (`xlink:href`)
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeName {
    Identifier(String),
    Namespaced { namespace: String, name: String },
}

impl std::fmt::Display for AttributeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeName::Identifier(name) => write!(f, "{}", name),
            AttributeName::Namespaced { namespace, name } => write!(f, "{}:{}", namespace, name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Literal(String),
    Expression(Expression),
    Element(Box<Element>),
}

/// `name="value"`, `name={expr}` or a bare `name`
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: AttributeName,
    pub value: Option<AttributeValue>,
    pub source_span: Option<ParseSourceSpan>,
}

impl Attribute {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: AttributeName::Identifier(name.into()),
            value: Some(AttributeValue::Literal(value.into())),
            source_span: None,
        }
    }

    pub fn expression(name: impl Into<String>, expression: Expression) -> Self {
        Attribute {
            name: AttributeName::Identifier(name.into()),
            value: Some(AttributeValue::Expression(expression)),
            source_span: None,
        }
    }

    pub fn literal_value(&self) -> Option<&str> {
        match &self.value {
            Some(AttributeValue::Literal(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeItem {
    Attribute(Attribute),
    /// `{...props}`
    Spread(Expression),
}

/// Element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: ElementName,
    pub attributes: Vec<AttributeItem>,
    pub children: Vec<Node>,
    pub source_span: Option<ParseSourceSpan>,
}

impl Element {
    pub fn new(name: ElementName, attributes: Vec<AttributeItem>, children: Vec<Node>) -> Self {
        Element {
            name,
            attributes,
            children,
            source_span: None,
        }
    }

    /// Element with a plain identifier name
    pub fn named(name: impl Into<String>) -> Self {
        Element::new(ElementName::Identifier(name.into()), Vec::new(), Vec::new())
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(AttributeItem::Attribute(attribute));
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_self_closing(&self) -> bool {
        self.children.is_empty()
    }

    /// Named attributes, skipping spreads
    pub fn attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter_map(|item| match item {
            AttributeItem::Attribute(attr) => Some(attr),
            AttributeItem::Spread(_) => None,
        })
    }

    pub fn has_spread_attributes(&self) -> bool {
        self.attributes
            .iter()
            .any(|item| matches!(item, AttributeItem::Spread(_)))
    }

    /// Element children, recursively, in document order
    pub fn descendant_elements(&self) -> Vec<&Element> {
        let mut result = Vec::new();
        collect_elements(&self.children, &mut result);
        result
    }
}

fn collect_elements<'a>(nodes: &'a [Node], result: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(element) = node {
            result.push(element);
            collect_elements(&element.children, result);
        }
    }
}
