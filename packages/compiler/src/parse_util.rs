//! Parse Utilities
//!
//! Source locations attached to tree nodes by the upstream parser. They are
//! only carried along for diagnostics; extraction never depends on them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseLocation {
    pub offset: usize,
    /// 1-based, as reported by Babel-style `loc` objects
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { offset, line, col }
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end }
    }

    /// Reads `start`/`end` offsets and the optional `loc` object of an
    /// ESTree/Babel node. Returns `None` when the node has no offsets.
    pub fn from_estree(node: &Value) -> Option<Self> {
        let start_offset = node.get("start")?.as_u64()? as usize;
        let end_offset = node
            .get("end")
            .and_then(Value::as_u64)
            .map(|end| end as usize)
            .unwrap_or(start_offset);

        let loc = node.get("loc");
        let position = |key: &str| -> (usize, usize) {
            let pos = loc.and_then(|loc| loc.get(key));
            let line = pos
                .and_then(|p| p.get("line"))
                .and_then(Value::as_u64)
                .unwrap_or(0) as usize;
            let col = pos
                .and_then(|p| p.get("column"))
                .and_then(Value::as_u64)
                .unwrap_or(0) as usize;
            (line, col)
        };

        let (start_line, start_col) = position("start");
        let (end_line, end_col) = position("end");

        Some(ParseSourceSpan {
            start: ParseLocation::new(start_offset, start_line, start_col),
            end: ParseLocation::new(end_offset, end_line, end_col),
        })
    }
}

impl fmt::Display for ParseSourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

/// Renders ` at line:col` for an optional span, or nothing.
pub(crate) fn describe_span(span: &Option<ParseSourceSpan>) -> String {
    match span {
        Some(span) => format!(" at {}", span),
        None => String::new(),
    }
}
