//! JSX Module
//!
//! Typed element trees and their conversion from ESTree/Babel JSON.

pub mod ast;
pub mod estree;

pub use ast::*;
pub use estree::{child_from_value, element_from_value, expression_from_value, node_type};
