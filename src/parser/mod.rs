//! JavaScript parser boundary
//!
//! Wraps tree-sitter: parses the source text, counts line comments, and
//! lowers the concrete tree into the closed [`SyntaxNode`] vocabulary
//! the metrics engine walks.

mod lower;

use thiserror::Error;
use tracing::debug;
use tree_sitter::{Node, Parser};

use crate::ast::SyntaxNode;

/// Parse product: the lowered tree plus the comment feed.
#[derive(Debug)]
pub struct ParsedUnit {
    pub program: SyntaxNode,
    /// Count of `//` comments; block comments are excluded.
    pub line_comments: u32,
}

/// Failures at the parser boundary. All of them abort the run: metrics
/// are never computed from a partial parse.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load the JavaScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("parser produced no syntax tree")]
    NoTree,
    #[error("syntax error near line {line}")]
    Syntax { line: usize },
}

/// Parse JavaScript source into a lowered tree and comment count.
pub fn parse_source(source: &str) -> Result<ParsedUnit, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_javascript::LANGUAGE.into())?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(ParseError::Syntax {
            line: first_error_line(root),
        });
    }

    let line_comments = count_line_comments(root, source.as_bytes());
    let program = lower::lower(root, source.as_bytes());
    debug!(line_comments, "parsed source unit");

    Ok(ParsedUnit {
        program,
        line_comments,
    })
}

/// Line of the first error or missing node, for the failure message.
fn first_error_line(node: Node) -> usize {
    if node.is_error() || node.is_missing() {
        return node.start_position().row + 1;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return first_error_line(child);
        }
    }
    node.start_position().row + 1
}

/// Count `//` comments anywhere in the tree. Block comments share the
/// same node kind, so the text prefix decides.
fn count_line_comments(node: Node, source: &[u8]) -> u32 {
    let mut count = 0;
    if node.kind() == "comment" && node.utf8_text(source).unwrap_or("").starts_with("//") {
        count += 1;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        count += count_line_comments(child, source);
    }
    count
}
