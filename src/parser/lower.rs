//! Lowering from the tree-sitter concrete tree to [`SyntaxNode`]
//!
//! Grammar kinds the engine does not score lower to
//! [`SyntaxNode::Other`] with their children dropped; the traversal
//! never recurses into them. tree-sitter splits a few ESTree kinds
//! (var vs let/const declarations, `+=` vs `=` assignments, generator
//! vs plain function declarations); those collapse back into the single
//! variant the engine dispatches on.

use tree_sitter::Node;

use crate::ast::{DeclarationKind, SyntaxNode};

pub(super) fn lower(node: Node, source: &[u8]) -> SyntaxNode {
    match node.kind() {
        "program" => SyntaxNode::Program {
            body: lower_children(node, source),
        },
        "statement_block" => SyntaxNode::Block {
            body: lower_children(node, source),
        },
        "expression_statement" => SyntaxNode::ExpressionStatement {
            expression: lower_first_child(node, source),
        },
        "variable_declaration" | "lexical_declaration" => lower_declaration(node, source),
        "variable_declarator" => SyntaxNode::VariableDeclarator {
            init: lower_field(node, "value", source),
        },
        "while_statement" => SyntaxNode::While {
            body: lower_field(node, "body", source),
        },
        "if_statement" => SyntaxNode::If {
            consequent: lower_field(node, "consequence", source),
            alternate: lower_alternate(node, source),
        },
        "for_statement" => SyntaxNode::For {
            init: lower_field(node, "initializer", source),
            test: lower_field(node, "condition", source),
            update: lower_field(node, "increment", source),
            body: lower_field(node, "body", source),
        },
        "arrow_function" => SyntaxNode::ArrowFunction {
            body: lower_field(node, "body", source),
        },
        "function_declaration" | "generator_function_declaration" => {
            SyntaxNode::FunctionDeclaration {
                body: lower_field(node, "body", source),
            }
        }
        "assignment_expression" | "augmented_assignment_expression" => {
            SyntaxNode::AssignmentExpression
        }
        "update_expression" => SyntaxNode::UpdateExpression,
        "call_expression" => SyntaxNode::CallExpression,
        "object" => SyntaxNode::ObjectExpression {
            properties: lower_children(node, source),
        },
        "pair" => SyntaxNode::Property,
        "identifier" => SyntaxNode::Identifier,
        "number" | "string" | "regex" | "true" | "false" | "null" => SyntaxNode::Literal,
        _ => SyntaxNode::Other,
    }
}

/// Lower the named, non-comment children of a sequence node, in order.
fn lower_children(node: Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .map(|child| lower(child, source))
        .collect()
}

fn lower_field(node: Node, field: &str, source: &[u8]) -> Option<Box<SyntaxNode>> {
    node.child_by_field_name(field)
        .map(|child| Box::new(lower(child, source)))
}

fn lower_first_child(node: Node, source: &[u8]) -> Option<Box<SyntaxNode>> {
    let mut cursor = node.walk();
    let child = node.named_children(&mut cursor).find(|c| !c.is_extra())?;
    Some(Box::new(lower(child, source)))
}

/// The `else` keyword wraps the actual branch in an `else_clause` node;
/// unwrap it so else-if chains lower to nested If nodes.
fn lower_alternate(node: Node, source: &[u8]) -> Option<Box<SyntaxNode>> {
    let clause = node.child_by_field_name("alternative")?;
    lower_first_child(clause, source)
}

/// Collapse `variable_declaration` (var) and `lexical_declaration`
/// (let/const) into one variant; the leading keyword token decides the
/// kind.
fn lower_declaration(node: Node, source: &[u8]) -> SyntaxNode {
    let kind = match node.child(0).and_then(|c| c.utf8_text(source).ok()) {
        Some("var") => DeclarationKind::Var,
        Some("const") => DeclarationKind::Const,
        _ => DeclarationKind::Let,
    };
    let mut cursor = node.walk();
    let declarators = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "variable_declarator")
        .map(|child| lower(child, source))
        .collect();
    SyntaxNode::VariableDeclaration { kind, declarators }
}
