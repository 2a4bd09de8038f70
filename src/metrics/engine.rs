//! Recursive descent over the syntax tree
//!
//! Dispatches each node by kind and accumulates counters in the
//! [`TraversalState`]. Control constructs bracket their children with
//! the weight-accumulator discipline; declaration statements go through
//! the variable classifier; kinds outside the scored set are skipped
//! without recursing.

use tracing::trace;

use crate::ast::{DeclarationKind, SyntaxNode};
use crate::metrics::state::TraversalState;
use crate::metrics::weights;

/// Walk a whole source unit and return the final counters.
pub fn traverse(program: &SyntaxNode) -> TraversalState {
    let mut state = TraversalState::new();
    state.visit(program);
    state
}

impl TraversalState {
    /// Visit one node if present; an absent node is a no-op.
    fn visit_opt(&mut self, node: Option<&SyntaxNode>) {
        if let Some(node) = node {
            self.visit(node);
        }
    }

    fn visit_all(&mut self, nodes: &[SyntaxNode]) {
        for node in nodes {
            self.visit(node);
        }
    }

    fn visit(&mut self, node: &SyntaxNode) {
        match node {
            SyntaxNode::Program { body } | SyntaxNode::Block { body } => self.visit_all(body),
            SyntaxNode::ExpressionStatement { expression } => {
                self.visit_opt(expression.as_deref());
            }
            SyntaxNode::VariableDeclaration { kind, declarators } => {
                self.classify_declaration(*kind, declarators);
            }
            // The declarator's identifier/pattern is not visited, only
            // its initializer.
            SyntaxNode::VariableDeclarator { init } => self.visit_opt(init.as_deref()),
            SyntaxNode::While { body } => {
                self.enter_weighted(weights::WHILE);
                self.visit_opt(body.as_deref());
                self.restore_weight(weights::WHILE);
                self.exit_block();
            }
            SyntaxNode::If {
                consequent,
                alternate,
            } => {
                self.enter_weighted(weights::IF);
                self.visit_opt(consequent.as_deref());
                // The multiplier is restored before the alternate
                // branch: constructs nested in the `else` arm are
                // weighted as if the `if` were not their ancestor. The
                // depth stays raised for both arms.
                self.restore_weight(weights::IF);
                self.visit_opt(alternate.as_deref());
                self.exit_block();
            }
            // Only init and body are walked; the test and update
            // expressions never are.
            SyntaxNode::For { init, body, .. } => {
                self.enter_weighted(weights::FOR);
                self.visit_opt(init.as_deref());
                self.visit_opt(body.as_deref());
                self.restore_weight(weights::FOR);
                self.exit_block();
            }
            // Function scopes raise the depth but contribute no weight.
            SyntaxNode::FunctionDeclaration { body } | SyntaxNode::ArrowFunction { body } => {
                self.block_depth += 1;
                self.visit_opt(body.as_deref());
                self.block_depth -= 1;
            }
            SyntaxNode::AssignmentExpression | SyntaxNode::UpdateExpression => {
                self.lines_of_code += 1;
            }
            SyntaxNode::CallExpression => {
                // Calls score a flat bump, independent of nesting depth
                // and the running multiplier.
                self.lines_of_code += 1;
                self.weighted_complexity += weights::CALL_EXPRESSION;
            }
            SyntaxNode::ObjectExpression { properties } => {
                trace!(properties = properties.len(), "object expression");
            }
            SyntaxNode::Identifier
            | SyntaxNode::Literal
            | SyntaxNode::Property
            | SyntaxNode::Other => {}
        }
    }

    /// Count the bindings of one declaration statement.
    ///
    /// One statement is one line regardless of how many declarators it
    /// carries. Const bindings never join the scope counts; var/let
    /// bindings are local when any scope is open, global otherwise.
    fn classify_declaration(&mut self, kind: DeclarationKind, declarators: &[SyntaxNode]) {
        self.lines_of_code += 1;
        let count = declarators.len() as u32;
        match kind {
            DeclarationKind::Const => self.const_vars += count,
            DeclarationKind::Var | DeclarationKind::Let => {
                if self.block_depth > 0 {
                    self.local_vars += count;
                } else {
                    self.global_vars += count;
                }
            }
        }
        self.visit_all(declarators);
    }

    /// Open a weighted scope. The outermost construct on the path
    /// resets the multiplier to its own weight; nested constructs add
    /// `weight * multiplier` and multiply into it.
    fn enter_weighted(&mut self, weight: f64) {
        self.block_depth += 1;
        if self.block_depth == 1 {
            self.weighted_complexity += weight;
            self.parent_weight = weight;
        } else {
            self.weighted_complexity += weight * self.parent_weight;
            self.parent_weight *= weight;
        }
    }

    /// Undo this construct's contribution to the multiplier, restoring
    /// the value in effect before entry.
    fn restore_weight(&mut self, weight: f64) {
        self.parent_weight /= weight;
    }

    fn exit_block(&mut self) {
        self.block_depth -= 1;
    }
}
