mod recovery_test;
mod scenario_test;
mod source_test;
mod statement_test;
mod yul_test;

use crate::ast::Ast;
use crate::node::{NodeIndex, NodeTag};

/// Parse and panic with rendered diagnostics when any were reported.
pub fn parse_ok(source: &str) -> Ast<'_> {
    let ast = Ast::parse(source);
    if !ast.errors.is_empty() {
        for error in &ast.errors {
            println!("{}", ast.error_message(error));
        }
        panic!("unexpected diagnostics while parsing:\n{}", source);
    }
    ast
}

/// First node with the given tag, scanning in creation order.
pub fn find_node(ast: &Ast, tag: NodeTag) -> NodeIndex {
    (0..ast.nodes.len() as NodeIndex)
        .find(|index| ast.node(*index).tag == tag)
        .unwrap_or_else(|| panic!("no {:?} node in the tree", tag))
}

pub fn count_nodes(ast: &Ast, tag: NodeTag) -> usize {
    ast.nodes.iter().filter(|node| node.tag == tag).count()
}

pub fn has_error(ast: &Ast, tag: crate::error::ErrorTag) -> bool {
    ast.errors.iter().any(|error| error.tag == tag)
}
