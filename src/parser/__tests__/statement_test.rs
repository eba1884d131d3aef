use super::{count_nodes, find_node, parse_ok};
use crate::ast::Ast;
use crate::error::ErrorTag;
use crate::node::NodeTag;

fn parse_statements(body: &str) -> String {
    format!("contract C {{ function f() public {{ {} }} }}", body)
}

#[test]
fn if_with_and_without_else() {
    let source = parse_statements("if (a) { b = 1; } else { b = 2; }");
    let ast = parse_ok(&source);
    let node = find_node(&ast, NodeTag::If);
    let view = ast.if_statement(node);
    assert!(view.else_expression.is_some());

    let source = parse_statements("if (a) b = 1;");
    let ast = parse_ok(&source);
    let node = find_node(&ast, NodeTag::IfSimple);
    let view = ast.if_statement(node);
    assert!(view.else_expression.is_none());
    assert_eq!(ast.node(view.then_expression).tag, NodeTag::Assign);
}

#[test]
fn while_and_do_while() {
    let source = parse_statements("while (a) { b += 1; } do { c += 1; } while (d);");
    let ast = parse_ok(&source);
    let while_node = ast.node(find_node(&ast, NodeTag::While));
    assert_eq!(ast.node(while_node.lhs).tag, NodeTag::Identifier);
    let do_node = ast.node(find_node(&ast, NodeTag::DoWhile));
    assert_eq!(ast.node(do_node.rhs).tag, NodeTag::Identifier);
}

#[test]
fn for_with_all_clauses() {
    let source = parse_statements("for (uint256 i = 0; i < 10; i++) { sum += i; }");
    let ast = parse_ok(&source);
    let view = ast.for_statement(find_node(&ast, NodeTag::For));
    assert_eq!(ast.node(view.condition_one.unwrap()).tag, NodeTag::Assign);
    assert_eq!(ast.node(view.condition_two.unwrap()).tag, NodeTag::LessThan);
    assert_eq!(
        ast.node(view.condition_three.unwrap()).tag,
        NodeTag::PostIncrement
    );
}

#[test]
fn for_with_empty_clauses() {
    let source = parse_statements("for (;;) { break; }");
    let ast = parse_ok(&source);
    let view = ast.for_statement(find_node(&ast, NodeTag::For));
    assert!(view.condition_one.is_none());
    assert!(view.condition_two.is_none());
    assert!(view.condition_three.is_none());
    assert_eq!(count_nodes(&ast, NodeTag::Break), 1);
}

#[test]
fn try_with_returns_and_two_catches() {
    let source = parse_statements(
        "try token.transfer(to, amount) returns (bool ok) { x = 1; } catch Error(string memory reason) { x = 2; } catch { x = 3; }",
    );
    let ast = parse_ok(&source);
    let view = ast.try_statement(find_node(&ast, NodeTag::Try));
    assert_eq!(ast.node(view.expression).tag, NodeTag::Call);
    assert_eq!(view.returns.len(), 1);
    assert_eq!(view.catches.len(), 2);

    let first = ast.catch_clause(view.catches[0]);
    assert_eq!(ast.token_slice(first.identifier.unwrap()), "Error");
    assert_eq!(first.params.len(), 1);
    let second = ast.catch_clause(view.catches[1]);
    assert!(second.identifier.is_none());
    assert!(second.params.is_empty());
}

#[test]
fn emit_requires_a_call() {
    let source = parse_statements("emit Transfer(a, b);");
    let ast = parse_ok(&source);
    let emit = ast.node(find_node(&ast, NodeTag::Emit));
    assert_eq!(ast.node(emit.lhs).tag, NodeTag::Call);

    let source = parse_statements("emit 5;");
    let ast = Ast::parse(&source);
    assert!(ast
        .errors
        .iter()
        .any(|error| error.tag == ErrorTag::ExpectedFunctionCall));
}

#[test]
fn unchecked_block() {
    let source = parse_statements("unchecked { x += 1; }");
    let ast = parse_ok(&source);
    let unchecked = ast.node(find_node(&ast, NodeTag::Unchecked));
    assert_eq!(ast.node(unchecked.lhs).tag, NodeTag::BlockTwoSemicolon);
}

#[test]
fn return_with_and_without_expression() {
    let source = parse_statements("if (a) return; else return b;");
    let ast = parse_ok(&source);
    let returns: Vec<_> = (0..ast.nodes.len() as u32)
        .filter(|index| ast.node(*index).tag == NodeTag::Return)
        .collect();
    assert_eq!(returns.len(), 2);
    assert_eq!(ast.node(returns[0]).lhs, 0);
    assert!(ast.node(returns[1]).lhs != 0);
}

#[test]
fn block_arity_and_semicolon_variants() {
    let source = parse_statements("a = 1; b = 2; c = 3;");
    let ast = parse_ok(&source);
    let block = find_node(&ast, NodeTag::BlockSemicolon);
    assert_eq!(ast.block(block).statements.len(), 3);
    assert!(ast.block(block).trailing_semicolon);

    let source = parse_statements("while (a) { }");
    let ast = parse_ok(&source);
    let empty = find_node(&ast, NodeTag::BlockTwo);
    assert!(ast.block(empty).statements.is_empty());
}
