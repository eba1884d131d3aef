use super::{count_nodes, find_node, has_error, parse_ok};
use crate::ast::Ast;
use crate::error::ErrorTag;
use crate::node::NodeTag;

fn parse_assembly(body: &str) -> String {
    format!(
        "contract C {{ function f() public {{ assembly {{ {} }} }} }}",
        body
    )
}

#[test]
fn assembly_flags() {
    let source = "contract C { function f() public { assembly (\"memory-safe\") { } } }";
    let ast = parse_ok(source);
    let view = ast.assembly_decl(find_node(&ast, NodeTag::AssemblyDecl));
    assert_eq!(view.flags.len(), 1);
    assert_eq!(ast.token_slice(view.flags[0]), "\"memory-safe\"");
}

#[test]
fn yul_let_single_and_multi() {
    let source = parse_assembly("let a := 1 let b let x, y := f()");
    let ast = parse_ok(&source);
    assert_eq!(count_nodes(&ast, NodeTag::YulVarDecl), 2);
    let multi = find_node(&ast, NodeTag::YulVarDeclMulti);
    let view = ast.yul_var_decl(multi);
    assert_eq!(view.names.len(), 2);
    assert_eq!(ast.token_slice(view.names[1]), "y");
    assert_eq!(
        ast.node(view.value.unwrap()).tag,
        NodeTag::YulCallOne
    );
}

#[test]
fn yul_assignments() {
    let source = parse_assembly("x := add(1, 2) a, b := f()");
    let ast = parse_ok(&source);
    let single = ast.yul_assign(find_node(&ast, NodeTag::YulAssign));
    assert_eq!(single.targets.len(), 1);
    assert_eq!(ast.node(single.value).tag, NodeTag::YulCall);

    let multi = ast.yul_assign(find_node(&ast, NodeTag::YulAssignMulti));
    assert_eq!(multi.targets.len(), 2);
}

#[test]
fn multi_assignment_requires_a_call() {
    let source = parse_assembly("a, b := 1");
    let ast = Ast::parse(&source);
    assert!(has_error(&ast, ErrorTag::ExpectedYulFunctionCall));
}

#[test]
fn yul_if_and_for() {
    let source = parse_assembly("if lt(i, 10) { i := add(i, 1) } for { let i := 0 } lt(i, 5) { i := add(i, 1) } { mstore(i, 1) }");
    let ast = parse_ok(&source);
    let yul_if = ast.node(find_node(&ast, NodeTag::YulIf));
    assert_eq!(ast.node(yul_if.lhs).tag, NodeTag::YulCall);

    let view = ast.for_statement(find_node(&ast, NodeTag::YulFor));
    assert_eq!(ast.node(view.condition_one.unwrap()).tag, NodeTag::AsmBlockTwo);
    assert_eq!(ast.node(view.condition_two.unwrap()).tag, NodeTag::YulCall);
    assert_eq!(ast.node(view.condition_three.unwrap()).tag, NodeTag::AsmBlockTwo);
    assert_eq!(ast.node(view.body).tag, NodeTag::AsmBlockTwo);
}

#[test]
fn yul_function_definitions() {
    let source = parse_assembly(
        "function noop() { } function addTwo(a, b) -> sum { sum := add(a, b) }",
    );
    let ast = parse_ok(&source);
    let plain = ast.yul_function_decl(find_node(&ast, NodeTag::YulFunctionDecl));
    assert_eq!(ast.token_slice(plain.identifier), "noop");
    assert!(plain.params.is_empty());
    assert!(plain.returns.is_empty());

    let full = ast.yul_function_decl(find_node(&ast, NodeTag::YulFullFunctionDecl));
    assert_eq!(ast.token_slice(full.identifier), "addTwo");
    assert_eq!(full.params.len(), 2);
    assert_eq!(full.returns.len(), 1);
}

#[test]
fn yul_paths_and_builtin_keywords() {
    let source = parse_assembly("let p := x.slot return(0, 32)");
    let ast = parse_ok(&source);
    assert_eq!(count_nodes(&ast, NodeTag::FieldAccess), 1);
    // `return` is a Solidity keyword but a plain builtin call in Yul.
    let calls: Vec<_> = (0..ast.nodes.len() as u32)
        .filter(|index| ast.node(*index).tag == NodeTag::YulCall)
        .collect();
    assert_eq!(calls.len(), 1);
    assert_eq!(ast.call(calls[0]).args.len(), 2);
}

#[test]
fn yul_leave_break_continue() {
    let source = parse_assembly("for { } 1 { } { leave break continue }");
    let ast = parse_ok(&source);
    assert_eq!(count_nodes(&ast, NodeTag::YulLeave), 1);
    assert_eq!(count_nodes(&ast, NodeTag::Break), 1);
    assert_eq!(count_nodes(&ast, NodeTag::Continue), 1);
}

#[test]
fn switch_requires_a_clause() {
    let source = parse_assembly("switch x");
    let ast = Ast::parse(&source);
    assert!(has_error(&ast, ErrorTag::ExpectedYulStatement));
}

#[test]
fn nested_yul_blocks_use_the_asm_encoding() {
    let source = parse_assembly("{ let a := 1 } { let b := 2 let c := 3 let d := 4 }");
    let ast = parse_ok(&source);
    assert!(count_nodes(&ast, NodeTag::AsmBlockTwo) >= 2);
    assert_eq!(count_nodes(&ast, NodeTag::AsmBlock), 1);
}
