//! End to end checks over small but complete inputs.

use super::{count_nodes, find_node, parse_ok};
use crate::ast::Ast;
use crate::error::ErrorTag;
use crate::node::NodeTag;
use crate::token::TokenTag;

#[test]
fn pragma_import_and_contract_skeleton() {
    let ast = parse_ok("pragma solidity ^0.8.0;\nimport \"./A.sol\";\ncontract C {}\n");
    let decls = ast.root_decls();
    assert_eq!(decls.len(), 3);
    assert_eq!(ast.node(decls[0]).tag, NodeTag::PragmaDirective);
    assert_eq!(ast.node(decls[1]).tag, NodeTag::ImportDirectivePath);
    assert_eq!(ast.node(decls[2]).tag, NodeTag::ContractDecl);

    let body = ast.node(decls[2]).rhs;
    let body_node = ast.node(body);
    assert_eq!(body_node.tag, NodeTag::ContractBlockTwo);
    assert_eq!((body_node.lhs, body_node.rhs), (0, 0));
}

#[test]
fn exponent_is_right_associative() {
    let source = "contract C { function f() public { x = a ** b ** c; } }";
    let ast = parse_ok(source);
    assert_eq!(count_nodes(&ast, NodeTag::Exponent), 2);

    let outer = (0..ast.nodes.len() as u32)
        .find(|index| {
            let node = ast.node(*index);
            node.tag == NodeTag::Exponent && ast.node(node.rhs).tag == NodeTag::Exponent
        })
        .expect("outer exponent over an inner exponent");
    let outer_node = ast.node(outer);
    assert_eq!(ast.token_slice(ast.node(outer_node.lhs).main_token), "a");
    let inner = ast.node(outer_node.rhs);
    assert_eq!(ast.token_slice(ast.node(inner.lhs).main_token), "b");
    assert_eq!(ast.token_slice(ast.node(inner.rhs).main_token), "c");
}

#[test]
fn chained_comparison_is_rejected_but_still_parsed() {
    let source = "contract C { function f() public { a < b < c; } }";
    let ast = Ast::parse(source);
    assert_eq!(ast.errors.len(), 1);
    let error = ast.errors[0];
    assert_eq!(error.tag, ErrorTag::ChainedComparisonOperators);
    // The diagnostic points at the second `<`.
    assert_eq!(ast.token_slice(error.token), "<");
    let lt_positions: Vec<u32> = ast
        .tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.tag == TokenTag::LessThan)
        .map(|(index, _)| index as u32)
        .collect();
    assert_eq!(error.token, lt_positions[1]);
    // A tree still comes out.
    assert_eq!(count_nodes(&ast, NodeTag::LessThan), 2);
}

#[test]
fn nested_mapping_with_named_components() {
    let source =
        "contract C { mapping(address owner => mapping(uint256 id => bool) inner) m; }";
    let ast = parse_ok(source);

    let state_var = find_node(&ast, NodeTag::StateVariableDecl);
    let view = ast.state_variable_decl(state_var);
    assert_eq!(ast.token_slice(view.identifier), "m");

    let outer = ast.mapping_decl(view.type_expr);
    assert_eq!(ast.node(outer.key).tag, NodeTag::ElementaryType);
    assert_eq!(ast.token_slice(ast.node(outer.key).main_token), "address");
    assert_eq!(ast.token_slice(outer.key_name.unwrap()), "owner");
    assert_eq!(ast.node(outer.value).tag, NodeTag::MappingDecl);
    assert_eq!(ast.token_slice(outer.value_name.unwrap()), "inner");

    let nested = ast.mapping_decl(outer.value);
    assert_eq!(ast.token_slice(ast.node(nested.key).main_token), "uint256");
    assert_eq!(ast.token_slice(nested.key_name.unwrap()), "id");
    assert_eq!(ast.node(nested.value).tag, NodeTag::ElementaryType);
}

#[test]
fn function_with_multiple_returns() {
    let source = "function f(uint256 a, address b) external view returns (bool, bytes memory) { return (true, \"\"); }";
    let ast = parse_ok(source);

    let decl = find_node(&ast, NodeTag::FunctionDecl);
    let decl_view = ast.function_decl(decl);
    assert_eq!(ast.node(decl_view.proto).tag, NodeTag::FunctionProto);

    let proto = ast.function_proto(decl_view.proto);
    assert_eq!(ast.token_slice(proto.identifier.unwrap()), "f");
    assert_eq!(proto.params.len(), 2);
    assert_eq!(proto.returns.as_ref().map(|r| r.len()), Some(2));

    let body = ast.block(decl_view.body);
    assert_eq!(body.statements.len(), 1);
    let return_node = ast.node(body.statements[0]);
    assert_eq!(return_node.tag, NodeTag::Return);
    let tuple = ast.node(return_node.lhs);
    assert_eq!(tuple.tag, NodeTag::TupleInit);
    assert_eq!(ast.items(return_node.lhs).items.len(), 2);
}

#[test]
fn inline_assembly_with_switch() {
    let source = "contract C { function f() public { assembly { let x := mload(0x40) switch x case 0 { leave } default { sstore(0, x) } } } }";
    let ast = parse_ok(source);

    let assembly = find_node(&ast, NodeTag::AssemblyDecl);
    let assembly_view = ast.assembly_decl(assembly);
    assert!(assembly_view.flags.is_empty());
    let block = ast.block(assembly_view.block);
    assert_eq!(block.statements.len(), 2);

    let var_decl = ast.node(block.statements[0]);
    assert_eq!(var_decl.tag, NodeTag::YulVarDecl);
    assert_eq!(ast.token_slice(var_decl.lhs), "x");
    let value = ast.node(var_decl.rhs);
    assert_eq!(value.tag, NodeTag::YulCallOne);
    assert_eq!(ast.token_slice(ast.node(value.lhs).main_token), "mload");

    let switch = ast.node(block.statements[1]);
    assert_eq!(switch.tag, NodeTag::YulSwitch);
    let switch_view = ast.yul_switch(block.statements[1]);
    let scrutinee = ast.node(switch_view.condition);
    assert_eq!(scrutinee.tag, NodeTag::Identifier);
    assert_eq!(ast.token_slice(scrutinee.main_token), "x");
    assert_eq!(switch_view.cases.len(), 2);
    let case = ast.node(switch_view.cases[0]);
    assert_eq!(case.tag, NodeTag::YulSwitchCase);
    assert_eq!(ast.token_slice(ast.node(case.lhs).main_token), "0");
    assert_eq!(ast.node(switch_view.cases[1]).tag, NodeTag::YulSwitchDefault);
}

#[test]
fn empty_input_has_an_empty_root() {
    let ast = parse_ok("");
    assert!(ast.root_decls().is_empty());
}

/// Joining all token slices with single spaces must reproduce the same tree.
#[test]
fn token_stream_round_trip() {
    let source = "pragma solidity ^0.8.0;\ncontract C is Base {\n    uint256 public total;\n    function add(uint256 value) external returns (uint256) {\n        total += value;\n        return total;\n    }\n}\n";
    let ast = parse_ok(source);

    let rejoined: Vec<&str> = ast
        .tokens
        .iter()
        .take(ast.tokens.len() - 1)
        .enumerate()
        .map(|(index, _)| ast.token_slice(index as u32))
        .collect();
    let rejoined = rejoined.join(" ");
    let reparsed = parse_ok(&rejoined);

    assert_eq!(ast.tokens.len(), reparsed.tokens.len());
    for (left, right) in ast.tokens.iter().zip(reparsed.tokens.iter()) {
        assert_eq!(left.tag, right.tag);
    }
    assert_eq!(ast.nodes.len(), reparsed.nodes.len());
    for (left, right) in ast.nodes.iter().zip(reparsed.nodes.iter()) {
        assert_eq!(left.tag, right.tag);
        assert_eq!(left.main_token, right.main_token);
        assert_eq!(left.lhs, right.lhs);
        assert_eq!(left.rhs, right.rhs);
    }
    assert_eq!(ast.extra_data, reparsed.extra_data);
}
