use super::{count_nodes, find_node, has_error, parse_ok};
use crate::ast::Ast;
use crate::error::ErrorTag;
use crate::node::NodeTag;

#[test]
fn missing_semicolon_points_at_the_previous_line() {
    let ast = Ast::parse("contract C { function f() public {\n a = 1\n } }");
    assert_eq!(ast.errors.len(), 1);
    let error = ast.errors[0];
    assert_eq!(error.tag, ErrorTag::ExpectedSemicolon);
    assert!(error.token_is_prev);
    // The caret belongs at the end of the `1` on the line before.
    assert_eq!(ast.token_slice(error.token), "1");
    // The assignment still made it into the tree.
    assert_eq!(count_nodes(&ast, NodeTag::Assign), 1);
}

#[test]
fn missing_semicolon_on_the_same_line_points_at_the_gap() {
    let ast = Ast::parse("contract C { function f() public { a = 1 } }");
    assert_eq!(ast.errors.len(), 1);
    let error = ast.errors[0];
    assert_eq!(error.tag, ErrorTag::ExpectedSemicolon);
    assert!(!error.token_is_prev);
}

#[test]
fn trailing_comma_in_call_arguments() {
    let ast = Ast::parse("contract C { function f() public { g(1, 2,); } }");
    assert_eq!(ast.errors.len(), 1);
    assert_eq!(ast.errors[0].tag, ErrorTag::TrailingComma);
    assert_eq!(ast.token_slice(ast.errors[0].token), ",");
    let call = find_node(&ast, NodeTag::Call);
    assert_eq!(ast.call(call).args.len(), 2);
}

#[test]
fn garbage_contract_element_resynchronizes() {
    let ast = Ast::parse("contract C { 123; function f() public { } }");
    assert!(has_error(&ast, ErrorTag::ExpectedContractElement));
    // Parsing resumed at the function after the bad element.
    assert_eq!(count_nodes(&ast, NodeTag::FunctionDecl), 1);
}

#[test]
fn garbage_source_unit_resynchronizes() {
    let ast = Ast::parse("+;\ncontract C { }");
    assert!(has_error(&ast, ErrorTag::ExpectedSourceUnitExpr));
    assert_eq!(count_nodes(&ast, NodeTag::ContractDecl), 1);
}

#[test]
fn bad_import_form() {
    let ast = Ast::parse("import 5;\ncontract C { }");
    assert!(has_error(&ast, ErrorTag::ExpectedImportPathAliasAsterisk));
    assert_eq!(count_nodes(&ast, NodeTag::ContractDecl), 1);
}

#[test]
fn unattached_doc_comment_is_reported() {
    let ast = Ast::parse("/// lonely\n");
    assert!(has_error(&ast, ErrorTag::UnattachedDocComment));
}

#[test]
fn same_line_doc_comment_is_reported() {
    let ast = Ast::parse("uint256 constant X = 1; /// trailing\ncontract C { }");
    assert!(has_error(&ast, ErrorTag::SameLineDocComment));
    assert_eq!(count_nodes(&ast, NodeTag::ContractDecl), 1);
}

#[test]
fn doc_comment_before_declaration_is_fine() {
    let ast = parse_ok("/// A counter.\ncontract C { }");
    assert_eq!(count_nodes(&ast, NodeTag::ContractDecl), 1);
}

#[test]
fn stray_closing_brace_stops_the_source_loop() {
    let ast = Ast::parse("}");
    assert!(has_error(&ast, ErrorTag::ExpectedSourceUnitExpr));
    assert!(ast.root_decls().is_empty());
}

#[test]
fn empty_statement_is_rejected_but_skipped() {
    let ast = Ast::parse("contract C { function f() public { ; a = 1; } }");
    assert!(has_error(&ast, ErrorTag::ExpectedStatement));
    assert_eq!(count_nodes(&ast, NodeTag::Assign), 1);
}

#[test]
fn duplicate_modifier_specifier() {
    let ast = Ast::parse("contract C { modifier m() virtual virtual { _; } }");
    assert!(has_error(&ast, ErrorTag::AlreadySeenSpecifier));
}

#[test]
fn unterminated_contract_body() {
    let ast = Ast::parse("contract C { uint256 x;");
    assert!(has_error(&ast, ErrorTag::ExpectedCloseBrace));
    assert_eq!(count_nodes(&ast, NodeTag::StateVariableDecl), 1);
}

#[test]
fn missing_pragma_version() {
    let ast = Ast::parse("pragma solidity;\ncontract C { }");
    assert!(has_error(&ast, ErrorTag::ExpectedPragmaVersion));
    assert_eq!(count_nodes(&ast, NodeTag::ContractDecl), 1);
}
