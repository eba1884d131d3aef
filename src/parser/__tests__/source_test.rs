use super::{count_nodes, find_node, parse_ok};
use crate::node::NodeTag;
use crate::token::TokenTag;

#[test]
fn import_directive_forms() {
    let ast = parse_ok("import \"./a.sol\";");
    let import = ast.import_directive(ast.root_decls()[0]);
    assert_eq!(ast.token_slice(import.path), "\"./a.sol\"");
    assert!(import.alias.is_none());

    let ast = parse_ok("import \"./a.sol\" as A;");
    let import = ast.import_directive(ast.root_decls()[0]);
    assert_eq!(ast.token_slice(import.alias.unwrap()), "A");

    let ast = parse_ok("import * as B from \"./b.sol\";");
    let import = ast.import_directive(ast.root_decls()[0]);
    assert_eq!(ast.token_slice(import.alias.unwrap()), "B");
    assert_eq!(ast.token_slice(import.path), "\"./b.sol\"");

    let ast = parse_ok("import {x, y} from \"./c.sol\";");
    let import = ast.import_directive(ast.root_decls()[0]);
    assert_eq!(import.symbols.len(), 2);
    assert_eq!(ast.token_slice(import.symbols[0]), "x");
    assert_eq!(ast.token_slice(import.symbols[1]), "y");
}

#[test]
fn contract_inheritance_specializations() {
    let ast = parse_ok("contract C is A { }");
    let decl = ast.root_decls()[0];
    assert_eq!(ast.node(decl).tag, NodeTag::ContractDeclInheritanceOne);
    let view = ast.contract_decl(decl);
    assert_eq!(view.inheritance.len(), 1);
    assert_eq!(ast.token_slice(view.identifier), "C");

    let ast = parse_ok("contract C is A, B.D { }");
    let decl = ast.root_decls()[0];
    assert_eq!(ast.node(decl).tag, NodeTag::ContractDeclInheritance);
    let view = ast.contract_decl(decl);
    assert_eq!(view.inheritance.len(), 2);
    assert_eq!(ast.node(view.inheritance[0]).tag, NodeTag::Identifier);
    assert_eq!(ast.node(view.inheritance[1]).tag, NodeTag::FieldAccess);

    let ast = parse_ok("abstract contract X is A { }");
    assert_eq!(
        ast.node(ast.root_decls()[0]).tag,
        NodeTag::AbstractDeclInheritanceOne
    );

    let ast = parse_ok("interface I { }");
    assert_eq!(ast.node(ast.root_decls()[0]).tag, NodeTag::InterfaceDecl);

    let ast = parse_ok("library L { }");
    assert_eq!(ast.node(ast.root_decls()[0]).tag, NodeTag::LibraryDecl);
}

#[test]
fn inheritance_with_constructor_arguments() {
    let ast = parse_ok("contract C is Base(1, 2) { }");
    let view = ast.contract_decl(ast.root_decls()[0]);
    assert_eq!(ast.node(view.inheritance[0]).tag, NodeTag::Call);
}

#[test]
fn enum_and_struct_declarations() {
    let ast = parse_ok("enum Direction { North, East, South, West }");
    let view = ast.enum_decl(ast.root_decls()[0]);
    assert_eq!(ast.token_slice(view.identifier), "Direction");
    assert_eq!(view.values.len(), 4);
    assert_eq!(ast.token_slice(view.values[2]), "South");

    let ast = parse_ok("struct Point { uint256 x; uint256 y; }");
    let view = ast.struct_decl(ast.root_decls()[0]);
    assert_eq!(view.fields.len(), 2);
    let field = ast.variable_decl(view.fields[0]);
    assert_eq!(ast.token_slice(field.name.unwrap()), "x");
}

#[test]
fn event_and_error_declarations() {
    let ast = parse_ok("event Transfer(address indexed src, uint256 value);");
    let view = ast.event_proto(ast.root_decls()[0]);
    assert_eq!(view.params.len(), 2);
    assert!(view.anonymous.is_none());
    let param = ast.variable_decl(view.params[0]);
    assert_eq!(ast.token_tag(param.qualifier.unwrap()), TokenTag::Indexed);

    let ast = parse_ok("event Ping() anonymous;");
    let view = ast.event_proto(ast.root_decls()[0]);
    assert!(view.anonymous.is_some());

    let ast = parse_ok("error Unauthorized(address who);");
    let view = ast.error_proto(ast.root_decls()[0]);
    assert_eq!(ast.token_slice(view.identifier), "Unauthorized");
    assert_eq!(view.params.len(), 1);
}

#[test]
fn user_defined_type_declaration() {
    let ast = parse_ok("type UFixed is uint256;");
    let view = ast.user_defined_type(ast.root_decls()[0]);
    assert_eq!(ast.token_slice(view.identifier), "UFixed");
    assert_eq!(ast.node(view.underlying).tag, NodeTag::ElementaryType);
}

#[test]
fn using_directive_forms() {
    let ast = parse_ok("using SafeMath for uint256;");
    let view = ast.using_directive(ast.root_decls()[0]);
    assert_eq!(view.aliases.len(), 1);
    assert_eq!(
        ast.node(view.target_type.unwrap()).tag,
        NodeTag::ElementaryType
    );
    assert!(view.global.is_none());

    let ast = parse_ok("using {add, sub} for MyType global;");
    let view = ast.using_directive(ast.root_decls()[0]);
    assert_eq!(view.aliases.len(), 2);
    assert!(view.global.is_some());

    let ast = parse_ok("using Lib for *;");
    let view = ast.using_directive(ast.root_decls()[0]);
    assert!(view.target_type.is_none());
}

#[test]
fn constant_variable_at_top_level() {
    let ast = parse_ok("uint256 constant LIMIT = 42;");
    let view = ast.constant_variable_decl(ast.root_decls()[0]);
    assert_eq!(ast.token_slice(view.identifier), "LIMIT");
    assert_eq!(ast.node(view.type_expr).tag, NodeTag::ElementaryType);
    assert_eq!(ast.node(view.initializer).tag, NodeTag::NumberLiteral);
}

#[test]
fn state_variable_specifiers() {
    let ast = parse_ok(
        "contract C { uint256 public constant X = 1; mapping(address => uint256) internal balances; address owner; }",
    );
    let body = ast.block(ast.node(ast.root_decls()[0]).rhs);
    assert_eq!(body.statements.len(), 3);

    let first = ast.state_variable_decl(body.statements[0]);
    let specifiers = ast.specifier_items(first.specifiers.unwrap());
    assert_eq!(specifiers.len(), 2);
    assert!(first.initializer.is_some());

    let second = ast.state_variable_decl(body.statements[1]);
    assert_eq!(ast.node(second.type_expr).tag, NodeTag::MappingDecl);
    let mapping = ast.mapping_decl(second.type_expr);
    assert!(mapping.key_name.is_none());

    let third = ast.state_variable_decl(body.statements[2]);
    assert!(third.specifiers.is_none());
    assert!(third.initializer.is_none());
}

#[test]
fn function_proto_arity_variants() {
    let ast = parse_ok(
        "interface I {\n    function a() external;\n    function b(uint256 x) external;\n    function c(uint256 x, bool y) external;\n    function d() external returns (bool);\n    function e(uint256 x, bool y) external returns (bool, uint256);\n}",
    );
    let body = ast.block(ast.node(ast.root_decls()[0]).rhs);
    let tags: Vec<NodeTag> = body
        .statements
        .iter()
        .map(|index| ast.node(*index).tag)
        .collect();
    assert_eq!(
        tags,
        vec![
            NodeTag::FunctionProtoSimple,
            NodeTag::FunctionProtoSimple,
            NodeTag::FunctionProtoMulti,
            NodeTag::FunctionProtoOne,
            NodeTag::FunctionProto,
        ]
    );

    let simple = ast.function_proto(body.statements[0]);
    assert!(simple.params.is_empty());
    assert!(simple.returns.is_none());
    let full = ast.function_proto(body.statements[4]);
    assert_eq!(full.params.len(), 2);
    assert_eq!(full.returns.map(|r| r.len()), Some(2));
}

#[test]
fn constructor_fallback_and_receive() {
    let ast = parse_ok(
        "contract C { constructor(uint256 x) { } fallback() external payable { } receive() external payable { } }",
    );
    let body = ast.block(ast.node(ast.root_decls()[0]).rhs);
    assert_eq!(body.statements.len(), 3);
    let keywords = [TokenTag::Constructor, TokenTag::Fallback, TokenTag::Receive];
    for (index, element) in body.statements.iter().enumerate() {
        assert_eq!(ast.node(*element).tag, NodeTag::FunctionDecl);
        let decl = ast.function_decl(*element);
        let proto = ast.function_proto(decl.proto);
        assert_eq!(ast.token_tag(proto.identifier.unwrap()), keywords[index]);
    }
}

#[test]
fn modifier_declaration() {
    let ast = parse_ok("contract C { modifier onlyOwner() { _; } }");
    let decl = find_node(&ast, NodeTag::ModifierDecl);
    let view = ast.function_decl(decl);
    assert_eq!(ast.node(view.proto).tag, NodeTag::ModifierProto);
    let proto = ast.modifier_proto(view.proto);
    assert_eq!(ast.token_slice(proto.identifier), "onlyOwner");
    assert!(proto.params.is_empty());
    assert!(proto.specifiers.is_none());
}

#[test]
fn function_specifier_collection() {
    let source = "contract Base { function f() public onlyOwner(1) virtual override(Base) returns (bool) { return true; } }";
    let ast = parse_ok(source);
    let decl = find_node(&ast, NodeTag::FunctionDecl);
    let proto = ast.function_proto(ast.function_decl(decl).proto);
    let items = ast.specifier_items(proto.specifiers.unwrap());
    let tags: Vec<NodeTag> = items.iter().map(|index| ast.node(*index).tag).collect();
    assert_eq!(
        tags,
        vec![
            NodeTag::Specifier,
            NodeTag::CallOne,
            NodeTag::Specifier,
            NodeTag::OverrideSpecifier,
        ]
    );
    let paths = ast.override_paths(items[3]);
    assert_eq!(paths.len(), 1);
}

#[test]
fn free_functions_and_function_bodies() {
    let ast = parse_ok("function helper(uint256 a) pure returns (uint256) { return a + 1; }");
    let decl = ast.root_decls()[0];
    assert_eq!(ast.node(decl).tag, NodeTag::FunctionDecl);

    assert_eq!(count_nodes(&ast, NodeTag::Add), 1);
}

#[test]
fn pragma_payload_token_range() {
    let ast = parse_ok("pragma solidity >=0.8.0 <0.9.0;");
    let pragma = ast.node(ast.root_decls()[0]);
    assert_eq!(pragma.tag, NodeTag::PragmaDirective);
    // The payload spans from `solidity` up to the semicolon.
    assert_eq!(ast.token_slice(pragma.lhs), "solidity");
    assert_eq!(ast.token_tag(pragma.rhs), TokenTag::Semicolon);
}
