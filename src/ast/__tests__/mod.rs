use crate::ast::Ast;
use crate::node::NodeTag;
use crate::util::Log;

/// A program touching most of the grammar; used for whole tree invariants.
const KITCHEN_SINK: &str = r#"
pragma solidity ^0.8.19;

import {IToken} from "./IToken.sol";

uint256 constant MAX_SUPPLY = 1_000_000 ether;

enum Phase { Setup, Live, Done }

struct Checkpoint { uint64 time; uint192 value; }

error NotOwner(address caller);

event Minted(address indexed to, uint256 amount);

library MathLib {
    function clamp(uint256 v, uint256 hi) internal pure returns (uint256) {
        return v > hi ? hi : v;
    }
}

interface IVault {
    function deposit(uint256 amount) external returns (bool);
}

abstract contract Base {
    function _auth() internal virtual;
}

contract Token is Base, IVault {
    using MathLib for uint256;

    mapping(address owner => uint256 balance) public balances;
    address payable public owner;
    Phase internal phase;

    modifier onlyOwner() virtual { _; }

    constructor(address payable owner_) { owner = owner_; }

    receive() external payable { }

    function deposit(uint256 amount) external override returns (bool) {
        balances[msg.sender] += amount.clamp(MAX_SUPPLY);
        emit Minted(msg.sender, amount);
        return true;
    }

    function _auth() internal override {
        if (msg.sender != owner) {
            revert("not owner");
        }
    }

    function sum(uint256[] memory xs) public pure returns (uint256 total) {
        for (uint256 i = 0; i < xs.length; i++) {
            total += xs[i];
        }
    }

    function peek() external view returns (uint256 word) {
        assembly ("memory-safe") {
            word := mload(0x40)
        }
    }
}
"#;

fn parse_sink() -> Ast<'static> {
    let ast = Ast::parse(KITCHEN_SINK);
    if !ast.errors.is_empty() {
        for error in &ast.errors {
            println!("{}", ast.error_message(error));
        }
        panic!("kitchen sink should parse clean");
    }
    ast
}

#[test]
fn every_child_index_is_in_bounds() {
    let ast = parse_sink();
    let node_count = ast.nodes.len() as u32;
    for index in 0..node_count {
        for child in ast.children(index) {
            assert!(child > 0, "sentinel leaked out of {:?}", ast.node(index).tag);
            assert!(
                child < node_count,
                "child {} of node {} out of bounds",
                child,
                index
            );
        }
    }
}

#[test]
fn no_reserved_placeholders_survive() {
    let ast = parse_sink();
    assert!(ast
        .nodes
        .iter()
        .all(|node| node.tag != NodeTag::UnreachableNode));
}

#[test]
fn every_main_token_is_a_valid_token() {
    let ast = parse_sink();
    let token_count = ast.tokens.len() as u32;
    for node in &ast.nodes {
        assert!(node.main_token < token_count);
    }
}

#[test]
fn root_decls_cover_the_source_order() {
    let ast = parse_sink();
    let decls = ast.root_decls();
    let tags: Vec<NodeTag> = decls.iter().map(|index| ast.node(*index).tag).collect();
    assert_eq!(
        tags,
        vec![
            NodeTag::PragmaDirective,
            NodeTag::ImportDirectiveSymbol,
            NodeTag::ConstantVariableDecl,
            NodeTag::EnumDecl,
            NodeTag::StructDecl,
            NodeTag::ErrorProto,
            NodeTag::EventProto,
            NodeTag::LibraryDecl,
            NodeTag::InterfaceDecl,
            NodeTag::AbstractDecl,
            NodeTag::ContractDeclInheritance,
        ]
    );
}

#[test]
fn token_slices_reproduce_the_source() {
    let ast = Ast::parse("contract C {}");
    assert_eq!(ast.source(), "contract C {}");
    assert_eq!(ast.token_slice(0), "contract");
    assert_eq!(ast.token_slice(1), "C");
}

#[test]
fn extra_data_pool_is_seeded_with_a_sentinel() {
    let ast = Ast::parse("");
    assert_eq!(ast.extra_data[0], 0);
    assert!(ast.root_decls().is_empty());
}

#[test]
fn error_messages_carry_position_information() {
    let ast = Ast::parse("contract C { 123; }");
    assert!(!ast.errors.is_empty());
    let message = ast.error_message(&ast.errors[0]);
    assert!(message.contains("expected a contract element"), "{}", message);
    assert!(message.contains("line"), "{}", message);
}

#[test]
fn structural_golden_snapshot() {
    let ast = Ast::parse("pragma solidity ^0.8.0;\nimport \"./A.sol\";\ncontract C {}\n");
    let tags: Vec<String> = ast
        .root_decls()
        .iter()
        .map(|index| format!("{:?}", ast.node(*index).tag))
        .collect();
    let snapshot = serde_json::json!({
        "decls": tags,
        "errors": ast.errors.len(),
    });
    assert_eq!(
        snapshot,
        serde_json::json!({
            "decls": ["PragmaDirective", "ImportDirectivePath", "ContractDecl"],
            "errors": 0,
        })
    );
}

#[test]
fn tree_printing_walks_the_whole_tree() {
    let ast = parse_sink();
    ast.print(0).unwrap();
}

#[test]
fn parsing_with_a_log_label() {
    let ast = Ast::parse_with_log("contract C { uint256 x; }", Log::Verbose("sol"));
    assert!(ast.errors.is_empty());
}
