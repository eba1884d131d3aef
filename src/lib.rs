//! sol_pt is a self contained front-end for the Solidity source language,
//! turning UTF-8 source text into a token stream and a compact index based
//! Abstract Syntax Tree ([Ast]).
//!
//! # Overview
//!
//! Parsers for the languages like Solidity are often custom handwritten due to
//! the size of the grammar: contracts, interfaces and libraries, inline
//! assembly (Yul), mapping and function types, and an operator table with
//! right and non associative entries. This library implements that front-end
//! as three small components composed as a pipeline:
//!
//! 1. A [Tokenizer]: a single pass, table free state machine which converts a
//!    byte buffer into a flat sequence of `(tag, start, end)` [Token] records.
//!    It never fails; malformed input is covered with `Invalid` tokens.
//! 2. An arena: the [Ast] owns four parallel vectors (`tokens`, `nodes`,
//!    `extra_data`, `errors`). Every cross reference is a `u32` index and the
//!    index `0` is reserved as the "no node" sentinel, which keeps the tree
//!    compact and trivially serializable.
//! 3. A [Parser](crate): a hand written recursive descent parser with a Pratt
//!    style precedence climber. Syntax errors are recoverable: a diagnostic is
//!    recorded, the parser re-synchronizes at the next plausible construct and
//!    keeps going, so one parse reports many errors.
//!
//! Downstream passes (a formatter, a contract-to-binding translator, future
//! analyzers) consume the tree through the accessor helpers on [Ast], e.g.
//! [contract_decl](Ast::contract_decl) or [function_proto](Ast::function_proto),
//! which resolve the arity specialized node encodings into view structs with
//! named fields.
//!
//! # Example
//!
//! ```
//! use sol_pt::{Ast, NodeTag};
//!
//! let source = r#"
//! pragma solidity ^0.8.0;
//!
//! contract Counter {
//!     uint256 public count;
//!
//!     function increment() external {
//!         count += 1;
//!     }
//! }
//! "#;
//!
//! let ast = Ast::parse(source);
//! assert!(ast.errors.is_empty());
//!
//! let decls = ast.root_decls();
//! assert_eq!(ast.node(decls[0]).tag, NodeTag::PragmaDirective);
//!
//! let contract = ast.contract_decl(decls[1]);
//! assert_eq!(ast.token_slice(contract.identifier), "Counter");
//!
//! let body = ast.block(contract.body);
//! assert_eq!(body.statements.len(), 2);
//! ```
//!
//! A parse never fails: the presence of diagnostics in [Ast::errors] is
//! orthogonal to getting a tree back. [Ast::error_message] renders a
//! diagnostic with line and column information, and [Ast::print] dumps a
//! subtree for debugging.

mod ast;
mod error;
mod node;
mod parser;
mod token;
mod tokenizer;
mod util;

pub use ast::*;
pub use error::{Diagnostic, ErrorTag};
pub use node::{ExtraIndex, Node, NodeIndex, NodeTag, NULL_NODE};
pub use token::{Token, TokenIndex, TokenTag};
pub use tokenizer::Tokenizer;
pub use util::{Code, Log, Position};
