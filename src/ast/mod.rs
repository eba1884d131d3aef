//! The syntax tree arena: four parallel vectors populated by the parser in a
//! single pass and read only afterwards.
//!
//! All cross references are integer indices. Downstream passes (formatter,
//! translator, analyzers) read the tree through the accessor helpers in this
//! module; the raw `lhs`/`rhs` interpretation is private to the parser and the
//! accessors.

mod accessors;

#[cfg(test)]
mod __tests__;

pub use accessors::*;

use crate::error::Diagnostic;
use crate::node::{ExtraPayload, Node, NodeIndex, NodeTag, Range, NULL_NODE};
use crate::parser::Parser;
use crate::token::{Token, TokenIndex, TokenTag};
use crate::tokenizer::Tokenizer;
use crate::util::{Code, Log};
use ptree::TreeItem;
use std::borrow::Cow;
use std::fmt::Write as _;

/// The parsed syntax tree together with the token vector it was built from.
pub struct Ast<'src> {
    code: Code<'src>,
    pub tokens: Vec<Token>,
    pub nodes: Vec<Node>,
    pub extra_data: Vec<u32>,
    pub errors: Vec<Diagnostic>,
}

impl<'src> Ast<'src> {
    /// Tokenize and parse a source buffer. The parse itself cannot fail;
    /// syntax problems surface as entries in [errors](Ast::errors).
    pub fn parse(source: &'src str) -> Ast<'src> {
        Self::parse_with_log(source, Log::None)
    }

    /// Like [parse](Ast::parse) with a debug log label attached to the
    /// parser. Logging is only compiled in debug builds.
    pub fn parse_with_log(source: &'src str, log: Log<&'static str>) -> Ast<'src> {
        let code = Code::new(source.as_bytes());
        let mut tokenizer = Tokenizer::new(code.value);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next();
            let is_eof = token.tag == TokenTag::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        let mut parser = Parser::new(&code, &tokens, log);
        parser.parse_source();
        let (nodes, extra_data, errors) = parser.into_parts();
        Ast {
            code,
            tokens,
            nodes,
            extra_data,
            errors,
        }
    }

    pub fn source(&self) -> &'src str {
        unsafe { std::str::from_utf8_unchecked(self.code.value) }
    }

    pub fn code(&self) -> &Code<'src> {
        &self.code
    }

    pub fn node(&self, index: NodeIndex) -> Node {
        self.nodes[index as usize]
    }

    pub fn token(&self, index: TokenIndex) -> Token {
        self.tokens[index as usize]
    }

    pub fn token_tag(&self, index: TokenIndex) -> TokenTag {
        self.tokens[index as usize].tag
    }

    /// The source text covered by a token.
    pub fn token_slice(&self, index: TokenIndex) -> &'src str {
        let token = self.tokens[index as usize];
        unsafe {
            std::str::from_utf8_unchecked(
                &self.code.value[token.start as usize..token.end as usize],
            )
        }
    }

    /// The top level declarations stored in the root node.
    pub fn root_decls(&self) -> &[NodeIndex] {
        let root = self.nodes[NULL_NODE as usize];
        self.extra_slice(root.lhs, root.rhs)
    }

    /// A `[start, end)` child list materialised out of the extra data pool.
    pub fn extra_slice(&self, start: u32, end: u32) -> &[u32] {
        &self.extra_data[start as usize..end as usize]
    }

    pub(crate) fn extra<T: ExtraPayload>(&self, index: u32) -> T {
        T::decode(&self.extra_data, index)
    }

    pub(crate) fn extra_range_slice(&self, index: u32) -> &[u32] {
        let range: Range = self.extra(index);
        self.extra_slice(range.start, range.end)
    }

    /// Render a diagnostic with line/column information.
    pub fn error_message(&self, diagnostic: &Diagnostic) -> String {
        let token = self.tokens[diagnostic.token as usize];
        let pointer = if diagnostic.token_is_prev {
            token.end
        } else {
            token.start
        };
        let mut message = diagnostic.describe();
        if !diagnostic.token_is_prev && !matches!(token.tag, TokenTag::Eof | TokenTag::Invalid) {
            let _ = write!(message, ", found '{}'", self.token_slice(diagnostic.token));
        }
        let _ = write!(message, " at {}", self.code.obtain_position(pointer as usize));
        message
    }

    /// The child node indices of a node, in source order. Sentinel entries of
    /// list forms that keep empty slots (tuple initializers) are skipped.
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let node = self.node(index);
        let mut children: Vec<NodeIndex> = Vec::new();
        let push = |list: &mut Vec<NodeIndex>, child: NodeIndex| {
            if child != NULL_NODE {
                list.push(child);
            }
        };
        match node.tag {
            NodeTag::Root => children.extend_from_slice(self.extra_slice(node.lhs, node.rhs)),
            NodeTag::PragmaDirective
            | NodeTag::ImportDirectivePath
            | NodeTag::ImportDirectiveSymbol
            | NodeTag::ImportDirectiveAsterisk
            | NodeTag::EnumDecl
            | NodeTag::Specifier
            | NodeTag::AssemblyFlags
            | NodeTag::Break
            | NodeTag::Continue
            | NodeTag::Identifier
            | NodeTag::NumberLiteral
            | NodeTag::NumberLiteralSubDenomination
            | NodeTag::StringLiteral
            | NodeTag::ElementaryType
            | NodeTag::YulLeave
            | NodeTag::UnreachableNode => {}
            NodeTag::ContractDecl | NodeTag::InterfaceDecl | NodeTag::AbstractDecl
            | NodeTag::LibraryDecl => push(&mut children, node.rhs),
            NodeTag::ContractDeclInheritanceOne
            | NodeTag::InterfaceDeclInheritanceOne
            | NodeTag::AbstractDeclInheritanceOne => {
                let record: crate::node::ContractInheritanceOne = self.extra(node.lhs);
                push(&mut children, record.inheritance);
                push(&mut children, node.rhs);
            }
            NodeTag::ContractDeclInheritance
            | NodeTag::InterfaceDeclInheritance
            | NodeTag::AbstractDeclInheritance => {
                let record: crate::node::ContractInheritance = self.extra(node.lhs);
                children.extend_from_slice(
                    self.extra_slice(record.inheritance_start, record.inheritance_end),
                );
                push(&mut children, node.rhs);
            }
            NodeTag::StructDecl | NodeTag::ErrorProto => {
                children.extend_from_slice(self.extra_slice(node.lhs, node.rhs))
            }
            NodeTag::EventProto => {
                let record: crate::node::EventProto = self.extra(node.lhs);
                children
                    .extend_from_slice(self.extra_slice(record.params_start, record.params_end));
            }
            NodeTag::UserDefinedTypeDecl => push(&mut children, node.lhs),
            NodeTag::UsingDirective => {
                let record: crate::node::Using = self.extra(node.lhs);
                children
                    .extend_from_slice(self.extra_slice(record.aliases_start, record.aliases_end));
                push(&mut children, record.target_type);
            }
            NodeTag::ConstantVariableDecl => {
                push(&mut children, node.lhs);
                push(&mut children, node.rhs);
            }
            NodeTag::StateVariableDecl => {
                let record: crate::node::StateVarProto = self.extra(node.lhs);
                push(&mut children, record.type_expr);
                push(&mut children, record.specifiers);
                push(&mut children, node.rhs);
            }
            NodeTag::VariableDecl => push(&mut children, node.lhs),
            NodeTag::FunctionProtoSimple | NodeTag::FunctionProtoOne => {
                let record: crate::node::FnProtoOne = self.extra(node.lhs);
                push(&mut children, record.param);
                push(&mut children, record.specifiers);
                if node.tag == NodeTag::FunctionProtoOne {
                    children.extend_from_slice(self.extra_range_slice(node.rhs));
                }
            }
            NodeTag::FunctionProtoMulti | NodeTag::FunctionProto => {
                let record: crate::node::FnProto = self.extra(node.lhs);
                children
                    .extend_from_slice(self.extra_slice(record.params_start, record.params_end));
                push(&mut children, record.specifiers);
                if node.tag == NodeTag::FunctionProto {
                    children.extend_from_slice(self.extra_range_slice(node.rhs));
                }
            }
            NodeTag::FunctionTypeSimple | NodeTag::FunctionTypeOne => {
                let record: crate::node::FnTypeProtoOne = self.extra(node.lhs);
                push(&mut children, record.param);
                push(&mut children, record.specifiers);
                if node.tag == NodeTag::FunctionTypeOne {
                    children.extend_from_slice(self.extra_range_slice(node.rhs));
                }
            }
            NodeTag::FunctionTypeMulti | NodeTag::FunctionType => {
                let record: crate::node::FnTypeProto = self.extra(node.lhs);
                children
                    .extend_from_slice(self.extra_slice(record.params_start, record.params_end));
                push(&mut children, record.specifiers);
                if node.tag == NodeTag::FunctionType {
                    children.extend_from_slice(self.extra_range_slice(node.rhs));
                }
            }
            NodeTag::FunctionDecl | NodeTag::ModifierDecl => {
                push(&mut children, node.lhs);
                push(&mut children, node.rhs);
            }
            NodeTag::ModifierProto => {
                let record: crate::node::ModifierProto = self.extra(node.lhs);
                children
                    .extend_from_slice(self.extra_slice(record.params_start, record.params_end));
                push(&mut children, record.specifiers);
            }
            NodeTag::Specifiers | NodeTag::OverrideSpecifier => {
                children.extend_from_slice(self.extra_slice(node.lhs, node.rhs))
            }
            NodeTag::BlockTwo
            | NodeTag::BlockTwoSemicolon
            | NodeTag::ContractBlockTwo
            | NodeTag::ContractBlockTwoSemicolon
            | NodeTag::AsmBlockTwo => {
                push(&mut children, node.lhs);
                push(&mut children, node.rhs);
            }
            NodeTag::Block
            | NodeTag::BlockSemicolon
            | NodeTag::ContractBlock
            | NodeTag::ContractBlockSemicolon
            | NodeTag::AsmBlock => {
                children.extend_from_slice(self.extra_slice(node.lhs, node.rhs))
            }
            NodeTag::IfSimple | NodeTag::While | NodeTag::DoWhile | NodeTag::YulIf
            | NodeTag::YulSwitchCase => {
                push(&mut children, node.lhs);
                push(&mut children, node.rhs);
            }
            NodeTag::If | NodeTag::Conditional => {
                push(&mut children, node.lhs);
                let record: crate::node::If = self.extra(node.rhs);
                push(&mut children, record.then_expression);
                push(&mut children, record.else_expression);
            }
            NodeTag::For | NodeTag::YulFor => {
                let record: crate::node::For = self.extra(node.lhs);
                push(&mut children, record.condition_one);
                push(&mut children, record.condition_two);
                push(&mut children, record.condition_three);
                push(&mut children, node.rhs);
            }
            NodeTag::Try => {
                let record: crate::node::Try = self.extra(node.lhs);
                push(&mut children, record.expression);
                if record.returns != 0 {
                    children.extend_from_slice(self.extra_range_slice(record.returns));
                }
                push(&mut children, record.block_statement);
                children.extend_from_slice(self.extra_range_slice(node.rhs));
            }
            NodeTag::Catch => {
                let record: crate::node::CatchProto = self.extra(node.lhs);
                children
                    .extend_from_slice(self.extra_slice(record.params_start, record.params_end));
                push(&mut children, node.rhs);
            }
            NodeTag::CatchSimple | NodeTag::YulSwitchDefault => push(&mut children, node.rhs),
            NodeTag::Return | NodeTag::Emit | NodeTag::Unchecked => push(&mut children, node.lhs),
            NodeTag::AssemblyDecl => {
                push(&mut children, node.lhs);
                push(&mut children, node.rhs);
            }
            NodeTag::Assign
            | NodeTag::AssignAdd
            | NodeTag::AssignSub
            | NodeTag::AssignMul
            | NodeTag::AssignDiv
            | NodeTag::AssignMod
            | NodeTag::AssignBitAnd
            | NodeTag::AssignBitOr
            | NodeTag::AssignBitXor
            | NodeTag::AssignShl
            | NodeTag::AssignSar
            | NodeTag::AssignShr
            | NodeTag::YulAssign
            | NodeTag::Or
            | NodeTag::And
            | NodeTag::EqualEqual
            | NodeTag::BangEqual
            | NodeTag::LessThan
            | NodeTag::GreaterThan
            | NodeTag::LessThanEqual
            | NodeTag::GreaterThanEqual
            | NodeTag::BitAnd
            | NodeTag::BitXor
            | NodeTag::BitOr
            | NodeTag::Shl
            | NodeTag::Sar
            | NodeTag::Shr
            | NodeTag::Add
            | NodeTag::Sub
            | NodeTag::Mul
            | NodeTag::Div
            | NodeTag::Mod
            | NodeTag::Exponent => {
                push(&mut children, node.lhs);
                push(&mut children, node.rhs);
            }
            NodeTag::BoolNot
            | NodeTag::BitNot
            | NodeTag::Negation
            | NodeTag::PreIncrement
            | NodeTag::PreDecrement
            | NodeTag::Delete
            | NodeTag::PostIncrement
            | NodeTag::PostDecrement
            | NodeTag::FieldAccess
            | NodeTag::New
            | NodeTag::MetaType
            | NodeTag::PayableConversion => push(&mut children, node.lhs),
            NodeTag::ArrayAccess | NodeTag::ArrayType | NodeTag::CallOne | NodeTag::YulCallOne
            | NodeTag::StructInitOne => {
                push(&mut children, node.lhs);
                push(&mut children, node.rhs);
            }
            NodeTag::Call | NodeTag::YulCall | NodeTag::StructInit => {
                push(&mut children, node.lhs);
                children.extend_from_slice(self.extra_range_slice(node.rhs));
            }
            NodeTag::StructInitField => push(&mut children, node.rhs),
            NodeTag::TupleInitOne | NodeTag::ArrayInitOne => push(&mut children, node.lhs),
            NodeTag::TupleInit | NodeTag::ArrayInit => {
                for child in self.extra_slice(node.lhs, node.rhs) {
                    push(&mut children, *child);
                }
            }
            NodeTag::MappingDecl => {
                let record: crate::node::Mapping = self.extra(node.lhs);
                push(&mut children, record.key);
                push(&mut children, node.rhs);
            }
            NodeTag::YulSwitch => {
                push(&mut children, node.lhs);
                children.extend_from_slice(self.extra_range_slice(node.rhs));
            }
            NodeTag::YulVarDecl | NodeTag::YulVarDeclMulti => push(&mut children, node.rhs),
            NodeTag::YulAssignMulti => {
                children.extend_from_slice(self.extra_range_slice(node.lhs));
                push(&mut children, node.rhs);
            }
            NodeTag::YulFunctionDecl | NodeTag::YulFullFunctionDecl => {
                push(&mut children, node.rhs)
            }
        }
        children
    }

    /// Pretty print the subtree rooted at a node to standard output.
    pub fn print(&self, node: NodeIndex) -> Result<(), std::io::Error> {
        ptree::print_tree(&TreeView { ast: self, node })
    }
}

/// A borrowed view of one node, usable with `ptree`.
pub struct TreeView<'a, 'src> {
    ast: &'a Ast<'src>,
    pub node: NodeIndex,
}

impl Clone for TreeView<'_, '_> {
    fn clone(&self) -> Self {
        Self {
            ast: self.ast,
            node: self.node,
        }
    }
}

impl TreeItem for TreeView<'_, '_> {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        let node = self.ast.node(self.node);
        write!(f, "{:?} # {}", node.tag, node.main_token)
    }

    fn children(&self) -> Cow<[Self::Child]> {
        let children: Vec<TreeView> = self
            .ast
            .children(self.node)
            .into_iter()
            .map(|node| TreeView {
                ast: self.ast,
                node,
            })
            .collect();
        Cow::from(children)
    }
}
