//! The index based syntax tree node and its auxiliary extra-data records.
//!
//! Every node is a fixed size record of four `u32` cells. Cross references are
//! integer indices: node index `0` is reserved as the "no node" sentinel (the
//! root occupies that slot and is never a child), and variable length child
//! lists live as `[start, end)` subranges of the shared `extra_data` pool.
//! The meaning of `lhs`/`rhs` is fixed per tag; the accessor helpers on
//! [Ast](crate::Ast) are the supported way to read them.

use crate::token::TokenIndex;

/// The index of a node in the node vector. `0` means "no node".
pub type NodeIndex = u32;

/// An offset into the extra data pool.
pub type ExtraIndex = u32;

/// The reserved "no node" sentinel.
pub const NULL_NODE: NodeIndex = 0;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
/// A syntax tree node. `main_token` points at the token that best identifies
/// the node in source, e.g. the `if` keyword of an if statement or the left
/// brace of a block.
pub struct Node {
    pub tag: NodeTag,
    pub main_token: TokenIndex,
    pub lhs: u32,
    pub rhs: u32,
}

impl Node {
    pub fn new(tag: NodeTag, main_token: TokenIndex, lhs: u32, rhs: u32) -> Self {
        Self {
            tag,
            main_token,
            lhs,
            rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
/// The closed set of syntax tree node kinds.
///
/// Several constructs come in arity specialized families: the `…Two`/`…One`
/// form keeps up to two (respectively one) children directly in `lhs`/`rhs`
/// with `0` meaning absent, while the plain form stores a `[start, end)` child
/// list in extra data. The `…Semicolon` block variants record that the token
/// before the closing brace is a semicolon.
pub enum NodeTag {
    /// The whole source unit; `lhs`/`rhs` span the top level declarations.
    Root,

    // Source units.
    /// `pragma …;` — `lhs`/`rhs` are the token range of the payload.
    PragmaDirective,
    /// `import "p";` or `import "p" as A;` — `lhs` = path token, `rhs` = alias token or 0.
    ImportDirectivePath,
    /// `import {a, b} from "p";` — `lhs` = extra `ImportSymbol`.
    ImportDirectiveSymbol,
    /// `import * as A from "p";` — `lhs` = alias token, `rhs` = path token.
    ImportDirectiveAsterisk,

    /// `contract C { … }` — `lhs` = identifier token, `rhs` = body block.
    ContractDecl,
    /// `contract C is B { … }` — `lhs` = extra `ContractInheritanceOne`, `rhs` = body.
    ContractDeclInheritanceOne,
    /// `contract C is A, B { … }` — `lhs` = extra `ContractInheritance`, `rhs` = body.
    ContractDeclInheritance,
    InterfaceDecl,
    InterfaceDeclInheritanceOne,
    InterfaceDeclInheritance,
    /// `library L { … }` — `lhs` = identifier token, `rhs` = body block.
    LibraryDecl,
    AbstractDecl,
    AbstractDeclInheritanceOne,
    AbstractDeclInheritance,

    // Declarations.
    /// `struct S { … }` — `lhs`/`rhs` span the field declarations.
    StructDecl,
    /// `enum E { A, B }` — `lhs`/`rhs` span the value identifier tokens.
    EnumDecl,
    /// `error E(…);` — `lhs`/`rhs` span the parameters.
    ErrorProto,
    /// `event E(…) [anonymous];` — `lhs` = extra `EventProto`.
    EventProto,
    /// `type T is uint256;` — `lhs` = underlying elementary type node.
    UserDefinedTypeDecl,
    /// `using … for …;` — `lhs` = extra `Using`.
    UsingDirective,
    /// Top level `T constant NAME = expr;` — `lhs` = type node, `rhs` = initializer.
    ConstantVariableDecl,
    /// Contract level variable — `lhs` = extra `StateVarProto`, `rhs` = initializer or 0.
    StateVariableDecl,
    /// `T [qualifier] [name]` — `lhs` = type node, `rhs` = name token or 0.
    VariableDecl,

    /// Function prototype, zero or one parameter, no returns —
    /// `lhs` = extra `FnProtoOne`.
    FunctionProtoSimple,
    /// Multiple parameters, no returns — `lhs` = extra `FnProto`.
    FunctionProtoMulti,
    /// Zero or one parameter with returns — `lhs` = extra `FnProtoOne`,
    /// `rhs` = extra `Range` of return declarations.
    FunctionProtoOne,
    /// Multiple parameters with returns — `lhs` = extra `FnProto`, `rhs` = extra `Range`.
    FunctionProto,
    /// `lhs` = prototype node, `rhs` = body block.
    FunctionDecl,
    /// `modifier m(…)` — `lhs` = extra `ModifierProto`.
    ModifierProto,
    /// `lhs` = prototype node, `rhs` = body block.
    ModifierDecl,
    /// Specifier run of a function or variable — `lhs`/`rhs` span the items.
    Specifiers,
    /// A single keyword specifier such as `public` or `virtual`.
    Specifier,
    /// `override` or `override(A, B)` — `lhs`/`rhs` span the paths, 0/0 when bare.
    OverrideSpecifier,

    // Blocks.
    BlockTwo,
    BlockTwoSemicolon,
    Block,
    BlockSemicolon,
    ContractBlockTwo,
    ContractBlockTwoSemicolon,
    ContractBlock,
    ContractBlockSemicolon,
    AsmBlockTwo,
    AsmBlock,

    // Statements.
    /// `if (cond) then` — `lhs` = condition, `rhs` = then statement.
    IfSimple,
    /// `if (cond) then else other` — `lhs` = condition, `rhs` = extra `If`.
    If,
    /// `for (…; …; …) body` — `lhs` = extra `For`, `rhs` = body.
    For,
    /// `lhs` = condition, `rhs` = body.
    While,
    /// `do body while (cond);` — `lhs` = body, `rhs` = condition.
    DoWhile,
    /// `try expr [returns (…)] block catch …` — `lhs` = extra `Try`,
    /// `rhs` = extra `Range` of catch clauses.
    Try,
    /// `catch [Identifier] (…) block` — `lhs` = extra `CatchProto`, `rhs` = block.
    Catch,
    /// `catch block` — `rhs` = block.
    CatchSimple,
    /// `lhs` = expression or 0.
    Return,
    /// `lhs` = call expression.
    Emit,
    Break,
    Continue,
    /// `lhs` = block.
    Unchecked,
    /// `assembly [(flags)] { … }` — `lhs` = `AssemblyFlags` node or 0, `rhs` = asm block.
    AssemblyDecl,
    /// `lhs`/`rhs` span the flag string tokens.
    AssemblyFlags,

    // Assignments; `lhs` = target, `rhs` = value.
    Assign,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignMod,
    AssignBitAnd,
    AssignBitOr,
    AssignBitXor,
    AssignShl,
    AssignSar,
    AssignShr,
    /// Yul `x := v`.
    YulAssign,

    // Binary operators; `lhs`/`rhs` are the operands, `main_token` the operator.
    Or,
    And,
    EqualEqual,
    BangEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    BitAnd,
    BitXor,
    BitOr,
    Shl,
    Sar,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exponent,
    /// `cond ? a : b` — `lhs` = condition, `rhs` = extra `If`.
    Conditional,

    // Prefix operators; `lhs` = operand.
    BoolNot,
    BitNot,
    Negation,
    PreIncrement,
    PreDecrement,
    Delete,

    // Suffix forms.
    PostIncrement,
    PostDecrement,
    /// `expr.field` — `lhs` = expression, `rhs` = member identifier token.
    FieldAccess,
    /// `expr[index?]` — `lhs` = expression, `rhs` = index or 0.
    ArrayAccess,
    /// `callee(arg?)` — `lhs` = callee, `rhs` = argument or 0.
    CallOne,
    /// `callee(…)` — `lhs` = callee, `rhs` = extra `Range` of arguments.
    Call,
    /// `name: value` inside a struct initializer — `rhs` = value.
    StructInitField,
    /// `[target]{field?}` — `lhs` = target or 0, `rhs` = field or 0.
    StructInitOne,
    /// `lhs` = target or 0, `rhs` = extra `Range` of fields.
    StructInit,
    /// `(item?)` — `lhs` = item or 0.
    TupleInitOne,
    /// `lhs`/`rhs` span the items; 0 entries mark empty slots.
    TupleInit,
    /// `[item?]` — `lhs` = item or 0.
    ArrayInitOne,
    ArrayInit,
    /// `new T` — `lhs` = type node.
    New,
    /// `type(T)` — `lhs` = type node.
    MetaType,
    /// `payable(expr)` — `lhs` = expression.
    PayableConversion,

    // Leaves.
    Identifier,
    NumberLiteral,
    /// A number literal with a unit suffix — `lhs` = unit token.
    NumberLiteralSubDenomination,
    StringLiteral,

    // Type expressions.
    ElementaryType,
    /// `T[size?]` — `lhs` = element type, `rhs` = size expression or 0.
    ArrayType,
    /// `mapping(K [k] => V [v])` — `lhs` = extra `Mapping`, `rhs` = value type node.
    MappingDecl,
    FunctionTypeSimple,
    FunctionTypeMulti,
    FunctionTypeOne,
    FunctionType,

    // Yul.
    YulIf,
    /// `for {init} cond {post} {body}` — `lhs` = extra `For`, `rhs` = body block.
    YulFor,
    /// `switch expr case … default …` — `lhs` = scrutinee, `rhs` = extra `Range` of cases.
    YulSwitch,
    /// `case literal block` — `lhs` = literal, `rhs` = block.
    YulSwitchCase,
    /// `default block` — `rhs` = block.
    YulSwitchDefault,
    /// `let name [:= value]` — `lhs` = name token, `rhs` = value or 0.
    YulVarDecl,
    /// `let a, b [:= call]` — `lhs` = extra `Range` of name tokens, `rhs` = value or 0.
    YulVarDeclMulti,
    /// `a, b := call` — `lhs` = extra `Range` of path nodes, `rhs` = call.
    YulAssignMulti,
    YulCallOne,
    YulCall,
    /// `function f(…) { … }` — `lhs` = extra `YulFnProto`, `rhs` = body.
    YulFunctionDecl,
    /// `function f(…) -> r { … }` — `lhs` = extra `YulFullFnProto`, `rhs` = body.
    YulFullFunctionDecl,
    YulLeave,

    /// Placeholder written by `reserve_node`; never reachable after a
    /// completed parse.
    UnreachableNode,
}

/// A named tuple of `u32` fields stored contiguously in the extra data pool.
/// The parser appends the fields in declaration order and the accessors read
/// them back the same way.
pub(crate) trait ExtraPayload: Sized {
    fn append(&self, pool: &mut Vec<u32>) -> ExtraIndex;
    fn decode(pool: &[u32], index: ExtraIndex) -> Self;
}

macro_rules! extra_record {
    ($(#[$doc:meta])* $name:ident { $($field:ident),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: u32,)+
        }

        impl ExtraPayload for $name {
            fn append(&self, pool: &mut Vec<u32>) -> ExtraIndex {
                let index = pool.len() as ExtraIndex;
                $(pool.push(self.$field);)+
                index
            }

            fn decode(pool: &[u32], index: ExtraIndex) -> Self {
                let mut at = index as usize;
                $(
                    let $field = pool[at];
                    at += 1;
                )+
                let _ = at;
                Self { $($field,)+ }
            }
        }
    };
}

extra_record!(
    /// A half open `[start, end)` subrange of the extra data pool.
    Range { start, end }
);
extra_record!(
    /// Prototype with multiple parameters; `identifier` is a token index.
    FnProto { specifiers, identifier, params_start, params_end }
);
extra_record!(
    /// Prototype with zero or one parameter.
    FnProtoOne { param, specifiers, identifier }
);
extra_record!(
    /// Function type with multiple parameters (no identifier).
    FnTypeProto { specifiers, params_start, params_end }
);
extra_record!(
    /// Function type with zero or one parameter.
    FnTypeProtoOne { param, specifiers }
);
extra_record!(
    /// Contract prototype with a multi element inheritance list.
    ContractInheritance { identifier, inheritance_start, inheritance_end }
);
extra_record!(
    /// Contract prototype with a single parent.
    ContractInheritanceOne { identifier, inheritance }
);
extra_record!(
    /// Event prototype; `anonymous` is the keyword token index or 0.
    EventProto { params_start, params_end, anonymous }
);
extra_record!(
    /// Symbol import; `from` is the path string token, the span holds the
    /// imported identifier tokens.
    ImportSymbol { from, symbol_start, symbol_end }
);
extra_record!(
    /// Then/else pair of an if statement or conditional expression.
    If { then_expression, else_expression }
);
extra_record!(
    /// The three clauses of a for statement (any may be 0), or the
    /// init/condition/post triple of a Yul for loop.
    For { condition_one, condition_two, condition_three }
);
extra_record!(
    /// `returns` is an extra `Range` index or 0.
    Try { returns, expression, block_statement }
);
extra_record!(
    /// Catch clause with parameters; `identifier` is a token index or 0.
    CatchProto { identifier, params_start, params_end }
);
extra_record!(
    /// Mapping type; the optional component names are token indices.
    Mapping { key, key_identifier, value_identifier }
);
extra_record!(
    /// Modifier prototype; `specifiers` is a `Specifiers` node or 0.
    ModifierProto { specifiers, params_start, params_end }
);
extra_record!(
    /// State variable prototype; `specifiers` is a `Specifiers` node or 0.
    StateVarProto { type_expr, specifiers }
);
extra_record!(
    /// Using directive; `target_type` is 0 for `*`, `global` is the trailing
    /// keyword token index or 0.
    Using { aliases_start, aliases_end, target_type, global }
);
extra_record!(
    /// Yul function definition without returns; the spans hold name tokens.
    YulFnProto { identifier, params_start, params_end }
);
extra_record!(
    /// Yul function definition with returns.
    YulFullFnProto { identifier, params_start, params_end, returns_start, returns_end }
);
