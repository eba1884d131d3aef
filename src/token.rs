use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The index of a token in the token vector produced by the [Tokenizer](crate::Tokenizer).
pub type TokenIndex = u32;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
/// Lexical classification of a source token.
///
/// The enumeration is closed: every byte sequence maps onto one of these tags,
/// with [Invalid](TokenTag::Invalid) covering malformed input and an infinite
/// [Eof](TokenTag::Eof) tail reported at the end of the buffer.
pub enum TokenTag {
    Invalid,
    Identifier,
    NumberLiteral,
    StringLiteral,
    DocComment,
    DocCommentContainer,
    Eof,

    // Punctuation.
    OpenParen, CloseParen, OpenBracket, CloseBracket, OpenBrace, CloseBrace,
    Semicolon, Comma, Colon, ColonEqual, Period, QuestionMark, Tilde, Arrow, FatArrow,

    // Operators, simple and compound.
    Bang, BangEqual,
    Equal, EqualEqual,
    Plus, PlusPlus, PlusEqual,
    Minus, MinusMinus, MinusEqual,
    Asterisk, AsteriskAsterisk, AsteriskEqual,
    Slash, SlashEqual,
    Percent, PercentEqual,
    Ampersand, AmpersandAmpersand, AmpersandEqual,
    Pipe, PipePipe, PipeEqual,
    Caret, CaretEqual,
    LessThan, LessThanEqual, GreaterThan, GreaterThanEqual,
    Shl, ShlEqual, Sar, SarEqual, Shr, ShrEqual,

    // Control keywords.
    If, Else, For, While, Do, Break, Continue, Return, Emit, Try, Catch, Throw,
    Leave, Assembly, Unchecked,

    // Declaration keywords.
    Contract, Interface, Library, Abstract, Struct, Enum, Event, Error, Modifier,
    Function, Constructor, Fallback, Receive, Type, Using, Mapping, Import, Pragma,
    Is, New, Delete, Returns, As,

    // Qualifier keywords.
    Public, Private, Internal, External, View, Pure, Payable,
    Memory, Storage, Calldata, Constant, Immutable, Virtual, Override,
    Indexed, Anonymous,

    // Unit suffixes for number literals.
    Wei, Gwei, Ether, Seconds, Minutes, Hours, Days, Weeks, Years,

    // Reserved words, kept apart from the Solidity identifier space so that
    // the Yul grammar can recognise `let`, `case`, `default`, `switch` and
    // `byte` directly.
    Let, Case, Default, Switch, Byte,
    After, Alias, Apply, Auto, CopyOf, Define, Final, Implements, In, Inline,
    Macro, Match, Mutable, Null, Of, Partial, Promise, Reference, Relocatable,
    Sealed, SizeOf, Static, Supports, Typedef, TypeOf, Var, Fixed, Ufixed,

    // Elementary type keywords. The block is contiguous so the parser can
    // test membership with an ordered range check.
    Address, Bool, String, Bytes,
    Bytes1, Bytes2, Bytes3, Bytes4, Bytes5, Bytes6, Bytes7, Bytes8,
    Bytes9, Bytes10, Bytes11, Bytes12, Bytes13, Bytes14, Bytes15, Bytes16,
    Bytes17, Bytes18, Bytes19, Bytes20, Bytes21, Bytes22, Bytes23, Bytes24,
    Bytes25, Bytes26, Bytes27, Bytes28, Bytes29, Bytes30, Bytes31, Bytes32,
    Uint,
    Uint8, Uint16, Uint24, Uint32, Uint40, Uint48, Uint56, Uint64,
    Uint72, Uint80, Uint88, Uint96, Uint104, Uint112, Uint120, Uint128,
    Uint136, Uint144, Uint152, Uint160, Uint168, Uint176, Uint184, Uint192,
    Uint200, Uint208, Uint216, Uint224, Uint232, Uint240, Uint248, Uint256,
    Int,
    Int8, Int16, Int24, Int32, Int40, Int48, Int56, Int64,
    Int72, Int80, Int88, Int96, Int104, Int112, Int120, Int128,
    Int136, Int144, Int152, Int160, Int168, Int176, Int184, Int192,
    Int200, Int208, Int216, Int224, Int232, Int240, Int248, Int256,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
/// Element of the tokenized data: a tag and the `[start, end)` byte range of
/// the lexeme in the source buffer.
pub struct Token {
    pub tag: TokenTag,
    pub start: u32,
    pub end: u32,
}

impl Token {
    pub fn new(tag: TokenTag, start: u32, end: u32) -> Self {
        Self { tag, start, end }
    }
}

#[rustfmt::skip]
static KEYWORDS: &[(&str, TokenTag)] = &[
    ("abstract", TokenTag::Abstract), ("after", TokenTag::After), ("alias", TokenTag::Alias),
    ("anonymous", TokenTag::Anonymous), ("apply", TokenTag::Apply), ("as", TokenTag::As),
    ("assembly", TokenTag::Assembly), ("auto", TokenTag::Auto), ("break", TokenTag::Break),
    ("byte", TokenTag::Byte), ("calldata", TokenTag::Calldata), ("case", TokenTag::Case),
    ("catch", TokenTag::Catch), ("constant", TokenTag::Constant), ("constructor", TokenTag::Constructor),
    ("continue", TokenTag::Continue), ("contract", TokenTag::Contract), ("copyof", TokenTag::CopyOf),
    ("days", TokenTag::Days), ("default", TokenTag::Default), ("define", TokenTag::Define),
    ("delete", TokenTag::Delete), ("do", TokenTag::Do), ("else", TokenTag::Else),
    ("emit", TokenTag::Emit), ("enum", TokenTag::Enum), ("error", TokenTag::Error),
    ("ether", TokenTag::Ether), ("event", TokenTag::Event), ("external", TokenTag::External),
    ("fallback", TokenTag::Fallback), ("final", TokenTag::Final), ("fixed", TokenTag::Fixed),
    ("for", TokenTag::For), ("function", TokenTag::Function), ("gwei", TokenTag::Gwei),
    ("hours", TokenTag::Hours), ("if", TokenTag::If), ("immutable", TokenTag::Immutable),
    ("implements", TokenTag::Implements), ("import", TokenTag::Import), ("in", TokenTag::In),
    ("indexed", TokenTag::Indexed), ("inline", TokenTag::Inline), ("interface", TokenTag::Interface),
    ("internal", TokenTag::Internal), ("is", TokenTag::Is), ("leave", TokenTag::Leave),
    ("let", TokenTag::Let), ("library", TokenTag::Library), ("macro", TokenTag::Macro),
    ("mapping", TokenTag::Mapping), ("match", TokenTag::Match), ("memory", TokenTag::Memory),
    ("minutes", TokenTag::Minutes), ("modifier", TokenTag::Modifier), ("mutable", TokenTag::Mutable),
    ("new", TokenTag::New), ("null", TokenTag::Null), ("of", TokenTag::Of),
    ("override", TokenTag::Override), ("partial", TokenTag::Partial), ("payable", TokenTag::Payable),
    ("pragma", TokenTag::Pragma), ("private", TokenTag::Private), ("promise", TokenTag::Promise),
    ("public", TokenTag::Public), ("pure", TokenTag::Pure), ("receive", TokenTag::Receive),
    ("reference", TokenTag::Reference), ("relocatable", TokenTag::Relocatable), ("return", TokenTag::Return),
    ("returns", TokenTag::Returns), ("sealed", TokenTag::Sealed), ("seconds", TokenTag::Seconds),
    ("sizeof", TokenTag::SizeOf), ("static", TokenTag::Static), ("storage", TokenTag::Storage),
    ("struct", TokenTag::Struct), ("supports", TokenTag::Supports), ("switch", TokenTag::Switch),
    ("throw", TokenTag::Throw), ("try", TokenTag::Try), ("type", TokenTag::Type),
    ("typedef", TokenTag::Typedef), ("typeof", TokenTag::TypeOf), ("ufixed", TokenTag::Ufixed),
    ("unchecked", TokenTag::Unchecked), ("using", TokenTag::Using), ("var", TokenTag::Var),
    ("view", TokenTag::View), ("virtual", TokenTag::Virtual), ("weeks", TokenTag::Weeks),
    ("wei", TokenTag::Wei), ("while", TokenTag::While), ("years", TokenTag::Years),
];

#[rustfmt::skip]
static ELEMENTARY_TYPES: &[(&str, TokenTag)] = &[
    ("address", TokenTag::Address), ("bool", TokenTag::Bool),
    ("string", TokenTag::String), ("bytes", TokenTag::Bytes),
    ("bytes1", TokenTag::Bytes1), ("bytes2", TokenTag::Bytes2), ("bytes3", TokenTag::Bytes3), ("bytes4", TokenTag::Bytes4),
    ("bytes5", TokenTag::Bytes5), ("bytes6", TokenTag::Bytes6), ("bytes7", TokenTag::Bytes7), ("bytes8", TokenTag::Bytes8),
    ("bytes9", TokenTag::Bytes9), ("bytes10", TokenTag::Bytes10), ("bytes11", TokenTag::Bytes11), ("bytes12", TokenTag::Bytes12),
    ("bytes13", TokenTag::Bytes13), ("bytes14", TokenTag::Bytes14), ("bytes15", TokenTag::Bytes15), ("bytes16", TokenTag::Bytes16),
    ("bytes17", TokenTag::Bytes17), ("bytes18", TokenTag::Bytes18), ("bytes19", TokenTag::Bytes19), ("bytes20", TokenTag::Bytes20),
    ("bytes21", TokenTag::Bytes21), ("bytes22", TokenTag::Bytes22), ("bytes23", TokenTag::Bytes23), ("bytes24", TokenTag::Bytes24),
    ("bytes25", TokenTag::Bytes25), ("bytes26", TokenTag::Bytes26), ("bytes27", TokenTag::Bytes27), ("bytes28", TokenTag::Bytes28),
    ("bytes29", TokenTag::Bytes29), ("bytes30", TokenTag::Bytes30), ("bytes31", TokenTag::Bytes31), ("bytes32", TokenTag::Bytes32),
    ("uint", TokenTag::Uint),
    ("uint8", TokenTag::Uint8), ("uint16", TokenTag::Uint16), ("uint24", TokenTag::Uint24), ("uint32", TokenTag::Uint32),
    ("uint40", TokenTag::Uint40), ("uint48", TokenTag::Uint48), ("uint56", TokenTag::Uint56), ("uint64", TokenTag::Uint64),
    ("uint72", TokenTag::Uint72), ("uint80", TokenTag::Uint80), ("uint88", TokenTag::Uint88), ("uint96", TokenTag::Uint96),
    ("uint104", TokenTag::Uint104), ("uint112", TokenTag::Uint112), ("uint120", TokenTag::Uint120), ("uint128", TokenTag::Uint128),
    ("uint136", TokenTag::Uint136), ("uint144", TokenTag::Uint144), ("uint152", TokenTag::Uint152), ("uint160", TokenTag::Uint160),
    ("uint168", TokenTag::Uint168), ("uint176", TokenTag::Uint176), ("uint184", TokenTag::Uint184), ("uint192", TokenTag::Uint192),
    ("uint200", TokenTag::Uint200), ("uint208", TokenTag::Uint208), ("uint216", TokenTag::Uint216), ("uint224", TokenTag::Uint224),
    ("uint232", TokenTag::Uint232), ("uint240", TokenTag::Uint240), ("uint248", TokenTag::Uint248), ("uint256", TokenTag::Uint256),
    ("int", TokenTag::Int),
    ("int8", TokenTag::Int8), ("int16", TokenTag::Int16), ("int24", TokenTag::Int24), ("int32", TokenTag::Int32),
    ("int40", TokenTag::Int40), ("int48", TokenTag::Int48), ("int56", TokenTag::Int56), ("int64", TokenTag::Int64),
    ("int72", TokenTag::Int72), ("int80", TokenTag::Int80), ("int88", TokenTag::Int88), ("int96", TokenTag::Int96),
    ("int104", TokenTag::Int104), ("int112", TokenTag::Int112), ("int120", TokenTag::Int120), ("int128", TokenTag::Int128),
    ("int136", TokenTag::Int136), ("int144", TokenTag::Int144), ("int152", TokenTag::Int152), ("int160", TokenTag::Int160),
    ("int168", TokenTag::Int168), ("int176", TokenTag::Int176), ("int184", TokenTag::Int184), ("int192", TokenTag::Int192),
    ("int200", TokenTag::Int200), ("int208", TokenTag::Int208), ("int216", TokenTag::Int216), ("int224", TokenTag::Int224),
    ("int232", TokenTag::Int232), ("int240", TokenTag::Int240), ("int248", TokenTag::Int248), ("int256", TokenTag::Int256),
];

static KEYWORD_MAP: Lazy<HashMap<&'static str, TokenTag>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

static ELEMENTARY_TYPE_MAP: Lazy<HashMap<&'static str, TokenTag>> =
    Lazy::new(|| ELEMENTARY_TYPES.iter().copied().collect());

impl TokenTag {
    /// Look an identifier up in the keyword map.
    pub fn keyword(ident: &str) -> Option<TokenTag> {
        KEYWORD_MAP.get(ident).copied()
    }

    /// Look an identifier up in the elementary type keyword map.
    pub fn elementary_type(ident: &str) -> Option<TokenTag> {
        ELEMENTARY_TYPE_MAP.get(ident).copied()
    }

    pub fn is_elementary_type(self) -> bool {
        self >= TokenTag::Address && self <= TokenTag::Int256
    }

    pub fn is_unit_suffix(self) -> bool {
        self >= TokenTag::Wei && self <= TokenTag::Years
    }

    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            TokenTag::Public | TokenTag::Private | TokenTag::Internal | TokenTag::External
        )
    }

    pub fn is_mutability(self) -> bool {
        matches!(self, TokenTag::View | TokenTag::Pure | TokenTag::Payable)
    }

    pub fn is_storage_location(self) -> bool {
        matches!(self, TokenTag::Memory | TokenTag::Storage | TokenTag::Calldata)
    }

    /// A printable symbol for diagnostics: the lexeme itself for punctuation
    /// and keywords, a short description otherwise.
    pub fn symbol(self) -> &'static str {
        match self {
            TokenTag::Invalid => "invalid bytes",
            TokenTag::Identifier => "an identifier",
            TokenTag::NumberLiteral => "a number literal",
            TokenTag::StringLiteral => "a string literal",
            TokenTag::DocComment | TokenTag::DocCommentContainer => "a doc comment",
            TokenTag::Eof => "EOF",
            TokenTag::OpenParen => "(",
            TokenTag::CloseParen => ")",
            TokenTag::OpenBracket => "[",
            TokenTag::CloseBracket => "]",
            TokenTag::OpenBrace => "{",
            TokenTag::CloseBrace => "}",
            TokenTag::Semicolon => ";",
            TokenTag::Comma => ",",
            TokenTag::Colon => ":",
            TokenTag::ColonEqual => ":=",
            TokenTag::Period => ".",
            TokenTag::QuestionMark => "?",
            TokenTag::Tilde => "~",
            TokenTag::Arrow => "->",
            TokenTag::FatArrow => "=>",
            TokenTag::Bang => "!",
            TokenTag::BangEqual => "!=",
            TokenTag::Equal => "=",
            TokenTag::EqualEqual => "==",
            TokenTag::Plus => "+",
            TokenTag::PlusPlus => "++",
            TokenTag::PlusEqual => "+=",
            TokenTag::Minus => "-",
            TokenTag::MinusMinus => "--",
            TokenTag::MinusEqual => "-=",
            TokenTag::Asterisk => "*",
            TokenTag::AsteriskAsterisk => "**",
            TokenTag::AsteriskEqual => "*=",
            TokenTag::Slash => "/",
            TokenTag::SlashEqual => "/=",
            TokenTag::Percent => "%",
            TokenTag::PercentEqual => "%=",
            TokenTag::Ampersand => "&",
            TokenTag::AmpersandAmpersand => "&&",
            TokenTag::AmpersandEqual => "&=",
            TokenTag::Pipe => "|",
            TokenTag::PipePipe => "||",
            TokenTag::PipeEqual => "|=",
            TokenTag::Caret => "^",
            TokenTag::CaretEqual => "^=",
            TokenTag::LessThan => "<",
            TokenTag::LessThanEqual => "<=",
            TokenTag::GreaterThan => ">",
            TokenTag::GreaterThanEqual => ">=",
            TokenTag::Shl => "<<",
            TokenTag::ShlEqual => "<<=",
            TokenTag::Sar => ">>",
            TokenTag::SarEqual => ">>=",
            TokenTag::Shr => ">>>",
            TokenTag::ShrEqual => ">>>=",
            tag => KEYWORDS
                .iter()
                .chain(ELEMENTARY_TYPES.iter())
                .copied()
                .find(|(_, t)| *t == tag)
                .map(|(s, _)| s)
                .unwrap_or("a token"),
        }
    }
}
