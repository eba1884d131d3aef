use crate::token::{TokenIndex, TokenTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The kind of a syntactic diagnostic. Diagnostics never abort the parse;
/// they accumulate on the [Ast](crate::Ast) alongside a best effort tree.
pub enum ErrorTag {
    /// A specific token was expected; the tag is carried in
    /// [Diagnostic::extra].
    ExpectedToken,
    ExpectedSemicolon,
    ExpectedCloseBrace,
    ExpectedCommaAfter,
    ExpectedSourceUnitExpr,
    ExpectedContractElement,
    ExpectedStatement,
    ExpectedTypeExpr,
    ExpectedPrefixExpr,
    ExpectedReturnType,
    ExpectedPragmaVersion,
    ExpectedImportPathAliasAsterisk,
    ExpectedStructField,
    ExpectedEventParam,
    ExpectedErrorParam,
    ExpectedVariableDecl,
    ExpectedOperator,
    ExpectedFunctionCall,
    ExpectedElementaryOrIdentifierPath,
    ExpectedSuffix,
    ExpectedSemicolonOrOpenBrace,
    TrailingComma,
    SameLineDocComment,
    ChainedComparisonOperators,
    AlreadySeenSpecifier,
    UnattachedDocComment,
    ExpectedYulStatement,
    ExpectedYulExpression,
    ExpectedYulAssignment,
    ExpectedYulFunctionCall,
    ExpectedYulLiteral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A recorded syntax diagnostic.
///
/// `token_is_prev` asks the renderer to place the caret at the end of the
/// previous token instead, which reads better for missing-terminator style
/// messages.
pub struct Diagnostic {
    pub tag: ErrorTag,
    pub token: TokenIndex,
    pub token_is_prev: bool,
    pub extra: Option<TokenTag>,
}

impl Diagnostic {
    pub(crate) fn new(tag: ErrorTag, token: TokenIndex) -> Self {
        Self {
            tag,
            token,
            token_is_prev: false,
            extra: None,
        }
    }

    /// The message body, without position information.
    pub fn describe(&self) -> String {
        match self.tag {
            ErrorTag::ExpectedToken => match self.extra {
                Some(tag) => format!("expected '{}'", tag.symbol()),
                None => "expected a token".to_string(),
            },
            ErrorTag::ExpectedSemicolon => "expected ';'".to_string(),
            ErrorTag::ExpectedCloseBrace => "expected '}'".to_string(),
            ErrorTag::ExpectedCommaAfter => "expected ',' after the element".to_string(),
            ErrorTag::ExpectedSourceUnitExpr => "expected a source unit".to_string(),
            ErrorTag::ExpectedContractElement => "expected a contract element".to_string(),
            ErrorTag::ExpectedStatement => "expected a statement".to_string(),
            ErrorTag::ExpectedTypeExpr => "expected a type expression".to_string(),
            ErrorTag::ExpectedPrefixExpr => "expected an expression".to_string(),
            ErrorTag::ExpectedReturnType => "expected a return type".to_string(),
            ErrorTag::ExpectedPragmaVersion => "expected a pragma version".to_string(),
            ErrorTag::ExpectedImportPathAliasAsterisk => {
                "expected an import path, symbol braces or '*'".to_string()
            }
            ErrorTag::ExpectedStructField => "expected a struct field".to_string(),
            ErrorTag::ExpectedEventParam => "expected an event parameter".to_string(),
            ErrorTag::ExpectedErrorParam => "expected an error parameter".to_string(),
            ErrorTag::ExpectedVariableDecl => "expected a variable declaration".to_string(),
            ErrorTag::ExpectedOperator => "expected an operator".to_string(),
            ErrorTag::ExpectedFunctionCall => "expected a function call".to_string(),
            ErrorTag::ExpectedElementaryOrIdentifierPath => {
                "expected an elementary type or an identifier path".to_string()
            }
            ErrorTag::ExpectedSuffix => "expected a member name after '.'".to_string(),
            ErrorTag::ExpectedSemicolonOrOpenBrace => "expected ';' or '{'".to_string(),
            ErrorTag::TrailingComma => "trailing comma is not allowed here".to_string(),
            ErrorTag::SameLineDocComment => {
                "doc comment on the same line as the previous token".to_string()
            }
            ErrorTag::ChainedComparisonOperators => {
                "comparison operators cannot be chained".to_string()
            }
            ErrorTag::AlreadySeenSpecifier => "specifier already present".to_string(),
            ErrorTag::UnattachedDocComment => "doc comment is not attached to anything".to_string(),
            ErrorTag::ExpectedYulStatement => "expected a yul statement".to_string(),
            ErrorTag::ExpectedYulExpression => "expected a yul expression".to_string(),
            ErrorTag::ExpectedYulAssignment => "expected ':=' assignment".to_string(),
            ErrorTag::ExpectedYulFunctionCall => "expected a yul function call".to_string(),
            ErrorTag::ExpectedYulLiteral => "expected a yul literal".to_string(),
        }
    }
}
