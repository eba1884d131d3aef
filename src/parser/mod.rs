//! A hand written recursive descent parser for Solidity.
//!
//! The [Parser] walks the token vector produced by the
//! [Tokenizer](crate::Tokenizer) and emits index based [Node] records into the
//! arena vectors it owns during the parse. Syntax errors are recoverable: the
//! failing helper raises the [ParsingError] sentinel, the nearest recoverable
//! wrapper records a [Diagnostic], re-synchronizes at a plausible boundary and
//! parsing continues.

mod expression;
mod source;
mod statement;
mod type_expr;
mod yul;

#[cfg(test)]
mod __tests__;

use crate::error::{Diagnostic, ErrorTag};
use crate::node::{ExtraIndex, ExtraPayload, Node, NodeIndex, NodeTag, Range, NULL_NODE};
use crate::token::{Token, TokenIndex, TokenTag};
use crate::util::{Code, Log};

/// The recoverable parsing error sentinel. Carries no payload: the diagnostic
/// has already been recorded when this is raised.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParsingError;

pub(crate) type ParserResult<T = NodeIndex> = Result<T, ParsingError>;

pub(crate) struct Parser<'a, 'src> {
    pub(crate) code: &'a Code<'src>,
    pub(crate) tokens: &'a [Token],
    pub(crate) token_index: TokenIndex,
    pub(crate) nodes: Vec<Node>,
    pub(crate) extra_data: Vec<u32>,
    pub(crate) errors: Vec<Diagnostic>,
    /// Shared accumulation stack for variable length child lists. Every
    /// helper marks the length on entry and truncates back to the mark on all
    /// exits, so the stack is empty again when the parse returns.
    pub(crate) scratch: Vec<NodeIndex>,
    pub(crate) log: Log<&'static str>,
}

impl<'a, 'src> Parser<'a, 'src> {
    pub(crate) fn new(code: &'a Code<'src>, tokens: &'a [Token], log: Log<&'static str>) -> Self {
        let mut parser = Self {
            code,
            tokens,
            token_index: 0,
            nodes: Vec::new(),
            extra_data: Vec::new(),
            errors: Vec::new(),
            scratch: Vec::new(),
            log,
        };
        // Seed the pool so extra index 0 is never a live record and can act
        // as the "absent" sentinel inside record fields.
        parser.extra_data.push(0);
        parser
    }

    pub(crate) fn into_parts(self) -> (Vec<Node>, Vec<u32>, Vec<Diagnostic>) {
        debug_assert!(self.scratch.is_empty());
        (self.nodes, self.extra_data, self.errors)
    }

    // ---- token cursor ----

    pub(crate) fn token_tag(&self, index: TokenIndex) -> TokenTag {
        self.tokens
            .get(index as usize)
            .map(|t| t.tag)
            .unwrap_or(TokenTag::Eof)
    }

    pub(crate) fn token_start(&self, index: TokenIndex) -> u32 {
        self.tokens
            .get(index as usize)
            .map(|t| t.start)
            .unwrap_or(self.code.value.len() as u32)
    }

    pub(crate) fn current(&self) -> TokenTag {
        self.token_tag(self.token_index)
    }

    pub(crate) fn peek(&self) -> TokenTag {
        self.token_tag(self.token_index + 1)
    }

    pub(crate) fn token_slice(&self, index: TokenIndex) -> &'src str {
        let token = &self.tokens[index as usize];
        unsafe {
            std::str::from_utf8_unchecked(
                &self.code.value[token.start as usize..token.end as usize],
            )
        }
    }

    /// Return the current token index and advance, saturating at EOF.
    pub(crate) fn next_token(&mut self) -> TokenIndex {
        let index = self.token_index;
        if self.current() != TokenTag::Eof {
            self.token_index += 1;
        }
        index
    }

    pub(crate) fn eat(&mut self, tag: TokenTag) -> Option<TokenIndex> {
        if self.current() == tag {
            Some(self.next_token())
        } else {
            None
        }
    }

    pub(crate) fn expect_token(&mut self, tag: TokenTag) -> ParserResult<TokenIndex> {
        match self.eat(tag) {
            Some(index) => Ok(index),
            None => Err(self.fail_expected(tag)),
        }
    }

    /// Best effort semicolon: a missing one is reported as a warning and the
    /// parse keeps going without consuming anything.
    pub(crate) fn expect_semicolon(&mut self) {
        if self.eat(TokenTag::Semicolon).is_none() {
            self.warn(ErrorTag::ExpectedSemicolon);
        }
    }

    pub(crate) fn same_line(&self, first: TokenIndex, second: TokenIndex) -> bool {
        self.code
            .same_line(self.token_start(first) as usize, self.token_start(second) as usize)
    }

    // ---- diagnostics ----

    fn push_diagnostic(&mut self, mut diagnostic: Diagnostic, allow_prev_rewrite: bool) {
        // A diagnostic on a different line than the previous token reads
        // better when the caret sits at the end of that previous token.
        if allow_prev_rewrite
            && diagnostic.token > 0
            && !self.same_line(diagnostic.token - 1, diagnostic.token)
        {
            diagnostic.token -= 1;
            diagnostic.token_is_prev = true;
        }
        self.log.log_diagnostic(
            &diagnostic.describe(),
            self.code,
            self.token_start(diagnostic.token) as usize,
        );
        self.errors.push(diagnostic);
    }

    pub(crate) fn warn(&mut self, tag: ErrorTag) {
        let diagnostic = Diagnostic::new(tag, self.token_index);
        self.push_diagnostic(diagnostic, true);
    }

    /// Report at a specific token, without the previous-token rewrite.
    pub(crate) fn warn_at(&mut self, token: TokenIndex, tag: ErrorTag) {
        self.push_diagnostic(Diagnostic::new(tag, token), false);
    }

    pub(crate) fn fail(&mut self, tag: ErrorTag) -> ParsingError {
        self.warn(tag);
        ParsingError
    }

    pub(crate) fn fail_at(&mut self, token: TokenIndex, tag: ErrorTag) -> ParsingError {
        self.warn_at(token, tag);
        ParsingError
    }

    pub(crate) fn fail_expected(&mut self, expected: TokenTag) -> ParsingError {
        let mut diagnostic = Diagnostic::new(ErrorTag::ExpectedToken, self.token_index);
        diagnostic.extra = Some(expected);
        self.push_diagnostic(diagnostic, true);
        ParsingError
    }

    // ---- arena primitives ----

    pub(crate) fn add_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as NodeIndex;
        self.nodes.push(node);
        index
    }

    /// Append a placeholder slot to be filled in later with `set_node`.
    pub(crate) fn reserve_node(&mut self, tag: NodeTag) -> NodeIndex {
        self.add_node(Node::new(tag, 0, 0, 0))
    }

    pub(crate) fn set_node(&mut self, index: NodeIndex, node: Node) -> NodeIndex {
        self.nodes[index as usize] = node;
        index
    }

    pub(crate) fn add_extra<T: ExtraPayload>(&mut self, record: T) -> ExtraIndex {
        record.append(&mut self.extra_data)
    }

    pub(crate) fn add_range(&mut self, start: u32, end: u32) -> ExtraIndex {
        self.add_extra(Range { start, end })
    }

    /// Move the scratch entries above `top` into extra data and restore the
    /// scratch mark. Returns the resulting `[start, end)` span.
    pub(crate) fn scratch_to_span(&mut self, top: usize) -> (u32, u32) {
        let start = self.extra_data.len() as u32;
        self.extra_data.extend_from_slice(&self.scratch[top..]);
        let end = self.extra_data.len() as u32;
        self.scratch.truncate(top);
        (start, end)
    }

    // ---- doc comments ----

    /// Skip doc comment tokens in declaration position, returning the first
    /// one. A doc comment sharing a line with the token before it is almost
    /// always a misplaced trailing comment and gets a warning.
    pub(crate) fn eat_doc_comments(&mut self) -> Option<TokenIndex> {
        let mut first = None;
        while matches!(
            self.current(),
            TokenTag::DocComment | TokenTag::DocCommentContainer
        ) {
            let index = self.next_token();
            if first.is_none() {
                if index > 0 && self.same_line(index - 1, index) {
                    self.warn_at(index, ErrorTag::SameLineDocComment);
                }
                first = Some(index);
            }
        }
        first
    }

    // ---- error recovery ----

    /// Run a parse helper; on the recoverable sentinel, re-synchronize with
    /// the given anchor and return the null node so the enclosing loop can
    /// continue.
    pub(crate) fn recover<F>(&mut self, parse: F, find_next: fn(&mut Self)) -> NodeIndex
    where
        F: FnOnce(&mut Self) -> ParserResult,
    {
        let entry = self.token_index;
        let scratch_top = self.scratch.len();
        match parse(self) {
            Ok(node) => node,
            Err(ParsingError) => {
                // Drop whatever the failed helper left on the shared stack.
                self.scratch.truncate(scratch_top);
                let from = self.token_start(entry) as usize;
                find_next(self);
                // Guarantee progress when neither the failed helper nor the
                // anchor consumed anything.
                if self.token_index == entry && self.current() != TokenTag::Eof {
                    self.token_index += 1;
                    find_next(self);
                }
                self.log
                    .log_recovery(self.code, from, self.token_start(self.token_index) as usize);
                NULL_NODE
            }
        }
    }

    /// Scan forward to a token that plausibly begins the next source unit.
    pub(crate) fn find_next_source(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.current() {
                TokenTag::Eof => return,
                TokenTag::OpenBrace | TokenTag::OpenBracket | TokenTag::OpenParen => depth += 1,
                TokenTag::CloseBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                TokenTag::CloseBracket | TokenTag::CloseParen => depth = depth.saturating_sub(1),
                TokenTag::Semicolon if depth == 0 => {
                    self.token_index += 1;
                    return;
                }
                TokenTag::Pragma
                | TokenTag::Import
                | TokenTag::Contract
                | TokenTag::Interface
                | TokenTag::Library
                | TokenTag::Abstract
                | TokenTag::Struct
                | TokenTag::Enum
                | TokenTag::Event
                | TokenTag::Error
                | TokenTag::Type
                | TokenTag::Using
                | TokenTag::Function
                    if depth == 0 =>
                {
                    return
                }
                _ => {}
            }
            self.token_index += 1;
        }
    }

    /// Scan forward to a token that plausibly begins the next contract body
    /// element.
    pub(crate) fn find_next_contract_element(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.current() {
                TokenTag::Eof => return,
                TokenTag::OpenBrace | TokenTag::OpenBracket | TokenTag::OpenParen => depth += 1,
                TokenTag::CloseBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                TokenTag::CloseBracket | TokenTag::CloseParen => depth = depth.saturating_sub(1),
                TokenTag::Semicolon if depth == 0 => {
                    self.token_index += 1;
                    return;
                }
                TokenTag::Constructor
                | TokenTag::Fallback
                | TokenTag::Receive
                | TokenTag::Function
                | TokenTag::Modifier
                | TokenTag::Event
                | TokenTag::Error
                | TokenTag::Struct
                | TokenTag::Enum
                | TokenTag::Type
                | TokenTag::Using
                | TokenTag::Public
                | TokenTag::Private
                | TokenTag::Internal
                | TokenTag::External
                | TokenTag::Constant
                | TokenTag::Immutable
                    if depth == 0 =>
                {
                    return
                }
                _ => {}
            }
            self.token_index += 1;
        }
    }

    /// Scan forward to a token that plausibly begins the next statement.
    pub(crate) fn find_next_statement(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.current() {
                TokenTag::Eof => return,
                TokenTag::OpenBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth += 1;
                }
                TokenTag::OpenBracket | TokenTag::OpenParen => depth += 1,
                TokenTag::CloseBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                TokenTag::CloseBracket | TokenTag::CloseParen => depth = depth.saturating_sub(1),
                // A comma at statement depth is taken as a boundary as well.
                TokenTag::Semicolon | TokenTag::Comma if depth == 0 => {
                    self.token_index += 1;
                    return;
                }
                TokenTag::If
                | TokenTag::For
                | TokenTag::While
                | TokenTag::Do
                | TokenTag::Try
                | TokenTag::Emit
                | TokenTag::Return
                | TokenTag::Break
                | TokenTag::Continue
                | TokenTag::Unchecked
                | TokenTag::Assembly
                    if depth == 0 =>
                {
                    return
                }
                _ => {}
            }
            self.token_index += 1;
        }
    }

    // ---- entry ----

    /// Parse the whole source: reserve the root slot, loop over source units
    /// until EOF or a stray closing brace, and patch the top level range back
    /// into the root node.
    pub(crate) fn parse_source(&mut self) {
        let root = self.reserve_node(NodeTag::Root);
        debug_assert_eq!(root, NULL_NODE);
        let top = self.scratch.len();
        loop {
            let doc = self.eat_doc_comments();
            match self.current() {
                TokenTag::Eof => {
                    if let Some(doc_token) = doc {
                        self.warn_at(doc_token, ErrorTag::UnattachedDocComment);
                    }
                    break;
                }
                TokenTag::CloseBrace => {
                    if let Some(doc_token) = doc {
                        self.warn_at(doc_token, ErrorTag::UnattachedDocComment);
                    }
                    self.warn(ErrorTag::ExpectedSourceUnitExpr);
                    break;
                }
                _ => {}
            }
            self.log.log_enter(
                "source unit",
                self.code,
                self.token_start(self.token_index) as usize,
            );
            let unit = self.recover(|p| p.parse_source_unit(), Self::find_next_source);
            if unit != NULL_NODE {
                self.scratch.push(unit);
            }
        }
        let (start, end) = self.scratch_to_span(top);
        self.set_node(root, Node::new(NodeTag::Root, 0, start, end));
    }
}
