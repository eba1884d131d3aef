//! Inline assembly: the `assembly` wrapper with its optional flags and the
//! Yul statement and expression grammar inside the block.
//!
//! A handful of Solidity keywords double as Yul builtins (`return`, `address`,
//! `byte`); they are accepted wherever a Yul identifier may appear.

use super::{Parser, ParserResult};
use crate::error::ErrorTag;
use crate::node::{For, Node, NodeIndex, NodeTag, YulFnProto, YulFullFnProto, NULL_NODE};
use crate::token::TokenTag;

fn is_yul_identifier(tag: TokenTag) -> bool {
    matches!(
        tag,
        TokenTag::Identifier | TokenTag::Return | TokenTag::Address | TokenTag::Byte
    )
}

impl<'a, 'src> Parser<'a, 'src> {
    /// `assembly [("flags", …)] { … }`.
    pub(crate) fn parse_assembly(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let flags = if self.current() == TokenTag::OpenParen {
            let l_paren = self.next_token();
            let top = self.scratch.len();
            loop {
                if self.current() == TokenTag::CloseParen {
                    break;
                }
                let flag = self.expect_token(TokenTag::StringLiteral)?;
                self.scratch.push(flag);
                match self.current() {
                    TokenTag::Comma => {
                        let comma = self.next_token();
                        if self.current() == TokenTag::CloseParen {
                            self.warn_at(comma, ErrorTag::TrailingComma);
                        }
                    }
                    TokenTag::CloseParen => {}
                    _ => return Err(self.fail_expected(TokenTag::CloseParen)),
                }
            }
            self.next_token();
            let (start, end) = self.scratch_to_span(top);
            self.add_node(Node::new(NodeTag::AssemblyFlags, l_paren, start, end))
        } else {
            NULL_NODE
        };
        let block = self.parse_yul_block()?;
        Ok(self.add_node(Node::new(NodeTag::AssemblyDecl, keyword, flags, block)))
    }

    pub(crate) fn parse_yul_block(&mut self) -> ParserResult {
        let l_brace = self.expect_token(TokenTag::OpenBrace)?;
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::CloseBrace => break,
                TokenTag::Eof => {
                    self.warn(ErrorTag::ExpectedCloseBrace);
                    break;
                }
                _ => {}
            }
            let statement = self.recover(|p| p.parse_yul_statement(), Self::find_next_statement);
            if statement != NULL_NODE {
                self.scratch.push(statement);
            }
        }
        self.next_token();
        let count = self.scratch.len() - top;
        let node = if count <= 2 {
            let lhs = self.scratch.get(top).copied().unwrap_or(NULL_NODE);
            let rhs = self.scratch.get(top + 1).copied().unwrap_or(NULL_NODE);
            self.scratch.truncate(top);
            Node::new(NodeTag::AsmBlockTwo, l_brace, lhs, rhs)
        } else {
            let (start, end) = self.scratch_to_span(top);
            Node::new(NodeTag::AsmBlock, l_brace, start, end)
        };
        Ok(self.add_node(node))
    }

    pub(crate) fn parse_yul_statement(&mut self) -> ParserResult {
        match self.current() {
            TokenTag::OpenBrace => self.parse_yul_block(),
            TokenTag::If => {
                let keyword = self.next_token();
                let condition = self.parse_yul_expr()?;
                let body = self.parse_yul_block()?;
                Ok(self.add_node(Node::new(NodeTag::YulIf, keyword, condition, body)))
            }
            TokenTag::For => {
                let keyword = self.next_token();
                let init = self.parse_yul_block()?;
                let condition = self.parse_yul_expr()?;
                let post = self.parse_yul_block()?;
                let body = self.parse_yul_block()?;
                let record = self.add_extra(For {
                    condition_one: init,
                    condition_two: condition,
                    condition_three: post,
                });
                Ok(self.add_node(Node::new(NodeTag::YulFor, keyword, record, body)))
            }
            TokenTag::Switch => self.parse_yul_switch(),
            TokenTag::Let => self.parse_yul_var_decl(),
            TokenTag::Leave => {
                let keyword = self.next_token();
                Ok(self.add_node(Node::new(NodeTag::YulLeave, keyword, 0, 0)))
            }
            TokenTag::Break => {
                let keyword = self.next_token();
                Ok(self.add_node(Node::new(NodeTag::Break, keyword, 0, 0)))
            }
            TokenTag::Continue => {
                let keyword = self.next_token();
                Ok(self.add_node(Node::new(NodeTag::Continue, keyword, 0, 0)))
            }
            TokenTag::Function => self.parse_yul_function_decl(),
            tag if is_yul_identifier(tag) => self.parse_yul_assign_or_call(),
            _ => Err(self.fail(ErrorTag::ExpectedYulStatement)),
        }
    }

    /// A statement starting with an identifier path: a call, a single `:=`
    /// assignment, or a multi target assignment `a, b := f(…)`.
    fn parse_yul_assign_or_call(&mut self) -> ParserResult {
        let path = self.parse_yul_path()?;
        match self.current() {
            TokenTag::OpenParen => self.parse_yul_call(path),
            TokenTag::ColonEqual => {
                let operator = self.next_token();
                let value = self.parse_yul_expr()?;
                Ok(self.add_node(Node::new(NodeTag::YulAssign, operator, path, value)))
            }
            TokenTag::Comma => {
                let top = self.scratch.len();
                self.scratch.push(path);
                while self.eat(TokenTag::Comma).is_some() {
                    let target = self.parse_yul_path()?;
                    self.scratch.push(target);
                }
                let operator = match self.eat(TokenTag::ColonEqual) {
                    Some(token) => token,
                    None => return Err(self.fail(ErrorTag::ExpectedYulAssignment)),
                };
                let value = self.parse_yul_expr()?;
                if !matches!(
                    self.nodes[value as usize].tag,
                    NodeTag::YulCallOne | NodeTag::YulCall
                ) {
                    return Err(self.fail(ErrorTag::ExpectedYulFunctionCall));
                }
                let (start, end) = self.scratch_to_span(top);
                let targets = self.add_range(start, end);
                Ok(self.add_node(Node::new(NodeTag::YulAssignMulti, operator, targets, value)))
            }
            _ => Err(self.fail(ErrorTag::ExpectedYulAssignment)),
        }
    }

    /// `let a [, b…] [:= value]`.
    fn parse_yul_var_decl(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let first = self.expect_yul_name()?;
        let top = self.scratch.len();
        let multi = self.current() == TokenTag::Comma;
        if multi {
            self.scratch.push(first);
            while self.eat(TokenTag::Comma).is_some() {
                let name = self.expect_yul_name()?;
                self.scratch.push(name);
            }
        }
        let value = if self.eat(TokenTag::ColonEqual).is_some() {
            let value = self.parse_yul_expr()?;
            if multi
                && !matches!(
                    self.nodes[value as usize].tag,
                    NodeTag::YulCallOne | NodeTag::YulCall
                )
            {
                return Err(self.fail(ErrorTag::ExpectedYulFunctionCall));
            }
            value
        } else {
            NULL_NODE
        };
        if multi {
            let (start, end) = self.scratch_to_span(top);
            let names = self.add_range(start, end);
            Ok(self.add_node(Node::new(NodeTag::YulVarDeclMulti, keyword, names, value)))
        } else {
            Ok(self.add_node(Node::new(NodeTag::YulVarDecl, keyword, first, value)))
        }
    }

    fn parse_yul_switch(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let scrutinee = self.parse_yul_expr()?;
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::Case => {
                    let case_keyword = self.next_token();
                    let literal = self.parse_yul_literal()?;
                    let block = self.parse_yul_block()?;
                    let clause = self.add_node(Node::new(
                        NodeTag::YulSwitchCase,
                        case_keyword,
                        literal,
                        block,
                    ));
                    self.scratch.push(clause);
                }
                TokenTag::Default => {
                    let default_keyword = self.next_token();
                    let block = self.parse_yul_block()?;
                    let clause = self.add_node(Node::new(
                        NodeTag::YulSwitchDefault,
                        default_keyword,
                        0,
                        block,
                    ));
                    self.scratch.push(clause);
                }
                _ => break,
            }
        }
        if self.scratch.len() == top {
            return Err(self.fail(ErrorTag::ExpectedYulStatement));
        }
        let (start, end) = self.scratch_to_span(top);
        let cases = self.add_range(start, end);
        Ok(self.add_node(Node::new(NodeTag::YulSwitch, keyword, scrutinee, cases)))
    }

    fn parse_yul_function_decl(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let identifier = self.expect_token(TokenTag::Identifier)?;
        self.expect_token(TokenTag::OpenParen)?;
        let top = self.scratch.len();
        loop {
            if self.current() == TokenTag::CloseParen {
                break;
            }
            let name = self.expect_yul_name()?;
            self.scratch.push(name);
            match self.current() {
                TokenTag::Comma => {
                    let comma = self.next_token();
                    if self.current() == TokenTag::CloseParen {
                        self.warn_at(comma, ErrorTag::TrailingComma);
                    }
                }
                TokenTag::CloseParen => {}
                _ => return Err(self.fail_expected(TokenTag::CloseParen)),
            }
        }
        self.next_token();
        let (params_start, params_end) = self.scratch_to_span(top);

        if self.eat(TokenTag::Arrow).is_some() {
            let returns_top = self.scratch.len();
            loop {
                let name = self.expect_yul_name()?;
                self.scratch.push(name);
                if self.eat(TokenTag::Comma).is_none() {
                    break;
                }
            }
            let (returns_start, returns_end) = self.scratch_to_span(returns_top);
            let body = self.parse_yul_block()?;
            let record = self.add_extra(YulFullFnProto {
                identifier,
                params_start,
                params_end,
                returns_start,
                returns_end,
            });
            Ok(self.add_node(Node::new(
                NodeTag::YulFullFunctionDecl,
                keyword,
                record,
                body,
            )))
        } else {
            let body = self.parse_yul_block()?;
            let record = self.add_extra(YulFnProto {
                identifier,
                params_start,
                params_end,
            });
            Ok(self.add_node(Node::new(NodeTag::YulFunctionDecl, keyword, record, body)))
        }
    }

    fn expect_yul_name(&mut self) -> ParserResult<u32> {
        if self.current() == TokenTag::Identifier {
            Ok(self.next_token())
        } else {
            Err(self.fail_expected(TokenTag::Identifier))
        }
    }

    pub(crate) fn parse_yul_expr(&mut self) -> ParserResult {
        match self.current() {
            tag if is_yul_identifier(tag) => {
                let path = self.parse_yul_path()?;
                if self.current() == TokenTag::OpenParen {
                    self.parse_yul_call(path)
                } else {
                    Ok(path)
                }
            }
            TokenTag::NumberLiteral | TokenTag::StringLiteral => self.parse_yul_literal(),
            _ => Err(self.fail(ErrorTag::ExpectedYulExpression)),
        }
    }

    fn parse_yul_literal(&mut self) -> ParserResult {
        match self.current() {
            TokenTag::NumberLiteral => {
                let literal = self.next_token();
                Ok(self.add_node(Node::new(NodeTag::NumberLiteral, literal, 0, 0)))
            }
            TokenTag::StringLiteral => {
                let literal = self.next_token();
                Ok(self.add_node(Node::new(NodeTag::StringLiteral, literal, 0, 0)))
            }
            _ => Err(self.fail(ErrorTag::ExpectedYulLiteral)),
        }
    }

    /// A Yul identifier, possibly `.`-qualified.
    fn parse_yul_path(&mut self) -> ParserResult {
        if !is_yul_identifier(self.current()) {
            return Err(self.fail(ErrorTag::ExpectedYulExpression));
        }
        let first = self.next_token();
        let mut node = self.add_node(Node::new(NodeTag::Identifier, first, 0, 0));
        while self.current() == TokenTag::Period {
            let period = self.next_token();
            let member = match self.eat(TokenTag::Identifier) {
                Some(token) => token,
                None => return Err(self.fail(ErrorTag::ExpectedSuffix)),
            };
            node = self.add_node(Node::new(NodeTag::FieldAccess, period, node, member));
        }
        Ok(node)
    }

    fn parse_yul_call(&mut self, callee: NodeIndex) -> ParserResult {
        let l_paren = self.next_token();
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::CloseParen => break,
                TokenTag::Eof => return Err(self.fail_expected(TokenTag::CloseParen)),
                _ => {}
            }
            let argument = self.parse_yul_expr()?;
            self.scratch.push(argument);
            match self.current() {
                TokenTag::Comma => {
                    let comma = self.next_token();
                    if self.current() == TokenTag::CloseParen {
                        self.warn_at(comma, ErrorTag::TrailingComma);
                    }
                }
                TokenTag::CloseParen => {}
                _ => return Err(self.fail(ErrorTag::ExpectedYulExpression)),
            }
        }
        self.next_token();
        let count = self.scratch.len() - top;
        if count <= 1 {
            let argument = if count == 1 {
                self.scratch.pop().unwrap()
            } else {
                NULL_NODE
            };
            Ok(self.add_node(Node::new(NodeTag::YulCallOne, l_paren, callee, argument)))
        } else {
            let (start, end) = self.scratch_to_span(top);
            let range = self.add_range(start, end);
            Ok(self.add_node(Node::new(NodeTag::YulCall, l_paren, callee, range)))
        }
    }
}
