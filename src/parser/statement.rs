//! Statement grammar: blocks with their arity specialized encoding and the
//! keyword dispatched statement forms.

use super::source::ParamContext;
use super::{Parser, ParserResult};
use crate::error::ErrorTag;
use crate::node::{CatchProto, For, If, Node, NodeTag, Try, NULL_NODE};
use crate::token::TokenTag;

impl<'a, 'src> Parser<'a, 'src> {
    /// `{ statements }` with the two slot / extra range encoding and the
    /// trailing semicolon marker.
    pub(crate) fn parse_block(&mut self) -> ParserResult {
        let l_brace = self.expect_token(TokenTag::OpenBrace)?;
        let top = self.scratch.len();
        loop {
            self.eat_doc_comments();
            match self.current() {
                TokenTag::CloseBrace => break,
                TokenTag::Eof => {
                    self.warn(ErrorTag::ExpectedCloseBrace);
                    break;
                }
                _ => {}
            }
            let statement = self.recover(|p| p.parse_statement(), Self::find_next_statement);
            if statement != NULL_NODE {
                self.scratch.push(statement);
            }
        }
        let r_brace = self.next_token();
        let trailing_semicolon =
            r_brace > 0 && self.token_tag(r_brace - 1) == TokenTag::Semicolon;

        let count = self.scratch.len() - top;
        let node = if count <= 2 {
            let lhs = self.scratch.get(top).copied().unwrap_or(NULL_NODE);
            let rhs = self.scratch.get(top + 1).copied().unwrap_or(NULL_NODE);
            self.scratch.truncate(top);
            let tag = if trailing_semicolon && count > 0 {
                NodeTag::BlockTwoSemicolon
            } else {
                NodeTag::BlockTwo
            };
            Node::new(tag, l_brace, lhs, rhs)
        } else {
            let (start, end) = self.scratch_to_span(top);
            let tag = if trailing_semicolon {
                NodeTag::BlockSemicolon
            } else {
                NodeTag::Block
            };
            Node::new(tag, l_brace, start, end)
        };
        Ok(self.add_node(node))
    }

    pub(crate) fn parse_statement(&mut self) -> ParserResult {
        match self.current() {
            TokenTag::If => self.parse_if_statement(),
            TokenTag::For => self.parse_for_statement(),
            TokenTag::While => self.parse_while_statement(),
            TokenTag::Do => self.parse_do_while_statement(),
            TokenTag::Try => self.parse_try_statement(),
            TokenTag::Emit => self.parse_emit_statement(),
            TokenTag::Return => self.parse_return_statement(),
            TokenTag::Break => {
                let keyword = self.next_token();
                self.expect_semicolon();
                Ok(self.add_node(Node::new(NodeTag::Break, keyword, 0, 0)))
            }
            TokenTag::Continue => {
                let keyword = self.next_token();
                self.expect_semicolon();
                Ok(self.add_node(Node::new(NodeTag::Continue, keyword, 0, 0)))
            }
            TokenTag::Unchecked => {
                let keyword = self.next_token();
                let block = self.parse_block()?;
                Ok(self.add_node(Node::new(NodeTag::Unchecked, keyword, block, 0)))
            }
            TokenTag::Assembly => self.parse_assembly(),
            TokenTag::OpenBrace => self.parse_block(),
            TokenTag::Semicolon
            | TokenTag::Comma
            | TokenTag::Colon
            | TokenTag::CloseParen
            | TokenTag::CloseBracket => Err(self.fail(ErrorTag::ExpectedStatement)),
            _ => {
                let expression = self.parse_assign_expr()?;
                self.expect_semicolon();
                Ok(expression)
            }
        }
    }

    fn parse_paren_expr(&mut self) -> ParserResult {
        self.expect_token(TokenTag::OpenParen)?;
        let expression = self.parse_expr()?;
        self.expect_token(TokenTag::CloseParen)?;
        Ok(expression)
    }

    fn parse_if_statement(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let condition = self.parse_paren_expr()?;
        let then_statement = self.parse_statement()?;
        if self.eat(TokenTag::Else).is_some() {
            let else_statement = self.parse_statement()?;
            let record = self.add_extra(If {
                then_expression: then_statement,
                else_expression: else_statement,
            });
            Ok(self.add_node(Node::new(NodeTag::If, keyword, condition, record)))
        } else {
            Ok(self.add_node(Node::new(
                NodeTag::IfSimple,
                keyword,
                condition,
                then_statement,
            )))
        }
    }

    fn parse_for_statement(&mut self) -> ParserResult {
        let keyword = self.next_token();
        self.expect_token(TokenTag::OpenParen)?;
        let condition_one = if self.current() == TokenTag::Semicolon {
            NULL_NODE
        } else {
            self.parse_assign_expr()?
        };
        self.expect_token(TokenTag::Semicolon)?;
        let condition_two = if self.current() == TokenTag::Semicolon {
            NULL_NODE
        } else {
            self.parse_expr()?
        };
        self.expect_token(TokenTag::Semicolon)?;
        let condition_three = if self.current() == TokenTag::CloseParen {
            NULL_NODE
        } else {
            self.parse_assign_expr()?
        };
        self.expect_token(TokenTag::CloseParen)?;
        let body = self.parse_statement()?;
        let record = self.add_extra(For {
            condition_one,
            condition_two,
            condition_three,
        });
        Ok(self.add_node(Node::new(NodeTag::For, keyword, record, body)))
    }

    fn parse_while_statement(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let condition = self.parse_paren_expr()?;
        let body = self.parse_statement()?;
        Ok(self.add_node(Node::new(NodeTag::While, keyword, condition, body)))
    }

    fn parse_do_while_statement(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let body = self.parse_statement()?;
        self.expect_token(TokenTag::While)?;
        let condition = self.parse_paren_expr()?;
        self.expect_semicolon();
        Ok(self.add_node(Node::new(NodeTag::DoWhile, keyword, body, condition)))
    }

    fn parse_try_statement(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let expression = self.parse_expr()?;
        let returns = if self.eat(TokenTag::Returns).is_some() {
            self.expect_token(TokenTag::OpenParen)?;
            let top = self.scratch.len();
            self.parse_param_list(ParamContext::Returns)?;
            if self.scratch.len() == top {
                return Err(self.fail(ErrorTag::ExpectedReturnType));
            }
            let (start, end) = self.scratch_to_span(top);
            self.add_range(start, end)
        } else {
            0
        };
        let block_statement = self.parse_block()?;
        if self.current() != TokenTag::Catch {
            return Err(self.fail_expected(TokenTag::Catch));
        }
        let top = self.scratch.len();
        while self.current() == TokenTag::Catch {
            let clause = self.parse_catch_clause()?;
            self.scratch.push(clause);
        }
        let (start, end) = self.scratch_to_span(top);
        let catches = self.add_range(start, end);
        let record = self.add_extra(Try {
            returns,
            expression,
            block_statement,
        });
        Ok(self.add_node(Node::new(NodeTag::Try, keyword, record, catches)))
    }

    fn parse_catch_clause(&mut self) -> ParserResult {
        let keyword = self.next_token();
        if self.current() == TokenTag::OpenBrace {
            let block = self.parse_block()?;
            return Ok(self.add_node(Node::new(NodeTag::CatchSimple, keyword, 0, block)));
        }
        let identifier = self.eat(TokenTag::Identifier).unwrap_or(0);
        self.expect_token(TokenTag::OpenParen)?;
        let top = self.scratch.len();
        self.parse_param_list(ParamContext::Function)?;
        let (params_start, params_end) = self.scratch_to_span(top);
        let block = self.parse_block()?;
        let record = self.add_extra(CatchProto {
            identifier,
            params_start,
            params_end,
        });
        Ok(self.add_node(Node::new(NodeTag::Catch, keyword, record, block)))
    }

    fn parse_emit_statement(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let expression = self.parse_expr()?;
        if !matches!(
            self.nodes[expression as usize].tag,
            NodeTag::CallOne | NodeTag::Call
        ) {
            return Err(self.fail(ErrorTag::ExpectedFunctionCall));
        }
        self.expect_semicolon();
        Ok(self.add_node(Node::new(NodeTag::Emit, keyword, expression, 0)))
    }

    fn parse_return_statement(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let expression = if self.current() == TokenTag::Semicolon {
            NULL_NODE
        } else {
            self.parse_expr()?
        };
        self.expect_semicolon();
        Ok(self.add_node(Node::new(NodeTag::Return, keyword, expression, 0)))
    }
}
