//! Expression grammar: a Pratt style precedence climber over a sparse
//! operator table, prefix and suffix loops, and the primary forms.

use super::{Parser, ParserResult};
use crate::error::ErrorTag;
use crate::node::{If, Node, NodeIndex, NodeTag, NULL_NODE};
use crate::token::TokenTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
    Right,
    None,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct OperInfo {
    pub(crate) precedence: i8,
    pub(crate) tag: NodeTag,
    pub(crate) assoc: Assoc,
}

/// The binary operator table. Tokens without an entry terminate the climb.
/// `**` is the single right associative entry of its level; the comparison
/// level is non associative and chaining it is diagnosed.
pub(crate) fn oper_info(tag: TokenTag) -> Option<OperInfo> {
    let (precedence, node_tag, assoc) = match tag {
        TokenTag::PipePipe => (10, NodeTag::Or, Assoc::Left),
        TokenTag::AmpersandAmpersand => (20, NodeTag::And, Assoc::Left),
        TokenTag::EqualEqual => (30, NodeTag::EqualEqual, Assoc::None),
        TokenTag::BangEqual => (30, NodeTag::BangEqual, Assoc::None),
        TokenTag::LessThan => (30, NodeTag::LessThan, Assoc::None),
        TokenTag::GreaterThan => (30, NodeTag::GreaterThan, Assoc::None),
        TokenTag::LessThanEqual => (30, NodeTag::LessThanEqual, Assoc::None),
        TokenTag::GreaterThanEqual => (30, NodeTag::GreaterThanEqual, Assoc::None),
        TokenTag::Ampersand => (40, NodeTag::BitAnd, Assoc::Left),
        TokenTag::Caret => (40, NodeTag::BitXor, Assoc::Left),
        TokenTag::Pipe => (40, NodeTag::BitOr, Assoc::Left),
        TokenTag::Shl => (50, NodeTag::Shl, Assoc::Left),
        TokenTag::Sar => (50, NodeTag::Sar, Assoc::Left),
        TokenTag::Shr => (50, NodeTag::Shr, Assoc::Left),
        TokenTag::Plus => (60, NodeTag::Add, Assoc::Left),
        TokenTag::Minus => (60, NodeTag::Sub, Assoc::Left),
        TokenTag::Asterisk => (70, NodeTag::Mul, Assoc::Left),
        TokenTag::Slash => (70, NodeTag::Div, Assoc::Left),
        TokenTag::Percent => (70, NodeTag::Mod, Assoc::Left),
        TokenTag::AsteriskAsterisk => (70, NodeTag::Exponent, Assoc::Right),
        _ => return None,
    };
    Some(OperInfo {
        precedence,
        tag: node_tag,
        assoc,
    })
}

impl<'a, 'src> Parser<'a, 'src> {
    /// A full expression: the precedence climb plus the trailing ternary.
    pub(crate) fn parse_expr(&mut self) -> ParserResult {
        let condition = self.parse_expr_precedence(0)?;
        if self.current() != TokenTag::QuestionMark {
            return Ok(condition);
        }
        let question = self.next_token();
        let then_expression = self.parse_expr()?;
        self.expect_token(TokenTag::Colon)?;
        let else_expression = self.parse_expr()?;
        let record = self.add_extra(If {
            then_expression,
            else_expression,
        });
        Ok(self.add_node(Node::new(NodeTag::Conditional, question, condition, record)))
    }

    /// An expression or an assignment; assignments nest to the right.
    pub(crate) fn parse_assign_expr(&mut self) -> ParserResult {
        let target = self.parse_expr()?;
        let tag = match self.current() {
            TokenTag::Equal => NodeTag::Assign,
            TokenTag::PlusEqual => NodeTag::AssignAdd,
            TokenTag::MinusEqual => NodeTag::AssignSub,
            TokenTag::AsteriskEqual => NodeTag::AssignMul,
            TokenTag::SlashEqual => NodeTag::AssignDiv,
            TokenTag::PercentEqual => NodeTag::AssignMod,
            TokenTag::AmpersandEqual => NodeTag::AssignBitAnd,
            TokenTag::PipeEqual => NodeTag::AssignBitOr,
            TokenTag::CaretEqual => NodeTag::AssignBitXor,
            TokenTag::ShlEqual => NodeTag::AssignShl,
            TokenTag::SarEqual => NodeTag::AssignSar,
            TokenTag::ShrEqual => NodeTag::AssignShr,
            _ => return Ok(target),
        };
        let operator = self.next_token();
        let value = self.parse_assign_expr()?;
        Ok(self.add_node(Node::new(tag, operator, target, value)))
    }

    fn parse_expr_precedence(&mut self, min_precedence: i8) -> ParserResult {
        let mut node = self.parse_prefix_expr()?;
        let mut banned_precedence: i8 = -1;
        loop {
            let info = match oper_info(self.current()) {
                Some(info) => info,
                None => break,
            };
            if info.precedence < min_precedence {
                break;
            }
            if info.precedence == banned_precedence {
                // Non associative level used twice; report and build anyway
                // so a tree still comes out.
                self.warn(ErrorTag::ChainedComparisonOperators);
            }
            let operator = self.next_token();
            let next_min = if info.assoc == Assoc::Right {
                info.precedence
            } else {
                info.precedence + 1
            };
            let rhs = self.parse_expr_precedence(next_min)?;
            node = self.add_node(Node::new(info.tag, operator, node, rhs));
            banned_precedence = if info.assoc == Assoc::None {
                info.precedence
            } else {
                -1
            };
        }
        Ok(node)
    }

    fn parse_prefix_expr(&mut self) -> ParserResult {
        let tag = match self.current() {
            TokenTag::Bang => NodeTag::BoolNot,
            TokenTag::Tilde => NodeTag::BitNot,
            TokenTag::Minus => NodeTag::Negation,
            TokenTag::PlusPlus => NodeTag::PreIncrement,
            TokenTag::MinusMinus => NodeTag::PreDecrement,
            TokenTag::Delete => NodeTag::Delete,
            _ => return self.parse_suffix_expr(),
        };
        let operator = self.next_token();
        let operand = self.parse_prefix_expr()?;
        Ok(self.add_node(Node::new(tag, operator, operand, 0)))
    }

    fn parse_suffix_expr(&mut self) -> ParserResult {
        let mut node = self.parse_primary_expr()?;
        loop {
            match self.current() {
                TokenTag::OpenBracket => {
                    let l_bracket = self.next_token();
                    let index = if self.current() == TokenTag::CloseBracket {
                        NULL_NODE
                    } else {
                        self.parse_expr()?
                    };
                    self.expect_token(TokenTag::CloseBracket)?;
                    node = self.add_node(Node::new(NodeTag::ArrayAccess, l_bracket, node, index));
                }
                TokenTag::Period => {
                    let period = self.next_token();
                    let member = match self.eat(TokenTag::Identifier) {
                        Some(token) => token,
                        None => return Err(self.fail(ErrorTag::ExpectedSuffix)),
                    };
                    node = self.add_node(Node::new(NodeTag::FieldAccess, period, node, member));
                }
                TokenTag::PlusPlus => {
                    let operator = self.next_token();
                    node = self.add_node(Node::new(NodeTag::PostIncrement, operator, node, 0));
                }
                TokenTag::MinusMinus => {
                    let operator = self.next_token();
                    node = self.add_node(Node::new(NodeTag::PostDecrement, operator, node, 0));
                }
                TokenTag::OpenParen => {
                    node = self.parse_call_args(node)?;
                }
                TokenTag::OpenBrace => {
                    // Only a struct initializer suffix; `{` followed by
                    // anything else belongs to the surrounding statement.
                    let looks_like_fields = self.peek() == TokenTag::CloseBrace
                        || (self.peek() == TokenTag::Identifier
                            && self.token_tag(self.token_index + 2) == TokenTag::Colon);
                    if !looks_like_fields {
                        break;
                    }
                    node = self.parse_struct_init(node)?;
                }
                _ => break,
            }
        }
        Ok(node)
    }

    /// Call argument list; the callee has been parsed and the current token
    /// is the opening parenthesis.
    pub(crate) fn parse_call_args(&mut self, callee: NodeIndex) -> ParserResult {
        let l_paren = self.next_token();
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::CloseParen => break,
                TokenTag::Eof => return Err(self.fail_expected(TokenTag::CloseParen)),
                _ => {}
            }
            let argument = if self.current() == TokenTag::OpenBrace {
                // Struct initializer arguments stand in for expressions.
                self.parse_struct_init(NULL_NODE)?
            } else {
                self.parse_expr()?
            };
            self.scratch.push(argument);
            match self.current() {
                TokenTag::Comma => {
                    let comma = self.next_token();
                    if self.current() == TokenTag::CloseParen {
                        self.warn_at(comma, ErrorTag::TrailingComma);
                    }
                }
                TokenTag::CloseParen => {}
                _ => self.warn(ErrorTag::ExpectedCommaAfter),
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
            Ok(self.add_node(Node::new(NodeTag::CallOne, l_paren, callee, argument)))
        } else {
            let (start, end) = self.scratch_to_span(top);
            let range = self.add_range(start, end);
            Ok(self.add_node(Node::new(NodeTag::Call, l_paren, callee, range)))
        }
    }

    /// `{ name: value, … }` — call options, named call arguments and struct
    /// initializer suffixes all share this form.
    fn parse_struct_init(&mut self, target: NodeIndex) -> ParserResult {
        let l_brace = self.next_token();
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::CloseBrace => break,
                TokenTag::Eof => return Err(self.fail_expected(TokenTag::CloseBrace)),
                _ => {}
            }
            let name = self.expect_token(TokenTag::Identifier)?;
            self.expect_token(TokenTag::Colon)?;
            let value = self.parse_expr()?;
            let field = self.add_node(Node::new(NodeTag::StructInitField, name, 0, value));
            self.scratch.push(field);
            match self.current() {
                TokenTag::Comma => {
                    let comma = self.next_token();
                    if self.current() == TokenTag::CloseBrace {
                        self.warn_at(comma, ErrorTag::TrailingComma);
                    }
                }
                TokenTag::CloseBrace => {}
                _ => self.warn(ErrorTag::ExpectedCommaAfter),
            }
        }
        self.next_token();
        let count = self.scratch.len() - top;
        if count <= 1 {
            let field = if count == 1 {
                self.scratch.pop().unwrap()
            } else {
                NULL_NODE
            };
            Ok(self.add_node(Node::new(NodeTag::StructInitOne, l_brace, target, field)))
        } else {
            let (start, end) = self.scratch_to_span(top);
            let range = self.add_range(start, end);
            Ok(self.add_node(Node::new(NodeTag::StructInit, l_brace, target, range)))
        }
    }

    fn parse_primary_expr(&mut self) -> ParserResult {
        match self.current() {
            TokenTag::New => {
                let keyword = self.next_token();
                let type_node = self.parse_type_expr()?;
                Ok(self.add_node(Node::new(NodeTag::New, keyword, type_node, 0)))
            }
            TokenTag::Type => {
                let keyword = self.next_token();
                self.expect_token(TokenTag::OpenParen)?;
                let type_node = self.parse_type_expr()?;
                self.expect_token(TokenTag::CloseParen)?;
                Ok(self.add_node(Node::new(NodeTag::MetaType, keyword, type_node, 0)))
            }
            TokenTag::Payable if self.peek() == TokenTag::OpenParen => {
                let keyword = self.next_token();
                self.next_token();
                let expression = self.parse_expr()?;
                self.expect_token(TokenTag::CloseParen)?;
                Ok(self.add_node(Node::new(
                    NodeTag::PayableConversion,
                    keyword,
                    expression,
                    0,
                )))
            }
            TokenTag::NumberLiteral => {
                let literal = self.next_token();
                if self.current().is_unit_suffix() {
                    let unit = self.next_token();
                    Ok(self.add_node(Node::new(
                        NodeTag::NumberLiteralSubDenomination,
                        literal,
                        unit,
                        0,
                    )))
                } else {
                    Ok(self.add_node(Node::new(NodeTag::NumberLiteral, literal, 0, 0)))
                }
            }
            TokenTag::StringLiteral => {
                let literal = self.next_token();
                Ok(self.add_node(Node::new(NodeTag::StringLiteral, literal, 0, 0)))
            }
            TokenTag::OpenParen => self.parse_tuple_init(),
            TokenTag::OpenBracket => self.parse_array_init(),
            tag if tag.is_elementary_type() => self.parse_variable_decl_expr(),
            TokenTag::Mapping | TokenTag::Function | TokenTag::Identifier => {
                self.parse_variable_decl_expr()
            }
            _ => Err(self.fail(ErrorTag::ExpectedPrefixExpr)),
        }
    }

    /// The fallthrough primary: a variable declaration that may degenerate to
    /// a bare identifier path or type expression. A bracket suffix after an
    /// identifier path could be an index or an array type; the nodes are
    /// built as accesses and retagged once a declaration turns out to follow.
    fn parse_variable_decl_expr(&mut self) -> ParserResult {
        let first_token = self.token_index;
        let path_base = self.current() == TokenTag::Identifier;
        let mut node = match self.current() {
            tag if tag.is_elementary_type() => self.parse_elementary_type(),
            TokenTag::Mapping => self.parse_mapping_type()?,
            TokenTag::Function => self.parse_function_type()?,
            _ => self.parse_identifier_path()?,
        };
        let mut brackets: Vec<NodeIndex> = Vec::new();
        while self.current() == TokenTag::OpenBracket {
            let l_bracket = self.next_token();
            let size = if self.current() == TokenTag::CloseBracket {
                NULL_NODE
            } else {
                self.parse_expr()?
            };
            self.expect_token(TokenTag::CloseBracket)?;
            let tag = if path_base {
                NodeTag::ArrayAccess
            } else {
                NodeTag::ArrayType
            };
            node = self.add_node(Node::new(tag, l_bracket, node, size));
            if path_base {
                brackets.push(node);
            }
        }
        let qualifier = match self.current() {
            tag if tag.is_storage_location() => Some(self.next_token()),
            _ => None,
        };
        let name = self.eat(TokenTag::Identifier);
        if qualifier.is_none() && name.is_none() {
            return Ok(node);
        }
        for bracket in brackets {
            self.nodes[bracket as usize].tag = NodeTag::ArrayType;
        }
        let main = qualifier.unwrap_or(first_token);
        Ok(self.add_node(Node::new(
            NodeTag::VariableDecl,
            main,
            node,
            name.unwrap_or(0),
        )))
    }

    /// Parenthesized tuple; empty slots between commas stay as null entries
    /// for destructuring assignments.
    fn parse_tuple_init(&mut self) -> ParserResult {
        let l_paren = self.next_token();
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::CloseParen => break,
                TokenTag::Eof => return Err(self.fail_expected(TokenTag::CloseParen)),
                TokenTag::Comma => {
                    self.next_token();
                    self.scratch.push(NULL_NODE);
                    if self.current() == TokenTag::CloseParen {
                        break;
                    }
                    continue;
                }
                _ => {}
            }
            let item = self.parse_expr()?;
            self.scratch.push(item);
            match self.current() {
                TokenTag::Comma => {
                    self.next_token();
                    if self.current() == TokenTag::CloseParen {
                        self.scratch.push(NULL_NODE);
                        break;
                    }
                }
                TokenTag::CloseParen => {}
                _ => self.warn(ErrorTag::ExpectedCommaAfter),
            }
        }
        self.expect_token(TokenTag::CloseParen)?;
        let count = self.scratch.len() - top;
        if count <= 1 {
            let item = if count == 1 {
                self.scratch.pop().unwrap()
            } else {
                NULL_NODE
            };
            Ok(self.add_node(Node::new(NodeTag::TupleInitOne, l_paren, item, 0)))
        } else {
            let (start, end) = self.scratch_to_span(top);
            Ok(self.add_node(Node::new(NodeTag::TupleInit, l_paren, start, end)))
        }
    }

    fn parse_array_init(&mut self) -> ParserResult {
        let l_bracket = self.next_token();
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::CloseBracket => break,
                TokenTag::Eof => return Err(self.fail_expected(TokenTag::CloseBracket)),
                _ => {}
            }
            let item = self.parse_expr()?;
            self.scratch.push(item);
            match self.current() {
                TokenTag::Comma => {
                    let comma = self.next_token();
                    if self.current() == TokenTag::CloseBracket {
                        self.warn_at(comma, ErrorTag::TrailingComma);
                    }
                }
                TokenTag::CloseBracket => {}
                _ => self.warn(ErrorTag::ExpectedCommaAfter),
            }
        }
        self.next_token();
        let count = self.scratch.len() - top;
        if count <= 1 {
            let item = if count == 1 {
                self.scratch.pop().unwrap()
            } else {
                NULL_NODE
            };
            Ok(self.add_node(Node::new(NodeTag::ArrayInitOne, l_bracket, item, 0)))
        } else {
            let (start, end) = self.scratch_to_span(top);
            Ok(self.add_node(Node::new(NodeTag::ArrayInit, l_bracket, start, end)))
        }
    }
}
