//! Type expression grammar: elementary types, identifier paths, mappings,
//! function types and array suffixes, plus the shared `T [qualifier] [name]`
//! declaration form used by parameters, struct fields and local variables.

use super::source::ParamContext;
use super::{Parser, ParserResult};
use crate::error::ErrorTag;
use crate::node::{
    FnTypeProto, FnTypeProtoOne, Mapping, Node, NodeIndex, NodeTag, NULL_NODE,
};
use crate::token::TokenTag;

impl<'a, 'src> Parser<'a, 'src> {
    pub(crate) fn parse_type_expr(&mut self) -> ParserResult {
        let mut node = match self.current() {
            tag if tag.is_elementary_type() => self.parse_elementary_type(),
            TokenTag::Mapping => self.parse_mapping_type()?,
            TokenTag::Function => self.parse_function_type()?,
            TokenTag::Identifier => self.parse_identifier_path()?,
            _ => return Err(self.fail(ErrorTag::ExpectedTypeExpr)),
        };
        while self.current() == TokenTag::OpenBracket {
            let l_bracket = self.next_token();
            let size = if self.current() == TokenTag::CloseBracket {
                NULL_NODE
            } else {
                self.parse_expr()?
            };
            self.expect_token(TokenTag::CloseBracket)?;
            node = self.add_node(Node::new(NodeTag::ArrayType, l_bracket, node, size));
        }
        Ok(node)
    }

    /// The current token is an elementary type keyword. `address payable`
    /// folds the trailing keyword into the same node.
    pub(crate) fn parse_elementary_type(&mut self) -> NodeIndex {
        let token = self.next_token();
        if self.token_tag(token) == TokenTag::Address {
            let _ = self.eat(TokenTag::Payable);
        }
        self.add_node(Node::new(NodeTag::ElementaryType, token, 0, 0))
    }

    /// `mapping(K [name] => V [name])`; the value side may itself be a
    /// mapping or carry array suffixes.
    pub(crate) fn parse_mapping_type(&mut self) -> ParserResult {
        let keyword = self.next_token();
        self.expect_token(TokenTag::OpenParen)?;
        let key = match self.current() {
            tag if tag.is_elementary_type() => self.parse_elementary_type(),
            TokenTag::Identifier => self.parse_identifier_path()?,
            _ => return Err(self.fail(ErrorTag::ExpectedElementaryOrIdentifierPath)),
        };
        let key_identifier = self.eat(TokenTag::Identifier).unwrap_or(0);
        self.expect_token(TokenTag::FatArrow)?;
        let value = self.parse_type_expr()?;
        let value_identifier = self.eat(TokenTag::Identifier).unwrap_or(0);
        self.expect_token(TokenTag::CloseParen)?;
        let record = self.add_extra(Mapping {
            key,
            key_identifier,
            value_identifier,
        });
        Ok(self.add_node(Node::new(NodeTag::MappingDecl, keyword, record, value)))
    }

    /// `function (params) [visibility] [mutability] [returns (params)]`
    /// without an identifier; picks one of the four function type tags.
    pub(crate) fn parse_function_type(&mut self) -> ParserResult {
        let keyword = self.next_token();
        self.expect_token(TokenTag::OpenParen)?;
        let top = self.scratch.len();
        self.parse_param_list(ParamContext::Function)?;
        let param_count = self.scratch.len() - top;
        let mut single_param = NULL_NODE;
        let mut param_span = (0u32, 0u32);
        if param_count == 1 {
            single_param = self.scratch.pop().unwrap();
        } else if param_count > 1 {
            param_span = self.scratch_to_span(top);
        }

        // Only visibility and mutability keywords apply to a function type.
        let specifier_top = self.scratch.len();
        let first_token = self.token_index;
        loop {
            let tag = self.current();
            if tag.is_visibility() || tag.is_mutability() {
                let token = self.next_token();
                let node = self.add_node(Node::new(NodeTag::Specifier, token, 0, 0));
                self.scratch.push(node);
            } else {
                break;
            }
        }
        let specifiers = if self.scratch.len() == specifier_top {
            NULL_NODE
        } else {
            let (start, end) = self.scratch_to_span(specifier_top);
            self.add_node(Node::new(NodeTag::Specifiers, first_token, start, end))
        };

        let returns_span = if self.eat(TokenTag::Returns).is_some() {
            self.expect_token(TokenTag::OpenParen)?;
            let returns_top = self.scratch.len();
            self.parse_param_list(ParamContext::Returns)?;
            if self.scratch.len() == returns_top {
                return Err(self.fail(ErrorTag::ExpectedReturnType));
            }
            Some(self.scratch_to_span(returns_top))
        } else {
            None
        };

        let node = match (param_count <= 1, returns_span) {
            (true, None) => {
                let record = self.add_extra(FnTypeProtoOne {
                    param: single_param,
                    specifiers,
                });
                Node::new(NodeTag::FunctionTypeSimple, keyword, record, 0)
            }
            (false, None) => {
                let record = self.add_extra(FnTypeProto {
                    specifiers,
                    params_start: param_span.0,
                    params_end: param_span.1,
                });
                Node::new(NodeTag::FunctionTypeMulti, keyword, record, 0)
            }
            (true, Some((start, end))) => {
                let record = self.add_extra(FnTypeProtoOne {
                    param: single_param,
                    specifiers,
                });
                let returns = self.add_range(start, end);
                Node::new(NodeTag::FunctionTypeOne, keyword, record, returns)
            }
            (false, Some((start, end))) => {
                let record = self.add_extra(FnTypeProto {
                    specifiers,
                    params_start: param_span.0,
                    params_end: param_span.1,
                });
                let returns = self.add_range(start, end);
                Node::new(NodeTag::FunctionType, keyword, record, returns)
            }
        };
        Ok(self.add_node(node))
    }

    /// `a.b.c` as a left leaning chain of field accesses over identifiers.
    pub(crate) fn parse_identifier_path(&mut self) -> ParserResult {
        let first = self.expect_token(TokenTag::Identifier)?;
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

    /// `T [qualifier] [name]`; degenerates to the bare type node when neither
    /// a qualifier nor a name follows.
    pub(crate) fn parse_variable_decl(&mut self, allow_indexed: bool) -> ParserResult {
        let first_token = self.token_index;
        let type_node = self.parse_type_expr()?;
        let qualifier = match self.current() {
            tag if tag.is_storage_location() => Some(self.next_token()),
            TokenTag::Indexed if allow_indexed => Some(self.next_token()),
            _ => None,
        };
        let name = self.eat(TokenTag::Identifier);
        if qualifier.is_none() && name.is_none() {
            return Ok(type_node);
        }
        let main = qualifier.unwrap_or(first_token);
        Ok(self.add_node(Node::new(
            NodeTag::VariableDecl,
            main,
            type_node,
            name.unwrap_or(0),
        )))
    }
}
