//! Source unit and contract level grammar: pragma and import directives,
//! contract/interface/library prototypes, contract body elements, function
//! and modifier prototypes, and the declaration forms shared between them.

use super::{Parser, ParserResult};
use crate::error::ErrorTag;
use crate::node::{
    ContractInheritance, ContractInheritanceOne, EventProto, FnProto, FnProtoOne, ImportSymbol,
    ModifierProto, Node, NodeIndex, NodeTag, StateVarProto, Using, NULL_NODE,
};
use crate::token::{TokenIndex, TokenTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which construct a parameter list belongs to; selects the diagnostic for a
/// malformed parameter.
pub(crate) enum ParamContext {
    Function,
    Returns,
    Event,
    ErrorDecl,
}

impl ParamContext {
    fn error_tag(self) -> ErrorTag {
        match self {
            ParamContext::Function | ParamContext::Returns => ErrorTag::ExpectedVariableDecl,
            ParamContext::Event => ErrorTag::ExpectedEventParam,
            ParamContext::ErrorDecl => ErrorTag::ExpectedErrorParam,
        }
    }
}

impl<'a, 'src> Parser<'a, 'src> {
    /// Dispatch on the keyword starting a top level declaration.
    pub(crate) fn parse_source_unit(&mut self) -> ParserResult {
        match self.current() {
            TokenTag::Import => self.parse_import(),
            TokenTag::Pragma => self.parse_pragma(),
            TokenTag::Abstract | TokenTag::Contract | TokenTag::Interface | TokenTag::Library => {
                self.parse_contract_decl()
            }
            TokenTag::Struct => self.parse_struct_decl(),
            TokenTag::Enum => self.parse_enum_decl(),
            TokenTag::Error => self.parse_error_proto(),
            TokenTag::Event => self.parse_event_proto(),
            TokenTag::Type => self.parse_user_defined_type(),
            TokenTag::Using => self.parse_using_directive(),
            // `function (` begins a constant variable of function type, any
            // other `function` a free function.
            TokenTag::Function if self.peek() != TokenTag::OpenParen => self.parse_function_decl(),
            _ => self.parse_constant_var_decl(),
        }
    }

    fn parse_pragma(&mut self) -> ParserResult {
        let keyword = self.next_token();
        if self.current() != TokenTag::Identifier {
            return Err(self.fail(ErrorTag::ExpectedPragmaVersion));
        }
        let start = self.next_token();
        while !matches!(self.current(), TokenTag::Semicolon | TokenTag::Eof) {
            self.next_token();
        }
        let end = self.token_index;
        if end == start + 1 {
            return Err(self.fail(ErrorTag::ExpectedPragmaVersion));
        }
        self.expect_semicolon();
        Ok(self.add_node(Node::new(NodeTag::PragmaDirective, keyword, start, end)))
    }

    /// The token after `import` decides between the three directive forms:
    /// a bare path, `* as alias from "path"` and `{symbols} from "path"`.
    fn parse_import(&mut self) -> ParserResult {
        let keyword = self.next_token();
        match self.current() {
            TokenTag::StringLiteral => {
                let path = self.next_token();
                let alias = if self.eat(TokenTag::As).is_some() {
                    self.expect_token(TokenTag::Identifier)?
                } else {
                    0
                };
                self.expect_semicolon();
                Ok(self.add_node(Node::new(
                    NodeTag::ImportDirectivePath,
                    keyword,
                    path,
                    alias,
                )))
            }
            TokenTag::Asterisk => {
                self.next_token();
                self.expect_token(TokenTag::As)?;
                let alias = self.expect_token(TokenTag::Identifier)?;
                self.expect_from_keyword()?;
                let path = self.expect_token(TokenTag::StringLiteral)?;
                self.expect_semicolon();
                Ok(self.add_node(Node::new(
                    NodeTag::ImportDirectiveAsterisk,
                    keyword,
                    alias,
                    path,
                )))
            }
            TokenTag::OpenBrace => {
                self.next_token();
                let top = self.scratch.len();
                loop {
                    if self.current() == TokenTag::CloseBrace {
                        break;
                    }
                    let symbol = self.expect_token(TokenTag::Identifier)?;
                    self.scratch.push(symbol);
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
                    if self.current() == TokenTag::Eof {
                        return Err(self.fail_expected(TokenTag::CloseBrace));
                    }
                }
                self.next_token();
                self.expect_from_keyword()?;
                let path = self.expect_token(TokenTag::StringLiteral)?;
                self.expect_semicolon();
                let (symbol_start, symbol_end) = self.scratch_to_span(top);
                let record = self.add_extra(ImportSymbol {
                    from: path,
                    symbol_start,
                    symbol_end,
                });
                Ok(self.add_node(Node::new(
                    NodeTag::ImportDirectiveSymbol,
                    keyword,
                    record,
                    0,
                )))
            }
            _ => Err(self.fail(ErrorTag::ExpectedImportPathAliasAsterisk)),
        }
    }

    /// `from` is not a keyword; it is matched as a contextual identifier.
    fn expect_from_keyword(&mut self) -> ParserResult<TokenIndex> {
        if self.current() == TokenTag::Identifier && self.token_slice(self.token_index) == "from" {
            Ok(self.next_token())
        } else {
            Err(self.fail_expected(TokenTag::Identifier))
        }
    }

    fn parse_contract_decl(&mut self) -> ParserResult {
        let abstract_token = self.eat(TokenTag::Abstract);
        if abstract_token.is_some() && self.current() != TokenTag::Contract {
            return Err(self.fail_expected(TokenTag::Contract));
        }
        let keyword = self.next_token();
        let name = self.expect_token(TokenTag::Identifier)?;

        let top = self.scratch.len();
        if self.eat(TokenTag::Is).is_some() {
            if self.token_tag(keyword) == TokenTag::Library {
                return Err(self.fail_expected(TokenTag::OpenBrace));
            }
            loop {
                let parent = self.parse_inheritance_specifier()?;
                self.scratch.push(parent);
                if self.eat(TokenTag::Comma).is_none() {
                    break;
                }
            }
        }
        let inheritance_count = self.scratch.len() - top;
        let mut single_parent = NULL_NODE;
        let mut parent_span = (0u32, 0u32);
        match inheritance_count {
            0 => {}
            1 => single_parent = self.scratch.pop().unwrap(),
            _ => parent_span = self.scratch_to_span(top),
        }

        let body = self.parse_contract_block()?;

        let (plain, one, multi) = match (self.token_tag(keyword), abstract_token) {
            (TokenTag::Contract, None) => (
                NodeTag::ContractDecl,
                NodeTag::ContractDeclInheritanceOne,
                NodeTag::ContractDeclInheritance,
            ),
            (TokenTag::Contract, Some(_)) => (
                NodeTag::AbstractDecl,
                NodeTag::AbstractDeclInheritanceOne,
                NodeTag::AbstractDeclInheritance,
            ),
            (TokenTag::Interface, _) => (
                NodeTag::InterfaceDecl,
                NodeTag::InterfaceDeclInheritanceOne,
                NodeTag::InterfaceDeclInheritance,
            ),
            _ => (NodeTag::LibraryDecl, NodeTag::LibraryDecl, NodeTag::LibraryDecl),
        };

        let node = match inheritance_count {
            0 => Node::new(plain, keyword, name, body),
            1 => {
                let record = self.add_extra(ContractInheritanceOne {
                    identifier: name,
                    inheritance: single_parent,
                });
                Node::new(one, keyword, record, body)
            }
            _ => {
                let record = self.add_extra(ContractInheritance {
                    identifier: name,
                    inheritance_start: parent_span.0,
                    inheritance_end: parent_span.1,
                });
                Node::new(multi, keyword, record, body)
            }
        };
        Ok(self.add_node(node))
    }

    /// A parent in an inheritance list: an identifier path, optionally with
    /// constructor arguments.
    fn parse_inheritance_specifier(&mut self) -> ParserResult {
        let path = self.parse_identifier_path()?;
        if self.current() == TokenTag::OpenParen {
            return self.parse_call_args(path);
        }
        Ok(path)
    }

    pub(crate) fn parse_contract_block(&mut self) -> ParserResult {
        let l_brace = self.expect_token(TokenTag::OpenBrace)?;
        let top = self.scratch.len();
        loop {
            let doc = self.eat_doc_comments();
            match self.current() {
                TokenTag::CloseBrace => {
                    if let Some(doc_token) = doc {
                        self.warn_at(doc_token, ErrorTag::UnattachedDocComment);
                    }
                    break;
                }
                TokenTag::Eof => {
                    if let Some(doc_token) = doc {
                        self.warn_at(doc_token, ErrorTag::UnattachedDocComment);
                    }
                    self.warn(ErrorTag::ExpectedCloseBrace);
                    break;
                }
                _ => {}
            }
            let element =
                self.recover(|p| p.parse_contract_element(), Self::find_next_contract_element);
            if element != NULL_NODE {
                self.scratch.push(element);
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
                NodeTag::ContractBlockTwoSemicolon
            } else {
                NodeTag::ContractBlockTwo
            };
            Node::new(tag, l_brace, lhs, rhs)
        } else {
            let (start, end) = self.scratch_to_span(top);
            let tag = if trailing_semicolon {
                NodeTag::ContractBlockSemicolon
            } else {
                NodeTag::ContractBlock
            };
            Node::new(tag, l_brace, start, end)
        };
        Ok(self.add_node(node))
    }

    pub(crate) fn parse_contract_element(&mut self) -> ParserResult {
        match self.current() {
            TokenTag::Constructor | TokenTag::Fallback | TokenTag::Receive => {
                self.parse_function_decl()
            }
            TokenTag::Function if self.peek() != TokenTag::OpenParen => self.parse_function_decl(),
            TokenTag::Modifier => self.parse_modifier_decl(),
            TokenTag::Event => self.parse_event_proto(),
            TokenTag::Error => self.parse_error_proto(),
            TokenTag::Struct => self.parse_struct_decl(),
            TokenTag::Enum => self.parse_enum_decl(),
            TokenTag::Type => self.parse_user_defined_type(),
            TokenTag::Using => self.parse_using_directive(),
            _ => self.parse_state_variable_decl(),
        }
    }

    /// Functions, constructors and the fallback/receive special functions all
    /// share the prototype machinery; the special forms keep their keyword
    /// token in the identifier slot.
    pub(crate) fn parse_function_decl(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let identifier = if self.token_tag(keyword) == TokenTag::Function {
            self.expect_token(TokenTag::Identifier)?
        } else {
            keyword
        };
        let proto = self.parse_function_proto(keyword, identifier)?;
        match self.current() {
            TokenTag::Semicolon => {
                self.next_token();
                Ok(proto)
            }
            TokenTag::OpenBrace => {
                let body = self.parse_block()?;
                Ok(self.add_node(Node::new(NodeTag::FunctionDecl, keyword, proto, body)))
            }
            _ => Err(self.fail(ErrorTag::ExpectedSemicolonOrOpenBrace)),
        }
    }

    /// Parse `(params) specifiers [returns (params)]` and pick one of the
    /// four arity specialized prototype tags.
    fn parse_function_proto(
        &mut self,
        keyword: TokenIndex,
        identifier: TokenIndex,
    ) -> ParserResult {
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

        let specifiers = self.parse_function_specifiers()?;

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
                let record = self.add_extra(FnProtoOne {
                    param: single_param,
                    specifiers,
                    identifier,
                });
                Node::new(NodeTag::FunctionProtoSimple, keyword, record, 0)
            }
            (false, None) => {
                let record = self.add_extra(FnProto {
                    specifiers,
                    identifier,
                    params_start: param_span.0,
                    params_end: param_span.1,
                });
                Node::new(NodeTag::FunctionProtoMulti, keyword, record, 0)
            }
            (true, Some((start, end))) => {
                let record = self.add_extra(FnProtoOne {
                    param: single_param,
                    specifiers,
                    identifier,
                });
                let returns = self.add_range(start, end);
                Node::new(NodeTag::FunctionProtoOne, keyword, record, returns)
            }
            (false, Some((start, end))) => {
                let record = self.add_extra(FnProto {
                    specifiers,
                    identifier,
                    params_start: param_span.0,
                    params_end: param_span.1,
                });
                let returns = self.add_range(start, end);
                Node::new(NodeTag::FunctionProto, keyword, record, returns)
            }
        };
        Ok(self.add_node(node))
    }

    /// Collect visibility, mutability, `virtual`, `override` and modifier
    /// invocations into one `Specifiers` node. Returns the null node when the
    /// run is empty.
    fn parse_function_specifiers(&mut self) -> ParserResult<NodeIndex> {
        let top = self.scratch.len();
        let first_token = self.token_index;
        loop {
            match self.current() {
                tag if tag.is_visibility() || tag.is_mutability() || tag == TokenTag::Virtual => {
                    let token = self.next_token();
                    let node = self.add_node(Node::new(NodeTag::Specifier, token, 0, 0));
                    self.scratch.push(node);
                }
                TokenTag::Override => {
                    let node = self.parse_override_specifier()?;
                    self.scratch.push(node);
                }
                TokenTag::Identifier => {
                    let path = self.parse_identifier_path()?;
                    let node = if self.current() == TokenTag::OpenParen {
                        self.parse_call_args(path)?
                    } else {
                        path
                    };
                    self.scratch.push(node);
                }
                _ => break,
            }
        }
        if self.scratch.len() == top {
            return Ok(NULL_NODE);
        }
        let (start, end) = self.scratch_to_span(top);
        Ok(self.add_node(Node::new(NodeTag::Specifiers, first_token, start, end)))
    }

    /// `override` with an optional parenthesized list of overridden paths.
    pub(crate) fn parse_override_specifier(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let mut span = (0u32, 0u32);
        if self.eat(TokenTag::OpenParen).is_some() {
            let top = self.scratch.len();
            loop {
                if self.current() == TokenTag::CloseParen {
                    break;
                }
                let path = self.parse_identifier_path()?;
                self.scratch.push(path);
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
            span = self.scratch_to_span(top);
        }
        Ok(self.add_node(Node::new(
            NodeTag::OverrideSpecifier,
            keyword,
            span.0,
            span.1,
        )))
    }

    fn parse_modifier_decl(&mut self) -> ParserResult {
        let _keyword = self.next_token();
        let name = self.expect_token(TokenTag::Identifier)?;

        let mut param_span = (0u32, 0u32);
        if self.eat(TokenTag::OpenParen).is_some() {
            let top = self.scratch.len();
            self.parse_param_list(ParamContext::Function)?;
            param_span = self.scratch_to_span(top);
        }

        // Only `virtual` and `override` are legal here, each at most once.
        let top = self.scratch.len();
        let first_token = self.token_index;
        let mut seen_virtual = false;
        let mut seen_override = false;
        loop {
            match self.current() {
                TokenTag::Virtual => {
                    let token = self.next_token();
                    if seen_virtual {
                        return Err(self.fail_at(token, ErrorTag::AlreadySeenSpecifier));
                    }
                    seen_virtual = true;
                    let node = self.add_node(Node::new(NodeTag::Specifier, token, 0, 0));
                    self.scratch.push(node);
                }
                TokenTag::Override => {
                    if seen_override {
                        let token = self.token_index;
                        return Err(self.fail_at(token, ErrorTag::AlreadySeenSpecifier));
                    }
                    seen_override = true;
                    let node = self.parse_override_specifier()?;
                    self.scratch.push(node);
                }
                _ => break,
            }
        }
        let specifiers = if self.scratch.len() == top {
            NULL_NODE
        } else {
            let (start, end) = self.scratch_to_span(top);
            self.add_node(Node::new(NodeTag::Specifiers, first_token, start, end))
        };

        let record = self.add_extra(ModifierProto {
            specifiers,
            params_start: param_span.0,
            params_end: param_span.1,
        });
        let proto = self.add_node(Node::new(NodeTag::ModifierProto, name, record, 0));

        match self.current() {
            TokenTag::Semicolon => {
                self.next_token();
                Ok(proto)
            }
            TokenTag::OpenBrace => {
                let body = self.parse_block()?;
                Ok(self.add_node(Node::new(NodeTag::ModifierDecl, name, proto, body)))
            }
            _ => Err(self.fail(ErrorTag::ExpectedSemicolonOrOpenBrace)),
        }
    }

    fn parse_event_proto(&mut self) -> ParserResult {
        let _keyword = self.next_token();
        let name = self.expect_token(TokenTag::Identifier)?;
        self.expect_token(TokenTag::OpenParen)?;
        let top = self.scratch.len();
        self.parse_param_list(ParamContext::Event)?;
        let (params_start, params_end) = self.scratch_to_span(top);
        let anonymous = self.eat(TokenTag::Anonymous).unwrap_or(0);
        self.expect_semicolon();
        let record = self.add_extra(EventProto {
            params_start,
            params_end,
            anonymous,
        });
        Ok(self.add_node(Node::new(NodeTag::EventProto, name, record, 0)))
    }

    fn parse_error_proto(&mut self) -> ParserResult {
        let _keyword = self.next_token();
        let name = self.expect_token(TokenTag::Identifier)?;
        self.expect_token(TokenTag::OpenParen)?;
        let top = self.scratch.len();
        self.parse_param_list(ParamContext::ErrorDecl)?;
        let (params_start, params_end) = self.scratch_to_span(top);
        self.expect_semicolon();
        Ok(self.add_node(Node::new(
            NodeTag::ErrorProto,
            name,
            params_start,
            params_end,
        )))
    }

    fn parse_struct_decl(&mut self) -> ParserResult {
        let _keyword = self.next_token();
        let name = self.expect_token(TokenTag::Identifier)?;
        self.expect_token(TokenTag::OpenBrace)?;
        let top = self.scratch.len();
        loop {
            match self.current() {
                TokenTag::CloseBrace => break,
                TokenTag::Eof => return Err(self.fail(ErrorTag::ExpectedCloseBrace)),
                tag if tag.is_elementary_type() => {}
                TokenTag::Identifier | TokenTag::Mapping | TokenTag::Function => {}
                _ => return Err(self.fail(ErrorTag::ExpectedStructField)),
            }
            let field = self.parse_variable_decl(false)?;
            if self.nodes[field as usize].tag != NodeTag::VariableDecl {
                return Err(self.fail(ErrorTag::ExpectedStructField));
            }
            self.expect_semicolon();
            self.scratch.push(field);
        }
        self.next_token();
        let (start, end) = self.scratch_to_span(top);
        Ok(self.add_node(Node::new(NodeTag::StructDecl, name, start, end)))
    }

    fn parse_enum_decl(&mut self) -> ParserResult {
        let _keyword = self.next_token();
        let name = self.expect_token(TokenTag::Identifier)?;
        self.expect_token(TokenTag::OpenBrace)?;
        let top = self.scratch.len();
        loop {
            if self.current() == TokenTag::CloseBrace {
                break;
            }
            let value = self.expect_token(TokenTag::Identifier)?;
            self.scratch.push(value);
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
            if self.current() == TokenTag::Eof {
                return Err(self.fail_expected(TokenTag::CloseBrace));
            }
        }
        self.next_token();
        let (start, end) = self.scratch_to_span(top);
        Ok(self.add_node(Node::new(NodeTag::EnumDecl, name, start, end)))
    }

    fn parse_user_defined_type(&mut self) -> ParserResult {
        let _keyword = self.next_token();
        let name = self.expect_token(TokenTag::Identifier)?;
        self.expect_token(TokenTag::Is)?;
        if !self.current().is_elementary_type() {
            return Err(self.fail(ErrorTag::ExpectedTypeExpr));
        }
        let underlying = self.parse_elementary_type();
        self.expect_semicolon();
        Ok(self.add_node(Node::new(
            NodeTag::UserDefinedTypeDecl,
            name,
            underlying,
            0,
        )))
    }

    fn parse_using_directive(&mut self) -> ParserResult {
        let keyword = self.next_token();
        let top = self.scratch.len();
        if self.eat(TokenTag::OpenBrace).is_some() {
            loop {
                if self.current() == TokenTag::CloseBrace {
                    break;
                }
                let path = self.parse_identifier_path()?;
                self.scratch.push(path);
                match self.current() {
                    TokenTag::Comma => {
                        let comma = self.next_token();
                        if self.current() == TokenTag::CloseBrace {
                            self.warn_at(comma, ErrorTag::TrailingComma);
                        }
                    }
                    TokenTag::CloseBrace => {}
                    _ => return Err(self.fail_expected(TokenTag::CloseBrace)),
                }
            }
            self.next_token();
        } else {
            let path = self.parse_identifier_path()?;
            self.scratch.push(path);
        }
        self.expect_token(TokenTag::For)?;
        let target_type = if self.eat(TokenTag::Asterisk).is_some() {
            NULL_NODE
        } else {
            self.parse_type_expr()?
        };
        // Only the literal word `global` is accepted as a trailing marker.
        let global = if self.current() == TokenTag::Identifier
            && self.token_slice(self.token_index) == "global"
        {
            self.next_token()
        } else {
            0
        };
        self.expect_semicolon();
        let (aliases_start, aliases_end) = self.scratch_to_span(top);
        let record = self.add_extra(Using {
            aliases_start,
            aliases_end,
            target_type,
            global,
        });
        Ok(self.add_node(Node::new(NodeTag::UsingDirective, keyword, record, 0)))
    }

    /// Top level fallthrough: `T constant NAME = expr;`.
    fn parse_constant_var_decl(&mut self) -> ParserResult {
        match self.current() {
            tag if tag.is_elementary_type() => {}
            TokenTag::Identifier | TokenTag::Mapping | TokenTag::Function => {}
            _ => return Err(self.fail(ErrorTag::ExpectedSourceUnitExpr)),
        }
        let type_node = self.parse_type_expr()?;
        let _constant = self.expect_token(TokenTag::Constant)?;
        let name = self.expect_token(TokenTag::Identifier)?;
        self.expect_token(TokenTag::Equal)?;
        let value = self.parse_expr()?;
        self.expect_semicolon();
        Ok(self.add_node(Node::new(
            NodeTag::ConstantVariableDecl,
            name,
            type_node,
            value,
        )))
    }

    /// Contract body fallthrough: a state variable declaration.
    fn parse_state_variable_decl(&mut self) -> ParserResult {
        match self.current() {
            tag if tag.is_elementary_type() => {}
            TokenTag::Identifier | TokenTag::Mapping | TokenTag::Function => {}
            _ => return Err(self.fail(ErrorTag::ExpectedContractElement)),
        }
        let type_node = self.parse_type_expr()?;

        let top = self.scratch.len();
        let first_token = self.token_index;
        loop {
            match self.current() {
                tag if tag.is_visibility()
                    || tag == TokenTag::Constant
                    || tag == TokenTag::Immutable =>
                {
                    let token = self.next_token();
                    let node = self.add_node(Node::new(NodeTag::Specifier, token, 0, 0));
                    self.scratch.push(node);
                }
                TokenTag::Override => {
                    let node = self.parse_override_specifier()?;
                    self.scratch.push(node);
                }
                _ => break,
            }
        }
        let specifiers = if self.scratch.len() == top {
            NULL_NODE
        } else {
            let (start, end) = self.scratch_to_span(top);
            self.add_node(Node::new(NodeTag::Specifiers, first_token, start, end))
        };

        let name = self.expect_token(TokenTag::Identifier)?;
        let initializer = if self.eat(TokenTag::Equal).is_some() {
            self.parse_expr()?
        } else {
            NULL_NODE
        };
        self.expect_semicolon();
        let record = self.add_extra(StateVarProto {
            type_expr: type_node,
            specifiers,
        });
        Ok(self.add_node(Node::new(
            NodeTag::StateVariableDecl,
            name,
            record,
            initializer,
        )))
    }

    /// Parse a parenthesized declaration list into the scratch stack. The
    /// caller has consumed the opening parenthesis; the closing one is
    /// consumed here.
    pub(crate) fn parse_param_list(&mut self, context: ParamContext) -> ParserResult<()> {
        loop {
            match self.current() {
                TokenTag::CloseParen => break,
                TokenTag::Eof => return Err(self.fail_expected(TokenTag::CloseParen)),
                _ => {}
            }
            let param = self.parse_param(context)?;
            self.scratch.push(param);
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
        self.expect_token(TokenTag::CloseParen)?;
        Ok(())
    }

    fn parse_param(&mut self, context: ParamContext) -> ParserResult {
        match self.current() {
            tag if tag.is_elementary_type() => {}
            TokenTag::Identifier | TokenTag::Mapping | TokenTag::Function => {}
            _ => return Err(self.fail(context.error_tag())),
        }
        self.parse_variable_decl(context == ParamContext::Event)
    }
}
