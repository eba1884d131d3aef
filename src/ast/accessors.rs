//! Named accessor helpers, one per multi-variant construct.
//!
//! Each helper resolves the arity specialized encoding of its node family
//! into a small view struct with named fields: identifier tokens, optional
//! sub nodes (`None` for the sentinel) and child lists materialised out of
//! extra data. These views are the supported read surface of the tree.

use super::Ast;
use crate::node::{
    CatchProto, ContractInheritance, ContractInheritanceOne, EventProto as EventProtoRecord,
    FnProto, FnProtoOne, FnTypeProto, FnTypeProtoOne, For, If, ImportSymbol, Mapping,
    ModifierProto as ModifierProtoRecord, NodeIndex, NodeTag, StateVarProto, Try, Using,
    YulFnProto, YulFullFnProto, NULL_NODE,
};
use crate::token::TokenIndex;

fn some(index: u32) -> Option<u32> {
    if index == 0 {
        None
    } else {
        Some(index)
    }
}

#[derive(Debug, Clone)]
pub struct ContractDeclView {
    pub main_token: TokenIndex,
    pub identifier: TokenIndex,
    pub inheritance: Vec<NodeIndex>,
    pub body: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct BlockView {
    pub main_token: TokenIndex,
    pub statements: Vec<NodeIndex>,
    /// Whether the token before the closing brace is a semicolon.
    pub trailing_semicolon: bool,
}

#[derive(Debug, Clone)]
pub struct FunctionProtoView {
    pub main_token: TokenIndex,
    /// The name; the `constructor`/`fallback`/`receive` keyword token for the
    /// special functions, `None` for function types.
    pub identifier: Option<TokenIndex>,
    pub params: Vec<NodeIndex>,
    pub specifiers: Option<NodeIndex>,
    pub returns: Option<Vec<NodeIndex>>,
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionDeclView {
    pub proto: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct ModifierProtoView {
    pub identifier: TokenIndex,
    pub params: Vec<NodeIndex>,
    pub specifiers: Option<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct EventProtoView {
    pub identifier: TokenIndex,
    pub params: Vec<NodeIndex>,
    pub anonymous: Option<TokenIndex>,
}

#[derive(Debug, Clone)]
pub struct ErrorProtoView {
    pub identifier: TokenIndex,
    pub params: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct StructDeclView {
    pub identifier: TokenIndex,
    pub fields: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct EnumDeclView {
    pub identifier: TokenIndex,
    /// The value identifier tokens.
    pub values: Vec<TokenIndex>,
}

#[derive(Debug, Clone)]
pub struct ImportView {
    pub main_token: TokenIndex,
    /// The path string literal token.
    pub path: TokenIndex,
    pub alias: Option<TokenIndex>,
    /// Imported identifier tokens of the `{a, b}` form.
    pub symbols: Vec<TokenIndex>,
}

#[derive(Debug, Clone)]
pub struct UsingView {
    pub main_token: TokenIndex,
    /// Path nodes; a single entry for the `using A.B for …` form.
    pub aliases: Vec<NodeIndex>,
    /// `None` for `using … for *`.
    pub target_type: Option<NodeIndex>,
    pub global: Option<TokenIndex>,
}

#[derive(Debug, Clone, Copy)]
pub struct UserDefinedTypeView {
    pub identifier: TokenIndex,
    pub underlying: NodeIndex,
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantVarDeclView {
    pub identifier: TokenIndex,
    pub type_expr: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Debug, Clone, Copy)]
pub struct StateVarDeclView {
    pub identifier: TokenIndex,
    pub type_expr: NodeIndex,
    pub specifiers: Option<NodeIndex>,
    pub initializer: Option<NodeIndex>,
}

#[derive(Debug, Clone, Copy)]
pub struct VariableDeclView {
    pub type_expr: NodeIndex,
    /// The storage location or `indexed` token when present.
    pub qualifier: Option<TokenIndex>,
    pub name: Option<TokenIndex>,
}

#[derive(Debug, Clone, Copy)]
pub struct MappingView {
    pub main_token: TokenIndex,
    pub key: NodeIndex,
    pub key_name: Option<TokenIndex>,
    pub value: NodeIndex,
    pub value_name: Option<TokenIndex>,
}

#[derive(Debug, Clone, Copy)]
pub struct IfView {
    pub condition: NodeIndex,
    pub then_expression: NodeIndex,
    pub else_expression: Option<NodeIndex>,
}

#[derive(Debug, Clone, Copy)]
pub struct ForView {
    pub condition_one: Option<NodeIndex>,
    pub condition_two: Option<NodeIndex>,
    pub condition_three: Option<NodeIndex>,
    pub body: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct TryView {
    pub expression: NodeIndex,
    pub returns: Vec<NodeIndex>,
    pub block_statement: NodeIndex,
    pub catches: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct CatchView {
    pub identifier: Option<TokenIndex>,
    pub params: Vec<NodeIndex>,
    pub block: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct CallView {
    pub callee: NodeIndex,
    pub args: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct StructInitView {
    pub target: Option<NodeIndex>,
    pub fields: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct ItemsView {
    pub main_token: TokenIndex,
    /// Items in source order; tuple entries may contain the null sentinel for
    /// empty destructuring slots.
    pub items: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct AssemblyView {
    pub main_token: TokenIndex,
    /// Flag string literal tokens.
    pub flags: Vec<TokenIndex>,
    pub block: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct YulSwitchView {
    pub condition: NodeIndex,
    pub cases: Vec<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct YulVarDeclView {
    /// The declared name tokens.
    pub names: Vec<TokenIndex>,
    pub value: Option<NodeIndex>,
}

#[derive(Debug, Clone)]
pub struct YulAssignView {
    pub targets: Vec<NodeIndex>,
    pub value: NodeIndex,
}

#[derive(Debug, Clone)]
pub struct YulFunctionView {
    pub identifier: TokenIndex,
    pub params: Vec<TokenIndex>,
    pub returns: Vec<TokenIndex>,
    pub body: NodeIndex,
}

impl<'src> Ast<'src> {
    /// Resolve any of the contract declaration tags.
    pub fn contract_decl(&self, index: NodeIndex) -> ContractDeclView {
        let node = self.node(index);
        match node.tag {
            NodeTag::ContractDecl
            | NodeTag::InterfaceDecl
            | NodeTag::LibraryDecl
            | NodeTag::AbstractDecl => ContractDeclView {
                main_token: node.main_token,
                identifier: node.lhs,
                inheritance: Vec::new(),
                body: node.rhs,
            },
            NodeTag::ContractDeclInheritanceOne
            | NodeTag::InterfaceDeclInheritanceOne
            | NodeTag::AbstractDeclInheritanceOne => {
                let record: ContractInheritanceOne = self.extra(node.lhs);
                ContractDeclView {
                    main_token: node.main_token,
                    identifier: record.identifier,
                    inheritance: vec![record.inheritance],
                    body: node.rhs,
                }
            }
            NodeTag::ContractDeclInheritance
            | NodeTag::InterfaceDeclInheritance
            | NodeTag::AbstractDeclInheritance => {
                let record: ContractInheritance = self.extra(node.lhs);
                ContractDeclView {
                    main_token: node.main_token,
                    identifier: record.identifier,
                    inheritance: self
                        .extra_slice(record.inheritance_start, record.inheritance_end)
                        .to_vec(),
                    body: node.rhs,
                }
            }
            tag => unreachable!("contract_decl on {:?}", tag),
        }
    }

    /// Resolve any of the block tags (statement, contract body or assembly).
    pub fn block(&self, index: NodeIndex) -> BlockView {
        let node = self.node(index);
        match node.tag {
            NodeTag::BlockTwo | NodeTag::ContractBlockTwo | NodeTag::AsmBlockTwo => BlockView {
                main_token: node.main_token,
                statements: [node.lhs, node.rhs]
                    .iter()
                    .copied()
                    .filter(|child| *child != NULL_NODE)
                    .collect(),
                trailing_semicolon: false,
            },
            NodeTag::BlockTwoSemicolon | NodeTag::ContractBlockTwoSemicolon => BlockView {
                main_token: node.main_token,
                statements: [node.lhs, node.rhs]
                    .iter()
                    .copied()
                    .filter(|child| *child != NULL_NODE)
                    .collect(),
                trailing_semicolon: true,
            },
            NodeTag::Block | NodeTag::ContractBlock | NodeTag::AsmBlock => BlockView {
                main_token: node.main_token,
                statements: self.extra_slice(node.lhs, node.rhs).to_vec(),
                trailing_semicolon: false,
            },
            NodeTag::BlockSemicolon | NodeTag::ContractBlockSemicolon => BlockView {
                main_token: node.main_token,
                statements: self.extra_slice(node.lhs, node.rhs).to_vec(),
                trailing_semicolon: true,
            },
            tag => unreachable!("block on {:?}", tag),
        }
    }

    /// Resolve any of the four function prototype or four function type tags.
    pub fn function_proto(&self, index: NodeIndex) -> FunctionProtoView {
        let node = self.node(index);
        match node.tag {
            NodeTag::FunctionProtoSimple | NodeTag::FunctionProtoOne => {
                let record: FnProtoOne = self.extra(node.lhs);
                FunctionProtoView {
                    main_token: node.main_token,
                    identifier: Some(record.identifier),
                    params: if record.param == NULL_NODE {
                        Vec::new()
                    } else {
                        vec![record.param]
                    },
                    specifiers: some(record.specifiers),
                    returns: (node.tag == NodeTag::FunctionProtoOne)
                        .then(|| self.extra_range_slice(node.rhs).to_vec()),
                }
            }
            NodeTag::FunctionProtoMulti | NodeTag::FunctionProto => {
                let record: FnProto = self.extra(node.lhs);
                FunctionProtoView {
                    main_token: node.main_token,
                    identifier: Some(record.identifier),
                    params: self
                        .extra_slice(record.params_start, record.params_end)
                        .to_vec(),
                    specifiers: some(record.specifiers),
                    returns: (node.tag == NodeTag::FunctionProto)
                        .then(|| self.extra_range_slice(node.rhs).to_vec()),
                }
            }
            NodeTag::FunctionTypeSimple | NodeTag::FunctionTypeOne => {
                let record: FnTypeProtoOne = self.extra(node.lhs);
                FunctionProtoView {
                    main_token: node.main_token,
                    identifier: None,
                    params: if record.param == NULL_NODE {
                        Vec::new()
                    } else {
                        vec![record.param]
                    },
                    specifiers: some(record.specifiers),
                    returns: (node.tag == NodeTag::FunctionTypeOne)
                        .then(|| self.extra_range_slice(node.rhs).to_vec()),
                }
            }
            NodeTag::FunctionTypeMulti | NodeTag::FunctionType => {
                let record: FnTypeProto = self.extra(node.lhs);
                FunctionProtoView {
                    main_token: node.main_token,
                    identifier: None,
                    params: self
                        .extra_slice(record.params_start, record.params_end)
                        .to_vec(),
                    specifiers: some(record.specifiers),
                    returns: (node.tag == NodeTag::FunctionType)
                        .then(|| self.extra_range_slice(node.rhs).to_vec()),
                }
            }
            tag => unreachable!("function_proto on {:?}", tag),
        }
    }

    pub fn function_decl(&self, index: NodeIndex) -> FunctionDeclView {
        let node = self.node(index);
        debug_assert!(matches!(
            node.tag,
            NodeTag::FunctionDecl | NodeTag::ModifierDecl
        ));
        FunctionDeclView {
            proto: node.lhs,
            body: node.rhs,
        }
    }

    pub fn modifier_proto(&self, index: NodeIndex) -> ModifierProtoView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::ModifierProto);
        let record: ModifierProtoRecord = self.extra(node.lhs);
        ModifierProtoView {
            identifier: node.main_token,
            params: self
                .extra_slice(record.params_start, record.params_end)
                .to_vec(),
            specifiers: some(record.specifiers),
        }
    }

    pub fn event_proto(&self, index: NodeIndex) -> EventProtoView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::EventProto);
        let record: EventProtoRecord = self.extra(node.lhs);
        EventProtoView {
            identifier: node.main_token,
            params: self
                .extra_slice(record.params_start, record.params_end)
                .to_vec(),
            anonymous: some(record.anonymous),
        }
    }

    pub fn error_proto(&self, index: NodeIndex) -> ErrorProtoView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::ErrorProto);
        ErrorProtoView {
            identifier: node.main_token,
            params: self.extra_slice(node.lhs, node.rhs).to_vec(),
        }
    }

    pub fn struct_decl(&self, index: NodeIndex) -> StructDeclView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::StructDecl);
        StructDeclView {
            identifier: node.main_token,
            fields: self.extra_slice(node.lhs, node.rhs).to_vec(),
        }
    }

    pub fn enum_decl(&self, index: NodeIndex) -> EnumDeclView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::EnumDecl);
        EnumDeclView {
            identifier: node.main_token,
            values: self.extra_slice(node.lhs, node.rhs).to_vec(),
        }
    }

    /// Resolve any of the three import directive forms.
    pub fn import_directive(&self, index: NodeIndex) -> ImportView {
        let node = self.node(index);
        match node.tag {
            NodeTag::ImportDirectivePath => ImportView {
                main_token: node.main_token,
                path: node.lhs,
                alias: some(node.rhs),
                symbols: Vec::new(),
            },
            NodeTag::ImportDirectiveAsterisk => ImportView {
                main_token: node.main_token,
                path: node.rhs,
                alias: Some(node.lhs),
                symbols: Vec::new(),
            },
            NodeTag::ImportDirectiveSymbol => {
                let record: ImportSymbol = self.extra(node.lhs);
                ImportView {
                    main_token: node.main_token,
                    path: record.from,
                    alias: None,
                    symbols: self
                        .extra_slice(record.symbol_start, record.symbol_end)
                        .to_vec(),
                }
            }
            tag => unreachable!("import_directive on {:?}", tag),
        }
    }

    pub fn using_directive(&self, index: NodeIndex) -> UsingView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::UsingDirective);
        let record: Using = self.extra(node.lhs);
        UsingView {
            main_token: node.main_token,
            aliases: self
                .extra_slice(record.aliases_start, record.aliases_end)
                .to_vec(),
            target_type: some(record.target_type),
            global: some(record.global),
        }
    }

    pub fn user_defined_type(&self, index: NodeIndex) -> UserDefinedTypeView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::UserDefinedTypeDecl);
        UserDefinedTypeView {
            identifier: node.main_token,
            underlying: node.lhs,
        }
    }

    pub fn constant_variable_decl(&self, index: NodeIndex) -> ConstantVarDeclView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::ConstantVariableDecl);
        ConstantVarDeclView {
            identifier: node.main_token,
            type_expr: node.lhs,
            initializer: node.rhs,
        }
    }

    pub fn state_variable_decl(&self, index: NodeIndex) -> StateVarDeclView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::StateVariableDecl);
        let record: StateVarProto = self.extra(node.lhs);
        StateVarDeclView {
            identifier: node.main_token,
            type_expr: record.type_expr,
            specifiers: some(record.specifiers),
            initializer: some(node.rhs),
        }
    }

    pub fn variable_decl(&self, index: NodeIndex) -> VariableDeclView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::VariableDecl);
        let qualifier = if self.token_tag(node.main_token).is_storage_location()
            || self.token_tag(node.main_token) == crate::token::TokenTag::Indexed
        {
            Some(node.main_token)
        } else {
            None
        };
        VariableDeclView {
            type_expr: node.lhs,
            qualifier,
            name: some(node.rhs),
        }
    }

    pub fn mapping_decl(&self, index: NodeIndex) -> MappingView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::MappingDecl);
        let record: Mapping = self.extra(node.lhs);
        MappingView {
            main_token: node.main_token,
            key: record.key,
            key_name: some(record.key_identifier),
            value: node.rhs,
            value_name: some(record.value_identifier),
        }
    }

    /// Resolve `IfSimple`, `If` and the ternary `Conditional`.
    pub fn if_statement(&self, index: NodeIndex) -> IfView {
        let node = self.node(index);
        match node.tag {
            NodeTag::IfSimple => IfView {
                condition: node.lhs,
                then_expression: node.rhs,
                else_expression: None,
            },
            NodeTag::If | NodeTag::Conditional => {
                let record: If = self.extra(node.rhs);
                IfView {
                    condition: node.lhs,
                    then_expression: record.then_expression,
                    else_expression: Some(record.else_expression),
                }
            }
            tag => unreachable!("if_statement on {:?}", tag),
        }
    }

    /// Resolve `For` and `YulFor` (init/condition/post for the latter).
    pub fn for_statement(&self, index: NodeIndex) -> ForView {
        let node = self.node(index);
        debug_assert!(matches!(node.tag, NodeTag::For | NodeTag::YulFor));
        let record: For = self.extra(node.lhs);
        ForView {
            condition_one: some(record.condition_one),
            condition_two: some(record.condition_two),
            condition_three: some(record.condition_three),
            body: node.rhs,
        }
    }

    pub fn try_statement(&self, index: NodeIndex) -> TryView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::Try);
        let record: Try = self.extra(node.lhs);
        TryView {
            expression: record.expression,
            returns: if record.returns == 0 {
                Vec::new()
            } else {
                self.extra_range_slice(record.returns).to_vec()
            },
            block_statement: record.block_statement,
            catches: self.extra_range_slice(node.rhs).to_vec(),
        }
    }

    pub fn catch_clause(&self, index: NodeIndex) -> CatchView {
        let node = self.node(index);
        match node.tag {
            NodeTag::CatchSimple => CatchView {
                identifier: None,
                params: Vec::new(),
                block: node.rhs,
            },
            NodeTag::Catch => {
                let record: CatchProto = self.extra(node.lhs);
                CatchView {
                    identifier: some(record.identifier),
                    params: self
                        .extra_slice(record.params_start, record.params_end)
                        .to_vec(),
                    block: node.rhs,
                }
            }
            tag => unreachable!("catch_clause on {:?}", tag),
        }
    }

    /// Resolve `CallOne`/`Call` and their Yul counterparts.
    pub fn call(&self, index: NodeIndex) -> CallView {
        let node = self.node(index);
        match node.tag {
            NodeTag::CallOne | NodeTag::YulCallOne => CallView {
                callee: node.lhs,
                args: if node.rhs == NULL_NODE {
                    Vec::new()
                } else {
                    vec![node.rhs]
                },
            },
            NodeTag::Call | NodeTag::YulCall => CallView {
                callee: node.lhs,
                args: self.extra_range_slice(node.rhs).to_vec(),
            },
            tag => unreachable!("call on {:?}", tag),
        }
    }

    pub fn struct_init(&self, index: NodeIndex) -> StructInitView {
        let node = self.node(index);
        match node.tag {
            NodeTag::StructInitOne => StructInitView {
                target: some(node.lhs),
                fields: if node.rhs == NULL_NODE {
                    Vec::new()
                } else {
                    vec![node.rhs]
                },
            },
            NodeTag::StructInit => StructInitView {
                target: some(node.lhs),
                fields: self.extra_range_slice(node.rhs).to_vec(),
            },
            tag => unreachable!("struct_init on {:?}", tag),
        }
    }

    /// Resolve tuple and array initializers.
    pub fn items(&self, index: NodeIndex) -> ItemsView {
        let node = self.node(index);
        match node.tag {
            NodeTag::TupleInitOne | NodeTag::ArrayInitOne => ItemsView {
                main_token: node.main_token,
                items: if node.lhs == NULL_NODE {
                    Vec::new()
                } else {
                    vec![node.lhs]
                },
            },
            NodeTag::TupleInit | NodeTag::ArrayInit => ItemsView {
                main_token: node.main_token,
                items: self.extra_slice(node.lhs, node.rhs).to_vec(),
            },
            tag => unreachable!("items on {:?}", tag),
        }
    }

    pub fn assembly_decl(&self, index: NodeIndex) -> AssemblyView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::AssemblyDecl);
        let flags = if node.lhs == NULL_NODE {
            Vec::new()
        } else {
            let flags_node = self.node(node.lhs);
            self.extra_slice(flags_node.lhs, flags_node.rhs).to_vec()
        };
        AssemblyView {
            main_token: node.main_token,
            flags,
            block: node.rhs,
        }
    }

    pub fn yul_switch(&self, index: NodeIndex) -> YulSwitchView {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::YulSwitch);
        YulSwitchView {
            condition: node.lhs,
            cases: self.extra_range_slice(node.rhs).to_vec(),
        }
    }

    pub fn yul_var_decl(&self, index: NodeIndex) -> YulVarDeclView {
        let node = self.node(index);
        match node.tag {
            NodeTag::YulVarDecl => YulVarDeclView {
                names: vec![node.lhs],
                value: some(node.rhs),
            },
            NodeTag::YulVarDeclMulti => YulVarDeclView {
                names: self.extra_range_slice(node.lhs).to_vec(),
                value: some(node.rhs),
            },
            tag => unreachable!("yul_var_decl on {:?}", tag),
        }
    }

    /// Resolve single and multi target Yul assignments.
    pub fn yul_assign(&self, index: NodeIndex) -> YulAssignView {
        let node = self.node(index);
        match node.tag {
            NodeTag::YulAssign => YulAssignView {
                targets: vec![node.lhs],
                value: node.rhs,
            },
            NodeTag::YulAssignMulti => YulAssignView {
                targets: self.extra_range_slice(node.lhs).to_vec(),
                value: node.rhs,
            },
            tag => unreachable!("yul_assign on {:?}", tag),
        }
    }

    pub fn yul_function_decl(&self, index: NodeIndex) -> YulFunctionView {
        let node = self.node(index);
        match node.tag {
            NodeTag::YulFunctionDecl => {
                let record: YulFnProto = self.extra(node.lhs);
                YulFunctionView {
                    identifier: record.identifier,
                    params: self
                        .extra_slice(record.params_start, record.params_end)
                        .to_vec(),
                    returns: Vec::new(),
                    body: node.rhs,
                }
            }
            NodeTag::YulFullFunctionDecl => {
                let record: YulFullFnProto = self.extra(node.lhs);
                YulFunctionView {
                    identifier: record.identifier,
                    params: self
                        .extra_slice(record.params_start, record.params_end)
                        .to_vec(),
                    returns: self
                        .extra_slice(record.returns_start, record.returns_end)
                        .to_vec(),
                    body: node.rhs,
                }
            }
            tag => unreachable!("yul_function_decl on {:?}", tag),
        }
    }

    /// The item nodes of a `Specifiers` run.
    pub fn specifier_items(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::Specifiers);
        self.extra_slice(node.lhs, node.rhs).to_vec()
    }

    /// The overridden path nodes of an `OverrideSpecifier` (empty when bare).
    pub fn override_paths(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let node = self.node(index);
        debug_assert_eq!(node.tag, NodeTag::OverrideSpecifier);
        self.extra_slice(node.lhs, node.rhs).to_vec()
    }
}
