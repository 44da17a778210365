//! Rule: legacy-async-function-naming (S9003)
//!
//! Like async-function-naming, but also covers async function and arrow
//! expressions bound with `const`/`let`. Reports only; no fix.

use sift_parser::ast::VariableKind;
use sift_parser::{Node, NodeRef, NodeType};

use crate::classify::*;
use crate::config::RuleOptions;
use crate::predicates::is_async_without_suffix;
use crate::rule::*;

pub struct LegacyAsyncFunctionNaming {
    suffix: String,
}

impl LegacyAsyncFunctionNaming {
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            suffix: options.async_suffix.clone(),
        }
    }

    /// Name bound to an async function or arrow by `const`/`let`.
    fn bound_async_name<'a>(&self, declarator: NodeRef<'a>) -> Option<&'a str> {
        let var = as_variable_declarator(declarator)?;
        let declaration = as_variable_declaration(declarator.parent()?)?;
        if declaration.kind == VariableKind::Var {
            return None;
        }
        let is_async = match declarator.get(var.init?).node() {
            Node::FunctionExpression(f) => f.is_async,
            Node::ArrowFunctionExpression(arrow) => arrow.is_async,
            _ => false,
        };
        let name = identifier_name(declarator.get(var.id))?;
        (is_async && !name.ends_with(self.suffix.as_str())).then_some(name)
    }
}

static META: RuleMeta = RuleMeta {
    name: "legacy-async-function-naming",
    code: "S9003",
    description: "Require async functions and async function bindings to end with a suffix",
    category: Category::Deprecated,
    default_severity: Severity::Off,
    fixable: false,
};

impl LintRule for LegacyAsyncFunctionNaming {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::FunctionDeclaration, NodeType::VariableDeclarator]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        let name = if is_async_without_suffix(node, &self.suffix) {
            as_function_declaration(node)
                .and_then(|f| f.id)
                .and_then(|id| identifier_name(node.get(id)))
        } else {
            self.bound_async_name(node)
        };
        if let Some(name) = name {
            let suffix = &self.suffix;
            ctx.report(node, format!("Async function '{name}' should be named '{name}{suffix}'"));
        }
    }
}
