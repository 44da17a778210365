//! Rule: async-function-naming (S2001)
//!
//! Named async function declarations must end with the configured suffix
//! (`Async` by default). The fix renames the declaration only; call sites
//! are left alone.

use sift_parser::{NodeRef, NodeType};

use crate::classify::{as_function_declaration, identifier_name};
use crate::config::RuleOptions;
use crate::fixes::add_suffix;
use crate::predicates::is_async_without_suffix;
use crate::rule::*;

pub struct AsyncFunctionNaming {
    suffix: String,
}

impl AsyncFunctionNaming {
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            suffix: options.async_suffix.clone(),
        }
    }
}

static META: RuleMeta = RuleMeta {
    name: "async-function-naming",
    code: "S2001",
    description: "Require async function names to end with a suffix",
    category: Category::Style,
    default_severity: Severity::Warn,
    fixable: true,
};

impl LintRule for AsyncFunctionNaming {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::FunctionDeclaration]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !is_async_without_suffix(node, &self.suffix) {
            return;
        }
        let Some(id) = as_function_declaration(node).and_then(|f| f.id).map(|id| node.get(id)) else {
            return;
        };
        let Some(name) = identifier_name(id) else {
            return;
        };

        let suffix = self.suffix.as_str();
        ctx.report_with_fix(
            node,
            format!("Async function '{name}' should be named '{name}{suffix}'"),
            |fixer| {
                let start = node.range()?.start;
                let end = id.range()?.end;
                let header = fixer.source().slice(start, end);
                fixer.replace_range(start, end, add_suffix(header, name, suffix)?)
            },
        );
    }
}
