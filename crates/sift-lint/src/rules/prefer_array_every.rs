//! Rule: prefer-array-every (S3004)
//!
//! A counting loop whose guards return `false`, followed by `return true`,
//! is `return arr.every(...)`.

use sift_parser::{NodeRef, NodeType};

use crate::chains::{match_array_method_loop, ArrayMethod, TextEquivalence};
use crate::fixes::synthesize_array_method_call;
use crate::rule::*;

pub struct PreferArrayEvery;

static META: RuleMeta = RuleMeta {
    name: "prefer-array-every",
    code: "S3004",
    description: "Prefer 'every()' over a loop that returns false early",
    category: Category::BestPractice,
    default_severity: Severity::Warn,
    fixable: true,
};

/// Shared by the `every` and `some` rules: report the loop and replace it,
/// together with the return that follows, by `return X.method(...)`.
pub(crate) fn check_array_method_loop(node: NodeRef<'_>, ctx: &mut RuleContext<'_>, method: ArrayMethod) {
    let equivalence = TextEquivalence::new(ctx.source());
    let Some(matched) = match_array_method_loop(node, method, &equivalence) else {
        return;
    };
    let Some(array) = ctx.source().try_get_text(matched.array) else {
        return;
    };

    let message = format!("This loop can be replaced by '{array}.{}()'", method.name());
    ctx.report_with_fix(node, message, |fixer| {
        let source = fixer.source();
        let call = synthesize_array_method_call(source, &matched)?;
        let start = node.range()?.start;
        let tail = matched.trailing_return.range()?;
        let semi = if source.slice(tail.start, tail.end).ends_with(';') { ";" } else { "" };
        fixer.replace_range(start, tail.end, format!("return {call}{semi}"))
    });
}

impl LintRule for PreferArrayEvery {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::ForStatement]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        check_array_method_loop(node, ctx, ArrayMethod::Every);
    }
}
