//! Rule: prefer-template-literal (S2002)
//!
//! `'Hello, ' + name + '!'` becomes `` `Hello, ${name}!` ``. Only the
//! outermost `+` of a chain reports.

use sift_parser::ast::BinaryOperator;
use sift_parser::{NodeRef, NodeType};

use crate::classify::{as_binary_expression, is_binary_with};
use crate::fixes::{template_literal, template_parts};
use crate::rule::*;

pub struct PreferTemplateLiteral;

static META: RuleMeta = RuleMeta {
    name: "prefer-template-literal",
    code: "S2002",
    description: "Prefer template literals over string concatenation",
    category: Category::Style,
    default_severity: Severity::Warn,
    fixable: true,
};

impl LintRule for PreferTemplateLiteral {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::BinaryExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !is_binary_with(node, BinaryOperator::Add) {
            return;
        }
        // Inner links of a `+` chain are covered by the outermost one
        let nested = node.parent().is_some_and(|parent| {
            is_binary_with(parent, BinaryOperator::Add)
                && as_binary_expression(parent).is_some_and(|b| b.left == node.id())
        });
        if nested {
            return;
        }

        let Some(parts) = template_parts(ctx.source(), node) else {
            return;
        };
        let replacement = template_literal(&parts);
        ctx.report_with_fix(node, "Prefer a template literal over string concatenation", |fixer| {
            fixer.replace_text(node, replacement)
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::rule::LintDiagnostic;
    use crate::Linter;

    fn lint(source: &str) -> Vec<LintDiagnostic> {
        let linter = Linter::new();
        linter.lint_source(source, "test.ts").diagnostics
    }

    fn has_rule(diags: &[LintDiagnostic], code: &str) -> bool {
        diags.iter().any(|d| d.code == code)
    }

    fn fixes_for(source: &str) -> Vec<String> {
        lint(source)
            .into_iter()
            .filter(|d| d.code == "S2002")
            .filter_map(|d| d.fix)
            .map(|f| f.replacement)
            .collect()
    }

    #[test]
    fn test_concatenation_flagged_once() {
        assert_eq!(
            fixes_for("const msg = 'Hello, ' + name + '!';"),
            vec!["`Hello, ${name}!`".to_string()]
        );
    }

    #[test]
    fn test_numeric_prefix_kept_together() {
        assert_eq!(fixes_for("el.style.width = w + pad + 'px';"), vec!["`${w + pad}px`".to_string()]);
    }

    #[test]
    fn test_pure_strings_or_numbers_ok() {
        assert!(!has_rule(&lint("const a = 'x' + 'y';"), "S2002"));
        assert!(!has_rule(&lint("const n = a + b;"), "S2002"));
        assert!(!has_rule(&lint("const t = `${a}`;"), "S2002"));
    }

    #[test]
    fn test_parenthesized_chain_reports_inside() {
        // The parenthesized `+` is an opaque operand of the outer one
        let fixes = fixes_for("total = count + (label + ':');");
        assert_eq!(fixes, vec!["`${label}:`".to_string()]);
    }
}
