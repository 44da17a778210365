//! Rule: prefer-array-includes (S3003)
//!
//! `list.indexOf(x) !== -1` reads better as `list.includes(x)`.

use sift_parser::{NodeRef, NodeType};

use crate::fixes::array_includes;
use crate::predicates::is_index_of_comparison;
use crate::rule::*;

pub struct PreferArrayIncludes;

static META: RuleMeta = RuleMeta {
    name: "prefer-array-includes",
    code: "S3003",
    description: "Prefer 'includes()' over 'indexOf()' comparisons",
    category: Category::BestPractice,
    default_severity: Severity::Warn,
    fixable: true,
};

impl LintRule for PreferArrayIncludes {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::BinaryExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        let Some(comparison) = is_index_of_comparison(node) else {
            return;
        };
        ctx.report_with_fix(node, "Use 'includes()' to check for membership", |fixer| {
            let source = fixer.source();
            let replacement = array_includes(
                source.try_get_text(comparison.receiver)?,
                source.try_get_text(comparison.argument)?,
                comparison.found,
            );
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

    fn fix_for(source: &str) -> Option<String> {
        lint(source)
            .into_iter()
            .find(|d| d.code == "S3003")
            .and_then(|d| d.fix)
            .map(|f| f.replacement)
    }

    #[test]
    fn test_found_comparisons() {
        assert_eq!(fix_for("if (tags.indexOf(t) !== -1) {}").as_deref(), Some("tags.includes(t)"));
        assert_eq!(fix_for("if (tags.indexOf(t) > -1) {}").as_deref(), Some("tags.includes(t)"));
        assert_eq!(fix_for("if (tags.indexOf(t) >= 0) {}").as_deref(), Some("tags.includes(t)"));
    }

    #[test]
    fn test_missing_comparisons() {
        assert_eq!(fix_for("if (tags.indexOf(t) === -1) {}").as_deref(), Some("!tags.includes(t)"));
        assert_eq!(fix_for("if (tags.indexOf(t) < 0) {}").as_deref(), Some("!tags.includes(t)"));
    }

    #[test]
    fn test_position_uses_ok() {
        assert!(!has_rule(&lint("const i = s.indexOf(c);"), "S3003"));
        assert!(!has_rule(&lint("if (s.indexOf(c) === 0) {}"), "S3003"));
        assert!(!has_rule(&lint("if (s.indexOf(c, 2) !== -1) {}"), "S3003"));
        assert!(!has_rule(&lint("if (-1 !== s.indexOf(c)) {}"), "S3003"));
    }
}
