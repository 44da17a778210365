//! Multi-pass fixing, overlap handling and robustness against odd trees.

use sift_lint::{LintConfig, Linter, Severity};
use sift_parser::ast::{
    ExpressionStatement, Identifier, Literal, LiteralValue, LogicalExpression, LogicalOperator, Program,
};
use sift_parser::{Ast, Node};

#[test]
fn nested_fixes_converge_over_passes() {
    // The inner `||` and the outer `+` chain overlap, so they land in
    // different passes.
    let outcome = Linter::new().fix_source("const s = 'id: ' + (id || '');", "a.ts");
    assert_eq!(outcome.output, "const s = `id: ${(id ?? '')}`;");
    assert!(outcome.passes >= 1);
    assert_eq!(outcome.fixes_applied, 2);
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn early_return_applies_once_per_pass() {
    let source = "function f(a) {\n  if (a) {\n    if (a.b) {\n      go();\n    }\n  }\n}\n";
    let outcome = Linter::new().fix_source(source, "a.ts");
    assert_eq!(
        outcome.output,
        "function f(a) {\n  if (!a) {\n    return;\n  }\n  if (a.b) {\n    go();\n  }\n}\n"
    );
    // The flattened if is neither first nor wrapping another if
    assert!(outcome.diagnostics.iter().all(|d| d.code != "S2003"));
}

#[test]
fn fixing_is_idempotent() {
    let source = "const n = user && user.name;\nconst all = a.concat(b);\nif (xs.indexOf(x) === -1) {}\n";
    let once = Linter::new().fix_source(source, "a.ts");
    let twice = Linter::new().fix_source(&once.output, "a.ts");
    assert_eq!(once.output, "const n = user?.name;\nconst all = [...a, ...b];\nif (!xs.includes(x)) {}\n");
    assert_eq!(twice.output, once.output);
    assert_eq!(twice.fixes_applied, 0);
}

#[test]
fn disabled_rules_do_not_fix() {
    let mut config = LintConfig::new();
    config.set_severity("prefer-spread", Severity::Off);
    let outcome = Linter::with_config(config).fix_source("x = a.concat(b);", "a.ts");
    assert_eq!(outcome.output, "x = a.concat(b);");
}

#[test]
fn unfixable_diagnostics_remain() {
    let outcome = Linter::new().fix_source("Deno.remove(p);\nx = y || 0;", "a.ts");
    assert_eq!(outcome.output, "Deno.remove(p);\nx = y ?? 0;");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].code, "S1001");
}

#[test]
fn parse_errors_are_reported_not_fixed() {
    let outcome = Linter::new().fix_source("const = 1;", "a.ts");
    assert_eq!(outcome.output, "const = 1;");
    assert_eq!(outcome.diagnostics[0].rule, "parse-error");
}

/// `a || ''` built by hand without any ranges, plus an unknown node.
fn rangeless_tree() -> Ast {
    let mut ast = Ast::new();
    let left = ast.alloc(Node::Identifier(Identifier::new("a")), None);
    let right = ast.alloc(
        Node::Literal(Literal {
            value: LiteralValue::String(String::new()),
            raw: "''".to_string(),
        }),
        None,
    );
    let logical = ast.alloc(
        Node::LogicalExpression(LogicalExpression {
            operator: LogicalOperator::Or,
            left,
            right,
        }),
        None,
    );
    let stmt = ast.alloc(Node::ExpressionStatement(ExpressionStatement { expression: logical }), None);
    let unknown = ast.alloc(
        Node::Unknown {
            type_name: "JSXElement".to_string(),
        },
        None,
    );
    let program = ast.alloc(Node::Program(Program { body: vec![stmt, unknown] }), None);
    ast.set_root(program);
    ast.link_parents();
    ast
}

#[test]
fn missing_ranges_report_without_fix() {
    let ast = rangeless_tree();
    let result = Linter::new().lint_ast(&ast, "", "host.ts");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, "S3001");
    assert!(result.diagnostics[0].fix.is_none());
    assert_eq!(result.fixable_count, 0);
}
