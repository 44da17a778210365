//! Tests for parser hardening and robustness
//!
//! Malformed or pathological input must produce errors rather than hang or
//! overflow the stack.

use sift_parser::parse;
use sift_parser::{ParseErrorKind, SyntaxError};

#[test]
fn test_deep_nesting_hits_the_limit() {
    // Debug builds use large frames; give the recursion room before the limit
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let source = format!("x = {}1{};", "(".repeat(2000), ")".repeat(2000));
            parse(&source).unwrap_err()
        })
        .unwrap();
    let errors = handle.join().unwrap();
    assert!(errors.iter().any(|e| matches!(
        e,
        SyntaxError::Parse(p) if matches!(p.kind, ParseErrorKind::ParserLimitExceeded { .. })
    )));
}

#[test]
fn test_moderate_nesting_is_fine() {
    let source = format!("x = {}1{};", "[".repeat(50), "]".repeat(50));
    assert!(parse(&source).is_ok());
}

#[test]
fn test_unclosed_block_errors() {
    assert!(parse("function f() { if (x) {").is_err());
}

#[test]
fn test_unclosed_template_substitution_errors() {
    assert!(parse("let s = `a ${b`;").is_err());
}

#[test]
fn test_regex_literal_is_reported_as_unsupported() {
    let errors = parse("const re = /ab+c/;").unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        SyntaxError::Parse(p) if matches!(p.kind, ParseErrorKind::Unsupported { .. })
    )));
}

#[test]
fn test_garbage_does_not_hang() {
    let source = ")]} ) ] } ;;; => => ? : ...".repeat(100);
    assert!(parse(&source).is_err());
}

#[test]
fn test_many_statements() {
    let source: String = (0..5000).map(|i| format!("let v{i} = {i};\n")).collect();
    let ast = parse(&source).unwrap();
    assert_eq!(ast.root().unwrap().children().len(), 5000);
}
