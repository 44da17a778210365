//! Rule registry: all available lint rules.

pub mod async_function_naming;
pub mod prefer_array_every;
pub mod prefer_array_includes;
pub mod prefer_array_some;
pub mod prefer_const_assertion;
pub mod prefer_early_return;
pub mod prefer_nullish_coalescing;
pub mod prefer_optional_chain;
pub mod prefer_promise_reject_errors;
pub mod prefer_spread;
pub mod prefer_template_literal;
pub mod require_error_handling;

use crate::config::RuleOptions;
use crate::rule::LintRule;

/// Returns all available lint rules, deprecated ones included, built with
/// the given options.
pub fn all_rules(options: &RuleOptions) -> Vec<Box<dyn LintRule>> {
    let mut rules: Vec<Box<dyn LintRule>> = vec![
        // Correctness
        Box::new(require_error_handling::RequireErrorHandling::new(options)),
        Box::new(prefer_promise_reject_errors::PreferPromiseRejectErrors::new(options)),
        // Style
        Box::new(async_function_naming::AsyncFunctionNaming::new(options)),
        Box::new(prefer_template_literal::PreferTemplateLiteral),
        Box::new(prefer_early_return::PreferEarlyReturn),
        // Best Practice
        Box::new(prefer_nullish_coalescing::PreferNullishCoalescing),
        Box::new(prefer_optional_chain::PreferOptionalChain),
        Box::new(prefer_array_includes::PreferArrayIncludes),
        Box::new(prefer_array_every::PreferArrayEvery),
        Box::new(prefer_array_some::PreferArraySome),
        Box::new(prefer_spread::PreferSpread),
        Box::new(prefer_const_assertion::PreferConstAssertion),
    ];
    rules.extend(crate::legacy::all_rules(options));
    rules
}
