//! Deprecated rule variants.
//!
//! Older, differently tuned versions of three rules. They stay registered
//! under their own ids so existing configurations keep working, but are off
//! unless a config enables them.

pub mod legacy_async_function_naming;
pub mod legacy_prefer_nullish_coalescing;
pub mod legacy_prefer_optional_chain;

use crate::config::RuleOptions;
use crate::rule::LintRule;

pub fn all_rules(options: &RuleOptions) -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(legacy_prefer_nullish_coalescing::LegacyPreferNullishCoalescing),
        Box::new(legacy_prefer_optional_chain::LegacyPreferOptionalChain),
        Box::new(legacy_async_function_naming::LegacyAsyncFunctionNaming::new(options)),
    ]
}
