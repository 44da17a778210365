//! Plugin registry: the named set of rules the host loads.

use crate::config::RuleOptions;
use crate::rule::LintRule;
use crate::rules;

/// The rule set published under one name.
pub struct Plugin {
    pub name: &'static str,
    pub rules: Vec<Box<dyn LintRule>>,
}

impl Plugin {
    /// Build every rule with the given options.
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            name: "sift",
            rules: rules::all_rules(options),
        }
    }

    /// Look a rule up by its id.
    pub fn rule(&self, id: &str) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|rule| rule.meta().name == id)
            .map(|rule| rule.as_ref())
    }

    /// Rule ids in registration order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.meta().name).collect()
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::rule::{Category, Severity};

    #[test]
    fn test_ids_unique() {
        let plugin = Plugin::new(&RuleOptions::default());
        let ids = plugin.rule_ids();
        let unique: FxHashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 15);
        assert_eq!(plugin.name, "sift");

        let codes: FxHashSet<_> = plugin.rules.iter().map(|r| r.meta().code).collect();
        assert_eq!(codes.len(), ids.len());
    }

    #[test]
    fn test_lookup() {
        let plugin = Plugin::new(&RuleOptions::default());
        let rule = plugin.rule("prefer-optional-chain").unwrap();
        assert_eq!(rule.meta().code, "S3002");
        assert!(plugin.rule("no-such-rule").is_none());
    }

    #[test]
    fn test_deprecated_rules_off_by_default() {
        let plugin = Plugin::new(&RuleOptions::default());
        for rule in &plugin.rules {
            let meta = rule.meta();
            assert_eq!(
                meta.category == Category::Deprecated,
                meta.default_severity == Severity::Off,
                "{}",
                meta.name
            );
            assert!(!rule.listeners().is_empty(), "{} listens to nothing", meta.name);
        }
    }
}
