//! `sift rules`: list the rules of the plugin.

use serde::Serialize;
use sift_lint::{Category, Plugin, RuleOptions, Severity};

use crate::output::{resolve_color_choice, StyledOutput};
use crate::{ColorWhen, Format};

#[derive(Debug, Serialize)]
struct RuleInfo {
    id: &'static str,
    code: &'static str,
    category: Category,
    severity: Severity,
    fixable: bool,
    description: &'static str,
}

fn rule_infos(plugin: &Plugin) -> Vec<RuleInfo> {
    plugin
        .rules
        .iter()
        .map(|rule| {
            let meta = rule.meta();
            RuleInfo {
                id: meta.name,
                code: meta.code,
                category: meta.category,
                severity: meta.default_severity,
                fixable: meta.fixable,
                description: meta.description,
            }
        })
        .collect()
}

pub fn execute(format: Format, color: ColorWhen) -> anyhow::Result<()> {
    let plugin = Plugin::new(&RuleOptions::default());
    let infos = rule_infos(&plugin);

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    let width = infos.iter().map(|info| info.id.len()).max().unwrap_or(0);
    let mut out = StyledOutput::new(resolve_color_choice(color));
    for info in &infos {
        out.dim(&format!("{}  ", info.code));
        out.bold(&format!("{:<width$}", info.id, width = width));
        out.plain(&format!("  {:<14}", info.category.to_string()));
        let severity = format!("{:<5}", info.severity.as_str());
        match info.severity {
            Severity::Error => out.error(&severity),
            Severity::Warn => out.warning(&severity),
            Severity::Off => out.dim(&severity),
        }
        if info.fixable {
            out.info("  fixable");
        }
        out.newline();
    }
    out.newline();
    out.plain(&format!("{} rules in plugin '{}'.", infos.len(), plugin.name));
    out.newline();
    out.flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_infos() {
        let plugin = Plugin::new(&RuleOptions::default());
        let infos = rule_infos(&plugin);
        assert_eq!(infos.len(), plugin.rules.len());

        let error_handling = infos.iter().find(|i| i.id == "require-error-handling").unwrap();
        assert_eq!(error_handling.code, "S1001");
        assert_eq!(error_handling.severity, Severity::Error);
        assert!(!error_handling.fixable);

        let legacy = infos.iter().filter(|i| i.category == Category::Deprecated);
        assert!(legacy.clone().count() > 0);
        assert!(legacy.into_iter().all(|i| i.severity == Severity::Off));
    }

    #[test]
    fn test_rule_info_json() {
        let plugin = Plugin::new(&RuleOptions::default());
        let json = serde_json::to_value(rule_infos(&plugin)).unwrap();
        let first = &json[0];
        assert!(first["id"].is_string());
        assert!(first["fixable"].is_boolean());
    }
}
