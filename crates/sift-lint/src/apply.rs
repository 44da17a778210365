//! Fix application.
//!
//! Fixes are sorted by start offset; a fix overlapping one already accepted
//! is skipped (it will be reconsidered on the next lint pass). Accepted fixes
//! are applied back to front so earlier offsets stay valid.

use tracing::debug;

use crate::rule::LintFix;

/// Result of applying one round of fixes.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFixes {
    pub output: String,
    pub applied: usize,
    pub skipped: usize,
}

pub fn apply_fixes(source: &str, fixes: &[&LintFix]) -> AppliedFixes {
    let mut sorted: Vec<&LintFix> = fixes.to_vec();
    sorted.sort_by_key(|fix| (fix.span.start, fix.span.end));

    let mut accepted: Vec<&LintFix> = Vec::with_capacity(sorted.len());
    let mut skipped = 0;
    let mut last_end = 0;
    for fix in sorted {
        let (start, end) = (fix.span.start, fix.span.end);
        let valid = start <= end && source.get(start..end).is_some();
        if !valid || (!accepted.is_empty() && start < last_end) {
            debug!(start, end, "skipping overlapping or invalid fix");
            skipped += 1;
            continue;
        }
        last_end = end;
        accepted.push(fix);
    }

    let mut output = source.to_string();
    for fix in accepted.iter().rev() {
        output.replace_range(fix.span.start..fix.span.end, &fix.replacement);
    }

    AppliedFixes {
        output,
        applied: accepted.len(),
        skipped,
    }
}
