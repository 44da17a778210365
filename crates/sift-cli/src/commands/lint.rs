//! `sift lint`: lint source files and optionally apply fixes.

use std::path::{Path, PathBuf};

use anyhow::Context;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use serde::Serialize;
use sift_lint::{LintConfig, LintDiagnostic, Linter, Severity};
use tracing::{debug, warn};

use super::files::collect_source_files;
use crate::output::{plural, resolve_color_choice, StyledOutput};
use crate::{ColorWhen, Format};

/// File name looked up from the working directory upwards.
pub const CONFIG_FILE: &str = "sift.toml";

pub struct LintOptions {
    pub fix: bool,
    pub format: Format,
    pub config: Option<PathBuf>,
    pub color: ColorWhen,
}

struct FileLintResult {
    path: PathBuf,
    source: String,
    diagnostics: Vec<LintDiagnostic>,
}

#[derive(Default)]
struct Totals {
    files: usize,
    errors: usize,
    warnings: usize,
    fixable: usize,
    fixed_issues: usize,
    fixed_files: usize,
}

/// Run the command. Returns `true` when any error-severity diagnostic
/// remains, in which case the process should exit with status 1.
pub fn execute(paths: &[String], options: &LintOptions) -> anyhow::Result<bool> {
    let config = load_config(options.config.as_deref())?;
    let linter = Linter::with_config(config);

    let source_files = collect_source_files(paths)?;
    if source_files.is_empty() {
        eprintln!("No JavaScript or TypeScript files found.");
        return Ok(true);
    }

    let mut totals = Totals {
        files: source_files.len(),
        ..Totals::default()
    };
    let mut results: Vec<FileLintResult> = Vec::new();

    for path in &source_files {
        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "cannot read file");
                totals.errors += 1;
                continue;
            }
        };
        let path_str = path.display().to_string();

        let (source, diagnostics) = if options.fix {
            let outcome = linter.fix_source(&source, &path_str);
            if outcome.output != source {
                std::fs::write(path, &outcome.output)
                    .with_context(|| format!("cannot write {}", path_str))?;
                totals.fixed_issues += outcome.fixes_applied;
                totals.fixed_files += 1;
                debug!(file = %path_str, fixes = outcome.fixes_applied, passes = outcome.passes, "wrote fixes");
            }
            (outcome.output, outcome.diagnostics)
        } else {
            (source.clone(), linter.lint_source(&source, &path_str).diagnostics)
        };

        for diag in &diagnostics {
            match diag.severity {
                Severity::Error => totals.errors += 1,
                Severity::Warn => totals.warnings += 1,
                Severity::Off => {}
            }
            if diag.fix.is_some() {
                totals.fixable += 1;
            }
        }

        if !diagnostics.is_empty() {
            results.push(FileLintResult {
                path: path.clone(),
                source,
                diagnostics,
            });
        }
    }

    match options.format {
        Format::Json => emit_json(&results)?,
        Format::Pretty => {
            emit_pretty(&results, options.color)?;
            let mut out = StyledOutput::new(resolve_color_choice(options.color));
            print_fix_status(&mut out, &totals, options.fix);
            print_summary(&mut out, &totals);
            out.flush();
        }
    }

    Ok(totals.errors > 0)
}

// ── Pretty output (codespan) ───────────────────────────────────────────────

fn to_codespan(file_id: usize, diag: &LintDiagnostic) -> Option<Diagnostic<usize>> {
    let base = match diag.severity {
        Severity::Error => Diagnostic::error(),
        Severity::Warn => Diagnostic::warning(),
        Severity::Off => return None,
    };

    let mut notes = diag.notes.clone();
    if let Some(fix) = &diag.fix {
        notes.push(format!("fix: replace with `{}`", fix.replacement));
    }

    Some(
        base.with_message(&diag.message)
            .with_code(diag.code)
            .with_labels(vec![
                Label::primary(file_id, diag.span.start..diag.span.end).with_message(diag.rule)
            ])
            .with_notes(notes),
    )
}

fn emit_pretty(results: &[FileLintResult], color: ColorWhen) -> anyhow::Result<()> {
    let writer = term::termcolor::StandardStream::stdout(resolve_color_choice(color));
    let config = term::Config::default();

    for file_result in results {
        let mut files = SimpleFiles::new();
        let file_id = files.add(file_result.path.display().to_string(), file_result.source.as_str());

        for lint_diag in &file_result.diagnostics {
            if let Some(diag) = to_codespan(file_id, lint_diag) {
                term::emit(&mut writer.lock(), &config, &files, &diag)?;
            }
        }
    }
    Ok(())
}

// ── JSON output ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    diagnostics: &'a [LintDiagnostic],
}

fn emit_json(results: &[FileLintResult]) -> anyhow::Result<()> {
    let reports: Vec<FileReport<'_>> = results
        .iter()
        .map(|r| FileReport {
            file: r.path.display().to_string(),
            diagnostics: &r.diagnostics,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

// ── Colored summary ────────────────────────────────────────────────────────

fn print_fix_status(out: &mut StyledOutput, totals: &Totals, fix: bool) {
    if fix && totals.fixed_issues > 0 {
        out.newline();
        out.success(&format!(
            "Fixed {} in {}.",
            plural(totals.fixed_issues, "issue"),
            plural(totals.fixed_files, "file")
        ));
        out.newline();
    }
    if !fix && totals.fixable > 0 {
        out.newline();
        out.info(&format!(
            "{} auto-fixable. Run `sift lint --fix` to apply.",
            plural(totals.fixable, "issue")
        ));
        out.newline();
    }
}

fn print_summary(out: &mut StyledOutput, totals: &Totals) {
    out.newline();
    out.plain(&format!("Linted {}", plural(totals.files, "file")));
    if totals.errors == 0 && totals.warnings == 0 {
        out.plain(": ");
        out.success("no issues found.");
        out.newline();
        return;
    }

    out.plain(": ");
    if totals.errors > 0 {
        out.error(&plural(totals.errors, "error"));
    }
    if totals.errors > 0 && totals.warnings > 0 {
        out.plain(", ");
    }
    if totals.warnings > 0 {
        out.warning(&plural(totals.warnings, "warning"));
    }
    out.plain(".");
    out.newline();
}

// ── Config loading ─────────────────────────────────────────────────────────

fn load_config(explicit: Option<&Path>) -> anyhow::Result<LintConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::current_dir().ok().and_then(|dir| find_config(&dir)),
    };

    match path {
        Some(path) => {
            debug!(config = %path.display(), "loading config");
            LintConfig::from_file(&path).with_context(|| format!("invalid config {}", path.display()))
        }
        None => Ok(LintConfig::new()),
    }
}

/// Walk up from `start` to find `sift.toml`.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
