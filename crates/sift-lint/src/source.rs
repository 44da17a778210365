//! Source accessor and fix staging.
//!
//! Rules never slice the source string themselves: they ask [`SourceCode`]
//! for the text of a node and stage replacements through a [`Fixer`]. Nodes
//! without a range yield empty text and no fixes.

use sift_parser::{NodeRef, Span};

use crate::rule::LintFix;

/// Read-only view of the file being linted.
pub struct SourceCode<'a> {
    text: &'a str,
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
}

impl<'a> SourceCode<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// The whole file.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Exact source text of a node, or `""` when it has no usable range.
    pub fn get_text(&self, node: NodeRef<'_>) -> &'a str {
        self.try_get_text(node).unwrap_or("")
    }

    /// Exact source text of a node, if its range is known and valid.
    pub fn try_get_text(&self, node: NodeRef<'_>) -> Option<&'a str> {
        let range = node.range()?;
        self.text.get(range.start..range.end)
    }

    /// Text between two byte offsets; empty when the offsets are invalid.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        if start > end {
            return "";
        }
        self.text.get(start..end).unwrap_or("")
    }

    /// Leading whitespace of the line containing `offset`.
    pub fn line_indent(&self, offset: usize) -> &'a str {
        let line_start = self.line_start(offset);
        let rest = self.text.get(line_start..).unwrap_or("");
        let width = rest
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(rest.len());
        &rest[..width]
    }

    /// 1-based line number of `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }

    fn line_start(&self, offset: usize) -> usize {
        self.line_starts[self.line_of(offset).saturating_sub(1)]
    }

    /// Span with line/column information for a byte range.
    pub fn span(&self, start: usize, end: usize) -> Span {
        let line_start = self.line_start(start);
        let column = self.slice(line_start, start).chars().count() + 1;
        Span::new(start, end, self.line_of(start) as u32, column as u32)
    }
}

/// Stages replacements for a report.
pub struct Fixer<'s> {
    source: &'s SourceCode<'s>,
}

impl<'s> Fixer<'s> {
    pub fn new(source: &'s SourceCode<'s>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'s SourceCode<'s> {
        self.source
    }

    /// Replace the whole span of `node`.
    pub fn replace_text(&self, node: NodeRef<'_>, text: impl Into<String>) -> Option<LintFix> {
        let range = node.range()?;
        self.replace_range(range.start, range.end, text)
    }

    /// Replace the bytes `start..end`.
    pub fn replace_range(
        &self,
        start: usize,
        end: usize,
        text: impl Into<String>,
    ) -> Option<LintFix> {
        if start > end || self.source.text.get(start..end).is_none() {
            return None;
        }
        Some(LintFix {
            span: self.source.span(start, end),
            replacement: text.into(),
        })
    }
}
