//! Renders a [`SyntaxError`] as an annotated snippet of the selector.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::SyntaxError;

/// Builder for rendering a selector syntax error against its source.
pub struct SyntaxErrorPrinter<'e, 's> {
    error: &'e SyntaxError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> SyntaxErrorPrinter<'e, 's> {
    pub fn new(error: &'e SyntaxError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    /// Label the snippet with an origin (e.g. `config.json#mainSelector`).
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(&self.error.span, self.source.len());
        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(&self.error.message),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![
            Level::ERROR
                .primary_title(&self.error.message)
                .element(snippet),
        ];
        renderer.render(&report).to_string()
    }
}

/// Zero-width spans (end-of-input errors) widen to one character so the
/// caret has something to point at.
fn adjust_range(span: &std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if span.start == span.end {
        let end = (span.start + 1).min(limit).max(span.start);
        return span.start..end;
    }
    span.clone()
}
