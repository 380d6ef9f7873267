use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextRange;

/// A message anchored to a source range, accumulated during queries and
/// rendered at the edge.
#[salsa::accumulator]
#[derive(Clone, Debug)]
pub struct Diagnostic {
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), range }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_points_at_the_range() {
        let text = "struct {}";
        let diagnostic = Diagnostic::error("expected identifier", TextRange::new(7.into(), 8.into()));

        let rendered =
            diagnostic.render(&Renderer::plain(), "demo.rv", text).to_string();

        assert!(rendered.contains("expected identifier"));
        assert!(rendered.contains("demo.rv"));
    }
}
