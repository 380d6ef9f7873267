//! Event-driven parser for Raven source text.

use raven_errors::Diagnostic;
use raven_syntax::GreenNode;

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

/// Result of parsing one source file: the green tree plus everything the
/// parser had to complain about. Parsing is total; malformed input ends up
/// under ERROR nodes, never as a missing tree.
pub struct ModuleParse<'db> {
    green: GreenNode<'db>,
    diagnostics: Vec<Diagnostic>,
}

impl<'db> ModuleParse<'db> {
    pub fn green(&self) -> GreenNode<'db> {
        self.green
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

pub fn module<'db>(db: &'db dyn salsa::Database, text: &'db str) -> ModuleParse<'db> {
    let mut parser = parser::Parser::new(db, text);
    grammar::items::module(&mut parser);
    let (green, diagnostics) = parser.build_tree();
    ModuleParse { green, diagnostics }
}
