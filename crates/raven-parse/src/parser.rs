use drop_bomb::DropBomb;
use raven_errors::Diagnostic;
use raven_syntax::{Builder, GreenNode, SyntaxKind, SyntaxSet};
use raven_tokenizer::{Token, Tokenizer};
use salsa::Database;

pub(crate) struct Parser<'db> {
    db: &'db dyn Database,
    text: &'db str,
    tokenizer: Tokenizer<'db>,
    events: Vec<Event>,
    diagnostics: Vec<Diagnostic>,
}

impl<'db> Parser<'db> {
    pub(crate) fn new(db: &'db dyn Database, text: &'db str) -> Self {
        Self {
            db,
            text,
            tokenizer: Tokenizer::new(text),
            events: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.tokenizer.peek().kind
    }

    pub(crate) fn advance(&mut self) {
        if self.peek_kind() == SyntaxKind::EOF {
            return;
        }

        let token = self.tokenizer.next_token();
        self.events.push(Event::Token(token));
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    /// Advances over `kind` and reports whether it was there.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            return true;
        }
        false
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind, message: &str) {
        if !self.eat(kind) {
            self.error(message);
        }
    }

    pub(crate) fn error(&mut self, message: &str) {
        self.diagnostics.push(Diagnostic::error(message, self.tokenizer.peek().kind_range));
    }

    /// Reports an error and swallows the offending token into an ERROR node.
    pub(crate) fn error_and_bump(&mut self, message: &str) {
        self.error(message);
        if !self.at(SyntaxKind::EOF) {
            let m = self.start();
            self.advance();
            m.complete(self, SyntaxKind::ERROR);
        }
    }

    /// Like `error_and_bump`, but leaves tokens the caller can resynchronize
    /// on untouched.
    pub(crate) fn error_recover(&mut self, message: &str, recovery: &SyntaxSet) {
        if recovery.contains(self.peek_kind()) {
            self.error(message);
        } else {
            self.error_and_bump(message);
        }
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn build_tree(self) -> (GreenNode<'db>, Vec<Diagnostic>) {
        let Parser { db, text, tokenizer: _, mut events, diagnostics } = self;
        let mut builder = Builder::new(db, text);
        let mut forward_parents = Vec::new();

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == SyntaxKind::TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent, .. } => {
                                if kind != SyntaxKind::TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    for kind in forward_parents.drain(..).rev() {
                        builder.start_node(kind);
                    }
                }
                Event::Finish => {
                    builder.finish_node();
                }
                Event::Token(Token { leading, kind, kind_range, trailing }) => {
                    builder.token(leading, kind, kind_range, trailing);
                }
            }
        }

        (builder.finish(), diagnostics)
    }
}

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    Token(Token),
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Event::Start { kind: SyntaxKind::TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            position: pos,
            bomb: DropBomb::new("Marker must be either completed or abandoned"),
        }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker::new(self.position)
    }
}

pub(crate) struct CompletedMarker {
    pos: u32,
}

impl CompletedMarker {
    fn new(pos: u32) -> Self {
        CompletedMarker { pos }
    }

    /// Opens a new node that will wrap the completed one.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}
