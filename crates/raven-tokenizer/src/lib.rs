//! Single-pass tokenizer for Raven source text.
//!
//! Whitespace and line comments never become tokens of their own; they are
//! attached to the neighboring token as leading/trailing trivia, so the
//! token stream concatenated with its trivia reproduces the input exactly.

mod cursor;

use cursor::{Cursor, EOF_CHAR};
pub use raven_syntax::SyntaxKind;
use raven_syntax::SyntaxKind::*;
use raven_syntax::{GreenTrivia, TriviaPiece, TriviaPieceKind};
use text_size::{TextRange, TextSize};

#[derive(Debug, Clone)]
pub struct Token {
    pub leading: GreenTrivia,
    pub kind: SyntaxKind,
    pub kind_range: TextRange,
    pub trailing: GreenTrivia,
}

impl Token {
    const EOF: Self = Self {
        kind: EOF,
        kind_range: TextRange::empty(TextSize::new(0)),
        leading: GreenTrivia::empty(),
        trailing: GreenTrivia::empty(),
    };
}

pub struct Tokenizer<'db> {
    text: &'db str,
    cursor: Cursor<'db>,
    current: Token,
    trivia_pieces: Vec<TriviaPiece>,
}

impl<'db> Tokenizer<'db> {
    pub fn new(text: &'db str) -> Self {
        let mut tokenizer = Self {
            text,
            cursor: Cursor::new(text),
            current: Token::EOF,
            trivia_pieces: Vec::with_capacity(4),
        };
        tokenizer.next_token();
        tokenizer
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    fn offset(&self) -> TextSize {
        TextSize::new(self.text.len() as u32) - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        TextRange::at(end - self.cursor.pos_within_token(), self.cursor.pos_within_token())
    }

    fn text(&self) -> &'db str {
        &self.text[self.range()]
    }

    /// Returns the previously peeked token and advances past it.
    pub fn next_token(&mut self) -> Token {
        self.trivia();
        let trailing_start = self.trivia_pieces.len();
        let (kind, kind_range) = self.syntax_kind();
        self.trivia();

        let (leading, trailing) = self.trivia_pieces.split_at(trailing_start);
        let leading = GreenTrivia::new(leading);
        let trailing = GreenTrivia::new(trailing);

        self.trivia_pieces.clear();
        std::mem::replace(&mut self.current, Token { leading, kind, kind_range, trailing })
    }

    fn trivia(&mut self) {
        loop {
            let kind = match self.cursor.peek() {
                '/' if self.cursor.second() == '/' => {
                    self.cursor.advance_while(|c| c != '\n');
                    TriviaPieceKind::SingleLineComment
                }
                first_char => {
                    if first_char.is_ascii_whitespace() {
                        self.cursor.advance_while(|ch| ch.is_ascii_whitespace());
                        TriviaPieceKind::Whitespace
                    } else {
                        break;
                    }
                }
            };

            self.trivia_pieces.push(TriviaPiece::new(kind, self.cursor.pos_within_token()));
            self.cursor.reset_pos_within_token();
        }
    }

    fn syntax_kind(&mut self) -> (SyntaxKind, TextRange) {
        if self.cursor.peek() == EOF_CHAR {
            return (EOF, TextRange::empty(self.offset()));
        }

        let kind = match self.cursor.advance() {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ':' => COLON,
            ';' => SEMICOLON,
            ',' => COMMA,
            '.' => DOT,
            '=' if self.cursor.peek() == '=' => {
                self.cursor.advance();
                BINARY_OPERATOR
            }
            '=' => EQ,
            '!' if self.cursor.peek() == '=' => {
                self.cursor.advance();
                BINARY_OPERATOR
            }
            '!' => PREFIX_OPERATOR,
            '<' | '>' => {
                if self.cursor.peek() == '=' {
                    self.cursor.advance();
                }
                BINARY_OPERATOR
            }
            '&' if self.cursor.peek() == '&' => {
                self.cursor.advance();
                BINARY_OPERATOR
            }
            '|' if self.cursor.peek() == '|' => {
                self.cursor.advance();
                BINARY_OPERATOR
            }
            '+' | '-' | '*' | '/' | '%' => BINARY_OPERATOR,
            '"' => self.string(),
            first_char @ '0'..='9' => self.number(first_char),
            'A'..='Z' | 'a'..='z' | '_' => {
                self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

                match self.text() {
                    "struct" => STRUCT_KW,
                    "fn" => FN_KW,
                    "let" => LET_KW,
                    "if" => IF_KW,
                    "else" => ELSE_KW,
                    "while" => WHILE_KW,
                    "for" => FOR_KW,
                    "in" => IN_KW,
                    "return" => RETURN_KW,
                    "break" => BREAK_KW,
                    "public" => PUBLIC_KW,
                    "internal" => INTERNAL_KW,
                    "extern" => EXTERN_KW,
                    "operation" => OPERATION_KW,
                    "trait" => TRAIT_KW,
                    _ => NAME,
                }
            }
            _ => UNKNOWN,
        };

        let range = self.range();
        self.cursor.reset_pos_within_token();
        (kind, range)
    }

    fn number(&mut self, _first_char: char) -> SyntaxKind {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == '.' && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
            return FLOAT_NUMBER;
        }

        INT_NUMBER
    }

    fn string(&mut self) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                EOF_CHAR | '\n' => break,
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.peek() != EOF_CHAR {
                        self.cursor.advance();
                    }
                }
                '"' => {
                    self.cursor.advance();
                    break;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }

        STRING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        let mut tokenizer = Tokenizer::new(text);
        let mut kinds = Vec::new();

        loop {
            let token = tokenizer.next_token();
            if token.kind == EOF {
                break;
            }
            kinds.push(token.kind);
        }

        kinds
    }

    #[test]
    fn structure_header() {
        assert_eq!(
            kinds("public extern struct Point {}"),
            [PUBLIC_KW, EXTERN_KW, STRUCT_KW, NAME, LEFT_BRACE, RIGHT_BRACE]
        );
    }

    #[test]
    fn operators_and_literals() {
        assert_eq!(
            kinds("let x = 1 + 2.5 != \"three\";"),
            [
                LET_KW,
                NAME,
                EQ,
                INT_NUMBER,
                BINARY_OPERATOR,
                FLOAT_NUMBER,
                BINARY_OPERATOR,
                STRING,
                SEMICOLON
            ]
        );
    }

    #[test]
    fn comments_become_trivia() {
        let mut tokenizer = Tokenizer::new("// leading\nbreak");
        let token = tokenizer.next_token();

        assert_eq!(token.kind, BREAK_KW);
        assert_eq!(token.leading.pieces().len(), 2);
        assert_eq!(token.leading.pieces()[0].kind, TriviaPieceKind::SingleLineComment);
        assert_eq!(token.leading.pieces()[1].kind, TriviaPieceKind::Whitespace);
    }

    #[test]
    fn trailing_trivia_attaches_to_previous_token() {
        let mut tokenizer = Tokenizer::new("break // after\n");
        let token = tokenizer.next_token();

        assert_eq!(token.kind, BREAK_KW);
        assert!(!token.trailing.is_empty());
        assert_eq!(tokenizer.next_token().kind, EOF);
    }

    #[test]
    fn unknown_characters_are_single_tokens() {
        assert_eq!(kinds("# struct"), [UNKNOWN, STRUCT_KW]);
    }

    #[test]
    fn kind_ranges_cover_the_kind_only() {
        let mut tokenizer = Tokenizer::new("  struct  ");
        let token = tokenizer.next_token();

        assert_eq!(token.kind, STRUCT_KW);
        assert_eq!(token.kind_range, TextRange::new(2.into(), 8.into()));
    }
}
