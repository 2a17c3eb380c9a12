use regex::Regex;
use std::sync::LazyLock;

/// Words keep embedded periods so initials like "K.S." survive as one token.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z.]*|[0-9]+|\S").expect("valid history token pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Word,
    Number,
    Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) kind: TokenKind,
    pub(crate) text: &'a str,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Token<'_> {
    pub(crate) fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Separators allowed on either side of a medal word, as in "Chess - Gold - Arjun".
    pub(crate) fn is_connector(&self) -> bool {
        self.kind == TokenKind::Symbol && matches!(self.text, "-" | ":" | "–")
    }

    pub(crate) fn eq_word(&self, expected: &str) -> bool {
        self.text.trim_end_matches('.').eq_ignore_ascii_case(expected)
    }
}

pub(crate) fn tokenize(line: &str) -> Vec<Token<'_>> {
    TOKEN_PATTERN
        .find_iter(line)
        .map(|found| {
            let text = found.as_str();
            let kind = match text.as_bytes().first() {
                Some(byte) if byte.is_ascii_alphabetic() => TokenKind::Word,
                Some(byte) if byte.is_ascii_digit() => TokenKind::Number,
                _ => TokenKind::Symbol,
            };
            Token {
                kind,
                text,
                start: found.start(),
                end: found.end(),
            }
        })
        .collect()
}

/// Alphabetic/period runs used as candidate person keys.
pub(crate) fn person_tokens(names: &str) -> impl Iterator<Item = &str> {
    tokenize(names)
        .into_iter()
        .filter(Token::is_word)
        .map(|token| token.text)
}
