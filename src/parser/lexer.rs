//! Logos-based lexer for linklet source text.
//!
//! Whitespace and `;` line comments are skipped; everything else becomes a
//! token. Unlexable input becomes a [`TokenKind::Error`] token, which no
//! grammar production matches, so bad bytes surface as an ordinary parse
//! failure rather than a lexer panic.

use logos::Logos;
use smol_str::SmolStr;

/// A token with its kind, source text, and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    pub offset: usize,
}

impl Token {
    pub(crate) fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: SmolStr::default(),
            offset,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Token kinds recognized by the lexer.
///
/// `Ident` and `Number` carry meaningful text; the rest are identified by
/// kind alone. `Eof` is synthesized by the stream, never by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Dot,
    Number,
    BoolTrue,
    BoolFalse,
    Ident,

    // Keywords. DefineSyntaxes and LetrecValues are recognized here but
    // have no grammar production yet.
    Linklet,
    DefineValues,
    DefineSyntaxes,
    Lambda,
    Begin,
    Begin0,
    If,
    LetValues,
    LetrecValues,
    SetBang,
    Values,

    Error,
    Eof,
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r";[^\n]*")]
enum LogosToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // A bare dot only appears in variadic formals. Identifiers may contain
    // dots, but may not start with one, so `.` never collides with `Ident`.
    #[token(".")]
    Dot,

    // Priority beats `Ident` for strings like "-5" that both would match.
    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[token("#t")]
    #[token("#true")]
    BoolTrue,

    #[token("#f")]
    #[token("#false")]
    BoolFalse,

    // ========================================================================
    // KEYWORDS (exact match wins over Ident; longer identifiers win over
    // keywords by logos' maximal munch, so `begin0x` is an identifier)
    // ========================================================================
    #[token("linklet")]
    Linklet,

    #[token("define-values")]
    DefineValues,

    #[token("define-syntaxes")]
    DefineSyntaxes,

    #[token("lambda")]
    Lambda,

    #[token("begin")]
    Begin,

    #[token("begin0")]
    Begin0,

    #[token("if")]
    If,

    #[token("let-values")]
    LetValues,

    #[token("letrec-values")]
    LetrecValues,

    #[token("set!")]
    SetBang,

    #[token("values")]
    Values,

    // Scheme-style identifiers, restricted to ASCII: expander output does
    // not produce anything wider. Digits and dots are allowed after the
    // first character.
    #[regex(r"[A-Za-z!$%&*/:<=>?^_~+-][A-Za-z0-9!$%&*/:<=>?^_~+\-.]*")]
    Ident,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            LParen => TokenKind::LParen,
            RParen => TokenKind::RParen,
            Dot => TokenKind::Dot,
            Number => TokenKind::Number,
            BoolTrue => TokenKind::BoolTrue,
            BoolFalse => TokenKind::BoolFalse,
            Linklet => TokenKind::Linklet,
            DefineValues => TokenKind::DefineValues,
            DefineSyntaxes => TokenKind::DefineSyntaxes,
            Lambda => TokenKind::Lambda,
            Begin => TokenKind::Begin,
            Begin0 => TokenKind::Begin0,
            If => TokenKind::If,
            LetValues => TokenKind::LetValues,
            LetrecValues => TokenKind::LetrecValues,
            SetBang => TokenKind::SetBang,
            Values => TokenKind::Values,
            Ident => TokenKind::Ident,
        }
    }
}

/// Tokenize an entire source buffer eagerly.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = LogosToken::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token {
            kind,
            text: SmolStr::new(lexer.slice()),
            offset: lexer.span().start,
        });
    }
    tokens
}
