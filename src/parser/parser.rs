//! The grammar engine: one try-parse operation per production.
//!
//! Every operation follows the same contract. On success it returns the
//! constructed node with the stream just past the matched text. On failure
//! it returns `None` with the stream restored to exactly the entry position.
//! Malformed input never raises; it simply fails to match, and the caller
//! tries the next alternative or declines in turn. That makes every
//! production a total function from (stream, position) to an optional node.

use std::sync::Arc;

use crate::base::{Interner, Symbol};

use super::ast::{
    Application, Begin, BeginKind, Binding, BooleanLiteral, DefineValues, ExportPair, Expr,
    Formal, Identifier, IfCond, Integer, Lambda, LetValues, Linklet, SetBang, TopLevelForm,
    Values,
};
use super::error::ParseError;
use super::lexer::{Token, TokenKind};
use super::stream::{Pos, TokenStream};

/// Parse a linklet from source text with a fresh identifier pool.
pub fn parse(input: &str) -> Result<Linklet, ParseError> {
    parse_with_interner(input, Arc::new(Interner::new()))
}

/// Parse a linklet from source text, interning identifiers into `interner`.
///
/// Callers that lower several linklets into one program share a pool this
/// way so identifier handles compare across parses.
pub fn parse_with_interner(
    input: &str,
    interner: Arc<Interner>,
) -> Result<Linklet, ParseError> {
    tracing::debug!(bytes = input.len(), "parsing linklet source");
    let mut parser = Parser::with_interner(input, interner);
    let Some(linklet) = parser.try_linklet() else {
        let furthest = parser.furthest_offset();
        tracing::trace!(furthest, "no linklet matched");
        return Err(ParseError::NoLinklet { furthest });
    };
    if !parser.at_end() {
        return Err(ParseError::TrailingInput {
            offset: parser.offset(),
        });
    }
    Ok(linklet)
}

/// Ordered alternative list for expression dispatch.
///
/// The order is load-bearing: atomic productions come first so a bare token
/// is never mistaken for the head of a list, and the generic application
/// form is last because it matches any well-formed parenthesized sequence,
/// including keyword-headed ones that the earlier alternatives reject as
/// malformed.
const EXPR_ALTERNATIVES: &[fn(&mut Parser) -> Option<Expr>] = &[
    |p| p.try_integer().map(Expr::Integer),
    |p| p.try_boolean().map(Expr::Boolean),
    |p| p.try_identifier().map(Expr::Identifier),
    |p| p.try_values().map(Expr::Values),
    |p| p.try_lambda().map(|lambda| Expr::Lambda(Box::new(lambda))),
    |p| p.try_begin().map(Expr::Begin),
    |p| p.try_set_bang().map(|set| Expr::Set(Box::new(set))),
    |p| p.try_if().map(|cond| Expr::If(Box::new(cond))),
    |p| p.try_let_values().map(Expr::LetValues),
    |p| p.try_application().map(Expr::Application),
];

/// The parser state: a rewindable token stream, the identifier pool, and a
/// watermark of the deepest offset any production examined.
pub struct Parser {
    stream: TokenStream,
    interner: Arc<Interner>,
    furthest: usize,
}

impl Parser {
    /// A parser over `input` with a fresh identifier pool.
    pub fn new(input: &str) -> Self {
        Self::with_interner(input, Arc::new(Interner::new()))
    }

    /// A parser over `input` interning into a caller-supplied pool.
    pub fn with_interner(input: &str, interner: Arc<Interner>) -> Self {
        Self {
            stream: TokenStream::new(input),
            interner,
            furthest: 0,
        }
    }

    pub fn interner(&self) -> &Arc<Interner> {
        &self.interner
    }

    /// True once every token has been consumed.
    pub fn at_end(&self) -> bool {
        self.stream.at_end()
    }

    /// Byte offset of the token under the cursor.
    pub fn offset(&self) -> usize {
        self.stream.offset()
    }

    /// Current stream position. Restored exactly by any failing production.
    pub fn mark(&self) -> Pos {
        self.stream.mark()
    }

    /// Byte offset of the deepest token any production examined so far.
    pub fn furthest_offset(&self) -> usize {
        self.furthest
    }

    // =========================================================================
    // Try-parse plumbing
    // =========================================================================

    /// Run a production body with the entry position saved; rewind to it if
    /// the body declines. Every multi-token production runs inside this, so
    /// the restore-on-failure contract holds structurally rather than by
    /// per-call-site discipline.
    fn attempt<T>(&mut self, body: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mark = self.stream.mark();
        let result = body(self);
        if result.is_none() {
            self.furthest = self.furthest.max(self.stream.offset());
            self.stream.rewind_to(mark);
        }
        result
    }

    /// Consume the next token if it has the wanted kind; otherwise put it
    /// back (single-token lookahead undo) and record the mismatch offset.
    fn next_if(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.stream.next();
        if token.kind == kind {
            Some(token)
        } else {
            self.furthest = self.furthest.max(token.offset);
            self.stream.rewind_last();
            None
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        self.next_if(kind).is_some()
    }

    fn expect(&mut self, kind: TokenKind) -> Option<()> {
        self.next_if(kind).map(|_| ())
    }

    fn intern(&self, text: &str) -> Symbol {
        self.interner.intern(text)
    }

    // =========================================================================
    // Top level
    // =========================================================================

    /// Linklet = '(' 'linklet' '(' ')' '(' ExportPair* ')' DefnOrExpr+ ')'
    ///
    /// The import list must be present but empty; import parsing is an
    /// unimplemented gap, so any non-empty import list fails the parse. A
    /// body of zero forms also fails.
    pub fn try_linklet(&mut self) -> Option<Linklet> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::Linklet)?;

            // TODO(imports): parse imported-id/renamed pairs instead of
            // requiring an empty list.
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::RParen)?;

            p.expect(TokenKind::LParen)?;
            let exports = p.try_exports()?;
            p.expect(TokenKind::RParen)?;

            let mut body = Vec::new();
            while let Some(form) = p.try_defn_or_expr() {
                body.push(form);
            }
            p.expect(TokenKind::RParen)?;
            if body.is_empty() {
                return None;
            }

            Some(Linklet { exports, body })
        })
    }

    /// ExportPair* - zero or more `(internal-id external-id)` pairs.
    ///
    /// Stops without consuming at the first token that is not `(`. Unlike
    /// the body-form loop this is all-or-nothing: a malformed pair fails the
    /// whole export list (and with it the enclosing linklet), never a
    /// partial prefix.
    pub fn try_exports(&mut self) -> Option<Vec<ExportPair>> {
        self.attempt(|p| {
            let mut pairs = Vec::new();
            while p.stream.peek().is(TokenKind::LParen) {
                p.stream.next();
                let internal = p.try_identifier()?;
                let external = p.try_identifier()?;
                p.expect(TokenKind::RParen)?;
                pairs.push(ExportPair {
                    internal: internal.symbol,
                    external: external.symbol,
                });
            }
            Some(pairs)
        })
    }

    /// DefnOrExpr = DefineValues | Expr
    ///
    /// Definitions are tried first; anything else falls through to the full
    /// expression grammar.
    pub fn try_defn_or_expr(&mut self) -> Option<TopLevelForm> {
        if let Some(define) = self.try_define_values() {
            return Some(TopLevelForm::Define(define));
        }
        self.try_expr().map(TopLevelForm::Expr)
    }

    /// DefineValues = '(' 'define-values' '(' Id* ')' Expr ')'
    ///
    /// The bound-identifier list may be empty.
    pub fn try_define_values(&mut self) -> Option<DefineValues> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::DefineValues)?;

            p.expect(TokenKind::LParen)?;
            let mut ids = Vec::new();
            while let Some(id) = p.try_identifier() {
                ids.push(id);
            }
            p.expect(TokenKind::RParen)?;

            let expr = p.try_expr()?;
            p.expect(TokenKind::RParen)?;

            Some(DefineValues { ids, expr })
        })
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Expr - ordered alternation over every expression production, stopping
    /// at the first that matches. See [`EXPR_ALTERNATIVES`] for why the
    /// order matters.
    pub fn try_expr(&mut self) -> Option<Expr> {
        EXPR_ALTERNATIVES.iter().find_map(|alternative| alternative(self))
    }

    /// Integer = decimal digits with optional leading minus.
    pub fn try_integer(&mut self) -> Option<Integer> {
        self.next_if(TokenKind::Number)
            .map(|token| Integer::new(token.text))
    }

    /// Boolean = '#t' | '#f'
    pub fn try_boolean(&mut self) -> Option<BooleanLiteral> {
        let token = self.stream.next();
        match token.kind {
            TokenKind::BoolTrue => Some(BooleanLiteral { value: true }),
            TokenKind::BoolFalse => Some(BooleanLiteral { value: false }),
            _ => {
                self.furthest = self.furthest.max(token.offset);
                self.stream.rewind_last();
                None
            }
        }
    }

    /// Id - any identifier token; the text is interned and the node holds
    /// only the handle.
    pub fn try_identifier(&mut self) -> Option<Identifier> {
        let token = self.next_if(TokenKind::Ident)?;
        Some(Identifier::new(self.intern(&token.text)))
    }

    /// Values = '(' 'values' Expr* ')'
    pub fn try_values(&mut self) -> Option<Values> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::Values)?;
            let mut exprs = Vec::new();
            while let Some(expr) = p.try_expr() {
                exprs.push(expr);
            }
            p.expect(TokenKind::RParen)?;
            Some(Values { exprs })
        })
    }

    /// Lambda = '(' 'lambda' Formals Expr ')'
    pub fn try_lambda(&mut self) -> Option<Lambda> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::Lambda)?;
            let formals = p.try_formals()?;
            let body = p.try_expr()?;
            p.expect(TokenKind::RParen)?;
            Some(Lambda { formals, body })
        })
    }

    /// Formals = Id | '(' Id* ')' | '(' Id* '.' Id ')'
    ///
    /// Inside a list, identifiers are read until `)` (fixed arity) or `.`
    /// (exactly one rest identifier, then `)`). Any other token fails the
    /// whole formals parse.
    pub fn try_formals(&mut self) -> Option<Formal> {
        self.attempt(|p| {
            if !p.eat(TokenKind::LParen) {
                return p.try_identifier().map(Formal::Single);
            }

            let mut fixed = Vec::new();
            loop {
                if p.eat(TokenKind::RParen) {
                    return Some(Formal::Fixed(fixed));
                }
                if p.eat(TokenKind::Dot) {
                    let rest = p.try_identifier()?;
                    p.expect(TokenKind::RParen)?;
                    return Some(Formal::Variadic { fixed, rest });
                }
                fixed.push(p.try_identifier()?);
            }
        })
    }

    /// Begin = '(' ('begin' | 'begin0') Expr+ ')'
    ///
    /// The two variants parse identically; only the [`BeginKind`] flag
    /// records which keyword headed the form.
    pub fn try_begin(&mut self) -> Option<Begin> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            let kind = if p.eat(TokenKind::Begin) {
                BeginKind::Begin
            } else if p.eat(TokenKind::Begin0) {
                BeginKind::Begin0
            } else {
                return None;
            };

            let mut exprs = Vec::new();
            while let Some(expr) = p.try_expr() {
                exprs.push(expr);
            }
            p.expect(TokenKind::RParen)?;
            if exprs.is_empty() {
                return None;
            }

            Some(Begin { kind, exprs })
        })
    }

    /// SetBang = '(' 'set!' Id Expr ')'
    pub fn try_set_bang(&mut self) -> Option<SetBang> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::SetBang)?;
            let target = p.try_identifier()?;
            let expr = p.try_expr()?;
            p.expect(TokenKind::RParen)?;
            Some(SetBang { target, expr })
        })
    }

    /// IfCond = '(' 'if' Expr Expr Expr ')'
    pub fn try_if(&mut self) -> Option<IfCond> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::If)?;
            let cond = p.try_expr()?;
            let then_expr = p.try_expr()?;
            let else_expr = p.try_expr()?;
            p.expect(TokenKind::RParen)?;
            Some(IfCond {
                cond,
                then_expr,
                else_expr,
            })
        })
    }

    /// LetValues = '(' 'let-values' '(' Binding* ')' Expr+ ')'
    /// Binding   = '(' '(' Id* ')' Expr ')'
    ///
    /// A binding's identifier list may be empty (binds zero values); the
    /// body may not be empty.
    pub fn try_let_values(&mut self) -> Option<LetValues> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::LetValues)?;

            p.expect(TokenKind::LParen)?;
            let mut bindings = Vec::new();
            while !p.eat(TokenKind::RParen) {
                p.expect(TokenKind::LParen)?;

                p.expect(TokenKind::LParen)?;
                let mut ids = Vec::new();
                while !p.eat(TokenKind::RParen) {
                    ids.push(p.try_identifier()?);
                }

                let value = p.try_expr()?;
                p.expect(TokenKind::RParen)?;
                bindings.push(Binding { ids, value });
            }

            let mut body = Vec::new();
            while let Some(expr) = p.try_expr() {
                body.push(expr);
            }
            p.expect(TokenKind::RParen)?;
            if body.is_empty() {
                return None;
            }

            Some(LetValues { bindings, body })
        })
    }

    /// Application = '(' Expr+ ')'
    ///
    /// The generic catch-all: expressions are read greedily until one fails,
    /// and the sequence must be non-empty - a bare `()` declines so an
    /// enclosing production can reinterpret the text. First element is the
    /// operator; arity is otherwise unconstrained.
    pub fn try_application(&mut self) -> Option<Application> {
        self.attempt(|p| {
            p.expect(TokenKind::LParen)?;
            let mut exprs = Vec::new();
            while let Some(expr) = p.try_expr() {
                exprs.push(expr);
            }
            p.expect(TokenKind::RParen)?;
            if exprs.is_empty() {
                return None;
            }
            Some(Application { exprs })
        })
    }
}
