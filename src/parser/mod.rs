//! Backtracking recursive-descent parser for Racket linklets.
//!
//! The pipeline is:
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! TokenStream → arena-indexed buffer with an integer cursor (exact rewind)
//!     ↓
//! Parser → ordered try-parse productions, each all-or-nothing
//!     ↓
//! AST → owned tree, one node kind per production
//! ```
//!
//! ## Grammar
//!
//! Racket's reference splits the linklet grammar over several pages; the
//! subset recognized here is:
//!
//! ```text
//! linklet      := (linklet (imports) (exports) defn-or-expr ...+)
//!
//! imports      := empty            ; non-empty import lists are rejected
//! exports      := export-pair ...
//! export-pair  := (internal-id external-id)
//!
//! defn-or-expr := defn | expr
//! defn         := (define-values (id ...) expr)
//!
//! expr         := integer
//!              |  boolean
//!              |  id
//!              |  (values expr ...)
//!              |  (lambda formals expr)
//!              |  (begin expr ...+)
//!              |  (begin0 expr ...+)
//!              |  (set! id expr)
//!              |  (if expr expr expr)
//!              |  (let-values ([(id ...) expr] ...) expr ...+)
//!              |  (expr ...+)      ; application, tried last
//!
//! formals      := id | (id ...) | (id ... . id)
//! ```
//!
//! `define-syntaxes` and `letrec-values` are lexed as keywords but have no
//! production yet; forms headed by them fail to parse.
//!
//! Nearly every compound form starts with `(`, so productions disambiguate
//! only after consuming one or more tokens. Every production is therefore a
//! try-parse: on success the stream sits just past the matched text, on
//! failure the stream is rewound to exactly the entry position. A failed
//! alternative never leaks partial consumption into its siblings.

pub mod ast;
mod error;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
pub mod rule_parser;
mod stream;

pub use error::ParseError;
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{Parser, parse, parse_with_interner};
pub use rule_parser::{Rule, RuleParseResult, parse_rule};
pub use stream::{Pos, TokenStream};
