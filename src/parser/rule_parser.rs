//! Rule-based parser for testing individual grammar productions.
//!
//! Every production of the grammar engine parses standalone from tokens, so
//! tests can exercise one production directly without wrapping the input in
//! a full linklet.
//!
//! # Example
//!
//! ```
//! use linklet::parser::{Rule, parse_rule};
//!
//! let result = parse_rule(Rule::Formals, "(x y . z)");
//! assert!(result.is_match());
//! assert!(result.fully_consumed);
//! ```

use super::parser::Parser;

/// Grammar productions that can be parsed individually.
///
/// Each variant corresponds to one try-parse operation of the grammar
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `(linklet (imports) (exports) defn-or-expr ...+)`
    Linklet,
    /// zero or more `(internal-id external-id)` pairs
    Exports,
    /// a definition or a top-level expression
    DefnOrExpr,
    /// `(define-values (id ...) expr)`
    DefineValues,
    /// any expression form
    Expr,
    /// decimal integer literal
    Integer,
    /// `#t` | `#f`
    Boolean,
    /// identifier
    Identifier,
    /// `(values expr ...)`
    Values,
    /// `(lambda formals expr)`
    Lambda,
    /// `id` | `(id ...)` | `(id ... . id)`
    Formals,
    /// `(begin expr ...+)` | `(begin0 expr ...+)`
    Begin,
    /// `(set! id expr)`
    SetBang,
    /// `(if expr expr expr)`
    IfCond,
    /// `(let-values ([(id ...) expr] ...) expr ...+)`
    LetValues,
    /// `(expr ...+)`
    Application,
}

/// Parse result for a single rule.
#[derive(Debug)]
pub struct RuleParseResult {
    /// The rule that was parsed.
    pub rule: Rule,
    /// The original input.
    pub input: String,
    /// Debug rendering of the matched node, if any.
    pub rendered: Option<String>,
    /// Whether the match consumed every token of the input.
    pub fully_consumed: bool,
}

impl RuleParseResult {
    /// True if the production matched (regardless of trailing input).
    pub fn is_match(&self) -> bool {
        self.rendered.is_some()
    }

    /// True if the production matched and consumed the whole input.
    pub fn is_exact_match(&self) -> bool {
        self.is_match() && self.fully_consumed
    }
}

/// Parse a specific grammar production against `input`.
pub fn parse_rule(rule: Rule, input: &str) -> RuleParseResult {
    let mut parser = Parser::new(input);
    let rendered = dispatch(rule, &mut parser);
    tracing::trace!(?rule, matched = rendered.is_some(), "rule parse");
    RuleParseResult {
        rule,
        input: input.to_string(),
        rendered,
        fully_consumed: parser.at_end(),
    }
}

fn dispatch(rule: Rule, parser: &mut Parser) -> Option<String> {
    fn render<T: std::fmt::Debug>(node: Option<T>) -> Option<String> {
        node.map(|n| format!("{n:?}"))
    }

    match rule {
        Rule::Linklet => render(parser.try_linklet()),
        Rule::Exports => render(parser.try_exports()),
        Rule::DefnOrExpr => render(parser.try_defn_or_expr()),
        Rule::DefineValues => render(parser.try_define_values()),
        Rule::Expr => render(parser.try_expr()),
        Rule::Integer => render(parser.try_integer()),
        Rule::Boolean => render(parser.try_boolean()),
        Rule::Identifier => render(parser.try_identifier()),
        Rule::Values => render(parser.try_values()),
        Rule::Lambda => render(parser.try_lambda()),
        Rule::Formals => render(parser.try_formals()),
        Rule::Begin => render(parser.try_begin()),
        Rule::SetBang => render(parser.try_set_bang()),
        Rule::IfCond => render(parser.try_if()),
        Rule::LetValues => render(parser.try_let_values()),
        Rule::Application => render(parser.try_application()),
    }
}
