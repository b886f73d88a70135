//! Rule-based grammar tests.
//!
//! Each production is exercised in isolation through the rule parser, with
//! positive and negative case tables per production.

use rstest::rstest;
use linklet::parser::{Rule, parse_rule};

/// Helper to assert that a rule matches the whole input
fn assert_rule_parses(rule: Rule, input: &str, desc: &str) {
    let result = parse_rule(rule, input);
    assert!(
        result.is_exact_match(),
        "failed to parse {} as {:?}\ninput: {}\nresult: {:?}",
        desc,
        rule,
        input,
        result,
    );
}

/// Helper to assert that a rule does not match the input
fn assert_rule_rejects(rule: Rule, input: &str, desc: &str) {
    let result = parse_rule(rule, input);
    assert!(
        !result.is_match(),
        "unexpectedly parsed {} as {:?}\ninput: {}\nresult: {:?}",
        desc,
        rule,
        input,
        result,
    );
}

// =============================================================================
// Atoms
// =============================================================================

#[rstest]
#[case("0", "zero")]
#[case("42", "positive integer")]
#[case("-42", "negative integer")]
#[case("123456789012345678901234567890", "integer wider than i64")]
fn test_integer(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Integer, input, desc);
}

#[rstest]
#[case("x", "identifier is not an integer")]
#[case("#t", "boolean is not an integer")]
fn test_integer_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Integer, input, desc);
}

#[rstest]
#[case("#t", "true")]
#[case("#f", "false")]
#[case("#true", "long true")]
#[case("#false", "long false")]
fn test_boolean(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Boolean, input, desc);
}

#[rstest]
#[case("x", "plain identifier")]
#[case("list->vector", "identifier with arrow")]
#[case("null?", "predicate-style identifier")]
#[case("%variable-reference", "percent-prefixed identifier")]
#[case("-", "lone minus")]
fn test_identifier(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Identifier, input, desc);
}

#[rstest]
#[case("lambda", "keyword is not an identifier")]
#[case("begin0", "keyword is not an identifier")]
#[case("7", "number is not an identifier")]
fn test_identifier_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Identifier, input, desc);
}

// =============================================================================
// Values
// =============================================================================

#[rstest]
#[case("(values)", "zero values")]
#[case("(values 1)", "one value")]
#[case("(values 1 x #t)", "mixed values")]
#[case("(values (values 1) 2)", "nested values")]
fn test_values(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Values, input, desc);
}

#[rstest]
#[case("(f 1)", "application head is not the values keyword")]
#[case("(values 1", "unterminated values")]
fn test_values_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Values, input, desc);
}

// =============================================================================
// Lambda and formals
// =============================================================================

#[rstest]
#[case("(lambda x x)", "single rest formal")]
#[case("(lambda (x) x)", "one fixed formal")]
#[case("(lambda (x y) (f x y))", "two fixed formals")]
#[case("(lambda (x y . z) z)", "variadic formals")]
#[case("(lambda () 1)", "empty formals")]
fn test_lambda(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Lambda, input, desc);
}

#[rstest]
#[case("(lambda (x))", "missing body")]
#[case("(lambda (x) x x)", "two body expressions")]
#[case("(lambda (1) x)", "number in formals")]
fn test_lambda_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Lambda, input, desc);
}

#[rstest]
#[case("x", "bare identifier")]
#[case("()", "empty list")]
#[case("(x)", "one identifier")]
#[case("(x y z)", "several identifiers")]
#[case("(x . y)", "one fixed plus rest")]
#[case("(. y)", "rest only")]
fn test_formals(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Formals, input, desc);
}

#[rstest]
#[case("(x . )", "missing rest identifier")]
#[case("(x . y z)", "token after rest identifier")]
#[case("(x 5)", "number among identifiers")]
#[case("5", "bare number")]
fn test_formals_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Formals, input, desc);
}

// =============================================================================
// Begin / begin0
// =============================================================================

#[rstest]
#[case("(begin 1)", "begin with one expression")]
#[case("(begin 1 2 3)", "begin with several expressions")]
#[case("(begin0 1 2)", "begin0")]
#[case("(begin (begin 1) 2)", "nested begin")]
fn test_begin(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Begin, input, desc);
}

#[rstest]
#[case("(begin)", "empty begin")]
#[case("(begin0)", "empty begin0")]
#[case("(begin 1", "unterminated begin")]
fn test_begin_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Begin, input, desc);
}

// =============================================================================
// set! / if
// =============================================================================

#[rstest]
#[case("(set! x 1)", "set to literal")]
#[case("(set! x (f y))", "set to application")]
fn test_set_bang(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::SetBang, input, desc);
}

#[rstest]
#[case("(set! 1 2)", "target must be an identifier")]
#[case("(set! x)", "missing value expression")]
#[case("(set! x 1 2)", "extra expression")]
fn test_set_bang_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::SetBang, input, desc);
}

#[rstest]
#[case("(if #t 1 2)", "literal condition")]
#[case("(if (f x) (g 1) (g 2))", "compound arms")]
fn test_if(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::IfCond, input, desc);
}

#[rstest]
#[case("(if #t 1)", "two-armed if")]
#[case("(if #t 1 2 3)", "four-armed if")]
fn test_if_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::IfCond, input, desc);
}

// =============================================================================
// let-values
// =============================================================================

#[rstest]
#[case("(let-values () 1)", "zero bindings")]
#[case("(let-values (((x) 1)) x)", "one binding one id")]
#[case("(let-values (((x y) (values 1 2))) (f x y))", "one binding two ids")]
#[case("(let-values ((() (values))) 1)", "binding with zero ids")]
#[case("(let-values (((x) 1) ((y) 2)) x y)", "two bindings two body forms")]
fn test_let_values(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::LetValues, input, desc);
}

#[rstest]
#[case("(let-values ())", "zero body expressions")]
#[case("(let-values (((x) 1)))", "binding but no body")]
#[case("(let-values ((x 1)) x)", "binding ids not in a list")]
#[case("(let-values (((x))) x)", "binding missing value")]
fn test_let_values_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::LetValues, input, desc);
}

// =============================================================================
// Application
// =============================================================================

#[rstest]
#[case("(f)", "operator alone")]
#[case("(f 1)", "one argument")]
#[case("(f x y z)", "several arguments")]
#[case("((lambda (x) x) 5)", "lambda in operator position")]
#[case("(f (g (h 1)))", "nested applications")]
fn test_application(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Application, input, desc);
}

#[rstest]
#[case("()", "empty application")]
#[case("(f 1", "unterminated application")]
#[case("(if 1 2)", "keyword token cannot be an operand")]
fn test_application_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Application, input, desc);
}

// =============================================================================
// define-values and top-level dispatch
// =============================================================================

#[rstest]
#[case("(define-values (x) 1)", "one bound id")]
#[case("(define-values (x y) (values 1 2))", "two bound ids")]
#[case("(define-values () (values))", "zero bound ids")]
fn test_define_values(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::DefineValues, input, desc);
}

#[rstest]
#[case("(define-values x 1)", "ids not in a list")]
#[case("(define-values (x))", "missing bound expression")]
#[case("(define-values (x) 1 2)", "extra expression")]
#[case("(define-syntaxes (x) 1)", "define-syntaxes has no production")]
fn test_define_values_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::DefineValues, input, desc);
}

#[rstest]
#[case("(define-values (x) 1)", "definition")]
#[case("(f 1)", "expression")]
#[case("5", "bare literal")]
fn test_defn_or_expr(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::DefnOrExpr, input, desc);
}

// =============================================================================
// Exports
// =============================================================================

#[rstest]
#[case("", "empty export list")]
#[case("(a b)", "one pair")]
#[case("(a b) (c d)", "two pairs")]
fn test_exports(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::Exports, input, desc);
}

#[rstest]
#[case("(a)", "pair with one identifier")]
#[case("(a b c)", "pair with three identifiers")]
#[case("(a b) (c)", "second pair malformed")]
#[case("(a 1)", "number in a pair")]
fn test_exports_rejects(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Exports, input, desc);
}

// =============================================================================
// Keyword dispatch never falls through to application
// =============================================================================

#[rstest]
#[case("(if 1 2 3)", "IfCond")]
#[case("(begin 1)", "Begin")]
#[case("(begin0 1)", "Begin")]
#[case("(set! x 1)", "SetBang")]
#[case("(let-values () 1)", "LetValues")]
#[case("(lambda x x)", "Lambda")]
#[case("(values)", "Values")]
fn test_keyword_forms_are_not_applications(#[case] input: &str, #[case] desc: &str) {
    assert_rule_rejects(Rule::Application, input, desc);
    assert_rule_parses(Rule::Expr, input, "expression dispatch");
}
