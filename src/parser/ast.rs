//! AST node kinds for parsed linklets.
//!
//! One node kind per grammar production. Every node owns its children
//! exclusively; the tree has no sharing and no cycles. Identifier nodes hold
//! [`Symbol`] handles into an interner that outlives the parse.

use smol_str::SmolStr;

use crate::base::Symbol;

// ============================================================================
// Root
// ============================================================================

/// A parsed linklet: export pairs plus a non-empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linklet {
    pub exports: Vec<ExportPair>,
    pub body: Vec<TopLevelForm>,
}

/// An `(internal-id external-id)` export pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportPair {
    pub internal: Symbol,
    pub external: Symbol,
}

// ============================================================================
// Top-level forms
// ============================================================================

/// A linklet body entry: a definition, or any expression promoted to the top
/// level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelForm {
    Define(DefineValues),
    Expr(Expr),
}

/// `(define-values (id ...) expr)` - the id list may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefineValues {
    pub ids: Vec<Identifier>,
    pub expr: Expr,
}

// ============================================================================
// Expressions
// ============================================================================

/// Any expression form. The variants mirror the grammar productions; boxed
/// where a variant would otherwise make `Expr` recursive at fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Integer(Integer),
    Boolean(BooleanLiteral),
    Identifier(Identifier),
    Values(Values),
    Lambda(Box<Lambda>),
    Begin(Begin),
    Set(Box<SetBang>),
    If(Box<IfCond>),
    LetValues(LetValues),
    Application(Application),
}

/// An integer literal, kept as its decimal source text (optional leading
/// minus). Conversion to machine integers is a downstream concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer {
    pub text: SmolStr,
}

impl Integer {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self { text: text.into() }
    }

    /// The literal as an `i64`, when it fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.text.parse().ok()
    }
}

/// `#t` or `#f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// An identifier reference. Holds a handle into the interning pool; the pool
/// outlives the tree, so this is a non-owning relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier {
    pub symbol: Symbol,
}

impl Identifier {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

/// `(values expr ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Values {
    pub exprs: Vec<Expr>,
}

/// `(lambda formals expr)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lambda {
    pub formals: Formal,
    pub body: Expr,
}

/// Which `begin` variant a [`Begin`] node came from. The forms evaluate
/// their subexpressions in the same order; they differ only in which value
/// the whole form takes, and that choice belongs to downstream lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginKind {
    /// `(begin expr ...+)` - value of the last expression.
    Begin,
    /// `(begin0 expr ...+)` - value of the first expression.
    Begin0,
}

/// `(begin expr ...+)` or `(begin0 expr ...+)`; always at least one
/// expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Begin {
    pub kind: BeginKind,
    pub exprs: Vec<Expr>,
}

impl Begin {
    pub fn is_begin0(&self) -> bool {
        self.kind == BeginKind::Begin0
    }
}

/// `(set! id expr)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBang {
    pub target: Identifier,
    pub expr: Expr,
}

/// `(if cond then else)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfCond {
    pub cond: Expr,
    pub then_expr: Expr,
    pub else_expr: Expr,
}

/// One `[(id ...) expr]` binding of a `let-values`. The id list may be empty
/// (binds zero values).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub ids: Vec<Identifier>,
    pub value: Expr,
}

/// `(let-values ([(id ...) expr] ...) expr ...+)`; the body is always
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetValues {
    pub bindings: Vec<Binding>,
    pub body: Vec<Expr>,
}

/// `(expr ...+)` - operator followed by arguments, order preserved. Always
/// at least the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub exprs: Vec<Expr>,
}

impl Application {
    pub fn operator(&self) -> &Expr {
        &self.exprs[0]
    }

    pub fn args(&self) -> &[Expr] {
        &self.exprs[1..]
    }
}

// ============================================================================
// Formals
// ============================================================================

/// The parameter shape of a lambda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formal {
    /// `id` - all arguments collected into one rest parameter.
    Single(Identifier),
    /// `(id ...)` - fixed arity.
    Fixed(Vec<Identifier>),
    /// `(id ... . rest)` - fixed prefix plus a variadic tail.
    Variadic {
        fixed: Vec<Identifier>,
        rest: Identifier,
    },
}
