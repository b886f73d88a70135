//! # linklet-base
//!
//! Core library for parsing Racket linklets into an owned AST.
//!
//! A linklet is a closed, fully-expanded program unit with explicit
//! import/export lists and a body of definitions and expressions. This crate
//! turns linklet source text into a typed tree ready for further lowering.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, rewindable token stream, backtracking
//!             recursive-descent grammar engine, AST types
//!   ↓
//! base      → Primitives (identifier interning)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser)
// ============================================================================

/// Foundation types: identifier interning
pub mod base;

/// Parser: logos lexer, token stream, grammar engine, AST
pub mod parser;

// Re-export foundation types
pub use base::{Interner, Symbol};

// Re-export the parser surface
pub use parser::ast::Linklet;
pub use parser::{ParseError, Parser, parse, parse_with_interner};
