//! Foundation types for the linklet toolchain.
//!
//! This module provides the identifier interner shared by every parse:
//! - [`Symbol`] - A stable, comparable handle for an identifier
//! - [`Interner`] - The deduplicating pool behind those handles
//!
//! This module has NO dependencies on other linklet modules.

mod intern;

pub use intern::{Interner, Symbol};
