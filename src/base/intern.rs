//! Identifier interner for stable, cheaply-comparable identifier handles.
//!
//! Interning the same text twice yields the same [`Symbol`], so identifier
//! equality anywhere in a parsed tree is an integer comparison. The pool
//! outlives any parse that writes into it; AST nodes hold handles, never
//! text.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// A handle into an [`Interner`].
///
/// Plain comparable value: two symbols from the same pool are equal exactly
/// when their texts are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// The raw index, useful for dense side tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Deduplicating identifier pool.
///
/// Interior locking makes `intern` available through a shared reference, so
/// a single pool behind an `Arc` can back concurrent parses. Individual
/// parses remain single-threaded; the pool is the only shared mutable state
/// between them.
#[derive(Debug, Default)]
pub struct Interner {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    map: FxHashMap<SmolStr, Symbol>,
    texts: Vec<SmolStr>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning its handle. Insert-if-absent: the same text
    /// always maps to the same [`Symbol`].
    pub fn intern(&self, text: &str) -> Symbol {
        if let Some(&sym) = self.inner.read().map.get(text) {
            return sym;
        }
        let mut tables = self.inner.write();
        // A writer may have raced us between the locks.
        if let Some(&sym) = tables.map.get(text) {
            return sym;
        }
        let sym = Symbol(tables.texts.len() as u32);
        let text = SmolStr::new(text);
        tables.texts.push(text.clone());
        tables.map.insert(text, sym);
        sym
    }

    /// The text behind a handle.
    ///
    /// # Panics
    /// Panics if `sym` did not come from this pool.
    pub fn resolve(&self, sym: Symbol) -> SmolStr {
        self.inner.read().texts[sym.index()].clone()
    }

    /// Number of unique identifiers interned.
    pub fn len(&self) -> usize {
        self.inner.read().texts.len()
    }

    /// Returns true if no identifiers have been interned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
