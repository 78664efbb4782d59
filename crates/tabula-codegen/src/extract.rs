//! Schema extraction.
//!
//! Schema files are Rust source that is parsed but never compiled. A table is
//! a top-level `static` or `const` item initialized with a `Table` struct
//! literal:
//!
//! ```text
//! use tabula::dsl as t;
//!
//! pub static UserSchema: t::Table = t::Table {
//!     name: "users",
//!     columns: &[
//!         t::int("id", t::auto_increment(true)),
//!         t::varchar("email").length(100),
//!     ],
//! };
//! ```
//!
//! Everything that does not look like a table declaration is skipped.
//! Declarations that do look like one but contain malformed parts keep the
//! well-formed parts and record a [`Diagnostic`] on the entity.

mod column;
mod lit;
mod option;
mod scope;
mod table;
mod vocabulary;

pub use vocabulary::Vocabulary;

use scope::Scope;
use tabula_core::{Diagnostic, Entity, Error, Result};

/// Turns schema source text into entities.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    vocabulary: Vocabulary,
}

/// State shared while walking a single file.
struct Context<'a> {
    vocabulary: &'a Vocabulary,
    scope: Scope,
    diagnostics: Vec<Diagnostic>,
}

impl Extractor {
    pub fn new(vocabulary: Vocabulary) -> Extractor {
        Extractor { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Extracts every table declared at the top level of `source`, in
    /// declaration order.
    ///
    /// Fails only when the source is not valid Rust syntax.
    pub fn extract(&self, source: &str) -> Result<Vec<Entity>> {
        let file = syn::parse_file(source).map_err(|err| {
            let start = err.span().start();
            Error::parse_failure(format!(
                "{err} (line {}, column {})",
                start.line,
                start.column + 1
            ))
        })?;

        let mut cx = Context {
            vocabulary: &self.vocabulary,
            scope: Scope::from_items(&self.vocabulary, &file.items),
            diagnostics: vec![],
        };

        Ok(file
            .items
            .iter()
            .filter_map(|item| cx.entity(item))
            .collect())
    }
}

impl Context<'_> {
    fn diagnostic(&mut self, line: usize, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(line, message));
    }
}
