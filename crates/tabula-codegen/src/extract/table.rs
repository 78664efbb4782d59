use super::{lit, Context};

use syn::punctuated::Punctuated;
use tabula_core::{Column, Entity};

/// Item name suffixes removed to form the entity name, tried in order.
const SUFFIXES: &[&str] = &[
    "Schema",
    "Definition",
    "Table",
    "_SCHEMA",
    "_DEFINITION",
    "_TABLE",
];

impl Context<'_> {
    /// Extracts an entity from a top-level item, if the item declares a
    /// table.
    pub(super) fn entity(&mut self, item: &syn::Item) -> Option<Entity> {
        let (ident, expr) = match item {
            syn::Item::Static(item) => (&item.ident, &*item.expr),
            syn::Item::Const(item) => (&item.ident, &*item.expr),
            _ => return None,
        };

        let syn::Expr::Struct(table) = lit::peel(expr) else {
            return None;
        };

        let is_table = self
            .scope
            .resolve(self.vocabulary, &table.path)
            .is_some_and(|name| self.vocabulary.is_table(&name));

        if !is_table {
            return None;
        }

        let mut table_name = None;
        let mut columns = vec![];

        for field in &table.fields {
            let syn::Member::Named(member) = &field.member else {
                continue;
            };

            if member == "name" {
                table_name = lit::string(&field.expr);
            } else if member == "columns" {
                columns = self.columns(&field.expr);
            }
        }

        let diagnostics = std::mem::take(&mut self.diagnostics);

        // A table without a name cannot be generated
        let table_name = table_name.filter(|name| !name.is_empty())?;

        Some(Entity {
            name: entity_name(&ident.to_string()).to_string(),
            table_name,
            columns,
            diagnostics,
        })
    }

    fn columns(&mut self, expr: &syn::Expr) -> Vec<Column> {
        let elems: Vec<syn::Expr> = match lit::peel(expr) {
            syn::Expr::Array(array) => array.elems.iter().cloned().collect(),
            syn::Expr::Macro(mac) if mac.mac.path.is_ident("vec") => {
                match mac
                    .mac
                    .parse_body_with(Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated)
                {
                    Ok(elems) => elems.into_iter().collect(),
                    Err(err) => {
                        self.diagnostic(lit::line(mac), format!("invalid `vec!` body: {err}"));
                        return vec![];
                    }
                }
            }
            other => {
                self.diagnostic(
                    lit::line(other),
                    "`columns` must be an array or `vec!` literal",
                );
                return vec![];
            }
        };

        let mut columns: Vec<Column> = vec![];

        for elem in &elems {
            let Some(column) = self.column(elem) else {
                continue;
            };

            if columns.iter().any(|existing| existing.name == column.name) {
                self.diagnostic(
                    lit::line(elem),
                    format!("duplicate column `{}` ignored", column.name),
                );
                continue;
            }

            columns.push(column);
        }

        columns
    }
}

/// Removes the first matching suffix from a declared item name. A suffix
/// that makes up the whole name is left in place.
pub(super) fn entity_name(ident: &str) -> &str {
    SUFFIXES
        .iter()
        .filter_map(|suffix| ident.strip_suffix(suffix))
        .find(|stem| !stem.is_empty())
        .unwrap_or(ident)
}
