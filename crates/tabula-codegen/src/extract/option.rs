use super::{lit, Context};

use syn::punctuated::Punctuated;
use tabula_core::{Column, ColumnType};

/// Column options understood by the extractor. Calls with any other name are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnOption {
    AutoIncrement,
    SqlType,
    Default,
    Length,
    Precision,
}

impl ColumnOption {
    fn from_name(name: &str) -> Option<ColumnOption> {
        Some(match name {
            "auto_increment" => ColumnOption::AutoIncrement,
            "sql_type" => ColumnOption::SqlType,
            "default" => ColumnOption::Default,
            "length" => ColumnOption::Length,
            "precision" => ColumnOption::Precision,
            _ => return None,
        })
    }

    fn arity(self) -> usize {
        match self {
            ColumnOption::Precision => 2,
            _ => 1,
        }
    }
}

type Args = Punctuated<syn::Expr, syn::Token![,]>;

impl Context<'_> {
    pub(super) fn option(&mut self, column: &mut Column, name: &str, args: &Args, line: usize) {
        let Some(option) = ColumnOption::from_name(name) else {
            return;
        };

        if args.len() != option.arity() {
            self.diagnostic(
                line,
                format!(
                    "column `{}`: `{name}` expects {} argument{}, found {}",
                    column.name,
                    option.arity(),
                    if option.arity() == 1 { "" } else { "s" },
                    args.len()
                ),
            );
            return;
        }

        let arg = &args[0];

        let res = match option {
            ColumnOption::AutoIncrement => {
                lit::boolean(arg).map(|value| column.auto_increment = value)
            }
            ColumnOption::SqlType => self.sql_type(arg).map(|(ty, explicit)| {
                if let Some(ty) = ty {
                    column.ty = ty;
                }
                column.explicit_type = Some(explicit);
            }),
            ColumnOption::Default => {
                lit::default_value(arg).map(|value| column.default = Some(value))
            }
            ColumnOption::Length => lit::unsigned(arg).map(|value| column.length = Some(value)),
            ColumnOption::Precision => lit::unsigned(arg)
                .and_then(|precision| Ok((precision, lit::unsigned(&args[1])?)))
                .map(|value| column.precision = Some(value)),
        };

        if let Err(message) = res {
            self.diagnostic(
                line,
                format!("column `{}`, `{name}`: {message}", column.name),
            );
        }
    }

    /// `sql_type(SharedType::Text)` switches the abstract type and pins the
    /// type name; `sql_type("CITEXT")` only pins the name.
    fn sql_type(&self, arg: &syn::Expr) -> Result<(Option<ColumnType>, String), String> {
        if let Some(raw) = lit::string(arg) {
            if raw.trim().is_empty() {
                return Err("expected a non-empty type".to_string());
            }

            return Ok((None, raw));
        }

        let syn::Expr::Path(path) = lit::peel(arg) else {
            return Err("expected a column type path or a string literal".to_string());
        };

        let segments: Vec<String> = path
            .path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();

        let ty = match segments.split_last() {
            Some((variant, [])) => ColumnType::from_path(None, variant),
            Some((variant, band)) => self
                .scope
                .resolve_segments(self.vocabulary, band)
                .and_then(|band| ColumnType::from_path(Some(&band), variant)),
            None => None,
        };

        match ty {
            Some(ty) => Ok((Some(ty), ty.name().to_string())),
            None => Err(format!("unknown column type `{}`", segments.join("::"))),
        }
    }
}
