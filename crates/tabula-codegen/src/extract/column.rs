use super::{lit, Context};

use quote::ToTokens;
use tabula_core::Column;

impl Context<'_> {
    /// Parses one entry of a `columns` list.
    ///
    /// An entry is a constructor call, optionally carrying option calls as
    /// extra arguments, optionally followed by chained option methods.
    /// Options apply in source order.
    pub(super) fn column(&mut self, expr: &syn::Expr) -> Option<Column> {
        let mut chain = vec![];
        let mut base = lit::peel(expr);

        while let syn::Expr::MethodCall(call) = base {
            chain.push(call);
            base = lit::peel(&call.receiver);
        }

        let syn::Expr::Call(call) = base else {
            self.diagnostic(lit::line(expr), "expected a column constructor call");
            return None;
        };

        let syn::Expr::Path(func) = &*call.func else {
            self.diagnostic(lit::line(call), "expected a column constructor call");
            return None;
        };

        let constructor = self.scope.resolve(self.vocabulary, &func.path);
        let Some(ty) = constructor
            .as_deref()
            .and_then(|name| self.vocabulary.constructor(name))
        else {
            self.diagnostic(
                lit::line(func),
                format!(
                    "unrecognized column constructor `{}`",
                    path_to_string(&func.path)
                ),
            );
            return None;
        };

        let mut args = call.args.iter();

        let Some(name) = args
            .next()
            .and_then(lit::string)
            .filter(|name| !name.is_empty())
        else {
            self.diagnostic(
                lit::line(call),
                format!(
                    "`{}` expects a column name as its first argument",
                    path_to_string(&func.path)
                ),
            );
            return None;
        };

        let mut column = Column::new(name, ty);

        for arg in args {
            let syn::Expr::Call(option) = lit::peel(arg) else {
                self.diagnostic(
                    lit::line(arg),
                    format!("column `{}`: expected an option call", column.name),
                );
                continue;
            };

            let syn::Expr::Path(path) = &*option.func else {
                self.diagnostic(
                    lit::line(option),
                    format!("column `{}`: expected an option call", column.name),
                );
                continue;
            };

            // Paths that do not resolve to the DSL are someone else's options
            if let Some(name) = self.scope.resolve(self.vocabulary, &path.path) {
                self.option(&mut column, &name, &option.args, lit::line(option));
            }
        }

        for call in chain.iter().rev() {
            self.option(
                &mut column,
                &call.method.to_string(),
                &call.args,
                lit::line(&call.method),
            );
        }

        if column.auto_increment && !column.ty.is_numeric() {
            self.diagnostic(
                lit::line(expr),
                format!(
                    "column `{}`: auto_increment ignored on non-numeric type {}",
                    column.name, column.ty
                ),
            );
            column.auto_increment = false;
        }

        Some(column)
    }
}

fn path_to_string(path: &syn::Path) -> String {
    path.to_token_stream().to_string().replace(' ', "")
}
