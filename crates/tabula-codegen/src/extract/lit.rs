use syn::spanned::Spanned;
use tabula_core::DefaultValue;

/// 1-based source line where `node` starts.
pub(super) fn line(node: &impl Spanned) -> usize {
    node.span().start().line
}

/// Strips references, parentheses and invisible groups.
pub(super) fn peel(mut expr: &syn::Expr) -> &syn::Expr {
    loop {
        expr = match expr {
            syn::Expr::Reference(reference) => &reference.expr,
            syn::Expr::Paren(paren) => &paren.expr,
            syn::Expr::Group(group) => &group.expr,
            _ => return expr,
        };
    }
}

pub(super) fn string(expr: &syn::Expr) -> Option<String> {
    match peel(expr) {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) => Some(lit.value()),
        _ => None,
    }
}

pub(super) fn boolean(expr: &syn::Expr) -> Result<bool, String> {
    match peel(expr) {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Bool(lit),
            ..
        }) => Ok(lit.value),
        _ => Err("expected `true` or `false`".to_string()),
    }
}

pub(super) fn unsigned(expr: &syn::Expr) -> Result<u32, String> {
    match peel(expr) {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => lit
            .base10_parse()
            .map_err(|_| format!("`{lit}` is not a valid unsigned integer")),
        _ => Err("expected an integer literal".to_string()),
    }
}

pub(super) fn default_value(expr: &syn::Expr) -> Result<DefaultValue, String> {
    match peel(expr) {
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => match peel(expr) {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Int(lit),
                ..
            }) => format!("-{}", lit.base10_digits())
                .parse()
                .map(DefaultValue::Int)
                .map_err(|_| format!("`-{lit}` does not fit in a 64-bit integer")),
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Float(lit),
                ..
            }) => float(lit).map(|value| DefaultValue::Float(-value)),
            _ => Err("only numeric literals can be negated".to_string()),
        },
        syn::Expr::Lit(expr) => match &expr.lit {
            syn::Lit::Int(lit) => lit
                .base10_parse()
                .map(DefaultValue::Int)
                .map_err(|_| format!("`{lit}` does not fit in a 64-bit integer")),
            syn::Lit::Float(lit) => float(lit).map(DefaultValue::Float),
            syn::Lit::Str(lit) => Ok(DefaultValue::Str(lit.value())),
            syn::Lit::Char(lit) => Ok(DefaultValue::Char(lit.value())),
            syn::Lit::Bool(lit) => Ok(DefaultValue::Bool(lit.value)),
            _ => Err("unsupported default literal".to_string()),
        },
        _ => Err("expected a literal".to_string()),
    }
}

fn float(lit: &syn::LitFloat) -> Result<f64, String> {
    lit.base10_parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("`{lit}` is not a finite floating point number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(src: &str) -> syn::Expr {
        syn::parse_str(src).unwrap()
    }

    #[test]
    fn default_literals() {
        assert_eq!(default_value(&expr("42")), Ok(DefaultValue::Int(42)));
        assert_eq!(default_value(&expr("-42")), Ok(DefaultValue::Int(-42)));
        assert_eq!(
            default_value(&expr("-9223372036854775808")),
            Ok(DefaultValue::Int(i64::MIN))
        );
        assert_eq!(default_value(&expr("1.5")), Ok(DefaultValue::Float(1.5)));
        assert_eq!(default_value(&expr("-0.25")), Ok(DefaultValue::Float(-0.25)));
        assert_eq!(default_value(&expr("\"x\"")), Ok(DefaultValue::Str("x".into())));
        assert_eq!(default_value(&expr("'y'")), Ok(DefaultValue::Char('y')));
        assert_eq!(default_value(&expr("false")), Ok(DefaultValue::Bool(false)));
    }

    #[test]
    fn malformed_defaults() {
        assert!(default_value(&expr("99999999999999999999")).is_err());
        assert!(default_value(&expr("1e999")).is_err());
        assert!(default_value(&expr("-\"x\"")).is_err());
        assert!(default_value(&expr("b\"x\"")).is_err());
        assert!(default_value(&expr("some_const")).is_err());
    }

    #[test]
    fn unsigned_literals() {
        assert_eq!(unsigned(&expr("100")), Ok(100));
        assert_eq!(unsigned(&expr("(7)")), Ok(7));
        assert!(unsigned(&expr("-1")).is_err());
        assert!(unsigned(&expr("4294967296")).is_err());
        assert!(unsigned(&expr("\"100\"")).is_err());
    }
}
