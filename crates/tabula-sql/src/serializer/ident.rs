use super::{Formatter, ToSql};

use tabula_core::Result;

/// An identifier, quoted according to the dialect
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let quoted = f.dialect().quote(self.0.as_ref());
        f.dst.push_str(&quoted);
        Ok(())
    }
}
