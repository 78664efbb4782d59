use super::Expand;

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use tabula_core::{
    ColumnType, CqlType, DefaultValue, InformixType, MysqlType, OracleType, SharedType,
    SqlServerType,
};

impl Expand<'_> {
    /// Rust type of the model field for a column.
    pub(super) fn rust_type(&self, ty: ColumnType) -> TokenStream {
        use ColumnType::*;

        match ty {
            Shared(ty) => match ty {
                SharedType::TinyInt => quote!(i8),
                SharedType::SmallInt => quote!(i16),
                SharedType::Int => quote!(i32),
                SharedType::BigInt | SharedType::Bit => quote!(i64),
                SharedType::Boolean => quote!(bool),
                SharedType::Real => quote!(f32),
                SharedType::Double => quote!(f64),
                SharedType::Blob | SharedType::Binary | SharedType::Varbinary => {
                    quote!(::std::vec::Vec<u8>)
                }
                // Text, decimals, identifiers and temporal values
                _ => quote!(::std::string::String),
            },
            Mysql(MysqlType::Year) => quote!(i16),
            Mysql(MysqlType::TinyBlob | MysqlType::MediumBlob | MysqlType::LongBlob)
            | SqlServer(SqlServerType::Image)
            | Oracle(OracleType::Raw)
            | Informix(InformixType::Byte) => quote!(::std::vec::Vec<u8>),
            Cql(CqlType::Counter) => quote!(i64),
            Oracle(OracleType::BinaryFloat) => quote!(f32),
            Oracle(OracleType::BinaryDouble) => quote!(f64),
            Informix(InformixType::Serial) => quote!(i32),
            Informix(InformixType::Serial8 | InformixType::BigSerial) => quote!(i64),
            _ => quote!(::std::string::String),
        }
    }

    /// Expression that constructs `ty` at runtime.
    pub(super) fn column_type(&self, ty: ColumnType) -> TokenStream {
        let tabula = &self.tabula;
        let variant = format_ident!(
            "{}",
            match ty {
                ColumnType::Shared(_) => "Shared",
                ColumnType::Postgresql(_) => "Postgresql",
                ColumnType::Mysql(_) => "Mysql",
                ColumnType::SqlServer(_) => "SqlServer",
                ColumnType::Cql(_) => "Cql",
                ColumnType::ClickHouse(_) => "ClickHouse",
                ColumnType::Presto(_) => "Presto",
                ColumnType::Oracle(_) => "Oracle",
                ColumnType::Informix(_) => "Informix",
            }
        );
        let band = format_ident!("{}", ty.band_ident());
        let ident = format_ident!("{}", ty.ident());

        quote!(#tabula::ColumnType::#variant(#tabula::#band::#ident))
    }

    pub(super) fn literal(&self, value: &DefaultValue) -> TokenStream {
        let tabula = &self.tabula;

        match value {
            DefaultValue::Int(value) => {
                let value = Literal::i64_unsuffixed(*value);
                quote!(#tabula::Literal::Int(#value))
            }
            DefaultValue::Float(value) => {
                let value = float(*value);
                quote!(#tabula::Literal::Float(#value))
            }
            DefaultValue::Str(value) => quote!(#tabula::Literal::Str(#value)),
            DefaultValue::Char(value) => quote!(#tabula::Literal::Char(#value)),
            DefaultValue::Bool(value) => quote!(#tabula::Literal::Bool(#value)),
        }
    }
}

fn float(value: f64) -> TokenStream {
    if value.is_nan() {
        quote!(f64::NAN)
    } else if value == f64::INFINITY {
        quote!(f64::INFINITY)
    } else if value == f64::NEG_INFINITY {
        quote!(f64::NEG_INFINITY)
    } else {
        let value = Literal::f64_unsuffixed(value);
        quote!(#value)
    }
}
