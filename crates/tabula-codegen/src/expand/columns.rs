use super::Expand;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

impl Expand<'_> {
    /// `pub mod columns` with one `tabula::Column` descriptor per column.
    pub(super) fn expand_columns_mod(&self) -> TokenStream {
        let tabula = &self.tabula;
        let table_name = &self.entity.table_name;

        let consts = self.fields.iter().map(|field| {
            let const_ident = &field.const_ident;
            let column = field.column;
            let name = &column.name;
            let ty = self.column_type(column.ty);
            let auto_increment = column.auto_increment;

            let sql_type = match &column.explicit_type {
                Some(sql_type) => quote!(Some(#sql_type)),
                None => quote!(None),
            };

            let default = match &column.default {
                Some(value) => {
                    let value = self.literal(value);
                    quote!(Some(#value))
                }
                None => quote!(None),
            };

            let length = match column.length {
                Some(length) => {
                    let length = Literal::u32_unsuffixed(length);
                    quote!(Some(#length))
                }
                None => quote!(None),
            };

            let precision = match column.precision {
                Some((precision, scale)) => {
                    let precision = Literal::u32_unsuffixed(precision);
                    let scale = Literal::u32_unsuffixed(scale);
                    quote!(Some((#precision, #scale)))
                }
                None => quote!(None),
            };

            quote! {
                pub const #const_ident: #tabula::Column = #tabula::Column {
                    table: #table_name,
                    name: #name,
                    ty: #ty,
                    sql_type: #sql_type,
                    default: #default,
                    auto_increment: #auto_increment,
                    length: #length,
                    precision: #precision,
                };
            }
        });

        quote! {
            pub mod columns {
                #( #consts )*
            }
        }
    }

    /// `COLUMNS`, every descriptor in declaration order.
    pub(super) fn expand_columns_const(&self) -> TokenStream {
        let tabula = &self.tabula;
        let const_idents = self.fields.iter().map(|field| &field.const_ident);

        quote! {
            pub const COLUMNS: &[#tabula::Column] = &[ #( columns::#const_idents, )* ];
        }
    }

    /// `pub mod names` with the qualified `table.column` name of each column.
    pub(super) fn expand_names_mod(&self) -> TokenStream {
        let consts = self.fields.iter().map(|field| {
            let const_ident = &field.const_ident;
            let qualified = format!("{}.{}", self.entity.table_name, field.column.name);

            quote! {
                pub const #const_ident: &str = #qualified;
            }
        });

        quote! {
            pub mod names {
                #( #consts )*
            }
        }
    }
}
