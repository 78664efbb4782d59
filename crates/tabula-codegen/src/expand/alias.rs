use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// The aliased accessor: `alias("u")` returns a struct whose fields are
    /// the alias-qualified column names and which displays as
    /// `table AS u`.
    pub(super) fn expand_aliased(&self) -> TokenStream {
        let aliased_ident = &self.aliased_ident;
        let idents: Vec<_> = self.fields.iter().map(|field| &field.ident).collect();
        let const_idents = self.fields.iter().map(|field| &field.const_ident);

        quote! {
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct #aliased_ident {
                #( pub #idents: ::std::string::String, )*
                __alias: ::std::string::String,
            }

            pub fn alias(alias: &str) -> #aliased_ident {
                #aliased_ident {
                    #( #idents: columns::#const_idents.with_alias(alias), )*
                    __alias: alias.to_string(),
                }
            }

            impl #aliased_ident {
                pub fn table_alias(&self) -> &str {
                    &self.__alias
                }
            }

            impl core::fmt::Display for #aliased_ident {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    write!(f, "{} AS {}", TABLE_NAME, self.__alias)
                }
            }
        }
    }
}
