use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_struct(&self) -> TokenStream {
        let struct_ident = &self.struct_ident;

        let fields = self.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = self.rust_type(field.column.ty);

            quote!(pub #ident: #ty,)
        });

        quote! {
            #[derive(Debug, Clone, PartialEq, Default)]
            pub struct #struct_ident {
                #( #fields )*
            }
        }
    }

    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let tabula = &self.tabula;
        let struct_ident = &self.struct_ident;
        let name = &self.entity.name;

        quote! {
            impl #tabula::Entity for #struct_ident {
                const NAME: &'static str = #name;
                const TABLE_NAME: &'static str = TABLE_NAME;
                const COLUMNS: &'static [#tabula::Column] = COLUMNS;
            }
        }
    }
}
