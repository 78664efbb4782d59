use proc_macro2::TokenStream;
use quote::quote;

pub struct Output {
    /// Per-entity output, in input order
    pub entities: Vec<EntityOutput>,
}

/// Generated code for a single entity
pub struct EntityOutput {
    /// Entity name as extracted
    pub name: String,

    /// Module name
    pub module_name: syn::Ident,

    /// Model struct defined in the module
    pub struct_ident: syn::Ident,

    /// Body of the entity module.
    pub body: TokenStream,
}

impl Output {
    /// Contents of the `mod.rs` that declares every entity module and
    /// re-exports its model struct.
    pub fn module(&self) -> TokenStream {
        let decls = self.entities.iter().map(|output| {
            let module_name = &output.module_name;
            let struct_ident = &output.struct_ident;

            quote! {
                pub mod #module_name;
                pub use #module_name::#struct_ident;
            }
        });

        quote! {
            #![allow(dead_code)]

            #( #decls )*
        }
    }
}

impl EntityOutput {
    /// File the module body is written to, relative to the output directory.
    pub fn file_name(&self) -> String {
        let module_name = self.module_name.to_string();
        let module_name = module_name.strip_prefix("r#").unwrap_or(&module_name);
        format!("{module_name}.rs")
    }
}
