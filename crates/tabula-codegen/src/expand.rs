mod alias;
mod columns;
mod model;
mod ty;
mod util;

use crate::out::{EntityOutput, Output};

use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tabula_core::{Column, Entity};

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Model struct
    struct_ident: syn::Ident,

    /// Struct returned by `alias()`
    aliased_ident: syn::Ident,

    /// One entry per column, in declaration order
    fields: Vec<Field<'a>>,

    /// Path prefix for tabula types
    tabula: TokenStream,
}

struct Field<'a> {
    column: &'a Column,

    /// Struct field name
    ident: syn::Ident,

    /// Name of the column's constants
    const_ident: syn::Ident,
}

impl<'a> Expand<'a> {
    fn new(entity: &'a Entity) -> Expand<'a> {
        let struct_ident = util::ident(&entity.name.to_upper_camel_case());
        let aliased_ident = format_ident!("{}Aliased", struct_ident.to_string().trim_start_matches("r#"));

        let mut taken = vec![];
        let fields = entity
            .columns
            .iter()
            .map(|column| {
                let name = util::unique(&column.name.to_snake_case(), &mut taken);

                Field {
                    column,
                    ident: util::ident(&name),
                    const_ident: util::ident(&name.to_shouty_snake_case()),
                }
            })
            .collect();

        Expand {
            entity,
            struct_ident,
            aliased_ident,
            fields,
            tabula: quote!(tabula),
        }
    }

    fn expand(&self) -> TokenStream {
        let table_name = &self.entity.table_name;
        let columns = self.expand_columns_mod();
        let names = self.expand_names_mod();
        let columns_const = self.expand_columns_const();
        let model = self.expand_model_struct();
        let entity_impl = self.expand_entity_impl();
        let aliased = self.expand_aliased();

        quote! {
            pub const TABLE_NAME: &str = #table_name;

            #columns
            #columns_const
            #names
            #model
            #entity_impl
            #aliased
        }
    }
}

pub(super) fn generate(entities: &[Entity]) -> Output {
    Output {
        entities: entities
            .iter()
            .map(|entity| {
                let expand = Expand::new(entity);

                EntityOutput {
                    name: entity.name.clone(),
                    module_name: util::ident(&entity.name.to_snake_case()),
                    struct_ident: expand.struct_ident.clone(),
                    body: expand.expand(),
                }
            })
            .collect(),
    }
}
