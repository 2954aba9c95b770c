use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// One value per exported field, in declaration order. Relation fields
    /// contribute `Null`.
    pub(super) fn expand_values(&self) -> TokenStream {
        let tagorm = &self.tagorm;

        let values = self.model.exported_fields().map(|field| {
            let ident = &field.ident;

            if field.is_relation() {
                quote!(#tagorm::Value::Null)
            } else {
                quote!(#tagorm::Primitive::to_value(&self.#ident))
            }
        });

        quote!(vec![ #( #values ),* ])
    }

    /// Reads each column field from the row by column name. Relation and
    /// skipped fields start from their `Default`.
    pub(super) fn expand_from_row(&self) -> TokenStream {
        let tagorm = &self.tagorm;

        let fields = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let column = &field.column;

            if field.is_column() {
                quote! {
                    #ident: #tagorm::Primitive::load(row.take(#column)?)?,
                }
            } else {
                quote! {
                    #ident: ::core::default::Default::default(),
                }
            }
        });

        quote! {
            Ok(Self {
                #( #fields )*
            })
        }
    }
}
