mod descriptor;
mod primitive;
mod row;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for tagorm types
    tagorm: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_ident = &self.model.ident;
        let tagorm = &self.tagorm;

        let descriptor = self.expand_descriptor();
        let values = self.expand_values();
        let from_row = self.expand_from_row();
        let primitive = self.expand_primitive();

        wrap_in_const(quote! {
            impl #tagorm::Model for #model_ident {
                fn descriptor() -> &'static #tagorm::Descriptor {
                    #descriptor
                }

                fn values(&self) -> Vec<#tagorm::Value> {
                    #values
                }

                #[allow(unused_mut)]
                fn from_row(mut row: #tagorm::Row) -> #tagorm::Result<Self> {
                    #from_row
                }
            }

            #primitive
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        tagorm: quote!(_tagorm::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tagorm as _tagorm;
            #code
        };
    }
}
