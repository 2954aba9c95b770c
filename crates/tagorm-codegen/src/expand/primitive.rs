use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the model appear as the type of another model's relation field.
    pub(super) fn expand_primitive(&self) -> TokenStream {
        let tagorm = &self.tagorm;
        let model_ident = &self.model.ident;
        let name = model_ident.to_string();

        quote! {
            impl #tagorm::Primitive for #model_ident {
                fn ty() -> #tagorm::Type {
                    #tagorm::Type::Model(<#model_ident as #tagorm::Model>::descriptor)
                }

                fn to_value(&self) -> #tagorm::Value {
                    #tagorm::Value::Null
                }

                fn load(value: #tagorm::Value) -> #tagorm::Result<Self> {
                    Err(#tagorm::Error::type_conversion(value, #name))
                }
            }
        }
    }
}
