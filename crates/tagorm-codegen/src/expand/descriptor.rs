use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// A `'static` descriptor built once per model type.
    pub(super) fn expand_descriptor(&self) -> TokenStream {
        let tagorm = &self.tagorm;
        let name = self.model.ident.to_string();

        let table_name = match &self.model.table {
            Some(table) => quote!(Some(#table)),
            None => quote!(None),
        };

        let fields = self.model.fields.iter().map(|field| {
            let name = field.name();
            let tags = field.tags();
            let exported = !field.attrs.skip;
            let ty = &field.ty;

            // Skipped fields may hold any type
            let ty = if field.attrs.skip {
                quote!(__tagorm_skipped)
            } else {
                quote!(<#ty as #tagorm::Primitive>::ty)
            };

            quote! {
                #tagorm::FieldDescriptor {
                    name: #name,
                    tags: #tags,
                    exported: #exported,
                    ty: #ty,
                }
            }
        });

        quote! {
            #[allow(dead_code)]
            fn __tagorm_skipped() -> #tagorm::Type {
                #tagorm::Type::Unknown("skipped")
            }

            static DESCRIPTOR: #tagorm::Descriptor = #tagorm::Descriptor {
                name: #name,
                table_name: #table_name,
                shape: #tagorm::Shape::Struct(&[ #( #fields ),* ]),
            };

            &DESCRIPTOR
        }
    }
}
