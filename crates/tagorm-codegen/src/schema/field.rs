use super::ErrorSet;

use heck::ToSnakeCase;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Column name, the snake cased identifier
    pub(crate) column: String,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Tag source from `#[orm("...")]`
    pub(crate) tags: Option<syn::LitStr>,

    /// True if the field is annotated with `#[orm(skip)]`
    pub(crate) skip: bool,
}

enum OrmArg {
    Tags(syn::LitStr),
    Skip,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("orm") {
                continue;
            }

            match attr.parse_args()? {
                OrmArg::Tags(tags) => {
                    if attrs.tags.is_some() {
                        errs.push(syn::Error::new_spanned(attr, "duplicate field tags"));
                    } else {
                        attrs.tags = Some(tags);
                    }
                }
                OrmArg::Skip => {
                    if attrs.skip {
                        errs.push(syn::Error::new_spanned(attr, "duplicate #[orm(skip)] attribute"));
                    } else {
                        attrs.skip = true;
                    }
                }
            }
        }

        if attrs.skip && attrs.tags.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "skipped fields cannot have tags",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            column: ident.unraw().to_string().to_snake_case(),
            attrs,
        })
    }

    /// The member name recorded in the descriptor.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Raw tag source, empty when the field has none.
    pub(crate) fn tags(&self) -> String {
        self.attrs
            .tags
            .as_ref()
            .map(syn::LitStr::value)
            .unwrap_or_default()
    }

    /// True if the tags declare a foreign key. Such fields are relations and
    /// never read from or written to a column.
    pub(crate) fn is_relation(&self) -> bool {
        self.tags()
            .split(';')
            .any(|piece| piece.split(':').next().map(str::trim) == Some("foreignKey"))
    }

    /// True if the field maps to a column.
    pub(crate) fn is_column(&self) -> bool {
        !self.attrs.skip && !self.is_relation()
    }
}

impl syn::parse::Parse for OrmArg {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        // Allowed syntax:
        //
        // #[orm("primaryKey;autoIncrement")]
        // #[orm(skip)]
        let lookahead = input.lookahead1();

        if lookahead.peek(syn::LitStr) {
            Ok(OrmArg::Tags(input.parse()?))
        } else if lookahead.peek(syn::Ident) {
            let ident: syn::Ident = input.parse()?;

            if ident == "skip" {
                Ok(OrmArg::Skip)
            } else {
                Err(syn::Error::new_spanned(ident, "expected a tag string or `skip`"))
            }
        } else {
            Err(lookahead.error())
        }
    }
}
