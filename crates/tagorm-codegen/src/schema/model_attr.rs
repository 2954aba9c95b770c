#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        for attr in attrs {
            if !attr.path().is_ident("orm") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    if self.table.is_some() {
                        return Err(meta.error("duplicate `table` attribute"));
                    }

                    let table: syn::LitStr = meta.value()?.parse()?;

                    if table.value().is_empty() {
                        return Err(syn::Error::new_spanned(table, "table name cannot be empty"));
                    }

                    self.table = Some(table);
                    Ok(())
                } else {
                    Err(meta.error("expected `table = \"table_name\"`"))
                }
            })?;
        }

        Ok(())
    }
}
