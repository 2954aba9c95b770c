extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `tagorm::Model` for a struct with named fields.
///
/// Field tags go in `#[orm("...")]`, e.g. `#[orm("primaryKey;autoIncrement")]`.
/// `#[orm(skip)]` leaves a field out of the table. The table name can be set
/// with `#[orm(table = "...")]` on the struct.
///
/// Every non-skipped field type must implement `tagorm::Primitive`. Relation
/// fields (those with a `foreignKey` tag) and skipped fields must also
/// implement `Default`; they are never read from a row.
#[proc_macro_derive(Model, attributes(orm))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match tagorm_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
