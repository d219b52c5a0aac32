use proc_macro::TokenStream;

mod overlay;

#[proc_macro_derive(Overlay, attributes(overlay))]
pub fn derive_overlay(input: TokenStream) -> TokenStream {
    overlay::derive_overlay(input.into()).into()
}
