//! Derive macro for jrl-spi-rs. Use `#[derive(Provider)]` with `#[provides(dyn Capability, ...)]`
//! so you don't need one `provide!` per capability.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, DeriveInput, Token, Type};

/// Registers the type at link time for every capability listed in `#[provides(...)]`.
/// The instance is built with `Default::default()`; use `provide!` for other constructors.
///
/// The expansion calls `::jrl_spi_rs::provide!`, so the dependency must keep the name
/// `jrl-spi-rs` in Cargo.toml. Under a renamed dependency, call `provide!` directly.
///
/// ```ignore
/// #[derive(Default, Provider)]
/// #[provides(dyn Greeter, dyn Farewell)]
/// struct EnglishGreeter;
/// ```
#[proc_macro_derive(Provider, attributes(provides))]
pub fn derive_provider(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Provider cannot be derived for generic types",
        ));
    }

    let mut capabilities = Vec::new();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("provides")) {
        let listed = attr.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
        capabilities.extend(listed);
    }
    if capabilities.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "missing #[provides(...)]: list at least one capability, e.g. #[provides(dyn Greeter)]",
        ));
    }

    let registrations = capabilities.iter().map(|capability| {
        quote! {
            ::jrl_spi_rs::provide!(#capability => #name);
        }
    });
    Ok(quote! { #(#registrations)* })
}
