use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;

/// Derives the `FromRng` trait.
///
/// Every field of the struct is generated through its own `FromRng` implementation, in
/// declaration order. Named, tuple and unit structs are supported.
#[proc_macro_derive(FromRng)]
pub fn derive_from_rng(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    let syn::Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "`FromRng` can only be derived for structs",
        ));
    };

    let body = match &data.fields {
        syn::Fields::Named(fields) => {
            let init = fields.named.iter().map(|field| {
                let ident = &field.ident;
                quote! { #ident: ::nk_rng::FromRng::from_rng(rng), }
            });
            quote! { Self { #(#init)* } }
        }
        syn::Fields::Unnamed(fields) => {
            let init = fields.unnamed.iter().map(|field| {
                let span = field.span();
                quote::quote_spanned! { span => ::nk_rng::FromRng::from_rng(rng), }
            });
            quote! { Self( #(#init)* ) }
        }
        syn::Fields::Unit => quote! { Self },
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::nk_rng::FromRng for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn from_rng(rng: &mut impl ::nk_rng::Rng) -> Self {
                #body
            }
        }
    })
}
