//! `#[derive(Error)]` for error enums.
//!
//! Every variant needs a `#[msg = "..."]` attribute. The message is a format string:
//! named-field variants may refer to their fields by name (`#[msg = "bad key {key}"]`).
//! Single-field tuple variants additionally get a `From` impl and report the field as
//! their `source`.

use proc_macro::TokenStream;
use quote::quote;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = syn::parse(input).expect("Could not parse input as enum");

    let name = &item.ident;
    let (impl_generics, type_generics, where_clause) = item.generics.split_for_impl();

    let mut variant_displays = vec![];
    let mut from_impls = vec![];
    let mut variant_sources = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;
        let message = message_of(variant);

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays.push(quote!(Self::#ident => ::std::write!(f, #message)));
            },
            syn::Fields::Unnamed(unnamed_fields) => {
                if unnamed_fields.unnamed.len() != 1 {
                    panic!("{ident}: tuple variants need exactly one field");
                }

                let ty = &unnamed_fields.unnamed[0].ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl #impl_generics ::std::convert::From<#ty> for #name #type_generics #where_clause {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays.push(quote!(Self::#ident(_) => ::std::write!(f, #message)));
                variant_sources.push(quote!(Self::#ident(ref value) => Some(value)));
            },
            syn::Fields::Named(named_fields) => {
                let fields: Vec<_> = named_fields
                    .named
                    .iter()
                    .filter_map(|field| field.ident.as_ref())
                    .collect();

                // Only pass the fields the message refers to, unused named arguments are an error
                let template = message.value();
                let used: Vec<_> = fields
                    .iter()
                    .filter(|field| {
                        let name = field.to_string();
                        template.contains(&format!("{{{name}}}"))
                            || template.contains(&format!("{{{name}:"))
                    })
                    .collect();
                let values = used.clone();

                variant_displays.push(quote!(
                    #[allow(unused_variables)]
                    Self::#ident { #(#fields),* } => ::std::write!(f, #message, #(#used = #values),*)
                ));
            },
        }
    }

    quote!(
        #[automatically_derived]
        impl #impl_generics ::std::fmt::Display for #name #type_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl #impl_generics ::std::error::Error for #name #type_generics #where_clause {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    )
    .into()
}

fn message_of(variant: &syn::Variant) -> syn::LitStr {
    let message = variant
        .attrs
        .iter()
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(name_value) if name_value.path.is_ident("msg") => {
                Some(&name_value.value)
            },
            _ => None,
        })
        .next();

    match message {
        Some(syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(message),
            ..
        })) => message.clone(),
        Some(_) => panic!("{}: #[msg] must be a string literal", variant.ident),
        None => panic!("{}: need #[msg = \"...\"] attribute", variant.ident),
    }
}
