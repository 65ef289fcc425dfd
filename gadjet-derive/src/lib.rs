use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, GenericArgument, PathArguments, Type, parse_macro_input, spanned::Spanned};

/// Implements `StyleConfig` for a struct of optional style options, plus the conversion into `StyleInput`.
///
/// Every field must be an `Option<T>` with `T: Clone`. The generated `overlay` keeps each field that is `Some`
/// and falls back to the matching field of the defaults otherwise:
///
/// ```ignore
/// #[derive(Clone, Debug, Default, StyleConfig)]
/// pub struct BadgeConfig {
///     pub color: Option<String>,
/// }
/// ```
#[proc_macro_derive(StyleConfig)]
pub fn style_config_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "StyleConfig does not support generic types")
            .to_compile_error()
            .into();
    }

    let named = match &input.data {
        Data::Struct(DataStruct { fields: Fields::Named(named), .. }) => named,
        Data::Struct(DataStruct { fields, .. }) => {
            return syn::Error::new(fields.span(), "StyleConfig: expected a struct with named fields")
                .to_compile_error()
                .into();
        }
        _ => {
            return syn::Error::new(input.span(), "StyleConfig can only be derived for structs").to_compile_error().into();
        }
    };

    let mut merged = Vec::new();
    for f in &named.named {
        let Some(ident) = f.ident.as_ref() else {
            return syn::Error::new(f.span(), "StyleConfig: expected named field identifier").to_compile_error().into();
        };
        if !is_option(&f.ty) {
            return syn::Error::new(f.ty.span(), "StyleConfig: every option must be an `Option<T>`")
                .to_compile_error()
                .into();
        }
        merged.push(quote! {
            #ident: ::core::clone::Clone::clone(&self.#ident).or_else(|| ::core::clone::Clone::clone(&defaults.#ident)),
        });
    }

    TokenStream::from(quote! {
        impl ::gadjet_core::style::StyleConfig for #name {
            fn overlay(&self, defaults: &Self) -> Self {
                Self {
                    #(#merged)*
                }
            }
        }

        impl ::core::convert::From<#name> for ::gadjet_core::style::StyleInput<#name> {
            fn from(config: #name) -> Self {
                ::gadjet_core::style::StyleInput::Config(config)
            }
        }
    })
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(last) = path.path.segments.last() else {
        return false;
    };
    if last.ident != "Option" {
        return false;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => args.args.len() == 1 && matches!(args.args.first(), Some(GenericArgument::Type(_))),
        _ => false,
    }
}
