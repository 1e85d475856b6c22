//! Implementation of #[derive(EnhancedEnum)] proc-macro.

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::{Ident, Literal};
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attrs::{is_integer_type, repr_type, ContainerAttrs, VariantAttrs};

pub fn derive_enhanced_enum_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// One declared member, in declaration order.
struct Member<'a> {
    ident: &'a Ident,
    name: String,
    value: proc_macro2::TokenStream,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ty = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnhancedEnum can only be derived for enums",
            ));
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "EnhancedEnum cannot be derived for an enum without variants",
        ));
    }

    let container = ContainerAttrs::parse(&input.attrs)?;
    let krate = container.crate_path();
    let value_type = match &container.value_type {
        Some(value_type) => quote! { #value_type },
        None => repr_type(&input.attrs)?.unwrap_or_else(|| quote! { isize }),
    };
    let integer_values = container.value_type.as_ref().map_or(true, is_integer_type);

    let mut seen = HashSet::new();
    let mut members = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "EnhancedEnum variants cannot carry fields",
            ));
        }

        let attrs = VariantAttrs::parse(&variant.attrs)?;
        let ident = &variant.ident;
        let name = attrs
            .name
            .map(|lit| lit.value())
            .unwrap_or_else(|| ident.to_string());

        if !seen.insert(name.clone()) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate member name `{}`", name),
            ));
        }

        // Without an explicit value the discriminant is the value.
        let value = match attrs.value {
            Some(expr) => quote! { #expr },
            None if integer_values => quote! { #ty::#ident as #value_type },
            None => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "explicit value required for non-integer value_type",
                ));
            }
        };

        members.push(Member { ident, name, value });
    }

    let type_name = ty.to_string();
    let idents: Vec<_> = members.iter().map(|m| m.ident).collect();
    let names = members.iter().map(|m| &m.name);
    let values = members.iter().map(|m| &m.value);
    let positions = (0..members.len()).map(Literal::usize_unsuffixed);

    // No `Self::` paths in generated bodies: a variant named `Value` or `Err`
    // is ambiguous with the associated type of the same name.
    Ok(quote! {
        impl #impl_generics #krate::EnhancedEnum for #ty #ty_generics #where_clause {
            type Value = #value_type;

            const TYPE_NAME: &'static str = #type_name;

            const MEMBERS: &'static [Self] = &[#(#ty::#idents),*];

            fn name(&self) -> &'static str {
                match self {
                    #(#ty::#idents => #names,)*
                }
            }

            fn value(&self) -> #value_type {
                match self {
                    #(#ty::#idents => #values,)*
                }
            }

            fn position(&self) -> usize {
                match self {
                    #(#ty::#idents => #positions,)*
                }
            }
        }

        impl #impl_generics ::core::fmt::Display for #ty #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#krate::EnhancedEnum::name(self))
            }
        }

        impl #impl_generics ::core::str::FromStr for #ty #ty_generics #where_clause {
            type Err = #krate::EnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, #krate::EnumError> {
                <Self as #krate::EnhancedEnum>::from_string(s)
            }
        }
    })
}
