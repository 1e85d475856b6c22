//! Parsing of `#[enhanced(...)]` and `#[repr(...)]` attributes.

use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, LitStr, Meta, Path, Token, Type};

const ATTR: &str = "enhanced";

/// Integer types accepted as an enum's `#[repr]`.
const INT_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

/// Container-level options: `#[enhanced(value_type = "u16", crate = "path")]`.
#[derive(Default)]
pub struct ContainerAttrs {
    pub value_type: Option<Type>,
    pub crate_path: Option<Path>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("value_type") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.value_type = Some(value.parse()?);
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.crate_path = Some(value.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown enhanced attribute, expected `value_type` or `crate`"))
                }
            })?;
        }

        Ok(parsed)
    }

    /// Runtime crate path used by generated code.
    pub fn crate_path(&self) -> TokenStream {
        match &self.crate_path {
            Some(path) => quote! { #path },
            None => quote! { ::enhanced_enums },
        }
    }
}

/// Variant-level options: `#[enhanced(name = "RED", value = 1)]`.
#[derive(Default)]
pub struct VariantAttrs {
    pub name: Option<LitStr>,
    pub value: Option<Expr>,
}

impl VariantAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    parsed.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("value") {
                    parsed.value = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown enhanced attribute, expected `name` or `value`"))
                }
            })?;
        }

        Ok(parsed)
    }
}

/// Returns true if `ty` names a primitive integer type.
pub fn is_integer_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .get_ident()
            .is_some_and(|ident| INT_REPRS.iter().any(|repr| ident == repr)),
        _ => false,
    }
}

/// Returns the integer type from `#[repr(..)]`, if the enum declares one.
///
/// Non-integer reprs such as `C` or `align(N)` are skipped.
pub fn repr_type(attrs: &[Attribute]) -> syn::Result<Option<TokenStream>> {
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in nested {
            if let Meta::Path(path) = meta {
                if let Some(ident) = path.get_ident() {
                    if INT_REPRS.iter().any(|repr| ident == repr) {
                        return Ok(Some(quote! { #ident }));
                    }
                }
            }
        }
    }
    Ok(None)
}
