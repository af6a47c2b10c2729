//! Derive macro for settings-registry
//!
//! This crate provides `#[derive(SettingsObject)]`, generating the ordered
//! property declarations of a settings module from a plain struct.
//!
//! # Usage
//!
//! ```text
//! use settings_registry::DeriveSettingsObject;
//!
//! #[derive(Default, DeriveSettingsObject)]
//! #[settings(namespace = "bot")]
//! struct BotSettings {
//!     #[setting(ui_name = "Amount", cli = ["-a", "--amount"], min = 1, max = 100000)]
//!     amount: i32,
//!
//!     #[setting(options = [("http", "HTTP"), ("socks5", "SOCKS5")])]
//!     proxy_type: String,
//!
//!     #[setting(link_max = "join_max_delay", min = 0, max = 5000)]
//!     join_min_delay: i32,
//!     #[setting(min = 0, max = 5000)]
//!     join_max_delay: i32,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta, Token, Type, parse_macro_input};

/// Derive macro for generating `SettingsObject` implementations.
///
/// Default values come from the struct's `Default` implementation, the Rust
/// field type picks the property variant:
///
/// | Field type | Property |
/// |---|---|
/// | `bool` | `BooleanProperty` |
/// | `i8`, `i16`, `i32`, `u8`, `u16` | `IntProperty` |
/// | `f32`, `f64` | `DoubleProperty` |
/// | `String` | `StringProperty`, or `ComboProperty` with `options` |
///
/// # Attributes
///
/// ## Container attributes (`#[settings(...)]`)
/// - `namespace = "name"` - Namespace of every property (required)
///
/// ## Field attributes (`#[setting(...)]`)
/// - `key = "..."` - Key override (default: field name with `_` replaced by `-`)
/// - `ui_name = "..."` - Display label (default: capitalized field name)
/// - `description = "..."` - Help text
/// - `cli = ["-a", "--amount"]` - Command-line flag names
/// - `min = 0`, `max = 100`, `step = 1` - Bounds for numbers
/// - `format = "..."` - Display format hint for numbers
/// - `options = [("id", "Display Name"), ...]` - Turns a `String` into a combo
/// - `secret` - Mask a `String` value
/// - `link_max = "field"` - Pair this integer field (the minimum) with another
///   integer field (the maximum) into one `MinMaxPropertyLink`, placed where
///   the minimum field is declared
/// - `skip` - Leave this field out
#[proc_macro_derive(SettingsObject, attributes(settings, setting))]
pub fn derive_settings_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let namespace = parse_container_attrs(&input.attrs)?.namespace.ok_or_else(|| {
        syn::Error::new_spanned(
            input,
            "SettingsObject requires a namespace.\n\nExample: #[settings(namespace = \"bot\")]",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "SettingsObject can only be derived for structs with named fields.",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "SettingsObject can only be derived for structs.",
            ));
        }
    };

    let mut settings = Vec::new();
    for field in fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        if let Some(ident) = field.ident.as_ref() {
            settings.push((ident.unraw().to_string(), field, attrs));
        }
    }

    let linked_max = link_targets(&settings)?;

    let mut properties = Vec::new();
    for (name, field, attrs) in &settings {
        if linked_max.contains(name.as_str()) {
            continue;
        }

        let property = field_property(field, name, &namespace, attrs)?;
        let Some(max_name) = &attrs.link_max else {
            properties.push(quote! { ::settings_registry::Property::from(#property) });
            continue;
        };

        let Some((_, max_field, max_attrs)) = settings.iter().find(|(n, ..)| n == max_name) else {
            continue;
        };
        let max_property = field_property(max_field, max_name, &namespace, max_attrs)?;
        properties.push(quote! {
            ::settings_registry::Property::from(
                ::settings_registry::MinMaxPropertyLink::new(#property, #max_property)
            )
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::settings_registry::SettingsObject for #name #ty_generics #where_clause {
            #[allow(unused_variables, clippy::useless_conversion)]
            fn properties() -> ::std::vec::Vec<::settings_registry::Property> {
                let defaults = <Self as ::core::default::Default>::default();
                ::std::vec![#(#properties),*]
            }
        }
    })
}

/// Container-level attributes from #[settings(...)]
#[derive(Default)]
struct ContainerAttrs {
    namespace: Option<String>,
}

/// Field-level attributes from #[setting(...)]
#[derive(Default)]
struct FieldAttrs {
    key: Option<String>,
    ui_name: Option<String>,
    description: Option<String>,
    cli: Vec<String>,
    min: Option<Expr>,
    max: Option<Expr>,
    step: Option<Expr>,
    format: Option<String>,
    options: Vec<(String, String)>, // (id, display name) pairs for combos
    link_max: Option<String>,
    secret: bool,
    skip: bool,
}

impl FieldAttrs {
    fn has_number_attrs(&self) -> bool {
        self.min.is_some() || self.max.is_some() || self.step.is_some() || self.format.is_some()
    }
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut result = ContainerAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("settings")) {
        let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in nested {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("namespace") => {
                    result.namespace = Some(string_lit(&nv.value, "namespace")?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown #[settings] attribute, expected `namespace = \"...\"`",
                    ));
                }
            }
        }
    }

    Ok(result)
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut result = FieldAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("setting")) {
        let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in nested {
            match meta {
                Meta::Path(path) if path.is_ident("secret") => result.secret = true,
                Meta::Path(path) if path.is_ident("skip") => result.skip = true,
                Meta::NameValue(nv) => {
                    let value = nv.value;
                    let Some(ident) = nv.path.get_ident().map(ToString::to_string) else {
                        return Err(syn::Error::new_spanned(nv.path, "unknown #[setting] attribute"));
                    };
                    match ident.as_str() {
                        "key" => result.key = Some(string_lit(&value, "key")?),
                        "ui_name" => result.ui_name = Some(string_lit(&value, "ui_name")?),
                        "description" => {
                            result.description = Some(string_lit(&value, "description")?);
                        }
                        "format" => result.format = Some(string_lit(&value, "format")?),
                        "cli" => result.cli = string_array(&value)?,
                        "options" => result.options = option_pairs(&value)?,
                        "link_max" => result.link_max = Some(string_lit(&value, "link_max")?),
                        "min" => result.min = Some(value),
                        "max" => result.max = Some(value),
                        "step" => result.step = Some(value),
                        _ => {
                            return Err(syn::Error::new_spanned(
                                value,
                                format!("unknown #[setting] attribute `{ident}`"),
                            ));
                        }
                    }
                }
                other => {
                    return Err(syn::Error::new_spanned(other, "unknown #[setting] attribute"));
                }
            }
        }
    }

    Ok(result)
}

fn string_lit(expr: &Expr, name: &str) -> syn::Result<String> {
    if let Expr::Lit(lit) = expr {
        if let Lit::Str(s) = &lit.lit {
            return Ok(s.value());
        }
    }
    Err(syn::Error::new_spanned(
        expr,
        format!("#[setting({name})] must be a string literal.\n\nExample: {name} = \"...\""),
    ))
}

fn string_array(expr: &Expr) -> syn::Result<Vec<String>> {
    let Expr::Array(array) = expr else {
        return Err(syn::Error::new_spanned(
            expr,
            "#[setting(cli)] must be an array of strings.\n\nExample: cli = [\"-a\", \"--amount\"]",
        ));
    };
    array.elems.iter().map(|e| string_lit(e, "cli")).collect()
}

fn option_pairs(expr: &Expr) -> syn::Result<Vec<(String, String)>> {
    let error = || {
        syn::Error::new_spanned(
            expr,
            "#[setting(options)] must be an array of (id, display name) tuples.\n\nExample: options = [(\"a\", \"Alpha\")]",
        )
    };

    let Expr::Array(array) = expr else {
        return Err(error());
    };

    array
        .elems
        .iter()
        .map(|item| match item {
            Expr::Tuple(tuple) if tuple.elems.len() == 2 => Ok((
                string_lit(&tuple.elems[0], "options")?,
                string_lit(&tuple.elems[1], "options")?,
            )),
            _ => Err(error()),
        })
        .collect()
}

/// Check `link_max` pairs and collect the names of the fields used as a maximum
fn link_targets<'a>(
    settings: &'a [(String, &syn::Field, FieldAttrs)],
) -> syn::Result<HashSet<&'a str>> {
    let mut targets = HashSet::new();

    for (name, field, attrs) in settings {
        let Some(max_name) = &attrs.link_max else {
            continue;
        };
        let error = |message: String| Err(syn::Error::new_spanned(field, message));

        if !is_int(&field.ty) {
            return error(format!("`link_max` on `{name}` requires an integer field"));
        }
        let Some((_, max_field, max_attrs)) = settings.iter().find(|(n, ..)| n == max_name) else {
            return error(format!(
                "`link_max` refers to `{max_name}`, which is not a setting field of this struct"
            ));
        };
        if max_name == name {
            return error(format!("`{name}` cannot be linked to itself"));
        }
        if !is_int(&max_field.ty) {
            return error(format!("linked maximum `{max_name}` must be an integer field"));
        }
        if max_attrs.link_max.is_some() {
            return error(format!(
                "linked maximum `{max_name}` cannot declare its own `link_max`"
            ));
        }
        if !targets.insert(max_name.as_str()) {
            return error(format!("`{max_name}` is already the maximum of another link"));
        }
    }

    Ok(targets)
}

/// Constructor plus descriptive setters for one field
fn field_property(
    field: &syn::Field,
    name: &str,
    namespace: &str,
    attrs: &FieldAttrs,
) -> syn::Result<proc_macro2::TokenStream> {
    let Some(field_name) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };

    let key = attrs.key.clone().unwrap_or_else(|| name.replace('_', "-"));
    let ui_name = attrs
        .ui_name
        .clone()
        .unwrap_or_else(|| capitalize_words(name));

    let constructor = property_constructor(field, field_name, namespace, &key, attrs)?;

    let mut modifiers = vec![quote! { .ui_name(#ui_name) }];
    if let Some(desc) = &attrs.description {
        modifiers.push(quote! { .description(#desc) });
    }
    if !attrs.cli.is_empty() {
        let flags = &attrs.cli;
        modifiers.push(quote! { .cli_flags([#(#flags),*]) });
    }

    Ok(quote! { { #constructor } #(#modifiers)* })
}

fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) => path.path.get_ident().map(ToString::to_string),
        _ => None,
    }
}

fn is_int(ty: &Type) -> bool {
    matches!(
        type_name(ty).as_deref(),
        Some("i8" | "i16" | "i32" | "u8" | "u16")
    )
}

/// Generate the property constructor matching the field's Rust type
fn property_constructor(
    field: &syn::Field,
    field_name: &syn::Ident,
    namespace: &str,
    key: &str,
    attrs: &FieldAttrs,
) -> syn::Result<proc_macro2::TokenStream> {
    let type_name = type_name(&field.ty);
    let mismatch = |message: &str| Err(syn::Error::new_spanned(&field.ty, message));

    match type_name.as_deref() {
        Some("bool") => {
            if attrs.has_number_attrs() || attrs.secret || !attrs.options.is_empty() {
                return mismatch("bool fields only accept descriptive #[setting] attributes");
            }
            Ok(quote! {
                ::settings_registry::BooleanProperty::new(#namespace, #key, defaults.#field_name)
            })
        }
        Some("i8" | "i16" | "i32" | "u8" | "u16") => {
            if attrs.secret || !attrs.options.is_empty() {
                return mismatch("`secret` and `options` only apply to String fields");
            }
            let bounds = number_modifiers(attrs);
            Ok(quote! {
                ::settings_registry::IntProperty::new(#namespace, #key, i32::from(defaults.#field_name))
                    #(#bounds)*
            })
        }
        Some("f32" | "f64") => {
            if attrs.secret || !attrs.options.is_empty() {
                return mismatch("`secret` and `options` only apply to String fields");
            }
            let bounds = number_modifiers(attrs);
            Ok(quote! {
                ::settings_registry::DoubleProperty::new(#namespace, #key, f64::from(defaults.#field_name))
                    #(#bounds)*
            })
        }
        Some("String") => {
            if attrs.has_number_attrs() {
                return mismatch("`min`, `max`, `step` and `format` only apply to number fields");
            }
            if attrs.options.is_empty() {
                let secret = attrs.secret.then(|| quote! { .secret() });
                return Ok(quote! {
                    ::settings_registry::StringProperty::new(#namespace, #key, defaults.#field_name.clone())
                        #secret
                });
            }
            if attrs.secret {
                return mismatch("a combo cannot be secret");
            }
            let options = attrs.options.iter().map(|(id, display_name)| {
                quote! { ::settings_registry::ComboOption::new(#id, #display_name) }
            });
            Ok(quote! {
                ::settings_registry::ComboProperty::new(
                    #namespace,
                    #key,
                    defaults.#field_name.clone(),
                    ::std::vec![#(#options),*],
                )
            })
        }
        _ => mismatch(
            "unsupported SettingsObject field type.\n\nUse bool, i8, i16, i32, u8, u16, f32, f64 or String, or mark the field #[setting(skip)]",
        ),
    }
}

fn number_modifiers(attrs: &FieldAttrs) -> Vec<proc_macro2::TokenStream> {
    let mut modifiers = Vec::new();
    if let Some(min) = &attrs.min {
        modifiers.push(quote! { .min(#min) });
    }
    if let Some(max) = &attrs.max {
        modifiers.push(quote! { .max(#max) });
    }
    if let Some(step) = &attrs.step {
        modifiers.push(quote! { .step(#step) });
    }
    if let Some(format) = &attrs.format {
        modifiers.push(quote! { .format(#format) });
    }
    modifiers
}

/// "join_min_delay" -> "Join Min Delay"
fn capitalize_words(name: &str) -> String {
    name.split('_')
        .filter(|s| !s.is_empty())
        .map(|s| {
            let mut c = s.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
