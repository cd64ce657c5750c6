use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

/// Feature id that excludes an annotated field from decoding, matching the
/// `vertex:"-"` convention of the wire API's other client libraries.
const IGNORE_SENTINEL: &str = "-";

/// Derives `vertigo::FeatureRecord` for a named-field struct.
///
/// Fields opt into decoding with a `#[feature(...)]` attribute:
///
/// ```ignore
/// #[derive(FeatureRecord)]
/// struct UserFeatures {
///     #[feature(id = "age")]
///     age: i64,
///     #[feature]                  // bound under the field name, "score"
///     score: f64,
///     #[feature(skip)]            // annotated but never decoded
///     cached_rank: i64,
///     internal: String,           // no attribute: not part of the catalog
/// }
/// ```
///
/// The generated `field_catalog()` builds the name-to-field table once per
/// type and caches it for the process lifetime.
#[proc_macro_derive(FeatureRecord, attributes(feature))]
pub fn derive_feature_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_feature_record(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[derive(Default)]
struct FeatureFieldOptions {
    id: Option<String>,
    skip: bool,
}

struct FieldBinding {
    feature_id: String,
    position: usize,
    ident: syn::Ident,
    ty: syn::Type,
}

fn expand_feature_record(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            input.generics,
            "FeatureRecord does not support generic structs",
        ));
    }

    let data_struct = match input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "FeatureRecord can only be derived for structs",
            ));
        }
    };

    let named_fields = match data_struct.fields {
        Fields::Named(fields) => fields,
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "FeatureRecord requires named fields",
            ));
        }
    };

    let mut bindings = Vec::<FieldBinding>::new();
    for (position, field) in named_fields.named.into_iter().enumerate() {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "FeatureRecord requires named fields"))?;

        let Some(options) = parse_feature_options(&field.attrs)? else {
            continue;
        };
        if options.skip {
            continue;
        }

        let feature_id = options
            .id
            .unwrap_or_else(|| ident.to_string().trim_start_matches("r#").to_string());
        if feature_id == IGNORE_SENTINEL {
            continue;
        }

        if bindings.iter().any(|b| b.feature_id == feature_id) {
            return Err(syn::Error::new(
                field.span(),
                format!("duplicate feature id '{feature_id}' on struct {struct_name}"),
            ));
        }

        bindings.push(FieldBinding {
            feature_id,
            position,
            ident,
            ty: field.ty,
        });
    }

    let write_fns = bindings.iter().map(|binding| {
        let fn_name = write_fn_ident(&binding.ident);
        let ident = &binding.ident;
        quote! {
            fn #fn_name(
                record: &mut #struct_name,
                feature: &str,
                value: &::vertigo::FeatureValue,
            ) -> ::vertigo::Result<()> {
                ::vertigo::decode::FeatureField::write_value(&mut record.#ident, feature, value)
            }
        }
    });

    let bind_calls = bindings.iter().map(|binding| {
        let fn_name = write_fn_ident(&binding.ident);
        let feature_id = &binding.feature_id;
        let position = binding.position;
        let ty = &binding.ty;
        quote! {
            .bind(
                #feature_id,
                #position,
                <#ty as ::vertigo::decode::FeatureField>::KIND,
                #fn_name,
            )
        }
    });

    Ok(quote! {
        impl ::vertigo::FeatureRecord for #struct_name {
            fn field_catalog() -> &'static ::vertigo::FieldCatalog<Self> {
                static CATALOG: ::std::sync::OnceLock<::vertigo::FieldCatalog<#struct_name>> =
                    ::std::sync::OnceLock::new();
                CATALOG.get_or_init(|| {
                    #(#write_fns)*
                    ::vertigo::FieldCatalog::builder()
                        #(#bind_calls)*
                        .build()
                })
            }
        }
    })
}

fn write_fn_ident(field: &syn::Ident) -> syn::Ident {
    let suffix = field.to_string().trim_start_matches("r#").to_string();
    format_ident!("__vertigo_write_{}", suffix)
}

fn parse_feature_options(attrs: &[syn::Attribute]) -> syn::Result<Option<FeatureFieldOptions>> {
    let mut options: Option<FeatureFieldOptions> = None;

    for attr in attrs {
        if !attr.path().is_ident("feature") {
            continue;
        }

        if options.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "Duplicate #[feature(...)] attribute on field",
            ));
        }

        let mut parsed = FeatureFieldOptions::default();
        match &attr.meta {
            syn::Meta::Path(_) => {}
            syn::Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("id") {
                        let value = meta.value()?;
                        let lit: LitStr = value.parse()?;
                        parsed.id = Some(lit.value());
                        return Ok(());
                    }

                    if meta.path.is_ident("skip") {
                        parsed.skip = true;
                        return Ok(());
                    }

                    Err(meta.error(
                        "Unsupported #[feature(...)] option. Supported: id = \"...\", skip",
                    ))
                })?;
            }
            syn::Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "Unsupported #[feature = ...] syntax. Use #[feature], #[feature(id = \"...\")], #[feature(skip)]",
                ));
            }
        }

        if parsed.skip && parsed.id.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "#[feature(skip)] cannot be combined with a feature id",
            ));
        }

        options = Some(parsed);
    }

    Ok(options)
}
