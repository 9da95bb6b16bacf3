use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataEnum, Fields, Generics, Ident, Variant};

use crate::attrs::get_options;

pub fn derive_enum(
	data: DataEnum,
	ident: Ident,
	generics: Generics,
	is_zero: TokenStream,
) -> TokenStream {
	let arms: Vec<TokenStream> = data.variants.iter().map(get_variant_arm).collect();

	let body = if arms.is_empty() {
		quote! { match *self {} }
	} else {
		quote! {
			match self {
				#(#arms)*
			}
		}
	};

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::yaml_comment::Reflect for #ident #type_generics #where_clause {
			fn shape(&self) -> ::yaml_comment::Shape<'_> {
				#body
			}

			#is_zero
		}
	}
}

/// Unit variants encode as their name. Single-field tuple variants encode as
/// a one-entry mapping from name to value.
fn get_variant_arm(variant: &Variant) -> TokenStream {
	let variant_ident = &variant.ident;
	let name = get_variant_name(variant);

	match &variant.fields {
		Fields::Unit => {
			quote_spanned! {variant.span()=>
				Self::#variant_ident => ::yaml_comment::Shape::Scalar(
					::yaml_comment::Scalar::Str(::std::borrow::Cow::Borrowed(#name))
				),
			}
		}
		Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
			quote_spanned! {variant.span()=>
				Self::#variant_ident(value) => ::yaml_comment::Shape::Map(
					::std::boxed::Box::new(::std::iter::once((
						&#name as &dyn ::yaml_comment::Reflect,
						value as &dyn ::yaml_comment::Reflect,
					)))
				),
			}
		}
		_ => panic!(
			"`#[derive(Reflect)]` supports only unit variants and tuple variants with 1 field. \
			 Variant `{}` is neither",
			variant_ident
		),
	}
}

fn get_variant_name(variant: &Variant) -> String {
	let attrs: Vec<_> = variant
		.attrs
		.iter()
		.filter(|attr| attr.path.is_ident("yaml"))
		.collect();

	let options = match attrs.as_slice() {
		[] => return variant.ident.to_string(),
		[attr] => get_options(attr),
		_ => panic!("Only 1 `#[yaml]` attribute can be used on a variant"),
	};
	if options == "-" || options.contains(',') {
		panic!("Only `rename` is supported in `#[yaml]` on enum variants");
	}
	match options.as_str() {
		"" => variant.ident.to_string(),
		_ => options,
	}
}
