use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, GenericParam, Generics};

mod attrs;
use attrs::get_container_options;
mod enums;
use enums::derive_enum;
mod structs;
use structs::derive_struct;

#[proc_macro_derive(
	Reflect,
	attributes(yaml, yaml_tag, head_comment, line_comment, foot_comment)
)]
pub fn reflect(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	reflect_impl(input).into()
}

fn reflect_impl(input: DeriveInput) -> TokenStream {
	let options = get_container_options(&input.attrs);
	let generics = add_trait_bounds(input.generics);

	// `#[yaml(is_zero)]` routes emptiness checks through the type's `IsZero` impl
	let is_zero = if options.is_zero {
		quote! {
			#[inline]
			fn is_zero(&self) -> ::std::option::Option<bool> {
				::std::option::Option::Some(::yaml_comment::IsZero::is_zero(self))
			}
		}
	} else {
		quote! {}
	};

	match input.data {
		Data::Struct(data) => derive_struct(data, input.ident, generics, is_zero),
		Data::Enum(data) => derive_enum(data, input.ident, generics, is_zero),
		Data::Union(_) => panic!("Deriving `Reflect` on unions not supported"),
	}
}

/// Add `Reflect` bound to every type parameter
fn add_trait_bounds(mut generics: Generics) -> Generics {
	for param in &mut generics.params {
		if let GenericParam::Type(type_param) = param {
			type_param.bounds.push(parse_quote!(::yaml_comment::Reflect));
		}
	}
	generics
}
