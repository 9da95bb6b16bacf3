use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{
	ext::IdentExt, spanned::Spanned, DataStruct, Field, Fields, FieldsNamed, FieldsUnnamed,
	GenericArgument, Generics, Ident, Index, PathArguments, Type, Visibility,
};

use crate::attrs::FieldAttrs;

pub fn derive_struct(
	data: DataStruct,
	ident: Ident,
	generics: Generics,
	is_zero: TokenStream,
) -> TokenStream {
	let (metas, accessors): (Vec<TokenStream>, Vec<TokenStream>) = match data.fields {
		Fields::Named(fields) => get_named_fields(fields),
		Fields::Unnamed(fields) => get_unnamed_fields(fields),
		Fields::Unit => (vec![], vec![]),
	};

	let fields_body = if metas.is_empty() {
		quote! { ::std::vec::Vec::new() }
	} else {
		let indexes = 0..metas.len();
		quote! {
			const FIELDS: &[::yaml_comment::FieldMeta] = &[#(#metas),*];
			::std::vec![
				#(::yaml_comment::Field::new(&FIELDS[#indexes], &self.#accessors)),*
			]
		}
	};

	let type_name = ident.unraw().to_string();
	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::yaml_comment::Reflect for #ident #type_generics #where_clause {
			#[inline]
			fn shape(&self) -> ::yaml_comment::Shape<'_> {
				::yaml_comment::Shape::Record(self)
			}

			#is_zero
		}

		#[automatically_derived]
		impl #impl_generics ::yaml_comment::Record for #ident #type_generics #where_clause {
			#[inline]
			fn type_name(&self) -> &'static str {
				#type_name
			}

			fn fields(&self) -> ::std::vec::Vec<::yaml_comment::Field<'_>> {
				#fields_body
			}
		}
	}
}

fn get_named_fields(fields: FieldsNamed) -> (Vec<TokenStream>, Vec<TokenStream>) {
	fields
		.named
		.iter()
		.map(|field| {
			let field_name = field.ident.as_ref().expect("Missing field name");
			let meta = get_field_meta(&field_name.unraw().to_string(), false, field);
			(meta, quote! {#field_name})
		})
		.unzip()
}

fn get_unnamed_fields(fields: FieldsUnnamed) -> (Vec<TokenStream>, Vec<TokenStream>) {
	fields
		.unnamed
		.iter()
		.enumerate()
		.map(|(index, field)| {
			// Embedded fields are keyed by their type's name
			let name = get_type_name(&field.ty).unwrap_or_else(|| index.to_string());
			let meta = get_field_meta(&name, true, field);
			let index = Index::from(index);
			(meta, quote! {#index})
		})
		.unzip()
}

fn get_field_meta(name: &str, anonymous: bool, field: &Field) -> TokenStream {
	let exported = !matches!(field.vis, Visibility::Inherited);
	let metadata = FieldAttrs::parse(&field.attrs).metadata();
	quote_spanned! {field.span()=>
		::yaml_comment::FieldMeta {
			ident: #name,
			exported: #exported,
			anonymous: #anonymous,
			metadata: #metadata,
		}
	}
}

/// Name of the type a field holds, looking through pointers and `Option`.
fn get_type_name(ty: &Type) -> Option<String> {
	match ty {
		Type::Path(type_path) => {
			let segment = type_path.path.segments.last()?;
			let name = segment.ident.unraw().to_string();
			if matches!(name.as_str(), "Box" | "Rc" | "Arc" | "Option") {
				if let PathArguments::AngleBracketed(args) = &segment.arguments {
					if let Some(GenericArgument::Type(inner)) = args.args.first() {
						return get_type_name(inner);
					}
				}
			}
			Some(name)
		}
		Type::Reference(reference) => get_type_name(&reference.elem),
		Type::Paren(paren) => get_type_name(&paren.elem),
		Type::Group(group) => get_type_name(&group.elem),
		_ => None,
	}
}
