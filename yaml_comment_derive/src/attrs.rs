use proc_macro2::TokenStream;
use quote::quote;
use syn::{
	punctuated::Punctuated, token::Comma, Attribute, Lit, Meta, MetaList, MetaNameValue, NestedMeta,
};

pub struct ContainerOptions {
	pub is_zero: bool,
}

/// Get options from `#[yaml(...)]` attributes on the type itself.
pub fn get_container_options(attrs: &[Attribute]) -> ContainerOptions {
	let mut is_zero = false;
	for attr in attrs.iter().filter(|attr| attr.path.is_ident("yaml")) {
		let nested = match attr.parse_meta() {
			Ok(Meta::List(MetaList { nested, .. })) => nested,
			_ => panic!("Malformed `#[yaml]` attribute. Expected e.g. `#[yaml(is_zero)]`"),
		};
		for item in nested {
			match item {
				NestedMeta::Meta(Meta::Path(path)) if path.is_ident("is_zero") => is_zero = true,
				_ => panic!("Unrecognised `#[yaml]` option on type. Valid options are 'is_zero'"),
			}
		}
	}
	ContainerOptions { is_zero }
}

/// Metadata attributes of a single field.
#[derive(Default)]
pub struct FieldAttrs {
	pub options: Option<String>,
	pub struct_tag: Option<String>,
	pub head_comment: Option<String>,
	pub line_comment: Option<String>,
	pub foot_comment: Option<String>,
}

impl FieldAttrs {
	pub fn parse(attrs: &[Attribute]) -> Self {
		let mut field_attrs = Self::default();
		for attr in attrs {
			let (slot, value) = if attr.path.is_ident("yaml") {
				(&mut field_attrs.options, get_options(attr))
			} else if attr.path.is_ident("yaml_tag") {
				(&mut field_attrs.struct_tag, get_str(attr, "yaml_tag"))
			} else if attr.path.is_ident("head_comment") {
				(&mut field_attrs.head_comment, get_str(attr, "head_comment"))
			} else if attr.path.is_ident("line_comment") {
				(&mut field_attrs.line_comment, get_str(attr, "line_comment"))
			} else if attr.path.is_ident("foot_comment") {
				(&mut field_attrs.foot_comment, get_str(attr, "foot_comment"))
			} else {
				continue;
			};

			if slot.is_some() {
				let name = attr.path.get_ident().map(|ident| ident.to_string());
				panic!(
					"Only 1 `#[{}]` attribute can be used on a field",
					name.unwrap_or_default()
				);
			}
			*slot = Some(value);
		}

		if field_attrs.struct_tag.is_some()
			&& (field_attrs.options.is_some()
				|| field_attrs.head_comment.is_some()
				|| field_attrs.line_comment.is_some()
				|| field_attrs.foot_comment.is_some())
		{
			panic!("`#[yaml_tag]` cannot be combined with `#[yaml]` or comment attributes");
		}

		field_attrs
	}

	/// Tokens constructing this field's `yaml_comment::Metadata`.
	pub fn metadata(&self) -> TokenStream {
		if let Some(raw) = &self.struct_tag {
			return quote! { ::yaml_comment::Metadata::StructTag(#raw) };
		}

		let options = self.options.as_deref().unwrap_or("");
		let head = self.head_comment.as_deref().unwrap_or("");
		let line = self.line_comment.as_deref().unwrap_or("");
		let foot = self.foot_comment.as_deref().unwrap_or("");
		quote! {
			::yaml_comment::Metadata::Attributes {
				options: #options,
				comments: ::yaml_comment::Comments {
					head: #head,
					line: #line,
					foot: #foot,
				},
			}
		}
	}
}

/// Get options string from a `#[yaml]` attribute.
///
/// Accepts `#[yaml = "name,flag"]`, `#[yaml("name,flag")]`, and the structured
/// `#[yaml(rename = "name", omitempty, inline, flow, skip)]`, which is assembled
/// into the same `name,flag` form.
pub fn get_options(attr: &Attribute) -> String {
	match attr.parse_meta() {
		Ok(Meta::NameValue(MetaNameValue {
			lit: Lit::Str(s), ..
		})) => s.value(),
		Ok(Meta::List(MetaList { nested, .. })) => get_options_from_list(nested),
		_ => panic!("Malformed `#[yaml]` attribute. Expected e.g. `#[yaml = \"name,omitempty\"]`"),
	}
}

fn get_options_from_list(nested: Punctuated<NestedMeta, Comma>) -> String {
	if nested.len() == 1 {
		if let NestedMeta::Lit(Lit::Str(s)) = &nested[0] {
			return s.value();
		}
	}

	let mut name = String::new();
	let mut flags = vec![];
	let mut skip = false;
	for item in nested {
		match item {
			NestedMeta::Meta(Meta::NameValue(MetaNameValue {
				path,
				lit: Lit::Str(s),
				..
			})) if path.is_ident("rename") => name = s.value(),
			NestedMeta::Meta(Meta::Path(path)) => {
				let option = path
					.get_ident()
					.map(|ident| ident.to_string())
					.unwrap_or_default();
				match option.as_str() {
					"skip" => skip = true,
					"omitempty" | "omit_empty" => flags.push("omitempty"),
					"inline" => flags.push("inline"),
					"flow" => flags.push("flow"),
					_ => {
						panic!(
							"Unrecognised `#[yaml]` option '{}'. Valid options are 'rename', 'skip', \
							 'omitempty', 'inline', 'flow'",
							option
						);
					}
				}
			}
			_ => panic!("Malformed `#[yaml]` option. Expected e.g. `#[yaml(rename = \"name\")]`"),
		}
	}

	if skip {
		if !name.is_empty() || !flags.is_empty() {
			panic!("`#[yaml(skip)]` cannot be combined with other options");
		}
		return "-".to_string();
	}

	let mut options = name;
	for flag in flags {
		options.push(',');
		options.push_str(flag);
	}
	options
}

/// Get value of a `#[name = "..."]` attribute.
fn get_str(attr: &Attribute, name: &str) -> String {
	match attr.parse_meta() {
		Ok(Meta::NameValue(MetaNameValue {
			lit: Lit::Str(s), ..
		})) => s.value(),
		_ => panic!("`#[{}]` must be a string e.g. `#[{} = \"...\"]`", name, name),
	}
}
