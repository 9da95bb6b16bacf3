use std::borrow::Cow;

use crate::tag::StructTag;

/// Types which can be converted to a [`Node`](crate::Node) tree.
///
/// Each type reports its [`Shape`], and [`Walker`](crate::Walker) builds the
/// node for it. Implemented for primitives, strings, std collections and
/// pointers. Use `#[derive(Reflect)]` for structs and enums.
pub trait Reflect {
	fn shape(&self) -> Shape<'_>;

	/// Custom emptiness check, consulted by `omitempty` before the default
	/// rules. `None` means the type has no opinion.
	#[inline]
	fn is_zero(&self) -> Option<bool> {
		None
	}

	/// Shape of a contiguous run of `Self`.
	///
	/// `u8` overrides this so byte buffers become a single binary scalar.
	#[doc(hidden)]
	#[inline]
	fn slice_shape(slice: &[Self]) -> Shape<'_>
	where Self: Sized {
		Shape::Seq(Box::new(slice.iter().map(|value| value as &dyn Reflect)))
	}
}

/// Custom emptiness capability.
///
/// Wire it into a derived type with `#[yaml(is_zero)]`.
pub trait IsZero {
	fn is_zero(&self) -> bool;
}

pub type Elements<'a> = Box<dyn ExactSizeIterator<Item = &'a dyn Reflect> + 'a>;
pub type Entries<'a> = Box<dyn ExactSizeIterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// The closed set of value categories the walker understands.
pub enum Shape<'a> {
	/// Byte buffer. Encoded as one binary scalar, not a sequence.
	Bytes(&'a [u8]),
	/// No value at all, e.g. `()`.
	Null,
	/// Nullable reference. `None` is a nil reference.
	Ref(Option<&'a dyn Reflect>),
	Map(Entries<'a>),
	Record(&'a dyn Record),
	Seq(Elements<'a>),
	Scalar(Scalar<'a>),
	/// A type the walker cannot encode. Converting it aborts with a panic.
	Unsupported(&'static str),
}

pub enum Scalar<'a> {
	Str(Cow<'a, str>),
	Int(i128),
	Uint(u128),
	Float(f64),
	Bool(bool),
	/// Arbitrary-precision integer, as decimal digits.
	BigInt(String),
	/// Point in time, as an RFC 3339 string.
	Timestamp(String),
}

impl Scalar<'_> {
	/// Zero value of the scalar's type.
	pub fn is_zero(&self) -> bool {
		match self {
			Scalar::Str(s) => s.is_empty(),
			Scalar::Int(n) => *n == 0,
			Scalar::Uint(n) => *n == 0,
			Scalar::Float(f) => *f == 0.0,
			Scalar::Bool(b) => !*b,
			Scalar::BigInt(digits) => digits == "0",
			Scalar::Timestamp(_) => false,
		}
	}
}

/// Struct-like types, whose fields become mapping entries.
pub trait Record {
	fn type_name(&self) -> &'static str;

	/// Fields in declaration order.
	fn fields(&self) -> Vec<Field<'_>>;
}

pub struct Field<'a> {
	pub meta: &'a FieldMeta,
	pub value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
	#[inline]
	pub fn new(meta: &'a FieldMeta, value: &'a dyn Reflect) -> Self {
		Self { meta, value }
	}
}

/// Static description of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
	/// Identifier the default key is derived from. For anonymous fields this
	/// is the field type's name.
	pub ident: &'static str,
	pub exported: bool,
	pub anonymous: bool,
	pub metadata: Metadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metadata {
	/// Options string (`name,flag,...`) and comments given as separate
	/// attributes.
	Attributes {
		options: &'static str,
		comments: Comments,
	},
	/// Raw struct tag, e.g. `yaml:"name,omitempty" head_comment:"..."`.
	StructTag(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Comments {
	pub head: &'static str,
	pub line: &'static str,
	pub foot: &'static str,
}

/// Metadata after struct tag lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedMetadata {
	pub options: Cow<'static, str>,
	pub head_comment: Cow<'static, str>,
	pub line_comment: Cow<'static, str>,
	pub foot_comment: Cow<'static, str>,
}

impl Metadata {
	pub const NONE: Metadata = Metadata::Attributes {
		options: "",
		comments: Comments {
			head: "",
			line: "",
			foot: "",
		},
	};

	pub fn resolve(&self) -> ResolvedMetadata {
		match *self {
			Metadata::Attributes { options, comments } => ResolvedMetadata {
				options: Cow::Borrowed(options),
				head_comment: Cow::Borrowed(comments.head),
				line_comment: Cow::Borrowed(comments.line),
				foot_comment: Cow::Borrowed(comments.foot),
			},
			Metadata::StructTag(raw) => {
				let tag = StructTag::new(raw);
				let options = match tag.get("yaml") {
					// Legacy tags hold the options string alone
					Some(options) if !options.is_empty() => options,
					_ if !raw.contains(':') => Cow::Borrowed(raw),
					_ => Cow::Borrowed(""),
				};
				ResolvedMetadata {
					options,
					head_comment: tag.get("head_comment").unwrap_or_default(),
					line_comment: tag.get("line_comment").unwrap_or_default(),
					foot_comment: tag.get("foot_comment").unwrap_or_default(),
				}
			}
		}
	}
}
