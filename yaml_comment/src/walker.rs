use log::trace;

use crate::{scalar, tag::Directive, Error, FieldMeta, Node, Record, Reflect, Result, Shape};

/// Default for [`Walker::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Converts values to annotated [`Node`] trees.
///
/// Records are converted field by field in declaration order, applying each
/// field's directive (rename, skip, `omitempty`, `inline`) and attaching its
/// comments to the field's value node.
///
/// Conversion either produces a complete tree or fails. Partial trees are
/// never returned.
#[derive(Debug, Clone)]
pub struct Walker {
	max_depth: usize,
	depth: usize,
}

impl Walker {
	pub fn new() -> Self {
		Self::with_max_depth(DEFAULT_MAX_DEPTH)
	}

	/// Create a walker which fails with [`Error::DepthLimitExceeded`] on values
	/// nested more than `max_depth` levels deep.
	pub fn with_max_depth(max_depth: usize) -> Self {
		Self {
			max_depth,
			depth: 0,
		}
	}

	/// Convert a value to a node.
	///
	/// # Panics
	///
	/// Panics if the value contains a type whose shape is
	/// [`Shape::Unsupported`].
	pub fn convert<T: Reflect + ?Sized>(&mut self, value: &T) -> Result<Node> {
		self.convert_shape(value.shape())
	}

	fn convert_shape(&mut self, shape: Shape<'_>) -> Result<Node> {
		if self.depth >= self.max_depth {
			return Err(Error::DepthLimitExceeded {
				limit: self.max_depth,
			});
		}

		self.depth += 1;
		let result = self.dispatch(shape);
		self.depth -= 1;
		result
	}

	fn dispatch(&mut self, shape: Shape<'_>) -> Result<Node> {
		match shape {
			Shape::Bytes(bytes) => Ok(scalar::bytes(bytes)),
			Shape::Null | Shape::Ref(None) => Ok(scalar::null()),
			Shape::Ref(Some(value)) => self.convert(value),
			Shape::Map(entries) => {
				let mut node = Node::mapping();
				for (key, value) in entries {
					let key = self.convert(key)?;
					let value = self.convert(value)?;
					node.push_pair(key, value);
				}
				Ok(node)
			}
			Shape::Record(record) => self.convert_record(record),
			Shape::Seq(elements) => {
				let mut node = Node::sequence();
				node.children.reserve(elements.len());
				for element in elements {
					node.children.push(self.convert(element)?);
				}
				Ok(node)
			}
			Shape::Scalar(value) => Ok(scalar::encode(&value)),
			Shape::Unsupported(type_name) => panic!("cannot marshal type: {}", type_name),
		}
	}

	fn convert_record(&mut self, record: &dyn Record) -> Result<Node> {
		let mut node = Node::mapping();

		for field in record.fields() {
			let meta = field.meta;
			if !meta.exported && !meta.anonymous {
				trace!("skipping private field `{}.{}`", record.type_name(), meta.ident);
				continue;
			}

			let metadata = meta.metadata.resolve();
			let directive = Directive::parse(&metadata.options);
			if directive.skip {
				continue;
			}
			if directive.flow {
				return Err(Error::FlowUnsupported {
					record: record.type_name(),
					field: meta.ident,
				});
			}

			if directive.omit_empty && is_empty(field.value) {
				trace!("omitting empty field `{}.{}`", record.type_name(), meta.ident);
				continue;
			}

			if directive.inline {
				self.inline_into(&mut node, record, meta, field.value)?;
				continue;
			}

			let key = match directive.name {
				"" => scalar::string(&meta.ident.to_lowercase()),
				name => scalar::string(name),
			};

			let mut value = self.convert(field.value)?;
			value.head_comment = metadata.head_comment.into_owned();
			value.line_comment = metadata.line_comment.into_owned();
			value.foot_comment = metadata.foot_comment.into_owned();

			node.push_pair(key, value);
		}

		Ok(node)
	}

	/// Splice the entries of an inlined field into `parent`.
	///
	/// The field must be a map or record, possibly behind references.
	/// A nil reference contributes nothing.
	///
	/// The check is on the value's shape, not its declared type. So an
	/// `Option<Vec<T>>` field passes while `None`, and only fails once it
	/// holds a sequence.
	fn inline_into(
		&mut self,
		parent: &mut Node,
		record: &dyn Record,
		meta: &FieldMeta,
		value: &dyn Reflect,
	) -> Result<()> {
		let mut shape = value.shape();
		while let Shape::Ref(Some(inner)) = shape {
			shape = inner.shape();
		}

		match shape {
			Shape::Map(_) | Shape::Record(_) => {
				let inlined = self.convert_shape(shape)?;
				parent.children.extend(inlined.children);
				Ok(())
			}
			Shape::Ref(None) => Ok(()),
			_ => Err(Error::InlineNotMapping {
				record: record.type_name(),
				field: meta.ident,
			}),
		}
	}
}

impl Default for Walker {
	fn default() -> Self {
		Self::new()
	}
}

/// Whether `omitempty` omits this value.
///
/// A type's own [`Reflect::is_zero`] check takes precedence. Otherwise empty
/// means: empty string, nil reference, zero-length sequence or map, numeric
/// zero, `false`, or a record whose exported fields are all empty. Anything
/// else is never empty.
///
/// Only `None` is a nil reference. `Box`, `Rc` and `Arc` are never nil, so
/// `Box::new(0)` is not empty. Plain references and `Cow` are judged by their
/// pointee.
pub fn is_empty<T: Reflect + ?Sized>(value: &T) -> bool {
	if let Some(is_zero) = value.is_zero() {
		return is_zero;
	}

	match value.shape() {
		Shape::Bytes(bytes) => bytes.is_empty(),
		Shape::Null | Shape::Ref(None) => true,
		Shape::Ref(Some(_)) => false,
		Shape::Map(entries) => entries.len() == 0,
		Shape::Seq(elements) => elements.len() == 0,
		Shape::Scalar(scalar) => scalar.is_zero(),
		Shape::Record(record) => record
			.fields()
			.iter()
			.filter(|field| field.meta.exported)
			.all(|field| is_empty(field.value)),
		Shape::Unsupported(_) => false,
	}
}
