use std::{fmt, slice};

/// Structural kind of a [`Node`].
///
/// Determines how `children` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
	#[default]
	Scalar,
	Sequence,
	/// Children alternate key node, value node.
	Mapping,
	/// Reference to an anchored node. `value` holds the anchor name.
	Alias,
}

/// Semantic type of a node's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
	#[default]
	Null,
	Bool,
	Str,
	Int,
	Float,
	Timestamp,
	Seq,
	Map,
	Binary,
}

impl Tag {
	pub const fn as_str(self) -> &'static str {
		match self {
			Tag::Null => "!!null",
			Tag::Bool => "!!bool",
			Tag::Str => "!!str",
			Tag::Int => "!!int",
			Tag::Float => "!!float",
			Tag::Timestamp => "!!timestamp",
			Tag::Seq => "!!seq",
			Tag::Map => "!!map",
			Tag::Binary => "!!binary",
		}
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Node of the annotated tree.
///
/// Produced by [`Walker`](crate::Walker) and consumed by
/// [`Emitter`](crate::Emitter). Every node carries three comment slots:
///
/// * `head_comment` is emitted on the lines above the node.
/// * `line_comment` trails the node's first line.
/// * `foot_comment` is emitted on the lines below the node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
	pub kind: Kind,
	pub tag: Tag,
	/// Scalar text. Empty for collections.
	pub value: String,
	pub anchor: String,
	pub children: Vec<Node>,
	pub head_comment: String,
	pub line_comment: String,
	pub foot_comment: String,
}

impl Node {
	pub fn scalar(tag: Tag, value: impl Into<String>) -> Self {
		Self {
			kind: Kind::Scalar,
			tag,
			value: value.into(),
			..Self::default()
		}
	}

	pub fn mapping() -> Self {
		Self {
			kind: Kind::Mapping,
			tag: Tag::Map,
			..Self::default()
		}
	}

	pub fn sequence() -> Self {
		Self {
			kind: Kind::Sequence,
			tag: Tag::Seq,
			..Self::default()
		}
	}

	pub fn alias(anchor: impl Into<String>) -> Self {
		Self {
			kind: Kind::Alias,
			value: anchor.into(),
			..Self::default()
		}
	}

	/// Set the comment emitted above this node.
	pub fn with_head_comment(mut self, comment: impl Into<String>) -> Self {
		self.head_comment = comment.into();
		self
	}

	/// Set the comment trailing this node's line.
	pub fn with_line_comment(mut self, comment: impl Into<String>) -> Self {
		self.line_comment = comment.into();
		self
	}

	/// Set the comment emitted below this node.
	pub fn with_foot_comment(mut self, comment: impl Into<String>) -> Self {
		self.foot_comment = comment.into();
		self
	}

	pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
		self.anchor = anchor.into();
		self
	}

	/// Append a key/value pair to a mapping node.
	pub fn push_pair(&mut self, key: Node, value: Node) {
		self.children.push(key);
		self.children.push(value);
	}

	/// Iterate a mapping node's children as `(key, value)` pairs.
	///
	/// A trailing unpaired child is not yielded.
	pub fn pairs(&self) -> Pairs<'_> {
		Pairs {
			iter: self.children.chunks_exact(2),
		}
	}

	/// Look up the value for a string key in a mapping node.
	pub fn get(&self, key: &str) -> Option<&Node> {
		self
			.pairs()
			.find(|(k, _)| k.kind == Kind::Scalar && k.value == key)
			.map(|(_, v)| v)
	}

	/// `true` for a mapping or sequence with at least one child.
	/// Those are the nodes which render over several lines.
	pub fn is_block(&self) -> bool {
		matches!(self.kind, Kind::Mapping | Kind::Sequence) && !self.children.is_empty()
	}
}

pub struct Pairs<'a> {
	iter: slice::ChunksExact<'a, Node>,
}

impl<'a> Iterator for Pairs<'a> {
	type Item = (&'a Node, &'a Node);

	fn next(&mut self) -> Option<Self::Item> {
		self.iter.next().map(|pair| (&pair[0], &pair[1]))
	}
}
