#[cfg(feature = "derive")]
pub use yaml_comment_derive::Reflect;

mod emitter;
pub use emitter::Emitter;

mod encoder;
pub use encoder::Encoder;

mod error;
pub use error::{Error, Result};

mod node;
pub use node::{Kind, Node, Pairs, Tag};

mod reflect;
pub use reflect::{
	Comments, Elements, Entries, Field, FieldMeta, IsZero, Metadata, Record, Reflect,
	ResolvedMetadata, Scalar, Shape,
};

pub mod scalar;
pub mod tag;

mod walker;
pub use walker::{is_empty, Walker, DEFAULT_MAX_DEPTH};

mod impls;

/// Serialize a value to YAML bytes, with the comments attached through field
/// metadata.
pub fn marshal<T: Reflect + ?Sized>(value: &T) -> Result<Vec<u8>> {
	Encoder::new().to_vec(value)
}

/// Serialize a value to a YAML string.
pub fn to_string<T: Reflect + ?Sized>(value: &T) -> Result<String> {
	Encoder::new().to_string(value)
}

/// Convert a value to an annotated [`Node`] tree, without rendering it.
pub fn to_node<T: Reflect + ?Sized>(value: &T) -> Result<Node> {
	Encoder::new().to_node(value)
}
