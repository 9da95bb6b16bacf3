#![allow(dead_code)]

use yaml_comment::{Kind, Node, Reflect, Tag};

mod fleet_data;
pub use fleet_data::{generate_data as generate_fleet_data, Fleet, Limits, Protocol, Service};

/// Convert with default settings, panicking on error.
pub fn convert<T: Reflect + ?Sized>(value: &T) -> Node {
	yaml_comment::to_node(value).unwrap()
}

/// Assert `node` is a scalar with given tag and text.
pub fn assert_scalar(node: &Node, tag: Tag, value: &str) {
	assert_eq!(node.kind, Kind::Scalar, "not a scalar: {:?}", node);
	assert_eq!(node.tag, tag, "wrong tag for {:?}", node.value);
	assert_eq!(node.value, value);
}

/// Keys of a mapping node, in order.
pub fn keys(node: &Node) -> Vec<&str> {
	assert_eq!(node.kind, Kind::Mapping);
	node.pairs().map(|(key, _)| key.value.as_str()).collect()
}

pub fn assert_no_comments(node: &Node) {
	assert_eq!(node.head_comment, "");
	assert_eq!(node.line_comment, "");
	assert_eq!(node.foot_comment, "");
}

/// Parse emitted YAML back into a generic value.
pub fn parse(yaml: &str) -> serde_yaml::Value {
	serde_yaml::from_str(yaml).unwrap_or_else(|err| panic!("invalid YAML ({}):\n{}", err, yaml))
}
