use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned while converting a value to a [`Node`](crate::Node) tree,
/// or while rendering the tree.
#[derive(Debug, Error)]
pub enum Error {
	#[error("field `{record}.{field}`: flow not supported")]
	FlowUnsupported {
		record: &'static str,
		field: &'static str,
	},

	#[error("field `{record}.{field}`: inline only valid on struct or map field")]
	InlineNotMapping {
		record: &'static str,
		field: &'static str,
	},

	#[error("value nested deeper than {limit} levels")]
	DepthLimitExceeded { limit: usize },

	#[error("mapping node has an odd number of children ({len})")]
	OddMappingChildren { len: usize },

	#[error("failed to encode string scalar: {0}")]
	Scalar(#[from] serde_yaml::Error),

	#[error(transparent)]
	Io(#[from] io::Error),
}
