use std::io::Write;

use log::debug;

use crate::{Emitter, Node, Reflect, Result, Walker, DEFAULT_MAX_DEPTH};

/// Configurable entry point: walks a value into a [`Node`] tree and renders
/// it with an [`Emitter`].
///
/// ```
/// use yaml_comment::{Encoder, Reflect};
///
/// #[derive(Reflect)]
/// struct Server {
/// 	#[head_comment = "Address to bind"]
/// 	pub host: String,
/// 	#[line_comment = "0 picks a free port"]
/// 	pub port: u16,
/// }
///
/// let server = Server {
/// 	host: "localhost".to_string(),
/// 	port: 0,
/// };
/// let yaml = Encoder::new().indent(2).to_string(&server).unwrap();
/// assert_eq!(yaml, "# Address to bind\nhost: localhost\nport: 0 # 0 picks a free port\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
	emitter: Emitter,
	max_depth: usize,
}

impl Encoder {
	pub fn new() -> Self {
		Self {
			emitter: Emitter::new(),
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}

	/// Set spaces per nesting level. Clamped to `2..=9`.
	pub fn indent(mut self, spaces: usize) -> Self {
		self.emitter = Emitter::with_indent(spaces);
		self
	}

	/// Set nesting depth beyond which conversion fails.
	pub fn max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn to_node<T: Reflect + ?Sized>(&self, value: &T) -> Result<Node> {
		Walker::with_max_depth(self.max_depth).convert(value)
	}

	pub fn to_string<T: Reflect + ?Sized>(&self, value: &T) -> Result<String> {
		let node = self.to_node(value)?;
		let yaml = self.emitter.emit(&node)?;
		debug!("encoded {} bytes of YAML", yaml.len());
		Ok(yaml)
	}

	pub fn to_vec<T: Reflect + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
		self.to_string(value).map(String::into_bytes)
	}

	/// Encode `value` and write it to `writer`. Nothing is written if
	/// conversion fails.
	pub fn to_writer<W: Write, T: Reflect + ?Sized>(&self, mut writer: W, value: &T) -> Result<()> {
		let yaml = self.to_string(value)?;
		writer.write_all(yaml.as_bytes())?;
		Ok(())
	}
}

impl Default for Encoder {
	fn default() -> Self {
		Self::new()
	}
}
