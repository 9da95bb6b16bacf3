use crate::{Error, Kind, Node, Result, Tag};

/// Default indentation, in spaces.
const DEFAULT_INDENT: usize = 4;

/// Renders a [`Node`] tree as block-style YAML.
///
/// Comments are written as `# ...` lines: head comments above the node,
/// line comments trailing the node's first line, foot comments below it.
/// For a mapping entry the key line counts as the first line of the value,
/// so a value's head comment lands above its key.
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
	indent: usize,
}

impl Emitter {
	pub fn new() -> Self {
		Self {
			indent: DEFAULT_INDENT,
		}
	}

	/// Create an emitter with `indent` spaces per nesting level.
	/// Clamped to `2..=9`.
	pub fn with_indent(indent: usize) -> Self {
		Self {
			indent: indent.clamp(2, 9),
		}
	}

	pub fn emit(&self, node: &Node) -> Result<String> {
		let mut writer = Writer::new(*self);
		writer.document(node)?;
		Ok(writer.out)
	}
}

impl Default for Emitter {
	fn default() -> Self {
		Self::new()
	}
}

struct Writer {
	emitter: Emitter,
	out: String,
}

impl Writer {
	fn new(emitter: Emitter) -> Self {
		Self {
			emitter,
			out: String::new(),
		}
	}

	fn document(&mut self, node: &Node) -> Result<()> {
		self.comment(0, &node.head_comment);
		if node.is_block() {
			let mut properties = String::new();
			if !node.anchor.is_empty() {
				properties = format!("&{}", node.anchor);
			}
			if !properties.is_empty() || !node.line_comment.is_empty() {
				self.line(0, &properties, &node.line_comment);
			}
			self.block(node, 0)?;
		} else {
			let text = self.inline(node, 0)?;
			self.line(0, &text, &node.line_comment);
		}
		self.comment(0, &node.foot_comment);
		Ok(())
	}

	/// Write a mapping or sequence with its entries at column `indent`.
	fn block(&mut self, node: &Node, indent: usize) -> Result<()> {
		match node.kind {
			Kind::Mapping => self.mapping(node, indent),
			Kind::Sequence => self.sequence(node, indent),
			Kind::Scalar | Kind::Alias => {
				let text = self.inline(node, indent)?;
				self.line(indent, &text, &node.line_comment);
				Ok(())
			}
		}
	}

	fn mapping(&mut self, node: &Node, indent: usize) -> Result<()> {
		if node.children.len() % 2 != 0 {
			return Err(Error::OddMappingChildren {
				len: node.children.len(),
			});
		}

		for (key, value) in node.pairs() {
			self.comment(indent, &key.head_comment);
			self.comment(indent, &value.head_comment);

			let key_text = if key.is_block() {
				None
			} else {
				Some(self.inline(key, indent)?).filter(|text| !text.contains('\n'))
			};

			match key_text {
				Some(key_text) => {
					let line_comment = match key.line_comment.as_str() {
						"" => &value.line_comment,
						comment => comment,
					};
					if value.is_block() {
						let mut text = format!("{}:", key_text);
						if !value.anchor.is_empty() {
							text.push_str(" &");
							text.push_str(&value.anchor);
						}
						self.line(indent, &text, line_comment);
						self.block(value, indent + self.emitter.indent)?;
					} else {
						let value_text = self.inline(value, indent)?;
						self.line(indent, &format!("{}: {}", key_text, value_text), line_comment);
					}
				}
				None => {
					// Complex key
					self.entry(indent, '?', key)?;
					self.entry(indent, ':', value)?;
				}
			}

			self.comment(indent, &value.foot_comment);
			self.comment(indent, &key.foot_comment);
		}
		Ok(())
	}

	fn sequence(&mut self, node: &Node, indent: usize) -> Result<()> {
		for item in &node.children {
			self.comment(indent, &item.head_comment);
			self.entry(indent, '-', item)?;
			self.comment(indent, &item.foot_comment);
		}
		Ok(())
	}

	/// Write `node` after an indicator (`-`, `?` or `:`) at column `indent`.
	///
	/// A block node's first line shares the indicator's line where possible.
	fn entry(&mut self, indent: usize, indicator: char, node: &Node) -> Result<()> {
		if !node.is_block() {
			let text = self.inline(node, indent)?;
			self.line(indent, &format!("{} {}", indicator, text), &node.line_comment);
			return Ok(());
		}

		let nested_indent = indent + 2;
		let mut nested = Writer::new(self.emitter);
		nested.block(node, nested_indent)?;
		let body = nested.out;

		let first_line = &body[nested_indent.min(body.len())..];
		let compact = node.anchor.is_empty()
			&& node.line_comment.is_empty()
			&& !first_line.starts_with('#');
		if compact {
			self.out.push_str(&" ".repeat(indent));
			self.out.push(indicator);
			self.out.push(' ');
			self.out.push_str(first_line);
		} else {
			let mut text = indicator.to_string();
			if !node.anchor.is_empty() {
				text.push_str(" &");
				text.push_str(&node.anchor);
			}
			self.line(indent, &text, &node.line_comment);
			self.out.push_str(&body);
		}
		Ok(())
	}

	/// Render a node which fits on the current line: scalars, aliases and
	/// empty collections.
	///
	/// Continuation lines of multi-line scalars are indented past `indent`.
	fn inline(&self, node: &Node, indent: usize) -> Result<String> {
		let text = match node.kind {
			Kind::Alias => return Ok(format!("*{}", node.value)),
			Kind::Mapping => "{}".to_string(),
			Kind::Sequence => "[]".to_string(),
			Kind::Scalar => match node.tag {
				Tag::Str => quote_str(&node.value, indent)?,
				Tag::Binary => format!("!!binary {}", node.value),
				Tag::Null if node.value.is_empty() => "null".to_string(),
				_ => node.value.clone(),
			},
		};

		if node.anchor.is_empty() {
			Ok(text)
		} else {
			Ok(format!("&{} {}", node.anchor, text))
		}
	}

	/// Write one line at column `indent`, with optional trailing comment.
	///
	/// For multi-line `text`, the comment goes on the first line.
	fn line(&mut self, indent: usize, text: &str, comment: &str) {
		self.out.push_str(&" ".repeat(indent));
		let (first, rest) = match text.split_once('\n') {
			Some((first, rest)) => (first, Some(rest)),
			None => (text, None),
		};
		self.out.push_str(first);

		if !comment.is_empty() {
			if !first.is_empty() {
				self.out.push(' ');
			}
			self.out.push_str("# ");
			self.out.push_str(&comment.lines().collect::<Vec<_>>().join(" "));
		}
		self.out.push('\n');

		if let Some(rest) = rest {
			self.out.push_str(rest);
			self.out.push('\n');
		}
	}

	/// Write each line of `comment` as a `#` line at column `indent`.
	fn comment(&mut self, indent: usize, comment: &str) {
		for line in comment.lines() {
			self.out.push_str(&" ".repeat(indent));
			if line.is_empty() {
				self.out.push('#');
			} else if line.starts_with('#') {
				self.out.push_str(line);
			} else {
				self.out.push_str("# ");
				self.out.push_str(line);
			}
			self.out.push('\n');
		}
	}
}

/// Render a string scalar, quoted only where plain text would read back as
/// something else.
fn quote_str(value: &str, indent: usize) -> Result<String> {
	let rendered = serde_yaml::to_string(value).map_err(Error::Scalar)?;
	let rendered = rendered.strip_suffix('\n').unwrap_or(&rendered);

	let mut lines = rendered.split('\n');
	let header = lines.next().unwrap_or("");
	let mut text = header.to_string();

	// `|2-` pins block content at the parent's column plus 2, so lines must
	// keep that offset. Without an indicator the content indent is detected.
	let padding = if has_indentation_indicator(header) {
		" ".repeat(indent)
	} else {
		" ".repeat(indent + 2)
	};
	for line in lines {
		text.push('\n');
		if !line.is_empty() {
			text.push_str(&padding);
		}
		text.push_str(line);
	}
	Ok(text)
}

/// Whether a block scalar header (`|2-`, `>+1`) carries an explicit
/// indentation indicator.
fn has_indentation_indicator(header: &str) -> bool {
	match header.strip_prefix(|c| c == '|' || c == '>') {
		Some(rest) => rest.bytes().any(|b| b.is_ascii_digit()),
		None => false,
	}
}
