//! Decoding of field metadata strings.
//!
//! [`Directive::parse`] decodes an options string (`name,flag,flag`).
//! [`StructTag`] looks up keys in a raw struct tag
//! (`yaml:"name,omitempty" head_comment:"..."`).

use std::borrow::Cow;

/// Per-field directive decoded from an options string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directive<'a> {
	/// Key override. Empty means "use the field identifier".
	pub name: &'a str,
	pub skip: bool,
	pub omit_empty: bool,
	pub inline: bool,
	pub flow: bool,
}

impl<'a> Directive<'a> {
	/// Decode `name[,flag[,flag...]]`.
	///
	/// `-` on its own means skip. Recognized flags are `omitempty`, `inline`
	/// and `flow`. Unknown flags are ignored.
	pub fn parse(options: &'a str) -> Self {
		if options == "-" {
			return Self {
				skip: true,
				..Self::default()
			};
		}

		let mut parts = options.split(',');
		let mut directive = Self {
			name: parts.next().unwrap_or(""),
			..Self::default()
		};
		for flag in parts {
			match flag {
				"omitempty" => directive.omit_empty = true,
				"inline" => directive.inline = true,
				"flow" => directive.flow = true,
				_ => {}
			}
		}
		directive
	}
}

/// Raw struct tag: space-separated `key:"quoted value"` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructTag<'a>(&'a str);

impl<'a> StructTag<'a> {
	pub const fn new(raw: &'a str) -> Self {
		Self(raw)
	}

	/// Get value associated with `key`.
	///
	/// Scanning stops at the first malformed pair, so keys after it are not
	/// found.
	pub fn get(&self, key: &str) -> Option<Cow<'a, str>> {
		let mut rest = self.0;
		loop {
			rest = rest.trim_start_matches(' ');
			if rest.is_empty() {
				return None;
			}

			// Scan to colon. A space, quote or control character ends the name.
			let bytes = rest.as_bytes();
			let name_len = bytes
				.iter()
				.position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
				.unwrap_or(bytes.len());
			if name_len == 0
				|| name_len + 1 >= bytes.len()
				|| bytes[name_len] != b':'
				|| bytes[name_len + 1] != b'"'
			{
				return None;
			}
			let name = &rest[..name_len];
			rest = &rest[name_len + 1..];

			// Scan quoted string to find value
			let bytes = rest.as_bytes();
			let mut i = 1;
			while i < bytes.len() && bytes[i] != b'"' {
				if bytes[i] == b'\\' {
					i += 1;
				}
				i += 1;
			}
			if i >= bytes.len() {
				return None;
			}
			let quoted = &rest[..=i];
			rest = &rest[i + 1..];

			if name == key {
				return unquote(quoted);
			}
		}
	}
}

/// Strip quotes from a double-quoted string and process its escapes.
/// Returns `None` if an escape is malformed.
fn unquote(quoted: &str) -> Option<Cow<'_, str>> {
	let inner = &quoted[1..quoted.len() - 1];
	if !inner.contains('\\') {
		return Some(Cow::Borrowed(inner));
	}

	let mut out = String::with_capacity(inner.len());
	let mut chars = inner.chars();
	while let Some(c) = chars.next() {
		if c != '\\' {
			out.push(c);
			continue;
		}
		let escaped = match chars.next()? {
			'n' => '\n',
			't' => '\t',
			'r' => '\r',
			'a' => '\x07',
			'b' => '\x08',
			'f' => '\x0c',
			'v' => '\x0b',
			'\\' => '\\',
			'"' => '"',
			'\'' => '\'',
			'x' => hex_char(&mut chars, 2)?,
			'u' => hex_char(&mut chars, 4)?,
			'U' => hex_char(&mut chars, 8)?,
			first @ '0'..='7' => octal_char(first, &mut chars)?,
			_ => return None,
		};
		out.push(escaped);
	}
	Some(Cow::Owned(out))
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
	let mut code = 0u32;
	for _ in 0..digits {
		code = code * 16 + chars.next()?.to_digit(16)?;
	}
	char::from_u32(code)
}

/// Three octal digits, at most `\377`.
fn octal_char(first: char, chars: &mut std::str::Chars<'_>) -> Option<char> {
	let mut code = first.to_digit(8)?;
	for _ in 0..2 {
		code = code * 8 + chars.next()?.to_digit(8)?;
	}
	if code > 0o377 {
		return None;
	}
	char::from_u32(code)
}
