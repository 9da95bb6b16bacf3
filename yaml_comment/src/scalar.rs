//! Canonical text and tag for scalar values.
//!
//! This is the only place scalar text is produced. The walker calls into it
//! for every leaf, and the emitter renders the resulting text as-is (strings
//! aside, which it quotes as required).

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{Node, Scalar, Tag};

/// Null scalar node.
pub fn null() -> Node {
	Node::scalar(Tag::Null, "null")
}

/// Binary scalar node holding `bytes` as standard base64.
pub fn bytes(bytes: &[u8]) -> Node {
	Node::scalar(Tag::Binary, STANDARD.encode(bytes))
}

/// String scalar node.
pub fn string(s: &str) -> Node {
	Node::scalar(Tag::Str, s)
}

pub fn encode(scalar: &Scalar<'_>) -> Node {
	match scalar {
		Scalar::Str(s) => string(s),
		Scalar::Int(n) => Node::scalar(Tag::Int, n.to_string()),
		Scalar::Uint(n) => Node::scalar(Tag::Int, n.to_string()),
		Scalar::Float(f) => Node::scalar(Tag::Float, format_float(*f)),
		Scalar::Bool(b) => Node::scalar(Tag::Bool, if *b { "true" } else { "false" }),
		Scalar::BigInt(digits) => Node::scalar(Tag::Int, digits.as_str()),
		Scalar::Timestamp(time) => Node::scalar(Tag::Timestamp, time.as_str()),
	}
}

/// Format a float with the fewest digits which round-trip.
///
/// Exponent notation (`1e+06`, `1.5e-07`) is used when the decimal exponent
/// is less than -4 or at least 6. Non-finite values use YAML's `.inf`,
/// `-.inf` and `.nan`.
pub fn format_float(f: f64) -> String {
	if f.is_nan() {
		return ".nan".to_string();
	}
	if f.is_infinite() {
		return if f > 0.0 { ".inf" } else { "-.inf" }.to_string();
	}

	// `{:e}` yields the shortest round-trip digits, e.g. `-1.25e-7`
	let sci = format!("{:e}", f);
	let (mantissa, exp) = match sci.split_once('e') {
		Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
		None => (sci.as_str(), 0),
	};

	if exp < -4 || exp >= 6 {
		let sign = if exp < 0 { '-' } else { '+' };
		return format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs());
	}

	let num_digits = mantissa.bytes().filter(u8::is_ascii_digit).count() as i32;
	let precision = (num_digits - 1 - exp).max(0) as usize;
	format!("{:.*}", precision, f)
}
