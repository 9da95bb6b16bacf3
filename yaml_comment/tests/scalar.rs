use yaml_comment::{
	scalar::{self, format_float},
	Kind, Scalar, Tag,
};

#[test]
fn floats_use_shortest_digits() {
	assert_eq!(format_float(0.0), "0");
	assert_eq!(format_float(-0.0), "-0");
	assert_eq!(format_float(1.0), "1");
	assert_eq!(format_float(0.1), "0.1");
	assert_eq!(format_float(1.5), "1.5");
	assert_eq!(format_float(-2.25), "-2.25");
	assert_eq!(format_float(12.5), "12.5");
	assert_eq!(format_float(100.0), "100");
	assert_eq!(format_float(123456.0), "123456");
	assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
	assert_eq!(format_float(0.0001), "0.0001");
	assert_eq!(format_float(f64::from(0.1f32)), "0.10000000149011612");
}

#[test]
fn floats_switch_to_exponent_form() {
	assert_eq!(format_float(1e6), "1e+06");
	assert_eq!(format_float(1234567.0), "1.234567e+06");
	assert_eq!(format_float(-1e21), "-1e+21");
	assert_eq!(format_float(1e100), "1e+100");
	assert_eq!(format_float(0.00001), "1e-05");
	assert_eq!(format_float(1.5e-7), "1.5e-07");
	assert_eq!(format_float(5e-324), "5e-324");
	assert_eq!(format_float(f64::MAX), "1.7976931348623157e+308");
}

#[test]
fn non_finite_floats() {
	assert_eq!(format_float(f64::INFINITY), ".inf");
	assert_eq!(format_float(f64::NEG_INFINITY), "-.inf");
	assert_eq!(format_float(f64::NAN), ".nan");
}

#[test]
fn floats_read_back() {
	for f in [0.1, 2.5e-5, 1e15, 123.456, -9.999e-300, 6.02214076e23] {
		let text = format_float(f);
		let parsed: f64 = serde_yaml::from_str(&text).unwrap();
		assert_eq!(parsed, f, "{}", text);
	}
}

#[test]
fn encode_tags() {
	let cases = [
		(Scalar::Str("s".into()), Tag::Str, "s"),
		(Scalar::Int(-3), Tag::Int, "-3"),
		(Scalar::Uint(u128::MAX), Tag::Int, "340282366920938463463374607431768211455"),
		(Scalar::Float(2.0), Tag::Float, "2"),
		(Scalar::Bool(false), Tag::Bool, "false"),
		(Scalar::BigInt("-1".to_string()), Tag::Int, "-1"),
		(
			Scalar::Timestamp("2001-02-03T04:05:06Z".to_string()),
			Tag::Timestamp,
			"2001-02-03T04:05:06Z",
		),
	];
	for (value, tag, text) in cases {
		let node = scalar::encode(&value);
		assert_eq!(node.kind, Kind::Scalar);
		assert_eq!(node.tag, tag);
		assert_eq!(node.value, text);
		assert!(node.children.is_empty());
	}

	assert_eq!(scalar::null().value, "null");
	assert_eq!(scalar::null().tag, Tag::Null);
	assert_eq!(scalar::bytes(b"\x00\xff").value, "AP8=");
	assert_eq!(scalar::bytes(b"\x00\xff").tag, Tag::Binary);
}

#[test]
fn scalar_zero_values() {
	assert!(Scalar::Str("".into()).is_zero());
	assert!(Scalar::Int(0).is_zero());
	assert!(Scalar::Uint(0).is_zero());
	assert!(Scalar::Float(0.0).is_zero());
	assert!(Scalar::Bool(false).is_zero());
	assert!(Scalar::BigInt("0".to_string()).is_zero());

	assert!(!Scalar::Str(" ".into()).is_zero());
	assert!(!Scalar::Int(-1).is_zero());
	assert!(!Scalar::Float(f64::MIN_POSITIVE).is_zero());
	assert!(!Scalar::Bool(true).is_zero());
	assert!(!Scalar::Timestamp(String::new()).is_zero());
}
