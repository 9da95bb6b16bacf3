use std::{collections::BTreeMap, ops};

use rand::Rng;
use rand_pcg::Lcg64Xsh32;
use yaml_comment::Reflect;

#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
pub enum Protocol {
	Http,
	Https,
	#[yaml = "tcp"]
	Tcp,
}

impl Generate for Protocol {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		match rng.gen_range(0..3) {
			0 => Protocol::Http,
			1 => Protocol::Https,
			2 => Protocol::Tcp,
			_ => unreachable!(),
		}
	}
}

#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct Endpoint {
	#[head_comment = "Port exposed by the service"]
	pub port: u16,
	pub protocol: Protocol,
	#[yaml(omitempty)]
	pub path: String,
}

impl Generate for Endpoint {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const PATHS: [&str; 4] = ["", "/", "/healthz", "/api/v1"];
		Self {
			port: rng.gen(),
			protocol: Protocol::generate(rng),
			path: PATHS[rng.gen_range(0..PATHS.len())].to_string(),
		}
	}
}

#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
pub struct Limits {
	pub cpu: f64,
	#[line_comment = "MiB"]
	pub memory: u32,
}

impl Generate for Limits {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			cpu: rng.gen_range(0.0..8.0),
			memory: rng.gen_range(0..65536),
		}
	}
}

#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct Service {
	pub name: String,
	#[yaml(omitempty)]
	#[line_comment = "defaults to 1"]
	pub replicas: u32,
	pub endpoints: Vec<Endpoint>,
	#[yaml(omitempty)]
	pub limits: Option<Limits>,
	#[foot_comment = "end of labels"]
	pub labels: BTreeMap<String, String>,
}

impl Generate for Service {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const NAMES: [&str; 6] = ["web", "worker", "cache", "db", "gateway", "scheduler"];
		// Values which need quoting to read back as strings
		const LABEL_VALUES: [&str; 9] = [
			"stable",
			"true",
			"null",
			"8080",
			"1.5",
			"a: b",
			"# not a comment",
			"",
			"multi\nline",
		];

		let labels = (0..rng.gen_range(0..4))
			.map(|index| {
				let value = LABEL_VALUES[rng.gen_range(0..LABEL_VALUES.len())];
				(format!("label{}", index), value.to_string())
			})
			.collect();

		Self {
			name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
			replicas: rng.gen_range(0..4),
			endpoints: generate_vec(rng, 0..3),
			limits: Option::generate(rng),
			labels,
		}
	}
}

#[derive(Reflect, Clone, Debug, PartialEq)]
pub struct Fleet {
	#[head_comment = "Generated fleet"]
	pub region: String,
	pub services: Vec<Service>,
}

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

impl<T: Generate> Generate for Option<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		if rng.gen_bool(0.5) {
			Some(T::generate(rng))
		} else {
			None
		}
	}
}

fn generate_vec<R: Rng, T: Generate>(rng: &mut R, range: ops::Range<usize>) -> Vec<T> {
	let len = rng.gen_range(range);
	let mut result = Vec::with_capacity(len);
	for _ in 0..len {
		result.push(T::generate(rng));
	}
	result
}

pub fn generate_data() -> Fleet {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;

	let mut rng = Lcg64Xsh32::new(STATE, STREAM);

	const SERVICES: usize = 50;
	Fleet {
		region: "eu-west-1".to_string(),
		services: generate_vec(&mut rng, SERVICES..SERVICES + 1),
	}
}
