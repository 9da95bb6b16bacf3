use std::io;

use serde_yaml::{Mapping, Value};
use yaml_comment::{Encoder, Error, Reflect};

mod common;
use common::{generate_fleet_data, parse, Fleet, Limits, Protocol, Service};

#[derive(Reflect)]
struct Server {
	#[head_comment = "Address to bind"]
	pub host: &'static str,
	#[line_comment = "0 picks a free port"]
	pub port: u16,
	#[yaml(omitempty)]
	pub tags: Vec<&'static str>,
}

const SERVER: Server = Server {
	host: "localhost",
	port: 8080,
	tags: Vec::new(),
};

const SERVER_YAML: &str = "# Address to bind\nhost: localhost\nport: 8080 # 0 picks a free port\n";

#[test]
fn entry_points_agree() {
	let bytes = yaml_comment::marshal(&SERVER).unwrap();
	assert_eq!(bytes, SERVER_YAML.as_bytes());
	assert_eq!(yaml_comment::to_string(&SERVER).unwrap(), SERVER_YAML);
	assert_eq!(Encoder::default().to_vec(&SERVER).unwrap(), bytes);

	let node = yaml_comment::to_node(&SERVER).unwrap();
	assert_eq!(node, Encoder::new().to_node(&SERVER).unwrap());
	assert_eq!(node.get("port").unwrap().line_comment, "0 picks a free port");
}

#[test]
fn to_writer() {
	let mut out = Vec::new();
	Encoder::new().to_writer(&mut out, &SERVER).unwrap();
	assert_eq!(out, SERVER_YAML.as_bytes());
}

#[test]
fn to_writer_writes_nothing_on_error() {
	#[derive(Reflect)]
	struct Bad {
		pub ok: bool,
		#[yaml(flow)]
		pub items: Vec<i32>,
	}

	let mut out = Vec::new();
	let result = Encoder::new().to_writer(
		&mut out,
		&Bad {
			ok: true,
			items: vec![1],
		},
	);
	assert!(matches!(result, Err(Error::FlowUnsupported { .. })));
	assert!(out.is_empty());
}

#[test]
fn to_writer_io_error() {
	struct Closed;

	impl io::Write for Closed {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	let err = Encoder::new().to_writer(Closed, &SERVER).unwrap_err();
	match err {
		Error::Io(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
		err => panic!("unexpected error: {}", err),
	}
}

#[test]
fn max_depth() {
	let nested = vec![vec![vec![1]]];
	assert!(Encoder::new().max_depth(4).to_string(&nested).is_ok());
	assert!(matches!(
		Encoder::new().max_depth(3).to_string(&nested),
		Err(Error::DepthLimitExceeded { limit: 3 })
	));
	assert!(matches!(
		yaml_comment::marshal(&nested),
		Ok(bytes) if bytes == b"- - - 1\n"
	));
}

fn protocol_value(protocol: Protocol) -> Value {
	match protocol {
		Protocol::Http => "Http".into(),
		Protocol::Https => "Https".into(),
		Protocol::Tcp => "tcp".into(),
	}
}

fn limits_value(limits: &Limits) -> Value {
	let mut mapping = Mapping::new();
	mapping.insert("cpu".into(), limits.cpu.into());
	mapping.insert("memory".into(), limits.memory.into());
	Value::Mapping(mapping)
}

fn service_value(service: &Service) -> Value {
	let mut mapping = Mapping::new();
	mapping.insert("name".into(), service.name.as_str().into());
	if service.replicas != 0 {
		mapping.insert("replicas".into(), service.replicas.into());
	}

	let endpoints = service
		.endpoints
		.iter()
		.map(|endpoint| {
			let mut mapping = Mapping::new();
			mapping.insert("port".into(), endpoint.port.into());
			mapping.insert("protocol".into(), protocol_value(endpoint.protocol));
			if !endpoint.path.is_empty() {
				mapping.insert("path".into(), endpoint.path.as_str().into());
			}
			Value::Mapping(mapping)
		})
		.collect();
	mapping.insert("endpoints".into(), Value::Sequence(endpoints));

	if let Some(limits) = &service.limits {
		mapping.insert("limits".into(), limits_value(limits));
	}

	let labels = service
		.labels
		.iter()
		.map(|(key, value)| (Value::from(key.as_str()), Value::from(value.as_str())))
		.collect();
	mapping.insert("labels".into(), Value::Mapping(labels));

	Value::Mapping(mapping)
}

fn fleet_value(fleet: &Fleet) -> Value {
	let mut mapping = Mapping::new();
	mapping.insert("region".into(), fleet.region.as_str().into());
	let services = fleet.services.iter().map(service_value).collect();
	mapping.insert("services".into(), Value::Sequence(services));
	Value::Mapping(mapping)
}

#[test]
fn generated_fleet_reads_back() {
	let fleet = generate_fleet_data();
	let expected = fleet_value(&fleet);

	for indent in [2, 4, 9] {
		let yaml = Encoder::new().indent(indent).to_string(&fleet).unwrap();
		assert_eq!(parse(&yaml), expected, "indent {}", indent);
	}
}

#[test]
fn generated_fleet_keeps_comments() {
	let fleet = generate_fleet_data();
	let yaml = yaml_comment::to_string(&fleet).unwrap();

	assert!(yaml.starts_with("# Generated fleet\nregion: eu-west-1\n"));

	let count = |comment: &str| yaml.matches(comment).count();
	let endpoints = fleet.services.iter().map(|service| service.endpoints.len()).sum::<usize>();
	let limits = fleet.services.iter().filter(|service| service.limits.is_some()).count();
	let replicas = fleet.services.iter().filter(|service| service.replicas != 0).count();

	assert_eq!(count("# Port exposed by the service\n"), endpoints);
	assert_eq!(count(" # MiB\n"), limits);
	assert_eq!(count(" # defaults to 1\n"), replicas);
	assert_eq!(count("# end of labels\n"), fleet.services.len());
}

#[test]
fn generated_fleet_is_deterministic() {
	let first = yaml_comment::marshal(&generate_fleet_data()).unwrap();
	let second = yaml_comment::marshal(&generate_fleet_data()).unwrap();
	assert_eq!(first, second);
}
