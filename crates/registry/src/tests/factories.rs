//! Constructor descriptors: implementations created by name.

use std::sync::LazyLock;

use crate::{NameConvention, Registry};

trait Codec: Send {
	fn encode(&self, input: &str) -> String;
}

struct Identity;
impl Codec for Identity {
	fn encode(&self, input: &str) -> String {
		input.to_owned()
	}
}

struct Reverse;
impl Codec for Reverse {
	fn encode(&self, input: &str) -> String {
		input.chars().rev().collect()
	}
}

struct Upper;
impl Codec for Upper {
	fn encode(&self, input: &str) -> String {
		input.to_uppercase()
	}
}

type CodecFactory = fn() -> Box<dyn Codec>;

fn identity() -> Box<dyn Codec> {
	Box::new(Identity)
}

fn reverse() -> Box<dyn Codec> {
	Box::new(Reverse)
}

fn upper() -> Box<dyn Codec> {
	Box::new(Upper)
}

const LOWER_SNAKE: NameConvention = NameConvention::new("be lower_snake_case", |name| {
	!name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
});

static CODECS: LazyLock<Registry<CodecFactory, NameConvention>> = LazyLock::new(|| {
	let registry = Registry::with_policy("codecs", LOWER_SNAKE);
	registry
		.register_all([
			("identity", identity as CodecFactory),
			("reverse", reverse as CodecFactory),
		])
		.expect("builtin codecs are well formed");
	registry
});

fn encode_with(name: &str, input: &str) -> Option<String> {
	let make = CODECS.lookup(name)?;
	Some(make().encode(input))
}

#[test]
fn registered_factories_construct_by_name() {
	assert_eq!(encode_with("identity", "abc").as_deref(), Some("abc"));
	assert_eq!(encode_with("reverse", "abc").as_deref(), Some("cba"));
	assert_eq!(encode_with("rot13", "abc"), None);
}

#[test]
fn convention_rejects_badly_named_registrant() {
	let registry: Registry<CodecFactory, _> = Registry::with_policy("codecs", LOWER_SNAKE);

	let err = registry.register("Upper", upper).unwrap_err();
	assert!(!err.is_duplicate());
	assert_eq!(
		err.to_string(),
		"`Upper` rejected by registry `codecs`: name must be lower_snake_case"
	);
	assert!(registry.is_empty());

	registry.register("upper", upper).unwrap();
	let make = registry.lookup("upper").unwrap();
	assert_eq!(make().encode("abc"), "ABC");
}

#[test]
fn snapshot_factories_stay_callable() {
	let snapshot = CODECS.snapshot().unwrap();
	let mut names: Vec<_> = snapshot.keys().map(String::as_str).collect();
	names.sort_unstable();
	assert_eq!(names, ["identity", "reverse"]);

	for make in snapshot.values() {
		assert_eq!(make().encode("").len(), 0);
	}
}
