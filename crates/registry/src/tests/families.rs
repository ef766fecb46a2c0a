//! A family with a registry next to one without, populated from submissions.

use std::sync::LazyLock;

use crate::plugin::load_family;
use crate::{Family, Mapping, Registry, TypeDescriptor, register_type};

struct MetaNoRegistry;
impl Family for MetaNoRegistry {
	const NAME: &'static str = "MetaNoRegistry";
	const ACTIVE: bool = false;
}

struct MetaWithRegistry;
impl Family for MetaWithRegistry {
	const NAME: &'static str = "MetaWithRegistry";
}

struct BaseNoRegistry;
struct BaseWithRegistry;

register_type!(MetaNoRegistry, BaseNoRegistry);
register_type!(MetaWithRegistry, BaseWithRegistry);

static NO_REGISTRY: LazyLock<Registry<TypeDescriptor>> = LazyLock::new(|| {
	let registry = Registry::for_family::<MetaNoRegistry>();
	load_family::<MetaNoRegistry, _>(&registry).expect("inactive registry accepts everything");
	registry
});

static WITH_REGISTRY: LazyLock<Registry<TypeDescriptor>> = LazyLock::new(|| {
	let registry = Registry::for_family::<MetaWithRegistry>();
	load_family::<MetaWithRegistry, _>(&registry).expect("single submission");
	registry
});

fn base_with_registry() -> TypeDescriptor {
	TypeDescriptor::of::<MetaWithRegistry, BaseWithRegistry>("BaseWithRegistry")
}

#[test]
fn snapshot_without_registry_is_absent() {
	assert_eq!(NO_REGISTRY.snapshot(), None);
}

#[test]
fn snapshot_with_registry_lists_the_base() {
	let expected: Mapping<TypeDescriptor> =
		[("BaseWithRegistry".to_owned(), base_with_registry())].into_iter().collect();
	assert_eq!(WITH_REGISTRY.snapshot(), Some(expected));
}

#[test]
fn lookup_without_registry_is_absent() {
	assert_eq!(NO_REGISTRY.lookup("BaseNoRegistry"), None);
}

#[test]
fn lookup_with_registry_finds_the_base() {
	let found = WITH_REGISTRY.lookup("BaseWithRegistry").expect("registered at load");
	assert_eq!(found, base_with_registry());
	assert!(found.is::<BaseWithRegistry>());
}

#[test]
fn re_registering_the_base_is_refused() {
	struct Impostor;
	let impostor = TypeDescriptor::of::<MetaWithRegistry, Impostor>("BaseWithRegistry");

	let err = WITH_REGISTRY.register("BaseWithRegistry", impostor).unwrap_err();

	assert!(err.is_duplicate());
	assert!(WITH_REGISTRY.lookup("BaseWithRegistry").unwrap().is::<BaseWithRegistry>());
}
