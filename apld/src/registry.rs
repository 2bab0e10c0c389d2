use std::collections::{BTreeSet, HashMap};

use crate::{error::RegistryError, facet::{Facet, FacetKind}, vocab::BaseEntity};

/// Name → facet lookup table, built once and then shared read-only.
///
/// Names are matched case-sensitively, as they appear on the wire.
#[derive(Debug, Clone)]
pub struct Registry {
	names: HashMap<&'static str, FacetKind>,
	descendants: HashMap<&'static str, BTreeSet<&'static str>>,
	kinds: Vec<FacetKind>,
	base: FacetKind,
}

/// Collects facet registrations, see [`Registry::builder`].
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
	kinds: Vec<FacetKind>,
	base: FacetKind,
}

impl Registry {
	/// empty builder whose universal base facet is [`BaseEntity`]
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder {
			kinds: Vec::new(),
			base: FacetKind::of::<BaseEntity>(),
		}
	}

	pub fn resolve(&self, name: &str) -> Option<FacetKind> {
		self.names.get(name).copied()
	}

	/// names whose declared base is, directly or transitively, `name`
	pub fn descendants_of(&self, name: &str) -> BTreeSet<&'static str> {
		self.descendants.get(name).cloned().unwrap_or_default()
	}

	pub fn is_subtype(&self, name: &str, ancestor: &str) -> bool {
		name == ancestor
			|| self.descendants.get(ancestor).is_some_and(|x| x.contains(name))
	}

	/// facet present on every object regardless of its declared types
	pub fn base(&self) -> FacetKind {
		self.base
	}

	/// every known kind, ancestors pulled in by lineage included
	pub fn kinds(&self) -> &[FacetKind] {
		&self.kinds
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}

impl RegistryBuilder {
	/// Registering the same facet twice is harmless.
	pub fn register<F: Facet>(self) -> Self {
		self.register_kind(FacetKind::of::<F>())
	}

	pub fn register_kind(mut self, kind: FacetKind) -> Self {
		if !self.kinds.contains(&kind) {
			self.kinds.push(kind);
		}
		self
	}

	/// replace the universal base facet
	pub fn base<F: Facet>(mut self) -> Self {
		self.base = FacetKind::of::<F>();
		self
	}

	pub fn build(self) -> Result<Registry, RegistryError> {
		let mut kinds: Vec<FacetKind> = Vec::new();
		let mut queue: Vec<FacetKind> = self.kinds;
		queue.push(self.base);
		while let Some(kind) = queue.pop() {
			if kinds.contains(&kind) {
				continue;
			}
			check_lineage(kind, &mut Vec::new())?;
			queue.extend(kind.parents());
			kinds.push(kind);
		}

		let mut names: HashMap<&'static str, FacetKind> = HashMap::new();
		for kind in &kinds {
			let Some(name) = kind.type_name() else { continue };
			if let Some(previous) = names.insert(name, *kind) {
				return Err(RegistryError::DuplicateRegistration {
					name, first: previous.label(), second: kind.label(),
				});
			}
		}

		let mut descendants: HashMap<&'static str, BTreeSet<&'static str>> = HashMap::new();
		for kind in &kinds {
			if let Some(base) = kind.base_type() {
				if !names.contains_key(base) {
					return Err(RegistryError::UnknownBase {
						name: kind.type_name().unwrap_or(kind.label()),
						base,
					});
				}
			}
			let Some(name) = kind.type_name() else { continue };
			for ancestor in kind.ancestor_names() {
				if ancestor == name {
					return Err(RegistryError::CyclicLineage(kind.label()));
				}
				descendants.entry(ancestor).or_default().insert(name);
			}
		}

		tracing::debug!("built type registry with {} facets, {} type names", kinds.len(), names.len());
		Ok(Registry { names, descendants, kinds, base: self.base })
	}
}

fn check_lineage(kind: FacetKind, path: &mut Vec<FacetKind>) -> Result<(), RegistryError> {
	if path.contains(&kind) {
		return Err(RegistryError::CyclicLineage(kind.label()));
	}
	path.push(kind);
	for parent in kind.parents() {
		check_lineage(parent, path)?;
	}
	path.pop();
	Ok(())
}

#[cfg(test)]
mod test {
	use crate::{
		error::RegistryError,
		facet::FacetKind,
		vocab::{self, ActivityEntity, CreateEntity, NoteEntity, ObjectEntity, TransitiveActivityEntity},
		Registry,
	};

	crate::facet! {
		struct ImpostorNote as "Note" : ObjectEntity {}
	}

	crate::facet! {
		struct Orphan as "Orphan" shadows "NeverRegistered" {}
	}

	crate::facet! {
		struct Ouroboros as "Ouroboros" : Ouroboros {}
	}

	#[test]
	fn resolves_registered_names() {
		let registry = vocab::registry().unwrap();
		assert_eq!(registry.resolve("Note"), Some(FacetKind::of::<NoteEntity>()));
		assert_eq!(registry.resolve("Create"), Some(FacetKind::of::<CreateEntity>()));
		assert_eq!(registry.resolve("note"), None);
		assert_eq!(registry.resolve("TotallyMadeUp"), None);
		assert!(registry.kinds().contains(&FacetKind::of::<TransitiveActivityEntity>()));
	}

	#[test]
	fn descendants_follow_base_types_transitively() {
		let registry = vocab::registry().unwrap();
		let below_activity = registry.descendants_of("Activity");
		assert!(below_activity.contains("Create"));
		assert!(below_activity.contains("Question"));
		assert!(below_activity.contains("TentativeAccept"));
		assert!(!below_activity.contains("Note"));
		assert!(registry.is_subtype("TentativeAccept", "Object"));
		assert!(registry.is_subtype("Note", "Note"));
		assert!(!registry.is_subtype("Object", "Note"));
		assert!(registry.descendants_of("Note").is_empty());
	}

	#[test]
	fn duplicate_names_fail_the_build() {
		let res = Registry::builder()
			.register::<NoteEntity>()
			.register::<ImpostorNote>()
			.build();
		assert!(matches!(res, Err(RegistryError::DuplicateRegistration { name: "Note", .. })));
	}

	#[test]
	fn same_facet_twice_is_fine() {
		let registry = Registry::builder()
			.register::<ActivityEntity>()
			.register::<ActivityEntity>()
			.build()
			.unwrap();
		assert!(registry.resolve("Activity").is_some());
		assert!(registry.resolve("Object").is_some());
	}

	#[test]
	fn unknown_base_fails_the_build() {
		let res = Registry::builder().register::<Orphan>().build();
		assert!(matches!(res, Err(RegistryError::UnknownBase { name: "Orphan", base: "NeverRegistered" })));
	}

	#[test]
	fn cyclic_lineage_fails_the_build() {
		let res = Registry::builder().register::<Ouroboros>().build();
		assert!(matches!(res, Err(RegistryError::CyclicLineage(_))));
	}
}
