use std::collections::BTreeSet;

use crate::{
	context::JsonLdContext,
	facet::{Entity, Facet, FacetKind, JsonObject},
	vocab::LinkEntity,
};

/// One JSON-LD object: every facet it carries, plus the type names, context and unrecognized
/// members needed to write it back.
///
/// A TypeMap holds at most one facet per kind. Adding a facet extends the object's type: the
/// facet's name becomes visible, while the names it descends from are moved out of the visible
/// list but still answer [`TypeMap::is_type`].
#[derive(Debug, Default)]
pub struct TypeMap {
	facets: Vec<Box<dyn Entity>>,
	visible: Vec<String>,
	all: BTreeSet<String>,
	context: JsonLdContext,
	extension: JsonObject,
	seeded: bool,
}

impl TypeMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_context(context: JsonLdContext) -> Self {
		TypeMap { context, ..Default::default() }
	}

	/// Bare reference: a single Link facet with only `href`, written back as a plain string.
	pub fn link(href: &str) -> Self {
		let mut map = TypeMap::new();
		map.add(LinkEntity { href: Some(href.to_string()), ..Default::default() });
		map
	}

	/// Inserts a facet under its own kind, returns false (and changes nothing) if that kind is
	/// already present. Missing ancestors are not created, see [`TypeMap::get_or_create`].
	pub fn add<F: Facet>(&mut self, entity: F) -> bool {
		self.insert(Box::new(entity), None)
	}

	pub fn add_entity(&mut self, entity: Box<dyn Entity>) -> bool {
		self.insert(entity, None)
	}

	/// Inserts a freshly deserialized facet along with the members it did not recognize.
	pub(crate) fn add_parsed(&mut self, entity: Box<dyn Entity>, leftover: JsonObject) -> bool {
		self.insert(entity, Some(leftover))
	}

	fn insert(&mut self, entity: Box<dyn Entity>, leftover: Option<JsonObject>) -> bool {
		let kind = entity.kind();
		if self.has_kind(kind) {
			tracing::debug!("object already has a {kind} facet, keeping the first one");
			return false;
		}

		if let Some(name) = entity.type_name() {
			// already known means some present descendant shadows it
			if self.all.insert(name.to_string()) {
				self.visible.push(name.to_string());
			}
		}
		for ancestor in kind.ancestor_names() {
			self.visible.retain(|x| x != ancestor);
			self.all.insert(ancestor.to_string());
		}

		self.context.merge(&entity.required_context());

		match leftover {
			None => {},
			Some(leftover) if !self.seeded => {
				self.extension = leftover;
				self.seeded = true;
			},
			Some(leftover) => self.extension.retain(|k, _| leftover.contains_key(k)),
		}
		self.extension.retain(|k, _| !entity.accepts(k));

		self.facets.push(entity);
		true
	}

	/// Records a type name no registered facet answers to, so it survives a round trip.
	pub fn add_unmapped_type(&mut self, name: &str) {
		if self.all.insert(name.to_string()) {
			self.visible.push(name.to_string());
		}
	}

	pub fn has<F: Facet>(&self) -> bool {
		self.has_kind(FacetKind::of::<F>())
	}

	pub fn has_kind(&self, kind: FacetKind) -> bool {
		self.index_of(kind).is_some()
	}

	fn index_of(&self, kind: FacetKind) -> Option<usize> {
		self.facets.iter().position(|x| x.kind() == kind)
	}

	pub fn get<F: Facet>(&self) -> Option<&F> {
		self.facets.iter().find_map(|x| x.as_any().downcast_ref::<F>())
	}

	pub fn get_mut<F: Facet>(&mut self) -> Option<&mut F> {
		self.facets.iter_mut().find_map(|x| x.as_any_mut().downcast_mut::<F>())
	}

	/// # Panics
	/// if the facet is not present: check with [`TypeMap::has`] or use [`TypeMap::get`]
	pub fn facet<F: Facet>(&self) -> &F {
		match self.get::<F>() {
			Some(x) => x,
			None => panic!("object has no {} facet", FacetKind::of::<F>()),
		}
	}

	/// Returns the facet, creating it and any missing ancestor first.
	pub fn get_or_create<F: Facet>(&mut self) -> &mut F {
		let kind = FacetKind::of::<F>();
		let idx = match self.index_of(kind) {
			Some(idx) => idx,
			None => {
				let idx = self.facets.len();
				self.insert(Box::new(F::default()), None);
				for ancestor in kind.ancestors() {
					if !self.has_kind(ancestor) {
						self.insert(ancestor.create(), None);
					}
				}
				idx
			},
		};
		match self.facets[idx].as_any_mut().downcast_mut::<F>() {
			Some(x) => x,
			None => unreachable!("facet stored at index of another kind"),
		}
	}

	/// is-a query, shadowed ancestors included
	pub fn is_type(&self, name: &str) -> bool {
		self.all.contains(name)
	}

	/// type names to serialize, in insertion order
	pub fn visible_types(&self) -> &[String] {
		&self.visible
	}

	pub fn all_types(&self) -> &BTreeSet<String> {
		&self.all
	}

	pub fn ld_context(&self) -> &JsonLdContext {
		&self.context
	}

	pub fn ld_context_mut(&mut self) -> &mut JsonLdContext {
		&mut self.context
	}

	/// members no facet recognized
	pub fn extension_properties(&self) -> &JsonObject {
		&self.extension
	}

	/// Refused (returning false) for members some present facet already handles.
	pub fn insert_extension(&mut self, member: &str, value: serde_json::Value) -> bool {
		if member == "@context" || member == "type" || self.facets.iter().any(|x| x.accepts(member)) {
			return false;
		}
		self.extension.insert(member.to_string(), value);
		true
	}

	pub fn remove_extension(&mut self, member: &str) -> Option<serde_json::Value> {
		self.extension.remove(member)
	}

	pub fn facets(&self) -> impl Iterator<Item = &dyn Entity> {
		self.facets.iter().map(|x| x.as_ref())
	}

	pub fn kinds(&self) -> Vec<FacetKind> {
		self.facets.iter().map(|x| x.kind()).collect()
	}

	/// number of facets
	pub fn len(&self) -> usize {
		self.facets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.facets.is_empty()
	}

	/// Only a Link facet holding nothing but its reference, and no extension members.
	pub fn is_bare_link(&self) -> bool {
		match self.facets.as_slice() {
			[only] => only.kind().is::<LinkEntity>() && !only.full_form() && self.extension.is_empty(),
			_ => false,
		}
	}
}

impl Clone for TypeMap {
	fn clone(&self) -> Self {
		TypeMap {
			facets: self.facets.iter().map(|x| x.dyn_clone()).collect(),
			visible: self.visible.clone(),
			all: self.all.clone(),
			context: self.context.clone(),
			extension: self.extension.clone(),
			seeded: self.seeded,
		}
	}
}

impl PartialEq for TypeMap {
	fn eq(&self, other: &Self) -> bool {
		self.all == other.all
			&& self.visible.iter().collect::<BTreeSet<_>>() == other.visible.iter().collect::<BTreeSet<_>>()
			&& self.context == other.context
			&& self.extension == other.extension
			&& self.facets.len() == other.facets.len()
			&& self.facets.iter().all(|x| {
				other.facets.iter().any(|y| x.dyn_eq(y.as_ref()))
			})
	}
}
