use std::any::{Any, TypeId};

use crate::{context::JsonLdContext, converter::{Decoder, Encoder}, error::ConvertResult};

pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// One type-view over a JSON-LD object: the typed properties a vocabulary type adds, plus how
/// to read and write them.
///
/// Most facets are declared with the `facet!` macro; implement this by hand only when a facet
/// needs custom serialization (see `LinkEntity`).
pub trait Facet: Any + std::fmt::Debug + Default + Clone + PartialEq + Send + Sync {
	/// vocabulary name this facet answers to, nameless facets are only reached through lineage
	const TYPE_NAME: Option<&'static str> = None;
	/// name hidden from the visible type list once this facet is present
	const BASE_TYPE: Option<&'static str> = None;

	/// facets that must be present whenever this one is
	fn lineage() -> Vec<FacetKind> { Vec::new() }

	/// whether this facet consumes the given json member
	fn recognizes(member: &str) -> bool;

	/// read declared members only, anything else is left for other facets
	fn read(object: &JsonObject, cx: &Decoder<'_>) -> ConvertResult<Self>;

	/// write populated members only
	fn write(&self, out: &mut JsonObject, cx: &Encoder<'_>);

	/// true if anything beyond identity or a bare reference is populated
	fn requires_full_form(&self) -> bool;

	/// context declarations needed to interpret this facet's members
	fn context() -> JsonLdContext { JsonLdContext::activitystreams() }

	/// pick a more specific facet based on the raw input shape
	fn narrow(_object: &JsonObject) -> Option<FacetKind> { None }
}

/// Object-safe side of [`Facet`], what a [`crate::TypeMap`] actually stores.
pub trait Entity: Any + std::fmt::Debug + Send + Sync {
	fn kind(&self) -> FacetKind;
	fn type_name(&self) -> Option<&'static str>;
	fn base_type(&self) -> Option<&'static str>;
	fn required_context(&self) -> JsonLdContext;
	fn accepts(&self, member: &str) -> bool;
	fn full_form(&self) -> bool;
	fn write_into(&self, out: &mut JsonObject, cx: &Encoder<'_>);
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
	fn dyn_eq(&self, other: &dyn Entity) -> bool;
	fn dyn_clone(&self) -> Box<dyn Entity>;
}

impl<F: Facet> Entity for F {
	fn kind(&self) -> FacetKind {
		FacetKind::of::<F>()
	}

	fn type_name(&self) -> Option<&'static str> {
		F::TYPE_NAME
	}

	fn base_type(&self) -> Option<&'static str> {
		F::BASE_TYPE
	}

	fn required_context(&self) -> JsonLdContext {
		F::context()
	}

	fn accepts(&self, member: &str) -> bool {
		F::recognizes(member)
	}

	fn full_form(&self) -> bool {
		Facet::requires_full_form(self)
	}

	fn write_into(&self, out: &mut JsonObject, cx: &Encoder<'_>) {
		Facet::write(self, out, cx)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn dyn_eq(&self, other: &dyn Entity) -> bool {
		other.as_any().downcast_ref::<F>().is_some_and(|other| self == other)
	}

	fn dyn_clone(&self) -> Box<dyn Entity> {
		Box::new(self.clone())
	}
}

fn read_boxed<F: Facet>(object: &JsonObject, cx: &Decoder<'_>) -> ConvertResult<Box<dyn Entity>> {
	Ok(Box::new(F::read(object, cx)?))
}

fn create_boxed<F: Facet>() -> Box<dyn Entity> {
	Box::new(F::default())
}

/// Runtime handle of a facet type: its identity plus monomorphized hooks, so the registry and
/// the converter can dispatch on kinds discovered at runtime without reflection.
#[derive(Clone, Copy)]
pub struct FacetKind {
	id: TypeId,
	label: &'static str,
	type_name: Option<&'static str>,
	base_type: Option<&'static str>,
	lineage: fn() -> Vec<FacetKind>,
	narrow: fn(&JsonObject) -> Option<FacetKind>,
	read: fn(&JsonObject, &Decoder<'_>) -> ConvertResult<Box<dyn Entity>>,
	create: fn() -> Box<dyn Entity>,
}

impl FacetKind {
	pub fn of<F: Facet>() -> Self {
		let full = std::any::type_name::<F>();
		FacetKind {
			id: TypeId::of::<F>(),
			label: full.rsplit("::").next().unwrap_or(full),
			type_name: F::TYPE_NAME,
			base_type: F::BASE_TYPE,
			lineage: F::lineage,
			narrow: F::narrow,
			read: read_boxed::<F>,
			create: create_boxed::<F>,
		}
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	/// rust type name of the facet, for diagnostics
	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn type_name(&self) -> Option<&'static str> {
		self.type_name
	}

	pub fn base_type(&self) -> Option<&'static str> {
		self.base_type
	}

	pub fn is<F: Facet>(&self) -> bool {
		self.id == TypeId::of::<F>()
	}

	/// direct parents
	pub fn parents(&self) -> Vec<FacetKind> {
		(self.lineage)()
	}

	/// Every transitive parent, nearest first, each listed once. Cycles are cut rather than
	/// followed; the registry refuses to build with one anyway.
	pub fn ancestors(&self) -> Vec<FacetKind> {
		let mut out: Vec<FacetKind> = Vec::new();
		let mut queue = std::collections::VecDeque::from(self.parents());
		while let Some(kind) = queue.pop_front() {
			if kind == *self || out.contains(&kind) {
				continue;
			}
			queue.extend(kind.parents());
			out.push(kind);
		}
		out
	}

	/// type names this facet shadows once present, none for nameless facets
	pub fn ancestor_names(&self) -> Vec<&'static str> {
		let mut out: Vec<&'static str> = Vec::new();
		if self.type_name.is_none() {
			return out;
		}
		for name in self.base_type.into_iter().chain(self.ancestors().iter().filter_map(|k| k.type_name)) {
			if !out.contains(&name) {
				out.push(name);
			}
		}
		out
	}

	pub fn narrow(&self, object: &JsonObject) -> Option<FacetKind> {
		(self.narrow)(object)
	}

	pub fn read(&self, object: &JsonObject, cx: &Decoder<'_>) -> ConvertResult<Box<dyn Entity>> {
		(self.read)(object, cx)
	}

	pub fn create(&self) -> Box<dyn Entity> {
		(self.create)()
	}
}

impl PartialEq for FacetKind {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for FacetKind {}

impl std::hash::Hash for FacetKind {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}

impl std::fmt::Debug for FacetKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label)
	}
}

impl std::fmt::Display for FacetKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label)
	}
}
