//! Typed accessors over a [`TypeMap`].
//!
//! Getters return [`crate::Field`], erroring with the member name when the backing facet is
//! missing or the member is empty. Setters consume and return the map, creating the backing
//! facet (and its lineage) first, so setting a member extends the object's type.

mod activity;
mod actor;
mod base;
mod collection;
mod link;
mod object;

pub use activity::{Activity, ActivityMut, Question, QuestionMut};
pub use actor::{Actor, ActorMut};
pub use base::{Base, BaseMut};
pub use collection::{Collection, CollectionMut, CollectionPage, CollectionPageMut};
pub use link::{Link, LinkMut};
pub use object::{Object, ObjectMut, Place, PlaceMut, Tombstone, TombstoneMut};

use crate::{facet::Facet, TypeMap};

/// Read view binding a [`TypeMap`] to one of its facets.
///
/// Dereferences to the facet, while keeping the whole object at hand for is-a queries and
/// casts to sibling facets.
#[derive(Debug)]
pub struct Model<'a, F: Facet> {
	map: &'a TypeMap,
	entity: &'a F,
}

impl<F: Facet> Clone for Model<'_, F> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<F: Facet> Copy for Model<'_, F> {}

impl<'a, F: Facet> Model<'a, F> {
	pub fn entity(&self) -> &'a F {
		self.entity
	}

	pub fn type_map(&self) -> &'a TypeMap {
		self.map
	}

	/// view of another facet of the same object
	pub fn cast<G: Facet>(&self) -> Option<Model<'a, G>> {
		self.map.view::<G>()
	}

	pub fn is_type(&self, name: &str) -> bool {
		self.map.is_type(name)
	}
}

impl<F: Facet> std::ops::Deref for Model<'_, F> {
	type Target = F;

	fn deref(&self) -> &F {
		self.entity
	}
}

impl TypeMap {
	/// `None` if the facet is not present
	pub fn view<F: Facet>(&self) -> Option<Model<'_, F>> {
		Some(Model { map: self, entity: self.get::<F>()? })
	}
}
