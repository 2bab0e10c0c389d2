use crate::{vocab::{BaseEntity, LinkEntity, ObjectEntity}, TypeMap};

/// Property value holding either an embedded object or a reference to one.
///
/// Which case applies is fixed at construction: there is no way to turn a link into the value
/// it points to from here, fetching is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Linkable<T> {
	Link(LinkRef),
	Value(T),
}

/// embedded object or link, as found in most ActivityStreams properties
pub type ObjectRef = Linkable<TypeMap>;

impl<T> Linkable<T> {
	/// plain reference to `href`
	pub fn link(href: &str) -> Self {
		Linkable::Link(LinkRef::new(href))
	}

	pub fn value(value: T) -> Self {
		Linkable::Value(value)
	}

	pub fn is_link(&self) -> bool {
		matches!(self, Linkable::Link(_))
	}

	pub fn is_value(&self) -> bool {
		matches!(self, Linkable::Value(_))
	}

	pub fn as_link(&self) -> Option<&LinkRef> {
		match self {
			Linkable::Link(l) => Some(l),
			Linkable::Value(_) => None,
		}
	}

	pub fn as_value(&self) -> Option<&T> {
		match self {
			Linkable::Link(_) => None,
			Linkable::Value(x) => Some(x),
		}
	}

	pub fn into_value(self) -> Option<T> {
		match self {
			Linkable::Link(_) => None,
			Linkable::Value(x) => Some(x),
		}
	}
}

impl Linkable<TypeMap> {
	/// Classifies a parsed object: anything carrying the Link facet and no Object facet is a
	/// reference, everything else is embedded.
	pub fn from_type_map(map: TypeMap) -> Self {
		if map.has::<LinkEntity>() && !map.has::<ObjectEntity>() {
			Linkable::Link(LinkRef(map))
		} else {
			Linkable::Value(map)
		}
	}

	/// only set for links, see [`Linkable::id`]
	pub fn href(&self) -> Option<&str> {
		self.as_link()?.href()
	}

	/// href for links, id for embedded objects
	pub fn id(&self) -> Option<&str> {
		match self {
			Linkable::Link(l) => l.href(),
			Linkable::Value(x) => x.get::<BaseEntity>()?.id.as_deref(),
		}
	}
}

impl From<LinkRef> for Linkable<TypeMap> {
	fn from(value: LinkRef) -> Self {
		Linkable::Link(value)
	}
}

impl From<TypeMap> for Linkable<TypeMap> {
	fn from(value: TypeMap) -> Self {
		Linkable::from_type_map(value)
	}
}

/// A link: at least an `href`, possibly with `rel`, `name`, dimensions and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRef(TypeMap);

impl LinkRef {
	pub fn new(href: &str) -> Self {
		LinkRef(TypeMap::link(href))
	}

	pub fn href(&self) -> Option<&str> {
		self.0.get::<LinkEntity>()?.href.as_deref()
	}

	pub fn type_map(&self) -> &TypeMap {
		&self.0
	}

	pub fn into_type_map(self) -> TypeMap {
		self.0
	}
}

/// helpers over non-functional properties
pub trait LinkableSlice {
	/// every href or id found, skipping anonymous objects
	fn all_ids(&self) -> Vec<String>;
	/// href or id of the first entry
	fn first_id(&self) -> Option<&str>;
}

impl LinkableSlice for [ObjectRef] {
	fn all_ids(&self) -> Vec<String> {
		self.iter()
			.filter_map(|x| x.id())
			.map(str::to_string)
			.collect()
	}

	fn first_id(&self) -> Option<&str> {
		self.first()?.id()
	}
}

#[cfg(test)]
mod test {
	use super::{LinkableSlice, ObjectRef};
	use crate::{vocab::{BaseEntity, LinkEntity, NoteEntity}, TypeMap};

	#[test]
	fn classification_depends_on_link_facet() {
		let mut note = TypeMap::new();
		note.get_or_create::<NoteEntity>();
		assert!(ObjectRef::from_type_map(note).is_value());

		let mut link = TypeMap::new();
		link.get_or_create::<LinkEntity>().href = Some("https://example.net/a".into());
		assert!(ObjectRef::from_type_map(link).is_link());
	}

	#[test]
	fn equality_is_structural_on_populated_case() {
		assert_eq!(ObjectRef::link("https://example.net/a"), ObjectRef::link("https://example.net/a"));
		assert_ne!(ObjectRef::link("https://example.net/a"), ObjectRef::link("https://example.net/b"));
		let mut embedded = TypeMap::new();
		embedded.get_or_create::<BaseEntity>().id = Some("https://example.net/a".into());
		assert_ne!(ObjectRef::link("https://example.net/a"), ObjectRef::value(embedded));
	}

	#[test]
	fn ids_come_from_href_or_id() {
		let mut embedded = TypeMap::new();
		embedded.get_or_create::<BaseEntity>().id = Some("https://example.net/b".into());
		let refs = vec![
			ObjectRef::link("https://example.net/a"),
			ObjectRef::value(embedded),
			ObjectRef::value(TypeMap::new()),
		];
		assert_eq!(refs.all_ids(), vec!["https://example.net/a".to_string(), "https://example.net/b".to_string()]);
		assert_eq!(refs.first_id(), Some("https://example.net/a"));
	}
}
