mod macros;
pub(crate) use macros::{facet, getter, setter};

pub mod config;
pub use config::Config;

pub mod error;
pub use error::{ConvertError, ConvertResult, Field, FieldErr, RegistryError};

pub mod context;
pub use context::{ContextEntry, JsonLdContext};

mod langstring;
pub use langstring::LangString;

mod linkable;
pub use linkable::{Linkable, LinkableSlice, LinkRef, ObjectRef};

pub mod member;

pub mod facet;
pub use facet::{Entity, Facet, FacetKind};

mod typemap;
pub use typemap::TypeMap;

pub mod registry;
pub use registry::{Registry, RegistryBuilder};

pub mod converter;
pub use converter::Converter;

pub mod vocab;

pub mod model;
pub use model::{
	Model,
	Base, BaseMut,
	Object, ObjectMut,
	Link, LinkMut,
	Activity, ActivityMut,
	Actor, ActorMut,
	Collection, CollectionMut,
	CollectionPage, CollectionPageMut,
	Question, QuestionMut,
	Place, PlaceMut,
	Tombstone, TombstoneMut,
};

pub mod target;
pub use target::Addressed;

#[cfg(feature = "shortcuts")]
mod shortcuts;
#[cfg(feature = "shortcuts")]
pub use shortcuts::Shortcuts;
