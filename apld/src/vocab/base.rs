use crate::{LangString, ObjectRef};

crate::facet! {
	/// Identity and naming, shared by every object and every non-bare link.
	///
	/// Nameless: every object read carries it whatever its declared types.
	pub struct BaseEntity {
		id: Option<String> = "id",
		/// entities this one is attributed to, not necessarily actors
		attributed_to: Vec<ObjectRef> = "attributedTo",
		name: LangString = "name",
		media_type: Option<String> = "mediaType",
		preview: Vec<ObjectRef> = "preview",
	}
}
