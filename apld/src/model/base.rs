use crate::{vocab::{BaseEntity, LinkEntity}, Field, FieldErr, LangString, ObjectRef, TypeMap};

pub trait Base {
	fn id(&self) -> Field<&str> { Err(FieldErr("id")) }
	/// first visible type name, if any
	fn base_type(&self) -> Field<&str> { Err(FieldErr("type")) }
	fn name(&self) -> Field<&str> { Err(FieldErr("name")) }
	fn name_map(&self) -> Field<&LangString> { Err(FieldErr("nameMap")) }
	fn media_type(&self) -> Field<&str> { Err(FieldErr("mediaType")) }
	/// Identifies one or more entities to which this object is attributed.
	/// The attributed entities might not be Actors. For instance, an object might be attributed to the completion of another activity.
	fn attributed_to(&self) -> Field<&[ObjectRef]> { Err(FieldErr("attributedTo")) }
	fn preview(&self) -> Field<&[ObjectRef]> { Err(FieldErr("preview")) }
}

pub trait BaseMut {
	fn set_id(self, val: Option<&str>) -> Self;
	fn set_name(self, val: Option<&str>) -> Self;
	fn set_name_map(self, val: LangString) -> Self;
	fn set_media_type(self, val: Option<&str>) -> Self;
	fn set_attributed_to(self, val: Vec<ObjectRef>) -> Self;
	fn set_preview(self, val: Vec<ObjectRef>) -> Self;
}

impl Base for TypeMap {
	/// links answer with their href
	fn id(&self) -> Field<&str> {
		self.get::<BaseEntity>()
			.and_then(|x| x.id.as_deref())
			.or_else(|| self.get::<LinkEntity>()?.href.as_deref())
			.ok_or(FieldErr("id"))
	}

	fn base_type(&self) -> Field<&str> {
		self.visible_types()
			.first()
			.map(String::as_str)
			.ok_or(FieldErr("type"))
	}

	crate::getter! { name -> &str = BaseEntity.name }
	crate::getter! { name_map -> &LangString = BaseEntity.name }
	crate::getter! { media_type -> &str = BaseEntity.media_type }
	crate::getter! { attributed_to -> &[ObjectRef] = BaseEntity.attributed_to }
	crate::getter! { preview -> &[ObjectRef] = BaseEntity.preview }
}

impl BaseMut for TypeMap {
	crate::setter! { id -> Option<&str> = BaseEntity.id }
	crate::setter! { name -> Option<&str> = BaseEntity.name }
	crate::setter! { name_map -> LangString = BaseEntity.name }
	crate::setter! { media_type -> Option<&str> = BaseEntity.media_type }
	crate::setter! { attributed_to -> Vec<ObjectRef> = BaseEntity.attributed_to }
	crate::setter! { preview -> Vec<ObjectRef> = BaseEntity.preview }
}
