use chrono::{DateTime, Utc};

use crate::{vocab::{ObjectEntity, PlaceEntity, TombstoneEntity}, Field, FieldErr, LangString, ObjectRef, TypeMap};

use super::{Base, BaseMut};

pub trait Object : Base {
	/// Identifies a resource attached or related to an object that potentially requires special handling
	/// The intent is to provide a model that is at least semantically similar to attachments in email.
	fn attachment(&self) -> Field<&[ObjectRef]> { Err(FieldErr("attachment")) }
	/// Identifies one or more entities that represent the total population of entities for which the object can considered to be relevant
	fn audience(&self) -> Field<&[ObjectRef]> { Err(FieldErr("audience")) }
	/// The content or textual representation of the Object encoded as a JSON string. By default, the value of content is HTML
	fn content(&self) -> Field<&str> { Err(FieldErr("content")) }
	/// language-tagged variants of `content`
	fn content_map(&self) -> Field<&LangString> { Err(FieldErr("contentMap")) }
	/// Identifies the context within which the object exists or an activity was performed
	fn context(&self) -> Field<&[ObjectRef]> { Err(FieldErr("context")) }
	fn end_time(&self) -> Field<DateTime<Utc>> { Err(FieldErr("endTime")) }
	/// Identifies the entity (e.g. an application) that generated the object
	fn generator(&self) -> Field<&[ObjectRef]> { Err(FieldErr("generator")) }
	fn icon(&self) -> Field<&[ObjectRef]> { Err(FieldErr("icon")) }
	fn image(&self) -> Field<&[ObjectRef]> { Err(FieldErr("image")) }
	fn in_reply_to(&self) -> Field<&[ObjectRef]> { Err(FieldErr("inReplyTo")) }
	fn location(&self) -> Field<&[ObjectRef]> { Err(FieldErr("location")) }
	fn published(&self) -> Field<DateTime<Utc>> { Err(FieldErr("published")) }
	/// Identifies a Collection containing objects considered to be responses to this object
	fn replies(&self) -> Field<&ObjectRef> { Err(FieldErr("replies")) }
	fn start_time(&self) -> Field<DateTime<Utc>> { Err(FieldErr("startTime")) }
	fn summary(&self) -> Field<&str> { Err(FieldErr("summary")) }
	fn summary_map(&self) -> Field<&LangString> { Err(FieldErr("summaryMap")) }
	/// One or more "tags" that have been associated with an objects. A tag can be any kind of Object
	fn tag(&self) -> Field<&[ObjectRef]> { Err(FieldErr("tag")) }
	fn updated(&self) -> Field<DateTime<Utc>> { Err(FieldErr("updated")) }
	fn url(&self) -> Field<&[ObjectRef]> { Err(FieldErr("url")) }
	fn to(&self) -> Field<&[ObjectRef]> { Err(FieldErr("to")) }
	fn bto(&self) -> Field<&[ObjectRef]> { Err(FieldErr("bto")) }
	fn cc(&self) -> Field<&[ObjectRef]> { Err(FieldErr("cc")) }
	fn bcc(&self) -> Field<&[ObjectRef]> { Err(FieldErr("bcc")) }
	/// When the object describes a time-bound resource, such as an audio or video, a meeting, etc, the duration property indicates the object's approximate duration
	fn duration(&self) -> Field<&str> { Err(FieldErr("duration")) }

	// activitypub
	fn likes(&self) -> Field<&ObjectRef> { Err(FieldErr("likes")) }
	fn shares(&self) -> Field<&ObjectRef> { Err(FieldErr("shares")) }
	fn source(&self) -> Field<&serde_json::Value> { Err(FieldErr("source")) }
}

pub trait ObjectMut : BaseMut {
	fn set_attachment(self, val: Vec<ObjectRef>) -> Self;
	fn set_audience(self, val: Vec<ObjectRef>) -> Self;
	fn set_content(self, val: Option<&str>) -> Self;
	fn set_content_map(self, val: LangString) -> Self;
	fn set_context(self, val: Vec<ObjectRef>) -> Self;
	fn set_end_time(self, val: Option<DateTime<Utc>>) -> Self;
	fn set_generator(self, val: Vec<ObjectRef>) -> Self;
	fn set_icon(self, val: Vec<ObjectRef>) -> Self;
	fn set_image(self, val: Vec<ObjectRef>) -> Self;
	fn set_in_reply_to(self, val: Vec<ObjectRef>) -> Self;
	fn set_location(self, val: Vec<ObjectRef>) -> Self;
	fn set_published(self, val: Option<DateTime<Utc>>) -> Self;
	fn set_replies(self, val: Option<ObjectRef>) -> Self;
	fn set_start_time(self, val: Option<DateTime<Utc>>) -> Self;
	fn set_summary(self, val: Option<&str>) -> Self;
	fn set_summary_map(self, val: LangString) -> Self;
	fn set_tag(self, val: Vec<ObjectRef>) -> Self;
	fn set_updated(self, val: Option<DateTime<Utc>>) -> Self;
	fn set_url(self, val: Vec<ObjectRef>) -> Self;
	fn set_to(self, val: Vec<ObjectRef>) -> Self;
	fn set_bto(self, val: Vec<ObjectRef>) -> Self;
	fn set_cc(self, val: Vec<ObjectRef>) -> Self;
	fn set_bcc(self, val: Vec<ObjectRef>) -> Self;
	fn set_duration(self, val: Option<&str>) -> Self;

	fn set_likes(self, val: Option<ObjectRef>) -> Self;
	fn set_shares(self, val: Option<ObjectRef>) -> Self;
	fn set_source(self, val: Option<serde_json::Value>) -> Self;
}

impl Object for TypeMap {
	crate::getter! { attachment -> &[ObjectRef] = ObjectEntity.attachment }
	crate::getter! { audience -> &[ObjectRef] = ObjectEntity.audience }
	crate::getter! { content -> &str = ObjectEntity.content }
	crate::getter! { content_map -> &LangString = ObjectEntity.content }
	crate::getter! { context -> &[ObjectRef] = ObjectEntity.context }
	crate::getter! { end_time -> DateTime<Utc> = ObjectEntity.end_time }
	crate::getter! { generator -> &[ObjectRef] = ObjectEntity.generator }
	crate::getter! { icon -> &[ObjectRef] = ObjectEntity.icon }
	crate::getter! { image -> &[ObjectRef] = ObjectEntity.image }
	crate::getter! { in_reply_to -> &[ObjectRef] = ObjectEntity.in_reply_to }
	crate::getter! { location -> &[ObjectRef] = ObjectEntity.location }
	crate::getter! { published -> DateTime<Utc> = ObjectEntity.published }
	crate::getter! { replies -> &ObjectRef = ObjectEntity.replies }
	crate::getter! { start_time -> DateTime<Utc> = ObjectEntity.start_time }
	crate::getter! { summary -> &str = ObjectEntity.summary }
	crate::getter! { summary_map -> &LangString = ObjectEntity.summary }
	crate::getter! { tag -> &[ObjectRef] = ObjectEntity.tag }
	crate::getter! { updated -> DateTime<Utc> = ObjectEntity.updated }
	crate::getter! { url -> &[ObjectRef] = ObjectEntity.url }
	crate::getter! { to -> &[ObjectRef] = ObjectEntity.to }
	crate::getter! { bto -> &[ObjectRef] = ObjectEntity.bto }
	crate::getter! { cc -> &[ObjectRef] = ObjectEntity.cc }
	crate::getter! { bcc -> &[ObjectRef] = ObjectEntity.bcc }
	crate::getter! { duration -> &str = ObjectEntity.duration }
	crate::getter! { likes -> &ObjectRef = ObjectEntity.likes }
	crate::getter! { shares -> &ObjectRef = ObjectEntity.shares }
	crate::getter! { source -> &serde_json::Value = ObjectEntity.source }
}

impl ObjectMut for TypeMap {
	crate::setter! { attachment -> Vec<ObjectRef> = ObjectEntity.attachment }
	crate::setter! { audience -> Vec<ObjectRef> = ObjectEntity.audience }
	crate::setter! { content -> Option<&str> = ObjectEntity.content }
	crate::setter! { content_map -> LangString = ObjectEntity.content }
	crate::setter! { context -> Vec<ObjectRef> = ObjectEntity.context }
	crate::setter! { end_time -> Option<DateTime<Utc>> = ObjectEntity.end_time }
	crate::setter! { generator -> Vec<ObjectRef> = ObjectEntity.generator }
	crate::setter! { icon -> Vec<ObjectRef> = ObjectEntity.icon }
	crate::setter! { image -> Vec<ObjectRef> = ObjectEntity.image }
	crate::setter! { in_reply_to -> Vec<ObjectRef> = ObjectEntity.in_reply_to }
	crate::setter! { location -> Vec<ObjectRef> = ObjectEntity.location }
	crate::setter! { published -> Option<DateTime<Utc>> = ObjectEntity.published }
	crate::setter! { replies -> Option<ObjectRef> = ObjectEntity.replies }
	crate::setter! { start_time -> Option<DateTime<Utc>> = ObjectEntity.start_time }
	crate::setter! { summary -> Option<&str> = ObjectEntity.summary }
	crate::setter! { summary_map -> LangString = ObjectEntity.summary }
	crate::setter! { tag -> Vec<ObjectRef> = ObjectEntity.tag }
	crate::setter! { updated -> Option<DateTime<Utc>> = ObjectEntity.updated }
	crate::setter! { url -> Vec<ObjectRef> = ObjectEntity.url }
	crate::setter! { to -> Vec<ObjectRef> = ObjectEntity.to }
	crate::setter! { bto -> Vec<ObjectRef> = ObjectEntity.bto }
	crate::setter! { cc -> Vec<ObjectRef> = ObjectEntity.cc }
	crate::setter! { bcc -> Vec<ObjectRef> = ObjectEntity.bcc }
	crate::setter! { duration -> Option<&str> = ObjectEntity.duration }
	crate::setter! { likes -> Option<ObjectRef> = ObjectEntity.likes }
	crate::setter! { shares -> Option<ObjectRef> = ObjectEntity.shares }
	crate::setter! { source -> Option<serde_json::Value> = ObjectEntity.source }
}

pub trait Place : Object {
	fn accuracy(&self) -> Field<f64> { Err(FieldErr("accuracy")) }
	fn altitude(&self) -> Field<f64> { Err(FieldErr("altitude")) }
	fn latitude(&self) -> Field<f64> { Err(FieldErr("latitude")) }
	fn longitude(&self) -> Field<f64> { Err(FieldErr("longitude")) }
	fn radius(&self) -> Field<f64> { Err(FieldErr("radius")) }
	fn units(&self) -> Field<&str> { Err(FieldErr("units")) }
}

pub trait PlaceMut : ObjectMut {
	fn set_accuracy(self, val: Option<f64>) -> Self;
	fn set_altitude(self, val: Option<f64>) -> Self;
	fn set_latitude(self, val: Option<f64>) -> Self;
	fn set_longitude(self, val: Option<f64>) -> Self;
	fn set_radius(self, val: Option<f64>) -> Self;
	fn set_units(self, val: Option<&str>) -> Self;
}

impl Place for TypeMap {
	crate::getter! { accuracy -> f64 = PlaceEntity.accuracy }
	crate::getter! { altitude -> f64 = PlaceEntity.altitude }
	crate::getter! { latitude -> f64 = PlaceEntity.latitude }
	crate::getter! { longitude -> f64 = PlaceEntity.longitude }
	crate::getter! { radius -> f64 = PlaceEntity.radius }
	crate::getter! { units -> &str = PlaceEntity.units }
}

impl PlaceMut for TypeMap {
	crate::setter! { accuracy -> Option<f64> = PlaceEntity.accuracy }
	crate::setter! { altitude -> Option<f64> = PlaceEntity.altitude }
	crate::setter! { latitude -> Option<f64> = PlaceEntity.latitude }
	crate::setter! { longitude -> Option<f64> = PlaceEntity.longitude }
	crate::setter! { radius -> Option<f64> = PlaceEntity.radius }
	crate::setter! { units -> Option<&str> = PlaceEntity.units }
}

pub trait Tombstone : Object {
	fn former_type(&self) -> Field<&str> { Err(FieldErr("formerType")) }
	fn deleted(&self) -> Field<DateTime<Utc>> { Err(FieldErr("deleted")) }
}

pub trait TombstoneMut : ObjectMut {
	fn set_former_type(self, val: Option<&str>) -> Self;
	fn set_deleted(self, val: Option<DateTime<Utc>>) -> Self;
}

impl Tombstone for TypeMap {
	crate::getter! { former_type -> &str = TombstoneEntity.former_type }
	crate::getter! { deleted -> DateTime<Utc> = TombstoneEntity.deleted }
}

impl TombstoneMut for TypeMap {
	crate::setter! { former_type -> Option<&str> = TombstoneEntity.former_type }
	crate::setter! { deleted -> Option<DateTime<Utc>> = TombstoneEntity.deleted }
}

#[cfg(test)]
mod test {
	use crate::{
		model::{Base, BaseMut, Object, ObjectMut, Place, PlaceMut},
		vocab::{NoteEntity, PlaceEntity},
		FieldErr, LangString, ObjectRef, TypeMap,
	};

	#[test]
	fn setters_extend_the_object() {
		let map = TypeMap::new()
			.set_id(Some("https://example.com/notes/1"))
			.set_content(Some("hello"))
			.set_to(vec![ObjectRef::link(crate::target::PUBLIC)]);
		assert_eq!(map.visible_types(), ["Object"]);
		assert_eq!(map.id(), Ok("https://example.com/notes/1"));
		assert_eq!(map.content(), Ok("hello"));
		assert_eq!(map.to().map(|x| x.len()), Ok(1));
		assert_eq!(map.summary(), Err(FieldErr("summary")));
	}

	#[test]
	fn empty_members_are_missing() {
		let mut map = TypeMap::new();
		map.get_or_create::<NoteEntity>();
		assert_eq!(map.content(), Err(FieldErr("content")));
		assert_eq!(map.tag().map(|x| x.len()), Err(FieldErr("tag")));
		assert_eq!(map.name(), Err(FieldErr("name")));
		assert_eq!(map.base_type(), Ok("Note"));
	}

	#[test]
	fn content_map_setter_keeps_tree() {
		let mut content = LangString::from("hello");
		content.set_lang("it", "ciao");
		let map = TypeMap::new().set_content_map(content);
		assert_eq!(map.content(), Ok("hello"));
		assert_eq!(map.content_map().map(|x| x.get_lang("it-IT")), Ok(Some("ciao")));
	}

	#[test]
	fn place_setters() {
		let mut map = TypeMap::new();
		map.get_or_create::<PlaceEntity>();
		let map = map.set_latitude(Some(36.75)).set_units(Some("km"));
		assert_eq!(map.latitude(), Ok(36.75));
		assert_eq!(map.units(), Ok("km"));
		assert_eq!(map.radius(), Err(FieldErr("radius")));
	}
}
