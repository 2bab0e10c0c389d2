use crate::{vocab::{ActivityEntity, QuestionEntity, TransitiveActivityEntity}, Field, FieldErr, ObjectRef, TypeMap};

use super::{Object, ObjectMut};

pub trait Activity : Object {
	/// Describes one or more entities that either performed or are expected to perform the activity.
	fn actor(&self) -> Field<&[ObjectRef]> { Err(FieldErr("actor")) }
	/// When used within an Activity, describes the direct object of the activity.
	fn object(&self) -> Field<&[ObjectRef]> { Err(FieldErr("object")) }
	/// Describes the indirect object, or target, of the activity.
	fn target(&self) -> Field<&[ObjectRef]> { Err(FieldErr("target")) }
	/// Describes the result of the activity.
	fn result(&self) -> Field<&[ObjectRef]> { Err(FieldErr("result")) }
	/// Describes an indirect object of the activity from which the activity is directed.
	fn origin(&self) -> Field<&[ObjectRef]> { Err(FieldErr("origin")) }
	/// Identifies one or more objects used (or to be used) in the completion of an Activity.
	fn instrument(&self) -> Field<&[ObjectRef]> { Err(FieldErr("instrument")) }
}

pub trait ActivityMut : ObjectMut {
	fn set_actor(self, val: Vec<ObjectRef>) -> Self;
	/// also makes the activity transitive
	fn set_object(self, val: Vec<ObjectRef>) -> Self;
	fn set_target(self, val: Vec<ObjectRef>) -> Self;
	fn set_result(self, val: Vec<ObjectRef>) -> Self;
	fn set_origin(self, val: Vec<ObjectRef>) -> Self;
	fn set_instrument(self, val: Vec<ObjectRef>) -> Self;
}

impl Activity for TypeMap {
	crate::getter! { actor -> &[ObjectRef] = ActivityEntity.actor }
	crate::getter! { object -> &[ObjectRef] = TransitiveActivityEntity.object }
	crate::getter! { target -> &[ObjectRef] = ActivityEntity.target }
	crate::getter! { result -> &[ObjectRef] = ActivityEntity.result }
	crate::getter! { origin -> &[ObjectRef] = ActivityEntity.origin }
	crate::getter! { instrument -> &[ObjectRef] = ActivityEntity.instrument }
}

impl ActivityMut for TypeMap {
	crate::setter! { actor -> Vec<ObjectRef> = ActivityEntity.actor }
	crate::setter! { object -> Vec<ObjectRef> = TransitiveActivityEntity.object }
	crate::setter! { target -> Vec<ObjectRef> = ActivityEntity.target }
	crate::setter! { result -> Vec<ObjectRef> = ActivityEntity.result }
	crate::setter! { origin -> Vec<ObjectRef> = ActivityEntity.origin }
	crate::setter! { instrument -> Vec<ObjectRef> = ActivityEntity.instrument }
}

pub trait Question : Activity {
	fn one_of(&self) -> Field<&[ObjectRef]> { Err(FieldErr("oneOf")) }
	fn any_of(&self) -> Field<&[ObjectRef]> { Err(FieldErr("anyOf")) }
	fn closed(&self) -> Field<&serde_json::Value> { Err(FieldErr("closed")) }
	fn voters_count(&self) -> Field<u64> { Err(FieldErr("votersCount")) }
}

pub trait QuestionMut : ActivityMut {
	fn set_one_of(self, val: Vec<ObjectRef>) -> Self;
	fn set_any_of(self, val: Vec<ObjectRef>) -> Self;
	fn set_closed(self, val: Option<serde_json::Value>) -> Self;
	fn set_voters_count(self, val: Option<u64>) -> Self;
}

impl Question for TypeMap {
	crate::getter! { one_of -> &[ObjectRef] = QuestionEntity.one_of }
	crate::getter! { any_of -> &[ObjectRef] = QuestionEntity.any_of }
	crate::getter! { closed -> &serde_json::Value = QuestionEntity.closed }
	crate::getter! { voters_count -> u64 = QuestionEntity.voters_count }
}

impl QuestionMut for TypeMap {
	crate::setter! { one_of -> Vec<ObjectRef> = QuestionEntity.one_of }
	crate::setter! { any_of -> Vec<ObjectRef> = QuestionEntity.any_of }
	crate::setter! { closed -> Option<serde_json::Value> = QuestionEntity.closed }
	crate::setter! { voters_count -> Option<u64> = QuestionEntity.voters_count }
}

#[cfg(test)]
mod test {
	use crate::{
		model::{Activity, ActivityMut, Base, Question, QuestionMut},
		vocab::{self, CreateEntity, QuestionEntity, TransitiveActivityEntity},
		Config, Converter, LinkableSlice, ObjectRef, TypeMap,
	};

	#[test]
	fn building_a_create() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let mut map = TypeMap::new();
		map.get_or_create::<CreateEntity>();
		let map = map
			.set_actor(vec![ObjectRef::link("https://example.com/users/alice")])
			.set_object(vec![ObjectRef::link("https://example.com/notes/1")]);
		assert_eq!(map.base_type(), Ok("Create"));
		assert_eq!(map.object().map(|x| x.first_id()), Ok(Some("https://example.com/notes/1")));
		assert_eq!(
			converter.write_value(&map),
			serde_json::json!({
				"@context": "https://www.w3.org/ns/activitystreams",
				"type": "Create",
				"actor": ["https://example.com/users/alice"],
				"object": ["https://example.com/notes/1"],
			})
		);
	}

	#[test]
	fn setting_object_makes_activity_transitive() {
		let map = TypeMap::new().set_object(vec![ObjectRef::link("https://example.com/notes/1")]);
		assert!(map.has::<TransitiveActivityEntity>());
		assert_eq!(map.visible_types(), ["Activity"]);
	}

	#[test]
	fn question_votes() {
		let mut map = TypeMap::new();
		map.get_or_create::<QuestionEntity>();
		let map = map.set_voters_count(Some(3));
		assert_eq!(map.voters_count(), Ok(3));
		assert!(map.one_of().is_err());
	}
}
