use crate::{vocab::ActorEntity, Field, FieldErr, ObjectRef, TypeMap};

use super::{Object, ObjectMut};

pub trait Actor : Object {
	fn preferred_username(&self) -> Field<&str> { Err(FieldErr("preferredUsername")) }
	fn inbox(&self) -> Field<&ObjectRef> { Err(FieldErr("inbox")) }
	fn outbox(&self) -> Field<&ObjectRef> { Err(FieldErr("outbox")) }
	fn following(&self) -> Field<&ObjectRef> { Err(FieldErr("following")) }
	fn followers(&self) -> Field<&ObjectRef> { Err(FieldErr("followers")) }
	fn liked(&self) -> Field<&ObjectRef> { Err(FieldErr("liked")) }
	fn streams(&self) -> Field<&[ObjectRef]> { Err(FieldErr("streams")) }
	fn endpoints(&self) -> Field<&serde_json::Value> { Err(FieldErr("endpoints")) }

	// extensions
	fn public_key(&self) -> Field<&serde_json::Value> { Err(FieldErr("publicKey")) }
	fn discoverable(&self) -> Field<bool> { Err(FieldErr("discoverable")) }

	/// `endpoints.sharedInbox`, falling back to the actor's own inbox
	fn shared_inbox(&self) -> Field<&str> {
		if let Some(shared) = self.endpoints().ok().and_then(|x| x.get("sharedInbox")?.as_str()) {
			return Ok(shared);
		}
		self.inbox()?.id().ok_or(FieldErr("inbox"))
	}
}

pub trait ActorMut : ObjectMut {
	fn set_preferred_username(self, val: Option<&str>) -> Self;
	fn set_inbox(self, val: Option<ObjectRef>) -> Self;
	fn set_outbox(self, val: Option<ObjectRef>) -> Self;
	fn set_following(self, val: Option<ObjectRef>) -> Self;
	fn set_followers(self, val: Option<ObjectRef>) -> Self;
	fn set_liked(self, val: Option<ObjectRef>) -> Self;
	fn set_streams(self, val: Vec<ObjectRef>) -> Self;
	fn set_endpoints(self, val: Option<serde_json::Value>) -> Self;
	fn set_public_key(self, val: Option<serde_json::Value>) -> Self;
	fn set_discoverable(self, val: Option<bool>) -> Self;
}

impl Actor for TypeMap {
	crate::getter! { preferred_username -> &str = ActorEntity.preferred_username }
	crate::getter! { inbox -> &ObjectRef = ActorEntity.inbox }
	crate::getter! { outbox -> &ObjectRef = ActorEntity.outbox }
	crate::getter! { following -> &ObjectRef = ActorEntity.following }
	crate::getter! { followers -> &ObjectRef = ActorEntity.followers }
	crate::getter! { liked -> &ObjectRef = ActorEntity.liked }
	crate::getter! { streams -> &[ObjectRef] = ActorEntity.streams }
	crate::getter! { endpoints -> &serde_json::Value = ActorEntity.endpoints }
	crate::getter! { public_key -> &serde_json::Value = ActorEntity.public_key }
	crate::getter! { discoverable -> bool = ActorEntity.discoverable }
}

impl ActorMut for TypeMap {
	crate::setter! { preferred_username -> Option<&str> = ActorEntity.preferred_username }
	crate::setter! { inbox -> Option<ObjectRef> = ActorEntity.inbox }
	crate::setter! { outbox -> Option<ObjectRef> = ActorEntity.outbox }
	crate::setter! { following -> Option<ObjectRef> = ActorEntity.following }
	crate::setter! { followers -> Option<ObjectRef> = ActorEntity.followers }
	crate::setter! { liked -> Option<ObjectRef> = ActorEntity.liked }
	crate::setter! { streams -> Vec<ObjectRef> = ActorEntity.streams }
	crate::setter! { endpoints -> Option<serde_json::Value> = ActorEntity.endpoints }
	crate::setter! { public_key -> Option<serde_json::Value> = ActorEntity.public_key }
	crate::setter! { discoverable -> Option<bool> = ActorEntity.discoverable }
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{model::{Actor, ActorMut}, vocab::PersonEntity, ObjectRef, TypeMap};

	#[test]
	fn shared_inbox_prefers_endpoints() {
		let mut map = TypeMap::new();
		map.get_or_create::<PersonEntity>();
		let map = map.set_inbox(Some(ObjectRef::link("https://example.com/users/alice/inbox")));
		assert_eq!(map.shared_inbox(), Ok("https://example.com/users/alice/inbox"));
		let map = map.set_endpoints(Some(json!({ "sharedInbox": "https://example.com/inbox" })));
		assert_eq!(map.shared_inbox(), Ok("https://example.com/inbox"));
	}
}
