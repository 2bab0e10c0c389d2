use super::ObjectEntity;
use crate::{context::{ContextEntry, JsonLdContext, SECURITY}, ObjectRef};

crate::facet! {
	/// ActivityPub actor members. Nameless: reached through the concrete actor types, or by
	/// narrowing any object exposing both an inbox and an outbox.
	pub struct ActorEntity : ObjectEntity {
		inbox: Option<ObjectRef> = "inbox",
		outbox: Option<ObjectRef> = "outbox",
		following: Option<ObjectRef> = "following",
		followers: Option<ObjectRef> = "followers",
		liked: Option<ObjectRef> = "liked",
		streams: Vec<ObjectRef> = "streams",
		preferred_username: Option<String> = "preferredUsername",
		/// `{ sharedInbox, proxyUrl, ... }`, kept as is
		endpoints: Option<serde_json::Value> = "endpoints",

		// extensions
		/// `{ id, owner, publicKeyPem }` from the security vocabulary
		public_key: Option<serde_json::Value> = "publicKey",
		discoverable: Option<bool> = "discoverable",
	}
	context {
		let mut ctx = JsonLdContext::activitystreams();
		ctx.add(ContextEntry::iri(SECURITY));
		ctx
	}
}

crate::facet! { pub struct ApplicationEntity as "Application" shadows "Object" : ActorEntity {} }
crate::facet! { pub struct GroupEntity as "Group" shadows "Object" : ActorEntity {} }
crate::facet! { pub struct OrganizationEntity as "Organization" shadows "Object" : ActorEntity {} }
crate::facet! { pub struct PersonEntity as "Person" shadows "Object" : ActorEntity {} }
crate::facet! { pub struct ServiceEntity as "Service" shadows "Object" : ActorEntity {} }
