use super::ObjectEntity;
use crate::{facet::FacetKind, ObjectRef};

crate::facet! {
	pub struct ActivityEntity as "Activity" : ObjectEntity {
		actor: Vec<ObjectRef> = "actor",
		target: Vec<ObjectRef> = "target",
		result: Vec<ObjectRef> = "result",
		origin: Vec<ObjectRef> = "origin",
		instrument: Vec<ObjectRef> = "instrument",
	}
	narrow(object) {
		if object.get("object").is_some_and(|x| !x.is_null()) {
			Some(FacetKind::of::<TransitiveActivityEntity>())
		} else {
			None
		}
	}
}

crate::facet! {
	/// Activities acting upon an object. Nameless, every concrete transitive type shadows
	/// "Activity" directly.
	pub struct TransitiveActivityEntity : ActivityEntity {
		object: Vec<ObjectRef> = "object",
	}
}

crate::facet! { pub struct IntransitiveActivityEntity as "IntransitiveActivity" : ActivityEntity {} }

macro_rules! transitive {
	($($name:ident as $tname:literal),* $(,)?) => {
		$(
			crate::facet! { pub struct $name as $tname shadows "Activity" : TransitiveActivityEntity {} }
		)*
	};
}

transitive! {
	AcceptEntity as "Accept",
	AddEntity as "Add",
	AnnounceEntity as "Announce",
	CreateEntity as "Create",
	DeleteEntity as "Delete",
	DislikeEntity as "Dislike",
	FlagEntity as "Flag",
	FollowEntity as "Follow",
	IgnoreEntity as "Ignore",
	JoinEntity as "Join",
	LeaveEntity as "Leave",
	LikeEntity as "Like",
	ListenEntity as "Listen",
	MoveEntity as "Move",
	OfferEntity as "Offer",
	ReadEntity as "Read",
	RejectEntity as "Reject",
	RemoveEntity as "Remove",
	UndoEntity as "Undo",
	UpdateEntity as "Update",
	ViewEntity as "View",
}

crate::facet! { pub struct TentativeAcceptEntity as "TentativeAccept" : AcceptEntity {} }
crate::facet! { pub struct TentativeRejectEntity as "TentativeReject" : RejectEntity {} }
crate::facet! { pub struct BlockEntity as "Block" : IgnoreEntity {} }
crate::facet! { pub struct InviteEntity as "Invite" : OfferEntity {} }

crate::facet! { pub struct ArriveEntity as "Arrive" : IntransitiveActivityEntity {} }
crate::facet! { pub struct TravelEntity as "Travel" : IntransitiveActivityEntity {} }

crate::facet! {
	/// Poll: either `oneOf` (single choice) or `anyOf` (multiple choice) is set.
	pub struct QuestionEntity as "Question" : IntransitiveActivityEntity {
		one_of: Vec<ObjectRef> = "oneOf",
		any_of: Vec<ObjectRef> = "anyOf",
		/// a timestamp, a boolean or an object, as found
		closed: Option<serde_json::Value> = "closed",

		// extensions
		voters_count: Option<u64> = "votersCount",
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::{AcceptEntity, ActivityEntity, QuestionEntity, TentativeAcceptEntity, TransitiveActivityEntity};
	use crate::{vocab, Config, Converter, TypeMap};

	#[test]
	fn tentative_accept_hides_every_ancestor() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read_value(&json!({
			"type": "TentativeAccept",
			"actor": "https://example.com/users/alice",
			"object": "https://example.com/activities/follow",
		})).unwrap();
		assert_eq!(map.visible_types(), ["TentativeAccept"]);
		for name in ["Accept", "Activity", "Object"] {
			assert!(map.is_type(name), "missing {name}");
		}
		assert!(map.has::<AcceptEntity>());
		assert!(map.has::<TransitiveActivityEntity>());
		assert_eq!(map.facet::<TransitiveActivityEntity>().object[0].id(), Some("https://example.com/activities/follow"));
	}

	#[test]
	fn accept_and_tentative_accept_together() {
		let mut map = TypeMap::new();
		map.get_or_create::<AcceptEntity>();
		map.get_or_create::<TentativeAcceptEntity>();
		assert_eq!(map.visible_types(), ["TentativeAccept"]);
	}

	#[test]
	fn question_options_are_embedded_notes() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read_value(&json!({
			"type": "Question",
			"name": "What is the answer?",
			"oneOf": [
				{ "type": "Note", "name": "Option A" },
				{ "type": "Note", "name": "Option B" },
			],
			"closed": "2016-05-10T00:00:00Z",
		})).unwrap();
		assert!(map.has::<ActivityEntity>());
		assert!(!map.has::<TransitiveActivityEntity>());
		let question = map.facet::<QuestionEntity>();
		assert_eq!(question.one_of.len(), 2);
		assert!(question.one_of.iter().all(|x| x.is_value()));
		assert_eq!(question.closed, Some(json!("2016-05-10T00:00:00Z")));
		assert_eq!(map.visible_types(), ["Question"]);
	}
}
