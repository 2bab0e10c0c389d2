//! ActivityStreams 2.0 core and extended vocabulary, plus the ActivityPub actor members.

mod activity;
mod actor;
mod base;
mod collection;
mod link;
mod object;

pub use activity::*;
pub use actor::*;
pub use base::BaseEntity;
pub use collection::*;
pub use link::*;
pub use object::*;

use crate::{error::RegistryError, Registry};

/// Registry holding every shipped vocabulary type.
pub fn registry() -> Result<Registry, RegistryError> {
	let builder = Registry::builder()
		.register::<BaseEntity>()
		.register::<LinkEntity>()
		.register::<MentionEntity>()
		.register::<ObjectEntity>()
		.register::<ArticleEntity>()
		.register::<EventEntity>()
		.register::<NoteEntity>()
		.register::<PlaceEntity>()
		.register::<ProfileEntity>()
		.register::<RelationshipEntity>()
		.register::<TombstoneEntity>()
		.register::<DocumentEntity>()
		.register::<AudioEntity>()
		.register::<ImageEntity>()
		.register::<PageEntity>()
		.register::<VideoEntity>()
		.register::<ActorEntity>()
		.register::<ApplicationEntity>()
		.register::<GroupEntity>()
		.register::<OrganizationEntity>()
		.register::<PersonEntity>()
		.register::<ServiceEntity>()
		.register::<ActivityEntity>()
		.register::<TransitiveActivityEntity>()
		.register::<IntransitiveActivityEntity>()
		.register::<AcceptEntity>()
		.register::<TentativeAcceptEntity>()
		.register::<AddEntity>()
		.register::<AnnounceEntity>()
		.register::<ArriveEntity>()
		.register::<BlockEntity>()
		.register::<CreateEntity>()
		.register::<DeleteEntity>()
		.register::<DislikeEntity>()
		.register::<FlagEntity>()
		.register::<FollowEntity>()
		.register::<IgnoreEntity>()
		.register::<InviteEntity>()
		.register::<JoinEntity>()
		.register::<LeaveEntity>()
		.register::<LikeEntity>()
		.register::<ListenEntity>()
		.register::<MoveEntity>()
		.register::<OfferEntity>()
		.register::<QuestionEntity>()
		.register::<ReadEntity>()
		.register::<RejectEntity>()
		.register::<TentativeRejectEntity>()
		.register::<RemoveEntity>()
		.register::<TravelEntity>()
		.register::<UndoEntity>()
		.register::<UpdateEntity>()
		.register::<ViewEntity>()
		.register::<CollectionEntity>()
		.register::<OrderedCollectionEntity>()
		.register::<PagingEntity>()
		.register::<CollectionPageEntity>()
		.register::<OrderedCollectionPageEntity>();

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	let builder = builder.register::<HashtagEntity>();

	builder.build()
}
