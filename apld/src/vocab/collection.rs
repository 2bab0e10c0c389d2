use super::ObjectEntity;
use crate::ObjectRef;

crate::facet! {
	pub struct CollectionEntity as "Collection" : ObjectEntity {
		total_items: Option<u64> = "totalItems",
		current: Option<ObjectRef> = "current",
		first: Option<ObjectRef> = "first",
		last: Option<ObjectRef> = "last",
		items: Vec<ObjectRef> = "items",
	}
}

crate::facet! {
	pub struct OrderedCollectionEntity as "OrderedCollection" : CollectionEntity {
		/// written even when empty, an empty ordered collection still lists no items
		ordered_items: Vec<ObjectRef> = "orderedItems" always,
	}
}

crate::facet! {
	/// Page navigation, shared by both page types.
	pub struct PagingEntity {
		part_of: Option<ObjectRef> = "partOf",
		next: Option<ObjectRef> = "next",
		prev: Option<ObjectRef> = "prev",
	}
}

crate::facet! { pub struct CollectionPageEntity as "CollectionPage" : CollectionEntity, PagingEntity {} }

crate::facet! {
	pub struct OrderedCollectionPageEntity as "OrderedCollectionPage" : OrderedCollectionEntity, PagingEntity {
		start_index: Option<u64> = "startIndex",
	}
}
