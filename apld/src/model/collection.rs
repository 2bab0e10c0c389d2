use crate::{
	vocab::{CollectionEntity, OrderedCollectionEntity, OrderedCollectionPageEntity, PagingEntity},
	Field, FieldErr, ObjectRef, TypeMap,
};

use super::{Object, ObjectMut};

pub trait Collection : Object {
	/// A non-negative integer specifying the total number of objects contained by the logical view of the collection.
	/// This number might not reflect the actual number of items serialized within the Collection object instance.
	fn total_items(&self) -> Field<u64> { Err(FieldErr("totalItems")) }
	/// In a paged Collection, indicates the page that contains the most recently updated member items.
	fn current(&self) -> Field<&ObjectRef> { Err(FieldErr("current")) }
	/// In a paged Collection, indicates the furthest preceeding page of items in the collection.
	fn first(&self) -> Field<&ObjectRef> { Err(FieldErr("first")) }
	/// In a paged Collection, indicates the furthest proceeding page of the collection.
	fn last(&self) -> Field<&ObjectRef> { Err(FieldErr("last")) }
	/// Identifies the items contained in a collection. The items might be ordered or unordered.
	fn items(&self) -> Field<&[ObjectRef]> { Err(FieldErr("items")) }
	fn ordered_items(&self) -> Field<&[ObjectRef]> { Err(FieldErr("orderedItems")) }
}

pub trait CollectionMut : ObjectMut {
	fn set_total_items(self, val: Option<u64>) -> Self;
	fn set_current(self, val: Option<ObjectRef>) -> Self;
	fn set_first(self, val: Option<ObjectRef>) -> Self;
	fn set_last(self, val: Option<ObjectRef>) -> Self;
	fn set_items(self, val: Vec<ObjectRef>) -> Self;
	fn set_ordered_items(self, val: Vec<ObjectRef>) -> Self;
}

impl Collection for TypeMap {
	crate::getter! { total_items -> u64 = CollectionEntity.total_items }
	crate::getter! { current -> &ObjectRef = CollectionEntity.current }
	crate::getter! { first -> &ObjectRef = CollectionEntity.first }
	crate::getter! { last -> &ObjectRef = CollectionEntity.last }
	crate::getter! { items -> &[ObjectRef] = CollectionEntity.items }
	crate::getter! { ordered_items -> &[ObjectRef] = OrderedCollectionEntity.ordered_items }
}

impl CollectionMut for TypeMap {
	crate::setter! { total_items -> Option<u64> = CollectionEntity.total_items }
	crate::setter! { current -> Option<ObjectRef> = CollectionEntity.current }
	crate::setter! { first -> Option<ObjectRef> = CollectionEntity.first }
	crate::setter! { last -> Option<ObjectRef> = CollectionEntity.last }
	crate::setter! { items -> Vec<ObjectRef> = CollectionEntity.items }
	crate::setter! { ordered_items -> Vec<ObjectRef> = OrderedCollectionEntity.ordered_items }
}

pub trait CollectionPage : Collection {
	fn part_of(&self) -> Field<&ObjectRef> { Err(FieldErr("partOf")) }
	fn next(&self) -> Field<&ObjectRef> { Err(FieldErr("next")) }
	fn prev(&self) -> Field<&ObjectRef> { Err(FieldErr("prev")) }
	fn start_index(&self) -> Field<u64> { Err(FieldErr("startIndex")) }
}

pub trait CollectionPageMut : CollectionMut {
	fn set_part_of(self, val: Option<ObjectRef>) -> Self;
	fn set_next(self, val: Option<ObjectRef>) -> Self;
	fn set_prev(self, val: Option<ObjectRef>) -> Self;
	fn set_start_index(self, val: Option<u64>) -> Self;
}

impl CollectionPage for TypeMap {
	crate::getter! { part_of -> &ObjectRef = PagingEntity.part_of }
	crate::getter! { next -> &ObjectRef = PagingEntity.next }
	crate::getter! { prev -> &ObjectRef = PagingEntity.prev }
	crate::getter! { start_index -> u64 = OrderedCollectionPageEntity.start_index }
}

impl CollectionPageMut for TypeMap {
	crate::setter! { part_of -> Option<ObjectRef> = PagingEntity.part_of }
	crate::setter! { next -> Option<ObjectRef> = PagingEntity.next }
	crate::setter! { prev -> Option<ObjectRef> = PagingEntity.prev }
	crate::setter! { start_index -> Option<u64> = OrderedCollectionPageEntity.start_index }
}
