use crate::{vocab::LinkEntity, Field, FieldErr, TypeMap};

use super::{Base, BaseMut};

pub trait Link : Base {
	fn href(&self) -> Field<&str> { Err(FieldErr("href")) }
	fn rel(&self) -> Field<&[String]> { Err(FieldErr("rel")) }
	fn hreflang(&self) -> Field<&str> { Err(FieldErr("hreflang")) }
	fn height(&self) -> Field<u64> { Err(FieldErr("height")) }
	fn width(&self) -> Field<u64> { Err(FieldErr("width")) }
}

pub trait LinkMut : BaseMut {
	fn set_href(self, val: Option<&str>) -> Self;
	fn set_rel(self, val: Vec<String>) -> Self;
	fn set_hreflang(self, val: Option<&str>) -> Self;
	fn set_height(self, val: Option<u64>) -> Self;
	fn set_width(self, val: Option<u64>) -> Self;
}

impl Link for TypeMap {
	crate::getter! { href -> &str = LinkEntity.href }
	crate::getter! { rel -> &[String] = LinkEntity.rel }
	crate::getter! { hreflang -> &str = LinkEntity.hreflang }
	crate::getter! { height -> u64 = LinkEntity.height }
	crate::getter! { width -> u64 = LinkEntity.width }
}

impl LinkMut for TypeMap {
	crate::setter! { href -> Option<&str> = LinkEntity.href }
	crate::setter! { rel -> Vec<String> = LinkEntity.rel }
	crate::setter! { hreflang -> Option<&str> = LinkEntity.hreflang }
	crate::setter! { height -> Option<u64> = LinkEntity.height }
	crate::setter! { width -> Option<u64> = LinkEntity.width }
}
