use crate::{model::{Collection, Object}, Field, FieldErr, LinkableSlice, ObjectRef};

/// Counters and media urls, as commonly shown when rendering an object.
pub trait Shortcuts: Object {
	fn likes_count(&self) -> Field<i32> {
		count(self.likes()?, "likes")
	}

	fn shares_count(&self) -> Field<i32> {
		count(self.shares()?, "shares")
	}

	fn replies_count(&self) -> Field<i32> {
		count(self.replies()?, "replies")
	}

	fn image_url(&self) -> Field<String> {
		media_url(self.image()?, "image")
	}

	fn icon_url(&self) -> Field<String> {
		media_url(self.icon()?, "icon")
	}
}

impl<T: Object> Shortcuts for T {}

/// only embedded collections carry a count, links to them don't
fn count(node: &ObjectRef, member: &'static str) -> Field<i32> {
	let x = node
		.as_value()
		.ok_or(FieldErr(member))?
		.total_items()?
		.min(i32::MAX as u64)
		as i32;
	Ok(x)
}

fn media_url(nodes: &[ObjectRef], member: &'static str) -> Field<String> {
	let id = match nodes.first().ok_or(FieldErr(member))? {
		ObjectRef::Link(link) => link.href(),
		ObjectRef::Value(image) => image.url().ok().and_then(|x| x.first_id()),
	};
	Ok(id.ok_or(FieldErr(member))?.to_string())
}
