use crate::{
	converter::{Decoder, Encoder},
	error::ConvertResult,
	facet::{Facet, JsonObject},
	member::Member,
};

/// Reference to a resource, the only facet of a bare link.
///
/// Written by hand: `href` is identity, so it never forces the object form, and it is always
/// emitted once the object form is chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkEntity {
	pub href: Option<String>,
	pub rel: Vec<String>,
	pub hreflang: Option<String>,
	pub height: Option<u64>,
	pub width: Option<u64>,
}

impl Facet for LinkEntity {
	const TYPE_NAME: Option<&'static str> = Some("Link");

	fn recognizes(member: &str) -> bool {
		matches!(member, "href" | "rel" | "hreflang" | "height" | "width")
	}

	fn read(object: &JsonObject, cx: &Decoder<'_>) -> ConvertResult<Self> {
		Ok(LinkEntity {
			href: Member::read(object, "href", cx)?,
			rel: Member::read(object, "rel", cx)?,
			hreflang: Member::read(object, "hreflang", cx)?,
			height: Member::read(object, "height", cx)?,
			width: Member::read(object, "width", cx)?,
		})
	}

	fn write(&self, out: &mut JsonObject, cx: &Encoder<'_>) {
		self.href.write(out, "href", cx, true);
		self.rel.write(out, "rel", cx, false);
		self.hreflang.write(out, "hreflang", cx, false);
		self.height.write(out, "height", cx, false);
		self.width.write(out, "width", cx, false);
	}

	fn requires_full_form(&self) -> bool {
		!self.rel.is_empty()
			|| self.hreflang.is_some()
			|| self.height.is_some()
			|| self.width.is_some()
	}
}

crate::facet! {
	pub struct MentionEntity as "Mention" : LinkEntity {}
}

#[cfg(feature = "activitypub-miscellaneous-terms")]
crate::facet! {
	/// `#tag` links, not part of the core vocabulary so the term is declared inline
	pub struct HashtagEntity as "Hashtag" : LinkEntity {}
	context {
		let mut ctx = crate::JsonLdContext::activitystreams();
		ctx.add(crate::ContextEntry::term("Hashtag", "as:Hashtag"));
		ctx
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::{LinkEntity, MentionEntity};
	use crate::{vocab, Config, Converter};

	#[test]
	fn mention_keeps_link_members() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read_value(&json!({
			"type": "Mention",
			"href": "https://example.com/users/bob",
			"rel": "me",
			"name": "@bob",
		})).unwrap();
		assert!(map.has::<MentionEntity>());
		assert_eq!(map.visible_types(), ["Mention"]);
		assert!(map.is_type("Link"));
		assert_eq!(map.facet::<LinkEntity>().rel, vec!["me".to_string()]);
		assert!(map.extension_properties().is_empty());
	}

	#[test]
	fn link_object_without_href_writes_null() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read(r#"{"type":"Link","width":32}"#).unwrap();
		let out = converter.write_value(&map);
		assert_eq!(out.get("href"), Some(&serde_json::Value::Null));
		assert_eq!(out["width"], json!(32));
	}

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	#[test]
	fn hashtag_declares_its_term() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read(r##"{"type":"Hashtag","href":"https://example.com/tags/rust","name":"#rust"}"##).unwrap();
		let out = converter.write_value(&map);
		assert_eq!(
			out["@context"],
			json!(["https://www.w3.org/ns/activitystreams", { "Hashtag": "as:Hashtag" }])
		);
		assert_eq!(out["type"], json!("Hashtag"));
	}
}
