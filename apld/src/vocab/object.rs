use chrono::{DateTime, Utc};

use super::{ActorEntity, BaseEntity};
use crate::{facet::FacetKind, LangString, ObjectRef};

crate::facet! {
	pub struct ObjectEntity as "Object" : BaseEntity {
		attachment: Vec<ObjectRef> = "attachment",
		audience: Vec<ObjectRef> = "audience",
		content: LangString = "content",
		context: Vec<ObjectRef> = "context",
		end_time: Option<DateTime<Utc>> = "endTime",
		generator: Vec<ObjectRef> = "generator",
		icon: Vec<ObjectRef> = "icon",
		image: Vec<ObjectRef> = "image",
		in_reply_to: Vec<ObjectRef> = "inReplyTo",
		location: Vec<ObjectRef> = "location",
		published: Option<DateTime<Utc>> = "published",
		replies: Option<ObjectRef> = "replies",
		start_time: Option<DateTime<Utc>> = "startTime",
		summary: LangString = "summary",
		tag: Vec<ObjectRef> = "tag",
		updated: Option<DateTime<Utc>> = "updated",
		url: Vec<ObjectRef> = "url",
		to: Vec<ObjectRef> = "to",
		bto: Vec<ObjectRef> = "bto",
		cc: Vec<ObjectRef> = "cc",
		bcc: Vec<ObjectRef> = "bcc",
		/// xsd:duration, kept as written
		duration: Option<String> = "duration",

		// activitypub
		likes: Option<ObjectRef> = "likes",
		shares: Option<ObjectRef> = "shares",
		/// source markup the content was rendered from, `{ content, mediaType }`
		source: Option<serde_json::Value> = "source",
	}
	narrow(object) {
		let has = |key: &str| object.get(key).is_some_and(|x| !x.is_null());
		if has("inbox") && has("outbox") {
			Some(FacetKind::of::<ActorEntity>())
		} else {
			None
		}
	}
}

crate::facet! { pub struct ArticleEntity as "Article" : ObjectEntity {} }
crate::facet! { pub struct EventEntity as "Event" : ObjectEntity {} }
crate::facet! { pub struct NoteEntity as "Note" : ObjectEntity {} }

crate::facet! {
	pub struct PlaceEntity as "Place" : ObjectEntity {
		accuracy: Option<serde_json::Number> = "accuracy",
		altitude: Option<serde_json::Number> = "altitude",
		latitude: Option<serde_json::Number> = "latitude",
		longitude: Option<serde_json::Number> = "longitude",
		radius: Option<serde_json::Number> = "radius",
		/// "cm", "feet", "inches", "km", "m", "miles" or an IRI
		units: Option<String> = "units",
	}
}

crate::facet! {
	pub struct ProfileEntity as "Profile" : ObjectEntity {
		describes: Option<ObjectRef> = "describes",
	}
}

crate::facet! {
	pub struct RelationshipEntity as "Relationship" : ObjectEntity {
		subject: Option<ObjectRef> = "subject",
		object: Vec<ObjectRef> = "object",
		relationship: Vec<ObjectRef> = "relationship",
	}
}

crate::facet! {
	pub struct TombstoneEntity as "Tombstone" : ObjectEntity {
		former_type: Option<String> = "formerType",
		deleted: Option<DateTime<Utc>> = "deleted",
	}
}

crate::facet! { pub struct DocumentEntity as "Document" : ObjectEntity {} }
crate::facet! { pub struct AudioEntity as "Audio" : DocumentEntity {} }
crate::facet! { pub struct ImageEntity as "Image" : DocumentEntity {} }
crate::facet! { pub struct PageEntity as "Page" : DocumentEntity {} }
crate::facet! { pub struct VideoEntity as "Video" : DocumentEntity {} }

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::{DocumentEntity, ImageEntity, ObjectEntity, PlaceEntity, TombstoneEntity};
	use crate::{vocab, Config, Converter};

	#[test]
	fn place_coordinates() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read_value(&json!({
			"type": "Place",
			"name": "Fresno Area",
			"latitude": 36.75,
			"longitude": 119.7667,
			"radius": 15,
			"units": "miles",
		})).unwrap();
		let place = map.facet::<PlaceEntity>();
		assert_eq!(place.latitude.as_ref().and_then(serde_json::Number::as_f64), Some(36.75));
		assert_eq!(place.radius, Some(serde_json::Number::from(15)));
		assert_eq!(place.units.as_deref(), Some("miles"));
		assert!(map.extension_properties().is_empty());

		let out = converter.write_value(&map);
		assert_eq!(out["radius"], json!(15));
		assert!(out["radius"].is_u64());
		assert_eq!(out["latitude"], json!(36.75));
	}

	#[test]
	fn image_is_a_document() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read(r#"{"type":"Image","url":"https://example.com/cat.png","mediaType":"image/png"}"#).unwrap();
		assert!(map.has::<ImageEntity>());
		assert!(map.has::<DocumentEntity>());
		assert!(map.has::<ObjectEntity>());
		assert_eq!(map.visible_types(), ["Image"]);
		assert!(map.is_type("Document"));
		assert_eq!(map.facet::<ObjectEntity>().url[0].id(), Some("https://example.com/cat.png"));
	}

	#[test]
	fn tombstone_timestamps_are_normalized() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read(r#"{"type":"Tombstone","formerType":"Note","deleted":"2016-05-03T10:30:00+02:00"}"#).unwrap();
		assert_eq!(map.facet::<TombstoneEntity>().former_type.as_deref(), Some("Note"));
		let out = converter.write_value(&map);
		assert_eq!(out["deleted"], json!("2016-05-03T08:30:00Z"));
	}

	#[test]
	fn content_map_survives() {
		let registry = vocab::registry().unwrap();
		let converter = Converter::new(&registry, Config::default());
		let map = converter.read_value(&json!({
			"type": "Note",
			"contentMap": { "en": "A <em>simple</em> note", "zh-Hans": "一段<em>简单的</em>笔记" },
		})).unwrap();
		let content = &map.facet::<ObjectEntity>().content;
		assert_eq!(content.default_value(), None);
		assert_eq!(content.get_lang("zh-Hans"), Some("一段<em>简单的</em>笔记"));
		assert_eq!(content.get_lang("en-US"), Some("A <em>simple</em> note"));
		let out = converter.write_value(&map);
		assert_eq!(out["contentMap"]["zh-Hans"], json!("一段<em>简单的</em>笔记"));
		assert!(out.get("content").is_none());
	}
}
