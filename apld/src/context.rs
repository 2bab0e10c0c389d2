use crate::error::{ConvertError, ConvertResult};

pub const ACTIVITYSTREAMS: &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY: &str = "https://w3id.org/security/v1";

/// a single `@context` declaration
#[derive(Debug, Clone, PartialEq)]
pub enum ContextEntry {
	/// reference to an external context document
	Iri(String),
	/// inline term definitions, values being IRIs or expanded term objects
	Terms(serde_json::Map<String, serde_json::Value>),
}

impl ContextEntry {
	pub fn iri(iri: &str) -> Self {
		ContextEntry::Iri(iri.to_string())
	}

	/// inline map holding a single `term -> iri` definition
	pub fn term(term: &str, iri: &str) -> Self {
		let mut map = serde_json::Map::new();
		map.insert(term.to_string(), serde_json::Value::String(iri.to_string()));
		ContextEntry::Terms(map)
	}

	fn parse(value: &serde_json::Value) -> ConvertResult<Self> {
		match value {
			serde_json::Value::String(iri) => Ok(ContextEntry::Iri(iri.clone())),
			serde_json::Value::Object(map) => Ok(ContextEntry::Terms(map.clone())),
			_ => Err(ConvertError::Malformed("@context entries must be strings or term maps")),
		}
	}

	fn to_value(&self) -> serde_json::Value {
		match self {
			ContextEntry::Iri(iri) => serde_json::Value::String(iri.clone()),
			ContextEntry::Terms(map) => serde_json::Value::Object(map.clone()),
		}
	}
}

/// Ordered set of context declarations. Adding an entry already present is a no-op, so
/// merging the requirements of many facets never repeats a declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonLdContext {
	entries: Vec<ContextEntry>,
}

impl JsonLdContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// the plain ActivityStreams context
	pub fn activitystreams() -> Self {
		Self::from_iri(ACTIVITYSTREAMS)
	}

	pub fn from_iri(iri: &str) -> Self {
		JsonLdContext { entries: vec![ContextEntry::iri(iri)] }
	}

	/// returns true if the entry was not already declared
	pub fn add(&mut self, entry: ContextEntry) -> bool {
		if self.entries.contains(&entry) {
			return false;
		}
		self.entries.push(entry);
		true
	}

	pub fn merge(&mut self, other: &JsonLdContext) {
		for entry in &other.entries {
			self.add(entry.clone());
		}
	}

	pub fn contains(&self, entry: &ContextEntry) -> bool {
		self.entries.contains(entry)
	}

	pub fn entries(&self) -> &[ContextEntry] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Parses an `@context` value: a string, a term map, or an array of those.
	pub fn parse(value: &serde_json::Value) -> ConvertResult<Self> {
		let mut out = JsonLdContext::new();
		match value {
			serde_json::Value::Array(arr) => {
				for entry in arr {
					out.add(ContextEntry::parse(entry)?);
				}
			},
			x => { out.add(ContextEntry::parse(x)?); },
		}
		Ok(out)
	}

	/// Serializes compacted: a single declaration stays bare, more become an array.
	pub fn to_value(&self) -> Option<serde_json::Value> {
		match self.entries.as_slice() {
			[] => None,
			[single] => Some(single.to_value()),
			many => Some(serde_json::Value::Array(many.iter().map(ContextEntry::to_value).collect())),
		}
	}
}

#[cfg(test)]
mod test {
	use super::{ContextEntry, JsonLdContext, ACTIVITYSTREAMS, SECURITY};

	#[test]
	fn adding_is_set_union() {
		let mut ctx = JsonLdContext::activitystreams();
		assert!(!ctx.add(ContextEntry::iri(ACTIVITYSTREAMS)));
		assert!(ctx.add(ContextEntry::iri(SECURITY)));
		assert!(ctx.add(ContextEntry::term("Hashtag", "as:Hashtag")));
		assert!(!ctx.add(ContextEntry::term("Hashtag", "as:Hashtag")));
		assert_eq!(ctx.len(), 3);
	}

	#[test]
	fn single_entry_compacts_to_bare_value() {
		let ctx = JsonLdContext::activitystreams();
		assert_eq!(ctx.to_value(), Some(serde_json::json!(ACTIVITYSTREAMS)));
		let mut ctx = ctx;
		ctx.add(ContextEntry::iri(SECURITY));
		assert_eq!(ctx.to_value(), Some(serde_json::json!([ACTIVITYSTREAMS, SECURITY])));
		assert_eq!(JsonLdContext::new().to_value(), None);
	}

	#[test]
	fn parses_every_supported_shape() {
		let ctx = JsonLdContext::parse(&serde_json::json!([
			ACTIVITYSTREAMS,
			{ "sensitive": "as:sensitive" },
			ACTIVITYSTREAMS,
		])).unwrap();
		assert_eq!(ctx.len(), 2);
		assert!(ctx.contains(&ContextEntry::term("sensitive", "as:sensitive")));
		assert!(JsonLdContext::parse(&serde_json::json!(ACTIVITYSTREAMS)).is_ok());
		assert!(JsonLdContext::parse(&serde_json::json!(12)).is_err());
		assert!(JsonLdContext::parse(&serde_json::json!([[ACTIVITYSTREAMS]])).is_err());
	}
}
