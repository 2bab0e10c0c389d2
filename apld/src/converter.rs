use serde_json::Value;

use crate::{
	config::{Config, WriteConfig},
	context::JsonLdContext,
	error::{ConvertError, ConvertResult},
	facet::{FacetKind, JsonObject},
	vocab::LinkEntity,
	ObjectRef, Registry, TypeMap,
};

/// JSON ⇄ [`TypeMap`] codec.
///
/// Holds no state besides its configuration and a borrowed [`Registry`]: every call is
/// independent and a failing read never yields a partial object.
#[derive(Debug, Clone)]
pub struct Converter<'r> {
	registry: &'r Registry,
	config: Config,
}

impl<'r> Converter<'r> {
	pub fn new(registry: &'r Registry, config: Config) -> Self {
		Converter { registry, config }
	}

	pub fn registry(&self) -> &Registry {
		self.registry
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn read(&self, json: &str) -> ConvertResult<TypeMap> {
		let value: Value = serde_json::from_str(json)?;
		self.read_value(&value)
	}

	/// same as [`Converter::read`], for fetched response bodies
	pub fn read_slice(&self, json: &[u8]) -> ConvertResult<TypeMap> {
		let value: Value = serde_json::from_slice(json)?;
		self.read_value(&value)
	}

	pub fn read_value(&self, value: &Value) -> ConvertResult<TypeMap> {
		self.read_node(value, 0)
	}

	fn read_node(&self, value: &Value, depth: usize) -> ConvertResult<TypeMap> {
		if depth > self.config.read.max_depth {
			return Err(ConvertError::TooDeep(self.config.read.max_depth));
		}
		match value {
			Value::String(href) => Ok(TypeMap::link(href)),
			Value::Object(object) => self.read_object(object, depth),
			_ => Err(ConvertError::Malformed("expected a link or an object")),
		}
	}

	fn read_object(&self, object: &JsonObject, depth: usize) -> ConvertResult<TypeMap> {
		let context = match object.get("@context") {
			None | Some(Value::Null) => JsonLdContext::from_iri(&self.config.read.default_context),
			Some(ctx) => JsonLdContext::parse(ctx)?,
		};

		let mut kinds: Vec<FacetKind> = Vec::new();
		let mut unmapped: Vec<&str> = Vec::new();
		for name in type_names(object)? {
			match self.registry.resolve(name) {
				Some(kind) => if !kinds.contains(&kind) { kinds.push(kind) },
				None => {
					tracing::debug!("no facet registered for type '{name}', keeping it as is");
					unmapped.push(name);
				},
			}
		}
		let base = self.registry.base();
		if !kinds.contains(&base) {
			kinds.push(base);
		}

		let cx = Decoder { converter: self, depth };
		let mut map = TypeMap::with_context(context);
		for kind in kinds {
			let narrowed = self.narrow(kind, object)?;
			for kind in std::iter::once(narrowed).chain(narrowed.ancestors()) {
				if map.has_kind(kind) {
					continue;
				}
				let entity = kind.read(object, &cx)?;
				let leftover = object
					.iter()
					.filter(|(k, _)| !is_keyword(k) && !entity.accepts(k))
					.map(|(k, v)| (k.clone(), v.clone()))
					.collect();
				map.add_parsed(entity, leftover);
			}
		}

		for name in unmapped {
			map.add_unmapped_type(name);
		}

		Ok(map)
	}

	fn narrow(&self, kind: FacetKind, object: &JsonObject) -> ConvertResult<FacetKind> {
		let limit = self.config.read.narrowing_limit;
		let mut current = kind;
		let mut steps = 0;
		while let Some(next) = current.narrow(object) {
			if steps == limit {
				tracing::warn!("narrowing from {kind} still going after {limit} steps, stopped at {current}");
				return Err(ConvertError::NonterminatingNarrowing { kind: kind.label(), limit });
			}
			tracing::trace!("narrowing {current} to {next}");
			current = next;
			steps += 1;
		}
		Ok(current)
	}

	pub fn write(&self, map: &TypeMap) -> ConvertResult<String> {
		let value = self.write_value(map);
		if self.config.write.pretty {
			Ok(serde_json::to_string_pretty(&value)?)
		} else {
			Ok(serde_json::to_string(&value)?)
		}
	}

	pub fn write_value(&self, map: &TypeMap) -> Value {
		write_node(&self.config.write, map, 0)
	}
}

fn is_keyword(member: &str) -> bool {
	member == "@context" || member == "type"
}

fn type_names(object: &JsonObject) -> ConvertResult<Vec<&str>> {
	match object.get("type") {
		None | Some(Value::Null) => Ok(Vec::new()),
		Some(Value::String(name)) => Ok(vec![name.as_str()]),
		Some(Value::Array(arr)) => arr
			.iter()
			.map(|x| x.as_str().ok_or(ConvertError::Malformed("type array must only hold strings")))
			.collect(),
		Some(_) => Err(ConvertError::Malformed("type must be a string or an array of strings")),
	}
}

fn write_node(config: &WriteConfig, map: &TypeMap, depth: usize) -> Value {
	if config.compact_links && map.is_bare_link() {
		if let Some(href) = map.get::<LinkEntity>().and_then(|x| x.href.as_deref()) {
			return Value::String(href.to_string());
		}
	}

	let mut out = JsonObject::new();

	if depth == 0 || config.nested_context || *map.ld_context() != JsonLdContext::activitystreams() {
		if let Some(ctx) = map.ld_context().to_value() {
			out.insert("@context".to_string(), ctx);
		}
	}

	match map.visible_types() {
		[] => {},
		[single] => { out.insert("type".to_string(), Value::String(single.clone())); },
		many => {
			out.insert(
				"type".to_string(),
				Value::Array(many.iter().cloned().map(Value::String).collect()),
			);
		},
	}

	for (k, v) in map.extension_properties() {
		out.insert(k.clone(), v.clone());
	}

	let cx = Encoder { config, depth };
	for facet in map.facets() {
		facet.write_into(&mut out, &cx);
	}

	Value::Object(out)
}

/// Handed to facets while reading, so nested objects go through the same pipeline.
pub struct Decoder<'a> {
	converter: &'a Converter<'a>,
	depth: usize,
}

impl Decoder<'_> {
	/// nesting level of the object being read, 0 for the document root
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Reads a nested object or link found under `member`.
	pub fn linkable(&self, member: &'static str, value: &Value) -> ConvertResult<ObjectRef> {
		match value {
			Value::String(href) => Ok(ObjectRef::link(href)),
			Value::Object(_) => Ok(ObjectRef::from_type_map(self.converter.read_node(value, self.depth + 1)?)),
			_ => Err(ConvertError::shape(member, "object or link")),
		}
	}
}

/// Handed to facets while writing, so nested objects go through the same pipeline.
pub struct Encoder<'a> {
	config: &'a WriteConfig,
	depth: usize,
}

impl Encoder<'_> {
	pub fn depth(&self) -> usize {
		self.depth
	}

	pub fn linkable(&self, value: &ObjectRef) -> Value {
		match value {
			ObjectRef::Link(link) => write_node(self.config, link.type_map(), self.depth + 1),
			ObjectRef::Value(map) => write_node(self.config, map, self.depth + 1),
		}
	}
}
