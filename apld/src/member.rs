use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::{
	converter::{Decoder, Encoder},
	error::{ConvertError, ConvertResult},
	facet::JsonObject,
	LangString, ObjectRef,
};

/// Codec for one facet property, bound to its json member name.
///
/// `null` members are read as absent. When writing, empty values are suppressed unless the
/// property asks to always be emitted.
pub trait Member: Default {
	fn recognizes(key: &str, member: &str) -> bool {
		key == member
	}

	fn read(object: &JsonObject, key: &'static str, cx: &Decoder<'_>) -> ConvertResult<Self>;

	fn write(&self, out: &mut JsonObject, key: &'static str, cx: &Encoder<'_>, always: bool);

	fn is_populated(&self) -> bool;
}

/// Single json value codec, lifted to `Option<T>` and `Vec<T>` members.
pub trait Codec: Sized {
	fn decode(value: &Value, member: &'static str, cx: &Decoder<'_>) -> ConvertResult<Self>;
	fn encode(&self, cx: &Encoder<'_>) -> Value;
}

fn present<'v>(object: &'v JsonObject, key: &str) -> Option<&'v Value> {
	object.get(key).filter(|x| !x.is_null())
}

impl Codec for String {
	fn decode(value: &Value, member: &'static str, _cx: &Decoder<'_>) -> ConvertResult<Self> {
		value.as_str()
			.map(str::to_string)
			.ok_or(ConvertError::shape(member, "string"))
	}

	fn encode(&self, _cx: &Encoder<'_>) -> Value {
		Value::String(self.clone())
	}
}

impl Codec for u64 {
	fn decode(value: &Value, member: &'static str, _cx: &Decoder<'_>) -> ConvertResult<Self> {
		value.as_u64().ok_or(ConvertError::shape(member, "non-negative integer"))
	}

	fn encode(&self, _cx: &Encoder<'_>) -> Value {
		Value::Number(serde_json::Number::from(*self))
	}
}

/// kept as written, so `15` stays an integer and `15.0` a double
impl Codec for serde_json::Number {
	fn decode(value: &Value, member: &'static str, _cx: &Decoder<'_>) -> ConvertResult<Self> {
		match value {
			Value::Number(x) => Ok(x.clone()),
			_ => Err(ConvertError::shape(member, "number")),
		}
	}

	fn encode(&self, _cx: &Encoder<'_>) -> Value {
		Value::Number(self.clone())
	}
}

impl Codec for bool {
	fn decode(value: &Value, member: &'static str, _cx: &Decoder<'_>) -> ConvertResult<Self> {
		value.as_bool().ok_or(ConvertError::shape(member, "boolean"))
	}

	fn encode(&self, _cx: &Encoder<'_>) -> Value {
		Value::Bool(*self)
	}
}

impl Codec for DateTime<Utc> {
	fn decode(value: &Value, member: &'static str, _cx: &Decoder<'_>) -> ConvertResult<Self> {
		let raw = value.as_str().ok_or(ConvertError::shape(member, "xsd:dateTime string"))?;
		Ok(
			DateTime::parse_from_rfc3339(raw)
				.map_err(|_| ConvertError::shape(member, "xsd:dateTime string"))?
				.with_timezone(&Utc)
		)
	}

	fn encode(&self, _cx: &Encoder<'_>) -> Value {
		Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
	}
}

impl Codec for ObjectRef {
	fn decode(value: &Value, member: &'static str, cx: &Decoder<'_>) -> ConvertResult<Self> {
		cx.linkable(member, value)
	}

	fn encode(&self, cx: &Encoder<'_>) -> Value {
		cx.linkable(self)
	}
}

/// kept verbatim, for members whose structure is not modeled (`endpoints`, `closed`, ...)
impl Codec for Value {
	fn decode(value: &Value, _member: &'static str, _cx: &Decoder<'_>) -> ConvertResult<Self> {
		Ok(value.clone())
	}

	fn encode(&self, _cx: &Encoder<'_>) -> Value {
		self.clone()
	}
}

/// functional property: at most one value, arrays are rejected
impl<T: Codec> Member for Option<T> {
	fn read(object: &JsonObject, key: &'static str, cx: &Decoder<'_>) -> ConvertResult<Self> {
		present(object, key)
			.map(|x| T::decode(x, key, cx))
			.transpose()
	}

	fn write(&self, out: &mut JsonObject, key: &'static str, cx: &Encoder<'_>, always: bool) {
		match self {
			Some(x) => { out.insert(key.to_string(), x.encode(cx)); },
			None if always => { out.insert(key.to_string(), Value::Null); },
			None => {},
		}
	}

	fn is_populated(&self) -> bool {
		self.is_some()
	}
}

/// non-functional property: a single value or an array, always written as an array
impl<T: Codec> Member for Vec<T> {
	fn read(object: &JsonObject, key: &'static str, cx: &Decoder<'_>) -> ConvertResult<Self> {
		match present(object, key) {
			None => Ok(Vec::new()),
			Some(Value::Array(arr)) => arr.iter().map(|x| T::decode(x, key, cx)).collect(),
			Some(x) => Ok(vec![T::decode(x, key, cx)?]),
		}
	}

	fn write(&self, out: &mut JsonObject, key: &'static str, cx: &Encoder<'_>, always: bool) {
		if !self.is_empty() || always {
			out.insert(
				key.to_string(),
				Value::Array(self.iter().map(|x| x.encode(cx)).collect()),
			);
		}
	}

	fn is_populated(&self) -> bool {
		!self.is_empty()
	}
}

/// `key` holds the default value, `keyMap` the tagged variants
impl Member for LangString {
	fn recognizes(key: &str, member: &str) -> bool {
		member == key || member.strip_prefix(key) == Some("Map")
	}

	fn read(object: &JsonObject, key: &'static str, _cx: &Decoder<'_>) -> ConvertResult<Self> {
		let mut out = LangString::new();
		if let Some(value) = present(object, key) {
			let value = value.as_str().ok_or(ConvertError::shape(key, "string"))?;
			out.set_default_value(Some(value.to_string()));
		}
		let map_key = format!("{key}Map");
		if let Some(value) = present(object, &map_key) {
			let map = value.as_object().ok_or(ConvertError::shape(&map_key, "language map"))?;
			for (tag, value) in map {
				let value = value.as_str().ok_or(ConvertError::shape(&map_key, "language map of strings"))?;
				tracing::trace!("reading {map_key} variant for '{tag}'");
				if !out.set_lang(tag, value) {
					return Err(ConvertError::shape(&map_key, "language map"));
				}
			}
		}
		Ok(out)
	}

	fn write(&self, out: &mut JsonObject, key: &'static str, _cx: &Encoder<'_>, always: bool) {
		match self.default_value() {
			Some(value) => { out.insert(key.to_string(), Value::String(value.to_string())); },
			None if always => { out.insert(key.to_string(), Value::Null); },
			None => {},
		}
		let map = self.language_map();
		if !map.is_empty() {
			out.insert(
				format!("{key}Map"),
				Value::Object(map.into_iter().map(|(k, v)| (k, Value::String(v))).collect()),
			);
		}
	}

	fn is_populated(&self) -> bool {
		!self.is_empty()
	}
}

/// Borrowing accessor used by façade getters: `None` when the property is not populated.
pub trait Getter<'a, T> {
	fn field(&'a self) -> Option<T>;
}

impl<'a> Getter<'a, &'a str> for Option<String> {
	fn field(&'a self) -> Option<&'a str> {
		self.as_deref()
	}
}

impl<'a, T> Getter<'a, &'a T> for Option<T> {
	fn field(&'a self) -> Option<&'a T> {
		self.as_ref()
	}
}

impl<'a, T> Getter<'a, &'a [T]> for Vec<T> {
	fn field(&'a self) -> Option<&'a [T]> {
		if self.is_empty() { None } else { Some(self.as_slice()) }
	}
}

impl<'a> Getter<'a, &'a str> for LangString {
	fn field(&'a self) -> Option<&'a str> {
		self.default_value()
	}
}

impl<'a> Getter<'a, f64> for Option<serde_json::Number> {
	fn field(&'a self) -> Option<f64> {
		self.as_ref().and_then(serde_json::Number::as_f64)
	}
}

impl<'a> Getter<'a, &'a LangString> for LangString {
	fn field(&'a self) -> Option<&'a LangString> {
		if self.is_empty() { None } else { Some(self) }
	}
}

macro_rules! copy_getter {
	($($t:ty),*) => {
		$(
			impl<'a> Getter<'a, $t> for Option<$t> {
				fn field(&'a self) -> Option<$t> {
					*self
				}
			}
		)*
	};
}

copy_getter! { u64, bool, DateTime<Utc> }

/// Assignment used by façade setters.
pub trait Setter<T> {
	fn assign(&mut self, val: T);
}

impl<T> Setter<Option<T>> for Option<T> {
	fn assign(&mut self, val: Option<T>) {
		*self = val;
	}
}

impl Setter<Option<&str>> for Option<String> {
	fn assign(&mut self, val: Option<&str>) {
		*self = val.map(str::to_string);
	}
}

/// NaN and infinities cannot be represented and clear the member
impl Setter<Option<f64>> for Option<serde_json::Number> {
	fn assign(&mut self, val: Option<f64>) {
		*self = val.and_then(serde_json::Number::from_f64);
	}
}

impl<T> Setter<Vec<T>> for Vec<T> {
	fn assign(&mut self, val: Vec<T>) {
		*self = val;
	}
}

/// only replaces the default value, tagged variants are kept
impl Setter<Option<&str>> for LangString {
	fn assign(&mut self, val: Option<&str>) {
		self.set_default_value(val.map(str::to_string));
	}
}

impl Setter<LangString> for LangString {
	fn assign(&mut self, val: LangString) {
		*self = val;
	}
}
