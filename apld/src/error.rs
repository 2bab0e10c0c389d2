#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("malformed document: {0}")]
	Malformed(&'static str),

	#[error("member '{member}' has wrong shape: expected {expected}")]
	PropertyShape {
		member: String,
		expected: &'static str,
	},

	#[error("narrowing from {kind} did not settle after {limit} steps")]
	NonterminatingNarrowing {
		kind: &'static str,
		limit: usize,
	},

	#[error("document nested deeper than {0} objects")]
	TooDeep(usize),
}

impl ConvertError {
	pub(crate) fn shape(member: &str, expected: &'static str) -> Self {
		ConvertError::PropertyShape { member: member.to_string(), expected }
	}
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	#[error("type name '{name}' claimed by both {first} and {second}")]
	DuplicateRegistration {
		name: &'static str,
		first: &'static str,
		second: &'static str,
	},

	#[error("facet {0} is its own ancestor")]
	CyclicLineage(&'static str),

	#[error("type '{name}' declares unknown base type '{base}'")]
	UnknownBase {
		name: &'static str,
		base: &'static str,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing field '{0}'")]
pub struct FieldErr(pub &'static str);

/// result of a façade getter: the value, or the name of the absent member
pub type Field<T> = Result<T, FieldErr>;
